//! REST API handlers.
//!
//! Each handler resolves its inputs against the shared topology, runs
//! the pure advice engine where needed, and returns JSON responses.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::warn;

use spotgrid_advisor::{AdviceRequest, AdvisorError, DistributionStrategy};
use spotgrid_topology::TopologyError;

use crate::ApiState;

/// Response wrapper for consistent API format.
#[derive(serde::Serialize)]
struct ApiResponse<T: serde::Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: serde::Serialize> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

fn error_response(msg: &str, status: StatusCode) -> impl IntoResponse {
    (
        status,
        Json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }),
    )
}

// ── Topology ───────────────────────────────────────────────────

/// GET /api/v1/regions
pub async fn list_regions(State(state): State<ApiState>) -> impl IntoResponse {
    let regions: Vec<_> = state.topology.regions().cloned().collect();
    ApiResponse::ok(regions)
}

/// GET /api/v1/regions/{region}/zones
pub async fn list_region_zones(
    State(state): State<ApiState>,
    Path(region): Path<String>,
) -> impl IntoResponse {
    match state.topology.require_zones(&region) {
        Ok(zones) => ApiResponse::ok(zones.to_vec()).into_response(),
        Err(e) => error_response(&e.to_string(), StatusCode::NOT_FOUND).into_response(),
    }
}

// ── Catalog ────────────────────────────────────────────────────

/// GET /api/v1/machine-types
pub async fn list_machine_types() -> impl IntoResponse {
    ApiResponse::ok(spotgrid_catalog::all())
}

// ── Advice ─────────────────────────────────────────────────────

/// Advice request body.
#[derive(serde::Deserialize)]
pub struct AdviceBody {
    pub region: String,
    pub machine_type: String,
    pub count: u32,
    #[serde(default = "default_strategy")]
    pub strategy: DistributionStrategy,
}

fn default_strategy() -> DistributionStrategy {
    DistributionStrategy::Any
}

/// POST /api/v1/advice
pub async fn advise(
    State(state): State<ApiState>,
    Json(body): Json<AdviceBody>,
) -> impl IntoResponse {
    let zones = match state.topology.require_zones(&body.region) {
        Ok(zones) => zones,
        Err(e @ TopologyError::UnknownRegion(_)) => {
            return error_response(&e.to_string(), StatusCode::NOT_FOUND).into_response();
        }
        Err(e) => {
            return error_response(&e.to_string(), StatusCode::BAD_REQUEST).into_response();
        }
    };

    let request = AdviceRequest {
        region: body.region.clone(),
        machine_type: body.machine_type.clone(),
        total_count: body.count,
        strategy: body.strategy,
    };

    match spotgrid_advisor::advise(&request, zones) {
        Ok(response) => ApiResponse::ok(response).into_response(),
        Err(e @ (AdvisorError::EmptyZoneList { .. } | AdvisorError::UnknownStrategy(_))) => {
            warn!(region = %body.region, error = %e, "rejected advice request");
            error_response(&e.to_string(), StatusCode::BAD_REQUEST).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotgrid_topology::Topology;
    use std::sync::Arc;

    fn state() -> ApiState {
        ApiState {
            topology: Arc::new(Topology::builtin()),
        }
    }

    fn advice_body(region: &str) -> AdviceBody {
        AdviceBody {
            region: region.to_string(),
            machine_type: "e2-medium".to_string(),
            count: 10,
            strategy: DistributionStrategy::Any,
        }
    }

    #[tokio::test]
    async fn advice_for_known_region_succeeds() {
        let resp = advise(State(state()), Json(advice_body("us-central1")))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn advice_for_unknown_region_is_404() {
        let resp = advise(State(state()), Json(advice_body("mars-north1")))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn zones_endpoint_resolves_region() {
        let resp = list_region_zones(State(state()), Path("us-east1".to_string()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn zones_endpoint_unknown_region_is_404() {
        let resp = list_region_zones(State(state()), Path("nowhere".to_string()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn machine_types_listing_succeeds() {
        let resp = list_machine_types().await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
