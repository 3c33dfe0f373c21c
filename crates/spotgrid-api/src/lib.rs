//! spotgrid-api — REST API for the SpotGrid capacity advisor.
//!
//! Provides axum route handlers that expose the advice engine, the zone
//! topology, and the machine shape catalog to HTTP callers.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/api/v1/regions` | List known regions and their zones |
//! | GET | `/api/v1/regions/{region}/zones` | Zone list for one region |
//! | GET | `/api/v1/machine-types` | List catalog machine types |
//! | POST | `/api/v1/advice` | Run the capacity advisor |

pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use spotgrid_topology::Topology;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub topology: Arc<Topology>,
}

/// Build the complete API router.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/regions", get(handlers::list_regions))
        .route("/api/v1/regions/{region}/zones", get(handlers::list_region_zones))
        .route("/api/v1/machine-types", get(handlers::list_machine_types))
        .route("/api/v1/advice", post(handlers::advise))
        .with_state(state)
}
