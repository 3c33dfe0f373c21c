//! Recommendation assembly — compare and balanced placement modes.
//!
//! Given a request and the region's zone list, the assembler decides:
//! 1. Which options to build (one per zone, or one split across all zones)
//! 2. How per-zone metrics combine into recommendation-level scores
//! 3. The response ordering (descending obtainability, stable on ties)

use tracing::{debug, info};

use crate::classify::classify;
use crate::error::{AdvisorError, AdvisorResult};
use crate::scorer::score_zone;
use crate::types::{
    AdviceRequest, CapacityAdvisorResponse, DistributionStrategy, ProvisioningModel,
    Recommendation, Score, ScoreName, ShapeClass, Shard, Zone,
};

/// Assemble capacity advice for a request over the supplied zone list.
///
/// Zones are scored in the order given; that order is what breaks ties in
/// the final ranking and what numbers the options shown to users. An
/// empty zone list is a configuration error, never an empty response.
pub fn advise(req: &AdviceRequest, zones: &[Zone]) -> AdvisorResult<CapacityAdvisorResponse> {
    if zones.is_empty() {
        return Err(AdvisorError::EmptyZoneList {
            region: req.region.clone(),
        });
    }

    let class = classify(&req.machine_type);

    let mut recommendations = match req.strategy {
        DistributionStrategy::Any | DistributionStrategy::SingleZone => {
            compare_zones(req, class, zones)
        }
        DistributionStrategy::Balanced => vec![balance_across_zones(req, class, zones)],
    };

    sort_by_obtainability(&mut recommendations);

    info!(
        region = %req.region,
        machine_type = %req.machine_type,
        count = req.total_count,
        strategy = ?req.strategy,
        options = recommendations.len(),
        "assembled capacity advice"
    );

    Ok(CapacityAdvisorResponse { recommendations })
}

/// Compare mode: one single-shard option per zone, each placing the full
/// request in that zone.
fn compare_zones(req: &AdviceRequest, class: ShapeClass, zones: &[Zone]) -> Vec<Recommendation> {
    zones
        .iter()
        .map(|zone| {
            let metric = score_zone(class, &req.machine_type, &req.region, zone, req.total_count);
            Recommendation {
                scores: metric.as_scores(),
                shards: vec![shard(zone, req, req.total_count)],
            }
        })
        .collect()
}

/// Balanced mode: split the request evenly across all zones into a single
/// multi-shard recommendation.
///
/// Fair split: `total / n` everywhere, with the remainder handed out one
/// instance at a time to the leading zones, so shard counts differ by at
/// most 1 and always sum to the requested total. Zones left with zero
/// instances (request smaller than the zone count) keep their shard and
/// score 1.0 under the zero-demand rule.
///
/// The aggregate is the arithmetic mean of the per-zone metrics at each
/// zone's assigned count. See DESIGN.md for why the mean is not weighted
/// by shard count.
fn balance_across_zones(req: &AdviceRequest, class: ShapeClass, zones: &[Zone]) -> Recommendation {
    let n = zones.len() as u32;
    let base = req.total_count / n;
    let remainder = (req.total_count % n) as usize;

    let mut shards = Vec::with_capacity(zones.len());
    let mut obtainability_sum = 0.0;
    let mut uptime_sum = 0.0;

    for (idx, zone) in zones.iter().enumerate() {
        let count = base + u32::from(idx < remainder);
        let metric = score_zone(class, &req.machine_type, &req.region, zone, count);
        obtainability_sum += metric.obtainability;
        uptime_sum += metric.uptime;
        shards.push(shard(zone, req, count));
    }

    let denom = zones.len() as f64;
    let scores = vec![
        Score {
            name: ScoreName::Obtainability,
            value: obtainability_sum / denom,
        },
        Score {
            name: ScoreName::Uptime,
            value: uptime_sum / denom,
        },
    ];

    debug!(
        region = %req.region,
        zones = zones.len(),
        per_zone_base = base,
        remainder,
        "balanced split"
    );

    Recommendation { scores, shards }
}

fn shard(zone: &Zone, req: &AdviceRequest, count: u32) -> Shard {
    Shard {
        location: zone.clone(),
        machine_type: req.machine_type.clone(),
        count,
        provisioning_model: ProvisioningModel::Spot,
    }
}

/// Stable descending sort by obtainability; ties keep zone-list order.
pub fn sort_by_obtainability(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| {
        b.obtainability()
            .partial_cmp(&a.obtainability())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
