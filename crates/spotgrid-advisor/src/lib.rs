//! SpotGrid capacity advisor engine.
//!
//! Answers one question: how likely is it that N SPOT instances of a
//! given machine shape can be obtained in a region right now? The engine
//! scores every zone of the region and assembles the results into ranked
//! single-zone options or a single balanced multi-zone placement.
//!
//! # Components
//!
//! - **`classify`** — machine shape → resource family / generation tier
//! - **`scorer`** — per-zone obtainability and uptime metrics
//! - **`assembler`** — compare / balanced recommendation assembly + sorting
//! - **`error`** — configuration error types
//!
//! The engine performs no I/O, holds no state, and uses no randomness at
//! call time: every score is a pure function of the request, so identical
//! inputs yield identical output across calls and across processes. Zone
//! lists are injected by the caller (see `spotgrid-topology`), never
//! fetched here.

pub mod assembler;
pub mod classify;
pub mod error;
pub mod scorer;
pub mod types;

pub use assembler::{advise, sort_by_obtainability};
pub use classify::classify;
pub use error::{AdvisorError, AdvisorResult};
pub use scorer::score_zone;
pub use types::{
    AdviceRequest, CapacityAdvisorResponse, DistributionStrategy, Generation, ProvisioningModel,
    Recommendation, Region, ResourceFamily, Score, ScoreName, ShapeClass, Shard, Zone, ZoneMetric,
};
