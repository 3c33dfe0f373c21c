//! SpotGrid zone topology provider.
//!
//! Supplies, for a region, the ordered list of available zones. The
//! advisor engine treats this purely as an injected input list; the
//! provider here ships a built-in table of well-known regions and can
//! overlay it with a TOML file for private or emulated topologies.
//!
//! # Components
//!
//! - **`provider`** — `Topology` table, built-in regions, TOML overrides
//! - **`error`** — topology error types

pub mod error;
pub mod provider;

pub use error::{TopologyError, TopologyResult};
pub use provider::{RegionZones, Topology};
