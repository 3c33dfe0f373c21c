//! Error types for the topology provider.

use thiserror::Error;

/// Result type alias for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Errors that can occur while loading or querying a topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("failed to read topology file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse topology file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("region {0} declares no zones")]
    EmptyRegion(String),
}
