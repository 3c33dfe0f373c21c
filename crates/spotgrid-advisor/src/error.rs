//! Advisor error types.
//!
//! The engine has exactly one failure class: configuration errors on the
//! call boundary. Classification and scoring are total, so there is no
//! "unsupported shape" or "not found" path — unrecognized shapes degrade
//! to general purpose / legacy instead of failing.

use thiserror::Error;

/// Result type alias for advisor operations.
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Configuration errors surfaced synchronously to the caller.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("no zones available for region: {region}")]
    EmptyZoneList { region: String },

    #[error("unrecognized distribution strategy: {0}")]
    UnknownStrategy(String),
}
