//! Error types for the simulation crate.

use crate::components::PetId;

/// Errors returned by pet and world operations.
///
/// Care actions on a pet whose game is over are not errors; they come back
/// as [`crate::ActionOutcome::Ignored`].
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A caller passed a value outside the operation's domain,
    /// e.g. a zero-hour tick.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("pet name must not be blank")]
    InvalidName,

    #[error("pet not found: {0}")]
    PetNotFound(PetId),

    #[error("no active pet")]
    NoActivePet,
}

pub type SimResult<T> = Result<T, SimError>;
