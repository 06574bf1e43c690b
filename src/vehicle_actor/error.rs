//! Error types for the Vehicle actor.

use thiserror::Error;

/// Errors that can occur during vehicle operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VehicleError {
    /// No vehicle with this id.
    #[error("Vehicle not found: {0}")]
    NotFound(String),

    /// The model year is outside `[1886, current year + 1]`.
    #[error("Invalid year")]
    InvalidYear { year: i32, max: i32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for VehicleError {
    fn from(msg: String) -> Self {
        VehicleError::ActorCommunicationError(msg)
    }
}
