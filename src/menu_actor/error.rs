//! Error types for the menu actor.

use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuItemError {
    /// No menu item with this id.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A skewer count of zero or less.
    #[error("Invalid skewer count")]
    InvalidSkewerCount(i32),

    /// The seed file could not be read or parsed.
    #[error("Unable to read default menu")]
    SeedUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuItemError {
    fn from(msg: String) -> Self {
        MenuItemError::ActorCommunicationError(msg)
    }
}
