//! Error types for the Menu actor.

use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The menu item data provided is invalid.
    #[error("{0}")]
    Validation(String),

    /// The store rejected or never acknowledged the write.
    #[error("Menu store error: {0}")]
    Persistence(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::Persistence(msg)
    }
}
