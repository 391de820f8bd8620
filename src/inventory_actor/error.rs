//! Error types for the Inventory actor.

use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The requested inventory item was not found.
    #[error("Inventory item not found: {0}")]
    NotFound(String),

    /// The item data provided is invalid.
    #[error("{0}")]
    Validation(String),

    /// The store rejected or never acknowledged the write.
    #[error("Inventory store error: {0}")]
    Persistence(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::Persistence(msg)
    }
}
