//! Error types for the Customer actor.

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// The customer data provided is invalid.
    #[error("{0}")]
    Validation(String),

    /// The store rejected or never acknowledged the write.
    #[error("Customer store error: {0}")]
    Persistence(String),
}

impl From<String> for CustomerError {
    fn from(msg: String) -> Self {
        CustomerError::Persistence(msg)
    }
}
