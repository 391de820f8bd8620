//! Error types for the Order actor.

use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Required field missing or malformed. The message is shown to staff as is.
    #[error("{0}")]
    Validation(String),

    /// The requested status is not the immediate successor of the current one.
    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The order changed since the caller last read it.
    #[error("Order was changed by someone else (expected version {expected}, found {actual})")]
    VersionConflict { expected: u64, actual: u64 },

    /// The store rejected or never acknowledged the write.
    #[error("Order store error: {0}")]
    Persistence(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Persistence(msg)
    }
}
