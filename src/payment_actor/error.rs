//! Error types for the Payment actor.

use thiserror::Error;

/// Errors that can occur during payment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The requested payment was not found.
    #[error("Payment not found: {0}")]
    NotFound(String),

    /// Amounts or split breakdown are inconsistent.
    #[error("{0}")]
    Validation(String),

    /// The order already has a payment on record.
    #[error("Order {0} has already been paid")]
    AlreadyPaid(String),

    /// Recorded payments cannot be changed or removed.
    #[error("Payments cannot be changed once recorded")]
    Immutable,

    /// The store rejected or never acknowledged the write.
    #[error("Payment store error: {0}")]
    Persistence(String),
}

impl From<String> for PaymentError {
    fn from(msg: String) -> Self {
        PaymentError::Persistence(msg)
    }
}
