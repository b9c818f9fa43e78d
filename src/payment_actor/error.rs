//! Error types for the PaymentMethod actor.

use thiserror::Error;

/// Errors that can occur during payment method operations.
///
/// Absence is not an error at this layer: lookups answer `Ok(None)` and
/// callers decide whether a missing payment method is fatal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The payment method data provided is invalid.
    #[error("Payment method validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PaymentError {
    fn from(msg: String) -> Self {
        PaymentError::ActorCommunicationError(msg)
    }
}
