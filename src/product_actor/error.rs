//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product catalog operations.
///
/// Absence is not an error at this layer: lookups answer `Ok(None)` and
/// callers decide whether a missing product is fatal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
