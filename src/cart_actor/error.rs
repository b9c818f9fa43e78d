//! Error types for the cart actor.

use thiserror::Error;

/// Errors that can occur during cart and order operations.
///
/// Expected failures (`NotFound`, `ValidationError`, `OrderClosed`) are
/// translated to caller-facing responses at the HTTP boundary; anything
/// else surfaces generically without internal detail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The referenced order, product, or payment method does not exist, or
    /// does not belong to the caller. Cross-customer lookups always produce
    /// this variant rather than a "forbidden" error, so callers cannot
    /// probe whether a resource exists for somebody else.
    #[error("{0}")]
    NotFound(String),

    /// The request data provided is invalid.
    #[error("Cart validation error: {0}")]
    ValidationError(String),

    /// The targeted order is closed; closed orders are immutable.
    #[error("{0}")]
    OrderClosed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
