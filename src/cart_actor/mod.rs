//! Cart lifecycle and line-item management: the order state machine.
//!
//! This is the core of the system. The [`CartActor`] orchestrates the
//! [`OrderRepository`](repository::OrderRepository) and the
//! [`LineItemStore`](line_items::LineItemStore) to implement add-to-cart,
//! remove-from-cart, view-cart, order completion, and the closed-order
//! listing, while enforcing the single-open-order invariant.

pub mod actor;
pub mod error;
pub mod line_items;
pub mod repository;

pub use actor::*;
pub use error::*;

use crate::clients::CartClient;

/// Creates a new cart actor and its client.
pub fn new() -> (CartActor, CartClient) {
    CartActor::new(32)
}
