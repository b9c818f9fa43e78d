//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that
//! enables [`Product`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId};
use rust_decimal::Decimal;

impl ActorEntity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;

    /// Creates a new Product from creation parameters.
    ///
    /// Rejects empty names and negative prices; the cart total computation
    /// relies on every catalog price being a valid non-negative amount.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Product name must not be empty".to_string());
        }
        if params.price < Decimal::ZERO {
            return Err(format!("Product price must not be negative: {}", params.price));
        }
        Ok(Self::new(id, params.name, params.price))
    }
}
