use crate::model::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity)
/// trait, allowing it to be managed by a
/// [`ResourceActor`](crate::framework::ResourceActor).
///
/// The cart subsystem consumes the catalog purely as a lookup collaborator:
/// given a [`ProductId`], it needs existence, name, and current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Current price. `Decimal` keeps money arithmetic exact; totals are
    /// summed from these values at read time.
    pub price: Decimal,
}

impl Product {
    /// Creates a new Product instance.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
}
