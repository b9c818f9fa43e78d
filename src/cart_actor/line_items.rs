//! In-memory persistence of (order, product) membership.

use crate::model::{LineItem, LineItemId, OrderId, ProductId};
use std::collections::HashMap;

/// Holds the set of "order O contains product P" associations.
///
/// The store itself is a plain membership table; deduplication of repeated
/// adds is the cart actor's job, enforced via [`LineItemStore::exists`]
/// before [`LineItemStore::add`].
pub struct LineItemStore {
    items: HashMap<OrderId, Vec<LineItem>>,
    next_id: u64,
}

impl LineItemStore {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
        }
    }

    /// Returns true if the order already contains the product.
    pub fn exists(&self, order: OrderId, product: ProductId) -> bool {
        self.items
            .get(&order)
            .is_some_and(|items| items.iter().any(|li| li.product == product))
    }

    /// Records that the order contains the product.
    pub fn add(&mut self, order: OrderId, product: ProductId) -> LineItemId {
        let id = LineItemId(self.next_id);
        self.next_id += 1;
        self.items
            .entry(order)
            .or_default()
            .push(LineItem { id, order, product });
        id
    }

    /// Deletes the line item matching (order, product) if present; removing
    /// an absent product is a no-op, not an error.
    pub fn remove(&mut self, order: OrderId, product: ProductId) {
        if let Some(items) = self.items.get_mut(&order) {
            items.retain(|li| li.product != product);
        }
    }

    /// Returns the order's line items in insertion order.
    pub fn list(&self, order: OrderId) -> &[LineItem] {
        self.items.get(&order).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for LineItemStore {
    fn default() -> Self {
        Self::new()
    }
}
