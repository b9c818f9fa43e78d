//! Order and line-item types for the cart subsystem.
//!
//! An [`Order`] is one cart-or-completed-purchase. While its
//! `payment_method` is `None` it is the customer's single **open order**
//! (their cart); assigning a payment method closes it, permanently. A
//! [`LineItem`] records that a given product belongs to a given order.

use crate::model::{CustomerId, LineItemId, OrderId, PaymentMethodId, Product, ProductId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents one cart-or-completed-purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer: CustomerId,
    pub created_date: DateTime<Utc>,
    /// `None` while the order is open (it is the customer's cart);
    /// `Some` once the order has been completed. Never unset.
    pub payment_method: Option<PaymentMethodId>,
}

impl Order {
    /// Creates a new open Order for a customer, stamped with the current time.
    pub fn open(id: OrderId, customer: CustomerId) -> Self {
        Self {
            id,
            customer,
            created_date: Utc::now(),
            payment_method: None,
        }
    }

    /// An order is closed once a payment method has been bound to it.
    pub fn is_closed(&self) -> bool {
        self.payment_method.is_some()
    }
}

/// Records that a given order contains a given product.
///
/// The cart actor deduplicates on (order, product): adding a product that is
/// already in the open order is a no-op, never a duplicate row.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: LineItemId,
    pub order: OrderId,
    pub product: ProductId,
}

// ---------------------------------------------------------------------------
// Read models returned to callers
// ---------------------------------------------------------------------------

/// A line item with its product data resolved, as rendered to callers.
#[derive(Debug, Clone, Serialize)]
pub struct LineItemView {
    pub id: LineItemId,
    pub product: Product,
}

/// The customer's current cart: the open order plus its resolved line items.
///
/// `total` is the sum of line-item product prices, always formatted to two
/// decimal places (`"0.00"` for an empty cart).
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub id: OrderId,
    pub size: usize,
    pub line_items: Vec<LineItemView>,
    pub total: String,
}

/// A single order as rendered to callers, open or closed.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub created_date: DateTime<Utc>,
    /// Bound payment method, `None` while the order is still open.
    pub payment_type: Option<PaymentMethodId>,
    pub size: usize,
    pub line_items: Vec<LineItemView>,
    pub total: String,
}
