//! In-memory persistence and lookup of [`Order`]s.
//!
//! The repository guarantees the invariant the cart actor relies on: at
//! most one order per customer has no payment method bound (the customer's
//! open order). The cart actor is the only writer, and it processes
//! requests sequentially, so find-or-create of the open order is atomic;
//! [`OrderRepository::create`] additionally re-checks for an existing open
//! order and returns it instead of creating a competitor.

use crate::model::{CustomerId, Order, OrderId, PaymentMethodId};
use std::collections::BTreeMap;

/// Holds orders keyed by creation sequence.
///
/// Iterating the underlying `BTreeMap` yields orders in ascending id order,
/// which doubles as creation-time ascending; [`OrderRepository::find_closed`]
/// leans on this for its stable ordering guarantee.
pub struct OrderRepository {
    orders: BTreeMap<OrderId, Order>,
    next_id: u64,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self {
            orders: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Returns the customer's open order (payment method absent), if any.
    pub fn find_open(&self, customer: &CustomerId) -> Option<&Order> {
        self.orders
            .values()
            .find(|o| o.customer == *customer && !o.is_closed())
    }

    /// Creates a new open order for the customer.
    ///
    /// If an open order already exists the existing one is returned instead,
    /// treating the would-be uniqueness violation as "retry find". Callers
    /// normally check [`find_open`](Self::find_open) first; this guard keeps
    /// the single-open-order invariant intact even if they don't.
    pub fn create(&mut self, customer: &CustomerId) -> Order {
        if let Some(existing) = self.find_open(customer) {
            return existing.clone();
        }
        let id = OrderId(self.next_id);
        self.next_id += 1;
        let order = Order::open(id, customer.clone());
        self.orders.insert(id, order.clone());
        order
    }

    /// Looks up an order by id, scoped to the owning customer.
    ///
    /// A foreign or unknown id both yield `None`; ownership is part of the
    /// lookup key so callers never learn whether the id exists for another
    /// customer.
    pub fn find_by_id_and_customer(&self, id: OrderId, customer: &CustomerId) -> Option<&Order> {
        self.orders
            .get(&id)
            .filter(|o| o.customer == *customer)
    }

    /// Returns the customer's closed orders in creation order, optionally
    /// filtered to a specific payment method.
    pub fn find_closed(
        &self,
        customer: &CustomerId,
        payment_filter: Option<PaymentMethodId>,
    ) -> Vec<&Order> {
        self.orders
            .values()
            .filter(|o| o.customer == *customer && o.is_closed())
            .filter(|o| match payment_filter {
                Some(payment) => o.payment_method == Some(payment),
                None => true,
            })
            .collect()
    }

    /// Binds a payment method to an order, closing it. Returns `false` if
    /// the order does not exist.
    pub fn set_payment_method(&mut self, id: OrderId, payment: PaymentMethodId) -> bool {
        match self.orders.get_mut(&id) {
            Some(order) => {
                order.payment_method = Some(payment);
                true
            }
            None => false,
        }
    }

    /// Number of open orders for a customer. Always 0 or 1; exposed so the
    /// invariant can be asserted directly in tests.
    pub fn open_count(&self, customer: &CustomerId) -> usize {
        self.orders
            .values()
            .filter(|o| o.customer == *customer && !o.is_closed())
            .count()
    }
}

impl Default for OrderRepository {
    fn default() -> Self {
        Self::new()
    }
}
