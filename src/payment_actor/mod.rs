//! Payment method resource logic.
//!
//! Completing an order binds one of the customer's payment methods to it;
//! this actor answers the two questions the cart subsystem asks: does the
//! payment method exist, and who owns it.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PaymentClient;
use crate::framework::ResourceActor;
use crate::model::{PaymentMethod, PaymentMethodId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new PaymentMethod actor and its client.
pub fn new() -> (ResourceActor<PaymentMethod>, PaymentClient) {
    let payment_id_counter = Arc::new(AtomicU64::new(1));
    let next_payment_id = move || {
        let id = payment_id_counter.fetch_add(1, Ordering::SeqCst);
        PaymentMethodId(id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_payment_id);
    let client = PaymentClient::new(generic_client);

    (actor, client)
}
