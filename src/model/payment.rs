use crate::model::{CustomerId, PaymentMethodId};
use serde::{Deserialize, Serialize};

/// A payment method registered by a customer.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity)
/// trait, allowing it to be managed by a
/// [`ResourceActor`](crate::framework::ResourceActor).
///
/// The cart subsystem only ever asks two questions of a payment method:
/// does it exist, and does it belong to the customer closing the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    /// Owning customer. Orders may only be completed with a payment method
    /// owned by the same customer.
    pub customer: CustomerId,
    pub merchant_name: String,
}

impl PaymentMethod {
    /// Creates a new PaymentMethod instance.
    pub fn new(
        id: impl Into<PaymentMethodId>,
        customer: impl Into<CustomerId>,
        merchant_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            merchant_name: merchant_name.into(),
        }
    }
}

/// Payload for registering a new payment method.
#[derive(Debug, Clone)]
pub struct PaymentMethodCreate {
    pub customer: CustomerId,
    pub merchant_name: String,
}
