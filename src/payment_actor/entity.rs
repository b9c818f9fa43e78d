//! Entity trait implementation for the PaymentMethod domain type.

use crate::framework::ActorEntity;
use crate::model::{PaymentMethod, PaymentMethodCreate, PaymentMethodId};

impl ActorEntity for PaymentMethod {
    type Id = PaymentMethodId;
    type CreateParams = PaymentMethodCreate;

    /// Creates a new PaymentMethod from creation parameters.
    fn from_create_params(id: PaymentMethodId, params: PaymentMethodCreate) -> Result<Self, String> {
        if params.merchant_name.trim().is_empty() {
            return Err("Merchant name must not be empty".to_string());
        }
        Ok(Self::new(id, params.customer, params.merchant_name))
    }
}
