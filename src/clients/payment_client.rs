use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{PaymentMethod, PaymentMethodCreate, PaymentMethodId};
use crate::payment_actor::PaymentError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the PaymentMethod actor.
#[derive(Clone)]
pub struct PaymentClient {
    inner: ResourceClient<PaymentMethod>,
}

impl PaymentClient {
    pub fn new(inner: ResourceClient<PaymentMethod>) -> Self {
        Self { inner }
    }

    /// Registers a new payment method for a customer.
    #[instrument(skip(self))]
    pub async fn create_payment_method(
        &self,
        payment: PaymentMethodCreate,
    ) -> Result<PaymentMethodId, PaymentError> {
        debug!("Sending request");
        self.inner.create(payment).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => PaymentError::ValidationError(msg),
            other => PaymentError::ActorCommunicationError(other.to_string()),
        })
    }
}

#[async_trait]
impl ActorClient<PaymentMethod> for PaymentClient {
    type Error = PaymentError;

    fn inner(&self) -> &ResourceClient<PaymentMethod> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PaymentError::ActorCommunicationError(e.to_string())
    }
}
