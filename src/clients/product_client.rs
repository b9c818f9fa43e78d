use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Registers a new product in the catalog.
    #[instrument(skip(self))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(product).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => ProductError::ValidationError(msg),
            other => ProductError::ActorCommunicationError(other.to_string()),
        })
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    /// A missing product is `Ok(None)`, never an error: callers decide
    /// whether absence is fatal.
    #[tokio::test]
    async fn test_get_absent_product_is_ok_none() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(404)).return_ok(None);

        let client = ProductClient::new(mock.client());
        let result = client.get(ProductId(404)).await;
        assert_eq!(result, Ok(None));

        mock.verify();
    }
}
