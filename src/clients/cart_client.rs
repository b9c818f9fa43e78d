use crate::cart_actor::{CartError, CartRequest};
use crate::model::{CartView, CustomerId, OrderId, OrderView, PaymentMethodId, ProductId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
///
/// Every method threads the `customer` explicitly; there is no ambient
/// "current user" anywhere in the system. The identity collaborator at the
/// HTTP boundary is the only place a customer is resolved from a token.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    async fn send<T>(
        &self,
        request: CartRequest,
        response: oneshot::Receiver<Result<T, CartError>>,
    ) -> Result<T, CartError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| CartError::ActorCommunicationError("Cart actor closed".to_string()))?;
        response
            .await
            .map_err(|_| CartError::ActorCommunicationError("Cart actor dropped response".to_string()))?
    }

    /// Adds a product to the customer's open order (creating the order if
    /// needed). Idempotent.
    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        customer: CustomerId,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(
            CartRequest::AddProduct {
                customer,
                product_id,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Removes a product from one of the customer's open orders. Removing
    /// an absent product succeeds.
    #[instrument(skip(self))]
    pub async fn remove_product(
        &self,
        customer: CustomerId,
        order_id: OrderId,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(
            CartRequest::RemoveProduct {
                customer,
                order_id,
                product_id,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Returns the customer's current cart, always valid and possibly empty.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, customer: CustomerId) -> Result<CartView, CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(
            CartRequest::GetCart {
                customer,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Completes an order by binding a payment method to it.
    #[instrument(skip(self))]
    pub async fn complete_order(
        &self,
        customer: CustomerId,
        order_id: OrderId,
        payment_type: PaymentMethodId,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(
            CartRequest::CompleteOrder {
                customer,
                order_id,
                payment_type,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Lists the customer's closed orders, optionally filtered by payment
    /// method.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        customer: CustomerId,
        payment_filter: Option<PaymentMethodId>,
    ) -> Result<Vec<OrderView>, CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(
            CartRequest::ListOrders {
                customer,
                payment_filter,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Fetches a single order (open or closed) owned by the customer.
    #[instrument(skip(self))]
    pub async fn get_order(
        &self,
        customer: CustomerId,
        order_id: OrderId,
    ) -> Result<OrderView, CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(
            CartRequest::GetOrder {
                customer,
                order_id,
                respond_to,
            },
            response,
        )
        .await
    }
}
