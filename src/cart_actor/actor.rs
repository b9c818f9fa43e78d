//! The cart actor: the single entry point mutating or reading a customer's
//! shopping cart.
//!
//! # State Machine
//!
//! Every order lives in one of two states:
//!
//! ```text
//! OPEN (payment method absent) --complete_order--> CLOSED (payment method bound)
//! ```
//!
//! An order is created `OPEN` the first time a customer touches their cart
//! while no open order exists, and `CLOSED` is terminal: line items of a
//! closed order can no longer change, and a different payment method can
//! never be re-bound (repeating the identical completion call is accepted
//! as an idempotent retry).
//!
//! # Concurrency
//!
//! The actor owns the [`OrderRepository`] and [`LineItemStore`] outright and
//! consumes its mailbox sequentially, so every operation - including the
//! find-or-create of the open order - runs atomically with respect to all
//! others. Two concurrent `add_product` calls for the same customer can
//! never mint two competing open orders.

use crate::cart_actor::line_items::LineItemStore;
use crate::cart_actor::repository::OrderRepository;
use crate::cart_actor::CartError;
use crate::clients::actor_client::ActorClient;
use crate::clients::{CartClient, PaymentClient, ProductClient};
use crate::model::{
    CartView, CustomerId, LineItemView, Order, OrderId, OrderView, PaymentMethodId, ProductId,
};
use rust_decimal::Decimal;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// 404 body for order lookups, deliberately identical for "does not exist"
/// and "belongs to someone else".
pub const ORDER_NOT_FOUND: &str =
    "The requested order does not exist, or you do not have permission to access it.";
pub const PRODUCT_NOT_FOUND: &str = "Product not found.";
pub const PAYMENT_NOT_FOUND: &str = "Payment type not found.";

/// Type alias for the one-shot response channel used by the cart actor.
pub type CartResponse<T> = oneshot::Sender<Result<T, CartError>>;

/// Messages accepted by the cart actor.
///
/// Unlike the generic catalog actors, the cart is not a CRUD resource: its
/// operations are keyed by *customer*, not by entity id, and several of
/// them span the order repository and the line item store in one atomic
/// step. It therefore gets its own request enum with the same
/// channel/oneshot shape as [`ResourceRequest`](crate::framework::ResourceRequest).
#[derive(Debug)]
pub enum CartRequest {
    AddProduct {
        customer: CustomerId,
        product_id: ProductId,
        respond_to: CartResponse<()>,
    },
    RemoveProduct {
        customer: CustomerId,
        order_id: OrderId,
        product_id: ProductId,
        respond_to: CartResponse<()>,
    },
    GetCart {
        customer: CustomerId,
        respond_to: CartResponse<CartView>,
    },
    CompleteOrder {
        customer: CustomerId,
        order_id: OrderId,
        payment_type: PaymentMethodId,
        respond_to: CartResponse<()>,
    },
    ListOrders {
        customer: CustomerId,
        payment_filter: Option<PaymentMethodId>,
        respond_to: CartResponse<Vec<OrderView>>,
    },
    GetOrder {
        customer: CustomerId,
        order_id: OrderId,
        respond_to: CartResponse<OrderView>,
    },
}

/// Dependencies injected into the cart actor at `run()` time: the catalog
/// collaborators used to validate products and payment methods and to
/// resolve line-item prices.
pub type CartContext = (ProductClient, PaymentClient);

/// The actor that owns all cart and order state.
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    orders: OrderRepository,
    line_items: LineItemStore,
}

impl CartActor {
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            orders: OrderRepository::new(),
            line_items: LineItemStore::new(),
        };
        (actor, CartClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    pub async fn run(mut self, context: CartContext) {
        info!("Cart actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddProduct {
                    customer,
                    product_id,
                    respond_to,
                } => {
                    debug!(%customer, %product_id, "AddProduct");
                    let result = self.add_product(&context, &customer, product_id).await;
                    match &result {
                        Ok(()) => info!(%customer, %product_id, "Product added to cart"),
                        Err(e) => warn!(%customer, %product_id, error = %e, "AddProduct failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::RemoveProduct {
                    customer,
                    order_id,
                    product_id,
                    respond_to,
                } => {
                    debug!(%customer, %order_id, %product_id, "RemoveProduct");
                    let result = self.remove_product(&customer, order_id, product_id);
                    match &result {
                        Ok(()) => info!(%customer, %order_id, %product_id, "Product removed"),
                        Err(e) => warn!(%customer, %order_id, error = %e, "RemoveProduct failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::GetCart {
                    customer,
                    respond_to,
                } => {
                    debug!(%customer, "GetCart");
                    let result = self.get_cart(&context, &customer).await;
                    if let Err(e) = &result {
                        warn!(%customer, error = %e, "GetCart failed");
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::CompleteOrder {
                    customer,
                    order_id,
                    payment_type,
                    respond_to,
                } => {
                    debug!(%customer, %order_id, %payment_type, "CompleteOrder");
                    let result = self
                        .complete_order(&context, &customer, order_id, payment_type)
                        .await;
                    match &result {
                        Ok(()) => info!(%customer, %order_id, %payment_type, "Order completed"),
                        Err(e) => warn!(%customer, %order_id, error = %e, "CompleteOrder failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::ListOrders {
                    customer,
                    payment_filter,
                    respond_to,
                } => {
                    debug!(%customer, ?payment_filter, "ListOrders");
                    let result = self.list_orders(&context, &customer, payment_filter).await;
                    if let Err(e) = &result {
                        warn!(%customer, error = %e, "ListOrders failed");
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::GetOrder {
                    customer,
                    order_id,
                    respond_to,
                } => {
                    debug!(%customer, %order_id, "GetOrder");
                    let result = self.get_order(&context, &customer, order_id).await;
                    if let Err(e) = &result {
                        warn!(%customer, %order_id, error = %e, "GetOrder failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!("Cart actor shutdown");
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Resolves the customer's open order, creating one if absent.
    fn get_or_create_open_order(&mut self, customer: &CustomerId) -> Order {
        match self.orders.find_open(customer) {
            Some(order) => order.clone(),
            None => {
                let order = self.orders.create(customer);
                info!(%customer, order_id = %order.id, "Opened new order");
                order
            }
        }
    }

    /// Adds a product to the customer's open order. Idempotent: a product
    /// already in the cart is left alone rather than duplicated.
    async fn add_product(
        &mut self,
        context: &CartContext,
        customer: &CustomerId,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        let (products, _) = context;
        let product = products
            .get(product_id)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
            .ok_or_else(|| CartError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        let order = self.get_or_create_open_order(customer);
        if !self.line_items.exists(order.id, product.id) {
            self.line_items.add(order.id, product.id);
        }
        Ok(())
    }

    /// Removes a product from one of the customer's orders. Removing an
    /// absent product succeeds; mutating a closed order is rejected.
    fn remove_product(
        &mut self,
        customer: &CustomerId,
        order_id: OrderId,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        let order = self
            .orders
            .find_by_id_and_customer(order_id, customer)
            .ok_or_else(|| CartError::NotFound(ORDER_NOT_FOUND.to_string()))?;

        if order.is_closed() {
            return Err(CartError::OrderClosed(format!(
                "Order {} is closed and can no longer be modified.",
                order_id.0
            )));
        }

        self.line_items.remove(order_id, product_id);
        Ok(())
    }

    /// Returns the customer's current cart, creating the open order if
    /// absent so the caller always receives a valid (possibly empty) cart.
    async fn get_cart(
        &mut self,
        context: &CartContext,
        customer: &CustomerId,
    ) -> Result<CartView, CartError> {
        let order = self.get_or_create_open_order(customer);
        let (line_items, total) = self.resolve_line_items(context, order.id).await?;
        Ok(CartView {
            id: order.id,
            size: line_items.len(),
            line_items,
            total: format_total(total),
        })
    }

    /// Binds a payment method to an order: the sole OPEN -> CLOSED
    /// transition. Repeating the identical call is an accepted idempotent
    /// retry; binding a *different* payment method to a closed order is
    /// rejected.
    async fn complete_order(
        &mut self,
        context: &CartContext,
        customer: &CustomerId,
        order_id: OrderId,
        payment_type: PaymentMethodId,
    ) -> Result<(), CartError> {
        let order = self
            .orders
            .find_by_id_and_customer(order_id, customer)
            .cloned()
            .ok_or_else(|| CartError::NotFound(ORDER_NOT_FOUND.to_string()))?;

        let (_, payments) = context;
        let payment = payments
            .get(payment_type)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
            // A payment method owned by someone else is reported exactly
            // like a missing one.
            .filter(|p| p.customer == *customer)
            .ok_or_else(|| CartError::NotFound(PAYMENT_NOT_FOUND.to_string()))?;

        match order.payment_method {
            None => {
                self.orders.set_payment_method(order_id, payment.id);
                Ok(())
            }
            Some(existing) if existing == payment.id => Ok(()),
            Some(_) => Err(CartError::OrderClosed(format!(
                "Order {} is already closed with a different payment method.",
                order_id.0
            ))),
        }
    }

    /// Lists the customer's closed orders in creation order, optionally
    /// filtered by payment method.
    async fn list_orders(
        &self,
        context: &CartContext,
        customer: &CustomerId,
        payment_filter: Option<PaymentMethodId>,
    ) -> Result<Vec<OrderView>, CartError> {
        let orders: Vec<Order> = self
            .orders
            .find_closed(customer, payment_filter)
            .into_iter()
            .cloned()
            .collect();

        let mut views = Vec::with_capacity(orders.len());
        for order in orders {
            views.push(self.order_view(context, &order).await?);
        }
        Ok(views)
    }

    /// Returns a single order (open or closed) owned by the caller.
    async fn get_order(
        &self,
        context: &CartContext,
        customer: &CustomerId,
        order_id: OrderId,
    ) -> Result<OrderView, CartError> {
        let order = self
            .orders
            .find_by_id_and_customer(order_id, customer)
            .cloned()
            .ok_or_else(|| CartError::NotFound(ORDER_NOT_FOUND.to_string()))?;
        self.order_view(context, &order).await
    }

    // -----------------------------------------------------------------------
    // View building
    // -----------------------------------------------------------------------

    async fn order_view(
        &self,
        context: &CartContext,
        order: &Order,
    ) -> Result<OrderView, CartError> {
        let (line_items, total) = self.resolve_line_items(context, order.id).await?;
        Ok(OrderView {
            id: order.id,
            created_date: order.created_date,
            payment_type: order.payment_method,
            size: line_items.len(),
            line_items,
            total: format_total(total),
        })
    }

    /// Resolves an order's line items against the product catalog and sums
    /// their prices.
    async fn resolve_line_items(
        &self,
        context: &CartContext,
        order_id: OrderId,
    ) -> Result<(Vec<LineItemView>, Decimal), CartError> {
        let (products, _) = context;
        let items = self.line_items.list(order_id).to_vec();

        let mut views = Vec::with_capacity(items.len());
        let mut total = Decimal::ZERO;
        for item in items {
            let product = products
                .get(item.product)
                .await
                .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
                // Products are never deleted, so a dangling line item means
                // the stores have diverged.
                .ok_or_else(|| {
                    CartError::ActorCommunicationError(format!(
                        "line item {} references unknown product {}",
                        item.id, item.product
                    ))
                })?;
            total += product.price;
            views.push(LineItemView {
                id: item.id,
                product,
            });
        }
        Ok((views, total))
    }
}

/// Formats a money total to exactly two decimal places.
fn format_total(total: Decimal) -> String {
    format!("{:.2}", total)
}
