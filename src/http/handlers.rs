//! Request handlers translating the REST surface onto the cart client.
//!
//! Every handler resolves the caller via [`Caller`], threads the customer
//! into the corresponding [`CartClient`](crate::clients::CartClient)
//! operation, and maps [`CartError`](crate::cart_actor::CartError) to a
//! status code through [`ApiError`].

use crate::http::error::ApiError;
use crate::http::identity::Caller;
use crate::http::AppState;
use crate::model::{CartView, OrderId, OrderView, PaymentMethodId, ProductId};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddToCartPayload {
    pub product_id: ProductId,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFromCartPayload {
    pub product_id: ProductId,
}

#[derive(Debug, Deserialize)]
pub struct CompleteOrderPayload {
    pub payment_type: PaymentMethodId,
}

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub payment_id: Option<PaymentMethodId>,
}

/// `POST /cart` - add a product to the caller's open order.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Caller(customer): Caller,
    Json(payload): Json<AddToCartPayload>,
) -> Result<StatusCode, ApiError> {
    state.cart.add_product(customer, payload.product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /cart/{order_id}` - remove a product from an order.
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Caller(customer): Caller,
    Path(order_id): Path<OrderId>,
    Json(payload): Json<RemoveFromCartPayload>,
) -> Result<StatusCode, ApiError> {
    state
        .cart
        .remove_product(customer, order_id, payload.product_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /cart` - the caller's current cart, created on first access.
pub async fn get_cart(
    State(state): State<AppState>,
    Caller(customer): Caller,
) -> Result<Json<CartView>, ApiError> {
    let cart = state.cart.get_cart(customer).await?;
    Ok(Json(cart))
}

/// `PUT /orders/{order_id}` - complete an order by binding a payment method.
pub async fn complete_order(
    State(state): State<AppState>,
    Caller(customer): Caller,
    Path(order_id): Path<OrderId>,
    Json(payload): Json<CompleteOrderPayload>,
) -> Result<StatusCode, ApiError> {
    state
        .cart
        .complete_order(customer, order_id, payload.payment_type)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /orders` - the caller's closed orders, optionally filtered by
/// payment method.
pub async fn list_orders(
    State(state): State<AppState>,
    Caller(customer): Caller,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    let orders = state.cart.list_orders(customer, query.payment_id).await?;
    Ok(Json(orders))
}

/// `GET /orders/{order_id}` - a single order owned by the caller.
pub async fn get_order(
    State(state): State<AppState>,
    Caller(customer): Caller,
    Path(order_id): Path<OrderId>,
) -> Result<Json<OrderView>, ApiError> {
    let order = state.cart.get_order(customer, order_id).await?;
    Ok(Json(order))
}
