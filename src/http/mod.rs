//! HTTP surface for the cart subsystem.
//!
//! | Method | Path               | Body             | Success |
//! |--------|--------------------|------------------|---------|
//! | POST   | `/cart`            | `{product_id}`   | 204     |
//! | DELETE | `/cart/{order_id}` | `{product_id}`   | 204     |
//! | GET    | `/cart`            | —                | 200     |
//! | PUT    | `/orders/{id}`     | `{payment_type}` | 204     |
//! | GET    | `/orders`          | `?payment_id=`   | 200     |
//! | GET    | `/orders/{id}`     | —                | 200     |
//!
//! All routes require `Authorization: Token <token>`. Unknown or foreign
//! resources answer 404; mutating a closed order answers 409.

pub mod error;
pub mod handlers;
pub mod identity;

use crate::clients::CartClient;
use axum::routing::{delete, get, post, put};
use axum::Router;

/// Shared state for all handlers: the cart client is the only entry point
/// the HTTP layer needs.
#[derive(Clone)]
pub struct AppState {
    pub cart: CartClient,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cart", post(handlers::add_to_cart).get(handlers::get_cart))
        .route("/cart/{order_id}", delete(handlers::remove_from_cart))
        .route("/orders", get(handlers::list_orders))
        .route(
            "/orders/{order_id}",
            put(handlers::complete_order).get(handlers::get_order),
        )
        .with_state(state)
}
