//! Demo entry point: starts the actor system, seeds a small catalog, and
//! serves the HTTP API on port 8000.
//!
//! The seeded data mirrors what a catalog service would normally own: two
//! products for everyone, and one payment method for the `demo` customer
//! (authenticate with `Authorization: Token demo`).

use bazaar_api::http::{router, AppState};
use bazaar_api::lifecycle::{setup_tracing, CartSystem};
use bazaar_api::model::{CustomerId, PaymentMethodCreate, ProductCreate};
use rust_decimal::Decimal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting marketplace backend");
    let system = CartSystem::new();

    // Seed the catalog collaborators so the API is usable out of the box.
    let kite = system
        .product_client
        .create_product(ProductCreate {
            name: "Kite".to_string(),
            price: Decimal::new(1499, 2),
        })
        .await?;
    let bat = system
        .product_client
        .create_product(ProductCreate {
            name: "Wiffle Ball Bat".to_string(),
            price: Decimal::new(500, 2),
        })
        .await?;
    let payment = system
        .payment_client
        .create_payment_method(PaymentMethodCreate {
            customer: CustomerId::from("demo"),
            merchant_name: "Chase".to_string(),
        })
        .await?;
    info!(%kite, %bat, %payment, "Catalog seeded");

    let state = AppState {
        cart: system.cart_client.clone(),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
    info!("Listening on http://127.0.0.1:8000");
    axum::serve(listener, app).await?;

    system.shutdown().await?;
    Ok(())
}
