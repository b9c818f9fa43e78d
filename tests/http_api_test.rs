use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bazaar_api::http::{router, AppState};
use bazaar_api::lifecycle::CartSystem;
use bazaar_api::model::{CustomerId, PaymentMethodCreate, ProductCreate};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Spins up the full actor system, seeds the catalog (Kite at 14.99, Wiffle
/// Ball Bat at 5.00, one Chase payment method for `steve`), and returns the
/// router. The `CartSystem` is returned too so the actors stay alive for
/// the duration of the test.
async fn build_app() -> (Router, CartSystem) {
    let system = CartSystem::new();

    system
        .product_client
        .create_product(ProductCreate {
            name: "Kite".to_string(),
            price: Decimal::new(1499, 2),
        })
        .await
        .expect("Failed to seed product");
    system
        .product_client
        .create_product(ProductCreate {
            name: "Wiffle Ball Bat".to_string(),
            price: Decimal::new(500, 2),
        })
        .await
        .expect("Failed to seed product");
    system
        .payment_client
        .create_payment_method(PaymentMethodCreate {
            customer: CustomerId::from("steve"),
            merchant_name: "Chase".to_string(),
        })
        .await
        .expect("Failed to seed payment method");

    let app = router(AppState {
        cart: system.cart_client.clone(),
    });
    (app, system)
}

fn request(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Token {token}"));
    match body {
        Some(value) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The canonical checkout walk-through: add a product, inspect the cart,
/// bind a payment method, and confirm the next add opens a fresh cart.
#[tokio::test]
async fn test_checkout_scenario() {
    let (app, _system) = build_app().await;

    // POST /cart with product #1 (price 14.99)
    let response = app
        .clone()
        .oneshot(request("POST", "/cart", "steve", Some(json!({"product_id": 1}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // GET /cart: size 1, total "14.99"
    let response = app
        .clone()
        .oneshot(request("GET", "/cart", "steve", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cart = json_body(response).await;
    let order_id = cart["id"].as_u64().unwrap();
    assert_eq!(cart["size"], 1);
    assert_eq!(cart["line_items"].as_array().unwrap().len(), 1);
    assert_eq!(cart["total"], "14.99");

    // PUT /orders/{id} with payment_type 1 closes the order
    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/orders/{order_id}"),
            "steve",
            Some(json!({"payment_type": 1})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // GET /orders/{id} shows the payment type bound
    let response = app
        .clone()
        .oneshot(request("GET", &format!("/orders/{order_id}"), "steve", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let order = json_body(response).await;
    assert_eq!(order["payment_type"], 1);
    assert_eq!(order["total"], "14.99");

    // Adding the same product again lands in a brand new cart
    let response = app
        .clone()
        .oneshot(request("POST", "/cart", "steve", Some(json!({"product_id": 1}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request("GET", "/cart", "steve", None))
        .await
        .unwrap();
    let new_cart = json_body(response).await;
    assert_ne!(new_cart["id"].as_u64().unwrap(), order_id);
    assert_eq!(new_cart["size"], 1);
}

#[tokio::test]
async fn test_add_unknown_product_is_404() {
    let (app, _system) = build_app().await;

    let response = app
        .oneshot(request("POST", "/cart", "steve", Some(json!({"product_id": 999}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Product not found.");
}

#[tokio::test]
async fn test_missing_auth_is_401() {
    let (app, _system) = build_app().await;

    let response = app
        .oneshot(Request::builder().uri("/cart").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_remove_is_idempotent_over_http() {
    let (app, _system) = build_app().await;

    let response = app
        .clone()
        .oneshot(request("POST", "/cart", "steve", Some(json!({"product_id": 1}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request("GET", "/cart", "steve", None))
        .await
        .unwrap();
    let order_id = json_body(response).await["id"].as_u64().unwrap();

    // Remove a product that is not in the cart: still 204
    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/cart/{order_id}"),
            "steve",
            Some(json!({"product_id": 2})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Remove the product that is there, twice: both 204, cart ends empty
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(request(
                "DELETE",
                &format!("/cart/{order_id}"),
                "steve",
                Some(json!({"product_id": 1})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = app
        .oneshot(request("GET", "/cart", "steve", None))
        .await
        .unwrap();
    let cart = json_body(response).await;
    assert_eq!(cart["size"], 0);
    assert_eq!(cart["total"], "0.00");
}

#[tokio::test]
async fn test_foreign_order_is_404() {
    let (app, _system) = build_app().await;

    let response = app
        .clone()
        .oneshot(request("POST", "/cart", "steve", Some(json!({"product_id": 1}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = app
        .clone()
        .oneshot(request("GET", "/cart", "steve", None))
        .await
        .unwrap();
    let order_id = json_body(response).await["id"].as_u64().unwrap();

    // Another caller cannot see or close steve's order
    let response = app
        .clone()
        .oneshot(request("GET", &format!("/orders/{order_id}"), "mallory", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/orders/{order_id}"),
            "mallory",
            Some(json!({"payment_type": 1})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_closed_order_mutation_is_409() {
    let (app, _system) = build_app().await;

    let response = app
        .clone()
        .oneshot(request("POST", "/cart", "steve", Some(json!({"product_id": 1}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = app
        .clone()
        .oneshot(request("GET", "/cart", "steve", None))
        .await
        .unwrap();
    let order_id = json_body(response).await["id"].as_u64().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/orders/{order_id}"),
            "steve",
            Some(json!({"payment_type": 1})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Line-item mutation of the closed order is rejected
    let response = app
        .oneshot(request(
            "DELETE",
            &format!("/cart/{order_id}"),
            "steve",
            Some(json!({"product_id": 1})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_orders_listing_shows_only_closed_orders() {
    let (app, _system) = build_app().await;

    // No closed orders yet: empty array even though a cart exists
    let response = app
        .clone()
        .oneshot(request("POST", "/cart", "steve", Some(json!({"product_id": 1}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = app
        .clone()
        .oneshot(request("GET", "/orders", "steve", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 0);

    // Close the cart; it must now show up in the listing and the filter
    let response = app
        .clone()
        .oneshot(request("GET", "/cart", "steve", None))
        .await
        .unwrap();
    let order_id = json_body(response).await["id"].as_u64().unwrap();
    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/orders/{order_id}"),
            "steve",
            Some(json!({"payment_type": 1})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request("GET", "/orders", "steve", None))
        .await
        .unwrap();
    let orders = json_body(response).await;
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["id"].as_u64().unwrap(), order_id);
    assert_eq!(orders[0]["payment_type"], 1);

    // Filtering by an unused payment id yields nothing
    let response = app
        .oneshot(request("GET", "/orders?payment_id=999", "steve", None))
        .await
        .unwrap();
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 0);
}
