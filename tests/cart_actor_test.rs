use bazaar_api::cart_actor::{self, CartError};
use bazaar_api::clients::{CartClient, PaymentClient, ProductClient};
use bazaar_api::framework::mock::MockClient;
use bazaar_api::model::{CustomerId, PaymentMethod, PaymentMethodId, Product, ProductId};
use rust_decimal::Decimal;

/// Integration test: real cart actor with mocked catalog dependencies.
/// This exercises the cart state machine while isolating it from the
/// Product and PaymentMethod actors.
///
/// Pattern: Actor + Mocks
/// - Real cart actor (tests the order/line-item orchestration)
/// - Mocked Product and PaymentMethod clients (deterministic catalog)
#[tokio::test]
async fn test_cart_actor_with_mocked_catalog() {
    let mut product_mock = MockClient::<Product>::new();
    let mut payment_mock = MockClient::<PaymentMethod>::new();

    let kite = Product::new(1u64, "Kite", Decimal::new(1499, 2));

    // add_product validates the product against the catalog...
    product_mock.expect_get(ProductId(1)).return_ok(Some(kite.clone()));
    // ...and get_cart resolves the line item's product again for the view
    product_mock.expect_get(ProductId(1)).return_ok(Some(kite.clone()));

    let product_client = ProductClient::new(product_mock.client());
    let payment_client = PaymentClient::new(payment_mock.client());

    // Real cart actor with injected mock context
    let (actor, cart_client): (_, CartClient) = cart_actor::new();
    tokio::spawn(actor.run((product_client, payment_client)));

    let alice = CustomerId::from("alice");
    cart_client
        .add_product(alice.clone(), ProductId(1))
        .await
        .expect("Add failed");

    let cart = cart_client.get_cart(alice).await.expect("GetCart failed");
    assert_eq!(cart.size, 1);
    assert_eq!(cart.total, "14.99");
    assert_eq!(cart.line_items[0].product.name, "Kite");

    product_mock.verify();
    payment_mock.verify();
}

/// The cart actor refuses products the catalog does not know, without
/// opening an order as a side effect.
#[tokio::test]
async fn test_unknown_product_is_rejected_before_order_creation() {
    let mut product_mock = MockClient::<Product>::new();
    let payment_mock = MockClient::<PaymentMethod>::new();

    product_mock.expect_get(ProductId(42)).return_ok(None);
    // get_cart resolves no products for the empty order it creates

    let (actor, cart_client) = cart_actor::new();
    tokio::spawn(actor.run((
        ProductClient::new(product_mock.client()),
        PaymentClient::new(payment_mock.client()),
    )));

    let alice = CustomerId::from("alice");
    let err = cart_client
        .add_product(alice.clone(), ProductId(42))
        .await
        .unwrap_err();
    assert!(matches!(err, CartError::NotFound(_)), "got {err:?}");

    // The failed add must not have left a line item behind
    let cart = cart_client.get_cart(alice).await.unwrap();
    assert_eq!(cart.size, 0);
    assert_eq!(cart.total, "0.00");

    product_mock.verify();
}

/// Completing an order with a payment method owned by a different customer
/// reports NotFound - ownership is part of the lookup, never leaked.
#[tokio::test]
async fn test_foreign_payment_method_is_not_found() {
    let mut product_mock = MockClient::<Product>::new();
    let mut payment_mock = MockClient::<PaymentMethod>::new();

    let kite = Product::new(1u64, "Kite", Decimal::new(1499, 2));
    product_mock.expect_get(ProductId(1)).return_ok(Some(kite.clone()));
    product_mock.expect_get(ProductId(1)).return_ok(Some(kite));

    // The payment method exists, but belongs to bob
    payment_mock
        .expect_get(PaymentMethodId(7))
        .return_ok(Some(PaymentMethod::new(7u64, "bob", "Chase")));

    let (actor, cart_client) = cart_actor::new();
    tokio::spawn(actor.run((
        ProductClient::new(product_mock.client()),
        PaymentClient::new(payment_mock.client()),
    )));

    let alice = CustomerId::from("alice");
    cart_client.add_product(alice.clone(), ProductId(1)).await.unwrap();
    let order_id = cart_client.get_cart(alice.clone()).await.unwrap().id;

    let err = cart_client
        .complete_order(alice, order_id, PaymentMethodId(7))
        .await
        .unwrap_err();
    assert!(matches!(err, CartError::NotFound(_)), "got {err:?}");

    product_mock.verify();
    payment_mock.verify();
}
