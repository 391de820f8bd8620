use chrono::{Duration, TimeZone, Utc};
use restaurant_ops::clients::{ActorClient, OrderClient, PaymentClient};
use restaurant_ops::framework::{mock::MockClient, FrameworkError, ManualClock};
use restaurant_ops::model::{
    Order, OrderCreate, OrderDraft, OrderId, OrderStatus, Payment, PaymentId, PaymentMethod,
    Priority,
};
use restaurant_ops::order_actor::OrderError;
use restaurant_ops::payment_actor::PaymentError;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Real Order actor driven by a manual clock.
///
/// Ids come from the store in sequence and creation time comes from the clock, never from
/// the caller.
#[tokio::test]
async fn test_order_actor_assigns_ids_and_timestamps() {
    let start = Utc.with_ymd_and_hms(2024, 5, 10, 10, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let (order_actor, order_client) = restaurant_ops::order_actor::new(8, clock.clone());
    let actor_handle = tokio::spawn(order_actor.run(()));

    let first = order_client
        .place_order(OrderCreate::new("1x Kottu", Decimal::from(850)))
        .await
        .expect("Failed to place first order");
    clock.advance(Duration::minutes(3));
    let second = order_client
        .place_order(OrderCreate::new("1x Coca Cola", Decimal::from(200)))
        .await
        .expect("Failed to place second order");

    assert_eq!(first, OrderId(1));
    assert_eq!(second.to_string(), "order_2");

    let order = order_client.get(second).await.unwrap().expect("Order not found");
    assert_eq!(order.created_at, start + Duration::minutes(3));
    assert_eq!(order.customer_name, "Walk-in Customer");

    // Validation failures never consume an id.
    let rejected = order_client
        .place_draft(&OrderDraft {
            items: "1x Watalappan".into(),
            total: "abc".into(),
            ..OrderDraft::default()
        })
        .await;
    assert_eq!(
        rejected,
        Err(OrderError::Validation("Total must be a number".into()))
    );
    let third = order_client
        .place_order(OrderCreate::new("1x Watalappan", Decimal::from(450)))
        .await
        .unwrap();
    assert_eq!(third, OrderId(3));

    // Priority and status move independently.
    let prioritized = order_client
        .set_priority(first, Priority::High, None)
        .await
        .unwrap();
    assert_eq!(prioritized.status, OrderStatus::Pending);
    let advanced = order_client
        .advance(first, OrderStatus::Preparing, None)
        .await
        .unwrap();
    assert_eq!(advanced.priority, Some(Priority::High));
    assert_eq!(advanced.version, 2);

    // Removal is destructive.
    order_client.delete(second).await.unwrap();
    assert_eq!(order_client.get(second).await.unwrap(), None);
    assert_eq!(
        order_client.delete(second).await,
        Err(OrderError::NotFound("order_2".into()))
    );

    drop(order_client);
    actor_handle.await.expect("Actor task panicked");
}

/// The store going away surfaces as a persistence failure, not a panic.
#[tokio::test]
async fn test_order_client_maps_store_failures() {
    let mut orders = MockClient::<Order>::new();
    orders
        .expect_action()
        .return_err(FrameworkError::ActorDropped);
    orders.expect_get().return_err(FrameworkError::ActorClosed);

    let client = OrderClient::new(orders.client());
    let err = client
        .advance(OrderId(1), OrderStatus::Preparing, None)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Persistence(_)));
    assert!(matches!(
        client.get(OrderId(1)).await,
        Err(OrderError::Persistence(_))
    ));

    orders.verify();
}

/// `for_order` looks the payment up in the listed collection.
#[tokio::test]
async fn test_payment_lookup_by_order() {
    let paid_at = Utc.with_ymd_and_hms(2024, 5, 10, 20, 0, 0).unwrap();
    let payment = Payment {
        id: PaymentId(1),
        order_id: OrderId(7),
        customer_name: "Dilani".into(),
        items: "2x Kottu".into(),
        subtotal: Decimal::from(1700),
        tip: Decimal::ZERO,
        discount: Decimal::ZERO,
        final_amount: Decimal::from(1700),
        method: PaymentMethod::Cash,
        splits: Vec::new(),
        notes: None,
        created_at: paid_at,
    };

    let mut payments = MockClient::<Payment>::new();
    payments
        .expect_list()
        .return_ok(Arc::new(vec![payment.clone()]));
    payments.expect_list().return_ok(Arc::new(vec![payment]));
    payments.expect_list().return_err(FrameworkError::ActorClosed);

    let client = PaymentClient::new(payments.client());
    let found = client.for_order(OrderId(7)).await.unwrap();
    assert_eq!(found.map(|p| p.id), Some(PaymentId(1)));
    assert_eq!(client.for_order(OrderId(8)).await.unwrap(), None);
    assert!(matches!(
        client.for_order(OrderId(7)).await,
        Err(PaymentError::Persistence(_))
    ));

    payments.verify();
}
