//! End-to-end order lifecycles driven through the public API.

use order_core::{
    Order, OrderError, OrderStatus, PriceCalculator, Product, DEFAULT_CANCEL_REASON,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_total_of_two_products() {
    init_tracing();
    let mut order = Order::new(1);
    order.add_product(Some(Product::new(10, 500)));
    order.add_product(Some(Product::new(11, 250)));

    assert_eq!(order.calculate_total(), 750);
}

#[test]
fn test_paying_empty_order_fails() {
    init_tracing();
    let mut order = Order::new(2);

    let err = order.pay().unwrap_err();

    assert!(matches!(err, OrderError::InvalidState(_)));
    assert_eq!(err.to_string(), "Cannot pay for an order with no products");
}

#[test]
fn test_paying_after_removing_last_product_fails() {
    init_tracing();
    let mut order = Order::new(3);
    order.add_product(Some(Product::new(20, 100)));
    order.remove_product_by_id(20);

    assert!(order.pay().is_err());
    assert_eq!(*order.status(), OrderStatus::Created);
}

#[test]
fn test_cancel_without_reason() {
    init_tracing();
    let mut order = Order::new(4);
    order.add_product(Some(Product::new(30, 100)));
    order.cancel(None);

    assert_eq!(
        *order.status(),
        OrderStatus::Cancelled {
            reason: DEFAULT_CANCEL_REASON.to_string()
        }
    );
}

#[test]
fn test_cancel_with_reason() {
    init_tracing();
    let mut order = Order::new(5);
    order.cancel(Some("budget cut"));

    assert_eq!(order.status().cancel_reason(), Some("budget cut"));
}

#[test]
fn test_total_independent_of_insertion_order() {
    init_tracing();
    let prices = [7, 0, 125, 40, 999, 3];

    let mut forward = Order::new(6);
    for (i, price) in prices.iter().enumerate() {
        forward.add_product(Some(Product::new(i as i64, *price)));
    }

    let mut backward = Order::new(7);
    for (i, price) in prices.iter().enumerate().rev() {
        backward.add_product(None);
        backward.add_product(Some(Product::new(i as i64, *price)));
    }

    let expected: i64 = prices.iter().sum();
    assert_eq!(forward.calculate_total(), expected);
    assert_eq!(backward.calculate_total(), expected);
    assert_eq!(forward.len(), prices.len());
    assert_eq!(backward.len(), prices.len());
}

#[test]
fn test_order_usable_as_price_calculator() {
    init_tracing();
    let mut order = Order::new(8);
    order.add_product(Some(Product::new(1, 15)));
    order.add_product(Some(Product::new(1, 15)));

    let calculators: Vec<Box<dyn PriceCalculator>> = vec![Box::new(order)];
    let total: i64 = calculators.iter().map(|c| c.calculate_total()).sum();

    assert_eq!(total, 30);
}

#[test]
fn test_retry_payment_after_adding_product() {
    init_tracing();
    let mut order = Order::new(9);
    assert!(order.pay().is_err());

    order.add_product(Some(Product::new(1, 250)));
    order.pay().unwrap();

    assert_eq!(*order.status(), OrderStatus::Paid);
}
