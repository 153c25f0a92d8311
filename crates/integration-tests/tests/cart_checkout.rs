//! Integration tests for cart mutations and checkout through the session.

use brandazon_core::ProductId;
use brandazon_integration_tests::recorded_session;
use brandazon_storefront::{NavigateOptions, Page};
use rust_decimal::Decimal;

fn uno() -> ProductId {
    // Uno Card Game, $9.99 in the demo catalog.
    ProductId::new("uno-card-game")
}

fn soap() -> ProductId {
    // Special Facial Soap, $12.50 in the demo catalog.
    ProductId::new("special-facial-soap")
}

// ============================================================================
// Mutations
// ============================================================================

#[test]
fn test_adding_same_product_twice_keeps_one_line() {
    let (mut session, sink) = recorded_session();
    sink.clear();

    session.add_to_cart(&uno()).expect("seed product");
    session.add_to_cart(&uno()).expect("seed product");

    assert_eq!(session.cart().lines().len(), 1);
    assert_eq!(session.cart().item_count(), 2);
    // One Product Added per click, each for a single unit.
    let added = sink.track_properties("Product Added");
    assert_eq!(added.len(), 2);
    assert!(added.iter().all(|p| p["products"][0]["quantity"] == 1));
}

#[test]
fn test_add_unknown_product_is_an_error_and_emits_nothing() {
    let (mut session, sink) = recorded_session();
    sink.clear();

    assert!(session.add_to_cart(&ProductId::new("ghost")).is_err());
    assert!(session.cart().is_empty());
    assert!(sink.calls().is_empty());
}

#[test]
fn test_quantity_decrement_to_zero_removes_the_line() {
    let (mut session, sink) = recorded_session();
    session.add_to_cart(&uno()).expect("seed product");
    sink.clear();

    session.update_quantity(&uno(), -1);

    assert!(session.cart().is_empty());
    let removed = sink.track_properties("Product Removed");
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0]["products"][0]["quantity"], 1);
}

#[test]
fn test_remove_reports_the_full_line_quantity() {
    let (mut session, sink) = recorded_session();
    session.add_to_cart(&uno()).expect("seed product");
    session.update_quantity(&uno(), 2);
    sink.clear();

    session.remove_from_cart(&uno());

    let removed = sink.track_properties("Product Removed");
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0]["products"][0]["quantity"], 3);
}

// ============================================================================
// Cart view and checkout
// ============================================================================

#[test]
fn test_cart_viewed_on_pop_carries_line_payloads() {
    let (mut session, sink) = recorded_session();
    session.add_to_cart(&uno()).expect("seed product");
    session.add_to_cart(&uno()).expect("seed product");
    session.navigate(Page::Cart, None, NavigateOptions::default());
    session.navigate(Page::Products, None, NavigateOptions::default());
    sink.clear();

    assert!(session.back());

    let viewed = sink.track_properties("Cart Viewed");
    assert_eq!(viewed.len(), 1);
    assert_eq!(viewed[0]["products"][0]["product_id"], "uno-card-game");
    assert_eq!(viewed[0]["products"][0]["quantity"], 2);
}

#[test]
fn test_checkout_totals_and_clears() {
    let (mut session, sink) = recorded_session();
    session.add_to_cart(&uno()).expect("seed product");
    session.add_to_cart(&uno()).expect("seed product");
    session.add_to_cart(&soap()).expect("seed product");
    sink.clear();

    // 2 x 9.99 + 12.50
    assert_eq!(session.cart().total(), Decimal::new(3248, 2));

    let order = session.checkout();

    assert!(session.cart().is_empty());
    assert_eq!(order.total, Decimal::new(3248, 2));
    assert_eq!(order.line_count, 2);

    let completed = sink.track_properties("Order Completed");
    assert_eq!(completed.len(), 1);
    let payload = &completed[0];
    assert_eq!(payload["total"], "32.48");
    assert_eq!(payload["revenue"], "32.48");
    assert_eq!(payload["shipping"], "0");
    assert_eq!(payload["tax"], "0");
    assert_eq!(payload["discount"], "0");
    assert_eq!(payload["currency"], "USD");
    assert_eq!(payload["affiliation"], "Brandazon");
    assert!(payload["timestamp"].is_string());
    assert_eq!(payload["products"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_checkout_with_empty_cart_still_emits_order_completed() {
    let (mut session, sink) = recorded_session();
    sink.clear();

    let order = session.checkout();

    assert_eq!(order.total, Decimal::ZERO);
    assert_eq!(order.line_count, 0);
    let completed = sink.track_properties("Order Completed");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["total"], "0");
    assert_eq!(completed[0]["products"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_each_session_gets_a_fresh_cart_id() {
    let (session_a, _) = recorded_session();
    let (session_b, _) = recorded_session();
    assert_ne!(session_a.cart().id(), session_b.cart().id());
    assert!(session_a.cart().id().as_str().starts_with("cart_"));
}
