//! Integration tests for navigation, history and the page-name override.
//!
//! These drive a full session over the demo catalog and assert on the
//! recorded page and track calls.

use brandazon_core::ProductId;
use brandazon_integration_tests::recorded_session;
use brandazon_storefront::{NavigateOptions, Page, View};

// ============================================================================
// Pushed navigations
// ============================================================================

#[test]
fn test_organic_walk_emits_one_page_call_per_navigation() {
    let (mut session, sink) = recorded_session();
    sink.clear();

    session.navigate(Page::Home, None, NavigateOptions::default());
    session.navigate(Page::Products, None, NavigateOptions::default());
    session.navigate(Page::Cart, None, NavigateOptions::default());

    assert_eq!(sink.page_names(), vec!["home", "products", "cart"]);
    // Pushed navigations never emit list events.
    assert!(sink.track_events().is_empty());
}

#[test]
fn test_navigation_urls_are_hash_projections_of_state() {
    let (mut session, _sink) = recorded_session();

    session.navigate(Page::Products, None, NavigateOptions::default());
    assert_eq!(
        session.current_url().as_str(),
        "https://www.brandazon.com/#/products"
    );

    session.navigate(
        Page::ProductDetail,
        Some(ProductId::new("uno-card-game")),
        NavigateOptions::default(),
    );
    assert_eq!(
        session.current_url().as_str(),
        "https://www.brandazon.com/#/product/uno-card-game"
    );
}

// ============================================================================
// History pops
// ============================================================================

#[test]
fn test_back_and_forward_re_emit_page_and_list_events() {
    let (mut session, sink) = recorded_session();
    session.navigate(Page::Products, None, NavigateOptions::default());
    session.navigate(Page::Cart, None, NavigateOptions::default());
    sink.clear();

    assert!(session.back());
    assert_eq!(session.location().page, Page::Products);
    assert_eq!(sink.page_names(), vec!["products"]);
    let lists = sink.track_properties("Product List Viewed");
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["category"], "All Products");

    sink.clear();
    assert!(session.forward());
    assert_eq!(session.location().page, Page::Cart);
    assert_eq!(sink.page_names(), vec!["cart"]);
    assert_eq!(sink.track_events(), vec!["Cart Viewed"]);
}

#[test]
fn test_home_url_pops_back_as_simulated_search() {
    // The reverse mapping has no arm for the home path; popping back onto
    // `#/` resolves to the simulated-search default.
    let (mut session, sink) = recorded_session();
    session.navigate(Page::Home, None, NavigateOptions::default());
    session.navigate(Page::Cart, None, NavigateOptions::default());
    sink.clear();

    assert!(session.back());

    assert_eq!(session.location().page, Page::SimulatedSearch);
    assert_eq!(sink.page_names(), vec!["simulatedSearch"]);
}

#[test]
fn test_pop_at_oldest_entry_stays_put_and_emits_nothing() {
    let (mut session, sink) = recorded_session();
    let before = session.current_url().clone();
    sink.clear();

    assert!(!session.back());

    assert_eq!(session.current_url(), &before);
    assert!(sink.calls().is_empty());
}

// ============================================================================
// Moogle page-name override
// ============================================================================

#[test]
fn test_moogle_detail_page_call_is_misnamed_home_page_viewed() {
    let (mut session, sink) = recorded_session();
    let ad = session.moogle_search("uno").expect("demo catalog serves ads");
    sink.clear();

    session
        .moogle_ad_click(&ad.product.id)
        .expect("ad product exists");

    assert_eq!(sink.page_names(), vec!["Home Page Viewed"]);
    // The misnaming is in the emission only; the state is correct.
    assert_eq!(session.location().page, Page::ProductDetail);
    assert!(matches!(
        session.current_view(),
        View::ProductDetail { product, .. } if product.id == ad.product.id
    ));
}

#[test]
fn test_organic_detail_page_call_is_named_normally() {
    let (mut session, sink) = recorded_session();
    sink.clear();

    session
        .view_product(&ProductId::new("uno-card-game"), Some(1))
        .expect("seed product");

    assert_eq!(sink.page_names(), vec!["productDetail"]);
}

// ============================================================================
// Unknown products
// ============================================================================

#[test]
fn test_unknown_product_resolves_to_not_found_without_events() {
    let (mut session, sink) = recorded_session();
    sink.clear();

    let ghost = ProductId::new("discontinued-widget");
    session.navigate(
        Page::ProductDetail,
        Some(ghost.clone()),
        NavigateOptions::default(),
    );

    assert!(matches!(
        session.current_view(),
        View::ProductNotFound(id) if id == ghost
    ));
    // The page call still fires; nothing product-specific does.
    assert_eq!(sink.page_names(), vec!["productDetail"]);
    assert!(sink.track_events().is_empty());
}
