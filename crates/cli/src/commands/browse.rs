//! The scripted organic browsing flow.
//!
//! Home (with the partnership banner), all products, a product detail via the
//! card click-through, the cart, and a back/forward pair to show the pop
//! re-emissions. No campaign parameters are involved anywhere, so no
//! attribution event fires.

use std::sync::Arc;

use brandazon_storefront::{
    Analytics, Catalog, NavigateOptions, Page, Session, StorefrontConfig,
};

use crate::sink::JsonLineSink;

/// Run the browsing flow.
///
/// # Errors
///
/// Returns an error if the configuration fails to parse or the catalog is
/// empty.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = StorefrontConfig::from_env()?;
    let sink = Arc::new(JsonLineSink::default());
    let analytics = if config.analytics_enabled {
        Analytics::new(sink.clone())
    } else {
        Analytics::disabled()
    };

    let catalog = Arc::new(Catalog::demo());
    let first_id = catalog
        .all()
        .first()
        .map(|product| product.id.clone())
        .ok_or("catalog is empty, nothing to browse")?;

    let mut session = Session::new(&config, catalog, analytics);

    session.navigate(Page::Home, None, NavigateOptions::default());
    session.promotion_clicked();
    session.navigate(Page::Products, None, NavigateOptions::default());
    session.view_product(&first_id, Some(1))?;
    session.add_to_cart(&first_id)?;
    session.navigate(Page::Cart, None, NavigateOptions::default());

    // Back to the detail page and forward again; the pops re-emit the page
    // and list events.
    session.back();
    session.forward();

    tracing::info!(emissions = sink.emitted(), "browse flow complete");
    Ok(())
}
