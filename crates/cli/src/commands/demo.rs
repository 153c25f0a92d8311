//! The scripted Moogle attribution walkthrough.
//!
//! Searches Moogle, clicks the sponsored result, adds the landed-on product
//! to the cart and checks out, printing every analytics emission along the
//! way. This is the end-to-end path the whole demo exists to illustrate: the
//! ad click carries the campaign parameters through the URL, and the detail
//! page turns them into a Campaign Attribution Recorded event.

use std::sync::Arc;

use brandazon_storefront::{
    Analytics, Catalog, NavigateOptions, Page, Session, StorefrontConfig,
};

use crate::sink::JsonLineSink;

/// Run the walkthrough for a search term.
///
/// # Errors
///
/// Returns an error if the configuration fails to parse or the catalog is
/// empty.
pub fn run(query: &str) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = StorefrontConfig::from_env()?;
    let sink = Arc::new(JsonLineSink::default());
    let analytics = if config.analytics_enabled {
        Analytics::new(sink.clone())
    } else {
        Analytics::disabled()
    };
    let mut session = Session::new(&config, Arc::new(Catalog::demo()), analytics);

    tracing::info!(query, "starting attribution walkthrough");

    let ad = session
        .moogle_search(query)
        .ok_or("catalog is empty, Moogle has nothing to serve")?;
    tracing::info!(product_id = %ad.product.id, url = %ad.display_url, "ad served");

    session.moogle_ad_click(&ad.product.id)?;
    session.add_to_cart(&ad.product.id)?;
    session.navigate(Page::Cart, None, NavigateOptions::default());
    let order = session.checkout();

    tracing::info!(
        order_id = %order.order_id,
        total = %order.total,
        emissions = sink.emitted(),
        "walkthrough complete"
    );
    Ok(())
}
