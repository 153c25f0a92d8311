//! Moogle, the simulated search engine.
//!
//! Moogle returns exactly one sponsored result per query. Ad selection prefers
//! a random catalog match for the search term; when nothing matches, a random
//! product still gets the slot. The landing URL of every ad carries the fixed
//! campaign parameters that the attribution pipeline later records.

use rand::seq::IndexedRandom;
use url::form_urlencoded;

use brandazon_core::ProductId;

use crate::catalog::{Catalog, Product};

/// Campaign source attached to every Moogle ad click.
pub const UTM_SOURCE: &str = "moogle";
/// Campaign medium attached to every Moogle ad click.
pub const UTM_MEDIUM: &str = "organic";
/// Campaign name attached to every Moogle ad click.
pub const UTM_CAMPAIGN: &str = "default_search";

/// Domain shown under the ad headline on the results page.
pub const DISPLAY_DOMAIN: &str = "https://www.brandazon.com";

/// A sponsored search result.
#[derive(Debug, Clone)]
pub struct AdResult {
    pub product: Product,
    /// Human-readable landing URL shown on the results page, campaign
    /// parameters included.
    pub display_url: String,
}

/// Landing URL rendered under an ad, campaign query spelled out. Display-only:
/// the real navigation URL is built by the routing layer, which also attaches
/// the `from_moogle` flag.
#[must_use]
pub fn display_url(product_id: &ProductId) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("utm_source", UTM_SOURCE)
        .append_pair("utm_medium", UTM_MEDIUM)
        .append_pair("utm_campaign", UTM_CAMPAIGN)
        .finish();
    format!("{DISPLAY_DOMAIN}/product/{product_id}?{query}")
}

/// Pick the single sponsored result for a query.
///
/// A random product among the catalog matches for `term` wins the slot; with
/// no matches a random product from the whole catalog does. Returns `None`
/// only for an empty catalog.
#[must_use]
pub fn pick_ad(catalog: &Catalog, term: &str) -> Option<AdResult> {
    let mut rng = rand::rng();
    let matches = catalog.search(term);
    let product = matches
        .choose(&mut rng)
        .copied()
        .or_else(|| catalog.all().choose(&mut rng))?;
    Some(AdResult {
        product: product.clone(),
        display_url: display_url(&product.id),
    })
}
