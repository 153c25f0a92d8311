//! Page/URL mapping and explicit history.
//!
//! The logical page is the source of truth; the URL is a projection of it.
//! Paths live in the hash fragment (`#/products`) and the query string carries
//! only attribution parameters. The reverse mapping (URL back to page) runs on
//! every history pop and on initial load.
//!
//! The reverse mapping has no arm for `#/`: the home path deliberately falls
//! through to the simulated-search default, exactly like the ad-demo frontend
//! it models.

use brandazon_core::ProductId;
use url::Url;

use crate::search;

/// Logical pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Products,
    ProductDetail,
    Cart,
    SimulatedSearch,
}

impl Page {
    /// Page identifier used as the analytics page name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::ProductDetail => "productDetail",
            Self::Cart => "cart",
            Self::SimulatedSearch => "simulatedSearch",
        }
    }

    /// Human-readable name reported in page properties.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Home => "Home Page",
            Self::Products => "All Products Page",
            Self::ProductDetail => "Product Detail Page",
            Self::Cart => "Shopping Cart Page",
            Self::SimulatedSearch => "Simulated Search Page",
        }
    }
}

/// Options for [`crate::Session::navigate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigateOptions {
    /// Navigation originates from a Moogle ad click; attaches the fixed
    /// campaign query parameters and triggers the page-name override.
    pub from_moogle: bool,
}

/// A resolved logical location: page plus optional selected product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub page: Page,
    pub product_id: Option<ProductId>,
}

impl Location {
    /// Location for a page without a selected product.
    #[must_use]
    pub const fn page(page: Page) -> Self {
        Self {
            page,
            product_id: None,
        }
    }

    /// Location for a product detail page.
    #[must_use]
    pub const fn product(id: ProductId) -> Self {
        Self {
            page: Page::ProductDetail,
            product_id: Some(id),
        }
    }
}

/// Hash-fragment path for a location (without the leading `#`).
#[must_use]
pub fn hash_path(location: &Location) -> String {
    match location.page {
        Page::Home => "/".to_string(),
        Page::Products => "/products".to_string(),
        Page::ProductDetail => {
            let id = location
                .product_id
                .as_ref()
                .map(ProductId::as_str)
                .unwrap_or_default();
            format!("/product/{id}")
        }
        Page::Cart => "/cart".to_string(),
        Page::SimulatedSearch => "/simulated-search".to_string(),
    }
}

/// Reverse-map a hash fragment to a location. Accepts an optional leading `#`.
/// Anything unrecognized resolves to the simulated-search default.
#[must_use]
pub fn parse_hash(hash: &str) -> Location {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    if let Some(id) = path.strip_prefix("/product/") {
        return Location::product(ProductId::new(id));
    }
    match path {
        "/products" => Location::page(Page::Products),
        "/cart" => Location::page(Page::Cart),
        _ => Location::page(Page::SimulatedSearch),
    }
}

/// Build the full URL for a location: origin, campaign query when the
/// navigation came from Moogle, and the hash path.
#[must_use]
pub fn build_url(origin: &Url, location: &Location, from_moogle: bool) -> Url {
    let mut url = origin.clone();
    url.set_query(None);
    if from_moogle && location.page == Page::ProductDetail {
        url.query_pairs_mut()
            .append_pair("utm_source", search::UTM_SOURCE)
            .append_pair("utm_medium", search::UTM_MEDIUM)
            .append_pair("utm_campaign", search::UTM_CAMPAIGN)
            .append_pair("from_moogle", "true");
    }
    url.set_fragment(Some(&hash_path(location)));
    url
}

/// Reverse-map a URL to its location and `from_moogle` flag.
#[must_use]
pub fn parse_url(url: &Url) -> (Location, bool) {
    let location = url
        .fragment()
        .map_or_else(|| Location::page(Page::SimulatedSearch), parse_hash);
    let from_moogle = url
        .query_pairs()
        .any(|(key, value)| key == "from_moogle" && value == "true");
    (location, from_moogle)
}

/// Explicit browser-style history: a list of URLs with a cursor.
///
/// `push` discards any forward entries, matching `pushState` semantics.
/// `back`/`forward` are no-ops at the boundaries.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Url>,
    index: usize,
}

impl History {
    /// Start a history at an initial URL.
    #[must_use]
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The URL at the cursor.
    ///
    /// # Panics
    ///
    /// Never panics; the entry list is non-empty by construction and the
    /// cursor always points into it.
    #[must_use]
    pub fn current(&self) -> &Url {
        self.entries
            .get(self.index)
            .expect("history cursor is always in bounds")
    }

    /// Push a new URL, discarding forward entries.
    pub fn push(&mut self, url: Url) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index += 1;
    }

    /// Move the cursor back one entry. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move the cursor forward one entry. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Number of entries currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Histories always hold at least the initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
