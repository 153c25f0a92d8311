//! The browsing session: state machine tying catalog, cart, routing and
//! analytics together.
//!
//! A session owns the current location, the history, the cart and the retained
//! Moogle results. State is the source of truth and the URL is a projection of
//! it; analytics emissions fire inline with each transition. Pushed
//! navigations emit only the page call, while pops (back/forward and the
//! initial load) additionally re-emit the list events for the arrived-at page
//! and re-run attribution recording, mirroring the pop handler of the frontend
//! this engine models.

use std::sync::Arc;

use brandazon_core::{CurrencyCode, ProductId};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use url::Url;

use crate::analytics::Analytics;
use crate::analytics::events::{self, event};
use crate::attribution::{self, AttributionParams};
use crate::cart::{Cart, CartLine, OrderSummary};
use crate::catalog::{Catalog, Product};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::routing::{self, History, Location, NavigateOptions, Page};
use crate::search::{self, AdResult};

/// Page name emitted for Moogle-originated product detail views. The
/// misnaming is deliberate and load-bearing for the attribution demo; do not
/// correct it.
const MOOGLE_DETAIL_PAGE_NAME: &str = "Home Page Viewed";

const FEATURED_LIST_NAME: &str = "Featured Products";
const ALL_PRODUCTS_LIST_NAME: &str = "All Products";
const AD_LIST_NAME: &str = "Simulated Search Results";

const RELATED_LIMIT: usize = 4;

/// What the current location resolves to, for rendering.
#[derive(Debug, Clone)]
pub enum View {
    Home {
        featured: Vec<Product>,
    },
    Products {
        products: Vec<Product>,
    },
    ProductDetail {
        product: Product,
        related: Vec<Product>,
        attribution: AttributionParams,
    },
    /// Fallback for an unknown product id. No product events fire.
    ProductNotFound(ProductId),
    Cart {
        lines: Vec<CartLine>,
        total: Decimal,
    },
    SimulatedSearch {
        results: Vec<AdResult>,
    },
}

/// A single-user browsing session over the demo storefront.
#[derive(Debug)]
pub struct Session {
    catalog: Arc<Catalog>,
    analytics: Analytics,
    origin: Url,
    currency: CurrencyCode,
    cart: Cart,
    history: History,
    location: Location,
    search_results: Vec<AdResult>,
}

impl Session {
    /// Start a session at the configured origin.
    ///
    /// Construction runs the same arrival handling a history pop does, so the
    /// initial location (the simulated-search default) emits its page call
    /// immediately.
    #[must_use]
    pub fn new(config: &StorefrontConfig, catalog: Arc<Catalog>, analytics: Analytics) -> Self {
        let origin = config.base_url.clone();
        let history = History::new(origin.clone());
        let (location, _) = routing::parse_url(history.current());
        let cart = Cart::new(analytics.clone(), origin.clone(), config.currency);

        let session = Self {
            catalog,
            analytics,
            origin,
            currency: config.currency,
            cart,
            history,
            location,
            search_results: Vec::new(),
        };
        session.emit_arrival();
        session
    }

    /// The resolved location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// The URL at the history cursor.
    #[must_use]
    pub fn current_url(&self) -> &Url {
        self.history.current()
    }

    /// The session history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The session cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Navigate to a page: update state, project the URL, push it and emit
    /// the page call. List events do not fire on pushed navigations.
    pub fn navigate(&mut self, page: Page, product_id: Option<ProductId>, options: NavigateOptions) {
        self.location = Location { page, product_id };
        let url = routing::build_url(&self.origin, &self.location, options.from_moogle);
        tracing::debug!(page = page.as_str(), url = %url, "navigate");
        self.history.push(url);

        self.emit_page_call(options.from_moogle);
        self.record_attribution();
    }

    /// Move back one history entry and re-run arrival handling. Returns false
    /// (emitting nothing) at the oldest entry.
    pub fn back(&mut self) -> bool {
        if !self.history.back() {
            return false;
        }
        self.arrive_at_current();
        true
    }

    /// Move forward one history entry and re-run arrival handling. Returns
    /// false (emitting nothing) at the newest entry.
    pub fn forward(&mut self) -> bool {
        if !self.history.forward() {
            return false;
        }
        self.arrive_at_current();
        true
    }

    /// Product-card click-through: Product Clicked and Product Viewed, then an
    /// organic navigation to the detail page.
    pub fn view_product(&mut self, id: &ProductId, position: Option<u32>) -> Result<()> {
        let product = self.require_product(id)?;
        self.analytics.track(
            event::PRODUCT_CLICKED,
            payload_value(events::product_payload(&product, 1, position, &self.origin)),
        );
        self.analytics.track(
            event::PRODUCT_VIEWED,
            events::product_viewed_payload(&product, &self.origin, self.currency),
        );
        self.navigate(
            Page::ProductDetail,
            Some(id.clone()),
            NavigateOptions::default(),
        );
        Ok(())
    }

    /// Partnership-banner click. Emits Promotion Clicked; the banner itself
    /// does not navigate.
    pub fn promotion_clicked(&self) {
        self.analytics
            .track(event::PROMOTION_CLICKED, events::promotion_payload());
    }

    /// Run a Moogle query: pick the single sponsored result, retain it for
    /// position lookup and emit Search Results Viewed. `None` only when the
    /// catalog is empty.
    pub fn moogle_search(&mut self, term: &str) -> Option<AdResult> {
        let ad = search::pick_ad(&self.catalog, term)?;
        tracing::debug!(query = term, product_id = %ad.product.id, "moogle search served ad");
        self.search_results = vec![ad.clone()];
        self.analytics.track(
            event::SEARCH_RESULTS_VIEWED,
            json!({
                "query": term,
                "results": [{
                    "product_id": ad.product.id,
                    "product_name": ad.product.name,
                }],
                "utm_source": search::UTM_SOURCE,
                "utm_medium": search::UTM_MEDIUM,
                "utm_campaign": search::UTM_CAMPAIGN,
            }),
        );
        Some(ad)
    }

    /// Click a sponsored result: Product Clicked with the ad-list context and
    /// campaign parameters, then a Moogle-flagged navigation to the detail
    /// page (which records the attribution).
    pub fn moogle_ad_click(&mut self, id: &ProductId) -> Result<()> {
        let product = self.require_product(id)?;
        let position = self
            .search_results
            .iter()
            .position(|ad| &ad.product.id == id)
            .map(position_number);

        let mut properties =
            payload_value(events::product_payload(&product, 1, position, &self.origin));
        if let Value::Object(map) = &mut properties {
            map.insert("list".to_string(), json!(AD_LIST_NAME));
            map.insert("utm_source".to_string(), json!(search::UTM_SOURCE));
            map.insert("utm_medium".to_string(), json!(search::UTM_MEDIUM));
            map.insert("utm_campaign".to_string(), json!(search::UTM_CAMPAIGN));
        }
        self.analytics.track(event::PRODUCT_CLICKED, properties);

        self.navigate(
            Page::ProductDetail,
            Some(id.clone()),
            NavigateOptions { from_moogle: true },
        );
        Ok(())
    }

    /// Add one unit of a catalog product to the cart.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<()> {
        let product = self.require_product(id)?;
        self.cart.add(&product);
        Ok(())
    }

    /// Adjust a cart line's quantity by `delta`.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i32) {
        self.cart.update_quantity(id, delta);
    }

    /// Remove a cart line outright.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove(id);
    }

    /// Complete the order and clear the cart.
    pub fn checkout(&mut self) -> OrderSummary {
        self.cart.checkout()
    }

    /// Resolve the current location for rendering.
    #[must_use]
    pub fn current_view(&self) -> View {
        match self.location.page {
            Page::Home => View::Home {
                featured: self.catalog.featured().into_iter().cloned().collect(),
            },
            Page::Products => View::Products {
                products: self.catalog.all().to_vec(),
            },
            Page::ProductDetail => match &self.location.product_id {
                Some(id) => self.catalog.get(id).map_or_else(
                    || View::ProductNotFound(id.clone()),
                    |product| View::ProductDetail {
                        product: product.clone(),
                        related: self
                            .catalog
                            .related(product, RELATED_LIMIT)
                            .into_iter()
                            .cloned()
                            .collect(),
                        attribution: self.current_attribution(),
                    },
                ),
                None => View::ProductNotFound(ProductId::new("")),
            },
            Page::Cart => View::Cart {
                lines: self.cart.lines().to_vec(),
                total: self.cart.total(),
            },
            Page::SimulatedSearch => View::SimulatedSearch {
                results: self.search_results.clone(),
            },
        }
    }

    fn require_product(&self, id: &ProductId) -> Result<Product> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| StorefrontError::ProductNotFound(id.clone()))
    }

    fn current_attribution(&self) -> AttributionParams {
        attribution::parse(self.history.current().query().unwrap_or(""))
    }

    /// Pop-style arrival: re-resolve the location from the URL, then emit the
    /// page call, the page's list events and the attribution record.
    fn arrive_at_current(&mut self) {
        let (location, _) = routing::parse_url(self.history.current());
        tracing::debug!(page = location.page.as_str(), "history pop");
        self.location = location;
        self.emit_arrival();
    }

    fn emit_arrival(&self) {
        let (_, from_moogle) = routing::parse_url(self.history.current());
        self.emit_page_call(from_moogle);
        self.emit_list_events();
        self.record_attribution();
    }

    fn emit_page_call(&self, from_moogle: bool) {
        let page = self.location.page;
        let mut properties = serde_json::Map::new();
        properties.insert("name".to_string(), json!(page.display_name()));
        if page == Page::ProductDetail {
            if let Some(id) = &self.location.product_id {
                properties.insert("productId".to_string(), json!(id));
                if let Some(product) = self.catalog.get(id) {
                    properties.insert("productName".to_string(), json!(product.name));
                }
            }
        }

        let name = if from_moogle && page == Page::ProductDetail {
            MOOGLE_DETAIL_PAGE_NAME
        } else {
            page.as_str()
        };
        self.analytics.page(name, Value::Object(properties));
    }

    fn emit_list_events(&self) {
        match self.location.page {
            // The Home arm is unreachable through pops: `#/` resolves to
            // SimulatedSearch in the reverse mapping. The frontend this
            // engine models carries the same dead branch in its pop handler,
            // so it stays.
            Page::Home => {
                self.analytics
                    .track(event::PROMOTION_VIEWED, events::promotion_payload());
                self.analytics.track(
                    event::PRODUCT_LIST_VIEWED,
                    json!({
                        "category": FEATURED_LIST_NAME,
                        "products": self.positioned_payloads(&self.catalog.featured()),
                    }),
                );
            }
            Page::Products => {
                let all: Vec<&Product> = self.catalog.all().iter().collect();
                self.analytics.track(
                    event::PRODUCT_LIST_VIEWED,
                    json!({
                        "category": ALL_PRODUCTS_LIST_NAME,
                        "products": self.positioned_payloads(&all),
                    }),
                );
            }
            Page::Cart => {
                self.analytics.track(
                    event::CART_VIEWED,
                    json!({
                        "cart_id": self.cart.id(),
                        "products": self.cart.line_payloads(),
                    }),
                );
            }
            Page::ProductDetail | Page::SimulatedSearch => {}
        }
    }

    /// Emit Campaign Attribution Recorded when the detail page arrives with a
    /// catalog hit and a non-empty attribution query.
    fn record_attribution(&self) {
        if self.location.page != Page::ProductDetail {
            return;
        }
        let Some(product) = self
            .location
            .product_id
            .as_ref()
            .and_then(|id| self.catalog.get(id))
        else {
            return;
        };
        let params = self.current_attribution();
        if params.is_empty() {
            return;
        }

        let mut properties = serde_json::Map::new();
        properties.insert("product_id".to_string(), json!(product.id));
        properties.insert("product_name".to_string(), json!(product.name));
        for (key, value) in params {
            properties.insert(key, json!(value));
        }
        self.analytics.track(
            event::CAMPAIGN_ATTRIBUTION_RECORDED,
            Value::Object(properties),
        );
    }

    fn positioned_payloads(&self, products: &[&Product]) -> Vec<events::ProductPayload> {
        products
            .iter()
            .enumerate()
            .map(|(index, product)| {
                events::product_payload(product, 1, Some(position_number(index)), &self.origin)
            })
            .collect()
    }
}

fn payload_value(payload: events::ProductPayload) -> Value {
    serde_json::to_value(payload).unwrap_or_default()
}

fn position_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
