//! Shopping cart with event-paired mutations.
//!
//! The cart is an ordered collection of lines keyed by product id: at most one
//! line per product, quantity always at least one, a quantity reaching zero
//! removes the line. Every mutation emits the matching analytics event through
//! the injected handle; totals are recomputed from the lines on every read.

use brandazon_core::{CartId, CurrencyCode, OrderId, ProductId};
use rust_decimal::Decimal;
use serde_json::json;
use url::Url;
use uuid::Uuid;

use crate::analytics::Analytics;
use crate::analytics::events::{
    self, AFFILIATION, OrderCompletedPayload, ProductPayload, event,
};
use crate::catalog::Product;

/// One product-id/quantity pairing within the cart.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount() * Decimal::from(self.quantity)
    }
}

/// Result of a completed checkout.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub total: Decimal,
    pub line_count: usize,
}

/// In-memory ordered cart.
#[derive(Debug, Clone)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    analytics: Analytics,
    origin: Url,
    currency: CurrencyCode,
}

impl Cart {
    /// Create an empty cart with a fresh id.
    #[must_use]
    pub fn new(analytics: Analytics, origin: Url, currency: CurrencyCode) -> Self {
        Self {
            id: CartId::new(format!("cart_{}", Uuid::new_v4())),
            lines: Vec::new(),
            analytics,
            origin,
            currency,
        }
    }

    /// The cart id reported on analytics events.
    #[must_use]
    pub const fn id(&self) -> &CartId {
        &self.id
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price times quantity over all lines. Recomputed on every call,
    /// never cached.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Product payloads for all lines, quantity per line.
    #[must_use]
    pub fn line_payloads(&self) -> Vec<ProductPayload> {
        self.lines
            .iter()
            .map(|line| events::product_payload(&line.product, line.quantity, None, &self.origin))
            .collect()
    }

    /// Add one unit of a product: increments an existing line or inserts a new
    /// line with quantity 1. Emits `Product Added` for the single added unit.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
        tracing::debug!(product_id = %product.id, "added to cart");
        self.track_delta(event::PRODUCT_ADDED, product, 1);
    }

    /// Adjust a line's quantity by `delta`. A resulting quantity of zero or
    /// less removes the line (emitting `Product Removed` for one unit);
    /// otherwise the matching added/removed event fires for `abs(delta)`.
    /// A missing id or a zero delta is a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, delta: i32) {
        if delta == 0 {
            return;
        }
        let Some(index) = self.lines.iter().position(|l| &l.product.id == product_id) else {
            return;
        };
        let Some(line) = self.lines.get(index) else {
            return;
        };
        let product = line.product.clone();
        let new_quantity = i64::from(line.quantity) + i64::from(delta);

        if new_quantity <= 0 {
            self.lines.remove(index);
            tracing::debug!(product_id = %product.id, "quantity reached zero, line removed");
            self.track_delta(event::PRODUCT_REMOVED, &product, 1);
        } else {
            if let Some(line) = self.lines.get_mut(index) {
                line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            }
            let (event_name, units) = if delta > 0 {
                (event::PRODUCT_ADDED, delta.unsigned_abs())
            } else {
                (event::PRODUCT_REMOVED, delta.unsigned_abs())
            };
            tracing::debug!(product_id = %product.id, delta, "quantity updated");
            self.track_delta(event_name, &product, units);
        }
    }

    /// Remove a line outright, emitting `Product Removed` for its full
    /// quantity. Removing an absent id is a no-op.
    pub fn remove(&mut self, product_id: &ProductId) {
        let Some(index) = self.lines.iter().position(|l| &l.product.id == product_id) else {
            return;
        };
        let line = self.lines.remove(index);
        tracing::debug!(product_id = %product_id, quantity = line.quantity, "removed from cart");
        self.track_delta(event::PRODUCT_REMOVED, &line.product, line.quantity);
    }

    /// Complete the order: emit a single `Order Completed` event summarizing
    /// all lines, then clear the cart. The event is built before the clear so
    /// no partial state is ever observable.
    pub fn checkout(&mut self) -> OrderSummary {
        let total = self.total();
        let order_id = OrderId::new(format!("order_{}", Uuid::new_v4()));
        let payload = OrderCompletedPayload {
            order_id: order_id.clone(),
            affiliation: AFFILIATION,
            total,
            revenue: total,
            shipping: Decimal::ZERO,
            tax: Decimal::ZERO,
            discount: Decimal::ZERO,
            currency: self.currency.code(),
            timestamp: chrono::Utc::now(),
            products: self.line_payloads(),
        };
        let line_count = self.lines.len();
        self.lines.clear();

        tracing::debug!(order_id = %order_id, %total, line_count, "order completed");
        self.analytics.track(
            event::ORDER_COMPLETED,
            serde_json::to_value(&payload).unwrap_or_default(),
        );

        OrderSummary {
            order_id,
            total,
            line_count,
        }
    }

    fn track_delta(&self, event_name: &str, product: &Product, units: u32) {
        self.analytics.track(
            event_name,
            json!({
                "cart_id": self.id,
                "products": [events::product_payload(product, units, None, &self.origin)],
            }),
        );
    }
}
