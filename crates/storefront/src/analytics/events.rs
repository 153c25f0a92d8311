//! Event names and payload shaping for the analytics schema.
//!
//! Every emission site uses [`product_payload`] so product payloads have one
//! consistent shape across list views, cart mutations and orders.

use brandazon_core::{CurrencyCode, OrderId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};
use url::Url;

use crate::catalog::Product;

/// Track-event names, verbatim from the event-tracking schema.
pub mod event {
    pub const PROMOTION_CLICKED: &str = "Promotion Clicked";
    pub const PROMOTION_VIEWED: &str = "Promotion Viewed";
    pub const PRODUCT_ADDED: &str = "Product Added";
    pub const PRODUCT_REMOVED: &str = "Product Removed";
    pub const PRODUCT_CLICKED: &str = "Product Clicked";
    pub const PRODUCT_VIEWED: &str = "Product Viewed";
    pub const PRODUCT_LIST_VIEWED: &str = "Product List Viewed";
    pub const CART_VIEWED: &str = "Cart Viewed";
    pub const SEARCH_RESULTS_VIEWED: &str = "Search Results Viewed";
    pub const CAMPAIGN_ATTRIBUTION_RECORDED: &str = "Campaign Attribution Recorded";
    pub const ORDER_COMPLETED: &str = "Order Completed";
}

/// The fixed home-page partnership banner promotion.
pub mod promotion {
    pub const ID: &str = "labubu_popmart_banner_top";
    pub const CREATIVE: &str = "labubu_x_popmart_banner";
    pub const NAME: &str = "Labubu x Popmart Exclusive Partnership";
    pub const POSITION: &str = "home_banner_top";
}

/// Store name reported as `affiliation` on orders.
pub const AFFILIATION: &str = "Brandazon";

/// Normalized product record attached to analytics events.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub product_id: ProductId,
    pub sku: String,
    pub category: String,
    pub name: String,
    pub brand: String,
    pub variant: String,
    pub price: Decimal,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    pub url: String,
    pub image_url: String,
}

/// Order summary payload for `Order Completed`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderCompletedPayload {
    pub order_id: OrderId,
    pub affiliation: &'static str,
    pub total: Decimal,
    pub revenue: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub currency: &'static str,
    pub timestamp: DateTime<Utc>,
    pub products: Vec<ProductPayload>,
}

/// Canonical hash URL for a product page, derived from the storefront origin.
#[must_use]
pub fn product_url(origin: &Url, id: &ProductId) -> String {
    format!("{origin}#/product/{id}")
}

/// Map a product plus context into the normalized payload shape.
#[must_use]
pub fn product_payload(
    product: &Product,
    quantity: u32,
    position: Option<u32>,
    origin: &Url,
) -> ProductPayload {
    ProductPayload {
        product_id: product.id.clone(),
        sku: product.sku.clone(),
        category: product.category.clone(),
        name: product.name.clone(),
        brand: product.brand.clone(),
        variant: product.variant.clone(),
        price: product.price.amount(),
        quantity,
        position,
        url: product_url(origin, &product.id),
        image_url: product.image_url.clone(),
    }
}

/// Payload for `Product Viewed`: the normalized fields plus currency and value.
#[must_use]
pub fn product_viewed_payload(product: &Product, origin: &Url, currency: CurrencyCode) -> Value {
    json!({
        "product_id": product.id,
        "sku": product.sku,
        "category": product.category,
        "name": product.name,
        "brand": product.brand,
        "variant": product.variant,
        "price": product.price.amount(),
        "quantity": 1,
        "currency": currency.code(),
        "value": product.price.amount(),
        "url": product_url(origin, &product.id),
        "image_url": product.image_url,
    })
}

/// Payload for the fixed partnership-banner promotion events.
#[must_use]
pub fn promotion_payload() -> Value {
    json!({
        "promotion_id": promotion::ID,
        "creative": promotion::CREATIVE,
        "name": promotion::NAME,
        "position": promotion::POSITION,
    })
}

#[cfg(test)]
mod tests {
    use brandazon_core::Price;

    use super::*;
    use crate::catalog::Catalog;

    fn origin() -> Url {
        Url::parse("https://www.brandazon.com").expect("valid url")
    }

    fn sample_product() -> Product {
        Catalog::demo()
            .get(&ProductId::new("uno-card-game"))
            .expect("seed product")
            .clone()
    }

    #[test]
    fn test_product_url_uses_hash_routing() {
        let url = product_url(&origin(), &ProductId::new("uno-card-game"));
        assert_eq!(url, "https://www.brandazon.com/#/product/uno-card-game");
    }

    #[test]
    fn test_product_payload_shape() {
        let product = sample_product();
        let payload = product_payload(&product, 2, Some(3), &origin());
        let value = serde_json::to_value(&payload).expect("serialize");

        assert_eq!(value["product_id"], "uno-card-game");
        assert_eq!(value["sku"], "GM-UNO-001");
        assert_eq!(value["brand"], "Mattel");
        assert_eq!(value["quantity"], 2);
        assert_eq!(value["position"], 3);
        assert_eq!(value["price"], "9.99");
        assert_eq!(
            value["url"],
            "https://www.brandazon.com/#/product/uno-card-game"
        );
    }

    #[test]
    fn test_position_omitted_when_absent() {
        let product = sample_product();
        let payload = product_payload(&product, 1, None, &origin());
        let value = serde_json::to_value(&payload).expect("serialize");
        assert!(value.get("position").is_none());
    }

    #[test]
    fn test_product_viewed_payload_carries_currency_and_value() {
        let product = sample_product();
        let value = product_viewed_payload(&product, &origin(), CurrencyCode::USD);
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["value"], value["price"]);
        assert_eq!(value["quantity"], 1);
    }

    #[test]
    fn test_price_serializes_with_exact_scale() {
        let price = Price::from_unsigned_cents(2500, CurrencyCode::USD);
        let value = serde_json::to_value(price.amount()).expect("serialize");
        assert_eq!(value, "25.00");
    }
}
