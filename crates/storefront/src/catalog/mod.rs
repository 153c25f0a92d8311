//! In-memory product catalog.
//!
//! The catalog is constructed once and never mutated. Products arrive with
//! their display image URL already resolved by the catalog provider; the
//! engine treats the list and the image URLs as given inputs.

mod seed;

use brandazon_core::{Price, ProductId};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Category that, together with "Labubu"-named products, makes up the
/// featured subset shown on the home page.
const FEATURED_CATEGORY: &str = "Collectible";

/// Name fragment that marks a product as featured regardless of category.
const FEATURED_NAME_FRAGMENT: &str = "labubu";

/// A product in the store. Immutable after catalog construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id (URL slug).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Category label (e.g., "Collectible").
    pub category: String,
    /// Stock-keeping unit code.
    pub sku: String,
    /// Brand name.
    pub brand: String,
    /// Variant label (e.g., "Plush", "Blind Box").
    pub variant: String,
    /// Resolved display image URL.
    pub image_url: String,
}

/// Static, in-memory list of product records.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an already-resolved product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(seed::demo_products())
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Featured subset for the home page: any product whose name contains
    /// "labubu" (case-insensitive) or whose category is "Collectible".
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(FEATURED_NAME_FRAGMENT)
                    || p.category == FEATURED_CATEGORY
            })
            .collect()
    }

    /// Case-insensitive substring search over name, description and category.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Up to `limit` products related to `product`: same-category products in
    /// shuffled order, padded with random others when the category is small.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        let mut rng = rand::rng();

        let mut same_category: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.id != product.id && p.category == product.category)
            .collect();
        same_category.shuffle(&mut rng);
        same_category.truncate(limit);

        if same_category.len() < limit {
            let mut others: Vec<&Product> = self
                .products
                .iter()
                .filter(|p| p.id != product.id && !same_category.iter().any(|s| s.id == p.id))
                .collect();
            others.shuffle(&mut rng);
            same_category.extend(others);
            same_category.truncate(limit);
        }

        same_category
    }
}
