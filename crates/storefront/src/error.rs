//! Unified error handling for the storefront engine.
//!
//! Almost nothing in the engine is fatal: a missing analytics sink is a silent
//! no-op and unrecognized attribution keys are simply excluded. The one error
//! surfaced to callers is a product id that does not exist in the catalog,
//! which renderers turn into a "not found" view.

use brandazon_core::ProductId;
use thiserror::Error;

use crate::config::ConfigError;

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Requested product id is absent from the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Configuration failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_not_found_display() {
        let err = StorefrontError::ProductNotFound(ProductId::new("missing-product"));
        assert_eq!(err.to_string(), "product not found: missing-product");
    }
}
