//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BRANDAZON_BASE_URL` - Origin the storefront pretends to be served from
//!   (default: `https://www.brandazon.com`). Navigation URLs and analytics
//!   `url` properties are derived from it.
//! - `BRANDAZON_CURRENCY` - ISO 4217 currency code (default: USD)
//! - `BRANDAZON_ANALYTICS_ENABLED` - Set to `false` to drop all analytics
//!   emissions (default: true)

use brandazon_core::CurrencyCode;
use thiserror::Error;
use url::Url;

/// Default origin for the demo storefront.
pub const DEFAULT_BASE_URL: &str = "https://www.brandazon.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Origin used when constructing navigation and analytics URLs
    pub base_url: Url,
    /// Currency reported on analytics payloads
    pub currency: CurrencyCode,
    /// Whether analytics emissions are enabled at all
    pub analytics_enabled: bool,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("BRANDAZON_BASE_URL", DEFAULT_BASE_URL)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BRANDAZON_BASE_URL".to_string(), e.to_string())
            })?;
        let currency = get_env_or_default("BRANDAZON_CURRENCY", "USD")
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("BRANDAZON_CURRENCY".to_string(), e))?;
        let analytics_enabled = get_env_or_default("BRANDAZON_ANALYTICS_ENABLED", "true")
            .parse::<bool>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "BRANDAZON_ANALYTICS_ENABLED".to_string(),
                    e.to_string(),
                )
            })?;

        Ok(Self {
            base_url,
            currency,
            analytics_enabled,
        })
    }
}

impl Default for StorefrontConfig {
    /// Built-in defaults, used by tests and the CLI when no environment is set.
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            currency: CurrencyCode::USD,
            analytics_enabled: true,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
