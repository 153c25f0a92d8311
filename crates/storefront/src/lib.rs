//! Brandazon Storefront engine.
//!
//! A headless demo storefront ("Brandazon") with a simulated search-ad engine
//! ("Moogle"), built to illustrate marketing-attribution analytics. The engine
//! is a deterministic, single-threaded state machine over an in-memory catalog:
//! hash-based navigation with explicit history, a shopping cart, and
//! Segment-shaped analytics events emitted through an injected, optional sink.
//!
//! # Architecture
//!
//! - [`catalog`] - Immutable in-memory product catalog
//! - [`attribution`] - Campaign-parameter (UTM/gclid) query-string parsing
//! - [`analytics`] - Sink trait, nullable handle and event payload shaping
//! - [`routing`] - Page/URL mapping and explicit browser-style history
//! - [`cart`] - Ordered cart lines with event-paired mutations
//! - [`search`] - The Moogle simulated search-ad engine
//! - [`session`] - The facade tying state, history and emissions together
//!
//! State is the source of truth; the URL is a derived projection, re-derived on
//! every navigation and re-parsed on every history pop.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod attribution;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod routing;
pub mod search;
pub mod session;

pub use analytics::{Analytics, AnalyticsSink};
pub use cart::{Cart, CartLine, OrderSummary};
pub use catalog::{Catalog, Product};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use routing::{History, Location, NavigateOptions, Page};
pub use search::AdResult;
pub use session::{Session, View};
