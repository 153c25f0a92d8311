//! Integration tests for the Brandazon attribution demo.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brandazon-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_navigation` - Navigation, history pops and the page-name override
//! - `cart_checkout` - Cart mutations and the order event
//! - `attribution_flow` - The end-to-end Moogle-to-attribution path
//!
//! Everything runs in-process against the demo catalog; there is no server,
//! no database and no network. Emissions are captured with a recording sink
//! and asserted as JSON.

use std::sync::Arc;

use brandazon_storefront::analytics::sinks::RecordingSink;
use brandazon_storefront::{Analytics, Catalog, Session, StorefrontConfig};

/// A session over the demo catalog with a recording sink attached.
#[must_use]
pub fn recorded_session() -> (Session, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let config = StorefrontConfig::default();
    let session = Session::new(
        &config,
        Arc::new(Catalog::demo()),
        Analytics::new(sink.clone()),
    );
    (session, sink)
}
