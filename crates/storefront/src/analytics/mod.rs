//! Analytics sink abstraction and event shaping.
//!
//! The analytics collaborator is optional by design: the engine is handed an
//! [`Analytics`] handle that may or may not carry a sink, and every emission
//! site goes through it. When no sink is present the call is a silent no-op -
//! never an error.

pub mod events;
pub mod sinks;

use std::sync::Arc;

use serde_json::Value;

/// An external event-tracking collaborator (Segment-shaped).
///
/// Implementations must be cheap to call; the engine fires events inline with
/// state transitions and never awaits or retries.
pub trait AnalyticsSink: Send + Sync {
    /// Record a named track event with its properties.
    fn track(&self, event: &str, properties: Value);

    /// Record a page view with its properties.
    fn page(&self, name: &str, properties: Value);
}

/// Injected, nullable handle to the analytics sink.
///
/// Cloning is cheap; clones share the same underlying sink.
#[derive(Clone, Default)]
pub struct Analytics {
    sink: Option<Arc<dyn AnalyticsSink>>,
}

impl Analytics {
    /// Wrap a sink.
    #[must_use]
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// A handle with no sink; every emission becomes a no-op.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { sink: None }
    }

    /// Whether a sink is attached.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Emit a track call, or do nothing when the sink is absent.
    pub fn track(&self, event: &str, properties: Value) {
        if let Some(sink) = &self.sink {
            sink.track(event, properties);
        } else {
            tracing::trace!(event, "analytics sink absent, dropping track call");
        }
    }

    /// Emit a page call, or do nothing when the sink is absent.
    pub fn page(&self, name: &str, properties: Value) {
        if let Some(sink) = &self.sink {
            sink.page(name, properties);
        } else {
            tracing::trace!(name, "analytics sink absent, dropping page call");
        }
    }
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::sinks::RecordingSink;
    use super::*;

    #[test]
    fn test_disabled_handle_is_a_noop() {
        let analytics = Analytics::disabled();
        assert!(!analytics.is_enabled());
        // Must not panic or error.
        analytics.track("Product Added", json!({"quantity": 1}));
        analytics.page("home", json!({"name": "Home Page"}));
    }

    #[test]
    fn test_enabled_handle_forwards_calls() {
        let sink = Arc::new(RecordingSink::default());
        let analytics = Analytics::new(sink.clone());
        assert!(analytics.is_enabled());

        analytics.track("Cart Viewed", json!({"cart_id": "c1"}));
        analytics.page("cart", json!({"name": "Shopping Cart Page"}));

        assert_eq!(sink.track_events(), vec!["Cart Viewed"]);
        assert_eq!(sink.page_names(), vec!["cart"]);
    }

    #[test]
    fn test_clones_share_the_sink() {
        let sink = Arc::new(RecordingSink::default());
        let analytics = Analytics::new(sink.clone());
        let clone = analytics.clone();
        clone.track("Product Added", json!({}));
        assert_eq!(sink.track_events(), vec!["Product Added"]);
    }
}
