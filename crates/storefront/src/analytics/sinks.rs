//! Sink implementations.
//!
//! `RecordingSink` backs the test suites; `TracingSink` turns events into
//! structured log lines for ad-hoc debugging.

use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use super::AnalyticsSink;

/// One recorded analytics call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Track { event: String, properties: Value },
    Page { name: String, properties: Value },
}

/// In-memory sink that records every call, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<SinkCall>>,
}

impl RecordingSink {
    /// All recorded calls, in emission order.
    #[must_use]
    pub fn calls(&self) -> Vec<SinkCall> {
        self.lock().clone()
    }

    /// Names of recorded track events, in emission order.
    #[must_use]
    pub fn track_events(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                SinkCall::Track { event, .. } => Some(event.clone()),
                SinkCall::Page { .. } => None,
            })
            .collect()
    }

    /// Names of recorded page calls, in emission order.
    #[must_use]
    pub fn page_names(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                SinkCall::Page { name, .. } => Some(name.clone()),
                SinkCall::Track { .. } => None,
            })
            .collect()
    }

    /// Properties of every recorded track call matching `event`.
    #[must_use]
    pub fn track_properties(&self, event: &str) -> Vec<Value> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                SinkCall::Track {
                    event: name,
                    properties,
                } if name == event => Some(properties.clone()),
                _ => None,
            })
            .collect()
    }

    /// Drop all recorded calls.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SinkCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&self, event: &str, properties: Value) {
        self.lock().push(SinkCall::Track {
            event: event.to_string(),
            properties,
        });
    }

    fn page(&self, name: &str, properties: Value) {
        self.lock().push(SinkCall::Page {
            name: name.to_string(),
            properties,
        });
    }
}

/// Sink that logs every call through `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn track(&self, event: &str, properties: Value) {
        tracing::info!(kind = "track", event, %properties, "analytics");
    }

    fn page(&self, name: &str, properties: Value) {
        tracing::info!(kind = "page", name, %properties, "analytics");
    }
}
