//! Analytics sink printing each emission as one JSON line on stdout.

use std::sync::atomic::{AtomicUsize, Ordering};

use brandazon_storefront::AnalyticsSink;
use serde_json::{Value, json};

/// Stdout sink for the scripted flows.
#[derive(Debug, Default)]
pub struct JsonLineSink {
    emitted: AtomicUsize,
}

impl JsonLineSink {
    /// Number of emissions printed so far.
    pub fn emitted(&self) -> usize {
        self.emitted.load(Ordering::Relaxed)
    }

    #[allow(clippy::print_stdout)]
    fn emit(&self, line: &Value) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
        println!("{line}");
    }
}

impl AnalyticsSink for JsonLineSink {
    fn track(&self, event: &str, properties: Value) {
        self.emit(&json!({
            "type": "track",
            "event": event,
            "properties": properties,
        }));
    }

    fn page(&self, name: &str, properties: Value) {
        self.emit(&json!({
            "type": "page",
            "name": name,
            "properties": properties,
        }));
    }
}
