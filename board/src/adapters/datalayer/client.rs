//! Data layer analytics sink
//!
//! An append-only queue of plain `{event, ...fields}` records, the shape tag
//! managers consume. One process-wide queue is created lazily on first use;
//! separate instances can be made for isolation.

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::domain::ports::{AnalyticsEvent, AnalyticsSink};
use crate::error::AnalyticsError;

static GLOBAL: Lazy<Arc<DataLayer>> = Lazy::new(|| Arc::new(DataLayer::new()));

/// Append-only event queue
#[derive(Debug, Default)]
pub struct DataLayer {
    events: RwLock<Vec<Value>>,
}

impl DataLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide queue
    pub fn global() -> Arc<DataLayer> {
        GLOBAL.clone()
    }

    /// Snapshot of every record pushed so far, oldest first
    pub fn events(&self) -> Vec<Value> {
        self.events
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.read().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnalyticsSink for DataLayer {
    fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        let record = serde_json::to_value(&event)?;
        let mut events = self
            .events
            .write()
            .map_err(|e| AnalyticsError::Unavailable(e.to_string()))?;
        events.push(record);
        Ok(())
    }
}

/// A no-op analytics sink for hosts without a tag manager
pub struct NoopAnalyticsSink;

impl AnalyticsSink for NoopAnalyticsSink {
    fn record(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}
