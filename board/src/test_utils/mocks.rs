//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and let
//! tests verify what the renderer did.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

use crate::domain::entities::FeedPayload;
use crate::domain::ports::{AnalyticsEvent, AnalyticsSink, FeedSource};
use crate::error::{AnalyticsError, FeedError};

// ============================================================================
// Static Feed Source
// ============================================================================

enum Canned {
    Payload(FeedPayload),
    Body(String),
    Status(u16),
}

/// Answers every fetch with the same canned response
pub struct StaticFeedSource {
    canned: Canned,
    fetches: AtomicUsize,
}

impl StaticFeedSource {
    fn new(canned: Canned) -> Self {
        Self {
            canned,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn payload(payload: FeedPayload) -> Self {
        Self::new(Canned::Payload(payload))
    }

    /// Parsed the way an HTTP body would be
    pub fn body(body: &str) -> Self {
        Self::new(Canned::Body(body.to_string()))
    }

    pub fn status(status: u16) -> Self {
        Self::new(Canned::Status(status))
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch_latest(&self) -> Result<FeedPayload, FeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.canned {
            Canned::Payload(payload) => Ok(payload.clone()),
            Canned::Body(body) => Ok(FeedPayload::from_json_str(body)?),
            Canned::Status(status) => Err(FeedError::Status { status: *status }),
        }
    }
}

// ============================================================================
// Pending Feed Source
// ============================================================================

#[derive(Default)]
struct Gate {
    started: Notify,
    released: Notify,
}

/// Holds every fetch until the test releases it
pub struct PendingFeedSource {
    payload: FeedPayload,
    gate: Arc<Gate>,
}

impl PendingFeedSource {
    pub fn new(payload: FeedPayload) -> Self {
        Self {
            payload,
            gate: Arc::new(Gate::default()),
        }
    }

    pub fn release_handle(&self) -> ReleaseHandle {
        ReleaseHandle(self.gate.clone())
    }
}

#[async_trait]
impl FeedSource for PendingFeedSource {
    async fn fetch_latest(&self) -> Result<FeedPayload, FeedError> {
        self.gate.started.notify_one();
        self.gate.released.notified().await;
        Ok(self.payload.clone())
    }
}

pub struct ReleaseHandle(Arc<Gate>);

impl ReleaseHandle {
    /// Resolves once a fetch is in flight
    pub async fn wait_started(&self) {
        self.0.started.notified().await;
    }

    pub fn release(&self) {
        self.0.released.notify_one();
    }
}

// ============================================================================
// Analytics Sinks
// ============================================================================

/// Keeps every event it is given
#[derive(Default)]
pub struct RecordingAnalyticsSink {
    events: RwLock<Vec<AnalyticsEvent>>,
}

impl RecordingAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.read().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.write().unwrap().clear();
    }
}

impl AnalyticsSink for RecordingAnalyticsSink {
    fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.events.write().unwrap().push(event);
        Ok(())
    }
}

/// Behaves like a host with no analytics queue at all
pub struct FailingAnalyticsSink;

impl AnalyticsSink for FailingAnalyticsSink {
    fn record(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Unavailable("dataLayer is not defined".to_string()))
    }
}
