//! Error types for the edge board
//!
//! This module defines error types for each layer:
//! - `FeedError`: Fetching and validating the broadcast feed
//! - `AnalyticsError`: Recording analytics events
//!
//! Neither escapes `FeedRenderer::render`. Feed errors collapse into the
//! fallback message, analytics errors are swallowed after logging.

use thiserror::Error;

/// Broadcast feed errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed feed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("No items")]
    EmptyFeed,
}

/// Analytics sink errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Analytics sink unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
