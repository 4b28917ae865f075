//! Edge board
//!
//! Renders the top-ranked edges from a published signal broadcast into a
//! mounted document container, and records view and click analytics.
//! Uses hexagonal (ports & adapters) architecture: the renderer depends on
//! the `FeedSource`, `Document` and `AnalyticsSink` traits, and adapters
//! provide HTTP, in-memory and data-layer implementations.
//!
//! ```no_run
//! use std::sync::Arc;
//! use edgeboard::{Config, DataLayer, FeedRenderer, HttpFeedSource, InMemoryDocument};
//!
//! # async fn run() {
//! let config = Config::new("https://signals.example.com");
//! let document = Arc::new(InMemoryDocument::new().with_container("gambler-top3"));
//! let renderer = FeedRenderer::new(
//!     Arc::new(HttpFeedSource::new(&config)),
//!     document.clone(),
//!     DataLayer::global(),
//!     config,
//! );
//!
//! renderer.render("gambler-top3").await;
//! println!("{}", document.inner_html("gambler-top3").unwrap_or_default());
//! # }
//! ```

pub mod adapters;
pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::{DataLayer, HttpFeedSource, InMemoryDocument, NoopAnalyticsSink};
pub use app::{FeedRenderer, RenderOutcome};
pub use config::{ClockStyle, Config};
pub use domain::entities::{BrandingInfo, BrandingTable, EdgeItem, FeedPayload, Origin, Scalar};
pub use domain::ports::{AnalyticsEvent, AnalyticsSink, Container, Document, FeedSource};
pub use error::{AnalyticsError, FeedError};
