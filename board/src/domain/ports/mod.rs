//! Domain ports (traits)
//!
//! Port traits define interfaces that the renderer requires.
//! Adapters provide concrete implementations of these traits.

pub mod analytics;
pub mod document;
pub mod feed_source;

pub use analytics::{AnalyticsEvent, AnalyticsSink};
pub use document::{Container, Document};
pub use feed_source::FeedSource;
