//! Application layer
//!
//! Orchestrates the feed source, the document and analytics for one render.

pub mod feed_renderer;

pub use feed_renderer::{FeedRenderer, RenderOutcome};
