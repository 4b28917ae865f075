//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod datalayer;
pub mod http;
pub mod memory;

pub use datalayer::{DataLayer, NoopAnalyticsSink};
pub use http::HttpFeedSource;
pub use memory::{InMemoryDocument, MemoryContainer};
