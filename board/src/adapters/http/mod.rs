//! HTTP adapter
//!
//! Fetches the broadcast feed with reqwest.

pub mod feed_client;

pub use feed_client::HttpFeedSource;
