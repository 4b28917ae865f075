//! Domain layer
//!
//! Contains the feed model with no I/O.
//! - `entities`: The published feed and derived branding
//! - `ports`: Trait definitions for the feed, the document and analytics

pub mod entities;
pub mod ports;
