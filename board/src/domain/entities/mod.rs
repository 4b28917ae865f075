//! Domain entities
//!
//! The broadcast feed as published, and the branding derived from it.

pub mod branding;
pub mod feed;
mod lenient;
pub mod scalar;

pub use branding::{BrandingInfo, BrandingTable, SourceBrand, DEFAULT_EMOJI, DEFAULT_LABEL};
pub use feed::{EdgeItem, FeedPayload, Origin};
pub use scalar::Scalar;
