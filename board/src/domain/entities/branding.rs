//! Header branding
//!
//! Resolved per render from the payload's `origin` override, the `source`
//! key and a table of known sources. Never stored.

use std::collections::HashMap;

use super::feed::FeedPayload;

pub const DEFAULT_LABEL: &str = "Broadcast";
pub const DEFAULT_EMOJI: &str = "📡";

/// Resolved header branding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandingInfo {
    pub label: String,
    pub emoji: String,
    /// When present the header links here
    pub url: Option<String>,
}

/// Fallback branding for a known source key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBrand {
    pub label: String,
    pub emoji: String,
}

/// Known source keys and their fallback branding
#[derive(Debug, Clone)]
pub struct BrandingTable {
    brands: HashMap<String, SourceBrand>,
}

impl Default for BrandingTable {
    fn default() -> Self {
        Self::empty().with_source("the_gambler", "The Gambler", "🎲")
    }
}

impl BrandingTable {
    pub fn empty() -> Self {
        Self {
            brands: HashMap::new(),
        }
    }

    /// Register (or replace) the fallback branding for a source key
    pub fn with_source(mut self, key: &str, label: &str, emoji: &str) -> Self {
        self.brands.insert(
            key.to_string(),
            SourceBrand {
                label: label.to_string(),
                emoji: emoji.to_string(),
            },
        );
        self
    }

    pub fn lookup(&self, source: &str) -> Option<&SourceBrand> {
        self.brands.get(source)
    }

    /// Resolve branding for a payload.
    ///
    /// Label: `origin.label`, then the known-source label, then the raw
    /// `source`, then "Broadcast". Emoji: `origin.emoji`, then the
    /// known-source emoji, then "📡". Empty strings are skipped.
    pub fn resolve(&self, payload: &FeedPayload) -> BrandingInfo {
        let origin = payload.origin.as_ref();
        let source = non_empty(payload.source.as_deref());
        let known = source.and_then(|s| self.lookup(s));

        let label = non_empty(origin.and_then(|o| o.label.as_deref()))
            .or_else(|| known.map(|b| b.label.as_str()))
            .or(source)
            .unwrap_or(DEFAULT_LABEL)
            .to_string();

        let emoji = non_empty(origin.and_then(|o| o.emoji.as_deref()))
            .or_else(|| known.map(|b| b.emoji.as_str()))
            .unwrap_or(DEFAULT_EMOJI)
            .to_string();

        let url = non_empty(origin.and_then(|o| o.url.as_deref())).map(str::to_string);

        BrandingInfo { label, emoji, url }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
