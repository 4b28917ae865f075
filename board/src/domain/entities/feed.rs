//! Broadcast feed entities
//!
//! The wire shape published at `signals/latest.json`. The feed is written by
//! an external producer, so every field is optional and read leniently.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use super::scalar::Scalar;

/// A published broadcast: branding hints plus the ranked items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedPayload {
    /// Short feed key, e.g. "the_gambler"
    #[serde(deserialize_with = "lenient::string")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub sport: Option<String>,
    /// Explicit branding override
    #[serde(deserialize_with = "lenient::origin")]
    pub origin: Option<Origin>,
    /// Ranked items in display order
    #[serde(deserialize_with = "lenient::items")]
    pub items: Vec<EdgeItem>,

    // Producer metadata, not displayed
    #[serde(deserialize_with = "lenient::string")]
    pub broadcast_key: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub generated_at: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub season: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub week: Option<i64>,
}

impl FeedPayload {
    /// Parse a response body.
    ///
    /// Only syntactically invalid JSON is an error. Valid JSON that is not an
    /// object yields an empty payload.
    pub fn from_json_str(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// Producer-supplied branding for the header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    #[serde(deserialize_with = "lenient::string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub emoji: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
}

/// One ranked signal row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeItem {
    /// Display label only; the feed order is authoritative
    #[serde(deserialize_with = "lenient::integer")]
    pub rank: Option<i64>,
    #[serde(deserialize_with = "lenient::string")]
    pub away: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub home: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub venue: Option<String>,
    /// ISO-8601 start time
    #[serde(deserialize_with = "lenient::string")]
    pub start_et: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub proj_total: Option<Scalar>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub market_total: Option<Scalar>,
    #[serde(deserialize_with = "lenient::string")]
    pub suggested_side: Option<String>,
    /// Fraction, 0.0 to 1.0 expected
    #[serde(deserialize_with = "lenient::scalar")]
    pub edge_pct: Option<Scalar>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub game_id: Option<Scalar>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub over_prob: Option<Scalar>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub under_prob: Option<Scalar>,
}

impl EdgeItem {
    /// Objects are read field by field; any other element is an empty item
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
