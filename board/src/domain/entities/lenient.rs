//! Lenient field deserializers
//!
//! Each helper accepts any JSON value and keeps it only when it has a usable
//! shape. A wrong type turns into `None` for that field instead of failing
//! the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::feed::{EdgeItem, Origin};
use super::scalar::Scalar;

/// Strings pass through, numbers are stringified, everything else is absent
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

pub fn scalar<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(Scalar::from_value))
}

/// Integers, whole floats and integer strings
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|v| v.fract() == 0.0).map(|v| v as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

pub fn origin<'de, D>(deserializer: D) -> Result<Option<Origin>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// A list keeps every element (malformed ones become empty items), anything else is empty
pub fn items<'de, D>(deserializer: D) -> Result<Vec<EdgeItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => values.into_iter().map(EdgeItem::from_value).collect(),
        _ => Vec::new(),
    })
}
