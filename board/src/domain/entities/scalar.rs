//! Numeric-or-string display values
//!
//! The producer writes totals and edges as JSON numbers, but hand-edited
//! feeds sometimes carry them as strings. Both are kept verbatim for display.

use serde::Serialize;
use serde_json::{Number, Value};

/// A JSON scalar the feed may send as either a number or a string
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    /// Keep numbers and strings, drop every other JSON type
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Scalar::Number(n)),
            Value::String(s) => Some(Scalar::Text(s)),
            _ => None,
        }
    }

    /// Numeric reading of the value, only when it is finite
    pub fn as_finite_f64(&self) -> Option<f64> {
        let parsed = match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
        };
        parsed.filter(|v| v.is_finite())
    }

    /// True for an empty or whitespace-only string
    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.trim().is_empty())
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(n) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{}", i)
                } else if let Some(v) = n.as_f64() {
                    // 45.0 displays as 45
                    if v.fract() == 0.0 && v.abs() < 1e15 {
                        write!(f, "{}", v as i64)
                    } else {
                        write!(f, "{}", v)
                    }
                } else {
                    write!(f, "{}", n)
                }
            }
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_numbers_and_strings_only() {
        assert!(Scalar::from_value(json!(8.5)).is_some());
        assert!(Scalar::from_value(json!("8.5")).is_some());
        assert!(Scalar::from_value(json!(true)).is_none());
        assert!(Scalar::from_value(json!(null)).is_none());
        assert!(Scalar::from_value(json!({"a": 1})).is_none());
    }

    #[test]
    fn displays_whole_floats_without_fraction() {
        let whole = Scalar::from_value(json!(45.0)).unwrap();
        let half = Scalar::from_value(json!(45.5)).unwrap();
        let int = Scalar::from_value(json!(9)).unwrap();

        assert_eq!(whole.to_string(), "45");
        assert_eq!(half.to_string(), "45.5");
        assert_eq!(int.to_string(), "9");
    }

    #[test]
    fn finite_reading_parses_numeric_strings() {
        let text = Scalar::Text(" 0.25 ".to_string());
        assert_eq!(text.as_finite_f64(), Some(0.25));

        let garbage = Scalar::Text("n/a".to_string());
        assert_eq!(garbage.as_finite_f64(), None);

        let infinite = Scalar::Text("inf".to_string());
        assert_eq!(infinite.as_finite_f64(), None);
    }

    #[test]
    fn serializes_untagged() {
        let n = Scalar::from_value(json!(0.123)).unwrap();
        let s = Scalar::Text("CIN@CLE".to_string());

        assert_eq!(serde_json::to_value(&n).unwrap(), json!(0.123));
        assert_eq!(serde_json::to_value(&s).unwrap(), json!("CIN@CLE"));
    }
}
