//! Analytics sink port trait
//!
//! Defines the interface for recording board analytics. The board only
//! appends events; it never reads them back.

use serde::Serialize;

use crate::domain::entities::Scalar;
use crate::error::AnalyticsError;

/// Event records, serialized as `{"event": "<name>", ...fields}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum AnalyticsEvent {
    /// A board rendered successfully
    #[serde(rename = "signal_broadcast_viewed")]
    BroadcastViewed {
        source: String,
        label: String,
        items: usize,
    },
    /// A card was clicked
    #[serde(rename = "edge_card_clicked")]
    EdgeCardClicked {
        source: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        game_id: Option<Scalar>,
        #[serde(skip_serializing_if = "Option::is_none")]
        side: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        edge_pct: Option<Scalar>,
    },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::BroadcastViewed { .. } => "signal_broadcast_viewed",
            AnalyticsEvent::EdgeCardClicked { .. } => "edge_card_clicked",
        }
    }
}

/// Port trait for analytics operations.
///
/// Implementations report failure through `Err` and must not panic: `record`
/// runs inside rendering and click handling, and a panic unwinds through them.
pub trait AnalyticsSink: Send + Sync {
    /// Append one event
    fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn view_event_shape() {
        let event = AnalyticsEvent::BroadcastViewed {
            source: "the_gambler".to_string(),
            label: "The Gambler".to_string(),
            items: 3,
        };

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event": "signal_broadcast_viewed",
                "source": "the_gambler",
                "label": "The Gambler",
                "items": 3
            })
        );
    }

    #[test]
    fn click_event_omits_absent_fields() {
        let event = AnalyticsEvent::EdgeCardClicked {
            source: "the_gambler".to_string(),
            game_id: Some(Scalar::Text("KC@LAC".to_string())),
            side: None,
            edge_pct: None,
        };

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["event"], "edge_card_clicked");
        assert_eq!(value["game_id"], "KC@LAC");
        assert!(value.get("side").is_none());
        assert!(value.get("edge_pct").is_none());
        assert_eq!(event.name(), "edge_card_clicked");
    }
}
