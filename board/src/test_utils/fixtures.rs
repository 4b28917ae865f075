//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::FixedOffset;
use serde_json::json;

use crate::config::Config;
use crate::domain::entities::{EdgeItem, FeedPayload, Scalar};

/// Default config pinned to US Eastern daylight time
pub fn test_config() -> Config {
    Config::default().with_display_offset(FixedOffset::west_opt(4 * 3600).unwrap())
}

/// A fully populated item; text fields carry the rank
pub fn test_item(rank: i64) -> EdgeItem {
    EdgeItem {
        rank: Some(rank),
        away: Some(format!("AWY{}", rank)),
        home: Some(format!("HOM{}", rank)),
        venue: Some(format!("Stadium {}", rank)),
        start_et: Some("2025-09-14T13:00:00-04:00".to_string()),
        proj_total: Scalar::from_value(json!(47.3)),
        market_total: Scalar::from_value(json!(45.5)),
        suggested_side: Some("Over".to_string()),
        edge_pct: Scalar::from_value(json!(0.0474)),
        game_id: Some(Scalar::Text(format!("G{}", rank))),
        over_prob: None,
        under_prob: None,
    }
}

/// A "the_gambler" payload with `count` items ranked 1..=count
pub fn test_payload(count: i64) -> FeedPayload {
    FeedPayload {
        source: Some("the_gambler".to_string()),
        sport: Some("NFL".to_string()),
        items: (1..=count).map(test_item).collect(),
        ..Default::default()
    }
}

/// What the NFL producer writes to `signals/latest.json`
pub fn producer_feed_json() -> String {
    json!({
        "broadcast_key": "gambler_top3",
        "season": 2025,
        "week": 1,
        "sport": "NFL",
        "generated_at": "2025-09-10T08:00:00-04:00",
        "source": "the_gambler",
        "items": [
            {
                "game_id": "KC@LAC", "start_et": "2025-09-14T16:25:00-04:00",
                "venue": "SoFi Stadium", "away": "KC", "home": "LAC",
                "proj_total": 52.1, "market_total": 49.5,
                "over_prob": 0.6012, "under_prob": 0.3988,
                "edge_pct": 0.0721, "suggested_side": "Over", "rank": 1
            },
            {
                "game_id": "CIN@CLE", "start_et": "2025-09-14T13:00:00-04:00",
                "venue": "Cleveland Browns Stadium", "away": "CIN", "home": "CLE",
                "proj_total": 43.8, "market_total": 45.5,
                "over_prob": 0.4321, "under_prob": 0.5679,
                "edge_pct": 0.0441, "suggested_side": "Under", "rank": 2
            }
        ]
    })
    .to_string()
}
