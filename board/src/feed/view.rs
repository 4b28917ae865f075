//! Board view models
//!
//! Normalizes a fetched payload into display-ready strings. Every optional
//! field is read with an explicit default; the payload itself is only
//! borrowed and never changed.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

use crate::config::{ClockStyle, Config};
use crate::domain::entities::{BrandingInfo, EdgeItem, FeedPayload, Scalar};
use crate::domain::ports::AnalyticsEvent;
use crate::error::FeedError;

/// Shown wherever a display value is missing
pub const PLACEHOLDER: &str = "?";

/// Separator between venue and start time
const META_SEPARATOR: &str = " · ";

/// A board ready to be turned into nodes
#[derive(Debug, Clone)]
pub struct BoardView {
    pub branding: BrandingInfo,
    /// Feed key reported in analytics
    pub source: String,
    /// One card per feed item, in feed order
    pub cards: Vec<EdgeCardView>,
}

impl BoardView {
    /// The event recorded once a board is on screen
    pub fn viewed_event(&self) -> AnalyticsEvent {
        AnalyticsEvent::BroadcastViewed {
            source: self.source.clone(),
            label: self.branding.label.clone(),
            items: self.cards.len(),
        }
    }
}

/// Display strings for one card
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCardView {
    /// `#1`, or `#` without a rank
    pub rank_badge: String,
    /// `away @ home`
    pub title: String,
    /// `venue · time`, either part may be missing
    pub meta: String,
    pub proj_total: String,
    pub market_total: String,
    pub side_label: String,
    /// Lower-cased, class-safe side; empty when unknown
    pub side_tag: String,
    /// Percentage without the `%`, one decimal
    pub edge_pct: Option<String>,
    /// Event recorded when the card is clicked
    pub activation: AnalyticsEvent,
}

/// Build the board for a payload.
///
/// A payload without items is an error: there is nothing to show.
pub fn build_board(payload: &FeedPayload, config: &Config) -> Result<BoardView, FeedError> {
    if payload.items.is_empty() {
        return Err(FeedError::EmptyFeed);
    }

    let source = payload
        .source
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(config.default_source.as_str())
        .to_string();

    let cards = payload
        .items
        .iter()
        .map(|item| build_card(item, &source, config))
        .collect();

    Ok(BoardView {
        branding: config.branding.resolve(payload),
        source,
        cards,
    })
}

pub fn build_card(item: &EdgeItem, source: &str, config: &Config) -> EdgeCardView {
    let rank_badge = match item.rank {
        Some(rank) => format!("#{}", rank),
        None => "#".to_string(),
    };

    let title = format!(
        "{} @ {}",
        text_or(item.away.as_deref(), PLACEHOLDER),
        text_or(item.home.as_deref(), PLACEHOLDER)
    );

    let start = format_start(item.start_et.as_deref(), config.clock, config.display_offset);
    let meta = [text_or(item.venue.as_deref(), ""), start.as_deref().unwrap_or("")]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(META_SEPARATOR);

    EdgeCardView {
        rank_badge,
        title,
        meta,
        proj_total: scalar_or(item.proj_total.as_ref(), PLACEHOLDER),
        market_total: scalar_or(item.market_total.as_ref(), PLACEHOLDER),
        side_label: text_or(item.suggested_side.as_deref(), PLACEHOLDER).to_string(),
        side_tag: side_tag(item.suggested_side.as_deref()),
        edge_pct: format_edge_pct(item.edge_pct.as_ref()),
        activation: AnalyticsEvent::EdgeCardClicked {
            source: source.to_string(),
            game_id: item.game_id.clone(),
            side: item.suggested_side.clone(),
            edge_pct: item.edge_pct.clone(),
        },
    }
}

/// `0.123` becomes `"12.3"`; non-finite or non-numeric values are omitted.
///
/// Ties round away from zero (`0.0125` is `"1.3"`). Null and empty strings
/// are omitted rather than shown as `0.0`.
pub fn format_edge_pct(edge: Option<&Scalar>) -> Option<String> {
    edge.and_then(Scalar::as_finite_f64)
        .map(|fraction| format!("{:.1}", (fraction * 1000.0).round() / 10.0))
}

/// Lower-cased side usable as a class name
pub fn side_tag(side: Option<&str>) -> String {
    side.unwrap_or("")
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Time of day for an ISO-8601 start, `None` when absent or unparseable.
///
/// Zoned timestamps are converted to `offset` (the local zone when unset);
/// naive timestamps are taken as already being wall-clock time there.
/// Date-only values are midnight UTC.
pub fn format_start(
    raw: Option<&str>,
    clock: ClockStyle,
    offset: Option<FixedOffset>,
) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    let fmt = clock.format_str();

    if let Some(instant) = parse_zoned(raw) {
        let text = match offset {
            Some(offset) => instant.with_timezone(&offset).format(fmt).to_string(),
            None => instant.with_timezone(&Local).format(fmt).to_string(),
        };
        return Some(text);
    }

    parse_naive(raw).map(|wall| wall.format(fmt).to_string())
}

fn parse_zoned(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Blank strings count as missing
fn text_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|s| !s.trim().is_empty()).unwrap_or(default)
}

fn scalar_or(value: Option<&Scalar>, default: &str) -> String {
    value
        .filter(|s| !s.is_blank())
        .map(|s| s.to_string())
        .unwrap_or_else(|| default.to_string())
}
