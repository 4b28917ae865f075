use chrono::FixedOffset;

use crate::domain::entities::BrandingTable;

/// How start times are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockStyle {
    /// `01:00 PM`
    #[default]
    TwelveHour,
    /// `13:00`
    TwentyFourHour,
}

impl ClockStyle {
    pub fn format_str(self) -> &'static str {
        match self {
            ClockStyle::TwelveHour => "%I:%M %p",
            ClockStyle::TwentyFourHour => "%H:%M",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the feed path is resolved against
    pub base_url: String,
    /// Feed path relative to `base_url`
    pub feed_path: String,
    /// Query parameter carrying the cache-busting timestamp
    pub cache_bust_param: String,
    pub loading_text: String,
    /// Shown for every failure: unreachable, bad status, malformed or empty
    pub fallback_text: String,
    /// Appended to the header after the branding
    pub header_suffix: String,
    /// Reported as `source` in analytics when the feed names none
    pub default_source: String,
    pub branding: BrandingTable,
    pub clock: ClockStyle,
    /// Zone start times are shown in; the host's local zone when unset
    pub display_offset: Option<FixedOffset>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            feed_path: "signals/latest.json".to_string(),
            cache_bust_param: "ts".to_string(),
            loading_text: "Loading…".to_string(),
            fallback_text: "No broadcast available yet.".to_string(),
            header_suffix: " — Top-3 Edges".to_string(),
            default_source: "the_gambler".to_string(),
            branding: BrandingTable::default(),
            clock: ClockStyle::default(),
            display_offset: None,
        }
    }
}

impl Config {
    pub fn new(base_url: &str) -> Self {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_feed_path(mut self, path: &str) -> Self {
        self.feed_path = path.trim_start_matches("./").trim_start_matches('/').to_string();
        self
    }

    pub fn with_fallback_text(mut self, text: &str) -> Self {
        self.fallback_text = text.to_string();
        self
    }

    pub fn with_branding(mut self, branding: BrandingTable) -> Self {
        self.branding = branding;
        self
    }

    pub fn with_clock(mut self, clock: ClockStyle) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_display_offset(mut self, offset: FixedOffset) -> Self {
        self.display_offset = Some(offset);
        self
    }

    /// Full feed URL, without the cache-busting query
    pub fn feed_url(&self) -> String {
        format!("{}/{}", self.base_url, self.feed_path)
    }
}
