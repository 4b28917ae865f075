//! Feed renderer
//!
//! Fetches the latest broadcast and renders the top edges into a mounted
//! container. Every failure ends in the same fallback text; nothing is
//! returned to the caller as an error.

use std::sync::Arc;

use crate::config::Config;
use crate::dom::{ClickListener, Node};
use crate::domain::ports::{AnalyticsEvent, AnalyticsSink, Container, Document, FeedSource};
use crate::error::FeedError;
use crate::feed::{self, BoardView};

/// What a render call ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No container with that id; nothing was touched
    MissingContainer,
    /// The board is on screen with this many cards
    Rendered { cards: usize },
    /// The fallback text is on screen
    Fallback,
}

/// Renders broadcast boards into document containers
pub struct FeedRenderer<FS, D, A>
where
    FS: FeedSource,
    D: Document,
    A: AnalyticsSink + 'static,
{
    feed: Arc<FS>,
    document: Arc<D>,
    analytics: Arc<A>,
    config: Config,
}

impl<FS, D, A> FeedRenderer<FS, D, A>
where
    FS: FeedSource,
    D: Document,
    A: AnalyticsSink + 'static,
{
    pub fn new(feed: Arc<FS>, document: Arc<D>, analytics: Arc<A>, config: Config) -> Self {
        Self {
            feed,
            document,
            analytics,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the board into the container with id `container_id`.
    ///
    /// Shows a loading placeholder, fetches the feed once, then replaces the
    /// container's content with the header and card list, or with the
    /// fallback text on any failure. Concurrent calls on one container are
    /// not coordinated; the last to finish wins.
    pub async fn render(&self, container_id: &str) -> RenderOutcome {
        let Some(container) = self.document.element_by_id(container_id) else {
            tracing::debug!(container_id, "Board container not mounted, skipping render");
            return RenderOutcome::MissingContainer;
        };

        container.replace_children(vec![feed::loading_node(&self.config.loading_text)]);

        match self.load().await {
            Ok(view) => {
                let cards = view.cards.len();
                container.replace_children(self.materialize(&view));
                record_quietly(self.analytics.as_ref(), view.viewed_event());
                tracing::debug!(container_id, cards, source = %view.source, "Board rendered");
                RenderOutcome::Rendered { cards }
            }
            Err(e) => {
                container.set_text_content(&self.config.fallback_text);
                tracing::warn!(container_id, error = %e, "Broadcast feed load failed");
                RenderOutcome::Fallback
            }
        }
    }

    async fn load(&self) -> Result<BoardView, FeedError> {
        let payload = self.feed.fetch_latest().await?;
        feed::build_board(&payload, &self.config)
    }

    /// Header followed by the card list
    fn materialize(&self, view: &BoardView) -> Vec<Node> {
        let cards = view
            .cards
            .iter()
            .map(|card| feed::card_node(card, Some(self.click_listener(card.activation.clone()))))
            .collect();

        vec![
            feed::header_node(&view.branding, &self.config.header_suffix),
            feed::list_node(cards),
        ]
    }

    fn click_listener(&self, event: AnalyticsEvent) -> ClickListener {
        let analytics = self.analytics.clone();
        ClickListener::new(move || record_quietly(analytics.as_ref(), event.clone()))
    }
}

/// Analytics never gets in the way of rendering or clicks
fn record_quietly<A: AnalyticsSink + ?Sized>(analytics: &A, event: AnalyticsEvent) {
    let name = event.name();
    if let Err(e) = analytics.record(event) {
        tracing::debug!(event = name, error = %e, "Analytics event dropped");
    }
}
