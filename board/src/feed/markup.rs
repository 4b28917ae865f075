//! Board markup
//!
//! Turns view models into document nodes. Class names are the ones the
//! host stylesheet targets: `broadcast-header`, `broadcast-list`,
//! `edge-card`, `edge-rank`, `edge-body`, `edge-title`, `edge-signal`,
//! `muted`.

use crate::dom::{ClickListener, Element, Node};
use crate::domain::entities::BrandingInfo;

use super::view::EdgeCardView;

/// Transient placeholder shown while the feed is in flight
pub fn loading_node(text: &str) -> Node {
    Element::new("div").class("muted").text(text).into()
}

/// `<h3>` with the branding, linked when a URL is known
pub fn header_node(branding: &BrandingInfo, suffix: &str) -> Node {
    let title = format!("{} {}", branding.emoji, branding.label);

    let heading = match &branding.url {
        Some(url) => Element::new("h3").child(
            Element::new("a")
                .attr("href", url.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener")
                .text(title),
        ),
        None => Element::new("h3").text(title),
    };

    Element::new("div")
        .class("broadcast-header")
        .child(heading.text(suffix))
        .into()
}

pub fn card_node(card: &EdgeCardView, listener: Option<ClickListener>) -> Node {
    let mut signal = Element::new("div")
        .class("edge-signal")
        .class(&card.side_tag)
        .text("Suggested: ")
        .child(bold(&card.side_label));
    if let Some(edge) = &card.edge_pct {
        signal = signal.text(" · Edge: ").child(bold(&format!("{}%", edge)));
    }

    let body = Element::new("div")
        .class("edge-body")
        .child(Element::new("div").class("edge-title").text(card.title.as_str()))
        .child(Element::new("div").class("muted").text(card.meta.as_str()))
        .child(
            Element::new("div")
                .text("Proj Total: ")
                .child(bold(&card.proj_total))
                .text(" · Market: ")
                .child(bold(&card.market_total)),
        )
        .child(signal);

    let mut el = Element::new("div")
        .class("edge-card")
        .child(Element::new("div").class("edge-rank").text(card.rank_badge.as_str()))
        .child(body);
    if let Some(listener) = listener {
        el = el.on_click(listener);
    }
    el.into()
}

pub fn list_node(cards: Vec<Node>) -> Node {
    cards
        .into_iter()
        .fold(Element::new("div").class("broadcast-list"), |list, card| {
            list.child(card)
        })
        .into()
}

fn bold(text: &str) -> Element {
    Element::new("b").text(text)
}
