//! Feed module
//!
//! Payload to view models to document nodes.

pub mod markup;
pub mod view;

pub use markup::{card_node, header_node, list_node, loading_node};
pub use view::{build_board, build_card, BoardView, EdgeCardView, PLACEHOLDER};
