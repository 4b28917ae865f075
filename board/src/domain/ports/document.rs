//! Document port traits
//!
//! The host owns the document and mounts containers before rendering.
//! The board only looks containers up and replaces their content.

use crate::dom::Node;

/// A mounted element whose content the board may replace
pub trait Container: Send + Sync {
    /// Replace every child with `nodes`
    fn replace_children(&self, nodes: Vec<Node>);

    /// Replace every child with a single text node
    fn set_text_content(&self, text: &str);
}

/// Lookup of mounted containers by element id
pub trait Document: Send + Sync {
    type Container: Container;

    /// `None` when nothing with this id is mounted
    fn element_by_id(&self, id: &str) -> Option<Self::Container>;
}
