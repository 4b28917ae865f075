//! Document model
//!
//! Owned element trees and their HTML form.

pub mod html;
pub mod node;

pub use html::to_html;
pub use node::{ClickListener, Element, Node};
