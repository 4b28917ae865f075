//! HTML serialization
//!
//! Text and attribute values are escaped; feed strings never reach the
//! output as markup.

use super::node::{Element, Node};

/// Serialize a node list the way `innerHTML` would read back
pub fn to_html(nodes: &[Node]) -> String {
    let mut buf = String::new();
    for node in nodes {
        write_node(node, &mut buf);
    }
    buf
}

fn write_node(node: &Node, buf: &mut String) {
    match node {
        Node::Text(text) => buf.push_str(&escape(text)),
        Node::Element(el) => write_element(el, buf),
    }
}

fn write_element(el: &Element, buf: &mut String) {
    buf.push('<');
    buf.push_str(&el.tag);

    if !el.classes.is_empty() {
        buf.push_str(&format!(" class=\"{}\"", escape(&el.classes.join(" "))));
    }
    for (name, value) in &el.attributes {
        buf.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    buf.push('>');

    for child in &el.children {
        write_node(child, buf);
    }

    buf.push_str(&format!("</{}>", el.tag));
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
