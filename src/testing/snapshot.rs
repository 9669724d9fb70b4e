//! Text rendering of DOM state for snapshot assertions.

use crate::dom::{Dom, NodeData, NodeId};

/// Render one element as a single line of HTML, its children omitted.
///
/// Returns an empty string for a stale id.
pub fn element_to_string(dom: &Dom, id: NodeId) -> String {
    match dom.get(id) {
        Some(node) => format!("{}{}</{}>", open_tag(node), node.text, node.tag),
        None => String::new(),
    }
}

/// Render the document as an indented outline, one element per line.
///
/// Each line is an opening tag followed by the element's own text; children
/// are indented two spaces deeper than their parent.
pub fn dom_to_string(dom: &Dom) -> String {
    let mut lines = Vec::new();
    if let Some(root) = dom.root() {
        outline(dom, root, 0, &mut lines);
    }
    lines.join("\n")
}

fn outline(dom: &Dom, id: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(node) = dom.get(id) else {
        return;
    };
    lines.push(format!("{}{}{}", "  ".repeat(depth), open_tag(node), node.text));
    for &child in dom.children(id) {
        outline(dom, child, depth + 1, lines);
    }
}

fn open_tag(node: &NodeData) -> String {
    let mut parts = vec![node.tag.clone()];
    if let Some(id) = &node.id {
        parts.push(format!("id=\"{id}\""));
    }
    if !node.classes.is_empty() {
        parts.push(format!("class=\"{}\"", node.class_name()));
    }
    parts.extend(
        node.attributes
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\"")),
    );
    if !node.value.is_empty() {
        parts.push(format!("value=\"{}\"", node.value));
    }
    if let Some(width) = &node.width {
        parts.push(format!("style=\"width: {width}\""));
    }
    if node.disabled {
        parts.push("disabled".to_owned());
    }
    format!("<{}>", parts.join(" "))
}
