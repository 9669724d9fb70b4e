//! Selector matching against the DOM.

use super::model::{Combinator, CompoundSelector, Selector, SelectorPart, SimpleSelector};
use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Dom;

impl Selector {
    /// Whether this selector matches `node_id` in `dom`.
    ///
    /// Walks the parts right to left; descendant combinators backtrack over
    /// every matching ancestor, so `.a .b .c` matches regardless of which `.b`
    /// ancestor is tried first.
    pub fn matches(&self, node_id: NodeId, dom: &Dom) -> bool {
        match self.parts.len() {
            0 => false,
            len => matches_from(&self.parts, len - 1, node_id, dom),
        }
    }
}

fn matches_from(parts: &[SelectorPart], idx: usize, node_id: NodeId, dom: &Dom) -> bool {
    let SelectorPart::Compound(compound) = &parts[idx] else {
        return false;
    };
    let Some(node) = dom.get(node_id) else {
        return false;
    };
    if !matches_compound(compound, node) {
        return false;
    }
    if idx == 0 {
        return true;
    }
    if idx < 2 {
        // Leading combinator with nothing to its left.
        return false;
    }
    let SelectorPart::Combinator(combinator) = &parts[idx - 1] else {
        return false;
    };

    match combinator {
        Combinator::Child => dom
            .parent(node_id)
            .is_some_and(|parent| matches_from(parts, idx - 2, parent, dom)),
        Combinator::Descendant => dom
            .ancestors(node_id)
            .into_iter()
            .any(|ancestor| matches_from(parts, idx - 2, ancestor, dom)),
    }
}

/// Check whether a compound selector matches a single node's data.
pub fn matches_compound(compound: &CompoundSelector, node: &NodeData) -> bool {
    compound.components.iter().all(|component| match component {
        SimpleSelector::Type(name) => node.tag.eq_ignore_ascii_case(name),
        SimpleSelector::Universal => true,
        SimpleSelector::Id(id) => node.id.as_deref() == Some(id.as_str()),
        SimpleSelector::Class(class) => node.has_class(class),
        SimpleSelector::Attribute { name, value } => match (node.attr(name), value) {
            (Some(actual), Some(expected)) => actual == expected,
            (Some(_), None) => true,
            (None, _) => false,
        },
    })
}
