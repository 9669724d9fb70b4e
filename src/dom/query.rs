//! DOM queries: by id or selector; scoped to a subtree or the document.
//!
//! Document queries walk the tree under the root in document order, the way
//! `getElementById` / `querySelectorAll` see a page. Detached nodes are never
//! returned.

use super::node::NodeId;
use super::tree::Dom;
use crate::selector::Selector;

impl Dom {
    /// First node in document order whose id matches.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|&node| self.get(node).is_some_and(|d| d.id.as_deref() == Some(id)))
    }

    /// First node in document order matching `selector`.
    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|&node| selector.matches(node, self))
    }

    /// All nodes matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|&node| selector.matches(node, self))
            .collect()
    }

    /// First descendant of `scope` matching `selector`. `scope` itself is not
    /// a candidate.
    pub fn query_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&node| selector.matches(node, self))
    }

    /// Descendants of `form` that carry a `name` attribute, in document order.
    pub fn form_controls(&self, form: NodeId) -> Vec<NodeId> {
        self.descendants(form)
            .into_iter()
            .filter(|&node| self.get(node).is_some_and(|d| d.control_name().is_some()))
            .collect()
    }

    /// Value of the first named control under `form`, like `FormData.get`.
    pub fn form_value(&self, form: NodeId, name: &str) -> Option<&str> {
        self.form_controls(form).into_iter().find_map(|node| {
            let data = self.get(node)?;
            (data.control_name() == Some(name)).then_some(data.value.as_str())
        })
    }
}
