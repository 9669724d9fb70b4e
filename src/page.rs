//! Page: the document plus its viewport.
//!
//! [`Page`] is what the controller mutates. It wraps the [`Dom`] with the
//! window-level state a page script sees: vertical scroll position and the
//! last smooth `scrollIntoView` request.

use crate::dom::{Dom, NodeData, NodeId};
use crate::selector::{parse_selector, SelectorError};

/// Errors from page lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("no element matches {selector}")]
    MissingElement { selector: String },
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// A recorded smooth `scrollIntoView` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
    /// Offset the target's top edge was aligned to.
    pub top: i32,
}

/// Window scroll state.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    /// Vertical scroll offset (`window.scrollY`).
    pub scroll_y: i32,
    /// The most recent scroll-into-view request, if any.
    pub last_scroll: Option<ScrollRequest>,
}

/// A document and its viewport.
#[derive(Default)]
pub struct Page {
    pub dom: Dom,
    pub viewport: Viewport,
}

impl Page {
    /// Create a page around an existing DOM with the viewport at the top.
    pub fn new(dom: Dom) -> Self {
        Self {
            dom,
            viewport: Viewport::default(),
        }
    }

    /// `getElementById`, as a `Result`.
    pub fn require_id(&self, id: &str) -> Result<NodeId, PageError> {
        self.dom
            .query_by_id(id)
            .ok_or_else(|| PageError::MissingElement {
                selector: format!("#{id}"),
            })
    }

    /// `querySelector`, as a `Result`. Unparseable selectors are errors too.
    pub fn require(&self, selector: &str) -> Result<NodeId, PageError> {
        let parsed = parse_selector(selector)?;
        self.dom
            .query_selector(&parsed)
            .ok_or_else(|| PageError::MissingElement {
                selector: selector.to_owned(),
            })
    }

    /// `querySelectorAll`. An unparseable selector matches nothing.
    pub fn select_all(&self, selector: &str) -> Vec<NodeId> {
        parse_selector(selector)
            .map(|parsed| self.dom.query_selector_all(&parsed))
            .unwrap_or_default()
    }

    /// Immutable node access.
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.dom.get(id)
    }

    /// Mutable node access.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.dom.get_mut(id)
    }

    /// Set the vertical scroll offset directly, clamped at zero.
    pub fn scroll_to(&mut self, y: i32) {
        self.viewport.scroll_y = y.max(0);
    }

    /// Smooth-scroll so the top of `target` meets the top of the viewport,
    /// recording the request. Returns `false` if `target` no longer exists.
    pub fn scroll_into_view(&mut self, target: NodeId) -> bool {
        let Some(top) = self.dom.get(target).map(|n| n.layout.offset_top) else {
            return false;
        };
        self.scroll_to(top);
        self.viewport.last_scroll = Some(ScrollRequest { target, top });
        true
    }
}
