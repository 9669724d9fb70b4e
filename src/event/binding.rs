//! Listener registry and resolution.
//!
//! [`ListenerRegistry`] records which [`Action`] runs for which element and
//! event kind. Resolution follows the bubble path, so a click on a spinner
//! inside a button reaches the button's listener.

use super::handler::EventDispatcher;
use super::input::{DomEvent, EventKind};
use crate::dom::{Dom, NodeId};

/// Handler a listener invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `#primary-btn` click.
    PrimaryAction,
    /// `#secondary-btn` click.
    SecondaryAction,
    /// `#demo-btn` click.
    DemoAction,
    /// `#contact-form` submit.
    ContactSubmit,
    /// Click on a `.navbar-nav .nav-link`.
    NavLink,
    /// Window scroll.
    TrackScroll,
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    Element(NodeId),
    Window,
}

/// A single bound listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub target: ListenerTarget,
    pub kind: EventKind,
    pub action: Action,
}

/// All listeners bound on a page, in binding order.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: Vec<Listener>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `action` to `kind` events on `element`.
    pub fn bind(&mut self, element: NodeId, kind: EventKind, action: Action) {
        self.listeners.push(Listener {
            target: ListenerTarget::Element(element),
            kind,
            action,
        });
    }

    /// Attach `action` to `kind` events on the window.
    pub fn bind_window(&mut self, kind: EventKind, action: Action) {
        self.listeners.push(Listener {
            target: ListenerTarget::Window,
            kind,
            action,
        });
    }

    /// Listeners that fire for `event`, paired with the element each is bound
    /// to (`None` for window listeners).
    ///
    /// Element listeners fire innermost first along the bubble path, then
    /// window listeners; listeners on the same target fire in binding order.
    pub fn resolve(&self, dom: &Dom, event: &DomEvent) -> Vec<(Option<NodeId>, Action)> {
        let kind = event.kind();
        let mut matched = Vec::new();

        if let Some(target) = event.target() {
            for node in EventDispatcher::bubble_path(dom, target) {
                matched.extend(
                    self.listeners
                        .iter()
                        .filter(|l| l.kind == kind && l.target == ListenerTarget::Element(node))
                        .map(|l| (Some(node), l.action)),
                );
            }
        }
        // Click and submit bubble all the way to the window.
        matched.extend(
            self.listeners
                .iter()
                .filter(|l| l.kind == kind && l.target == ListenerTarget::Window)
                .map(|l| (None, l.action)),
        );
        matched
    }

    /// Every bound listener, in binding order.
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Number of listeners attached to elements.
    pub fn element_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|l| matches!(l.target, ListenerTarget::Element(_)))
            .count()
    }

    /// Number of listeners attached to the window.
    pub fn window_count(&self) -> usize {
        self.listeners.len() - self.element_count()
    }

    /// Number of bound listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
