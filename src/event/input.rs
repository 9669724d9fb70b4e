//! DOM events delivered to the page.

use crate::dom::NodeId;

/// Kind of event a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    Scroll,
}

/// An event as the browser would deliver it.
///
/// Click and submit events target an element and bubble; scroll events are
/// delivered to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    /// A click on `target` (which may be a descendant of the bound element).
    Click { target: NodeId },
    /// A form submission.
    Submit { form: NodeId },
    /// The window scrolled to vertical offset `y`.
    Scroll { y: i32 },
}

impl DomEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomEvent::Click { .. } => EventKind::Click,
            DomEvent::Submit { .. } => EventKind::Submit,
            DomEvent::Scroll { .. } => EventKind::Scroll,
        }
    }

    /// The element the event was dispatched at, if it has one.
    pub fn target(&self) -> Option<NodeId> {
        match *self {
            DomEvent::Click { target } => Some(target),
            DomEvent::Submit { form } => Some(form),
            DomEvent::Scroll { .. } => None,
        }
    }
}
