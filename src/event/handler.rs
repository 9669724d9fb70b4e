//! Event dispatch: pending-event queue and bubble path computation.
//!
//! [`EventDispatcher`] maintains a FIFO of [`DomEvent`]s. The `bubble_path`
//! static method computes the traversal order from a node up to the document
//! root for bubble-phase delivery.

use std::collections::VecDeque;

use super::input::DomEvent;
use crate::dom::{Dom, NodeId};

/// Queue-based event dispatcher.
///
/// Events are enqueued via `push` and drained for processing via `drain`.
/// Routing to handlers is the application's job; it uses the listener
/// registry, which relies on `bubble_path`.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    queue: VecDeque<DomEvent>,
}

impl EventDispatcher {
    /// Create a new, empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event for later processing.
    pub fn push(&mut self, event: DomEvent) {
        self.queue.push_back(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<DomEvent> {
        self.queue.drain(..).collect()
    }

    /// Number of pending events.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Compute the bubble path from `start` up to the root (inclusive).
    ///
    /// Returns `[start, parent, grandparent, ..., root]`, or an empty vec if
    /// `start` does not exist.
    pub fn bubble_path(dom: &Dom, start: NodeId) -> Vec<NodeId> {
        if !dom.contains(start) {
            return Vec::new();
        }
        let mut path = vec![start];
        path.extend(dom.ancestors(start));
        path
    }
}
