//! Event system: DOM events, listener bindings, dispatch queue.

pub mod binding;
pub mod handler;
pub mod input;

pub use binding::{Action, Listener, ListenerRegistry, ListenerTarget};
pub use handler::EventDispatcher;
pub use input::{DomEvent, EventKind};
