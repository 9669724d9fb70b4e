//! # pagewire
//!
//! Headless view controller for a single landing page: notification toasts,
//! nav-link highlighting and smooth scrolling, a progress bar with an entrance
//! animation, a simulated asynchronous demo action and a validated contact
//! form.
//!
//! The page is an in-memory DOM. Browser services the controller depends on
//! are explicit: toasts go through a [`notify::NotificationPort`], deferred
//! work sits on a virtual-time [`schedule::TimerQueue`], and the running
//! instance is an [`app::App`] value owned by the caller.
//!
//! ## Core Systems
//!
//! - **[`dom`]**: Slotmap-backed DOM arena with tree operations and queries
//! - **[`selector`]**: CSS selector subset: tokenizer, parser, matcher
//! - **[`page`]**: Document plus viewport: lookups and scrolling
//! - **[`event`]**: DOM events, listener registry, bubbling
//! - **[`notify`]**: Notification port and severities
//! - **[`schedule`]**: Delayed tasks over virtual time
//! - **[`state`]**: View state and contact-form validation
//! - **[`controller`]**: The handlers that tie it all together
//! - **[`app`]**: Configuration, startup and the event queue
//! - **[`runtime`]**: tokio driver mapping real time onto virtual time
//! - **[`testing`]**: Fixtures, a headless pilot and text snapshots

// Document model
pub mod dom;
pub mod page;
pub mod selector;

// Behaviour
pub mod controller;
pub mod event;
pub mod notify;
pub mod schedule;
pub mod state;

// Application
pub mod app;
pub mod runtime;

// Test support
pub mod testing;

pub use app::{App, AppConfig};
pub use controller::ViewController;
pub use notify::{LogNotifier, NotificationPort, RecordingNotifier, Severity};
pub use page::Page;
