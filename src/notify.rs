//! Notifications: severity styling and the port a toast widget plugs into.
//!
//! The controller owns the styling of the toast container (message text and
//! severity classes). A [`NotificationPort`] only has to make the prepared
//! container visible, the way a toolkit's `Toast.show()` does.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::dom::NodeId;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Classes added to the toast container for this severity.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Severity::Success => &["bg-success", "text-white"],
            Severity::Error => &["bg-danger", "text-white"],
            Severity::Info => &["bg-primary", "text-white"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a transient notification in a prepared container.
pub trait NotificationPort: Send {
    fn show(&mut self, container: NodeId, message: &str, severity: Severity);
}

/// One call made to a [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub container: NodeId,
    pub message: String,
    pub severity: Severity,
}

/// Keeps every notification it is asked to show.
///
/// Clones share the same log, so a test can hand one clone to the controller
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    shown: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything shown so far, oldest first.
    pub fn shown(&self) -> Vec<Notification> {
        self.shown
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// The most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        self.shown.lock().ok().and_then(|log| log.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.shown.lock().map(|log| log.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationPort for RecordingNotifier {
    fn show(&mut self, container: NodeId, message: &str, severity: Severity) {
        if let Ok(mut log) = self.shown.lock() {
            log.push(Notification {
                container,
                message: message.to_owned(),
                severity,
            });
        }
    }
}

/// Writes notifications to the trace instead of a screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationPort for LogNotifier {
    fn show(&mut self, _container: NodeId, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::warn!(%severity, "{message}"),
            _ => tracing::info!(%severity, "{message}"),
        }
    }
}
