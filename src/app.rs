//! App struct: configuration, startup, event routing.
//!
//! [`App::start`] builds and initializes the controller and hands back the
//! running instance; callers keep it and use its accessors. Events are queued
//! with [`App::handle_event`] and delivered in arrival order by
//! [`App::process`].

use std::time::Duration;

use crate::controller::ViewController;
use crate::event::{DomEvent, EventDispatcher};
use crate::notify::NotificationPort;
use crate::page::Page;
use crate::state::{UiState, DEFAULT_PROGRESS};

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Delay between zeroing the progress bar and revealing its value.
    pub progress_reveal_delay: Duration,
    /// How long the simulated demo action stays busy.
    pub demo_delay: Duration,
    /// Added to the scroll position before testing which section it is in.
    pub scroll_offset: i32,
    /// Section ids tracked by the scroll listener, in test order.
    pub sections: Vec<String>,
    /// Progress value at startup; saturated to `0..=100`.
    pub initial_progress: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            progress_reveal_delay: Duration::from_millis(500),
            demo_delay: Duration::from_millis(2000),
            scroll_offset: 100,
            sections: ["home", "about", "contact"].map(String::from).to_vec(),
            initial_progress: i64::from(DEFAULT_PROGRESS),
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the progress reveal delay (builder).
    pub fn with_progress_reveal_delay(mut self, delay: Duration) -> Self {
        self.progress_reveal_delay = delay;
        self
    }

    /// Set the demo action delay (builder).
    pub fn with_demo_delay(mut self, delay: Duration) -> Self {
        self.demo_delay = delay;
        self
    }

    /// Set the scroll offset (builder).
    pub fn with_scroll_offset(mut self, offset: i32) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Replace the tracked sections (builder).
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initial progress (builder).
    pub fn with_initial_progress(mut self, progress: i64) -> Self {
        self.initial_progress = progress;
        self
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// A started page: the controller plus its event queue.
pub struct App {
    controller: ViewController,
    dispatcher: EventDispatcher,
}

impl App {
    /// Build a controller over `page`, initialize it, and return the app.
    pub fn start(
        page: Page,
        notifier: impl NotificationPort + 'static,
        config: AppConfig,
    ) -> Self {
        let mut controller = ViewController::new(page, Box::new(notifier), config);
        controller.initialize();
        Self {
            controller,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Queue an event for the next [`process`](Self::process).
    pub fn handle_event(&mut self, event: DomEvent) {
        self.dispatcher.push(event);
    }

    /// Deliver every queued event, in arrival order.
    pub fn process(&mut self) {
        for event in self.dispatcher.drain() {
            self.controller.dispatch(event);
        }
    }

    /// Number of events waiting for [`process`](Self::process).
    pub fn pending_events(&self) -> usize {
        self.dispatcher.pending_count()
    }

    /// Move virtual time forward by `by`.
    pub fn advance(&mut self, by: Duration) {
        self.controller.advance(by);
    }

    /// Move virtual time to `until` (measured from startup).
    pub fn advance_to(&mut self, until: Duration) {
        self.controller.advance_to(until);
    }

    /// Current virtual time, measured from startup.
    pub fn now(&self) -> Duration {
        self.controller.now()
    }

    /// When the next deferred task is due, measured from startup.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.controller.next_deadline()
    }

    /// Copy of the current view state.
    pub fn state(&self) -> UiState {
        self.controller.state()
    }

    /// Set the progress bar from outside the page, saturating to `0..=100`.
    pub fn update_progress(&mut self, value: i64) {
        self.controller.update_progress(value);
    }

    pub fn page(&self) -> &Page {
        self.controller.page()
    }

    pub fn page_mut(&mut self) -> &mut Page {
        self.controller.page_mut()
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ViewController {
        &mut self.controller
    }
}

// ===========================================================================
// Tests
// ===========================================================================
