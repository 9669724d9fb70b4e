//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` starts an [`App`] over a page with a [`RecordingNotifier`] and
//! provides methods to simulate user input (clicks, submits, scrolling,
//! typing), step virtual time and inspect what the page shows.

use std::time::Duration;

use crate::app::{App, AppConfig};
use crate::dom::NodeId;
use crate::event::DomEvent;
use crate::notify::{Notification, RecordingNotifier};
use crate::page::Page;
use crate::testing::snapshot;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// Input methods queue an event and deliver it immediately, so each call sees
/// the page exactly as a handler left it.
///
/// # Examples
///
/// ```
/// use pagewire::testing::{fixtures, Pilot};
///
/// let mut pilot = Pilot::new(fixtures::landing_page());
/// pilot.click_id("primary-btn");
/// assert_eq!(pilot.toast_text(), "Primary action executed!");
/// ```
pub struct Pilot {
    app: App,
    notifier: RecordingNotifier,
}

impl Pilot {
    /// Start `page` with the default configuration.
    pub fn new(page: Page) -> Self {
        Self::with_config(page, AppConfig::default())
    }

    /// Start `page` with `config`.
    pub fn with_config(page: Page, config: AppConfig) -> Self {
        let notifier = RecordingNotifier::new();
        let app = App::start(page, notifier.clone(), config);
        Self { app, notifier }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Click the element with `id`. Does nothing if there is none.
    pub fn click_id(&mut self, id: &str) {
        if let Some(target) = self.app.page().dom.query_by_id(id) {
            self.click(target);
        }
    }

    /// Click `target`.
    pub fn click(&mut self, target: NodeId) {
        self.send(DomEvent::Click { target });
    }

    /// Submit the form with `id`. Does nothing if there is none.
    pub fn submit_id(&mut self, id: &str) {
        if let Some(form) = self.app.page().dom.query_by_id(id) {
            self.send(DomEvent::Submit { form });
        }
    }

    /// Scroll the window to `y`.
    pub fn scroll_to(&mut self, y: i32) {
        self.send(DomEvent::Scroll { y });
    }

    /// Type `value` into the first control named `name`, replacing what was
    /// there. Returns whether a control was found.
    pub fn fill(&mut self, name: &str, value: &str) -> bool {
        let page = self.app.page_mut();
        let control = page
            .dom
            .document_order()
            .into_iter()
            .find(|&id| page.dom.get(id).and_then(|n| n.control_name()) == Some(name));
        match control.and_then(|id| page.node_mut(id)) {
            Some(node) => {
                node.value = value.to_owned();
                true
            }
            None => false,
        }
    }

    /// Deliver anything still queued.
    pub fn process(&mut self) {
        self.app.process();
    }

    /// Move virtual time forward by `by`.
    pub fn advance(&mut self, by: Duration) {
        self.app.advance(by);
    }

    /// Move virtual time forward by `ms` milliseconds.
    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    fn send(&mut self, event: DomEvent) {
        self.app.handle_event(event);
        self.app.process();
    }

    // ── Inspection ───────────────────────────────────────────────────

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn page(&self) -> &Page {
        self.app.page()
    }

    /// Every notification shown so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifier.shown()
    }

    /// Text currently in the toast body, or empty if there is no toast.
    pub fn toast_text(&self) -> String {
        let page = self.app.page();
        page.dom
            .query_by_id("toast-message")
            .and_then(|id| page.node(id))
            .map(|n| n.text.clone())
            .unwrap_or_default()
    }

    /// Hrefs of the nav links that carry `active`, in document order.
    pub fn active_links(&self) -> Vec<String> {
        let page = self.app.page();
        page.select_all(".nav-link.active")
            .into_iter()
            .filter_map(|id| page.node(id).and_then(|n| n.href()).map(str::to_owned))
            .collect()
    }

    /// Current value of the control named `name`.
    pub fn value_of(&self, name: &str) -> Option<String> {
        let page = self.app.page();
        page.select_all(&format!("[name=\"{name}\"]"))
            .first()
            .and_then(|&id| page.node(id))
            .map(|n| n.value.clone())
    }

    /// One-line render of the element with `id`, or empty if there is none.
    pub fn render_id(&self, id: &str) -> String {
        let dom = &self.app.page().dom;
        dom.query_by_id(id)
            .map(|node| snapshot::element_to_string(dom, node))
            .unwrap_or_default()
    }

    /// One-line render of the first element matching `selector`.
    pub fn render(&self, selector: &str) -> String {
        let page = self.app.page();
        page.require(selector)
            .map(|node| snapshot::element_to_string(&page.dom, node))
            .unwrap_or_default()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
