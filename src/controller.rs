//! ViewController: view state plus the handlers bound to page events.
//!
//! The controller owns the [`Page`], the [`UiState`], the timer queue and the
//! notification port. Every handler is a direct DOM mutation; the only
//! deferred work is the progress-bar reveal and the demo-action completion,
//! both queued on virtual time and fired from [`ViewController::advance`].
//!
//! Missing elements are never errors: a handler that cannot find what it
//! needs logs at debug level and does nothing.

use std::time::Duration;

use crate::app::AppConfig;
use crate::dom::NodeId;
use crate::event::{Action, DomEvent, EventKind, ListenerRegistry};
use crate::notify::{NotificationPort, Severity};
use crate::page::{Page, PageError};
use crate::schedule::TimerQueue;
use crate::selector::Selector;
use crate::state::{ContactSubmission, UiState};

pub const PRIMARY_BUTTON_ID: &str = "primary-btn";
pub const SECONDARY_BUTTON_ID: &str = "secondary-btn";
pub const DEMO_BUTTON_ID: &str = "demo-btn";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const TOAST_ID: &str = "notification-toast";
pub const TOAST_MESSAGE_ID: &str = "toast-message";
pub const NAV_LINK_SELECTOR: &str = ".navbar-nav .nav-link";
pub const PROGRESS_BAR_SELECTOR: &str = ".progress-bar";

const SPINNER_CLASS: &str = "spinner-border";
const HIDDEN_CLASS: &str = "d-none";
const ACTIVE_CLASS: &str = "active";
const TOAST_CLASS: &str = "toast";

pub const PRIMARY_MESSAGE: &str = "Primary action executed!";
pub const SECONDARY_MESSAGE: &str = "Showing details...";
pub const DEMO_DONE_MESSAGE: &str = "Demo action completed!";
pub const INVALID_FORM_MESSAGE: &str = "Please check your input.";
pub const BUSY_LABEL: &str = "Processing...";

/// Text of the success toast after a contact submission.
pub fn thanks_message(name: &str) -> String {
    format!("Thank you for your message, {name}!")
}

/// Work deferred on the timer queue.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Deferred {
    /// Second half of the progress-bar entrance animation.
    RevealProgress,
    /// End of the simulated demo action.
    CompleteDemo { button: NodeId, label: String },
}

/// Holds the view state and translates page events into DOM changes and
/// notifications.
pub struct ViewController {
    page: Page,
    state: UiState,
    config: AppConfig,
    notifier: Box<dyn NotificationPort>,
    timers: TimerQueue<Deferred>,
    listeners: ListenerRegistry,
    initialized: bool,
}

impl ViewController {
    /// Create a controller over `page`. Nothing is bound until
    /// [`initialize`](Self::initialize).
    pub fn new(page: Page, notifier: Box<dyn NotificationPort>, config: AppConfig) -> Self {
        Self {
            page,
            state: UiState::new(config.initial_progress),
            config,
            notifier,
            timers: TimerQueue::new(),
            listeners: ListenerRegistry::new(),
            initialized: false,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Copy of the current view state.
    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// When the next deferred task is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Number of deferred tasks not yet fired.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // ── Startup ──────────────────────────────────────────────────────

    /// Bind every listener, start the progress-bar animation and write the
    /// startup marker. Elements that are absent are skipped.
    ///
    /// A second call does nothing.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("view controller already initialized");
            return;
        }
        self.initialized = true;

        for (id, kind, action) in [
            (PRIMARY_BUTTON_ID, EventKind::Click, Action::PrimaryAction),
            (SECONDARY_BUTTON_ID, EventKind::Click, Action::SecondaryAction),
            (DEMO_BUTTON_ID, EventKind::Click, Action::DemoAction),
            (CONTACT_FORM_ID, EventKind::Submit, Action::ContactSubmit),
        ] {
            if let Some(element) = found(self.page.require_id(id)) {
                self.listeners.bind(element, kind, action);
            }
        }
        for link in self.page.select_all(NAV_LINK_SELECTOR) {
            self.listeners.bind(link, EventKind::Click, Action::NavLink);
        }
        self.listeners
            .bind_window(EventKind::Scroll, Action::TrackScroll);

        self.animate_progress_bar();
        tracing::info!(
            listeners = self.listeners.len(),
            "view controller initialized"
        );
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Deliver one event to every listener it reaches.
    pub fn dispatch(&mut self, event: DomEvent) {
        if let DomEvent::Scroll { y } = event {
            self.page.scroll_to(y);
        }
        for (element, action) in self.listeners.resolve(&self.page.dom, &event) {
            self.run(action, element);
        }
    }

    fn run(&mut self, action: Action, element: Option<NodeId>) {
        match (action, element) {
            (Action::PrimaryAction, _) => self.on_primary_action(),
            (Action::SecondaryAction, _) => self.on_secondary_action(),
            (Action::DemoAction, Some(button)) => self.on_demo_action(button),
            (Action::ContactSubmit, Some(form)) => self.on_form_submit(form),
            (Action::NavLink, Some(link)) => self.on_nav_link_activate(link),
            (Action::TrackScroll, _) => self.on_scroll(),
            (action, None) => {
                tracing::debug!(?action, "element listener fired without an element");
            }
        }
    }

    // ── Handlers ─────────────────────────────────────────────────────

    pub fn on_primary_action(&mut self) {
        self.show_notification(PRIMARY_MESSAGE, Severity::Success);
    }

    pub fn on_secondary_action(&mut self) {
        self.show_notification(SECONDARY_MESSAGE, Severity::Info);
    }

    /// Make `link` the only active nav link and, for an in-page `href`,
    /// smooth-scroll its target to the top of the viewport.
    ///
    /// The link's default navigation never happens; an unknown target is a
    /// no-op.
    pub fn on_nav_link_activate(&mut self, link: NodeId) {
        self.activate_nav_link(link);

        let Some(href) = self.page.node(link).and_then(|n| n.href()) else {
            return;
        };
        if !href.starts_with('#') {
            return;
        }
        let href = href.to_owned();
        if let Some(target) = found(self.page.require(&href)) {
            self.page.scroll_into_view(target);
        }
    }

    /// Activate the nav link of the section under `scroll_y + scroll_offset`.
    ///
    /// Sections are checked in configured order and each match re-activates,
    /// so if ranges overlap the last matching section wins.
    pub fn on_scroll(&mut self) {
        let scroll_pos = self
            .page
            .viewport
            .scroll_y
            .saturating_add(self.config.scroll_offset);

        let mut matched = None;
        for section_id in &self.config.sections {
            let Some(section) = self.page.dom.query_by_id(section_id) else {
                continue;
            };
            let Some(link) = self
                .page
                .dom
                .query_selector(&Selector::link_to(format!("#{section_id}")))
            else {
                continue;
            };
            let contains = self
                .page
                .node(section)
                .is_some_and(|s| s.layout.contains_y(scroll_pos));
            if contains {
                matched = Some(link);
            }
        }

        if let Some(link) = matched {
            self.activate_nav_link(link);
        }
    }

    /// Start the demo action on `button` unless one is already running.
    ///
    /// Shows the spinner, disables the button and swaps its label; after
    /// `demo_delay` everything is restored, a success toast is shown and the
    /// progress jumps to 100.
    pub fn on_demo_action(&mut self, button: NodeId) {
        if self.state.is_loading {
            tracing::debug!("demo action already running");
            return;
        }
        let Some(label) = self.page.node(button).map(|b| b.text.clone()) else {
            return;
        };
        self.state.is_loading = true;

        self.set_spinner_hidden(button, false);
        if let Some(node) = self.page.node_mut(button) {
            node.disabled = true;
            node.text = BUSY_LABEL.to_owned();
        }

        self.timers
            .schedule(self.config.demo_delay, Deferred::CompleteDemo { button, label });
    }

    /// Validate the contact form and either reject it with an error toast
    /// (keeping the input) or log it, thank the sender and clear the form.
    pub fn on_form_submit(&mut self, form: NodeId) {
        let dom = &self.page.dom;
        let field = |name: &str| dom.form_value(form, name).unwrap_or_default().to_owned();
        let submission = ContactSubmission::new(field("name"), field("email"), field("message"));

        if let Err(err) = submission.validate() {
            tracing::debug!(%err, "contact form rejected");
            self.show_notification(INVALID_FORM_MESSAGE, Severity::Error);
            return;
        }

        tracing::info!(payload = %submission.to_json(), "contact form submitted");
        self.show_notification(&thanks_message(&submission.name), Severity::Success);

        for control in self.page.dom.form_controls(form) {
            if let Some(node) = self.page.node_mut(control) {
                node.value.clear();
            }
        }
    }

    /// Put `message` in the toast, restyle it for `severity` and show it.
    ///
    /// The toast's classes are reset to `toast` first, so only the latest
    /// severity's classes are ever present.
    pub fn show_notification(&mut self, message: &str, severity: Severity) {
        let (Some(toast), Some(body)) = (
            found(self.page.require_id(TOAST_ID)),
            found(self.page.require_id(TOAST_MESSAGE_ID)),
        ) else {
            return;
        };

        if let Some(node) = self.page.node_mut(body) {
            node.text = message.to_owned();
        }
        if let Some(node) = self.page.node_mut(toast) {
            node.set_class_name(TOAST_CLASS);
            for class in severity.classes() {
                node.add_class(class);
            }
        }
        self.notifier.show(toast, message, severity);
    }

    /// Entrance animation: width to 0% now, to the current progress after
    /// `progress_reveal_delay`.
    pub fn animate_progress_bar(&mut self) {
        let Some(bar) = self.progress_bar() else {
            return;
        };
        if let Some(node) = self.page.node_mut(bar) {
            node.width = Some("0%".to_owned());
        }
        self.timers
            .schedule(self.config.progress_reveal_delay, Deferred::RevealProgress);
    }

    /// Store `value` saturated to `0..=100` and show it on the progress bar.
    pub fn update_progress(&mut self, value: i64) {
        let stored = self.state.set_progress(value);
        let Some(bar) = self.progress_bar() else {
            return;
        };
        if let Some(node) = self.page.node_mut(bar) {
            node.width = Some(format!("{stored}%"));
            node.text = format!("{stored}%");
        }
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Move virtual time forward by `by`, firing whatever falls due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.timers.now().saturating_add(by);
        self.advance_to(until);
    }

    /// Move virtual time to `until`, firing due tasks in deadline order.
    pub fn advance_to(&mut self, until: Duration) {
        while let Some(task) = self.timers.pop_due(until) {
            self.fire(task);
        }
        self.timers.advance_to(until);
    }

    fn fire(&mut self, task: Deferred) {
        tracing::debug!(?task, at = ?self.timers.now(), "timer fired");
        match task {
            Deferred::RevealProgress => {
                let value = self.state.progress_value();
                if let Some(node) = self.progress_bar().and_then(|bar| self.page.node_mut(bar)) {
                    node.width = Some(format!("{value}%"));
                }
            }
            Deferred::CompleteDemo { button, label } => {
                self.state.is_loading = false;
                self.set_spinner_hidden(button, true);
                if let Some(node) = self.page.node_mut(button) {
                    node.disabled = false;
                    node.text = label;
                }
                self.show_notification(DEMO_DONE_MESSAGE, Severity::Success);
                self.update_progress(100);
            }
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────

    fn progress_bar(&self) -> Option<NodeId> {
        found(self.page.require(PROGRESS_BAR_SELECTOR))
    }

    fn activate_nav_link(&mut self, link: NodeId) {
        for other in self.page.select_all(NAV_LINK_SELECTOR) {
            if let Some(node) = self.page.node_mut(other) {
                node.remove_class(ACTIVE_CLASS);
            }
        }
        if let Some(node) = self.page.node_mut(link) {
            node.add_class(ACTIVE_CLASS);
        }
    }

    fn set_spinner_hidden(&mut self, button: NodeId, hidden: bool) {
        let selector = Selector::class(SPINNER_CLASS);
        let Some(spinner) = self.page.dom.query_within(button, &selector) else {
            return;
        };
        if let Some(node) = self.page.node_mut(spinner) {
            if hidden {
                node.add_class(HIDDEN_CLASS);
            } else {
                node.remove_class(HIDDEN_CLASS);
            }
        }
    }
}

/// Turn a lookup result into an option, tracing what was missing.
fn found(lookup: Result<NodeId, PageError>) -> Option<NodeId> {
    match lookup {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::debug!(%err, "element lookup skipped");
            None
        }
    }
}
