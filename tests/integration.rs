//! Integration tests for pagewire.
//!
//! These tests exercise the public API from outside the crate, driving the
//! landing page through the pilot the way a user would.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pagewire::app::{App, AppConfig};
use pagewire::event::DomEvent;
use pagewire::notify::{RecordingNotifier, Severity};
use pagewire::runtime;
use pagewire::testing::fixtures::{empty_page, landing_page};
use pagewire::testing::{dom_to_string, Pilot};
use pretty_assertions::assert_eq;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

/// Collects the message of every event it sees.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<String>>>);

impl Captured {
    fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn contains(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{value:?}"));
        } else {
            self.0.push_str(&format!(" {}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        } else {
            self.0.push_str(&format!(" {}={value}", field.name()));
        }
    }
}

impl<S: tracing::Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut line = String::new();
        event.record(&mut MessageVisitor(&mut line));
        self.0.lock().unwrap().push(line);
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, Captured) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, captured)
}

fn fill_contact(pilot: &mut Pilot, name: &str, email: &str, message: &str) {
    pilot.fill("name", name);
    pilot.fill("email", email);
    pilot.fill("message", message);
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn startup_binds_listeners_and_logs_marker() {
    let (pilot, logs) = with_captured_logs(|| Pilot::new(landing_page()));
    assert_eq!(pilot.app().controller().listeners().len(), 8);
    assert!(logs.contains("view controller initialized"));
    assert!(pilot.notifications().is_empty());
}

#[test]
fn startup_on_empty_page_is_quiet() {
    let mut pilot = Pilot::new(empty_page());
    assert_eq!(pilot.app().controller().listeners().element_count(), 0);
    pilot.scroll_to(300);
    pilot.advance_ms(5000);
    assert!(pilot.notifications().is_empty());
    assert_eq!(dom_to_string(&pilot.page().dom), "<body>");
}

#[test]
fn progress_bar_entrance_animation() {
    let mut pilot = Pilot::new(landing_page());
    insta::assert_snapshot!(
        pilot.render(".progress-bar"),
        @r#"<div class="progress-bar" style="width: 0%">75%</div>"#
    );

    pilot.advance_ms(499);
    assert!(pilot.render(".progress-bar").contains("width: 0%"));

    pilot.advance_ms(1);
    insta::assert_snapshot!(
        pilot.render(".progress-bar"),
        @r#"<div class="progress-bar" style="width: 75%">75%</div>"#
    );
}

// ---------------------------------------------------------------------------
// Buttons and toasts
// ---------------------------------------------------------------------------

#[test]
fn primary_and_secondary_toasts() {
    let mut pilot = Pilot::new(landing_page());

    pilot.click_id("primary-btn");
    assert_eq!(pilot.toast_text(), "Primary action executed!");
    assert_eq!(
        pilot.render_id("notification-toast"),
        r#"<div id="notification-toast" class="toast bg-success text-white"></div>"#
    );

    pilot.click_id("secondary-btn");
    assert_eq!(pilot.toast_text(), "Showing details...");
    assert_eq!(
        pilot.render_id("notification-toast"),
        r#"<div id="notification-toast" class="toast bg-primary text-white"></div>"#
    );

    let severities: Vec<_> = pilot.notifications().iter().map(|n| n.severity).collect();
    assert_eq!(severities, vec![Severity::Success, Severity::Info]);
}

#[test]
fn toast_keeps_only_latest_severity() {
    let mut pilot = Pilot::new(landing_page());
    pilot.click_id("primary-btn");
    pilot.submit_id("contact-form");

    let toast = pilot.render_id("notification-toast");
    assert!(toast.contains("bg-danger"));
    assert!(!toast.contains("bg-success"));
    assert!(!toast.contains("bg-primary"));
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn nav_link_click_activates_and_scrolls() {
    let mut pilot = Pilot::new(landing_page());
    let about = pilot.page().select_all(".nav-link")[1];
    pilot.click(about);

    assert_eq!(pilot.active_links(), vec!["#about"]);
    let viewport = &pilot.page().viewport;
    assert_eq!(viewport.scroll_y, 500);
    let request = viewport.last_scroll.expect("scroll requested");
    assert_eq!(request.target, pilot.page().require_id("about").unwrap());
    assert_eq!(request.top, 500);
}

#[test]
fn scroll_tracks_section_under_offset() {
    let mut pilot = Pilot::new(landing_page());
    for (y, expected) in [
        (0, "#home"),
        (399, "#home"),
        (400, "#about"),
        (1099, "#about"),
        (1100, "#contact"),
    ] {
        pilot.scroll_to(y);
        assert_eq!(pilot.active_links(), vec![expected], "scroll_y {y}");
    }
}

#[test]
fn scroll_past_every_section_keeps_current_link() {
    let mut pilot = Pilot::new(landing_page());
    pilot.scroll_to(1100);
    pilot.scroll_to(10_000);
    assert_eq!(pilot.active_links(), vec!["#contact"]);
}

#[test]
fn exactly_one_link_active_after_any_interaction() {
    let mut pilot = Pilot::new(landing_page());
    let links = pilot.page().select_all(".nav-link");
    pilot.click(links[2]);
    pilot.scroll_to(600);
    pilot.click(links[0]);
    pilot.scroll_to(1500);
    assert_eq!(pilot.active_links().len(), 1);
}

// ---------------------------------------------------------------------------
// Demo action
// ---------------------------------------------------------------------------

#[test]
fn demo_action_lifecycle() {
    let mut pilot = Pilot::new(landing_page());
    pilot.advance_ms(500);

    pilot.click_id("demo-btn");
    assert!(pilot.app().state().is_loading);
    insta::assert_snapshot!(
        pilot.render_id("demo-btn"),
        @r#"<button id="demo-btn" class="btn btn-success" disabled>Processing...</button>"#
    );
    assert!(!pilot.render(".spinner-border").contains("d-none"));

    pilot.advance_ms(1999);
    assert!(pilot.notifications().is_empty());

    pilot.advance_ms(1);
    assert!(!pilot.app().state().is_loading);
    assert_eq!(
        pilot.render_id("demo-btn"),
        r#"<button id="demo-btn" class="btn btn-success">Run demo</button>"#
    );
    assert!(pilot.render(".spinner-border").contains("d-none"));
    assert_eq!(pilot.toast_text(), "Demo action completed!");
    assert_eq!(pilot.app().state().progress_value(), 100);
    assert_eq!(
        pilot.render(".progress-bar"),
        r#"<div class="progress-bar" style="width: 100%">100%</div>"#
    );
}

#[test]
fn demo_click_while_loading_is_ignored() {
    let mut pilot = Pilot::new(landing_page());
    pilot.click_id("demo-btn");
    pilot.advance_ms(1000);
    pilot.click_id("demo-btn");
    pilot.advance_ms(1000);

    assert_eq!(pilot.notifications().len(), 1);
    pilot.advance_ms(2000);
    assert_eq!(pilot.notifications().len(), 1);
    assert_eq!(pilot.app().controller().pending_timers(), 0);
}

#[test]
fn demo_can_run_again_after_completion() {
    let mut pilot = Pilot::new(landing_page());
    pilot.click_id("demo-btn");
    pilot.advance_ms(2000);
    pilot.click_id("demo-btn");
    assert!(pilot.app().state().is_loading);
    pilot.advance_ms(2000);
    assert_eq!(pilot.notifications().len(), 2);
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[test]
fn valid_submission_thanks_logs_and_clears() {
    let mut pilot = Pilot::new(landing_page());
    fill_contact(&mut pilot, "Al", "a@b.com", "hi");

    let ((), logs) = with_captured_logs(|| pilot.submit_id("contact-form"));

    assert_eq!(pilot.toast_text(), "Thank you for your message, Al!");
    assert_eq!(pilot.notifications()[0].severity, Severity::Success);
    assert!(logs.contains("contact form submitted"));
    assert!(logs.contains(r#"{"name":"Al","email":"a@b.com","message":"hi"}"#));
    for field in ["name", "email", "message"] {
        assert_eq!(pilot.value_of(field).as_deref(), Some(""), "{field}");
    }
}

#[test]
fn invalid_submission_keeps_input() {
    let mut pilot = Pilot::new(landing_page());
    fill_contact(&mut pilot, "A", "bad", "");

    let ((), logs) = with_captured_logs(|| pilot.submit_id("contact-form"));

    assert_eq!(pilot.toast_text(), "Please check your input.");
    assert_eq!(pilot.notifications()[0].severity, Severity::Error);
    assert!(!logs.contains("contact form submitted"));
    assert_eq!(pilot.value_of("name").as_deref(), Some("A"));
    assert_eq!(pilot.value_of("email").as_deref(), Some("bad"));
}

#[test]
fn submission_rules() {
    for (name, email, message, accepted) in [
        ("Al", "a@b.com", "hi", true),
        ("A", "a@b.com", "hi", false),
        ("Al", "ab.com", "hi", false),
        ("Al", "a@b.com", "", false),
        ("", "a@b.com", "hi", false),
    ] {
        let mut pilot = Pilot::new(landing_page());
        fill_contact(&mut pilot, name, email, message);
        pilot.submit_id("contact-form");
        let severity = pilot.notifications()[0].severity;
        assert_eq!(
            severity == Severity::Success,
            accepted,
            "{name:?} {email:?} {message:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[test]
fn update_progress_saturates() {
    let mut pilot = Pilot::new(landing_page());
    for (input, stored) in [(42, 42), (-10, 0), (250, 100)] {
        pilot.app_mut().update_progress(input);
        assert_eq!(pilot.app().state().progress_value(), stored);
        assert_eq!(
            pilot.render(".progress-bar"),
            format!(r#"<div class="progress-bar" style="width: {stored}%">{stored}%</div>"#)
        );
    }
}

#[test]
fn update_progress_without_bar_still_stores() {
    let mut pilot = Pilot::new(empty_page());
    pilot.app_mut().update_progress(30);
    assert_eq!(pilot.app().state().progress_value(), 30);
}

#[test]
fn reveal_uses_value_current_when_it_fires() {
    let mut pilot = Pilot::new(landing_page());
    pilot.app_mut().update_progress(40);
    pilot.advance_ms(500);
    assert!(pilot.render(".progress-bar").contains("width: 40%"));
}

#[test]
fn custom_config_changes_timing_and_sections() {
    let config = AppConfig::new()
        .with_progress_reveal_delay(Duration::from_millis(10))
        .with_sections(["contact"])
        .with_scroll_offset(0);
    let mut pilot = Pilot::with_config(landing_page(), config);

    pilot.advance_ms(10);
    assert!(pilot.render(".progress-bar").contains("width: 75%"));

    pilot.scroll_to(600);
    assert_eq!(pilot.active_links(), vec!["#home"]);
    pilot.scroll_to(1200);
    assert_eq!(pilot.active_links(), vec!["#contact"]);
}

// ---------------------------------------------------------------------------
// Runtime
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn runtime_fires_demo_on_tokio_clock() {
    let recorder = RecordingNotifier::new();
    let app = App::start(landing_page(), recorder.clone(), AppConfig::default());
    let demo = app.page().require_id("demo-btn").unwrap();

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let handle = tokio::spawn(runtime::run(app, rx));

    tx.send(DomEvent::Click { target: demo }).unwrap();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(recorder.is_empty());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(recorder.len(), 1);
    assert_eq!(
        recorder.last().map(|n| n.message),
        Some("Demo action completed!".to_owned())
    );

    drop(tx);
    let app = handle.await.unwrap();
    assert!(!app.state().is_loading);
    assert_eq!(app.state().progress_value(), 100);
}
