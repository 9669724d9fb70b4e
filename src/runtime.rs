//! tokio driver: feeds events and the clock into an [`App`].
//!
//! The app's timers run on virtual time measured from startup. [`run`] maps
//! that onto tokio's clock, anchored at whatever virtual time the app has
//! reached when it is handed over, so the same code runs against real time
//! or, under `#[tokio::test(start_paused = true)]`, against paused time.

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::app::App;
use crate::event::DomEvent;

/// Drive `app` until `events` closes, then hand it back.
///
/// Each event is processed as soon as it arrives; deferred tasks fire when
/// tokio's clock reaches their deadline. Tasks still pending when the channel
/// closes are left unfired.
pub async fn run(mut app: App, mut events: mpsc::UnboundedReceiver<DomEvent>) -> App {
    let origin = Instant::now();
    let base = app.now();
    let virtual_now = || base.saturating_add(origin.elapsed());
    tracing::debug!(at = ?base, "event loop started");

    loop {
        let deadline = app
            .next_deadline()
            .map(|due| origin + due.saturating_sub(base));
        tokio::select! {
            received = events.recv() => match received {
                Some(event) => {
                    app.advance_to(virtual_now());
                    app.handle_event(event);
                    app.process();
                }
                None => break,
            },
            _ = sleep_until(deadline.unwrap_or(origin)), if deadline.is_some() => {
                app.advance_to(virtual_now());
            }
        }
    }

    tracing::debug!("event channel closed");
    app
}
