//! Shared fixtures for application tests

use std::time::Duration;

use dealdesk::app::{App, AppConfig, Screen};
use dealdesk_core::FileRef;

/// App with deterministic simulation settings: zero latency, every
/// upload succeeds.
pub fn test_app() -> App {
    app_with_rate(1.0)
}

pub fn app_with_rate(success_rate: f64) -> App {
    let config = AppConfig {
        start_screen: Screen::Console,
        upload_success_rate: success_rate,
        upload_latency: Duration::ZERO,
        reply_latency: Duration::ZERO,
    };
    App::new(config).expect("app construction")
}

pub fn pdf(name: &str) -> FileRef {
    FileRef::new(name, "application/pdf", 24_576)
}

pub fn exe(name: &str) -> FileRef {
    FileRef::new(name, "application/x-msdownload", 4_096)
}

/// Tick the event-loop background work until `done` holds. Transfers and
/// replies in tests use zero latency, so a short window is plenty.
pub fn poll_until(app: &mut App, done: impl Fn(&App) -> bool) -> bool {
    for _ in 0..200 {
        app.poll_background();
        if done(app) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}
