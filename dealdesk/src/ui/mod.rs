//! UI rendering functions for the dealdesk TUI
//!
//! This module contains the rendering logic for the two screens and their
//! shared components: header/footer, stage tracker, upload boxes, the file
//! picker overlay and notifications.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Screen};

// Module declarations
mod components;
mod console_views;
mod dashboard_views;
mod header_footer;
mod notifications;

// Re-export public functions
pub use components::{centered_rect, render_file_browser, render_progress_tracker, render_upload_box};
pub use console_views::render_console;
pub use dashboard_views::render_dashboard;
pub use header_footer::{render_footer, render_header};
pub use notifications::render_notifications;

/// Main UI rendering function - orchestrates all view rendering
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0], app);

    // Main content
    match app.screen {
        Screen::Console => render_console(f, chunks[1], app),
        Screen::Dashboard => render_dashboard(f, chunks[1], app),
    }

    // Footer
    render_footer(f, chunks[2], app);

    // Notification overlay
    render_notifications(f, app, chunks[1]);

    // File picker overlay
    if app.show_file_browser {
        render_file_browser(f, f.area(), app);
    }
}
