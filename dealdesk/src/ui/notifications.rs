//! Toast notifications for upload results and deal events

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, NotificationLevel};

const MAX_VISIBLE: usize = 3;
const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Render active notifications as a toast stack anchored to the
/// bottom-right corner, newest at the bottom.
pub fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let active = app.notifications.get_active();
    if active.is_empty() {
        return;
    }

    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);

    let visible = active.len().min(MAX_VISIBLE);
    // Oldest of the visible toasts sits highest on screen
    let start = active.len() - visible;

    for (row, notification) in active[start..].iter().enumerate() {
        let offset = (visible - row) as u16 * TOAST_HEIGHT;
        if area.height < offset + 1 {
            continue;
        }
        let rect = Rect::new(x, area.bottom() - offset, width, TOAST_HEIGHT);

        let (accent, icon) = match notification.level {
            NotificationLevel::Error => (Color::Red, "✗"),
            NotificationLevel::Warning => (Color::Yellow, "⚠"),
            NotificationLevel::Info => (Color::Blue, "ℹ"),
            NotificationLevel::Success => (Color::Green, "✓"),
        };

        let body = Line::from(vec![
            Span::styled(
                format!("{icon} "),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(notification.message.clone()),
        ]);

        let toast = Paragraph::new(body).block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", notification.title),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        );

        f.render_widget(Clear, rect);
        f.render_widget(toast, rect);
    }
}
