//! Reusable UI components (stage tracker, upload box, file picker, helpers)

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use dealdesk_core::upload::{UploadStatus, UploadWidget};
use dealdesk_core::{stage_progress, Stage, StageStatus};

use crate::app::App;

/// Render the stage chips for `stages` with `current` highlighted.
pub fn render_progress_tracker(f: &mut Frame, area: Rect, stages: &[Stage], current: Stage) {
    let mut spans = Vec::new();

    for (idx, chip) in stage_progress(stages, current).iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("──", Style::default().fg(Color::DarkGray)));
        }

        let (marker, style) = match chip.status {
            StageStatus::Completed => (
                "✓".to_string(),
                Style::default().fg(Color::Green),
            ),
            StageStatus::Active => (
                "▶".to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            StageStatus::Pending => (format!("{}", idx + 1), Style::default().fg(Color::DarkGray)),
        };

        spans.push(Span::styled(format!(" {} {} ", marker, chip.label), style));
    }

    let tracker = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Progress "),
    );
    f.render_widget(tracker, area);
}

/// Render one upload box: the empty drop-area prompt, or the selected file
/// row with its status icon.
pub fn render_upload_box(
    f: &mut Frame,
    area: Rect,
    title: &str,
    description: &str,
    widget: &UploadWidget,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let lines = match &widget.file {
        None => vec![
            Line::from(Span::styled(
                description.to_string(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[u]", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" browse for a file"),
            ]),
            Line::from(Span::styled(
                "Supported formats: PDF, DOC, DOCX, JPG, PNG",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        Some(file) => {
            let (icon, style) = match widget.status {
                UploadStatus::Uploading => ("⟳ uploading", Style::default().fg(Color::Yellow)),
                UploadStatus::Success => ("✓ uploaded", Style::default().fg(Color::Green)),
                UploadStatus::Error => ("✗ failed", Style::default().fg(Color::Red)),
                UploadStatus::Idle => ("", Style::default()),
            };
            vec![
                Line::from(vec![
                    Span::raw("📄 "),
                    Span::styled(
                        file.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} KB", file.size_bytes / 1024),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
                Line::from(Span::styled(icon, style)),
                Line::from(vec![
                    Span::styled("[x]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" clear"),
                ]),
            ]
        }
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {title} ")),
    );
    f.render_widget(paragraph, area);
}

/// File picker overlay with fuzzy filtering, rendered over everything.
pub fn render_file_browser(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(80, 80, area);

    // Filter items by fuzzy search
    let matcher = SkimMatcherV2::default();
    let filtered: Vec<(usize, &std::path::PathBuf)> = if app.file_browser_search.is_empty() {
        app.file_browser_items.iter().enumerate().collect()
    } else {
        app.file_browser_items
            .iter()
            .enumerate()
            .filter(|(_, path)| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .and_then(|name| matcher.fuzzy_match(name, &app.file_browser_search))
                    .is_some()
            })
            .collect()
    };

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|(original_idx, path)| {
            let is_selected = *original_idx == app.file_browser_selected;
            let is_dir = path.is_dir();

            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("..");

            let style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if is_dir {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::raw(if is_selected { "▶ " } else { "  " }),
                Span::raw(if is_dir { "📁 " } else { "📄 " }),
                Span::styled(name, style),
            ]))
        })
        .collect();

    let title = if app.file_browser_search.is_empty() {
        format!(" Select file: {} ", app.current_dir.display())
    } else {
        format!(" Select file [search: {}] ", app.file_browser_search)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(ratatui::widgets::Clear, popup_area);
    f.render_widget(list, popup_area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
