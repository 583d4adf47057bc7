//! Agent console rendering: sidebar, view tabs, per-stage content views

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use dealdesk_core::{views_for_stage, ConsoleView, Sender, Stage};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::components::{centered_rect, render_progress_tracker, render_upload_box};
use crate::app::App;

pub fn render_console(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    render_sidebar(f, chunks[0], app);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // View tabs
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Stage tracker
        ])
        .split(chunks[1]);

    render_view_tabs(f, main[0], app);

    match app.current_view {
        Some(ConsoleView::Chat) => render_chat(f, main[1], app),
        Some(ConsoleView::Documents) => render_documents(f, main[1], app),
        Some(ConsoleView::PreScreen) => render_pre_screen(f, main[1], app),
        Some(ConsoleView::Spreads) => render_spreads(f, main[1], app),
        Some(ConsoleView::Loi) => render_loi(f, main[1], app),
        Some(ConsoleView::Memo) => render_memo(f, main[1], app),
        None => {
            let empty = Paragraph::new("No content views are available in this stage.")
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, main[1]);
        }
    }

    render_progress_tracker(f, main[2], &Stage::CONSOLE, app.current_stage);

    if app.show_client_details {
        render_client_details(f, f.area(), app);
    }
}

fn render_view_tabs(f: &mut Frame, area: Rect, app: &App) {
    let views = views_for_stage(app.current_stage);

    let mut spans = Vec::new();
    for view in views {
        let is_active = app.current_view == Some(*view);
        let style = if is_active {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[ {} ]", view.label()), style));
        spans.push(Span::raw(" "));
    }

    if spans.is_empty() {
        spans.push(Span::styled(
            "no views for this stage",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let tabs = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Views "));
    f.render_widget(tabs, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Documents
            Constraint::Min(0),         // Clients
            Constraint::Length(4),      // Current client
        ])
        .split(area);

    render_document_list(f, chunks[0], app);
    render_client_list(f, chunks[1], app);
    render_current_client(f, chunks[2], app);
}

fn render_document_list(f: &mut Frame, area: Rect, app: &App) {
    let search_line = if app.searching_documents {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::raw(app.document_search.clone()),
            Span::styled("▌", Style::default().fg(Color::Yellow)),
        ])
    } else if app.document_search.is_empty() {
        Line::from(Span::styled(
            "[/] search documents",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Gray)),
            Span::raw(app.document_search.clone()),
        ])
    };

    let mut lines = vec![search_line, Line::from("")];

    let matcher = SkimMatcherV2::default();
    let visible: Vec<&str> = app
        .documents
        .iter()
        .map(|d| d.name.as_str())
        .filter(|name| {
            app.document_search.is_empty()
                || matcher.fuzzy_match(name, &app.document_search).is_some()
        })
        .collect();

    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "No documents uploaded",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        for name in visible {
            lines.push(Line::from(vec![
                Span::raw("📄 "),
                Span::raw(name.to_string()),
            ]));
        }
    }

    let list = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Documents "))
        .wrap(Wrap { trim: true });
    f.render_widget(list, area);
}

fn render_client_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .clients
        .iter()
        .enumerate()
        .map(|(idx, client)| {
            let is_selected = idx == app.selected_client;
            let marker = if is_selected { "▣" } else { "☐" };

            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut lines = vec![Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(format!("#{} - {}", client.deal_id, client.name), name_style),
            ])];
            if let Some(chat) = &client.recent_chat {
                lines.push(Line::from(Span::styled(
                    format!("   {}", chat.preview),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Clients "));
    f.render_widget(list, area);
}

fn render_current_client(f: &mut Frame, area: Rect, app: &App) {
    let Some(client) = app.clients.get(app.selected_client) else {
        return;
    };

    let initials: String = client
        .name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("({initials}) "),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(client.name.clone()),
        ]),
        Line::from(Span::styled(
            client.email.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" [i] Details "),
    );
    f.render_widget(footer, area);
}

fn render_chat(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Transcript
            Constraint::Length(3), // Input box
        ])
        .split(area);

    let mut message_lines = Vec::new();
    for msg in &app.chat.messages {
        let (who, style) = match msg.sender {
            Sender::User => (
                "You",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Sender::Agent => (
                "Agent",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        message_lines.push(Line::from(vec![
            Span::styled(format!("{who} "), style),
            Span::styled(
                msg.timestamp.format("%H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        message_lines.push(Line::from(msg.content.clone()));
        message_lines.push(Line::from(""));
    }

    if app.chat.waiting_for_reply {
        message_lines.push(Line::from(Span::styled(
            format!("{} Agent is typing...", app.chat.spinner_char()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let deal_title = app
        .clients
        .get(app.selected_client)
        .map(|c| format!(" Deal - {} ", c.name))
        .unwrap_or_else(|| " Chat ".to_string());

    let transcript = Paragraph::new(message_lines)
        .block(Block::default().borders(Borders::ALL).title(deal_title))
        .wrap(Wrap { trim: false })
        .scroll((app.chat.scroll, 0));
    f.render_widget(transcript, chunks[0]);

    let input = Paragraph::new(app.chat.input_buffer.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Type here (Enter to send) "),
    );
    f.render_widget(input, chunks[1]);
}

fn render_documents(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    render_upload_box(
        f,
        chunks[0],
        "Upload Document",
        "Upload any additional documents required for processing",
        &app.console_upload,
        true,
    );

    let items: Vec<ListItem> = app
        .documents
        .iter()
        .map(|doc| {
            ListItem::new(Line::from(vec![
                Span::raw("📄 "),
                Span::styled(
                    doc.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "  {} KB  {}",
                        doc.size_bytes / 1024,
                        doc.uploaded_at.format("%Y-%m-%d %H:%M")
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Uploaded Documents ({}) ", app.documents.len())),
    );
    f.render_widget(list, chunks[1]);
}

fn render_spreads(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let groups = [
        ("Income Statement", &app.spreads[..3.min(app.spreads.len())]),
        (
            "Balance Sheet",
            &app.spreads[3.min(app.spreads.len())..5.min(app.spreads.len())],
        ),
        ("Ratio Analysis", &app.spreads[5.min(app.spreads.len())..]),
    ];

    for (col, (title, rows)) in groups.iter().enumerate() {
        let mut lines = Vec::new();
        for item in rows.iter() {
            let mut label_spans = vec![Span::raw(item.label.clone())];
            if let Some(source) = &item.source {
                label_spans.push(Span::styled(
                    format!(" ({source})"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(label_spans));
            lines.push(Line::from(Span::styled(
                format!("  {}", item.value),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }

        let card = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {title} ")),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(card, columns[col]);
    }
}

fn render_pre_screen(f: &mut Frame, area: Rect, app: &App) {
    let Some(client) = app.clients.get(app.selected_client) else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            "Pre-Screen Summary",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Requested amount:  ${}",
            client.details.loan_amount
        )),
        Line::from(format!("Loan type:         {}", client.details.loan_type)),
        Line::from(format!(
            "Property value:    ${}",
            client.details.property_value
        )),
        Line::from(format!("Credit score:      {}", client.details.credit_score)),
        Line::from(""),
        Line::from(vec![
            Span::styled("✓", Style::default().fg(Color::Green)),
            Span::raw(" Eligibility checks passed - ready for LOI"),
        ]),
    ];

    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Pre-Screen "))
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn render_loi(f: &mut Frame, area: Rect, app: &App) {
    let Some(client) = app.clients.get(app.selected_client) else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            "Letter of Intent",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Borrower:   {}", client.name)),
        Line::from(format!("Deal:       #{}", client.deal_id)),
        Line::from(format!("Amount:     ${}", client.details.loan_amount)),
        Line::from(format!("Structure:  {}", client.details.loan_type)),
        Line::from(""),
        Line::from(
            "This letter outlines the preliminary terms under which the bank \
             would consider extending credit. Terms are indicative and subject \
             to underwriting.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Status: issued, awaiting signature",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" LOI "))
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn render_memo(f: &mut Frame, area: Rect, app: &App) {
    match &app.memo_document {
        Some(doc) => {
            let lines = vec![
                Line::from(Span::styled(
                    "Credit Memo",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![Span::raw("📄 "), Span::raw(doc.name.clone())]),
                Line::from(Span::styled(
                    format!("Uploaded {}", doc.uploaded_at.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("[x]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" replace memo"),
                ]),
            ];
            let card = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" Memo "));
            f.render_widget(card, area);
        }
        None => render_upload_box(
            f,
            area,
            "Upload Memo",
            "Drop the credit memo here (PDF, DOC or DOCX only)",
            &app.memo_upload,
            true,
        ),
    }
}

fn render_client_details(f: &mut Frame, area: Rect, app: &App) {
    let Some(client) = app.clients.get(app.selected_client) else {
        return;
    };

    let popup = centered_rect(60, 60, area);

    let lines = vec![
        Line::from(Span::styled(
            client.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Deal ID: {}", client.deal_id)),
        Line::from(""),
        Line::from(Span::styled(
            "Contact Information",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(client.details.email.clone()),
        Line::from(client.details.phone.clone()),
        Line::from(client.details.address.clone()),
        Line::from(""),
        Line::from(Span::styled("Loan Details", Style::default().fg(Color::Cyan))),
        Line::from(format!("Amount: ${}", client.details.loan_amount)),
        Line::from(format!("Type: {}", client.details.loan_type)),
        Line::from(format!(
            "Property Value: ${}",
            client.details.property_value
        )),
        Line::from(format!("Credit Score: {}", client.details.credit_score)),
        Line::from(""),
        Line::from(Span::styled(
            "[i/Esc] close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Client Details ")
                .style(Style::default().bg(Color::Black)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(ratatui::widgets::Clear, popup);
    f.render_widget(card, popup);
}
