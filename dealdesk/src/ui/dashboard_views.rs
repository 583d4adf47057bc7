//! Borrower dashboard rendering: to-do list, task panels, product card

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use dealdesk_core::Stage;

use super::components::{render_progress_tracker, render_upload_box};
use crate::app::{App, DashboardPanel};

pub fn render_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(0)])
        .split(area);

    render_left_column(f, chunks[0], app);

    match app.active_panel {
        Some(DashboardPanel::UploadDocuments) => render_upload_panel(f, chunks[1], app),
        Some(DashboardPanel::VerifyInformation) => render_verify_panel(f, chunks[1]),
        Some(DashboardPanel::SignAgreements) => render_sign_panel(f, chunks[1]),
        None => render_products(f, chunks[1], app),
    }
}

fn render_left_column(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    render_task_list(f, chunks[0], app);
    render_contact_card(f, chunks[1]);
}

fn render_task_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = idx == app.selected_task;

            let check = if task.completed {
                Span::styled("✓ ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ ", Style::default().fg(Color::Yellow))
            };

            let title_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if task.completed {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![
                Span::raw(if is_selected { "▶ " } else { "  " }),
                check,
                Span::styled(task.title.clone(), title_style),
            ];
            if let Some(count) = task.count {
                if count > 0 {
                    spans.push(Span::styled(
                        format!("  ({count})"),
                        Style::default().fg(Color::Gray),
                    ));
                }
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" TO-DO LIST "),
    );
    f.render_widget(list, area);
}

fn render_contact_card(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Sarah Johnson",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Relationship Manager",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("☎ ", Style::default().fg(Color::Cyan)),
            Span::raw("Contact"),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Contact Us "),
    );
    f.render_widget(card, area);
}

fn render_products(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Product card
            Constraint::Length(7), // Additional documents
            Constraint::Min(0),
        ])
        .split(area);

    // Product card with the full 6-stage tracker
    let product = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(4)])
        .split(chunks[0]);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Home Loan Refinance",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "   Relationship: John Smith",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" YOUR PRODUCTS "));
    f.render_widget(title, product[0]);

    render_progress_tracker(f, product[1], &Stage::ALL, app.product_stage);

    render_upload_box(
        f,
        chunks[1],
        "Additional Documentation",
        "Upload any supplemental files for to-do list items.",
        &app.extra_upload,
        true,
    );
}

fn render_upload_panel(f: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = vec![Constraint::Length(2)];
    constraints.extend(app.dashboard_slots.iter().map(|_| Constraint::Length(7)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let intro = Paragraph::new(
        "Please upload the following documents to continue with your application process.",
    )
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true });
    f.render_widget(intro, chunks[0]);

    for (idx, slot) in app.dashboard_slots.iter().enumerate() {
        render_upload_box(
            f,
            chunks[idx + 1],
            slot.title,
            slot.description,
            &slot.widget,
            idx == app.selected_slot,
        );
    }
}

fn render_verify_panel(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(
            "Your information has been verified. No further action is required at this time.",
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::styled(
                "Verification Complete",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Completed on June 15, 2023",
            Style::default().fg(Color::Gray),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Verify Information "),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn render_sign_panel(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(
            "Please review and sign the following agreements to proceed with your application.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Loan Agreement",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Review and sign your home loan refinance agreement",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Terms & Conditions",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Review the terms and conditions for your account",
            Style::default().fg(Color::Gray),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sign Agreements "),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}
