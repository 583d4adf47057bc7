//! Header and footer rendering functions

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dealdesk_core::ConsoleView;

use crate::app::{App, DashboardPanel, Screen};

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.screen {
        Screen::Console => "Dealdesk v0.1.0 - Agent Console",
        Screen::Dashboard => "Dealdesk v0.1.0 - Borrower Dashboard",
    };

    let mut spans = vec![Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    )];

    if app.screen == Screen::Console {
        spans.push(Span::raw(format!(
            "      Stage: {}",
            app.current_stage.label()
        )));
    }

    spans.push(Span::raw("      "));
    spans.push(Span::styled(
        "[Ctrl+D]",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(" Switch screen"));

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.show_file_browser {
        Line::from(vec![
            Span::styled("[↑↓]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Navigate  "),
            Span::styled("[Enter]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Open/Pick  "),
            Span::styled("TYPE", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" to filter  "),
            Span::styled("[Esc]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Cancel"),
        ])
    } else {
        match app.screen {
            Screen::Console => match app.current_view {
                Some(ConsoleView::Chat) => Line::from(vec![
                    Span::styled("TYPE", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" to compose  "),
                    Span::styled("[Enter]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Send  "),
                    Span::styled("[Tab]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Next view  "),
                    Span::styled("[←→]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Stage  "),
                    Span::styled("[Ctrl+N]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" New chat  "),
                    Span::styled("[Ctrl+Q]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Quit"),
                ]),
                _ => Line::from(vec![
                    Span::styled("[Tab]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Next view  "),
                    Span::styled("[←→]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Stage  "),
                    Span::styled("[↑↓]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Client  "),
                    Span::styled("[u]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Upload  "),
                    Span::styled("[x]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Clear  "),
                    Span::styled("[/]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Search  "),
                    Span::styled("[i]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Details  "),
                    Span::styled("[q]", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" Quit"),
                ]),
            },
            Screen::Dashboard => {
                if app.active_panel == Some(DashboardPanel::UploadDocuments) {
                    Line::from(vec![
                        Span::styled("[↑↓]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Slot  "),
                        Span::styled("[u]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Upload  "),
                        Span::styled("[x]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Clear  "),
                        Span::styled("[Esc]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Back  "),
                        Span::styled("[q]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Quit"),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled("[↑↓]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Task  "),
                        Span::styled("[Enter]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Open  "),
                        Span::styled("[u]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Upload extra  "),
                        Span::styled("[Esc]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Close panel  "),
                        Span::styled("[q]", Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw(" Quit"),
                    ])
                }
            }
        }
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
