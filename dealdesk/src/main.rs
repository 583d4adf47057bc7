use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use dealdesk::app::{App, AppConfig, DashboardPanel, Screen, UploadTarget};
use dealdesk::ui::ui;
use dealdesk_core::{seed_clients, seed_spreads, seed_tasks, ConsoleView};

#[derive(Parser, Debug)]
#[command(name = "dealdesk", version, about = "Commercial lending deal tracker")]
struct Cli {
    /// Start on the borrower dashboard instead of the agent console
    #[arg(long)]
    dashboard: bool,

    /// Probability that a simulated upload succeeds (0.0 to 1.0)
    #[arg(long, default_value_t = dealdesk_core::upload::DEFAULT_SUCCESS_RATE)]
    upload_success_rate: f64,

    /// Simulated upload latency in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1500)]
    upload_latency_ms: u64,

    /// Delay before scripted chat replies, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    reply_latency_ms: u64,

    /// Append logs to this file (logging is off without it)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the seed dataset as JSON and exit
    #[arg(long)]
    dump_seed: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dump_seed {
        return dump_seed();
    }

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = AppConfig {
        start_screen: if cli.dashboard {
            Screen::Dashboard
        } else {
            Screen::Console
        },
        upload_success_rate: cli.upload_success_rate.clamp(0.0, 1.0),
        upload_latency: Duration::from_millis(cli.upload_latency_ms),
        reply_latency: Duration::from_millis(cli.reply_latency_ms),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn dump_seed() -> Result<()> {
    let seed = serde_json::json!({
        "clients": seed_clients(),
        "spreads": seed_spreads(),
        "tasks": seed_tasks(),
    });
    println!("{}", serde_json::to_string_pretty(&seed)?);
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up delayed upload completions and chat replies
        app.poll_background();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global shortcuts win over every input mode
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('d') => {
                app.toggle_screen();
                return;
            }
            KeyCode::Char('q') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('n') => {
                if app.screen == Screen::Console {
                    app.new_chat();
                }
                return;
            }
            _ => {}
        }
    }

    if app.show_file_browser {
        handle_file_browser_key(app, key);
    } else if app.searching_documents {
        handle_search_key(app, key);
    } else if chat_input_active(app) {
        handle_chat_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
}

fn chat_input_active(app: &App) -> bool {
    app.screen == Screen::Console && app.current_view == Some(ConsoleView::Chat)
}

fn handle_file_browser_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down => app.file_browser_next(),
        KeyCode::Up => app.file_browser_previous(),
        KeyCode::Enter => app.file_browser_select(),
        KeyCode::Esc => app.close_file_picker(),
        KeyCode::Char(c) => {
            // Fuzzy search
            app.file_browser_search.push(c);
        }
        KeyCode::Backspace => {
            app.file_browser_search.pop();
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            // Keep the filter, return focus to the view
            app.searching_documents = false;
        }
        KeyCode::Esc => {
            app.searching_documents = false;
            app.document_search.clear();
        }
        KeyCode::Char(c) => {
            app.document_search.push(c);
        }
        KeyCode::Backspace => {
            app.document_search.pop();
        }
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.next_view(),
        KeyCode::BackTab => app.previous_view(),
        KeyCode::Left => app.previous_stage(),
        KeyCode::Right => app.next_stage(),
        KeyCode::Up => app.chat.scroll_up(),
        KeyCode::Down => app.chat.scroll_down(),
        KeyCode::Enter => app.send_chat_message(),
        KeyCode::Esc => app.chat.input_buffer.clear(),
        KeyCode::Backspace => {
            app.chat.input_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.chat.input_buffer.push(c);
        }
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }
        KeyCode::Tab => {
            if app.screen == Screen::Console {
                app.next_view();
            }
        }
        KeyCode::BackTab => {
            if app.screen == Screen::Console {
                app.previous_view();
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if app.screen == Screen::Console {
                app.previous_stage();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.screen == Screen::Console {
                app.next_stage();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Enter => {
            if app.screen == Screen::Dashboard && app.active_panel.is_none() {
                app.open_selected_task();
            }
        }
        KeyCode::Char('u') => {
            if let Some(target) = upload_target(app) {
                app.open_file_picker(target);
            }
        }
        KeyCode::Char('x') => {
            if let Some(target) = upload_target(app) {
                app.clear_upload(target);
            }
        }
        KeyCode::Char('/') => {
            if app.screen == Screen::Console {
                app.searching_documents = true;
            }
        }
        KeyCode::Char('i') => {
            if app.screen == Screen::Console {
                app.toggle_client_details();
            }
        }
        KeyCode::Esc => {
            if app.show_client_details {
                app.show_client_details = false;
            } else if app.screen == Screen::Dashboard && app.active_panel.is_some() {
                app.close_panel();
            } else if !app.document_search.is_empty() {
                app.document_search.clear();
            }
        }
        _ => {}
    }
}

/// Which upload box a picked file should land in, given where the user is.
fn upload_target(app: &App) -> Option<UploadTarget> {
    match app.screen {
        Screen::Console => match app.current_view {
            Some(ConsoleView::Documents) => Some(UploadTarget::ConsoleDocument),
            Some(ConsoleView::Memo) => Some(UploadTarget::Memo),
            _ => None,
        },
        Screen::Dashboard => match app.active_panel {
            Some(DashboardPanel::UploadDocuments) => {
                Some(UploadTarget::DashboardSlot(app.selected_slot))
            }
            None => Some(UploadTarget::DashboardExtra),
            _ => None,
        },
    }
}
