//! Main application state

use std::path::PathBuf;
use std::time::Duration;

use dealdesk_core::script::ScriptEngine;
use dealdesk_core::upload::{UploadSimulator, UploadWidget};
use dealdesk_core::{Client, ConsoleView, Document, SpreadItem, Stage, Task};

use crate::app::notifications::NotificationManager;
use crate::chat::ChatState;
use super::{DashboardSlot, Screen, UploadTarget};

/// Runtime options, filled from the CLI
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub start_screen: Screen,
    pub upload_success_rate: f64,
    pub upload_latency: Duration,
    pub reply_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_screen: Screen::Console,
            upload_success_rate: dealdesk_core::upload::DEFAULT_SUCCESS_RATE,
            upload_latency: dealdesk_core::upload::SIMULATED_LATENCY,
            reply_latency: crate::chat::REPLY_LATENCY,
        }
    }
}

/// Main application state. Owned by the event loop; children receive
/// references and signal intent through the App methods.
pub struct App {
    pub screen: Screen,
    pub should_quit: bool,

    // Agent console
    pub clients: Vec<Client>,
    pub selected_client: usize,
    pub current_stage: Stage,
    /// Active content view; `None` when the stage maps to no views
    pub current_view: Option<ConsoleView>,
    pub documents: Vec<Document>,
    pub document_search: String,
    /// True while the sidebar search box captures typed characters
    pub searching_documents: bool,
    pub chat: ChatState,
    pub script: ScriptEngine,
    pub console_upload: UploadWidget,
    pub memo_upload: UploadWidget,
    pub memo_document: Option<Document>,
    pub spreads: Vec<SpreadItem>,
    pub show_client_details: bool,

    // Borrower dashboard
    pub tasks: Vec<Task>,
    pub selected_task: usize,
    pub active_panel: Option<super::DashboardPanel>,
    pub dashboard_slots: Vec<DashboardSlot>,
    pub selected_slot: usize,
    pub extra_upload: UploadWidget,
    /// Names of documents uploaded through the dashboard
    pub dashboard_uploaded: Vec<String>,
    /// Stage shown on the borrower's product card
    pub product_stage: Stage,

    // File picker overlay
    pub show_file_browser: bool,
    pub file_browser_items: Vec<PathBuf>,
    pub file_browser_selected: usize,
    pub file_browser_search: String,
    pub current_dir: PathBuf,
    /// Where the picked file will be submitted
    pub upload_target: Option<UploadTarget>,

    // Simulation plumbing
    pub document_sim: UploadSimulator,
    pub memo_sim: UploadSimulator,
    pub reply_latency: Duration,
    pub notifications: NotificationManager,

    // Tokio runtime for the delayed-completion tasks
    pub tokio_runtime: tokio::runtime::Runtime,
}
