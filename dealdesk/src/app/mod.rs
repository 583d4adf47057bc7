//! Application state and module organization
//!
//! This module contains the main App struct and the operations on it,
//! organized by domain.

use std::path::PathBuf;

use anyhow::Result;
use dealdesk_core::script::ScriptEngine;
use dealdesk_core::upload::{UploadSimulator, UploadWidget};
use dealdesk_core::{default_view, seed_clients, seed_spreads, seed_tasks, Stage};

use crate::chat::ChatState;

mod models;
pub use models::*;

// Declare submodules
mod chat_ops;
mod dashboard_ops;
mod file_browser;
mod navigation;
pub mod notifications;
mod upload_ops;

pub use notifications::{NotificationLevel, NotificationManager};

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        let tokio_runtime = tokio::runtime::Runtime::new()?;

        let clients = seed_clients();
        let current_stage = Stage::Underwriting;

        Ok(Self {
            screen: config.start_screen,
            should_quit: false,

            selected_client: clients.len().saturating_sub(1),
            clients,
            current_stage,
            current_view: default_view(current_stage),
            documents: Vec::new(),
            document_search: String::new(),
            searching_documents: false,
            chat: ChatState::new(),
            script: ScriptEngine::new(),
            console_upload: UploadWidget::new(),
            memo_upload: UploadWidget::new(),
            memo_document: None,
            spreads: seed_spreads(),
            show_client_details: false,

            tasks: seed_tasks(),
            selected_task: 0,
            active_panel: None,
            dashboard_slots: dashboard_slots(),
            selected_slot: 0,
            extra_upload: UploadWidget::new(),
            dashboard_uploaded: Vec::new(),
            product_stage: Stage::Application,

            show_file_browser: false,
            file_browser_items: Vec::new(),
            file_browser_selected: 0,
            file_browser_search: String::new(),
            current_dir,
            upload_target: None,

            document_sim: UploadSimulator::documents(
                config.upload_success_rate,
                config.upload_latency,
            ),
            memo_sim: UploadSimulator::memos(config.upload_success_rate, config.upload_latency),
            reply_latency: config.reply_latency,
            notifications: NotificationManager::new(),

            tokio_runtime,
        })
    }

    /// One tick of background work: deliver pending chat replies and upload
    /// completions, advance the spinner, expire notifications.
    pub fn poll_background(&mut self) {
        self.poll_chat_reply();
        self.poll_uploads();
        if self.chat.waiting_for_reply {
            self.chat.update_spinner();
        }
        self.notifications.cleanup_expired();
    }

    pub fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Dashboard => Screen::Console,
            Screen::Console => Screen::Dashboard,
        };
    }
}
