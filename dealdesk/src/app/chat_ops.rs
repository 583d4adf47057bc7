//! Chat operations for the agent console

use chrono::Local;
use dealdesk_core::ChatPreview;

use super::*;

impl App {
    /// Send the current input buffer through the script engine.
    pub fn send_chat_message(&mut self) {
        let input = std::mem::take(&mut self.chat.input_buffer);
        if input.trim().is_empty() {
            return;
        }

        // The sidebar preview mirrors the borrower's latest message.
        if let Some(client) = self.clients.get_mut(self.selected_client) {
            client.recent_chat = Some(ChatPreview {
                preview: input.clone(),
                timestamp: Local::now(),
            });
        }

        let was_waiting = self.script.waiting_for_application_upload;
        let handle = self.tokio_runtime.handle().clone();
        self.chat
            .send_message(input, &mut self.script, self.reply_latency, &handle);

        if self.script.waiting_for_application_upload && !was_waiting {
            tracing::info!("chat armed for application upload");
            self.notifications.info(
                "Awaiting application",
                "The next uploaded document will open a new deal",
            );
        }
    }

    /// Reset the transcript (the "New Chat" action).
    pub fn new_chat(&mut self) {
        self.chat.reset();
    }

    pub(crate) fn poll_chat_reply(&mut self) {
        self.chat.poll_reply();
    }
}
