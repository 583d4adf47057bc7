//! Upload submission and completion handling
//!
//! Widgets own their pending transfer; the event loop calls `poll_uploads`
//! each tick and this module applies the completed transfers to app state:
//! document lists, the to-do counters, and the chat-armed deal creation.

use dealdesk_core::upload::UploadEvent;
use dealdesk_core::{Document, FileRef};

use super::*;

impl App {
    /// Submit a picked file to the widget behind `target`. A validation
    /// failure surfaces as a notification and leaves the widget idle.
    pub fn submit_upload(&mut self, target: UploadTarget, file: FileRef) {
        let handle = self.tokio_runtime.handle().clone();
        let name = file.name.clone();

        let result = match target {
            UploadTarget::ConsoleDocument => {
                self.console_upload
                    .select(file, &mut self.document_sim, &handle)
            }
            UploadTarget::Memo => self.memo_upload.select(file, &mut self.memo_sim, &handle),
            UploadTarget::DashboardSlot(idx) => match self.dashboard_slots.get_mut(idx) {
                Some(slot) => slot.widget.select(file, &mut self.document_sim, &handle),
                None => return,
            },
            UploadTarget::DashboardExtra => {
                self.extra_upload
                    .select(file, &mut self.document_sim, &handle)
            }
        };

        match result {
            Ok(()) => {
                tracing::info!(file = %name, ?target, "upload started");
            }
            Err(err) => {
                tracing::warn!(file = %name, %err, "upload rejected");
                self.notifications.error(
                    "Invalid file type",
                    "Please upload a supported document format.",
                );
            }
        }
    }

    /// Clear the widget behind `target` so another file can be picked.
    pub fn clear_upload(&mut self, target: UploadTarget) {
        match target {
            UploadTarget::ConsoleDocument => self.console_upload.clear(),
            UploadTarget::Memo => self.memo_upload.clear(),
            UploadTarget::DashboardSlot(idx) => {
                if let Some(slot) = self.dashboard_slots.get_mut(idx) {
                    slot.widget.clear();
                }
            }
            UploadTarget::DashboardExtra => self.extra_upload.clear(),
        }
    }

    /// Drain completed transfers from every widget.
    pub(crate) fn poll_uploads(&mut self) {
        if let Some(event) = self.console_upload.poll() {
            self.finish_console_upload(event);
        }

        if let Some(event) = self.memo_upload.poll() {
            self.finish_memo_upload(event);
        }

        for idx in 0..self.dashboard_slots.len() {
            if let Some(event) = self.dashboard_slots[idx].widget.poll() {
                self.finish_dashboard_upload(event, false);
            }
        }

        if let Some(event) = self.extra_upload.poll() {
            self.finish_dashboard_upload(event, true);
        }
    }

    fn finish_console_upload(&mut self, event: UploadEvent) {
        match event {
            UploadEvent::Completed(file) => {
                let doc = Document::from_upload(&file);

                // A chat-armed upload opens a new deal and selects it.
                if let Some(client) = self.script.application_uploaded(&doc) {
                    tracing::info!(deal_id = %client.deal_id, "deal opened from application upload");
                    self.notifications
                        .success("New deal opened", format!("#{} - {}", client.deal_id, client.name));
                    self.clients.push(client);
                    self.selected_client = self.clients.len() - 1;
                }

                self.notifications
                    .success("Document uploaded successfully!", doc.name.clone());
                self.documents.push(doc);
            }
            UploadEvent::Failed(file) => {
                tracing::warn!(file = %file.name, "simulated transfer failed");
                self.notifications
                    .error("Upload failed", "Please try again.");
            }
        }
    }

    fn finish_memo_upload(&mut self, event: UploadEvent) {
        match event {
            UploadEvent::Completed(file) => {
                let doc = Document::from_upload(&file);
                self.notifications
                    .success("Memo uploaded", doc.name.clone());
                self.memo_document = Some(doc.clone());
                self.documents.push(doc);
            }
            UploadEvent::Failed(file) => {
                tracing::warn!(file = %file.name, "simulated transfer failed");
                self.notifications
                    .error("Upload failed", "Please try again.");
            }
        }
    }

    fn finish_dashboard_upload(&mut self, event: UploadEvent, extra: bool) {
        match event {
            UploadEvent::Completed(file) => {
                if extra {
                    self.notifications
                        .success("Upload complete", format!("Successfully uploaded: {}", file.name));
                } else {
                    self.dashboard_uploaded.push(file.name.clone());
                    self.notifications
                        .success("Document uploaded successfully!", file.name);
                    self.update_upload_task();
                }
            }
            UploadEvent::Failed(file) => {
                tracing::warn!(file = %file.name, "simulated transfer failed");
                self.notifications
                    .error("Upload failed", "Please try again.");
            }
        }
    }
}
