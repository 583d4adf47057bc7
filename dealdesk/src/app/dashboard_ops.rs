//! Borrower dashboard operations

use super::*;

impl App {
    /// Open the detail panel for the selected to-do item.
    pub fn open_selected_task(&mut self) {
        if let Some(task) = self.tasks.get(self.selected_task) {
            self.active_panel = DashboardPanel::from_task_id(&task.id);
            self.selected_slot = 0;
        }
    }

    pub fn close_panel(&mut self) {
        self.active_panel = None;
    }

    /// Mark the upload to-do complete once enough documents have landed.
    pub(crate) fn update_upload_task(&mut self) {
        if self.dashboard_uploaded.len() < REQUIRED_DOCUMENTS {
            return;
        }

        let mut newly_done = false;
        for task in &mut self.tasks {
            if task.id == "upload-documents" && !task.completed {
                task.completed = true;
                task.count = Some(0);
                newly_done = true;
            }
        }

        if newly_done {
            tracing::info!("required dashboard documents complete");
            self.notifications.success(
                "To-do complete",
                "All required documents have been uploaded!",
            );
        }
    }
}
