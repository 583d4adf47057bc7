//! Navigation over stages, view tabs, clients and to-do items

use dealdesk_core::{default_view, views_for_stage, Stage};

use super::*;

impl App {
    /// Request a stage change. No transition-legality check: any stage is
    /// selectable, forward or backward. The active view always resets to
    /// the new stage's default.
    pub fn set_stage(&mut self, stage: Stage) {
        self.current_stage = stage;
        self.current_view = default_view(stage);
    }

    pub fn next_stage(&mut self) {
        if let Some(idx) = Stage::ALL.iter().position(|s| *s == self.current_stage) {
            if idx + 1 < Stage::ALL.len() {
                self.set_stage(Stage::ALL[idx + 1]);
            }
        }
    }

    pub fn previous_stage(&mut self) {
        if let Some(idx) = Stage::ALL.iter().position(|s| *s == self.current_stage) {
            if idx > 0 {
                self.set_stage(Stage::ALL[idx - 1]);
            }
        }
    }

    /// Cycle to the next view tab allowed for the current stage.
    pub fn next_view(&mut self) {
        let views = views_for_stage(self.current_stage);
        if views.is_empty() {
            self.current_view = None;
            return;
        }

        self.current_view = match self.current_view {
            Some(view) => {
                let idx = views.iter().position(|v| *v == view).unwrap_or(0);
                Some(views[(idx + 1) % views.len()])
            }
            None => views.first().copied(),
        };
    }

    pub fn previous_view(&mut self) {
        let views = views_for_stage(self.current_stage);
        if views.is_empty() {
            self.current_view = None;
            return;
        }

        self.current_view = match self.current_view {
            Some(view) => {
                let idx = views.iter().position(|v| *v == view).unwrap_or(0);
                Some(views[(idx + views.len() - 1) % views.len()])
            }
            None => views.first().copied(),
        };
    }

    pub fn next(&mut self) {
        match self.screen {
            Screen::Console => {
                if self.selected_client + 1 < self.clients.len() {
                    self.selected_client += 1;
                }
            }
            Screen::Dashboard => match self.active_panel {
                Some(DashboardPanel::UploadDocuments) => {
                    if self.selected_slot + 1 < self.dashboard_slots.len() {
                        self.selected_slot += 1;
                    }
                }
                _ => {
                    if self.selected_task + 1 < self.tasks.len() {
                        self.selected_task += 1;
                    }
                }
            },
        }
    }

    pub fn previous(&mut self) {
        match self.screen {
            Screen::Console => {
                self.selected_client = self.selected_client.saturating_sub(1);
            }
            Screen::Dashboard => match self.active_panel {
                Some(DashboardPanel::UploadDocuments) => {
                    self.selected_slot = self.selected_slot.saturating_sub(1);
                }
                _ => {
                    self.selected_task = self.selected_task.saturating_sub(1);
                }
            },
        }
    }

    pub fn toggle_client_details(&mut self) {
        self.show_client_details = !self.show_client_details;
    }
}
