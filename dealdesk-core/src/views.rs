//! Stage -> console view routing
//!
//! Each stage maps to a static, ordered list of content views. The first
//! entry is the default view selected whenever the stage changes.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// Content views available in the agent console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsoleView {
    Chat,
    Documents,
    PreScreen,
    Spreads,
    Loi,
    Memo,
}

impl ConsoleView {
    pub fn label(&self) -> &'static str {
        match self {
            ConsoleView::Chat => "Chat",
            ConsoleView::Documents => "Documents",
            ConsoleView::PreScreen => "Pre-Screen",
            ConsoleView::Spreads => "Spreads",
            ConsoleView::Loi => "LOI",
            ConsoleView::Memo => "Memo",
        }
    }
}

/// Views valid for a stage, in tab order. Unmapped stages get an empty
/// list (nothing selectable) rather than an error.
pub fn views_for_stage(stage: Stage) -> &'static [ConsoleView] {
    match stage {
        Stage::Application => &[ConsoleView::Chat],
        Stage::PreFlight => &[
            ConsoleView::Documents,
            ConsoleView::PreScreen,
            ConsoleView::Spreads,
            ConsoleView::Chat,
        ],
        Stage::Loi => &[
            ConsoleView::Documents,
            ConsoleView::Loi,
            ConsoleView::Spreads,
            ConsoleView::Chat,
        ],
        Stage::Underwriting => &[
            ConsoleView::Documents,
            ConsoleView::Spreads,
            ConsoleView::Memo,
            ConsoleView::Chat,
        ],
        Stage::Processing | Stage::Closing => &[],
    }
}

/// Default view to land on when switching to `stage`.
pub fn default_view(stage: Stage) -> Option<ConsoleView> {
    views_for_stage(stage).first().copied()
}
