//! Application stage lifecycle model
//!
//! A deal moves through a fixed, ordered set of stages. Per-stage display
//! status is derived from the position of the current stage; nothing here is
//! stored or mutated.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a loan application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Application,
    PreFlight,
    Loi,
    Underwriting,
    Processing,
    Closing,
}

impl Stage {
    /// Canonical ordered stage set. The order is fixed at compile time.
    pub const ALL: [Stage; 6] = [
        Stage::Application,
        Stage::PreFlight,
        Stage::Loi,
        Stage::Underwriting,
        Stage::Processing,
        Stage::Closing,
    ];

    /// Stages handled by the agent console (the ones with mapped views).
    pub const CONSOLE: [Stage; 4] = [
        Stage::Application,
        Stage::PreFlight,
        Stage::Loi,
        Stage::Underwriting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Application => "Application",
            Stage::PreFlight => "Pre-Flight",
            Stage::Loi => "LOI",
            Stage::Underwriting => "Underwriting",
            Stage::Processing => "Processing",
            Stage::Closing => "Closing",
        }
    }
}

/// Derived render status of a stage chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Active,
    Pending,
}

/// One rendered stage chip
#[derive(Debug, Clone, PartialEq)]
pub struct StageProgress {
    pub stage: Stage,
    pub label: &'static str,
    pub status: StageStatus,
}

/// Derive per-stage status from the position of `current` in `stages`.
///
/// Stages before the current one are `Completed`, the current one is
/// `Active`, the rest are `Pending`. A `current` that is not a member of
/// `stages` yields every stage as `Pending` - defined fallback, no panic.
pub fn stage_progress(stages: &[Stage], current: Stage) -> Vec<StageProgress> {
    let current_idx = stages.iter().position(|s| *s == current);

    stages
        .iter()
        .enumerate()
        .map(|(idx, stage)| {
            let status = match current_idx {
                Some(c) if idx < c => StageStatus::Completed,
                Some(c) if idx == c => StageStatus::Active,
                _ => StageStatus::Pending,
            };
            StageProgress {
                stage: *stage,
                label: stage.label(),
                status,
            }
        })
        .collect()
}
