//! Tests for stage progression status derivation

use dealdesk_core::{stage_progress, Stage, StageStatus};

#[test]
fn test_example_scenario_loi_active() {
    let stages = [Stage::Application, Stage::PreFlight, Stage::Loi, Stage::Underwriting];
    let progress = stage_progress(&stages, Stage::Loi);

    let statuses: Vec<StageStatus> = progress.iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![
            StageStatus::Completed,
            StageStatus::Completed,
            StageStatus::Active,
            StageStatus::Pending,
        ]
    );
}

#[test]
fn test_exactly_one_active_for_member_stage() {
    for current in Stage::ALL {
        let progress = stage_progress(&Stage::ALL, current);

        let active = progress
            .iter()
            .filter(|p| p.status == StageStatus::Active)
            .count();
        assert_eq!(active, 1, "exactly one active chip for {current:?}");

        let current_idx = Stage::ALL.iter().position(|s| *s == current).unwrap();
        for (idx, chip) in progress.iter().enumerate() {
            let expected = if idx < current_idx {
                StageStatus::Completed
            } else if idx == current_idx {
                StageStatus::Active
            } else {
                StageStatus::Pending
            };
            assert_eq!(chip.status, expected);
        }
    }
}

#[test]
fn test_first_stage_has_no_completed() {
    let progress = stage_progress(&Stage::ALL, Stage::Application);
    assert_eq!(progress[0].status, StageStatus::Active);
    assert!(progress[1..]
        .iter()
        .all(|p| p.status == StageStatus::Pending));
}

#[test]
fn test_last_stage_has_no_pending() {
    let progress = stage_progress(&Stage::ALL, Stage::Closing);
    assert_eq!(progress.last().unwrap().status, StageStatus::Active);
    assert!(progress[..progress.len() - 1]
        .iter()
        .all(|p| p.status == StageStatus::Completed));
}

#[test]
fn test_missing_current_renders_all_pending() {
    // Processing is not part of the console stage set.
    let progress = stage_progress(&Stage::CONSOLE, Stage::Processing);

    assert_eq!(progress.len(), Stage::CONSOLE.len());
    assert!(progress.iter().all(|p| p.status == StageStatus::Pending));
}

#[test]
fn test_empty_stage_list() {
    let progress = stage_progress(&[], Stage::Application);
    assert!(progress.is_empty());
}

#[test]
fn test_labels_match_display_names() {
    let progress = stage_progress(&Stage::ALL, Stage::Application);
    let labels: Vec<&str> = progress.iter().map(|p| p.label).collect();
    assert_eq!(
        labels,
        vec!["Application", "Pre-Flight", "LOI", "Underwriting", "Processing", "Closing"]
    );
}
