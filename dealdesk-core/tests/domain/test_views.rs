//! Tests for stage -> view routing

use dealdesk_core::{default_view, views_for_stage, ConsoleView, Stage};

#[test]
fn test_application_maps_to_chat_only() {
    assert_eq!(views_for_stage(Stage::Application), &[ConsoleView::Chat]);
    assert_eq!(default_view(Stage::Application), Some(ConsoleView::Chat));
}

#[test]
fn test_pre_flight_views() {
    assert_eq!(
        views_for_stage(Stage::PreFlight),
        &[
            ConsoleView::Documents,
            ConsoleView::PreScreen,
            ConsoleView::Spreads,
            ConsoleView::Chat,
        ]
    );
    assert_eq!(default_view(Stage::PreFlight), Some(ConsoleView::Documents));
}

#[test]
fn test_loi_views() {
    assert_eq!(
        views_for_stage(Stage::Loi),
        &[
            ConsoleView::Documents,
            ConsoleView::Loi,
            ConsoleView::Spreads,
            ConsoleView::Chat,
        ]
    );
    assert_eq!(default_view(Stage::Loi), Some(ConsoleView::Documents));
}

#[test]
fn test_underwriting_views() {
    assert_eq!(
        views_for_stage(Stage::Underwriting),
        &[
            ConsoleView::Documents,
            ConsoleView::Spreads,
            ConsoleView::Memo,
            ConsoleView::Chat,
        ]
    );
    assert_eq!(default_view(Stage::Underwriting), Some(ConsoleView::Documents));
}

#[test]
fn test_unmapped_stages_yield_empty_list() {
    assert!(views_for_stage(Stage::Processing).is_empty());
    assert!(views_for_stage(Stage::Closing).is_empty());
    assert_eq!(default_view(Stage::Processing), None);
    assert_eq!(default_view(Stage::Closing), None);
}

#[test]
fn test_every_mapped_stage_offers_chat() {
    for stage in Stage::CONSOLE {
        assert!(
            views_for_stage(stage).contains(&ConsoleView::Chat),
            "{stage:?} should offer the chat view"
        );
    }
}
