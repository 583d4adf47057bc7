//! Stage, view and screen navigation

use dealdesk::app::{DashboardPanel, Screen};
use dealdesk_core::{ConsoleView, Stage};

use super::common::test_app;

#[test]
fn starts_on_console_with_underwriting_documents() {
    let app = test_app();
    assert_eq!(app.screen, Screen::Console);
    assert_eq!(app.current_stage, Stage::Underwriting);
    assert_eq!(app.current_view, Some(ConsoleView::Documents));
    assert_eq!(app.selected_client, app.clients.len() - 1);
}

#[test]
fn stage_change_always_resets_view() {
    let mut app = test_app();
    app.set_stage(Stage::Loi);
    app.next_view();
    assert_eq!(app.current_view, Some(ConsoleView::Loi));

    app.set_stage(Stage::Underwriting);
    assert_eq!(app.current_view, Some(ConsoleView::Documents));

    // Re-selecting the current stage also resets
    app.next_view();
    app.set_stage(Stage::Underwriting);
    assert_eq!(app.current_view, Some(ConsoleView::Documents));
}

#[test]
fn post_console_stages_have_no_views() {
    let mut app = test_app();
    app.set_stage(Stage::Processing);
    assert_eq!(app.current_view, None);

    app.next_view();
    assert_eq!(app.current_view, None);

    app.set_stage(Stage::Closing);
    assert_eq!(app.current_view, None);
}

#[test]
fn view_cycling_wraps_within_stage() {
    let mut app = test_app();
    app.set_stage(Stage::Application);
    assert_eq!(app.current_view, Some(ConsoleView::Chat));

    // Single-view stage cycles back onto itself
    app.next_view();
    assert_eq!(app.current_view, Some(ConsoleView::Chat));

    app.set_stage(Stage::Underwriting);
    for _ in 0..4 {
        app.next_view();
    }
    assert_eq!(app.current_view, Some(ConsoleView::Documents));

    app.previous_view();
    assert_eq!(app.current_view, Some(ConsoleView::Chat));
}

#[test]
fn stage_stepping_stops_at_the_ends() {
    let mut app = test_app();
    app.set_stage(Stage::Application);
    app.previous_stage();
    assert_eq!(app.current_stage, Stage::Application);

    app.set_stage(Stage::Closing);
    app.next_stage();
    assert_eq!(app.current_stage, Stage::Closing);
}

#[test]
fn toggle_screen_flips_between_dashboard_and_console() {
    let mut app = test_app();
    app.toggle_screen();
    assert_eq!(app.screen, Screen::Dashboard);
    app.toggle_screen();
    assert_eq!(app.screen, Screen::Console);
}

#[test]
fn dashboard_task_selection_is_bounded() {
    let mut app = test_app();
    app.toggle_screen();

    for _ in 0..10 {
        app.next();
    }
    assert_eq!(app.selected_task, app.tasks.len() - 1);

    for _ in 0..10 {
        app.previous();
    }
    assert_eq!(app.selected_task, 0);
}

#[test]
fn opening_a_task_routes_to_its_panel() {
    let mut app = test_app();
    app.toggle_screen();

    app.open_selected_task();
    assert_eq!(app.active_panel, Some(DashboardPanel::UploadDocuments));

    // With the upload panel open, up/down moves between slots
    app.next();
    assert_eq!(app.selected_slot, 1);

    app.close_panel();
    assert_eq!(app.active_panel, None);
}
