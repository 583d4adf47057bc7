//! Tests for upload validation and the simulated transfer

use std::time::Duration;

use super::common::*;
use dealdesk_core::upload::{
    AcceptList, FixedOutcomes, UploadEvent, UploadOutcome, UploadSimulator, UploadWidget,
};
use dealdesk_core::{FileRef, UploadError, UploadStatus};

fn fixed_simulator(outcome: UploadOutcome) -> UploadSimulator {
    UploadSimulator::new(
        AcceptList::documents(),
        Duration::ZERO,
        Box::new(FixedOutcomes::new(outcome)),
    )
}

#[test]
fn test_accept_list_permits_listed_extension() {
    let accept = AcceptList::documents();
    assert!(accept.permits(&pdf_file("statement.pdf")).is_ok());
    assert!(accept.permits(&FileRef::new("scan.JPG", "image/jpeg", 10)).is_ok());
}

#[test]
fn test_accept_list_permits_by_mime_subtype() {
    // No usable extension, but the declared MIME subtype is listed.
    let accept = AcceptList::documents();
    let file = FileRef::new("statement", "application/pdf", 10);
    assert!(accept.permits(&file).is_ok());
}

#[test]
fn test_accept_list_rejects_unlisted_type() {
    let accept = AcceptList::documents();
    let err = accept.permits(&exe_file("malware.exe")).unwrap_err();
    assert_eq!(err, UploadError::UnsupportedType("exe".to_string()));
}

#[test]
fn test_memo_accept_list_rejects_images() {
    let accept = AcceptList::memos();
    assert!(accept.permits(&pdf_file("memo.pdf")).is_ok());
    assert!(accept
        .permits(&FileRef::new("scan.jpg", "image/jpeg", 10))
        .is_err());
}

#[test]
fn test_rejected_file_never_leaves_idle() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut sim = fixed_simulator(UploadOutcome::Delivered);
    let mut widget = UploadWidget::new();

    let result = widget.select(exe_file("malware.exe"), &mut sim, rt.handle());
    assert!(matches!(result, Err(UploadError::UnsupportedType(_))));
    assert_eq!(widget.status, UploadStatus::Idle);
    assert!(widget.file.is_none());
    assert!(widget.poll().is_none());
}

#[test]
fn test_accepted_file_reaches_success_exactly_once() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut sim = fixed_simulator(UploadOutcome::Delivered);
    let mut widget = UploadWidget::new();

    widget
        .select(pdf_file("statement.pdf"), &mut sim, rt.handle())
        .unwrap();
    assert_eq!(widget.status, UploadStatus::Uploading);

    let event = wait_for_event(&mut widget).expect("completion should arrive");
    assert_eq!(event, UploadEvent::Completed(pdf_file("statement.pdf")));
    assert_eq!(widget.status, UploadStatus::Success);

    // Terminal: no second event for the same submission.
    assert!(widget.poll().is_none());
}

#[test]
fn test_forced_failure_reports_error_without_completion() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut sim = fixed_simulator(UploadOutcome::Failed);
    let mut widget = UploadWidget::new();

    widget
        .select(pdf_file("statement.pdf"), &mut sim, rt.handle())
        .unwrap();

    let event = wait_for_event(&mut widget).expect("failure should arrive");
    assert_eq!(event, UploadEvent::Failed(pdf_file("statement.pdf")));
    assert_eq!(widget.status, UploadStatus::Error);
    assert!(widget.poll().is_none());
}

#[test]
fn test_second_select_while_file_held_is_rejected() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut sim = fixed_simulator(UploadOutcome::Delivered);
    let mut widget = UploadWidget::new();

    widget
        .select(pdf_file("first.pdf"), &mut sim, rt.handle())
        .unwrap();
    let err = widget
        .select(pdf_file("second.pdf"), &mut sim, rt.handle())
        .unwrap_err();
    assert_eq!(err, UploadError::AlreadySelected);
}

#[test]
fn test_clear_allows_retry_and_drops_late_completion() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut sim = UploadSimulator::new(
        AcceptList::documents(),
        Duration::from_millis(200),
        Box::new(FixedOutcomes::new(UploadOutcome::Delivered)),
    );
    let mut widget = UploadWidget::new();

    widget
        .select(pdf_file("slow.pdf"), &mut sim, rt.handle())
        .unwrap();
    widget.clear();
    assert_eq!(widget.status, UploadStatus::Idle);

    // The in-flight completion was dropped with the channel.
    std::thread::sleep(Duration::from_millis(300));
    assert!(widget.poll().is_none());
    assert_eq!(widget.status, UploadStatus::Idle);

    // Retry with a new file works.
    widget
        .select(pdf_file("retry.pdf"), &mut sim, rt.handle())
        .unwrap();
    let event = wait_for_event(&mut widget).expect("retry should complete");
    assert_eq!(event, UploadEvent::Completed(pdf_file("retry.pdf")));
}

#[test]
fn test_file_ref_extension_parsing() {
    assert_eq!(pdf_file("a.PDF").extension(), Some("pdf".to_string()));
    assert_eq!(FileRef::new("noext", "", 0).extension(), None);
    assert_eq!(FileRef::new(".hidden", "", 0).extension(), None);
    assert_eq!(FileRef::new("trailing.", "", 0).extension(), None);
}
