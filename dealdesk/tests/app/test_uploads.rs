//! Upload submission, completion and the dashboard to-do counter

use dealdesk::app::{NotificationLevel, UploadTarget, REQUIRED_DOCUMENTS};
use dealdesk_core::upload::UploadStatus;

use super::common::{app_with_rate, exe, pdf, poll_until, test_app};

#[test]
fn rejected_file_leaves_the_widget_idle() {
    let mut app = test_app();
    app.submit_upload(UploadTarget::ConsoleDocument, exe("malware.exe"));

    assert_eq!(app.console_upload.status, UploadStatus::Idle);
    assert!(app.console_upload.file.is_none());
    assert!(app.documents.is_empty());

    let active = app.notifications.get_active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].level, NotificationLevel::Error);
}

#[test]
fn successful_upload_lands_in_the_document_list() {
    let mut app = test_app();
    app.submit_upload(UploadTarget::ConsoleDocument, pdf("appraisal.pdf"));
    assert_eq!(app.console_upload.status, UploadStatus::Uploading);

    assert!(poll_until(&mut app, |a| a.documents.len() == 1));
    assert_eq!(app.console_upload.status, UploadStatus::Success);
    assert_eq!(app.documents[0].name, "appraisal.pdf");
}

#[test]
fn failed_transfer_reports_and_keeps_the_list_empty() {
    let mut app = app_with_rate(0.0);
    app.submit_upload(UploadTarget::ConsoleDocument, pdf("appraisal.pdf"));

    assert!(poll_until(&mut app, |a| {
        a.console_upload.status == UploadStatus::Error
    }));
    assert!(app.documents.is_empty());
}

#[test]
fn cleared_widget_ignores_the_late_completion() {
    let mut app = test_app();
    app.submit_upload(UploadTarget::ConsoleDocument, pdf("appraisal.pdf"));
    app.clear_upload(UploadTarget::ConsoleDocument);

    assert_eq!(app.console_upload.status, UploadStatus::Idle);

    // Drain a few ticks; the dropped channel means nothing arrives
    for _ in 0..20 {
        app.poll_background();
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert!(app.documents.is_empty());
    assert_eq!(app.console_upload.status, UploadStatus::Idle);
}

#[test]
fn memo_upload_sets_the_memo_document() {
    let mut app = test_app();
    app.submit_upload(UploadTarget::Memo, pdf("credit-memo.pdf"));

    assert!(poll_until(&mut app, |a| a.memo_document.is_some()));
    let memo = app.memo_document.as_ref().expect("memo document");
    assert_eq!(memo.name, "credit-memo.pdf");
    // Memos also show up in the shared document list
    assert_eq!(app.documents.len(), 1);
}

#[test]
fn memo_rejects_image_formats() {
    let mut app = test_app();
    let scan = dealdesk_core::FileRef::new("scan.jpg", "image/jpeg", 88_000);
    app.submit_upload(UploadTarget::Memo, scan);

    assert_eq!(app.memo_upload.status, UploadStatus::Idle);
    assert!(app.memo_document.is_none());
}

#[test]
fn three_dashboard_uploads_complete_the_task() {
    let mut app = test_app();

    let files = ["paystub.pdf", "passport.jpg", "bank-statement.pdf"];
    for (idx, name) in files.iter().enumerate() {
        app.submit_upload(UploadTarget::DashboardSlot(idx), pdf(name));
    }

    assert!(poll_until(&mut app, |a| {
        a.dashboard_uploaded.len() == REQUIRED_DOCUMENTS
    }));

    let task = app
        .tasks
        .iter()
        .find(|t| t.id == "upload-documents")
        .expect("upload task");
    assert!(task.completed);
    assert_eq!(task.count, Some(0));
}

#[test]
fn two_uploads_are_not_enough() {
    let mut app = test_app();
    app.submit_upload(UploadTarget::DashboardSlot(0), pdf("paystub.pdf"));
    app.submit_upload(UploadTarget::DashboardSlot(1), pdf("id-card.png"));

    assert!(poll_until(&mut app, |a| a.dashboard_uploaded.len() == 2));

    let task = app
        .tasks
        .iter()
        .find(|t| t.id == "upload-documents")
        .expect("upload task");
    assert!(!task.completed);
    assert_eq!(task.count, Some(3));
}

#[test]
fn extra_upload_does_not_count_toward_the_task() {
    let mut app = test_app();
    app.submit_upload(UploadTarget::DashboardExtra, pdf("supplement.pdf"));

    assert!(poll_until(&mut app, |a| {
        a.extra_upload.status == UploadStatus::Success
    }));
    assert!(app.dashboard_uploaded.is_empty());
}
