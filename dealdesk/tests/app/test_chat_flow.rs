//! Chat transcript flow and the application-upload arming

use dealdesk::app::UploadTarget;
use dealdesk_core::{Sender, CHAT_GREETING};

use super::common::{pdf, poll_until, test_app};

#[test]
fn transcript_opens_with_the_greeting() {
    let app = test_app();
    assert_eq!(app.chat.messages.len(), 1);
    assert_eq!(app.chat.messages[0].sender, Sender::Agent);
    assert_eq!(app.chat.messages[0].content, CHAT_GREETING);
}

#[test]
fn scripted_reply_lands_after_the_delay() {
    let mut app = test_app();
    app.chat.input_buffer = "what is my current rate?".to_string();
    app.send_chat_message();

    assert_eq!(app.chat.messages.len(), 2);
    assert!(app.chat.waiting_for_reply);

    assert!(poll_until(&mut app, |a| a.chat.messages.len() == 3));
    assert!(!app.chat.waiting_for_reply);
    assert_eq!(app.chat.messages[2].sender, Sender::Agent);
    assert!(app.chat.messages[2].content.contains("rate"));
}

#[test]
fn blank_input_sends_nothing() {
    let mut app = test_app();
    app.chat.input_buffer = "   ".to_string();
    app.send_chat_message();
    assert_eq!(app.chat.messages.len(), 1);
    assert!(!app.chat.waiting_for_reply);
}

#[test]
fn upload_request_arms_the_engine() {
    let mut app = test_app();
    app.chat.input_buffer = "can I upload a new application?".to_string();
    app.send_chat_message();
    assert!(app.script.waiting_for_application_upload);
}

#[test]
fn armed_upload_opens_exactly_one_deal() {
    let mut app = test_app();
    app.chat.input_buffer = "please upload the application for me".to_string();
    app.send_chat_message();
    assert!(app.script.waiting_for_application_upload);

    let before = app.clients.len();
    app.submit_upload(UploadTarget::ConsoleDocument, pdf("loan-application.pdf"));
    assert!(poll_until(&mut app, |a| a.clients.len() == before + 1));

    // The new deal is selected and the engine is disarmed
    assert_eq!(app.selected_client, app.clients.len() - 1);
    assert!(!app.script.waiting_for_application_upload);
    assert!(app.clients[app.selected_client]
        .name
        .contains("loan-application"));
    assert_eq!(app.documents.len(), 1);

    // A second upload is an ordinary document, not another deal
    app.clear_upload(UploadTarget::ConsoleDocument);
    app.submit_upload(UploadTarget::ConsoleDocument, pdf("tax-return.pdf"));
    assert!(poll_until(&mut app, |a| a.documents.len() == 2));
    assert_eq!(app.clients.len(), before + 1);
}

#[test]
fn unarmed_upload_does_not_open_a_deal() {
    let mut app = test_app();
    let before = app.clients.len();

    app.submit_upload(UploadTarget::ConsoleDocument, pdf("rent-roll.pdf"));
    assert!(poll_until(&mut app, |a| a.documents.len() == 1));
    assert_eq!(app.clients.len(), before);
}

#[test]
fn new_chat_resets_the_transcript() {
    let mut app = test_app();
    app.chat.input_buffer = "what is the status?".to_string();
    app.send_chat_message();
    assert!(poll_until(&mut app, |a| a.chat.messages.len() == 3));

    app.new_chat();
    assert_eq!(app.chat.messages.len(), 1);
    assert_eq!(app.chat.messages[0].content, CHAT_GREETING);
    assert!(!app.chat.waiting_for_reply);
}

#[test]
fn sending_updates_the_sidebar_preview() {
    let mut app = test_app();
    app.chat.input_buffer = "checking in on the file".to_string();
    app.send_chat_message();

    let client = &app.clients[app.selected_client];
    let preview = client.recent_chat.as_ref().expect("preview set");
    assert_eq!(preview.preview, "checking in on the file");
}
