//! Tests for chat scripting and application-upload arming

use super::common::*;
use dealdesk_core::script::ScriptEngine;

#[test]
fn test_upload_application_arms_engine() {
    let mut engine = ScriptEngine::new();
    assert!(!engine.waiting_for_application_upload);

    let reply = engine.respond("I want to upload my application");
    assert!(engine.waiting_for_application_upload);
    assert!(reply.to_lowercase().contains("attach"));
}

#[test]
fn test_trigger_is_case_insensitive() {
    let mut engine = ScriptEngine::new();
    engine.respond("Please UPLOAD the APPLICATION for me");
    assert!(engine.waiting_for_application_upload);
}

#[test]
fn test_single_keyword_does_not_arm() {
    let mut engine = ScriptEngine::new();
    engine.respond("I want to upload something");
    assert!(!engine.waiting_for_application_upload);

    engine.respond("tell me about my application");
    assert!(!engine.waiting_for_application_upload);
}

#[test]
fn test_first_match_wins_over_later_rules() {
    // "upload my application documents" matches both the trigger rule and
    // the document rule; the trigger rule is first.
    let mut engine = ScriptEngine::new();
    let reply = engine.respond("upload my application documents");
    assert!(engine.waiting_for_application_upload);
    assert!(reply.to_lowercase().contains("attach"));
}

#[test]
fn test_canned_replies_and_fallback() {
    let mut engine = ScriptEngine::new();

    let rate = engine.respond("what is my rate?");
    let status = engine.respond("any status update?");
    let document = engine.respond("where do my documents go?");
    let fallback = engine.respond("hello there");

    assert!(rate.contains("rate"));
    assert!(status.contains("stage"));
    assert!(document.contains("Documents tab"));
    assert_eq!(
        fallback,
        "I'll help you with that. Let me check your application details."
    );

    // None of the canned replies arm the upload flow.
    assert!(!engine.waiting_for_application_upload);
}

#[test]
fn test_armed_engine_synthesizes_exactly_one_client() {
    let mut engine = ScriptEngine::new();
    engine.respond("I want to upload my application");

    let doc = sample_document("acme-application.pdf");
    let client = engine
        .application_uploaded(&doc)
        .expect("armed engine should open a deal");

    assert!(client.name.contains("acme-application"));
    assert_eq!(client.id, client.deal_id);
    assert!(!engine.waiting_for_application_upload);

    // A second upload does not create another record.
    assert!(engine.application_uploaded(&doc).is_none());
}

#[test]
fn test_unarmed_engine_ignores_uploads() {
    let mut engine = ScriptEngine::new();
    let doc = sample_document("statement.pdf");
    assert!(engine.application_uploaded(&doc).is_none());
}
