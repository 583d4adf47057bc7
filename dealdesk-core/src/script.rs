//! Keyword-scripted chat replies
//!
//! Not a parser or an intent model: an ordered list of substring rules over
//! the lowercased input, evaluated top to bottom, first match wins, with a
//! generic fallback. One rule has a side effect - asking to upload an
//! application arms the engine so the next successful upload opens a deal.

use crate::models::{Client, Document};

/// How a rule matches the (lowercased) input text
#[derive(Debug, Clone)]
enum Trigger {
    /// Every keyword must appear somewhere in the input.
    ContainsAll(&'static [&'static str]),
    /// The keyword appears somewhere in the input.
    Contains(&'static str),
}

impl Trigger {
    fn matches(&self, input: &str) -> bool {
        match self {
            Trigger::ContainsAll(keywords) => keywords.iter().all(|k| input.contains(k)),
            Trigger::Contains(keyword) => input.contains(keyword),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleAction {
    None,
    AwaitApplicationUpload,
}

#[derive(Debug, Clone)]
struct Rule {
    trigger: Trigger,
    reply: &'static str,
    action: RuleAction,
}

const FALLBACK_REPLY: &str = "I'll help you with that. Let me check your application details.";

const UPLOAD_PROMPT: &str =
    "Sure - attach the application document and I'll open a new deal for it.";

/// Scripted reply engine for the agent console chat
pub struct ScriptEngine {
    rules: Vec<Rule>,
    fallback: &'static str,
    /// Armed by the upload-application rule; the next successful upload
    /// synthesizes a client record.
    pub waiting_for_application_upload: bool,
}

impl ScriptEngine {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Rule {
                    trigger: Trigger::ContainsAll(&["upload", "application"]),
                    reply: UPLOAD_PROMPT,
                    action: RuleAction::AwaitApplicationUpload,
                },
                Rule {
                    trigger: Trigger::Contains("rate"),
                    reply: "Pricing is locked at application. I'll flag the desk to confirm \
                            your rate and follow up here.",
                    action: RuleAction::None,
                },
                Rule {
                    trigger: Trigger::Contains("status"),
                    reply: "The deal is moving through review now. You can follow each stage \
                            in the tracker at the bottom of this screen.",
                    action: RuleAction::None,
                },
                Rule {
                    trigger: Trigger::Contains("document"),
                    reply: "You can add files from the Documents tab and I'll route them to \
                            the right checklist.",
                    action: RuleAction::None,
                },
            ],
            fallback: FALLBACK_REPLY,
            waiting_for_application_upload: false,
        }
    }

    /// Produce the canned reply for one input line, applying the matched
    /// rule's side effect.
    pub fn respond(&mut self, input: &str) -> &'static str {
        let needle = input.to_lowercase();

        for rule in &self.rules {
            if rule.trigger.matches(&needle) {
                if rule.action == RuleAction::AwaitApplicationUpload {
                    self.waiting_for_application_upload = true;
                }
                return rule.reply;
            }
        }

        self.fallback
    }

    /// Feed a successful upload. If an application upload was requested,
    /// disarm and return the synthesized client record; otherwise `None`.
    pub fn application_uploaded(&mut self, doc: &Document) -> Option<Client> {
        if !self.waiting_for_application_upload {
            return None;
        }
        self.waiting_for_application_upload = false;
        Some(Client::from_application(doc))
    }
}

impl Default for ScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}
