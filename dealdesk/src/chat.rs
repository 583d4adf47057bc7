//! Chat transcript state for the agent console
//!
//! The user message lands in the transcript immediately; the scripted reply
//! is computed up front and delivered over a channel after a simulated
//! latency, then picked up by the event loop via [`ChatState::poll_reply`].

use std::time::Duration;

use dealdesk_core::script::ScriptEngine;
use dealdesk_core::{ChatMessage, CHAT_GREETING};
use tokio::sync::mpsc;

/// Delay before the scripted agent reply shows up.
pub const REPLY_LATENCY: Duration = Duration::from_millis(1000);

const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

pub struct ChatState {
    /// Transcript, oldest first
    pub messages: Vec<ChatMessage>,
    /// Current input buffer
    pub input_buffer: String,
    /// True while a scripted reply is pending
    pub waiting_for_reply: bool,
    /// Channel the delayed reply arrives on
    reply_rx: Option<mpsc::UnboundedReceiver<String>>,
    /// Current spinner frame for the waiting indicator
    pub spinner_frame: usize,
    /// Scroll position for the transcript pane
    pub scroll: u16,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::agent(CHAT_GREETING)],
            input_buffer: String::new(),
            waiting_for_reply: false,
            reply_rx: None,
            spinner_frame: 0,
            scroll: 0,
        }
    }

    /// Reset the transcript to the greeting (the "New Chat" action).
    pub fn reset(&mut self) {
        self.messages = vec![ChatMessage::agent(CHAT_GREETING)];
        self.input_buffer.clear();
        self.waiting_for_reply = false;
        self.reply_rx = None;
        self.scroll = 0;
    }

    /// Send one input line. The scripted reply is resolved now (applying
    /// any rule side effects to `engine`) and delivered after `latency`.
    pub fn send_message(
        &mut self,
        input: String,
        engine: &mut ScriptEngine,
        latency: Duration,
        handle: &tokio::runtime::Handle,
    ) {
        if input.trim().is_empty() {
            return;
        }

        self.messages.push(ChatMessage::user(input.clone()));

        let reply = engine.respond(&input).to_string();
        let (tx, rx) = mpsc::unbounded_channel();
        self.reply_rx = Some(rx);
        self.waiting_for_reply = true;

        handle.spawn(async move {
            tokio::time::sleep(latency).await;
            let _ = tx.send(reply);
        });
    }

    /// Poll for the delayed reply (non-blocking). Appends it to the
    /// transcript when it lands.
    pub fn poll_reply(&mut self) {
        let Some(rx) = &mut self.reply_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(reply) => {
                self.waiting_for_reply = false;
                self.reply_rx = None;
                self.messages.push(ChatMessage::agent(reply));
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.waiting_for_reply = false;
                self.reply_rx = None;
            }
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn update_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.spinner_frame]
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
