//! Chat widget state: history, input buffer, visibility, in-flight flag.
//!
//! DESIGN
//! ======
//! A send is split in two so the user's message lands before any network
//! work: [`ChatState::begin_send`] appends it synchronously and hands back
//! the text to ask about; [`ChatState::finish_send`] appends exactly one bot
//! reply (or the fallback) and always clears `loading`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::assistant::AssistantBackend;
use crate::net::types::ClientError;

/// Bot reply used whenever the assistant call fails.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process your request. Please try again later.";

/// Bot notice posted after a successful upload.
pub const UPLOAD_NOTICE: &str = "I see you've uploaded some files. The analysis will be completed shortly.";

pub const WELCOME_TEXT: &str = "Welcome to X-RAI! Ask me anything about bone fractures and X-ray analysis.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// State for the floating chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub open: bool,
    pub loading: bool,
    pub backend: AssistantBackend,
}

impl ChatState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Start sending the input buffer.
    ///
    /// Whitespace-only input and sends while a reply is pending are dropped
    /// without touching state. Otherwise the trimmed text is appended as a
    /// user message, the buffer is cleared, `loading` is set, and the text
    /// is returned for the assistant call.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();
        self.messages.push(ChatMessage { sender: Sender::User, text: text.clone() });
        self.input.clear();
        self.loading = true;
        Some(text)
    }

    /// Settle the pending send with the assistant outcome.
    pub fn finish_send(&mut self, outcome: Result<String, ClientError>) {
        let text = outcome.unwrap_or_else(|_| FALLBACK_REPLY.to_owned());
        self.push_bot(text);
        self.loading = false;
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage { sender: Sender::Bot, text: text.into() });
    }

    /// Open the widget and post the upload notice.
    pub fn announce_upload(&mut self) {
        self.open();
        self.push_bot(UPLOAD_NOTICE);
    }
}
