use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

pub mod replies;
pub mod responder;

pub use replies::{greeting, ReplyTopic};
pub use responder::{classify, select_reply};

/// One transcript entry, visitor or assistant side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message_id: Uuid,
    pub text: String,
    pub from_visitor: bool,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn assistant(text: impl Into<String>) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            text: text.into(),
            from_visitor: false,
            sent_at: Utc::now(),
        }
    }

    fn visitor(text: impl Into<String>) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            text: text.into(),
            from_visitor: true,
            sent_at: Utc::now(),
        }
    }
}

/// Lightweight facade that owns the visible chat transcript.
///
/// The session assigns message identifiers and timestamps and appends both
/// sides of each exchange; reply selection itself stays in [`responder`].
pub struct AssistantSession {
    transcript: Vec<ChatMessage>,
}

impl AssistantSession {
    /// Opens a session with the greeting already on the transcript.
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(replies::greeting())],
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Records a visitor message and the selected reply, returning the reply.
    /// Blank input is ignored, matching the send button being disabled.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.transcript.push(ChatMessage::visitor(text));
        let reply = ChatMessage::assistant(responder::select_reply(text));
        self.transcript.push(reply);
        self.transcript.last()
    }

    /// Cosmetic pause before a reply is rendered: one second plus up to two
    /// seconds of jitter, so the assistant appears to be typing.
    pub fn typing_delay(&self) -> Duration {
        let jitter_ms = rand::thread_rng().gen_range(0..2000u64);
        Duration::from_millis(1000 + jitter_ms)
    }

    /// Serializes the transcript for the rendering layer.
    pub fn export_transcript(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.transcript)
    }
}

impl Default for AssistantSession {
    fn default() -> Self {
        Self::new()
    }
}
