//! Floating chat widget session.
//!
//! DESIGN
//! ======
//! A session is an append-only, insertion-ordered message list plus the
//! panel open flag and the draft buffer. Identifiers come from a per-session
//! counter and are never reused. The session is created with the widget and
//! discarded with it; nothing is persisted.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::fmt;

pub const WELCOME_MESSAGE: &str = "Hi there! How can we help you today?";
pub const CANNED_REPLY: &str =
    "Thanks for your message! A member of our team will get back to you shortly.";

/// Sequential message identifier, unique within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Fields are private so the sender and text cannot
/// change after the message is appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    id: MessageId,
    text: String,
    sender: Sender,
    timestamp: String,
}

impl ChatMessage {
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Local `HH:MM` time the message was appended.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// State for one mounted chat widget.
#[derive(Clone, Debug)]
pub struct ChatSession {
    open: bool,
    draft: String,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    /// New closed session seeded with the bot welcome message.
    pub fn new(timestamp: String) -> Self {
        let mut session = Self { open: false, draft: String::new(), messages: Vec::new(), next_id: 1 };
        session.append(WELCOME_MESSAGE.to_owned(), Sender::Bot, timestamp);
        session
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Whether the current draft would be accepted by `submit_draft`.
    pub fn can_send(&self) -> bool {
        self.open && !self.draft.trim().is_empty()
    }

    /// Append the draft, as typed, as a user message and clear the buffer.
    ///
    /// Returns `None` (and changes nothing) when the panel is closed or the
    /// draft is empty after trimming. The caller owns scheduling the reply.
    pub fn submit_draft(&mut self, timestamp: String) -> Option<MessageId> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        Some(self.append(text, Sender::User, timestamp))
    }

    /// Append the scripted bot reply.
    pub fn push_bot_reply(&mut self, timestamp: String) -> MessageId {
        self.append(CANNED_REPLY.to_owned(), Sender::Bot, timestamp)
    }

    fn append(&mut self, text: String, sender: Sender, timestamp: String) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage { id, text, sender, timestamp });
        id
    }
}
