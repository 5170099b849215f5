//! Session: one candidate's conversation: dialogue state plus the message log.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::intake::dialogue::DialogueState;
use crate::models::message::Message;

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    state: DialogueState,
    messages: Vec<Message>,
}

impl Session {
    /// Starts a new session under a fresh id. The welcome is the last message.
    pub fn start() -> Self {
        Self::start_with_id(Uuid::new_v4())
    }

    pub fn start_with_id(id: Uuid) -> Self {
        let mut session = Self {
            id,
            created_at: Utc::now(),
            state: DialogueState::new(),
            messages: Vec::new(),
        };
        session.begin();
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn state(&self) -> &DialogueState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Time of the latest message, or of the (re)start when the log is empty.
    pub fn last_active(&self) -> DateTime<Utc> {
        self.messages
            .last()
            .map(|m| m.timestamp)
            .unwrap_or(self.created_at)
    }

    /// Most recent assistant reply.
    pub fn last_reply(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.text.as_str())
            .unwrap_or_default()
    }

    /// Runs exactly one dialogue step and logs both sides of the exchange.
    pub fn submit(&mut self, text: &str) -> &str {
        self.messages.push(Message::user(text));
        let transition = std::mem::take(&mut self.state).step(text);
        self.state = transition.state;
        self.messages.push(Message::assistant(transition.reply));
        self.last_reply()
    }

    /// Discards the record, question progress and message log, returning the
    /// conversation to `Greeting`. The id is kept.
    pub fn reset(&mut self) {
        self.created_at = Utc::now();
        self.state = DialogueState::new();
        self.messages.clear();
    }

    /// Fires the greeting transition and returns the welcome.
    /// Past `Greeting` this is an ordinary step with empty input.
    pub fn begin(&mut self) -> &str {
        let transition = std::mem::take(&mut self.state).step("");
        self.state = transition.state;
        self.messages.push(Message::assistant(transition.reply));
        self.last_reply()
    }
}
