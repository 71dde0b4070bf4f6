//! Chat transcript storage
//!
//! Append-only log of the messages exchanged in one advisor session.

use crate::models::{ChatMessage, MessageRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered message log. Messages are never edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            created_at: Utc::now(),
            updated_at: Utc::now(),
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a message, assigning the next sequence id and a timestamp
    pub fn append(&mut self, role: MessageRole, content: impl Into<String>) -> &ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            role,
            content: content.into(),
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.updated_at = message.created_at;
        self.messages.push(message);

        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Iterate over the `count` most recent messages, oldest first
    pub fn recent_messages(&self, count: usize) -> impl Iterator<Item = &ChatMessage> {
        let skip = self.messages.len().saturating_sub(count);
        self.messages.iter().skip(skip)
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
