//! Conversation context for the assistant.
//!
//! `ConversationContext` is an append-only log of role-tagged turns. The log
//! itself is never pruned; only the window handed to the remote responder is
//! capped.

use helpdesk_types::chat::{ChatMessage, ConversationTurn};

/// Suffix of at most `n` entries, preserving order.
pub fn recent_window<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Ordered log of conversation turns for a single session.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    turns: Vec<ConversationTurn>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a context from a displayed transcript.
    pub fn from_messages(messages: &[ChatMessage]) -> Self {
        Self {
            turns: messages.iter().map(ConversationTurn::from).collect(),
        }
    }

    /// Append a turn at the most recent position.
    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// The last `n` turns in original order (fewer if the log is shorter).
    pub fn recent_window(&self, n: usize) -> &[ConversationTurn] {
        recent_window(&self.turns, n)
    }

    /// Full log, oldest first.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
