//! Displayed transcript for a chat session.
//!
//! The transcript holds [`ChatMessage`]s as shown on screen. The assistant
//! core keeps its own role-tagged context; this list is presentation state.

use chrono::Local;
use console::style;

use helpdesk_types::chat::{ChatMessage, ChatRole};

#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Print every message with its time and a one-line preview.
    pub fn print(&self) {
        println!();
        if self.messages.is_empty() {
            println!("  {}", style("No messages yet.").dim());
            println!();
            return;
        }
        for message in &self.messages {
            let label = match message.role {
                ChatRole::User => style("You").green().bold(),
                ChatRole::Assistant => style("Assistant").cyan().bold(),
            };
            let time = message.created_at.with_timezone(&Local).format("%H:%M");
            println!(
                "  {} {} {}",
                style(time).dim(),
                label,
                preview(&message.content, 100)
            );
        }
        println!();
    }
}

/// First line of `content`, cut to `max_chars` characters.
fn preview(content: &str, max_chars: usize) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    let plain = helpdesk_core::markup::to_plain_text(first_line);
    if plain.chars().count() > max_chars {
        let cut: String = plain.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    } else if content.lines().nth(1).is_some() {
        format!("{plain} ...")
    } else {
        plain
    }
}
