//! Azure OpenAI chat-completions wire types.
//!
//! These mirror the JSON the service expects and returns. They are NOT the
//! domain types from helpdesk-types.

use serde::{Deserialize, Serialize};

/// Request body for `POST .../chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionBody {
    pub messages: Vec<AzureMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A single message in the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AzureMessage {
    pub role: String,
    pub content: String,
}

/// Success body. Only the fields the responder reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionReply {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionReply {
    /// Content of the first choice, if present and non-blank.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
    }
}
