//! RemoteResponder trait definition.
//!
//! The single port between the resolver and a remote chat-completion service.
//! Implementations live in helpdesk-infra (e.g., `AzureOpenAiResponder`).

use helpdesk_types::chat::ConversationTurn;
use helpdesk_types::error::RemoteCallError;

/// A backend that answers a user message given prior conversation turns.
///
/// Implementations make at most one remote attempt per call and do not
/// retry. Selecting the recent-turn window out of `history` is up to the
/// implementation.
pub trait RemoteResponder: Send + Sync {
    /// Short backend name used in logs (e.g., "azure_openai").
    fn name(&self) -> &str;

    /// Produce an answer for `user_text`.
    fn respond(
        &self,
        user_text: &str,
        history: &[ConversationTurn],
    ) -> impl std::future::Future<Output = Result<String, RemoteCallError>> + Send;
}
