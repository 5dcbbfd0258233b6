//! Response resolution with automatic fallback.
//!
//! Tries the remote responder when the feature flag and credentials allow it.
//! Any remote failure (missing configuration, transport error, non-2xx
//! status, malformed or empty reply) is logged and answered by the
//! [`IntentMatcher`] instead. Callers always get an answer back.

use helpdesk_types::chat::ConversationTurn;
use helpdesk_types::error::{ConfigurationError, RemoteCallError};

use crate::intent::IntentMatcher;
use crate::llm::box_responder::BoxRemoteResponder;

/// Where an answer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Remote(String),
    Fallback(String),
}

impl Resolution {
    pub fn text(&self) -> &str {
        match self {
            Resolution::Remote(text) | Resolution::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Resolution::Remote(text) | Resolution::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// Decides between the remote responder and the rule matcher for each query.
pub struct ResponseResolver {
    matcher: IntentMatcher,
    /// The responder, or the reason it could not be built.
    remote: Result<BoxRemoteResponder, ConfigurationError>,
}

impl ResponseResolver {
    pub fn new(
        matcher: IntentMatcher,
        remote: Result<BoxRemoteResponder, ConfigurationError>,
    ) -> Self {
        Self { matcher, remote }
    }

    /// Resolver backed by a working remote responder.
    pub fn with_remote(matcher: IntentMatcher, responder: BoxRemoteResponder) -> Self {
        Self::new(matcher, Ok(responder))
    }

    /// Resolver that only ever answers from the rule table.
    pub fn rule_based(matcher: IntentMatcher) -> Self {
        Self::new(matcher, Err(ConfigurationError::MissingEndpoint))
    }

    pub fn matcher(&self) -> &IntentMatcher {
        &self.matcher
    }

    /// Whether a remote responder was constructed successfully.
    pub fn has_remote(&self) -> bool {
        self.remote.is_ok()
    }

    /// Resolve `user_text`, reporting which path produced the answer.
    pub async fn resolve_tagged(
        &self,
        user_text: &str,
        history: &[ConversationTurn],
        use_remote: bool,
        is_configured: bool,
    ) -> Resolution {
        if !(use_remote && is_configured) {
            tracing::debug!(use_remote, is_configured, "Remote path disabled, using rule matcher");
            return self.fallback(user_text);
        }

        let responder = match &self.remote {
            Ok(responder) => responder,
            Err(err) => {
                tracing::warn!(error = %err, "Remote responder unavailable, using rule matcher");
                return self.fallback(user_text);
            }
        };

        let result = match responder.respond(user_text, history).await {
            Ok(text) if text.trim().is_empty() => Err(RemoteCallError::EmptyContent),
            other => other,
        };

        match result {
            Ok(text) => {
                tracing::debug!(responder = responder.name(), "Answered by remote responder");
                Resolution::Remote(text)
            }
            Err(err) => {
                tracing::warn!(
                    responder = responder.name(),
                    status = ?err.status(),
                    error = %err,
                    "Remote call failed, falling back to rule matcher"
                );
                self.fallback(user_text)
            }
        }
    }

    /// Resolve `user_text` to an answer. Never fails.
    pub async fn resolve(
        &self,
        user_text: &str,
        history: &[ConversationTurn],
        use_remote: bool,
        is_configured: bool,
    ) -> String {
        self.resolve_tagged(user_text, history, use_remote, is_configured)
            .await
            .into_text()
    }

    fn fallback(&self, user_text: &str) -> Resolution {
        Resolution::Fallback(self.matcher.classify(user_text).to_string())
    }
}
