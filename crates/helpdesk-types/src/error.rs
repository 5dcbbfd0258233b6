use thiserror::Error;

/// Errors raised while constructing a remote responder or validating config.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("remote endpoint is not configured")]
    MissingEndpoint,

    #[error("remote API key is not configured")]
    MissingApiKey,

    #[error("temperature must be within [0, 2], got {0}")]
    InvalidTemperature(f32),

    #[error("max_tokens must be positive")]
    InvalidMaxTokens,

    #[error("context window must hold at least one turn")]
    InvalidContextWindow,

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Errors from a single remote chat-completion call.
///
/// Always recovered by the response resolver; never shown to the end user.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("remote returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("empty content")]
    EmptyContent,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl RemoteCallError {
    /// HTTP status carried by the error, if the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteCallError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Reasons an assistant session refuses a user submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("the assistant window is not open")]
    Closed,

    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("a response is already being prepared")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = RemoteCallError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "remote returned HTTP 503: overloaded");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_empty_content_display() {
        assert_eq!(RemoteCallError::EmptyContent.to_string(), "empty content");
        assert_eq!(RemoteCallError::EmptyContent.status(), None);
    }

    #[test]
    fn test_configuration_error_display() {
        assert_eq!(
            ConfigurationError::MissingApiKey.to_string(),
            "remote API key is not configured"
        );
        assert_eq!(
            ConfigurationError::InvalidTemperature(2.5).to_string(),
            "temperature must be within [0, 2], got 2.5"
        );
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(
            SubmitError::Busy.to_string(),
            "a response is already being prepared"
        );
    }
}
