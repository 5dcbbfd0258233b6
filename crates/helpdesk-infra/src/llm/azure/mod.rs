//! AzureOpenAiResponder -- concrete [`RemoteResponder`] for Azure OpenAI chat completions.
//!
//! Sends one request per call to
//! `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version={version}`
//! with the key in the `api-key` header. No retries.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

pub mod config;
pub mod types;

use secrecy::ExposeSecret;

use helpdesk_core::llm::prompt::{SYSTEM_PROMPT, build_messages};
use helpdesk_core::llm::responder::RemoteResponder;
use helpdesk_types::chat::ConversationTurn;
use helpdesk_types::error::{ConfigurationError, RemoteCallError};

use self::config::RemoteRequestConfig;
use self::types::{AzureMessage, ChatCompletionBody, ChatCompletionReply};

/// Azure OpenAI chat-completion responder.
pub struct AzureOpenAiResponder {
    client: reqwest::Client,
    config: RemoteRequestConfig,
}

impl AzureOpenAiResponder {
    /// Create a responder. Fails when the endpoint or API key is blank.
    pub fn new(config: RemoteRequestConfig) -> Result<Self, ConfigurationError> {
        config.check_credentials()?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ConfigurationError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Full chat-completions URL for the configured deployment.
    fn url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint, deployment, self.config.api_version
        )
    }

    /// Build the request body: system prompt, recent history window, then the user message.
    fn build_request(&self, user_text: &str, history: &[ConversationTurn]) -> ChatCompletionBody {
        let messages = build_messages(
            SYSTEM_PROMPT,
            history,
            self.config.context_window,
            user_text,
        )
        .into_iter()
        .map(|turn| AzureMessage {
            role: turn.role.to_string(),
            content: turn.content,
        })
        .collect();

        ChatCompletionBody {
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

// No Debug: the client and config hold the API key.

impl RemoteResponder for AzureOpenAiResponder {
    fn name(&self) -> &str {
        "azure_openai"
    }

    async fn respond(
        &self,
        user_text: &str,
        history: &[ConversationTurn],
    ) -> Result<String, RemoteCallError> {
        let deployment = self.config.deployment_name.trim();
        if deployment.is_empty() {
            return Err(RemoteCallError::InvalidRequest(
                "deployment name is not configured".to_string(),
            ));
        }

        let body = self.build_request(user_text, history);
        let url = self.url(deployment);
        tracing::debug!(
            deployment,
            messages = body.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .header("api-key", self.config.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteCallError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(RemoteCallError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let reply: ChatCompletionReply = response.json().await.map_err(|e| {
            RemoteCallError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        reply.first_content().ok_or(RemoteCallError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_types::config::AssistantConfig;

    fn make_responder(deployment: Option<&str>) -> AzureOpenAiResponder {
        let mut config = AssistantConfig::default();
        config.remote.endpoint = Some("https://example.openai.azure.com".to_string());
        config.remote.api_key = Some("test-key-not-real".to_string());
        config.remote.deployment_name = deployment.map(str::to_string);
        AzureOpenAiResponder::new(RemoteRequestConfig::from_config(&config).unwrap()).unwrap()
    }

    #[test]
    fn test_url_template() {
        let responder = make_responder(Some("gpt-4o"));
        assert_eq!(
            responder.url("gpt-4o"),
            "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-15-preview"
        );
    }

    #[test]
    fn test_request_window_and_sampling() {
        let responder = make_responder(Some("gpt-4o"));
        let history: Vec<ConversationTurn> = (0..10)
            .map(|i| ConversationTurn::assistant(format!("a{i}")))
            .collect();

        let body = responder.build_request("what next?", &history);

        assert_eq!(body.messages.len(), 8);
        assert_eq!(body.messages[0].role, "system");
        assert_eq!(body.messages[1].content, "a4");
        assert_eq!(body.messages[7].role, "user");
        assert_eq!(body.messages[7].content, "what next?");
        assert!((body.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(body.max_tokens, 800);
    }

    #[test]
    fn test_request_starts_with_builtin_system_prompt() {
        let responder = make_responder(Some("gpt-4o"));
        let body = responder.build_request("hi", &[]);
        assert_eq!(body.messages.len(), 2);
        assert_eq!(body.messages[0].content, SYSTEM_PROMPT);
    }

    #[test]
    fn test_construction_requires_credentials() {
        let config = RemoteRequestConfig {
            endpoint: String::new(),
            api_key: secrecy::SecretString::from("key".to_string()),
            deployment_name: "gpt-4o".to_string(),
            api_version: "2024-02-15-preview".to_string(),
            temperature: 0.7,
            max_tokens: 800,
            context_window: 6,
        };
        assert!(matches!(
            AzureOpenAiResponder::new(config),
            Err(ConfigurationError::MissingEndpoint)
        ));
    }

    #[tokio::test]
    async fn test_missing_deployment_fails_at_call_time() {
        let responder = make_responder(None);
        let err = responder.respond("hello", &[]).await.unwrap_err();
        assert!(matches!(err, RemoteCallError::InvalidRequest(_)));
    }
}
