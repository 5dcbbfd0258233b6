//! Request configuration for the Azure OpenAI responder.

use secrecy::{ExposeSecret, SecretString};

use helpdesk_types::config::AssistantConfig;
use helpdesk_types::error::ConfigurationError;

/// Everything the responder needs for a request. Immutable after construction.
#[derive(Debug)]
pub struct RemoteRequestConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
    pub api_key: SecretString,
    /// Deployment name embedded in the request path. Checked at call time.
    pub deployment_name: String,
    pub api_version: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Number of most recent history turns sent with each request.
    pub context_window: usize,
}

impl RemoteRequestConfig {
    /// Extract and validate the remote settings from the assistant config.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let remote = &config.remote;
        let endpoint = remote
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(ConfigurationError::MissingEndpoint)?;
        let api_key = remote
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigurationError::MissingApiKey)?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: SecretString::from(api_key.to_string()),
            deployment_name: remote.deployment_name.clone().unwrap_or_default(),
            api_version: remote.api_version.clone(),
            temperature: remote.temperature,
            max_tokens: remote.max_tokens,
            context_window: config.context_window,
        })
    }

    /// Endpoint and API key are non-blank.
    pub fn check_credentials(&self) -> Result<(), ConfigurationError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigurationError::MissingEndpoint);
        }
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigurationError::MissingApiKey);
        }
        Ok(())
    }
}
