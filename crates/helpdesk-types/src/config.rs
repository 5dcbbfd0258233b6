//! Assistant configuration types.
//!
//! `AssistantConfig` is the top-level `config.toml` for the assistant. It is
//! handed to the resolver at construction time; nothing in the core reads the
//! environment directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Default Azure OpenAI API version tag.
pub const DEFAULT_API_VERSION: &str = "2024-02-15-preview";

/// Default number of most recent turns sent to the remote model.
pub const DEFAULT_CONTEXT_WINDOW: usize = 6;

/// Top-level configuration for the assistant. All fields have defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Remote chat-completion settings.
    #[serde(default)]
    pub remote: RemoteSettings,

    /// Feature flag for the remote path. When false the rule matcher answers everything.
    #[serde(default = "default_use_remote")]
    pub use_remote: bool,

    /// How many recent turns are sent along with each remote request.
    #[serde(default = "default_context_window")]
    pub context_window: usize,
}

fn default_use_remote() -> bool {
    true
}

fn default_context_window() -> usize {
    DEFAULT_CONTEXT_WINDOW
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            remote: RemoteSettings::default(),
            use_remote: default_use_remote(),
            context_window: default_context_window(),
        }
    }
}

impl AssistantConfig {
    /// Whether the credentials required for the remote path are present.
    pub fn is_configured(&self) -> bool {
        self.remote.is_configured()
    }

    /// Check sampling parameters and the context window.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.context_window == 0 {
            return Err(ConfigurationError::InvalidContextWindow);
        }
        self.remote.validate()
    }
}

/// Connection and sampling settings for the Azure OpenAI deployment.
#[derive(Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub deployment_name: Option<String>,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    800
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            deployment_name: None,
            api_version: default_api_version(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

// The API key never appears in Debug output.
impl fmt::Debug for RemoteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("deployment_name", &self.deployment_name)
            .field("api_version", &self.api_version)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl RemoteSettings {
    /// Endpoint and API key are both present and non-blank.
    pub fn is_configured(&self) -> bool {
        present(&self.endpoint) && present(&self.api_key)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigurationError::InvalidTemperature(self.temperature));
        }
        if self.max_tokens == 0 {
            return Err(ConfigurationError::InvalidMaxTokens);
        }
        Ok(())
    }

    /// Copy with the API key masked, for display.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}
