//! Configuration loader for the Helpdesk assistant.
//!
//! Reads `config.toml` (`~/.helpdesk/config.toml` by default) into
//! [`AssistantConfig`], then layers the `AZURE_OPENAI_*` environment
//! variables on top. Falls back to defaults when the file is missing or
//! malformed.

use std::path::{Path, PathBuf};

use helpdesk_types::config::AssistantConfig;

pub const ENV_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const ENV_API_KEY: &str = "AZURE_OPENAI_API_KEY";
pub const ENV_DEPLOYMENT_NAME: &str = "AZURE_OPENAI_DEPLOYMENT_NAME";
pub const ENV_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";

/// Default config location: `~/.helpdesk/config.toml`.
///
/// Falls back to `./.helpdesk/config.toml` when no home directory is known.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".helpdesk")
        .join("config.toml")
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`AssistantConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_config(path: &Path) -> AssistantConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return AssistantConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AssistantConfig::default();
        }
    };

    match toml::from_str::<AssistantConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AssistantConfig::default()
        }
    }
}

/// Overlay non-blank environment values onto `config`. Environment wins over the file.
pub fn apply_env_overrides<F>(mut config: AssistantConfig, lookup: F) -> AssistantConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(endpoint) = get(ENV_ENDPOINT) {
        config.remote.endpoint = Some(endpoint);
    }
    if let Some(api_key) = get(ENV_API_KEY) {
        config.remote.api_key = Some(api_key);
    }
    if let Some(deployment) = get(ENV_DEPLOYMENT_NAME) {
        config.remote.deployment_name = Some(deployment);
    }
    if let Some(version) = get(ENV_API_VERSION) {
        config.remote.api_version = version;
    }
    config
}

/// [`apply_env_overrides`] against the process environment.
pub fn apply_process_env(config: AssistantConfig) -> AssistantConfig {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Load `path` and apply the process environment.
pub async fn load_effective_config(path: &Path) -> AssistantConfig {
    let config = apply_process_env(load_config(path).await);
    tracing::debug!(
        configured = config.is_configured(),
        use_remote = config.use_remote,
        "Loaded assistant configuration"
    );
    config
}
