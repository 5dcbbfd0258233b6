//! Remote responder implementations.
//!
//! Contains the Azure OpenAI implementation of the [`RemoteResponder`] trait
//! defined in `helpdesk-core`, plus a factory ([`create_responder`]) that
//! builds it from an [`AssistantConfig`].
//!
//! [`RemoteResponder`]: helpdesk_core::llm::responder::RemoteResponder

pub mod azure;

use helpdesk_core::llm::box_responder::BoxRemoteResponder;
use helpdesk_types::config::AssistantConfig;
use helpdesk_types::error::ConfigurationError;

use self::azure::AzureOpenAiResponder;
use self::azure::config::RemoteRequestConfig;

/// Create a [`BoxRemoteResponder`] from the assistant configuration.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] when the endpoint or API key is missing,
/// or when sampling parameters are out of range.
pub fn create_responder(config: &AssistantConfig) -> Result<BoxRemoteResponder, ConfigurationError> {
    let request_config = RemoteRequestConfig::from_config(config)?;
    let responder = AzureOpenAiResponder::new(request_config)?;
    Ok(BoxRemoteResponder::new(responder))
}
