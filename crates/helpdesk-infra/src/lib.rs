//! Infrastructure layer for the Helpdesk assistant.
//!
//! Contains the Azure OpenAI implementation of the `RemoteResponder` port
//! defined in `helpdesk-core`, the TOML/environment configuration loader, and
//! factory functions that wire a configured resolver and session together.

pub mod config;
pub mod llm;

use helpdesk_core::intent::IntentMatcher;
use helpdesk_core::resolver::ResponseResolver;
use helpdesk_core::session::AssistantSession;
use helpdesk_types::config::AssistantConfig;

/// Build a resolver from configuration.
///
/// When the remote responder cannot be constructed the resolver keeps the
/// configuration error and answers from the rule table.
pub fn build_resolver(config: &AssistantConfig) -> ResponseResolver {
    let remote = llm::create_responder(config);
    if let Err(ref err) = remote {
        tracing::info!(reason = %err, "Remote responder disabled, rule-based answers only");
    }
    ResponseResolver::new(IntentMatcher::default(), remote)
}

/// Build a session whose remote path follows the config's feature flag and credentials.
pub fn build_session(config: &AssistantConfig) -> AssistantSession {
    AssistantSession::new(
        build_resolver(config),
        config.use_remote,
        config.is_configured(),
    )
    .with_context_window(config.context_window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_types::widget::WidgetEvent;

    #[test]
    fn test_unconfigured_resolver_has_no_remote() {
        let resolver = build_resolver(&AssistantConfig::default());
        assert!(!resolver.has_remote());
    }

    #[test]
    fn test_configured_resolver_has_remote() {
        let mut config = AssistantConfig::default();
        config.remote.endpoint = Some("https://example.openai.azure.com".to_string());
        config.remote.api_key = Some("key".to_string());
        config.remote.deployment_name = Some("gpt-4o".to_string());

        assert!(build_resolver(&config).has_remote());
    }

    #[tokio::test]
    async fn test_unconfigured_session_answers_from_rules() {
        let session = build_session(&AssistantConfig::default());
        session.apply(WidgetEvent::Open);

        let resolution = session.submit("what can this platform do").await.unwrap();
        assert!(resolution.is_fallback());
        assert!(resolution.text().contains("Business Logic Extractor"));
    }
}
