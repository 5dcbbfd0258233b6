//! HTTP-level tests for the Azure OpenAI responder against an in-process axum server.

use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use helpdesk_core::intent::IntentMatcher;
use helpdesk_core::llm::responder::RemoteResponder;
use helpdesk_core::resolver::{Resolution, ResponseResolver};
use helpdesk_infra::llm::azure::AzureOpenAiResponder;
use helpdesk_infra::llm::azure::config::RemoteRequestConfig;
use helpdesk_infra::llm::create_responder;
use helpdesk_types::chat::ConversationTurn;
use helpdesk_types::config::AssistantConfig;
use helpdesk_types::error::RemoteCallError;

const ROUTE: &str = "/openai/deployments/{deployment}/chat/completions";

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local test server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn config_for(endpoint: &str) -> AssistantConfig {
    let mut config = AssistantConfig::default();
    config.remote.endpoint = Some(endpoint.to_string());
    config.remote.api_key = Some("secret-test-key".to_string());
    config.remote.deployment_name = Some("helpdesk-gpt".to_string());
    config
}

fn responder_for(endpoint: &str) -> AzureOpenAiResponder {
    let request_config =
        RemoteRequestConfig::from_config(&config_for(endpoint)).expect("valid config");
    AzureOpenAiResponder::new(request_config).expect("responder")
}

/// Replies with a completion whose content is a JSON dump of what the server saw.
async fn echo_request(
    Path(deployment): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let seen = json!({
        "deployment": deployment,
        "api_version": query.get("api-version"),
        "api_key": headers.get("api-key").and_then(|v| v.to_str().ok()),
        "body": body,
    });
    Json(json!({
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": seen.to_string() } }]
    }))
}

#[tokio::test]
async fn sends_expected_request_and_returns_content() {
    let base = spawn_server(Router::new().route(ROUTE, post(echo_request))).await;
    let responder = responder_for(&base);

    let history: Vec<ConversationTurn> = (0..9)
        .map(|i| {
            if i % 2 == 0 {
                ConversationTurn::user(format!("q{i}"))
            } else {
                ConversationTurn::assistant(format!("a{i}"))
            }
        })
        .collect();

    let content = responder
        .respond("How do I upload files?", &history)
        .await
        .expect("successful completion");
    let seen: Value = serde_json::from_str(&content).expect("echoed json");

    assert_eq!(seen["deployment"], "helpdesk-gpt");
    assert_eq!(seen["api_version"], "2024-02-15-preview");
    assert_eq!(seen["api_key"], "secret-test-key");

    let body = &seen["body"];
    assert_eq!(body["max_tokens"], 800);
    let temperature = body["temperature"].as_f64().expect("temperature");
    assert!((temperature - 0.7).abs() < 1e-6);

    let messages = body["messages"].as_array().expect("messages");
    assert_eq!(messages.len(), 8);
    assert_eq!(messages[0]["role"], "system");
    // Last six history turns: q3..q8.
    assert_eq!(messages[1]["role"], "assistant");
    assert_eq!(messages[1]["content"], "a3");
    assert_eq!(messages[6]["content"], "q8");
    assert_eq!(messages[7]["role"], "user");
    assert_eq!(messages[7]["content"], "How do I upload files?");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let router = Router::new().route(
        ROUTE,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "deployment overloaded") }),
    );
    let base = spawn_server(router).await;

    let err = responder_for(&base).respond("hi", &[]).await.unwrap_err();
    match err {
        RemoteCallError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "deployment overloaded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_is_empty_content() {
    let router = Router::new().route(
        ROUTE,
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let base = spawn_server(router).await;

    let err = responder_for(&base).respond("hi", &[]).await.unwrap_err();
    assert!(matches!(err, RemoteCallError::EmptyContent));
}

#[tokio::test]
async fn malformed_body_is_deserialization_error() {
    let router = Router::new().route(
        ROUTE,
        post(|| async { ([("content-type", "application/json")], "{not json").into_response() }),
    );
    let base = spawn_server(router).await;

    let err = responder_for(&base).respond("hi", &[]).await.unwrap_err();
    assert!(matches!(err, RemoteCallError::Deserialization(_)));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let err = responder_for("http://127.0.0.1:1")
        .respond("hi", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteCallError::Transport(_)));
}

#[tokio::test]
async fn resolver_falls_back_when_remote_fails() {
    let router = Router::new().route(
        ROUTE,
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = spawn_server(router).await;
    let remote = create_responder(&config_for(&base)).expect("responder");
    let resolver = ResponseResolver::with_remote(IntentMatcher::default(), remote);

    let resolution = resolver
        .resolve_tagged("How do I convert COBOL to Python?", &[], true, true)
        .await;

    assert!(resolution.is_fallback());
    assert!(resolution.text().contains("Upload your .cob or .cbl files"));
}

#[tokio::test]
async fn resolver_returns_remote_answer_verbatim() {
    let router = Router::new().route(
        ROUTE,
        post(|| async {
            Json(json!({ "choices": [{ "message": { "content": "  **Hi** there  " } }] }))
        }),
    );
    let base = spawn_server(router).await;
    let remote = create_responder(&config_for(&base)).expect("responder");
    let resolver = ResponseResolver::with_remote(IntentMatcher::default(), remote);

    let resolution = resolver.resolve_tagged("hello", &[], true, true).await;
    assert_eq!(resolution, Resolution::Remote("  **Hi** there  ".to_string()));
}
