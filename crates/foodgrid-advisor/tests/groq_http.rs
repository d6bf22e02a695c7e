//! End-to-end tests: Advisor -> GroqClient -> HTTP, against a local mock server

use foodgrid::config::{ClientConfig, LlmConfig};
use foodgrid::llm::{GroqClient, LlmClient};
use foodgrid::{Advisor, FallbackReason, QueryContext, Topic, context_keys};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn advisor_for(server: &MockServer) -> Advisor {
    let client = GroqClient::from_config("gsk_e2e".to_string(), &LlmConfig::default())
        .with_base_url(server.base_url())
        .with_timeout(Duration::from_secs(5));
    Advisor::new(
        ClientConfig::from_key(Some("gsk_e2e".to_string())),
        Some(Arc::new(client) as Arc<dyn LlmClient>),
    )
}

#[tokio::test]
async fn test_live_answer_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("Authorization", "Bearer gsk_e2e")
                .body_includes("red sandy loam")
                .body_includes("What crops should I grow?");
            then.status(200).json_body(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "Groundnut and ragi suit red sandy loam."}},
                    {"message": {"role": "assistant", "content": "ignored second choice"}}
                ]
            }));
        })
        .await;

    let context = QueryContext::new().with(context_keys::SOIL_TYPE, "red sandy loam");
    let outcome = advisor_for(&server)
        .ask_detailed("What crops should I grow?", Some(&context))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(outcome.is_live());
    assert_eq!(
        outcome.response().response_text,
        "Groundnut and ragi suit red sandy loam."
    );
}

#[tokio::test]
async fn test_server_error_falls_back_after_one_attempt() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(503).body("upstream overloaded: shard groq-7");
        })
        .await;

    let outcome = advisor_for(&server)
        .ask_detailed("current market prices", None)
        .await
        .unwrap();

    assert_eq!(mock.calls_async().await, 1);
    assert_eq!(outcome.fallback_reason(), Some(FallbackReason::Transport));
    assert_eq!(outcome.topic(), Some(Topic::MarketInsight));
    assert!(!outcome.response().response_text.contains("groq-7"));
    assert!(!outcome.response().response_text.contains("503"));
}

#[tokio::test]
async fn test_no_choices_is_an_empty_completion() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let outcome = advisor_for(&server)
        .ask_detailed("How do I store my harvest properly?", None)
        .await
        .unwrap();

    assert_eq!(outcome.fallback_reason(), Some(FallbackReason::EmptyCompletion));
    assert_eq!(outcome.topic(), Some(Topic::StorageAdvice));
}

#[tokio::test]
async fn test_unready_advisor_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let client = GroqClient::new("gsk_unused".to_string()).with_base_url(server.base_url());
    let advisor = Advisor::new(
        ClientConfig::disabled(),
        Some(Arc::new(client) as Arc<dyn LlmClient>),
    );

    advisor.ask("What crops should I grow?", None).await.unwrap();

    assert_eq!(mock.calls_async().await, 0);
}
