// crates/foodgrid-advisor/src/advisory/orchestrator.rs
// Advisory entry point: live model when configured, offline generator otherwise

use super::classifier::Topic;
use super::fallback::{FallbackGenerator, FallbackReason};
use super::suggestions;
use crate::config::{ApiKeys, ClientConfig, FoodGridConfig};
use crate::error::{AdvisorError, Result};
use crate::llm::{GroqClient, LlmClient, PromptBuilder};
use foodgrid_types::{AdvisoryRequest, AdvisoryResponse, QueryContext};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Confidence for a live answer that does not report its own
pub const LIVE_CONFIDENCE: f64 = 0.9;

/// What actually produced an answer. The UI only sees the inner response.
#[derive(Debug, Clone)]
pub enum AdvisoryOutcome {
    Live {
        response: AdvisoryResponse,
        request_id: String,
        model: String,
    },
    Fallback {
        response: AdvisoryResponse,
        topic: Topic,
        reason: FallbackReason,
    },
}

impl AdvisoryOutcome {
    pub fn response(&self) -> &AdvisoryResponse {
        match self {
            Self::Live { response, .. } | Self::Fallback { response, .. } => response,
        }
    }

    pub fn into_response(self) -> AdvisoryResponse {
        match self {
            Self::Live { response, .. } | Self::Fallback { response, .. } => response,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live { .. })
    }

    /// Topic used by the offline generator (None for live answers)
    pub fn topic(&self) -> Option<Topic> {
        match self {
            Self::Live { .. } => None,
            Self::Fallback { topic, .. } => Some(*topic),
        }
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Self::Live { .. } => None,
            Self::Fallback { reason, .. } => Some(*reason),
        }
    }
}

/// Completion text in the structured form the model may return:
/// `{"response": "...", "suggestions": ["..."], "confidence": 0.8}`
#[derive(Debug, Deserialize)]
struct StructuredCompletion {
    response: String,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    confidence: Option<f64>,
}

impl StructuredCompletion {
    /// Recognize the structured form, optionally wrapped in a ```json fence
    fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .and_then(|rest| rest.trim_end().strip_suffix("```"))
            .unwrap_or(trimmed)
            .trim();

        if !body.starts_with('{') {
            return None;
        }

        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|c| !c.response.trim().is_empty())
    }
}

/// The advisory service. Construct once at the composition root and share it
/// (it is `Send + Sync`; concurrent `ask` calls are independent).
pub struct Advisor {
    client: Option<Arc<dyn LlmClient>>,
    config: ClientConfig,
}

impl Advisor {
    /// A client is only ever called when `config` is ready
    pub fn new(config: ClientConfig, client: Option<Arc<dyn LlmClient>>) -> Self {
        if config.is_ready() && client.is_none() {
            warn!("Client configuration is ready but no LLM client was supplied - using fallback");
        }
        Self { client, config }
    }

    /// Fallback-only advisor
    pub fn offline() -> Self {
        Self::new(ClientConfig::disabled(), None)
    }

    /// Build from the environment credential and the optional config file
    pub fn from_env(file_config: &FoodGridConfig) -> Self {
        let config = ClientConfig::from_api_keys(&ApiKeys::from_env());
        let client = config.api_key().map(|key| {
            let groq = GroqClient::from_config(key.to_string(), &file_config.llm);
            info!(model = %groq.model_name(), "Groq client initialized");
            Arc::new(groq) as Arc<dyn LlmClient>
        });
        Self::new(config, client)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// True when a live model call will be attempted
    pub fn is_live(&self) -> bool {
        self.live_client().is_some()
    }

    fn live_client(&self) -> Option<&Arc<dyn LlmClient>> {
        self.client.as_ref().filter(|_| self.config.is_ready())
    }

    /// Answer a free-text question. Fails only on an empty or whitespace-only query.
    pub async fn ask(&self, query: &str, context: Option<&QueryContext>) -> Result<AdvisoryResponse> {
        self.ask_detailed(query, context)
            .await
            .map(AdvisoryOutcome::into_response)
    }

    /// [`Advisor::ask`] for a wire-level request
    pub async fn ask_request(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse> {
        self.ask(&request.query, request.context.as_ref()).await
    }

    /// Like [`Advisor::ask`], but reports whether the live model or the fallback answered
    pub async fn ask_detailed(
        &self,
        query: &str,
        context: Option<&QueryContext>,
    ) -> Result<AdvisoryOutcome> {
        self.answer(query, context, None).await
    }

    /// Shared path for free-text and topic-specific questions. `topic` pins the
    /// fallback template instead of classifying the query.
    pub(crate) async fn answer(
        &self,
        query: &str,
        context: Option<&QueryContext>,
        topic: Option<Topic>,
    ) -> Result<AdvisoryOutcome> {
        if query.trim().is_empty() {
            return Err(AdvisorError::InvalidInput(
                "query must not be empty".to_string(),
            ));
        }

        let Some(client) = self.live_client() else {
            return Ok(self.fallback(query, context, topic, FallbackReason::NotConfigured));
        };

        let messages = PromptBuilder::new(context).build_messages(query);

        match client.chat(messages).await {
            Ok(result) => match result.text() {
                Some(text) => Ok(Self::live_outcome(
                    text,
                    query,
                    result.request_id.clone(),
                    client.model_name(),
                )),
                None => {
                    warn!(request_id = %result.request_id, "Empty completion, using fallback");
                    Ok(self.fallback(query, context, topic, FallbackReason::EmptyCompletion))
                }
            },
            Err(e) => {
                warn!(error = %e, "Live advisory failed, using fallback");
                Ok(self.fallback(query, context, topic, FallbackReason::Transport))
            }
        }
    }

    fn live_outcome(text: &str, query: &str, request_id: String, model: String) -> AdvisoryOutcome {
        let response = match StructuredCompletion::parse(text) {
            Some(structured) => {
                let suggestions = if structured.suggestions.iter().any(|s| !s.trim().is_empty()) {
                    structured.suggestions
                } else {
                    suggestions::generate(query)
                };
                let confidence = structured.confidence.unwrap_or(LIVE_CONFIDENCE);
                debug!(request_id = %request_id, "Completion used structured response schema");
                AdvisoryResponse::new(structured.response.trim(), confidence, suggestions)
            }
            None => AdvisoryResponse::new(text, LIVE_CONFIDENCE, suggestions::generate(query)),
        };

        AdvisoryOutcome::Live {
            response,
            request_id,
            model,
        }
    }

    fn fallback(
        &self,
        query: &str,
        context: Option<&QueryContext>,
        topic: Option<Topic>,
        reason: FallbackReason,
    ) -> AdvisoryOutcome {
        let empty = QueryContext::new();
        let context = context.unwrap_or(&empty);

        let answer = match topic {
            Some(topic) => FallbackGenerator::respond_for_topic(topic, query, context, reason),
            None => FallbackGenerator::respond(query, context, reason),
        };

        info!(topic = %answer.topic, reason = %reason, "Answered from offline generator");

        AdvisoryOutcome::Fallback {
            response: answer.response,
            topic: answer.topic,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::fallback::MATCHED_CONFIDENCE;
    use crate::llm::{ChatResult, Message};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted client that counts calls
    struct ScriptedClient {
        reply: std::result::Result<Option<String>, String>,
        calls: AtomicUsize,
    }

    impl ScriptedClient {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(Some(text.to_string())),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(msg: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(msg.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmClient for ScriptedClient {
        async fn chat(&self, _messages: Vec<Message>) -> anyhow::Result<ChatResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(content) => Ok(ChatResult {
                    request_id: "req-test".into(),
                    content: content.clone(),
                    usage: None,
                    duration_ms: 1,
                }),
                Err(msg) => Err(anyhow::anyhow!("{}", msg)),
            }
        }

        fn model_name(&self) -> String {
            "scripted".into()
        }
    }

    fn live(client: Arc<ScriptedClient>) -> Advisor {
        Advisor::new(
            ClientConfig::from_key(Some("gsk_test".into())),
            Some(client as Arc<dyn LlmClient>),
        )
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let advisor = Advisor::offline();
        let err = advisor.ask("", None).await.unwrap_err();
        assert!(err.is_invalid_input());
        let err = advisor.ask(" \t\n", None).await.unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_live_success_attaches_suggestions() {
        let client = ScriptedClient::replying("Grow ragi and groundnut.");
        let advisor = live(client.clone());

        let outcome = advisor.ask_detailed("what to grow", None).await.unwrap();

        assert!(outcome.is_live());
        assert_eq!(client.calls(), 1);
        let response = outcome.response();
        assert_eq!(response.response_text, "Grow ragi and groundnut.");
        assert_eq!(response.confidence, LIVE_CONFIDENCE);
        assert_eq!(response.suggestions, suggestions::generate("what to grow"));
    }

    #[tokio::test]
    async fn test_structured_completion_keeps_model_suggestions() {
        let client = ScriptedClient::replying(
            "```json\n{\"response\": \"Sow in June.\", \"suggestions\": [\"Which seed variety?\", \"\"], \"confidence\": 1.0}\n```",
        );
        let advisor = live(client);

        let response = advisor.ask("when to sow", None).await.unwrap();

        assert_eq!(response.response_text, "Sow in June.");
        assert_eq!(response.suggestions, vec!["Which seed variety?"]);
        assert_eq!(response.confidence, 1.0);
    }

    #[tokio::test]
    async fn test_structured_completion_without_suggestions_gets_generated_ones() {
        let client = ScriptedClient::replying(r#"{"response": "Irrigate weekly."}"#);
        let response = live(client).ask("water schedule", None).await.unwrap();
        assert_eq!(response.response_text, "Irrigate weekly.");
        assert_eq!(response.suggestions.len(), 3);
        assert_eq!(response.confidence, LIVE_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back_without_detail() {
        let client = ScriptedClient::failing("connection refused at 10.0.0.1:443");
        let advisor = live(client.clone());

        let outcome = advisor.ask_detailed("current market prices", None).await.unwrap();

        assert_eq!(client.calls(), 1);
        assert_eq!(outcome.fallback_reason(), Some(FallbackReason::Transport));
        assert_eq!(outcome.topic(), Some(Topic::MarketInsight));
        let response = outcome.response();
        assert!(response.confidence <= MATCHED_CONFIDENCE);
        assert!(!response.response_text.contains("connection refused"));
        assert!(!response.response_text.contains("10.0.0.1"));
    }

    #[tokio::test]
    async fn test_empty_completion_falls_back() {
        let client = Arc::new(ScriptedClient {
            reply: Ok(Some("   ".into())),
            calls: AtomicUsize::new(0),
        });
        let outcome = live(client).ask_detailed("pest on leaves", None).await.unwrap();
        assert_eq!(outcome.fallback_reason(), Some(FallbackReason::EmptyCompletion));
        assert_eq!(outcome.topic(), Some(Topic::PestControl));
    }

    #[tokio::test]
    async fn test_not_ready_never_calls_client() {
        let client = ScriptedClient::replying("should not be used");
        let advisor = Advisor::new(
            ClientConfig::disabled(),
            Some(client.clone() as Arc<dyn LlmClient>),
        );

        assert!(!advisor.is_live());
        let outcome = advisor.ask_detailed("recommend crops", None).await.unwrap();

        assert_eq!(client.calls(), 0);
        assert_eq!(outcome.fallback_reason(), Some(FallbackReason::NotConfigured));
        assert_eq!(outcome.topic(), Some(Topic::CropRecommendation));
    }

    #[tokio::test]
    async fn test_ready_without_client_falls_back() {
        let advisor = Advisor::new(ClientConfig::from_key(Some("gsk_live".into())), None);
        assert!(!advisor.is_live());
        let outcome = advisor.ask_detailed("hello", None).await.unwrap();
        assert_eq!(outcome.fallback_reason(), Some(FallbackReason::NotConfigured));
    }

    #[test]
    fn test_structured_parse_rejects_plain_text() {
        assert!(StructuredCompletion::parse("Just prose.").is_none());
        assert!(StructuredCompletion::parse(r#"{"answer": "x"}"#).is_none());
        assert!(StructuredCompletion::parse(r#"{"response": "  "}"#).is_none());
        assert!(StructuredCompletion::parse(r#"{"response": "ok"}"#).is_some());
    }
}
