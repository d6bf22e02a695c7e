// crates/foodgrid-advisor/src/llm/groq.rs
// Groq API client (non-streaming chat completions)

use crate::config::LlmConfig;
use crate::llm::http_client::LlmHttpClient;
use crate::llm::openai_compat::{ChatRequest, parse_chat_response};
use crate::llm::provider::LlmClient;
use crate::llm::{ChatResult, Message};
use anyhow::Result;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{Span, debug, instrument};
use uuid::Uuid;

/// Groq API client
pub struct GroqClient {
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
    http: LlmHttpClient,
}

impl GroqClient {
    /// Create a client with default model, sampling and endpoint
    pub fn new(api_key: String) -> Self {
        Self::from_config(api_key, &LlmConfig::default())
    }

    /// Create a client using the tuning values from the config file
    pub fn from_config(api_key: String, config: &LlmConfig) -> Self {
        Self {
            api_key,
            model: config.model().to_string(),
            base_url: config.base_url().to_string(),
            temperature: config.temperature(),
            max_tokens: config.max_tokens(),
            http: LlmHttpClient::new(config.timeout()),
        }
    }

    /// Point the client at another OpenAI-compatible root (gateway, test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = LlmHttpClient::new(timeout);
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Single chat completion; no retries
    #[instrument(skip(self, messages), fields(request_id, model = %self.model, message_count = messages.len()))]
    pub async fn chat(&self, messages: Vec<Message>) -> Result<ChatResult> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let request = ChatRequest::new(self.model.clone(), messages)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
            .with_top_p(1.0);
        let body = serde_json::to_string(&request)?;

        debug!(request_id = %request_id, url = %self.completions_url(), "Sending Groq completion request");

        let start = Instant::now();
        let response_body = self
            .http
            .execute(&request_id, &self.completions_url(), &self.api_key, body)
            .await?;
        let duration_ms = start.elapsed().as_millis() as u64;

        let result = parse_chat_response(&response_body, &request_id, duration_ms)?;

        if let Some(ref usage) = result.usage {
            crate::llm::logging::log_usage(&request_id, "Groq", usage);
        }
        crate::llm::logging::log_completion(
            &request_id,
            "Groq",
            duration_ms,
            result.content.as_deref().map_or(0, str::len),
        );

        Ok(result)
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn chat(&self, messages: Vec<Message>) -> Result<ChatResult> {
        // Delegate to the inherent implementation
        self.chat(messages).await
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}
