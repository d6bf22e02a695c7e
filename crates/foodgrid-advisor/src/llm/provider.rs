// crates/foodgrid-advisor/src/llm/provider.rs
// LLM provider abstraction layer

use anyhow::Result;
use async_trait::async_trait;

use super::{ChatResult, Message};

/// Trait for LLM clients - the advisor talks to the model only through this
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one chat completion request. Implementations must not retry.
    async fn chat(&self, messages: Vec<Message>) -> Result<ChatResult>;

    /// Model identifier sent with each request
    fn model_name(&self) -> String;
}
