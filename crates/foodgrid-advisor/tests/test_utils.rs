//! Test utilities for FOOD-GRID integration tests

use async_trait::async_trait;
use foodgrid::config::ClientConfig;
use foodgrid::llm::{ChatResult, LlmClient, Message};
use foodgrid::Advisor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted reply of the counting client
#[derive(Clone)]
pub enum Reply {
    Text(String),
    Empty,
    Fail(String),
}

/// LLM client that records every call instead of touching the network
pub struct CountingClient {
    reply: Reply,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<Message>>,
}

impl CountingClient {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_messages(&self) -> Vec<Message> {
        self.last_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for CountingClient {
    async fn chat(&self, messages: Vec<Message>) -> anyhow::Result<ChatResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = messages;

        let content = match &self.reply {
            Reply::Text(text) => Some(text.clone()),
            Reply::Empty => None,
            Reply::Fail(msg) => anyhow::bail!("{}", msg),
        };
        Ok(ChatResult {
            request_id: "req-integration".to_string(),
            content,
            usage: None,
            duration_ms: 3,
        })
    }

    fn model_name(&self) -> String {
        "counting-mock".to_string()
    }
}

/// Advisor with a ready configuration wired to `client`
pub fn live_advisor(client: &Arc<CountingClient>) -> Advisor {
    Advisor::new(
        ClientConfig::from_key(Some("gsk_integration_key".to_string())),
        Some(client.clone() as Arc<dyn LlmClient>),
    )
}

/// Advisor whose configuration is not ready, but which still holds `client`
pub fn unready_advisor(client: &Arc<CountingClient>) -> Advisor {
    Advisor::new(
        ClientConfig::from_key(Some(foodgrid::config::PLACEHOLDER_API_KEY.to_string())),
        Some(client.clone() as Arc<dyn LlmClient>),
    )
}
