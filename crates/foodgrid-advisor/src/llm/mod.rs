// crates/foodgrid-advisor/src/llm/mod.rs
// LLM inference client (Groq, OpenAI-compatible chat completions)

mod groq;
mod http_client;
mod logging;
mod openai_compat;
mod prompt;
mod provider;
mod types;

pub use groq::GroqClient;
pub use http_client::LlmHttpClient;
pub use openai_compat::{ChatRequest, ChatResponse, parse_chat_response};
pub use prompt::{GENERAL_QUERY_MARKER, PromptBuilder};
pub use provider::LlmClient;
pub use types::{ChatResult, Message, Usage};
