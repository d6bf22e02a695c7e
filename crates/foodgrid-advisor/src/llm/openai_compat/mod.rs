// crates/foodgrid-advisor/src/llm/openai_compat/mod.rs
// OpenAI-compatible request/response handling (Groq speaks this dialect)

mod request;
mod response;

pub use request::ChatRequest;
pub use response::{ChatResponse, parse_chat_response};
