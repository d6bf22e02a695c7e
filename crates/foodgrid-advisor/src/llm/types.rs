// crates/foodgrid-advisor/src/llm/types.rs
// Chat message and result types shared by the client stack

use serde::{Deserialize, Serialize};

/// Message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String, // "system" | "user"
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Result of a single chat completion
#[derive(Debug, Clone)]
pub struct ChatResult {
    pub request_id: String,
    /// Text of the first choice, if any
    pub content: Option<String>,
    pub usage: Option<Usage>,
    pub duration_ms: u64,
}

impl ChatResult {
    /// First-choice text with surrounding whitespace removed; `None` when blank
    pub fn text(&self) -> Option<&str> {
        self.content
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::system("s").role, "system");
        assert_eq!(Message::user("u").role, "user");
        assert_eq!(Message::user("u").content, "u");
    }

    #[test]
    fn test_message_serializes_openai_shape() {
        let json = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn test_chat_result_text_filters_blank() {
        let mut result = ChatResult {
            request_id: "r".into(),
            content: Some("  \n ".into()),
            usage: None,
            duration_ms: 0,
        };
        assert!(result.text().is_none());

        result.content = Some("  Grow ragi.  ".into());
        assert_eq!(result.text(), Some("Grow ragi."));

        result.content = None;
        assert!(result.text().is_none());
    }
}
