// crates/foodgrid-advisor/src/llm/prompt.rs
// PromptBuilder for the advisory persona and context block

use super::Message;
use foodgrid_types::QueryContext;

/// Fixed persona and domain scope for every live advisory call
const ADVISOR_PERSONA: &str = r#"You are an expert agricultural AI advisor for the FOOD-GRID platform in India.
Provide practical, actionable advice for farmers in Karnataka. Focus on:
- Crop recommendations based on soil and climate
- Market insights and pricing
- Weather-based farming guidance
- Pest and disease management
- Soil health and fertilization
- Government schemes and subsidies
- Nutrition planning with local produce"#;

/// Output guidance appended after the context block
const RESPONSE_GUIDANCE: &str =
    "Respond in a clear, structured format with specific recommendations. Use Indian Rupees (₹) for prices.";

/// Literal used in place of the context block when the caller sent no hints
pub const GENERAL_QUERY_MARKER: &str = "General query";

/// Builds the two-turn message list: system persona (with context) + user query
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    context: Option<QueryContext>,
}

impl PromptBuilder {
    /// An empty context is treated the same as no context
    pub fn new(context: Option<&QueryContext>) -> Self {
        Self {
            context: context.filter(|c| !c.is_empty()).cloned(),
        }
    }

    /// Serialized context, or the general-query marker
    pub fn context_block(&self) -> String {
        self.context
            .as_ref()
            .and_then(|c| serde_json::to_string(c).ok())
            .unwrap_or_else(|| GENERAL_QUERY_MARKER.to_string())
    }

    /// Build the complete system prompt
    pub fn build_system_prompt(&self) -> String {
        format!(
            "{}\n\nContext: {}\n\n{}",
            ADVISOR_PERSONA,
            self.context_block(),
            RESPONSE_GUIDANCE
        )
    }

    /// Build a vector of messages with system prompt and the raw user query
    pub fn build_messages(&self, query: impl Into<String>) -> Vec<Message> {
        vec![
            Message::system(self.build_system_prompt()),
            Message::user(query),
        ]
    }
}
