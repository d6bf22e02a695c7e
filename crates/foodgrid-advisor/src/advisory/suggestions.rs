// crates/foodgrid-advisor/src/advisory/suggestions.rs
// Follow-up question suggestions attached to every answer

use foodgrid_types::MAX_SUGGESTIONS;

/// Candidate follow-ups in relevance order
pub const SUGGESTION_CANDIDATES: &[&str] = &[
    "What crops are best for my soil type?",
    "Show me current market prices",
    "How do I prevent pest damage?",
    "What government schemes can I apply for?",
    "How to improve my soil health?",
    "Create a nutrition plan for my family",
    "What's the weather forecast for farming?",
    "How do I store my harvest properly?",
];

/// Follow-up suggestions for a query.
///
/// Not personalized: the query is accepted but currently ignored, so every answer
/// carries the same leading candidates.
pub fn generate(_query: &str) -> Vec<String> {
    SUGGESTION_CANDIDATES
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| s.to_string())
        .collect()
}
