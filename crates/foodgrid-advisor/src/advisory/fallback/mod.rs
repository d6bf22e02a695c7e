// crates/foodgrid-advisor/src/advisory/fallback/mod.rs
// Offline answer generation: topic template + operator note + suggestions

pub mod templates;

use super::classifier::{self, ClassifierRow, Topic};
use super::suggestions;
use foodgrid_types::{AdvisoryResponse, QueryContext};
use serde::Serialize;
use std::fmt;

/// Confidence for a template matched to a topic
pub const MATCHED_CONFIDENCE: f64 = 0.7;
/// Confidence for the generic catch-all answer
pub const UNMATCHED_CONFIDENCE: f64 = 0.5;

/// Why the offline generator answered instead of the live model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No usable API key (missing or placeholder)
    NotConfigured,
    /// Network error, timeout, non-2xx status or malformed payload
    Transport,
    /// The model answered with no text
    EmptyCompletion,
}

impl FallbackReason {
    /// Note appended to the answer text. Never carries transport details.
    pub fn operator_note(&self) -> &'static str {
        match self {
            Self::NotConfigured => {
                "💡 **Tip**: This answer uses offline guidance with sample figures. Configure GROQ_API_KEY to get personalized AI-powered recommendations."
            }
            Self::Transport | Self::EmptyCompletion => {
                "💡 **Note**: The live AI advisor is unavailable right now, so this answer uses offline guidance with sample figures. If this persists, check the GROQ_API_KEY configuration and network access."
            }
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "not_configured"),
            Self::Transport => write!(f, "transport"),
            Self::EmptyCompletion => write!(f, "empty_completion"),
        }
    }
}

/// An offline answer together with the topic that produced it
#[derive(Debug, Clone)]
pub struct FallbackAnswer {
    pub topic: Topic,
    pub response: AdvisoryResponse,
}

/// Stateless offline generator
pub struct FallbackGenerator;

impl FallbackGenerator {
    /// Classify the query and answer from the matching template
    pub fn respond(query: &str, context: &QueryContext, reason: FallbackReason) -> FallbackAnswer {
        Self::respond_with(classifier::route(query), query, context, reason)
    }

    /// Answer from a known topic's template, skipping classification
    pub fn respond_for_topic(
        topic: Topic,
        query: &str,
        context: &QueryContext,
        reason: FallbackReason,
    ) -> FallbackAnswer {
        Self::respond_with(topic.row(), query, context, reason)
    }

    fn respond_with(
        row: &ClassifierRow,
        query: &str,
        context: &QueryContext,
        reason: FallbackReason,
    ) -> FallbackAnswer {
        let body = row.generate(query, context);
        let text = format!("{}\n\n{}", body, reason.operator_note());

        let confidence = match row.topic {
            Topic::Unclassified => UNMATCHED_CONFIDENCE,
            _ => MATCHED_CONFIDENCE,
        };

        FallbackAnswer {
            topic: row.topic,
            response: AdvisoryResponse::new(text, confidence, suggestions::generate(query)),
        }
    }
}
