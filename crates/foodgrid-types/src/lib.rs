// crates/foodgrid-types/src/lib.rs
// Shared advisory types for FOOD-GRID (native + WASM compatible)
// No native-only dependencies allowed here

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ═══════════════════════════════════════
// CONTEXT
// ═══════════════════════════════════════

/// Well-known context keys sent by the dashboard pages.
///
/// The context map is open: these are hints, not a schema. Unknown keys are
/// carried through untouched.
pub mod context_keys {
    pub const SOIL_TYPE: &str = "soilType";
    pub const FARM_SIZE: &str = "farmSize";
    pub const LOCATION: &str = "location";
    pub const SEASON: &str = "season";
    pub const CROP: &str = "crop";
    pub const HOUSEHOLD_SIZE: &str = "householdSize";
}

/// Open string-to-string mapping of domain hints (soil type, location, ...)
///
/// Backed by a `BTreeMap` so serialization order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryContext(BTreeMap<String, String>);

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a hint, treating blank values as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ═══════════════════════════════════════
// REQUEST / RESPONSE
// ═══════════════════════════════════════

/// A single advisory question from the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<QueryContext>,
}

impl AdvisoryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: QueryContext) -> Self {
        self.context = Some(context);
        self
    }
}

/// Maximum number of follow-up suggestions attached to a response
pub const MAX_SUGGESTIONS: usize = 3;

/// Result of an advisory question, identical in shape for live and fallback answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResponse {
    pub response_text: String,
    /// Heuristic in [0, 1]: high for live model answers, lower for canned templates
    pub confidence: f64,
    /// Follow-up queries in relevance order
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl AdvisoryResponse {
    /// Build a response, clamping confidence into [0, 1] and normalizing suggestions
    /// (trimmed, blanks dropped, at most [`MAX_SUGGESTIONS`]).
    pub fn new(
        response_text: impl Into<String>,
        confidence: f64,
        suggestions: impl IntoIterator<Item = String>,
    ) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        let suggestions = suggestions
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .take(MAX_SUGGESTIONS)
            .collect();

        Self {
            response_text: response_text.into(),
            confidence,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_get_ignores_blank_values() {
        let ctx = QueryContext::new()
            .with(context_keys::SOIL_TYPE, "red sandy loam")
            .with(context_keys::LOCATION, "   ");
        assert_eq!(ctx.get(context_keys::SOIL_TYPE), Some("red sandy loam"));
        assert_eq!(ctx.get(context_keys::LOCATION), None);
        assert_eq!(ctx.get("missing"), None);
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_context_serializes_as_flat_map() {
        let ctx: QueryContext = [("soilType", "black"), ("location", "Mandya")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&ctx).unwrap();
        // BTreeMap ordering: keys sorted
        assert_eq!(json, r#"{"location":"Mandya","soilType":"black"}"#);
    }

    #[test]
    fn test_context_keeps_unknown_keys() {
        let ctx: QueryContext = serde_json::from_str(r#"{"irrigation":"drip"}"#).unwrap();
        assert_eq!(ctx.get("irrigation"), Some("drip"));
    }

    #[test]
    fn test_request_context_optional() {
        let req: AdvisoryRequest = serde_json::from_str(r#"{"query":"hello"}"#).unwrap();
        assert_eq!(req.query, "hello");
        assert!(req.context.is_none());
    }

    #[test]
    fn test_response_clamps_confidence() {
        assert_eq!(AdvisoryResponse::new("a", 1.7, vec![]).confidence, 1.0);
        assert_eq!(AdvisoryResponse::new("a", -0.2, vec![]).confidence, 0.0);
        assert_eq!(AdvisoryResponse::new("a", f64::NAN, vec![]).confidence, 0.0);
    }

    #[test]
    fn test_response_normalizes_suggestions() {
        let resp = AdvisoryResponse::new(
            "text",
            0.5,
            vec![
                "  first ".to_string(),
                "".to_string(),
                "second".to_string(),
                "third".to_string(),
                "fourth".to_string(),
            ],
        );
        assert_eq!(resp.suggestions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_response_uses_camel_case_on_the_wire() {
        let resp = AdvisoryResponse::new("ok", 0.9, vec!["next?".to_string()]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["responseText"], "ok");
        assert_eq!(json["confidence"], 0.9);
        assert_eq!(json["suggestions"][0], "next?");
    }
}
