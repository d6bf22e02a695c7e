// crates/foodgrid-advisor/src/advisory/classifier.rs
// Deterministic keyword router from free text to an advisory topic

use super::fallback::templates;
use foodgrid_types::QueryContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory subject categories known to the offline generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    CropRecommendation,
    MarketInsight,
    WeatherAdvisory,
    PestControl,
    SoilManagement,
    NutritionPlan,
    StorageAdvice,
    GovernmentScheme,
    Unclassified,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CropRecommendation => "crop_recommendation",
            Self::MarketInsight => "market_insight",
            Self::WeatherAdvisory => "weather_advisory",
            Self::PestControl => "pest_control",
            Self::SoilManagement => "soil_management",
            Self::NutritionPlan => "nutrition_plan",
            Self::StorageAdvice => "storage_advice",
            Self::GovernmentScheme => "government_scheme",
            Self::Unclassified => "unclassified",
        }
    }

    /// The table row owning this topic
    pub fn row(&self) -> &'static ClassifierRow {
        CLASSIFIER_TABLE
            .iter()
            .find(|row| row.topic == *self)
            .unwrap_or(&UNCLASSIFIED_ROW)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════
// KEYWORDS
// ═══════════════════════════════════════

const CROP_TERMS: &[&str] = &["crop"];
const RECOMMEND_TERMS: &[&str] = &["recommend", "suggest", "suitable"];
// "should" only counts as a recommendation ask when paired with a planting verb
const PLANTING_TERMS: &[&str] = &["grow", "plant"];
const MARKET_TERMS: &[&str] = &["market", "price", "sell", "buyer", "mandi"];
// " rain" is anchored to a word start so "grain" and "train" do not match
const WEATHER_TERMS: &[&str] = &["weather", " rain", "monsoon", "forecast", "temperature"];
const PEST_TERMS: &[&str] = &["pest", "disease", "insect", "fungus", "blight"];
const SOIL_TERMS: &[&str] = &["soil", "fertilizer", "fertiliser", "compost", "manure"];
const NUTRITION_TERMS: &[&str] = &["nutrition", "meal", "diet", "recipe"];
const STORAGE_TERMS: &[&str] = &["storage", "store", "preserve", "warehouse"];
const SCHEME_TERMS: &[&str] = &["subsidy", "loan", "scheme", "insurance", "government"];

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

fn is_crop_recommendation(q: &str) -> bool {
    contains_any(q, CROP_TERMS)
        && (contains_any(q, RECOMMEND_TERMS)
            || (q.contains("should") && contains_any(q, PLANTING_TERMS)))
}

fn is_market(q: &str) -> bool {
    contains_any(q, MARKET_TERMS)
}

fn is_weather(q: &str) -> bool {
    contains_any(q, WEATHER_TERMS)
}

fn is_pest(q: &str) -> bool {
    contains_any(q, PEST_TERMS)
}

fn is_soil(q: &str) -> bool {
    contains_any(q, SOIL_TERMS)
}

fn is_nutrition(q: &str) -> bool {
    contains_any(q, NUTRITION_TERMS)
}

fn is_storage(q: &str) -> bool {
    contains_any(q, STORAGE_TERMS)
}

fn is_scheme(q: &str) -> bool {
    contains_any(q, SCHEME_TERMS)
}

fn always(_q: &str) -> bool {
    true
}

// ═══════════════════════════════════════
// ROUTING TABLE
// ═══════════════════════════════════════

/// Predicate over the lower-cased query
pub type Predicate = fn(&str) -> bool;
/// Canned answer generator: (original query, context) -> prose
pub type Generator = fn(&str, &QueryContext) -> String;

/// One routing rule: a topic, its keyword predicate and its answer generator
pub struct ClassifierRow {
    pub topic: Topic,
    matches: Predicate,
    generate: Generator,
}

impl ClassifierRow {
    pub fn matches(&self, lowered_query: &str) -> bool {
        (self.matches)(lowered_query)
    }

    pub fn generate(&self, query: &str, context: &QueryContext) -> String {
        (self.generate)(query, context)
    }
}

/// Rules in priority order. The first matching row wins; later rows are not evaluated.
/// New topics are added by inserting a row at the intended priority.
pub static CLASSIFIER_TABLE: &[ClassifierRow] = &[
    ClassifierRow {
        topic: Topic::CropRecommendation,
        matches: is_crop_recommendation,
        generate: templates::crop_recommendation,
    },
    ClassifierRow {
        topic: Topic::MarketInsight,
        matches: is_market,
        generate: templates::market_insight,
    },
    ClassifierRow {
        topic: Topic::WeatherAdvisory,
        matches: is_weather,
        generate: templates::weather_advisory,
    },
    ClassifierRow {
        topic: Topic::PestControl,
        matches: is_pest,
        generate: templates::pest_control,
    },
    ClassifierRow {
        topic: Topic::SoilManagement,
        matches: is_soil,
        generate: templates::soil_management,
    },
    ClassifierRow {
        topic: Topic::NutritionPlan,
        matches: is_nutrition,
        generate: templates::nutrition_plan,
    },
    ClassifierRow {
        topic: Topic::StorageAdvice,
        matches: is_storage,
        generate: templates::storage_advice,
    },
    ClassifierRow {
        topic: Topic::GovernmentScheme,
        matches: is_scheme,
        generate: templates::government_scheme,
    },
];

/// Catch-all when no table row matches
static UNCLASSIFIED_ROW: ClassifierRow = ClassifierRow {
    topic: Topic::Unclassified,
    matches: always,
    generate: templates::general_guidance,
};

/// Resolve the routing row for a query (case-insensitive substring matching)
pub fn route(query: &str) -> &'static ClassifierRow {
    // Leading space lets word-start terms match at the beginning of the query
    let lowered = format!(" {}", query.to_lowercase());
    CLASSIFIER_TABLE
        .iter()
        .find(|row| row.matches(&lowered))
        .unwrap_or(&UNCLASSIFIED_ROW)
}

/// Classify a query into a topic. Pure and deterministic.
pub fn classify(query: &str) -> Topic {
    route(query).topic
}
