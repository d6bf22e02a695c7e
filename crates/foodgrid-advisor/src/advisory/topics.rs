// crates/foodgrid-advisor/src/advisory/topics.rs
// Topic-specific questions built on top of Advisor::answer

use super::classifier::Topic;
use super::orchestrator::{Advisor, AdvisoryOutcome};
use crate::error::Result;
use foodgrid_types::{AdvisoryResponse, QueryContext, context_keys};
use serde::{Deserialize, Serialize};

/// Farm profile used for crop recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropContext {
    pub soil_type: Option<String>,
    pub farm_size: Option<String>,
    pub location: Option<String>,
    pub season: Option<String>,
}

impl CropContext {
    pub fn to_query_context(&self) -> QueryContext {
        let mut ctx = QueryContext::new();
        let fields = [
            (context_keys::SOIL_TYPE, &self.soil_type),
            (context_keys::FARM_SIZE, &self.farm_size),
            (context_keys::LOCATION, &self.location),
            (context_keys::SEASON, &self.season),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                ctx.insert(key, value.as_str());
            }
        }
        ctx
    }
}

fn or_unknown(value: &Option<String>) -> &str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("not specified")
}

impl Advisor {
    async fn ask_topic(
        &self,
        topic: Topic,
        query: String,
        context: QueryContext,
    ) -> Result<AdvisoryResponse> {
        self.answer(&query, Some(&context), Some(topic))
            .await
            .map(AdvisoryOutcome::into_response)
    }

    pub async fn crop_recommendation(&self, crop: &CropContext) -> Result<AdvisoryResponse> {
        let query = format!(
            "Based on my farm details - soil type: {}, farm size: {}, location: {}, season: {} - which crops should I grow for the best yield and profit?",
            or_unknown(&crop.soil_type),
            or_unknown(&crop.farm_size),
            or_unknown(&crop.location),
            or_unknown(&crop.season),
        );
        self.ask_topic(Topic::CropRecommendation, query, crop.to_query_context())
            .await
    }

    pub async fn market_insights(&self, crop: &str, location: &str) -> Result<AdvisoryResponse> {
        let query = format!(
            "What are the current market prices and selling strategies for {} in {}? Include price trends and the best time to sell.",
            crop.trim(),
            location.trim()
        );
        let context = QueryContext::new()
            .with(context_keys::CROP, crop)
            .with(context_keys::LOCATION, location);
        self.ask_topic(Topic::MarketInsight, query, context).await
    }

    pub async fn weather_advisory(&self, location: &str) -> Result<AdvisoryResponse> {
        let query = format!(
            "Give me a farming weather advisory for {}: the expected conditions and what field work I should plan around them.",
            location.trim()
        );
        let context = QueryContext::new().with(context_keys::LOCATION, location);
        self.ask_topic(Topic::WeatherAdvisory, query, context).await
    }

    pub async fn pest_control(&self, crop: &str, symptoms: &str) -> Result<AdvisoryResponse> {
        let query = format!(
            "My {} crop shows these symptoms: {}. What pest or disease is likely, and how do I treat it, preferring organic methods?",
            crop.trim(),
            symptoms.trim()
        );
        let context = QueryContext::new().with(context_keys::CROP, crop);
        self.ask_topic(Topic::PestControl, query, context).await
    }

    pub async fn soil_management(&self, soil_type: &str) -> Result<AdvisoryResponse> {
        let query = format!(
            "How should I manage and improve {} soil? Cover fertilizer, organic matter and suitable crops.",
            soil_type.trim()
        );
        let context = QueryContext::new().with(context_keys::SOIL_TYPE, soil_type);
        self.ask_topic(Topic::SoilManagement, query, context).await
    }

    pub async fn nutrition_plan(
        &self,
        household_size: u32,
        preferences: &[String],
    ) -> Result<AdvisoryResponse> {
        let preferences = preferences
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>();
        let preferences = if preferences.is_empty() {
            "none".to_string()
        } else {
            preferences.join(", ")
        };
        let query = format!(
            "Create an affordable weekly nutrition plan for a household of {} using locally grown food. Dietary preferences: {}.",
            household_size, preferences
        );
        let context =
            QueryContext::new().with(context_keys::HOUSEHOLD_SIZE, household_size.to_string());
        self.ask_topic(Topic::NutritionPlan, query, context).await
    }

    pub async fn government_schemes(&self) -> Result<AdvisoryResponse> {
        let query = "Which government schemes, subsidies and loans are available to small farmers in Karnataka, and how do I apply?".to_string();
        self.ask_topic(Topic::GovernmentScheme, query, QueryContext::new())
            .await
    }
}
