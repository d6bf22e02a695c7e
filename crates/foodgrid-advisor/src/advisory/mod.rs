// crates/foodgrid-advisor/src/advisory/mod.rs
// Advisory pipeline: classification, offline answers, suggestions and orchestration

pub mod classifier;
pub mod fallback;
pub mod orchestrator;
pub mod suggestions;
pub mod topics;

pub use classifier::{CLASSIFIER_TABLE, ClassifierRow, Topic, classify, route};
pub use fallback::{
    FallbackAnswer, FallbackGenerator, FallbackReason, MATCHED_CONFIDENCE, UNMATCHED_CONFIDENCE,
};
pub use orchestrator::{Advisor, AdvisoryOutcome, LIVE_CONFIDENCE};
pub use topics::CropContext;
