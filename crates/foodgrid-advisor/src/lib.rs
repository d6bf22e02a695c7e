// crates/foodgrid-advisor/src/lib.rs
// FOOD-GRID advisory core - farmer questions answered by a live model or offline guidance

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod advisory;
pub mod config;
pub mod error;
pub mod llm;

pub use advisory::{Advisor, AdvisoryOutcome, FallbackReason, Topic, classify};
pub use error::{AdvisorError, Result};
pub use foodgrid_types::{AdvisoryRequest, AdvisoryResponse, QueryContext, context_keys};
