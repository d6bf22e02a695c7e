// crates/foodgrid-advisor/src/error.rs
// Standardized error types for the advisory core

use thiserror::Error;

/// Main error type for the FOOD-GRID advisory library
///
/// Only [`AdvisorError::InvalidInput`] is ever returned from `Advisor::ask`;
/// every other failure on the advisory path is recovered by the fallback
/// generator before it reaches a caller.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using AdvisorError
pub type Result<T> = std::result::Result<T, AdvisorError>;

impl AdvisorError {
    /// True for caller contract violations (the UI should block submission)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AdvisorError::InvalidInput(_))
    }
}
