// crates/foodgrid-advisor/src/config/mod.rs
// Configuration: the API credential from the environment plus optional tuning file

pub mod env;
pub mod file;

pub use env::{ApiKeys, ClientConfig, ConfigValidation, PLACEHOLDER_API_KEY};
pub use file::{FoodGridConfig, LlmConfig};
