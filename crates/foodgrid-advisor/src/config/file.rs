// crates/foodgrid-advisor/src/config/file.rs
// File-based configuration from ~/.foodgrid/config.toml

use super::env::ConfigValidation;
use crate::error::{AdvisorError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Groq model for advisory answers
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
/// Groq OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Moderate sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Upper bound on generated tokens
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
/// Transport deadline for the single completion call
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Top-level config structure
#[derive(Debug, Deserialize, Default)]
pub struct FoodGridConfig {
    #[serde(default)]
    pub llm: LlmConfig,
}

/// LLM tuning section. Every field is optional; accessors apply defaults.
#[derive(Debug, Deserialize, Default)]
pub struct LlmConfig {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl FoodGridConfig {
    /// Load config from ~/.foodgrid/config.toml, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                debug!(path = %path.display(), "Loaded config from file");
                config
            }
            Ok(None) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse config file");
                Self::default()
            }
        }
    }

    /// Load config from an explicit path. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AdvisorError::Config(format!("{}: {}", path.display(), e))),
        };

        toml::from_str(&contents)
            .map(Some)
            .map_err(|e| AdvisorError::Config(e.to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// ~/.foodgrid (also holds an optional .env)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".foodgrid")
    }
}

impl LlmConfig {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Temperature clamped to the API's accepted range (0.0 to 2.0).
    /// Non-finite values (TOML accepts `nan` and `inf`) use the default.
    pub fn temperature(&self) -> f32 {
        self.temperature
            .filter(|t| t.is_finite())
            .unwrap_or(DEFAULT_TEMPERATURE)
            .clamp(0.0, 2.0)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
            .filter(|&t| t > 0)
            .unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .filter(|&t| t > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Flag values the accessors had to replace with defaults
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        if let Some(t) = self.temperature
            && !(0.0..=2.0).contains(&t)
        {
            validation.add_warning(format!(
                "llm.temperature = {} is outside 0.0..=2.0, using {}",
                t,
                self.temperature()
            ));
        }
        if self.max_tokens == Some(0) {
            validation.add_warning(format!("llm.max_tokens = 0, using {}", DEFAULT_MAX_TOKENS));
        }
        if self.timeout_secs == Some(0) {
            validation.add_warning(format!(
                "llm.timeout_secs = 0, using {}",
                DEFAULT_TIMEOUT_SECS
            ));
        }
        if let Some(url) = &self.base_url
            && !(url.starts_with("https://") || url.starts_with("http://"))
        {
            validation.add_error(format!("llm.base_url '{}' is not an http(s) URL", url));
        }

        validation
    }
}
