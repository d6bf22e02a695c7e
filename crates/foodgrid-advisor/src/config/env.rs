// crates/foodgrid-advisor/src/config/env.rs
// Environment-based configuration - single source of truth for the API credential

use std::fmt;
use tracing::{debug, info, warn};

/// Environment variable holding the Groq API key
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Placeholder shipped in the sample `.env`; treated exactly like a missing key
pub const PLACEHOLDER_API_KEY: &str = "gsk_your_actual_groq_api_key_here";

/// API keys loaded from environment variables
#[derive(Clone, Default)]
pub struct ApiKeys {
    /// Groq API key (GROQ_API_KEY)
    pub groq: Option<String>,
}

impl ApiKeys {
    /// Load API keys from environment variables (call once at startup)
    pub fn from_env() -> Self {
        let keys = Self {
            groq: Self::read_key(GROQ_API_KEY_VAR),
        };
        keys.log_status();
        keys
    }

    /// Read a single API key from environment, filtering empty values
    fn read_key(name: &str) -> Option<String> {
        std::env::var(name)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Log which API keys are available (without exposing values)
    fn log_status(&self) {
        match self.groq.as_deref() {
            Some(PLACEHOLDER_API_KEY) => {
                warn!("GROQ_API_KEY is still the placeholder value - using fallback responses")
            }
            Some(_) => debug!("Groq API key loaded"),
            None => warn!("Groq API key not configured - using fallback responses"),
        }
    }
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeys")
            .field("groq", &self.groq.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Process-wide client configuration: whether the live model can be used at all.
///
/// Computed once at startup and never mutated; a new key requires a restart.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: Option<String>,
    is_ready: bool,
}

impl ClientConfig {
    /// Derive readiness from loaded keys. Missing or placeholder keys are never ready.
    pub fn from_api_keys(keys: &ApiKeys) -> Self {
        Self::from_key(keys.groq.clone())
    }

    pub fn from_key(api_key: Option<String>) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY);
        let is_ready = api_key.is_some();

        if is_ready {
            info!("Groq AI configured - live advisory enabled");
        } else {
            info!("Live advisory disabled - all answers come from the offline generator");
        }

        Self { api_key, is_ready }
    }

    /// Fallback-only configuration
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            is_ready: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    /// The credential, only when ready
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Validate the configuration for the `config` command
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();
        if !self.is_ready {
            validation.add_warning(format!(
                "No usable {} configured. Answers use offline templates (confidence <= 0.7).",
                GROQ_API_KEY_VAR
            ));
        }
        validation
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("is_ready", &self.is_ready)
            .finish()
    }
}

/// Configuration validation result
#[derive(Debug)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Default for ConfigValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Merge another validation's findings into this one
    pub fn extend(&mut self, other: ConfigValidation) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warn in &self.warnings {
                lines.push(format!("  - {}", warn));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}
