//! Configuration for the transformation pipeline.
//!
//! The configuration is loaded from the environment once at startup and then
//! constructor-injected; the pipeline itself never reads ambient state.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::transform::errors::{TransformError, TransformResult};

/// Default Gemini model name.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default base URL of the Gemini REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable for the API key.
const API_KEY_ENV: &str = "TRILIPI_API_KEY";
/// Fallback key variable, matching the upstream provider's convention.
const API_KEY_FALLBACK_ENV: &str = "GOOGLE_API_KEY";
/// Environment variable overriding the model name.
const MODEL_ENV: &str = "TRILIPI_MODEL";
/// Environment variable overriding the API base URL.
const BASE_URL_ENV: &str = "TRILIPI_GEMINI_URL";

/// Settings for the model invocation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Gemini completion model name.
    pub model: String,
    /// Temperature for generation.
    pub temperature: f64,
    /// API credential supplied at process start.
    pub api_key: String,
    /// Optional custom base URL for the model API.
    pub base_url: Option<String>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            api_key: String::new(),
            base_url: None,
        }
    }
}

impl TransformConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if no usable API key is present.
    pub fn from_env() -> TransformResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .or_else(|_| std::env::var(API_KEY_FALLBACK_ENV))
            .unwrap_or_default();
        if !is_usable_key(&api_key) {
            return Err(TransformError::MissingApiKey);
        }

        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = std::env::var(BASE_URL_ENV).ok();

        let config = Self {
            model,
            api_key,
            base_url,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range or invalid.
    pub fn validate(&self) -> TransformResult<()> {
        if !is_usable_key(&self.api_key) {
            return Err(TransformError::MissingApiKey);
        }

        if self.model.trim().is_empty() {
            return Err(TransformError::InvalidConfig(
                "model must not be empty".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(TransformError::InvalidConfig(
                "temperature must be within 0.0..=2.0".to_string(),
            ));
        }

        if let Some(base_url) = &self.base_url {
            Url::parse(base_url)?;
        }

        Ok(())
    }

    /// Effective base URL, falling back to the public endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// A key is usable when present and not an obvious placeholder such as the
/// `your_api_key_here` value shipped in sample .env files.
fn is_usable_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && !key.starts_with("your_")
}
