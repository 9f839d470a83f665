//! Gemini configuration

use serde::{Deserialize, Serialize};
use std::env;

use promptsmith_core::{Error, Result};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TEMPERATURE: f64 = 0.4;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Configuration for the Gemini client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub api_url: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl GeminiConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("PROMPTSMITH_API_KEY"))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Configuration(
                    "GEMINI_API_KEY or PROMPTSMITH_API_KEY environment variable not found"
                        .to_string(),
                )
            })?;

        let mut config = Self::new(api_key);
        if let Some(api_url) = lookup("GEMINI_API_URL").filter(|url| !url.trim().is_empty()) {
            config = config.with_api_url(api_url.trim());
        }

        Ok(config)
    }

    /// Create configuration with explicit values
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// Point the client at another endpoint, e.g. a proxy
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// URL of the `generateContent` method for `model_id`
    pub fn endpoint(&self, model_id: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_url, model_id)
    }
}
