//! Optimizer configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::{Error, Result};

/// Models tried in order when remote optimization is enabled
pub const DEFAULT_MODELS: [&str; 3] = ["gemini-2.0-flash", "gemini-1.5-flash", "gemini-1.5-pro"];

/// Per-call timeout for the remote rewriter
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CREDENTIAL_PREFIX: &str = "AIza";
const CREDENTIAL_LEN: usize = 39;

/// Settings consumed by the optimization orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    pub remote_enabled: bool,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub models: Vec<String>,
    pub timeout: Duration,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            remote_enabled: false,
            api_key: None,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl OptimizerConfig {
    /// Configuration that never leaves the local rule pipeline
    pub fn local_only() -> Self {
        Self::default()
    }

    /// Configuration with remote optimization switched on
    pub fn remote(api_key: impl Into<String>) -> Self {
        Self {
            remote_enabled: true,
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables (and a `.env` file)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(flag) = lookup("PROMPTSMITH_REMOTE") {
            config.remote_enabled = parse_flag(&flag).ok_or_else(|| {
                Error::Configuration(format!("PROMPTSMITH_REMOTE is not a boolean: {}", flag))
            })?;
        }

        config.api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("PROMPTSMITH_API_KEY"))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if let Some(models) = lookup("PROMPTSMITH_MODELS") {
            config.models = parse_models(&models);
        }

        if let Some(secs) = lookup("PROMPTSMITH_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&secs)?;
        }

        Ok(config)
    }

    /// Replace the model list, dropping blank entries
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models
            .into_iter()
            .map(Into::<String>::into)
            .filter(|m| !m.trim().is_empty())
            .collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether the configured credential has a plausible shape
    pub fn has_valid_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(credential_looks_valid)
    }

    /// Whether the remote path should even be attempted
    pub fn remote_ready(&self) -> bool {
        self.remote_enabled && self.has_valid_credential() && !self.models.is_empty()
    }
}

/// Format-only credential check; never contacts the provider
pub fn credential_looks_valid(key: &str) -> bool {
    key.len() == CREDENTIAL_LEN
        && key.starts_with(CREDENTIAL_PREFIX)
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn parse_models(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timeout(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::Configuration(format!(
            "PROMPTSMITH_TIMEOUT_SECS must be a positive number of seconds, got {}",
            value
        ))),
    }
}
