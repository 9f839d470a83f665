//! Gemini client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use promptsmith_core::config::credential_looks_valid;
use promptsmith_core::{Error, GenerationResult, Result, RewriteProvider, RewriteRequest};

use crate::config::GeminiConfig;

/// Gemini `generateContent` client
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
pub(crate) struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
pub(crate) struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Model constants
    pub const GEMINI_2_0_FLASH: &'static str = "gemini-2.0-flash";
    pub const GEMINI_1_5_FLASH: &'static str = "gemini-1.5-flash";
    pub const GEMINI_1_5_PRO: &'static str = "gemini-1.5-pro";

    /// Create a new Gemini client from configuration
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new Gemini client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn request_body<'a>(&self, instruction: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: instruction }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        }
    }

    /// Perform the actual generation request
    async fn perform_generation(&self, instruction: &str, model_id: &str) -> Result<String> {
        if !credential_looks_valid(&self.config.api_key) {
            return Err(Error::Authentication(
                "Gemini API key is missing or malformed".to_string(),
            ));
        }

        let url = self.config.endpoint(model_id);
        debug!(model = model_id, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&self.request_body(instruction))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_status(status, &body, model_id));
        }

        parse_generation(&body)
    }
}

/// Map a non-success HTTP status onto the error taxonomy
pub(crate) fn classify_status(status: StatusCode, body: &str, model_id: &str) -> Error {
    let lower = body.to_lowercase();
    match status {
        StatusCode::NOT_FOUND => Error::ModelUnavailable(format!("{} was not found", model_id)),
        StatusCode::BAD_REQUEST
            if lower.contains("not found") || lower.contains("not supported") =>
        {
            Error::ModelUnavailable(format!("{} is not available: {}", model_id, body.trim()))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            Error::RateLimited(format!("Gemini quota exceeded for {}", model_id))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Authentication(format!("Gemini rejected the API key ({})", status))
        }
        _ => Error::LLMProvider(format!(
            "Gemini API request failed with status {}: {}",
            status,
            body.trim()
        )),
    }
}

/// Concatenate the text parts of the first candidate
pub(crate) fn parse_generation(body: &str) -> Result<String> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| Error::Serialization(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().map(|part| part.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(Error::InvalidResponse(
            "Gemini returned no candidate text".to_string(),
        ));
    }

    Ok(text)
}

#[async_trait]
impl RewriteProvider for GeminiClient {
    async fn rewrite(&self, request: &RewriteRequest, model_id: &str) -> Result<GenerationResult> {
        let text = self
            .perform_generation(&request.instruction(), model_id)
            .await?;

        Ok(GenerationResult {
            text,
            model_id: model_id.to_string(),
        })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
