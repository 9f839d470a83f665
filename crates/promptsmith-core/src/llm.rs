//! Remote rewrite provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Result;
use super::types::{Analysis, MetricName};

/// Score below which a core metric is called out to the remote rewriter
const WEAK_METRIC_THRESHOLD: u8 = 50;

/// Result of a remote rewrite request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
    pub model_id: String,
}

/// Structured request handed to a remote rewriter: the prompt plus its analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub original_text: String,
    pub analysis: Analysis,
}

impl RewriteRequest {
    pub fn new(original_text: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            original_text: original_text.into(),
            analysis,
        }
    }

    /// Render the instruction sent to the language model
    pub fn instruction(&self) -> String {
        let analysis = &self.analysis;
        let weak: Vec<&str> = analysis
            .weak_core_metrics(WEAK_METRIC_THRESHOLD)
            .iter()
            .map(MetricName::as_str)
            .collect();
        let weak = if weak.is_empty() {
            "none".to_string()
        } else {
            weak.join(", ")
        };

        format!(
            "You are an expert prompt engineer. Rewrite the prompt below so a language model \
            will produce a more useful, specific and well-structured answer.\n\
            \n\
            Prompt analysis:\n\
            - Intent: {:?} (requested format: {:?})\n\
            - Domain: {:?}, tone: {:?}, audience: {:?}, complexity: {:?}\n\
            - Quality level: {}\n\
            - Weak areas: {}\n\
            \n\
            Rules:\n\
            - Keep the user's goal and every concrete detail they gave\n\
            - Strengthen the weak areas listed above\n\
            - Respond with ONLY the rewritten prompt, no preamble, quotes or explanations\n\
            \n\
            Original prompt:\n\
            {}",
            analysis.intent.kind,
            analysis.intent.format,
            analysis.context.domain,
            analysis.context.tone,
            analysis.context.audience,
            analysis.context.complexity,
            analysis.quality,
            weak,
            self.original_text
        )
    }
}

/// Trait for remote rewriters (e.g. Gemini)
///
/// Implementations perform exactly one call against one model. Choosing the
/// next model on failure is the caller's job, driven by
/// [`crate::Error::is_model_unavailable`].
#[async_trait]
pub trait RewriteProvider: Send + Sync {
    /// Ask `model_id` to rewrite the request's prompt
    async fn rewrite(&self, request: &RewriteRequest, model_id: &str) -> Result<GenerationResult>;

    /// Human-readable provider name, for logs
    fn name(&self) -> &str;
}
