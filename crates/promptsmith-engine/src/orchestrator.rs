//! Optimization orchestrator
//!
//! Drives `AttemptRemote -> AttemptLocal -> Done`. The remote attempt walks
//! the configured model list, moving on only when a model is unavailable;
//! any other failure, a timeout, a panic, an empty reply or a reply that
//! merely echoes the prompt falls through to the local rule pipeline.
//! `optimize` therefore never fails.

use futures::FutureExt;
use promptsmith_core::{
    Analysis, Error, GenerationResult, OptimizerConfig, Provenance, Result, RewriteProvider,
    RewriteRequest, RewriteResult,
};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::pipeline::RewritePipeline;
use crate::retry::{self, ModelFallback, RetryDecision};
use crate::sanitize::{is_near_duplicate, sanitize_response};

enum OptimizeState {
    AttemptRemote,
    AttemptLocal,
    Done(RewriteResult),
}

/// Rewrites prompts, preferring a remote provider when one is configured
pub struct Optimizer {
    config: OptimizerConfig,
    provider: Option<Arc<dyn RewriteProvider>>,
    pipeline: RewritePipeline,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            config,
            provider: None,
            pipeline: RewritePipeline::standard(),
        }
    }

    /// Optimizer that only ever uses the local rule pipeline
    pub fn local() -> Self {
        Self::new(OptimizerConfig::local_only())
    }

    pub fn with_provider(mut self, provider: Arc<dyn RewriteProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_pipeline(mut self, pipeline: RewritePipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Whether `optimize` will try the remote provider at all
    pub fn remote_available(&self) -> bool {
        self.provider.is_some() && self.config.remote_ready()
    }

    /// Rewrite `text`; the result always differs from it
    pub async fn optimize(&self, text: &str, analysis: &Analysis) -> RewriteResult {
        let mut state = if self.remote_available() {
            OptimizeState::AttemptRemote
        } else {
            debug!(
                remote_enabled = self.config.remote_enabled,
                has_provider = self.provider.is_some(),
                "Remote optimization not configured; using local rules"
            );
            OptimizeState::AttemptLocal
        };

        loop {
            state = match state {
                OptimizeState::AttemptRemote => match self.attempt_remote(text, analysis).await {
                    Some(result) => OptimizeState::Done(result),
                    None => OptimizeState::AttemptLocal,
                },
                OptimizeState::AttemptLocal => {
                    OptimizeState::Done(self.local_rewrite(text, analysis))
                }
                OptimizeState::Done(result) => return result,
            };
        }
    }

    /// Rewrite with the local rule pipeline only
    pub fn local_rewrite(&self, text: &str, analysis: &Analysis) -> RewriteResult {
        let rewritten = self.pipeline.run(text, analysis);
        RewriteResult::new(text, rewritten, Provenance::LocalRules, None)
    }

    /// One remote attempt across the model list; `None` means fall back
    async fn attempt_remote(&self, text: &str, analysis: &Analysis) -> Option<RewriteResult> {
        let provider = self.provider.as_ref()?;
        let request = RewriteRequest::new(text, analysis.clone());

        let outcome = AssertUnwindSafe(self.try_models(provider.as_ref(), &request))
            .catch_unwind()
            .await;

        let generation = match outcome {
            Ok(Ok(generation)) => generation,
            Ok(Err(e)) => {
                warn!(provider = provider.name(), error = %e, "Remote rewrite failed; using local rules");
                return None;
            }
            Err(_) => {
                warn!(provider = provider.name(), "Remote rewrite panicked; using local rules");
                return None;
            }
        };

        let Some(cleaned) = sanitize_response(&generation.text) else {
            warn!(model = %generation.model_id, "Remote reply was empty after sanitization");
            return None;
        };

        if is_near_duplicate(&cleaned, text) {
            info!(model = %generation.model_id, "Remote reply did not change the prompt; using local rules");
            return None;
        }

        info!(model = %generation.model_id, "Prompt rewritten remotely");
        Some(RewriteResult::new(
            text,
            cleaned,
            Provenance::Remote,
            Some(generation.model_id),
        ))
    }

    async fn try_models(
        &self,
        provider: &dyn RewriteProvider,
        request: &RewriteRequest,
    ) -> Result<GenerationResult> {
        let mut fallback = ModelFallback::new(&self.config.models);
        let mut last_error = None;

        while let Some(model) = fallback.current() {
            debug!(model, provider = provider.name(), "Requesting remote rewrite");

            let attempt = timeout(self.config.timeout, provider.rewrite(request, model));
            let result = match attempt.await {
                Ok(result) => result,
                Err(_) => Err(Error::Timeout(format!(
                    "{} did not answer within {}s",
                    model,
                    self.config.timeout.as_secs_f32()
                ))),
            };

            match result {
                Ok(generation) => return Ok(generation),
                Err(e) => match retry::classify(&e) {
                    RetryDecision::NextModel => {
                        info!(model, error = %e, "Model unavailable; trying next model");
                        last_error = Some(e);
                        fallback.advance();
                    }
                    RetryDecision::Abort => return Err(e),
                },
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Configuration("no models configured".to_string())))
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::local()
    }
}
