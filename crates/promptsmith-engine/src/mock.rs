//! Scripted rewrite provider for exercising the orchestrator offline

use async_trait::async_trait;
use promptsmith_core::{Error, GenerationResult, Result, RewriteProvider, RewriteRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// How a scripted model answers
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    /// Fails with `Error::ModelUnavailable`
    Unavailable,
    /// Fails with `Error::RateLimited`
    RateLimited,
    /// Fails with `Error::Network`
    NetworkError,
    /// Panics inside the call
    Panic,
    /// Sleeps before answering with the given text
    Slow(Duration, String),
}

/// Provider whose replies are scripted per model id
///
/// Models without a script answer `Unavailable`. Every call is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    replies: Arc<Mutex<HashMap<String, MockReply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the reply for one model
    pub fn with_reply(self, model_id: impl Into<String>, reply: MockReply) -> Self {
        lock(&self.replies).insert(model_id.into(), reply);
        self
    }

    /// Model ids in the order they were called
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // a scripted panic may poison the lock; the data is still usable
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl RewriteProvider for MockProvider {
    async fn rewrite(&self, _request: &RewriteRequest, model_id: &str) -> Result<GenerationResult> {
        lock(&self.calls).push(model_id.to_string());
        let reply = lock(&self.replies)
            .get(model_id)
            .cloned()
            .unwrap_or(MockReply::Unavailable);

        let text = match reply {
            MockReply::Text(text) => text,
            MockReply::Unavailable => {
                return Err(Error::ModelUnavailable(format!("model {} not found", model_id)));
            }
            MockReply::RateLimited => {
                return Err(Error::RateLimited(format!("quota exhausted for {}", model_id)));
            }
            MockReply::NetworkError => {
                return Err(Error::Network("connection reset".to_string()));
            }
            MockReply::Panic => panic!("scripted panic from {}", model_id),
            MockReply::Slow(delay, text) => {
                tokio::time::sleep(delay).await;
                text
            }
        };

        Ok(GenerationResult {
            text,
            model_id: model_id.to_string(),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
