//! Model fallback policy for the remote rewriter

use promptsmith_core::Error;

/// What to do after a remote call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// The model is unavailable; try the next one in the list
    NextModel,
    /// Any other failure ends the remote attempt
    Abort,
}

/// Classify a provider error
pub fn classify(error: &Error) -> RetryDecision {
    if error.is_model_unavailable() {
        RetryDecision::NextModel
    } else {
        RetryDecision::Abort
    }
}

/// Cursor over an ordered model list
#[derive(Debug, Clone)]
pub struct ModelFallback<'a> {
    models: &'a [String],
    cursor: usize,
}

impl<'a> ModelFallback<'a> {
    pub fn new(models: &'a [String]) -> Self {
        Self { models, cursor: 0 }
    }

    /// Model to try now, `None` once the list is exhausted
    pub fn current(&self) -> Option<&'a str> {
        self.models.get(self.cursor).map(String::as_str)
    }

    /// Move to the next model and return it
    pub fn advance(&mut self) -> Option<&'a str> {
        if self.cursor < self.models.len() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn attempted(&self) -> usize {
        self.cursor.min(self.models.len())
    }
}
