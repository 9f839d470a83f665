//! Core traits and types for Promptsmith
//!
//! This crate defines the vocabulary shared by the analysis engine, the remote
//! rewrite providers and the CLI: metric sets, classifications, quality levels,
//! rewrite results, the `RewriteProvider` capability and the optimizer
//! configuration.

pub mod config;
pub mod error;
pub mod llm;
pub mod types;

pub use config::OptimizerConfig;
pub use error::{Error, Result};
pub use llm::{GenerationResult, RewriteProvider, RewriteRequest};
pub use types::*;
