//! Prompt analysis and optimization engine
//!
//! Local analysis (`analyze`) scores a prompt on twelve metrics, classifies
//! its intent and context, grades it and produces advisory insights. The
//! `Optimizer` rewrites a prompt, trying a remote `RewriteProvider` first and
//! falling back to the deterministic rule pipeline.

pub mod analyzer;
pub mod classifier;
pub mod features;
pub mod grader;
pub mod insights;
pub mod keywords;
pub mod metrics;
pub mod mock;
pub mod orchestrator;
pub mod pipeline;
pub mod retry;
pub mod sanitize;
pub mod templates;


pub use analyzer::{PromptAnalyzer, analyze};
pub use classifier::Classifier;
pub use features::Features;
pub use mock::{MockProvider, MockReply};
pub use orchestrator::Optimizer;
pub use pipeline::RewritePipeline;
pub use sanitize::sanitize_response;
