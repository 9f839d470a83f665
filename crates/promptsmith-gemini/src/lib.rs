//! Gemini integration for Promptsmith
//!
//! This crate provides the Gemini implementation of the `RewriteProvider` trait.

mod client;
mod config;


pub use client::GeminiClient;
pub use config::GeminiConfig;

// Re-export core types for convenience
pub use promptsmith_core::{Error, GenerationResult, Result, RewriteProvider, RewriteRequest};
