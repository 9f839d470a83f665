//! Machine-readable report for `--json`

use serde::Serialize;

use promptsmith_core::{Analysis, Error, Result, RewriteResult};

/// Analysis of one prompt plus its rewrite, when one was requested
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub prompt: &'a str,
    pub analysis: &'a Analysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<&'a RewriteResult>,
}

impl<'a> Report<'a> {
    pub fn new(
        prompt: &'a str,
        analysis: &'a Analysis,
        rewrite: Option<&'a RewriteResult>,
    ) -> Self {
        Self {
            prompt,
            analysis,
            rewrite,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
