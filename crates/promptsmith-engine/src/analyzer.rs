use promptsmith_core::Analysis;
use tracing::debug;

use crate::classifier::Classifier;
use crate::features::Features;
use crate::{grader, insights, metrics};

/// Scores, classifies and grades prompts
///
/// Analysis is total: any string, including an empty one, produces a
/// complete `Analysis`.
pub struct PromptAnalyzer {
    classifier: Classifier,
}

impl PromptAnalyzer {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
        }
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let features = Features::extract(text);
        let metrics = metrics::compute(&features);
        let intent = self.classifier.classify_intent(&features);
        let context = self.classifier.classify_context(&features);
        let quality = grader::grade(&metrics);

        debug!(
            words = features.word_count,
            quality = %quality,
            intent = ?intent.kind,
            domain = ?context.domain,
            "Analyzed prompt"
        );

        Analysis {
            insights: insights::generate_insights(&metrics),
            suggestions: insights::generate_suggestions(&metrics),
            metrics,
            intent,
            context,
            quality,
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}

impl Default for PromptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze one prompt with a fresh analyzer
pub fn analyze(text: &str) -> Analysis {
    PromptAnalyzer::new().analyze(text)
}
