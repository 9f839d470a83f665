//! Common types used across the Promptsmith system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the twelve prompt metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricName {
    Clarity,
    Specificity,
    Structure,
    Context,
    Intent,
    Completeness,
    Creativity,
    Precision,
    Engagement,
    Adaptability,
    TechnicalQuality,
    OutputPotential,
}

impl MetricName {
    /// Every metric, in reporting order
    pub const ALL: [MetricName; 12] = [
        MetricName::Clarity,
        MetricName::Specificity,
        MetricName::Structure,
        MetricName::Context,
        MetricName::Intent,
        MetricName::Completeness,
        MetricName::Creativity,
        MetricName::Precision,
        MetricName::Engagement,
        MetricName::Adaptability,
        MetricName::TechnicalQuality,
        MetricName::OutputPotential,
    ];

    /// The subset used for grading; the rest are advisory only
    pub const CORE: [MetricName; 6] = [
        MetricName::Clarity,
        MetricName::Specificity,
        MetricName::Structure,
        MetricName::Context,
        MetricName::Intent,
        MetricName::Completeness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::Clarity => "clarity",
            MetricName::Specificity => "specificity",
            MetricName::Structure => "structure",
            MetricName::Context => "context",
            MetricName::Intent => "intent",
            MetricName::Completeness => "completeness",
            MetricName::Creativity => "creativity",
            MetricName::Precision => "precision",
            MetricName::Engagement => "engagement",
            MetricName::Adaptability => "adaptability",
            MetricName::TechnicalQuality => "technicalQuality",
            MetricName::OutputPotential => "outputPotential",
        }
    }

    pub fn is_core(&self) -> bool {
        Self::CORE.contains(self)
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Twelve independent heuristic scores, each in `0..=100`
///
/// Every metric is a named field, so a set can never be missing a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSet {
    pub clarity: u8,
    pub specificity: u8,
    pub structure: u8,
    pub context: u8,
    pub intent: u8,
    pub completeness: u8,
    pub creativity: u8,
    pub precision: u8,
    pub engagement: u8,
    pub adaptability: u8,
    pub technical_quality: u8,
    pub output_potential: u8,
}

impl MetricSet {
    pub fn get(&self, name: MetricName) -> u8 {
        match name {
            MetricName::Clarity => self.clarity,
            MetricName::Specificity => self.specificity,
            MetricName::Structure => self.structure,
            MetricName::Context => self.context,
            MetricName::Intent => self.intent,
            MetricName::Completeness => self.completeness,
            MetricName::Creativity => self.creativity,
            MetricName::Precision => self.precision,
            MetricName::Engagement => self.engagement,
            MetricName::Adaptability => self.adaptability,
            MetricName::TechnicalQuality => self.technical_quality,
            MetricName::OutputPotential => self.output_potential,
        }
    }

    /// Set a metric, clamping the value to 100
    pub fn set(&mut self, name: MetricName, value: u8) {
        let value = value.min(100);
        match name {
            MetricName::Clarity => self.clarity = value,
            MetricName::Specificity => self.specificity = value,
            MetricName::Structure => self.structure = value,
            MetricName::Context => self.context = value,
            MetricName::Intent => self.intent = value,
            MetricName::Completeness => self.completeness = value,
            MetricName::Creativity => self.creativity = value,
            MetricName::Precision => self.precision = value,
            MetricName::Engagement => self.engagement = value,
            MetricName::Adaptability => self.adaptability = value,
            MetricName::TechnicalQuality => self.technical_quality = value,
            MetricName::OutputPotential => self.output_potential = value,
        }
    }

    /// Iterate over `(name, score)` pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (MetricName, u8)> + '_ {
        MetricName::ALL.iter().map(move |name| (*name, self.get(*name)))
    }

    /// Mean of the six core metrics, in `0.0..=100.0`
    pub fn core_average(&self) -> f64 {
        Self::mean(MetricName::CORE.iter().map(|name| self.get(*name)))
    }

    /// Mean of all twelve metrics, in `0.0..=100.0`
    pub fn overall_average(&self) -> f64 {
        Self::mean(MetricName::ALL.iter().map(|name| self.get(*name)))
    }

    fn mean(scores: impl Iterator<Item = u8>) -> f64 {
        let (sum, count) = scores.fold((0u32, 0u32), |(sum, count), score| {
            (sum + u32::from(score), count + 1)
        });
        if count == 0 {
            0.0
        } else {
            f64::from(sum) / f64::from(count)
        }
    }
}

/// Task type of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentType {
    Creation,
    Explanation,
    Comparison,
    Instruction,
    Analysis,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentSpecificity {
    Low,
    High,
}

/// Output shape the prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    None,
    List,
    Structured,
    Narrative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(rename = "type")]
    pub kind: IntentType,
    pub specificity: IntentSpecificity,
    pub format: OutputFormat,
}

impl Default for Intent {
    fn default() -> Self {
        Self {
            kind: IntentType::General,
            specificity: IntentSpecificity::Low,
            format: OutputFormat::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    General,
    Business,
    Technical,
    Creative,
    Academic,
    Travel,
    Entertainment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Professional,
    Casual,
    Formal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    General,
    Beginner,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Domain, tone, audience and complexity of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub domain: Domain,
    pub tone: Tone,
    pub audience: Audience,
    pub complexity: Complexity,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            domain: Domain::General,
            tone: Tone::Neutral,
            audience: Audience::General,
            complexity: Complexity::Medium,
        }
    }
}

/// Ordinal grade derived from the core metric average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Basic,
    Developing,
    Good,
    Excellent,
    Masterful,
}

impl QualityLevel {
    /// Map an average score in `0..=100` onto the five-level scale
    pub fn from_average(average: f64) -> Self {
        if average < 30.0 {
            QualityLevel::Basic
        } else if average < 50.0 {
            QualityLevel::Developing
        } else if average < 70.0 {
            QualityLevel::Good
        } else if average < 85.0 {
            QualityLevel::Excellent
        } else {
            QualityLevel::Masterful
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Basic => "basic",
            QualityLevel::Developing => "developing",
            QualityLevel::Good => "good",
            QualityLevel::Excellent => "excellent",
            QualityLevel::Masterful => "masterful",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    General,
    Targeted,
}

/// A human-readable diagnostic about a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metric: Option<MetricName>,
    pub icon: String,
    pub message: String,
}

/// Everything the engine knows about one prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub metrics: MetricSet,
    pub intent: Intent,
    pub context: Context,
    pub quality: QualityLevel,
    pub insights: Vec<Insight>,
    pub suggestions: Vec<String>,
}

impl Analysis {
    /// Core metrics scoring below `threshold`, in reporting order
    pub fn weak_core_metrics(&self, threshold: u8) -> Vec<MetricName> {
        MetricName::CORE
            .iter()
            .copied()
            .filter(|name| self.metrics.get(*name) < threshold)
            .collect()
    }
}

/// Where a rewrite came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    Remote,
    LocalRules,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Remote => "remote",
            Provenance::LocalRules => "local-rules",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final output of an optimization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteResult {
    pub text: String,
    pub provenance: Provenance,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model_id: Option<String>,
}

impl RewriteResult {
    /// Build a result, deriving `changed` from the original text
    pub fn new(
        original: &str,
        text: String,
        provenance: Provenance,
        model_id: Option<String>,
    ) -> Self {
        let changed = text != original;
        Self {
            text,
            provenance,
            changed,
            model_id,
        }
    }
}
