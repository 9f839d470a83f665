//! Local rule-based rewrite pipeline
//!
//! A rewrite is a left fold of pure `(text, Analysis) -> text` stages over
//! the original prompt. The result is compared with the original exactly
//! once, after the fold; an unchanged result is replaced by a topic-aware
//! fallback template, so `run(x) != x` for every input.

use promptsmith_core::{Analysis, Audience, Domain, IntentType, OutputFormat};
use tracing::{debug, trace};

use crate::keywords;
use crate::templates;

/// One rewrite stage
pub type Stage = fn(&str, &Analysis) -> String;

/// Appended when even the fallback template equals the original
const LAST_RESORT_SENTENCE: &str = "Be specific and thorough in your response.";

/// Metric gates for the improvement stage
const GATE: u8 = 50;
const CREATIVE_GATE: u8 = 60;

const CONTEXT_ASK: &str =
    "Briefly state the purpose and intended audience you assume before answering.";
const INTENT_ASK: &str = "The goal is a complete answer that can be used directly.";
const SPECIFICITY_ASK: &str =
    "Be specific: include concrete details, a target length (for example, 300-500 words), and the expected format.";
const STRUCTURE_ASK: &str = "Organize the response into clear sections with headings.";
const COMPLETENESS_ASK: &str = "Cover all key aspects thoroughly and include relevant examples.";
const PRECISION_ASK: &str = "Prefer exact names, figures and dates over general statements.";
const ADAPTABILITY_ASK: &str =
    "Where the best answer depends on the situation, note the main alternatives.";
const TECHNICAL_ASK: &str = "Name the language, versions and constraints the solution assumes.";
const OUTPUT_ASK: &str = "End with a short summary of the key points.";
const CREATIVITY_ASK: &str = "Take an innovative, original angle rather than a generic approach.";
const ENGAGEMENT_ASK: &str = "Make it engaging, with a memorable opening hook.";

/// Leading request already phrased politely
const POLITE_OPENERS: [&str; 5] = ["please", "could you", "can you", "would you", "kindly"];

/// Prefix used when the prompt does not open with a verb
const REQUEST_PREFIX: &str = "Please help with this request:";

/// Ordered list of named stages
#[derive(Clone)]
pub struct RewritePipeline {
    stages: Vec<(&'static str, Stage)>,
}

impl RewritePipeline {
    /// The four standard stages: metric gates, domain, intent, audience and format
    pub fn standard() -> Self {
        Self::with_stages(vec![
            ("metric-gates", improve_weak_metrics as Stage),
            ("domain", inject_domain),
            ("intent", inject_intent),
            ("audience-format", inject_audience_and_format),
        ])
    }

    pub fn with_stages(stages: Vec<(&'static str, Stage)>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|(name, _)| *name).collect()
    }

    /// Rewrite `original`; the result always differs from it
    pub fn run(&self, original: &str, analysis: &Analysis) -> String {
        let rewritten = self
            .stages
            .iter()
            .fold(original.to_string(), |text, (name, stage)| {
                let next = stage(&text, analysis);
                if next != text {
                    trace!(stage = name, "Rewrite stage applied");
                }
                next
            });

        if rewritten != original {
            return rewritten;
        }

        debug!("Rewrite stages left the prompt unchanged; using fallback template");
        backstop(original, templates::fallback_template(original))
    }
}

impl Default for RewritePipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// The fallback template, extended when it happens to equal the original
fn backstop(original: &str, template: String) -> String {
    if template != original {
        template
    } else {
        append_sentence(&template, LAST_RESORT_SENTENCE)
    }
}

/// Stage 1: targeted insertions for metrics below their gate
pub fn improve_weak_metrics(text: &str, analysis: &Analysis) -> String {
    let metrics = &analysis.metrics;
    let domain = analysis.context.domain;
    let intent = analysis.intent.kind;
    let mut out = text.to_string();

    if metrics.clarity < GATE {
        out = clarify(&out);
    }

    let asks = [
        (metrics.context < GATE, CONTEXT_ASK),
        (metrics.intent < GATE, INTENT_ASK),
        (metrics.specificity < GATE, SPECIFICITY_ASK),
        (metrics.structure < GATE, STRUCTURE_ASK),
        (metrics.completeness < GATE, COMPLETENESS_ASK),
        (metrics.precision < GATE && domain != Domain::Creative, PRECISION_ASK),
        (
            metrics.adaptability < GATE
                && matches!(
                    intent,
                    IntentType::Instruction | IntentType::Comparison | IntentType::Analysis
                ),
            ADAPTABILITY_ASK,
        ),
        (metrics.technical_quality < GATE && domain == Domain::Technical, TECHNICAL_ASK),
        (metrics.output_potential < GATE, OUTPUT_ASK),
        (metrics.creativity < CREATIVE_GATE && intent == IntentType::Creation, CREATIVITY_ASK),
        (
            metrics.engagement < CREATIVE_GATE
                && matches!(domain, Domain::Creative | Domain::Entertainment),
            ENGAGEMENT_ASK,
        ),
    ];

    for (weak, ask) in asks {
        if weak {
            out = append_sentence(&out, ask);
        }
    }
    out
}

/// Stage 2: one closing sentence per domain
pub fn inject_domain(text: &str, analysis: &Analysis) -> String {
    let sentence = match analysis.context.domain {
        Domain::Business => {
            "Frame the answer for a business audience, focusing on practical impact, costs, and measurable outcomes."
        }
        Domain::Technical => {
            "Include technical details, best practices, and code examples where relevant."
        }
        Domain::Academic => {
            "Support the explanation with evidence, credible sources, and precise terminology."
        }
        Domain::Travel => {
            "Include specific destinations, the best time to visit, estimated budgets, and must-do activities."
        }
        Domain::Entertainment => {
            "Include specific titles, a short reason for each recommendation, and where to find them."
        }
        Domain::General | Domain::Creative => return text.to_string(),
    };
    append_sentence(text, sentence)
}

/// Stage 3: one structured ask per intent
pub fn inject_intent(text: &str, analysis: &Analysis) -> String {
    let block = match analysis.intent.kind {
        IntentType::Creation => {
            "Please provide:\n- A clear structure with an engaging opening\n- Specific, concrete details\n- A strong conclusion"
        }
        IntentType::Explanation => {
            "Please include:\n- A clear definition\n- Practical examples\n- Common misconceptions"
        }
        IntentType::Comparison => {
            "Please cover:\n- Key differences\n- Pros and cons of each option\n- A final recommendation"
        }
        IntentType::Instruction => {
            "Please provide:\n- Prerequisites\n- Numbered step-by-step instructions\n- Tips for avoiding common mistakes"
        }
        IntentType::Analysis | IntentType::General => return text.to_string(),
    };
    append_block(text, block)
}

/// Stage 4: audience level and output format guidance
pub fn inject_audience_and_format(text: &str, analysis: &Analysis) -> String {
    let audience = match analysis.context.audience {
        Audience::Beginner => {
            Some("Explain it in simple terms suitable for a beginner, avoiding jargon.")
        }
        Audience::Expert => Some("Assume expert-level knowledge and go into technical depth."),
        Audience::General => None,
    };
    let format = match analysis.intent.format {
        OutputFormat::List => Some("Format the response as a clear bulleted list."),
        OutputFormat::Structured => Some("Use clear headings and a structured layout."),
        OutputFormat::Narrative => Some("Write it as a flowing narrative."),
        OutputFormat::None => None,
    };

    let guidance: Vec<&str> = audience.into_iter().chain(format).collect();
    if guidance.is_empty() {
        return text.to_string();
    }
    append_block(text, &guidance.join(" "))
}

/// Polite imperative prefix, and a split of single-sentence "X and Y" requests
fn clarify(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return text.to_string();
    }

    let lower = trimmed.to_lowercase();
    let body = if POLITE_OPENERS.iter().any(|opener| lower.starts_with(opener)) {
        trimmed.to_string()
    } else if opens_with_verb(trimmed) {
        format!("Please {}", lowercase_leading_word(trimmed))
    } else {
        format!("{} {}", REQUEST_PREFIX, trimmed)
    };

    let single_sentence = !body
        .trim_end_matches(['.', '!', '?'])
        .contains(['.', '!', '?']);

    if single_sentence {
        if let Some((left, right)) = body.split_once(" and ") {
            let right = right.trim().trim_end_matches(['.', '!', '?']);
            if !left.trim().is_empty() && !right.is_empty() {
                return format!("{}. Also address {}.", left.trim_end(), right);
            }
        }
    }

    ensure_terminal_punctuation(&body)
}

/// Whether the first word is a known imperative verb
fn opens_with_verb(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .is_some_and(|word| keywords::ACTION_VERBS.is_match(word))
}

/// Lower-case a leading capitalized word, leaving "I" and acronyms alone
fn lowercase_leading_word(text: &str) -> String {
    let first_word = text.split_whitespace().next().unwrap_or_default();
    let mut chars = first_word.chars();
    let capitalized = match chars.next() {
        Some(first) => first.is_uppercase() && chars.clone().all(|c| !c.is_uppercase()),
        None => false,
    };

    if !capitalized || first_word == "I" || first_word.starts_with("I'") {
        return text.to_string();
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn ensure_terminal_punctuation(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.ends_with(['.', '!', '?', ':']) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

/// Append a sentence; blank text stays blank
fn append_sentence(text: &str, sentence: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    format!("{} {}", ensure_terminal_punctuation(text), sentence)
}

/// Append a paragraph-separated block; blank text stays blank
fn append_block(text: &str, block: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    format!("{}\n\n{}", text.trim_end(), block)
}
