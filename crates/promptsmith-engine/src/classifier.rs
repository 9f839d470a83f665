//! Intent and context classification for prompts
//!
//! Every field is decided by an ordered rule table evaluated top to bottom:
//! the first rule whose keywords occur wins, otherwise the table default
//! applies. One prompt therefore gets exactly one intent even when it asks
//! for several things at once.

use once_cell::sync::Lazy;
use promptsmith_core::{
    Audience, Complexity, Context, Domain, Intent, IntentSpecificity, IntentType, OutputFormat,
    Tone,
};

use crate::features::Features;
use crate::keywords::{self, KeywordSet};

/// One `(keywords, result)` entry of a rule table
pub struct Rule<T> {
    pub label: &'static str,
    pub keywords: &'static Lazy<KeywordSet>,
    pub value: T,
}

impl<T> Rule<T> {
    pub fn new(label: &'static str, keywords: &'static Lazy<KeywordSet>, value: T) -> Self {
        Self {
            label,
            keywords,
            value,
        }
    }
}

/// Ordered rule list with a default result
pub struct RuleTable<T> {
    rules: Vec<Rule<T>>,
    default: T,
}

impl<T: Copy> RuleTable<T> {
    pub fn new(rules: Vec<Rule<T>>, default: T) -> Self {
        Self { rules, default }
    }

    /// The first rule whose keywords occur in `text`
    pub fn matching_rule(&self, text: &str) -> Option<&Rule<T>> {
        self.rules.iter().find(|rule| rule.keywords.is_match(text))
    }

    pub fn classify(&self, text: &str) -> T {
        self.matching_rule(text)
            .map(|rule| rule.value)
            .unwrap_or(self.default)
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

/// Word count above which an intent counts as highly specific
const HIGH_SPECIFICITY_WORDS: usize = 15;

/// Intent and context classifier
pub struct Classifier {
    intent_rules: RuleTable<IntentType>,
    format_rules: RuleTable<OutputFormat>,
    domain_rules: RuleTable<Domain>,
    tone_rules: RuleTable<Option<Tone>>,
    audience_rules: RuleTable<Audience>,
}

impl Classifier {
    pub fn new() -> Self {
        let intent_rules = RuleTable::new(
            vec![
                Rule::new("comparison", &keywords::INTENT_COMPARISON, IntentType::Comparison),
                Rule::new("explanation", &keywords::INTENT_EXPLANATION, IntentType::Explanation),
                Rule::new("instruction", &keywords::INTENT_INSTRUCTION, IntentType::Instruction),
                Rule::new("creation", &keywords::INTENT_CREATION, IntentType::Creation),
                Rule::new("analysis", &keywords::INTENT_ANALYSIS, IntentType::Analysis),
            ],
            IntentType::General,
        );

        let format_rules = RuleTable::new(
            vec![
                Rule::new("list", &keywords::FORMAT_LIST, OutputFormat::List),
                Rule::new("structured", &keywords::FORMAT_STRUCTURED, OutputFormat::Structured),
                Rule::new("narrative", &keywords::FORMAT_NARRATIVE, OutputFormat::Narrative),
            ],
            OutputFormat::None,
        );

        let domain_rules = RuleTable::new(
            vec![
                Rule::new("business", &keywords::DOMAIN_BUSINESS, Domain::Business),
                Rule::new("technical", &keywords::DOMAIN_TECHNICAL, Domain::Technical),
                Rule::new("creative", &keywords::DOMAIN_CREATIVE, Domain::Creative),
                Rule::new("academic", &keywords::DOMAIN_ACADEMIC, Domain::Academic),
                Rule::new("travel", &keywords::DOMAIN_TRAVEL, Domain::Travel),
                Rule::new("entertainment", &keywords::DOMAIN_ENTERTAINMENT, Domain::Entertainment),
            ],
            Domain::General,
        );

        // Explicit tone words; `None` leaves the domain default in place
        let tone_rules = RuleTable::new(
            vec![
                Rule::new("formal", &keywords::TONE_FORMAL, Some(Tone::Formal)),
                Rule::new("professional", &keywords::TONE_PROFESSIONAL, Some(Tone::Professional)),
                Rule::new("casual", &keywords::TONE_CASUAL, Some(Tone::Casual)),
            ],
            None,
        );

        let audience_rules = RuleTable::new(
            vec![
                Rule::new("beginner", &keywords::AUDIENCE_BEGINNER, Audience::Beginner),
                Rule::new("expert", &keywords::AUDIENCE_EXPERT, Audience::Expert),
            ],
            Audience::General,
        );

        Self {
            intent_rules,
            format_rules,
            domain_rules,
            tone_rules,
            audience_rules,
        }
    }

    /// Classify the task type, specificity and requested format
    pub fn classify_intent(&self, features: &Features) -> Intent {
        let lower = &features.lower;

        let specificity = if features.word_count > HIGH_SPECIFICITY_WORDS
            || keywords::SPECIFICITY.is_match(lower)
        {
            IntentSpecificity::High
        } else {
            IntentSpecificity::Low
        };

        Intent {
            kind: self.intent_rules.classify(lower),
            specificity,
            format: self.format_rules.classify(lower),
        }
    }

    /// Classify domain, tone, audience and complexity
    ///
    /// The domain sets coupled tone and complexity defaults; explicit tone
    /// words and audience words are applied afterwards and may override them.
    pub fn classify_context(&self, features: &Features) -> Context {
        let lower = &features.lower;
        let domain = self.domain_rules.classify(lower);

        let (default_tone, default_complexity) = domain_defaults(domain);
        let mut complexity =
            default_complexity.unwrap_or_else(|| complexity_from_length(features.word_count));

        let tone = self
            .tone_rules
            .classify(lower)
            .or(default_tone)
            .unwrap_or(Tone::Neutral);

        let audience = self.audience_rules.classify(lower);
        match audience {
            Audience::Beginner => complexity = Complexity::Low,
            Audience::Expert => complexity = Complexity::High,
            Audience::General => {}
        }

        Context {
            domain,
            tone,
            audience,
            complexity,
        }
    }

    /// Label of the intent rule that fired, or `None` for the default
    pub fn explain_intent(&self, text: &str) -> Option<&'static str> {
        self.intent_rules
            .matching_rule(&text.to_lowercase())
            .map(|rule| rule.label)
    }

    /// Label of the domain rule that fired, or `None` for the default
    pub fn explain_domain(&self, text: &str) -> Option<&'static str> {
        self.domain_rules
            .matching_rule(&text.to_lowercase())
            .map(|rule| rule.label)
    }

    pub fn intent_rules(&self) -> &RuleTable<IntentType> {
        &self.intent_rules
    }

    pub fn domain_rules(&self) -> &RuleTable<Domain> {
        &self.domain_rules
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Tone and complexity implied by a domain
fn domain_defaults(domain: Domain) -> (Option<Tone>, Option<Complexity>) {
    match domain {
        Domain::Business => (Some(Tone::Professional), None),
        Domain::Technical => (None, Some(Complexity::High)),
        Domain::Academic => (Some(Tone::Formal), Some(Complexity::High)),
        Domain::Creative => (Some(Tone::Casual), None),
        Domain::Travel | Domain::Entertainment => (Some(Tone::Casual), Some(Complexity::Low)),
        Domain::General => (None, None),
    }
}

fn complexity_from_length(word_count: usize) -> Complexity {
    if word_count < 10 {
        Complexity::Low
    } else if word_count <= 30 {
        Complexity::Medium
    } else {
        Complexity::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_of(text: &str) -> Intent {
        Classifier::new().classify_intent(&Features::extract(text))
    }

    fn context_of(text: &str) -> Context {
        Classifier::new().classify_context(&Features::extract(text))
    }

    #[test]
    fn test_intent_rules_fire_in_priority_order() {
        assert_eq!(intent_of("compare rust and go").kind, IntentType::Comparison);
        // comparison outranks explanation
        assert_eq!(
            intent_of("explain the difference between tcp and udp").kind,
            IntentType::Comparison
        );
        assert_eq!(intent_of("explain photosynthesis").kind, IntentType::Explanation);
        // explanation outranks creation
        assert_eq!(intent_of("why do people write poems").kind, IntentType::Explanation);
        assert_eq!(intent_of("how to bake bread").kind, IntentType::Instruction);
        assert_eq!(intent_of("write about AI").kind, IntentType::Creation);
        assert_eq!(intent_of("give me beach trip ideas").kind, IntentType::Creation);
        assert_eq!(intent_of("review my cover letter").kind, IntentType::Analysis);
        assert_eq!(intent_of("hello there").kind, IntentType::General);
        assert_eq!(intent_of("").kind, IntentType::General);
    }

    #[test]
    fn test_intent_specificity_and_format() {
        let intent = intent_of("list five specific tips");
        assert_eq!(intent.specificity, IntentSpecificity::High);
        assert_eq!(intent.format, OutputFormat::List);

        let intent = intent_of("make a table of planets");
        assert_eq!(intent.specificity, IntentSpecificity::Low);
        assert_eq!(intent.format, OutputFormat::Structured);

        assert_eq!(intent_of("write a short story").format, OutputFormat::Narrative);
        assert_eq!(intent_of("write about AI").format, OutputFormat::None);
    }

    #[test]
    fn test_first_matching_domain_wins() {
        // business is checked before technical
        assert_eq!(
            context_of("marketing strategy for a software startup").domain,
            Domain::Business
        );
        assert_eq!(context_of("debug this python code").domain, Domain::Technical);
        assert_eq!(context_of("give me beach trip ideas").domain, Domain::Travel);
        assert_eq!(context_of("recommend a movie for tonight").domain, Domain::Entertainment);
        assert_eq!(context_of("hello there").domain, Domain::General);
    }

    #[test]
    fn test_everyday_verbs_are_not_entertainment() {
        for text in [
            "show me how to bake bread",
            "book an appointment with my dentist",
            "draft a game plan for the quarter",
            "watch out for errors in this letter",
        ] {
            assert_ne!(context_of(text).domain, Domain::Entertainment, "{text}");
        }

        let context = context_of("show me how to bake bread");
        assert_eq!(context.domain, Domain::General);
        assert_eq!(context.tone, Tone::Neutral);

        assert_eq!(context_of("suggest a tv show to binge").domain, Domain::Entertainment);
        assert_eq!(context_of("fun board games for four").domain, Domain::Entertainment);
    }

    #[test]
    fn test_domain_sets_coupled_defaults() {
        let business = context_of("improve our sales pitch");
        assert_eq!(business.tone, Tone::Professional);

        let technical = context_of("optimize this database");
        assert_eq!(technical.complexity, Complexity::High);
        assert_eq!(technical.tone, Tone::Neutral);
    }

    #[test]
    fn test_explicit_tone_overrides_domain_default() {
        let context = context_of("write a casual note about our company revenue");
        assert_eq!(context.domain, Domain::Business);
        assert_eq!(context.tone, Tone::Casual);
    }

    #[test]
    fn test_audience_overrides_complexity() {
        let context =
            context_of("Explain the Big Bang theory to a beginner with specific examples");
        assert_eq!(context.audience, Audience::Beginner);
        assert_eq!(context.domain, Domain::Academic);
        assert_eq!(context.tone, Tone::Formal);
        assert_eq!(context.complexity, Complexity::Low);

        let expert = context_of("advanced tips for a hotel booking");
        assert_eq!(expert.domain, Domain::Travel);
        assert_eq!(expert.audience, Audience::Expert);
        assert_eq!(expert.complexity, Complexity::High);
    }

    #[test]
    fn test_complexity_from_length_without_domain() {
        assert_eq!(context_of("hello there").complexity, Complexity::Low);
        let medium = vec!["word"; 20].join(" ");
        assert_eq!(context_of(&medium).complexity, Complexity::Medium);
        let long = vec!["word"; 40].join(" ");
        assert_eq!(context_of(&long).complexity, Complexity::High);
    }

    #[test]
    fn test_rule_labels_are_explainable() {
        let classifier = Classifier::new();
        assert_eq!(classifier.explain_intent("Compare A vs B"), Some("comparison"));
        assert_eq!(classifier.explain_intent("hmm"), None);
        assert_eq!(classifier.explain_domain("Plan my TRIP"), Some("travel"));

        let labels: Vec<_> = classifier.intent_rules().rules().iter().map(|r| r.label).collect();
        assert_eq!(labels, ["comparison", "explanation", "instruction", "creation", "analysis"]);
    }
}
