//! Primitive features derived from raw prompt text

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:[.,]\d+)?\b").expect("number pattern is valid"));

static PROPER_NOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\b").expect("proper noun pattern is valid"));

static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));

static LIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*•]\s+|\d+[.)]\s+)").expect("list item pattern is valid")
});

/// Read-only view of a prompt used by every scorer and classifier
///
/// Construction never fails; an empty prompt yields zero counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub list_item_count: usize,
    pub has_question_mark: bool,
    pub has_exclamation: bool,
    pub has_period: bool,
    pub has_colon: bool,
    pub number_tokens: usize,
    pub proper_noun_tokens: usize,
    /// First word, lower-cased and stripped of punctuation
    pub first_word: String,
    /// Lower-cased prompt for keyword matching
    pub lower: String,
}

impl Features {
    pub fn extract(text: &str) -> Self {
        let word_count = text.split_whitespace().count();

        let sentence_count = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();

        let paragraph_count = PARAGRAPH_BREAK_RE
            .split(text)
            .filter(|p| !p.trim().is_empty())
            .count();

        let list_item_count = text.lines().filter(|line| LIST_ITEM_RE.is_match(line)).count();

        let first_word = text
            .split_whitespace()
            .next()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .unwrap_or_default();

        Self {
            word_count,
            sentence_count,
            paragraph_count,
            list_item_count,
            has_question_mark: text.contains('?'),
            has_exclamation: text.contains('!'),
            has_period: text.contains('.'),
            has_colon: text.contains(':'),
            number_tokens: NUMBER_RE.find_iter(text).count(),
            proper_noun_tokens: PROPER_NOUN_RE.find_iter(text).count(),
            first_word,
            lower: text.to_lowercase(),
        }
    }

    /// Words per sentence; zero for an empty prompt
    pub fn avg_sentence_length(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.word_count as f64 / self.sentence_count.max(1) as f64
    }

    /// How many of question, exclamation and declarative sentence types appear
    pub fn sentence_type_count(&self) -> usize {
        [self.has_question_mark, self.has_exclamation, self.has_period]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_zero_counts() {
        let features = Features::extract("");
        assert_eq!(features.word_count, 0);
        assert_eq!(features.sentence_count, 0);
        assert_eq!(features.paragraph_count, 0);
        assert_eq!(features.number_tokens, 0);
        assert_eq!(features.first_word, "");
        assert_eq!(features.avg_sentence_length(), 0.0);
    }

    #[test]
    fn test_whitespace_only_text() {
        let features = Features::extract("   \n\n \t ");
        assert_eq!(features.word_count, 0);
        assert_eq!(features.sentence_count, 0);
        assert_eq!(features.paragraph_count, 0);
    }

    #[test]
    fn test_counts_on_realistic_prompt() {
        let text = "Write a 500 word essay about Paris. Include 3 examples!\n\nWhat should it cover?";
        let features = Features::extract(text);

        assert_eq!(features.word_count, 14);
        assert_eq!(features.sentence_count, 3);
        assert_eq!(features.paragraph_count, 2);
        assert_eq!(features.number_tokens, 2);
        // "Write", "Paris", "Include", "What"
        assert_eq!(features.proper_noun_tokens, 4);
        assert!(features.has_question_mark);
        assert!(features.has_exclamation);
        assert!(!features.has_colon);
        assert_eq!(features.first_word, "write");
        assert_eq!(features.sentence_type_count(), 3);
        assert!((features.avg_sentence_length() - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_list_items_are_detected() {
        let text = "Plan my week:\n- gym\n* groceries\n1. call mom\n2) pay rent\nnot a list";
        let features = Features::extract(text);
        assert_eq!(features.list_item_count, 4);
        assert!(features.has_colon);
    }

    #[test]
    fn test_acronyms_are_not_proper_nouns() {
        let features = Features::extract("write about AI and NASA");
        assert_eq!(features.proper_noun_tokens, 0);
    }
}
