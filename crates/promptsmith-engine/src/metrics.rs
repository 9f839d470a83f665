//! Metric engine: twelve independent 0-100 prompt scores
//!
//! Each scorer starts from a base in `25..=50` (a short prompt still says
//! something) and applies fixed adjustments for features and keyword lists.
//! Keyword bonuses are counted per distinct word and capped per category.
//! Scorers share no state, so any one of them can be tested in isolation.

use promptsmith_core::MetricSet;

use crate::features::Features;
use crate::keywords::{self, KeywordSet};

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

fn bonus_if(condition: bool, points: i32) -> i32 {
    if condition { points } else { 0 }
}

/// `per_match` points for every distinct keyword found, capped at `cap`
fn keyword_bonus(set: &KeywordSet, text: &str, per_match: i32, cap: i32) -> i32 {
    (set.distinct_matches(text) as i32 * per_match).min(cap)
}

fn count_bonus(count: usize, per_item: i32, cap: i32) -> i32 {
    (count.min(100) as i32 * per_item).min(cap)
}

/// Readability: moderate length, short sentences, no vague filler
pub fn score_clarity(f: &Features) -> u8 {
    let mut score = 50;

    if f.word_count < 5 {
        score -= 20;
    } else if f.word_count > 100 {
        score -= 10;
    }
    score += bonus_if(f.word_count >= 10, 10);

    if f.word_count > 0 {
        let avg = f.avg_sentence_length();
        if avg <= 15.0 {
            score += 15;
        } else if avg <= 20.0 {
            score += 8;
        } else if avg > 30.0 {
            score -= 10;
        }
    }

    score += bonus_if(keywords::CLARITY.is_match(&f.lower), 10);
    score -= bonus_if(keywords::VAGUE.is_match(&f.lower), 10);
    score += bonus_if(f.has_question_mark, 5);

    clamp_score(score)
}

/// Concrete detail: specificity words, numbers and named entities
pub fn score_specificity(f: &Features) -> u8 {
    let mut score = 30;
    score += keyword_bonus(&keywords::SPECIFICITY, &f.lower, 8, 24);
    score += count_bonus(f.number_tokens, 5, 25);
    score += count_bonus(f.proper_noun_tokens, 3, 15);
    score += bonus_if(f.word_count > 15, 10);
    score -= bonus_if(keywords::VAGUE.is_match(&f.lower), 10);
    clamp_score(score)
}

/// Organization: paragraphs, mixed sentence types, discourse markers, lists
pub fn score_structure(f: &Features) -> u8 {
    let mut score = 40;
    score += bonus_if(f.paragraph_count > 1, 15);
    score += bonus_if(f.sentence_type_count() >= 2, 10);
    score += keyword_bonus(&keywords::DISCOURSE, &f.lower, 5, 15);
    score += bonus_if(f.list_item_count > 0, 10);
    score += bonus_if(f.has_colon, 5);
    score += bonus_if(f.sentence_count > 1, 5);
    clamp_score(score)
}

/// Background: stated purpose, audience and subject domain
pub fn score_context(f: &Features) -> u8 {
    let mut score = 30;
    score += keyword_bonus(&keywords::CONTEXT, &f.lower, 8, 24);
    score += bonus_if(keywords::AUDIENCE.is_match(&f.lower), 10);
    score += bonus_if(keywords::mentions_domain(&f.lower), 10);
    score += bonus_if(f.word_count > 20, 10);
    clamp_score(score)
}

/// How clearly the prompt asks for something: action verbs, politeness, questions
pub fn score_intent(f: &Features) -> u8 {
    let mut score = 40;
    let actions = keywords::ACTION_VERBS.distinct_matches(&f.lower);
    score += bonus_if(actions > 0, 15);
    score += bonus_if(actions >= 2, 5);
    score += bonus_if(keywords::POLITENESS.is_match(&f.lower), 10);
    score += bonus_if(f.has_question_mark, 10);
    score += bonus_if(
        !f.first_word.is_empty() && keywords::ACTION_VERBS.is_match(&f.first_word),
        10,
    );
    clamp_score(score)
}

/// Coverage: enough length plus explicit detail, format, constraints and examples
pub fn score_completeness(f: &Features) -> u8 {
    let mut score = 30;
    score += bonus_if(f.word_count > 20, 15);
    score += bonus_if(f.word_count > 50, 10);
    score += bonus_if(keywords::DETAIL.is_match(&f.lower), 10);
    score += bonus_if(keywords::FORMAT.is_match(&f.lower), 10);
    score += bonus_if(keywords::CONSTRAINT.is_match(&f.lower), 10);
    score += bonus_if(keywords::EXAMPLE.is_match(&f.lower), 10);
    clamp_score(score)
}

pub fn score_creativity(f: &Features) -> u8 {
    let mut score = 30;
    score += keyword_bonus(&keywords::CREATIVITY, &f.lower, 10, 30);
    score += bonus_if(keywords::SCENARIO.is_match(&f.lower), 10);
    score += bonus_if(f.word_count > 15, 5);
    clamp_score(score)
}

pub fn score_precision(f: &Features) -> u8 {
    let mut score = 35;
    score += count_bonus(f.number_tokens, 5, 25);
    score += keyword_bonus(&keywords::PRECISION, &f.lower, 8, 24);
    score += count_bonus(f.proper_noun_tokens, 2, 10);
    score -= bonus_if(keywords::VAGUE.is_match(&f.lower), 15);
    clamp_score(score)
}

pub fn score_engagement(f: &Features) -> u8 {
    let mut score = 35;
    score += bonus_if(f.has_question_mark, 10);
    score += keyword_bonus(&keywords::ENGAGING, &f.lower, 10, 20);
    score += bonus_if(keywords::TONE.is_match(&f.lower), 10);
    score += bonus_if(keywords::SECOND_PERSON.is_match(&f.lower), 5);
    score += bonus_if(f.has_exclamation, 5);
    clamp_score(score)
}

pub fn score_adaptability(f: &Features) -> u8 {
    let mut score = 30;
    score += keyword_bonus(&keywords::ADAPTABILITY, &f.lower, 10, 30);
    score += bonus_if(keywords::CONDITIONAL.is_match(&f.lower), 10);
    score += bonus_if(keywords::AUDIENCE.is_match(&f.lower), 10);
    clamp_score(score)
}

pub fn score_technical_quality(f: &Features) -> u8 {
    let mut score = 30;
    score += keyword_bonus(&keywords::TECHNICAL, &f.lower, 8, 32);
    score += bonus_if(keywords::LANGUAGES.is_match(&f.lower), 10);
    score += bonus_if(keywords::CONSTRAINT.is_match(&f.lower), 10);
    score += bonus_if(f.has_colon, 5);
    clamp_score(score)
}

/// Likelihood the answer is directly usable: format, length and deliverable type
pub fn score_output_potential(f: &Features) -> u8 {
    let mut score = 35;
    score += bonus_if(keywords::FORMAT.is_match(&f.lower), 15);
    score += bonus_if(keywords::LENGTH.is_match(&f.lower), 10);
    score += bonus_if(keywords::OUTPUT_TYPE.is_match(&f.lower), 10);
    score += bonus_if(f.number_tokens > 0, 5);
    score += bonus_if((10..=150).contains(&f.word_count), 10);
    clamp_score(score)
}

/// Compute every metric for one prompt
pub fn compute(f: &Features) -> MetricSet {
    MetricSet {
        clarity: score_clarity(f),
        specificity: score_specificity(f),
        structure: score_structure(f),
        context: score_context(f),
        intent: score_intent(f),
        completeness: score_completeness(f),
        creativity: score_creativity(f),
        precision: score_precision(f),
        engagement: score_engagement(f),
        adaptability: score_adaptability(f),
        technical_quality: score_technical_quality(f),
        output_potential: score_output_potential(f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(text: &str) -> Features {
        Features::extract(text)
    }

    #[test]
    fn test_empty_prompt_gets_base_scores() {
        let metrics = compute(&features(""));
        assert_eq!(metrics.clarity, 30);
        assert_eq!(metrics.specificity, 30);
        assert_eq!(metrics.structure, 40);
        assert_eq!(metrics.context, 30);
        assert_eq!(metrics.intent, 40);
        assert_eq!(metrics.completeness, 30);
        assert_eq!(metrics.creativity, 30);
        assert_eq!(metrics.precision, 35);
        assert_eq!(metrics.engagement, 35);
        assert_eq!(metrics.adaptability, 30);
        assert_eq!(metrics.technical_quality, 30);
        assert_eq!(metrics.output_potential, 35);
    }

    #[test]
    fn test_short_prompt_scores() {
        let f = features("write about AI");
        assert_eq!(score_clarity(&f), 45);
        assert_eq!(score_specificity(&f), 30);
        assert_eq!(score_structure(&f), 40);
        assert_eq!(score_context(&f), 40);
        assert_eq!(score_intent(&f), 65);
        assert_eq!(score_completeness(&f), 30);
    }

    #[test]
    fn test_clarity_penalizes_long_sentences() {
        let long_sentence = vec!["word"; 35].join(" ");
        let split = vec!["word"; 7].join(" ") + ". ";
        let short_sentences = split.repeat(5);

        let run_on = score_clarity(&features(&long_sentence));
        let tidy = score_clarity(&features(&short_sentences));
        assert_eq!(run_on, 50);
        assert_eq!(tidy, 75);
    }

    #[test]
    fn test_clarity_penalizes_vague_words() {
        let vague = score_clarity(&features("tell me something about stuff"));
        let plain = score_clarity(&features("tell me facts about volcanoes"));
        assert_eq!(plain - vague, 10);
    }

    #[test]
    fn test_specificity_rewards_detail_numbers_and_names() {
        let rich = score_specificity(&features(
            "Explain the Big Bang theory to a beginner with specific examples",
        ));
        let bare = score_specificity(&features("explain big bang"));
        assert_eq!(rich, 55);
        assert_eq!(bare, 30);
    }

    #[test]
    fn test_number_bonus_is_capped() {
        let f = features("1 2 3 4 5 6 7 8 9 10");
        // 10 numbers would be 50 points uncapped
        assert_eq!(score_specificity(&f), 30 + 25);
    }

    #[test]
    fn test_structure_rewards_organization() {
        let text = "First, outline the plan: goals and risks.\n\n- budget\n- timeline\n\nFinally, what are the next steps?";
        assert_eq!(score_structure(&features(text)), 100);
    }

    #[test]
    fn test_intent_rewards_polite_questions() {
        let f = features("Could you explain and compare these two options?");
        // action verbs (explain, compare) + politeness + question mark
        assert_eq!(score_intent(&f), 40 + 15 + 5 + 10 + 10);
    }

    #[test]
    fn test_completeness_rewards_constraints_and_examples() {
        let text = "Write a detailed guide in bullet points for new hires. It must stay under \
                    two pages and include examples such as a first-week schedule and a checklist.";
        assert_eq!(score_completeness(&features(text)), 30 + 15 + 10 + 10 + 10 + 10);
    }

    #[test]
    fn test_creativity_keywords_are_capped() {
        let f = features("innovative unique imaginative creative original");
        assert_eq!(score_creativity(&f), 60);
    }

    #[test]
    fn test_scores_stay_in_bounds_for_keyword_stuffing() {
        let stuffed = "specific detailed concrete exact precise 1 2 3 4 5 6 Alice Bob Carol Dave Eve Frank ".repeat(20);
        let metrics = compute(&features(&stuffed));
        for (_, score) in metrics.iter() {
            assert!(score <= 100);
        }
    }

    #[test]
    fn test_scorers_are_deterministic() {
        let f = features("Design an innovative onboarding flow for beginners, with 3 variations.");
        assert_eq!(compute(&f), compute(&f));
    }
}
