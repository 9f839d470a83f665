//! Topic-aware fallback templates
//!
//! Used when the rewrite stages leave a prompt unchanged. The bucket is
//! picked from the lower-cased original; the generic template is the
//! catch-all.

use once_cell::sync::Lazy;

use crate::keywords::KeywordSet;

static EXPLANATION_BUCKET: Lazy<KeywordSet> = Lazy::new(|| {
    KeywordSet::new(&["explain", "what is", "what are", "why", "how does", "define", "meaning"])
});

static TRAVEL_BUCKET: Lazy<KeywordSet> = Lazy::new(|| {
    KeywordSet::new(&["trip", "travel", "vacation", "beach", "destination", "holiday", "visit"])
});

static ENTERTAINMENT_BUCKET: Lazy<KeywordSet> = Lazy::new(|| {
    KeywordSet::new(&[
        "movie",
        "movies",
        "film",
        "films",
        "tv show",
        "tv shows",
        "tv series",
        "music",
        "song",
        "songs",
        "video game",
        "video games",
        "board game",
        "board games",
        "novels",
        "podcast",
        "podcasts",
    ])
});

static IDEAS_BUCKET: Lazy<KeywordSet> = Lazy::new(|| {
    KeywordSet::new(&[
        "ideas",
        "idea",
        "suggest",
        "suggestions",
        "recommend",
        "recommendations",
        "give me",
    ])
});

static HOW_TO_BUCKET: Lazy<KeywordSet> = Lazy::new(|| {
    KeywordSet::new(&["how to", "how can", "how do i", "steps", "guide", "tutorial"])
});

/// Coarse topic bucket of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicBucket {
    Explanation,
    Travel,
    Entertainment,
    Ideas,
    HowTo,
    Generic,
}

impl TopicBucket {
    pub fn of(text: &str) -> Self {
        let lower = text.to_lowercase();
        let buckets: [(&Lazy<KeywordSet>, TopicBucket); 5] = [
            (&EXPLANATION_BUCKET, TopicBucket::Explanation),
            (&TRAVEL_BUCKET, TopicBucket::Travel),
            (&ENTERTAINMENT_BUCKET, TopicBucket::Entertainment),
            (&IDEAS_BUCKET, TopicBucket::Ideas),
            (&HOW_TO_BUCKET, TopicBucket::HowTo),
        ];

        buckets
            .iter()
            .find(|(set, _)| set.is_match(&lower))
            .map(|(_, bucket)| *bucket)
            .unwrap_or(TopicBucket::Generic)
    }
}

/// Render the fallback template for `original`
pub fn fallback_template(original: &str) -> String {
    let topic = topic_of(original);

    match TopicBucket::of(original) {
        TopicBucket::Explanation => format!(
            "Please explain {} in a clear, well-organized way.\n\n\
             Include:\n- Clear definition of the core concept\n- Practical examples\n\
             - Common misconceptions\n- Key takeaways",
            topic
        ),
        TopicBucket::Travel => format!(
            "Help me plan this trip: {}.\n\n\
             For each suggestion include:\n- Destination and why it stands out\n\
             - Best time to go\n- Top activities\n- Estimated budget",
            topic
        ),
        TopicBucket::Entertainment => format!(
            "Recommend options for: {}.\n\n\
             For each recommendation include:\n- Title and genre\n\
             - Why it is worth your time\n- Where to watch, read or play it",
            topic
        ),
        TopicBucket::Ideas => format!(
            "Brainstorm a varied list of ideas for: {}.\n\n\
             For each idea include:\n- A short, catchy name\n\
             - One or two sentences describing it\n- What makes it stand out",
            topic
        ),
        TopicBucket::HowTo => format!(
            "Give me step-by-step instructions for: {}.\n\n\
             Include:\n- What I need before starting\n- Numbered steps\n\
             - Common mistakes to avoid",
            topic
        ),
        TopicBucket::Generic if topic.is_empty() => {
            "Provide a detailed, well-structured response.\n\n\
             Include:\n- Relevant context\n- Specific examples\n- A clear summary"
                .to_string()
        }
        TopicBucket::Generic => format!(
            "Provide a detailed, well-structured response to the following request: {}.\n\n\
             Include:\n- Relevant context\n- Specific examples\n- A clear summary",
            topic
        ),
    }
}

/// Trimmed prompt without trailing punctuation
fn topic_of(original: &str) -> &str {
    original
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ',' | ';' | ':'))
        .trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_selection() {
        assert_eq!(TopicBucket::of("What is entropy?"), TopicBucket::Explanation);
        assert_eq!(TopicBucket::of("beach trip ideas"), TopicBucket::Travel);
        assert_eq!(TopicBucket::of("good movies"), TopicBucket::Entertainment);
        assert_eq!(TopicBucket::of("a tv show to binge"), TopicBucket::Entertainment);
        assert_eq!(TopicBucket::of("book a table for two"), TopicBucket::Generic);
        assert_eq!(TopicBucket::of("show me a game plan"), TopicBucket::Generic);
        assert_eq!(TopicBucket::of("gift ideas"), TopicBucket::Ideas);
        assert_eq!(TopicBucket::of("how to knit"), TopicBucket::HowTo);
        assert_eq!(TopicBucket::of("hello"), TopicBucket::Generic);
        assert_eq!(TopicBucket::of(""), TopicBucket::Generic);
    }

    #[test]
    fn test_topic_strips_trailing_punctuation() {
        assert_eq!(topic_of("  What is entropy?!  "), "What is entropy");
        assert_eq!(topic_of("..."), "");
    }

    #[test]
    fn test_travel_template_is_not_the_explanation_template() {
        let text = fallback_template("beach trip ideas");
        assert!(text.contains("Best time to go"));
        assert!(!text.contains("Clear definition"));
    }

    #[test]
    fn test_generic_template_without_topic() {
        insta::assert_snapshot!(fallback_template("   "), @r###"
        Provide a detailed, well-structured response.

        Include:
        - Relevant context
        - Specific examples
        - A clear summary
        "###);
    }

    #[test]
    fn test_templates_never_echo_input() {
        for input in ["", " ", "hello", "explain x", "trip", "movie", "ideas", "how to"] {
            assert_ne!(fallback_template(input), input);
        }
    }
}
