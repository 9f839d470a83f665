//! Clean-up of remote rewrite replies
//!
//! Models like to wrap the rewritten prompt in chatter ("Here's an improved
//! version:"), quotes, code fences and trailing explanations. Only the prompt
//! itself should survive.

use once_cell::sync::Lazy;
use regex::Regex;

/// A label such as "Optimized prompt:" or "**Improved:**" opening a line
static OPTIMIZED_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ims)^[ \t]*(?:\*\*)?(?:optimized|improved|rewritten|revised)(?:[ \t]+prompt)?(?:\*\*)?[ \t]*:(?:\*\*)?\s*(.+)",
    )
    .expect("optimized section pattern is valid")
});

static LEADING_CHATTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?:sure|certainly|of course|absolutely|okay|ok)\b[!.,]*\s*|here(?:'s| is)\b[^:\n]*?(?:version|prompt|rewrite)[^:\n]*:\s*)",
    )
    .expect("leading chatter pattern is valid")
});

static TRAILING_COMMENTARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^\s*(?:\*\*)?(?:explanation|changes made|improvements|why this works|notes?)(?:\*\*)?\s*:",
    )
    .expect("trailing commentary pattern is valid")
});

const QUOTE_PAIRS: [(char, char); 4] = [('"', '"'), ('\'', '\''), ('“', '”'), ('`', '`')];

/// Extract the usable prompt from a raw reply; `None` when nothing is left
pub fn sanitize_response(raw: &str) -> Option<String> {
    let mut text = raw.trim().to_string();

    text = strip_code_fence(&text);

    if let Some(section) = OPTIMIZED_SECTION_RE
        .captures(&text)
        .and_then(|caps| caps.get(1))
    {
        text = section.as_str().trim().to_string();
    }

    while let Some(m) = LEADING_CHATTER_RE.find(&text) {
        if m.end() == 0 {
            break;
        }
        text = text[m.end()..].trim_start().to_string();
    }

    if let Some(m) = TRAILING_COMMENTARY_RE.find(&text) {
        text.truncate(m.start());
    }

    text = strip_code_fence(text.trim());
    text = strip_wrapping_quotes(&text);

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Whether two texts differ only in whitespace
pub fn is_near_duplicate(a: &str, b: &str) -> bool {
    a.split_whitespace().eq(b.split_whitespace())
}

fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    if !(trimmed.starts_with("```") && trimmed.ends_with("```") && trimmed.len() >= 6) {
        return trimmed.to_string();
    }

    let inner = &trimmed[3..trimmed.len() - 3];
    // drop an info string such as ```text
    let inner = match inner.split_once('\n') {
        Some((first, rest)) if !first.trim().contains(' ') => rest,
        _ => inner,
    };
    inner.trim().to_string()
}

fn strip_wrapping_quotes(text: &str) -> String {
    let mut current = text.trim();
    loop {
        let stripped = QUOTE_PAIRS.iter().find_map(|(open, close)| {
            current
                .strip_prefix(*open)
                .and_then(|rest| rest.strip_suffix(*close))
        });
        match stripped {
            Some(inner) => current = inner.trim(),
            None => return current.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reply_is_kept() {
        assert_eq!(
            sanitize_response("  Write a 500-word essay on solar power.  ").as_deref(),
            Some("Write a 500-word essay on solar power.")
        );
    }

    #[test]
    fn test_leading_chatter_is_removed() {
        let raw = "Sure! Here's an improved version of your prompt:\n\nWrite a haiku about autumn.";
        assert_eq!(sanitize_response(raw).as_deref(), Some("Write a haiku about autumn."));

        let raw = "Certainly. Here is the optimized prompt: List five uses of copper.";
        assert_eq!(sanitize_response(raw).as_deref(), Some("List five uses of copper."));
    }

    #[test]
    fn test_optimized_section_is_extracted() {
        let raw =
            "Original: write about dogs\nOptimized: Write a 300-word guide to adopting a rescue dog.";
        assert_eq!(
            sanitize_response(raw).as_deref(),
            Some("Write a 300-word guide to adopting a rescue dog.")
        );
    }

    #[test]
    fn test_bold_section_label_is_extracted() {
        let raw = "**Optimized Prompt:** Write a haiku about the first frost of autumn.";
        assert_eq!(
            sanitize_response(raw).as_deref(),
            Some("Write a haiku about the first frost of autumn.")
        );
    }

    #[test]
    fn test_label_words_inside_a_sentence_are_kept() {
        let raw = "Create a two-column table with headers Original and Improved: one row per \
                   sentence of my essay, plus a short summary.";
        assert_eq!(sanitize_response(raw).as_deref(), Some(raw));

        let raw = "List the ways my revised: draft could be shorter.";
        assert_eq!(sanitize_response(raw).as_deref(), Some(raw));
    }

    #[test]
    fn test_quotes_and_fences_are_stripped() {
        assert_eq!(
            sanitize_response("\"Describe the water cycle.\"").as_deref(),
            Some("Describe the water cycle.")
        );
        assert_eq!(
            sanitize_response("“Describe the water cycle.”").as_deref(),
            Some("Describe the water cycle.")
        );
        assert_eq!(
            sanitize_response("```text\nDescribe the water cycle.\n```").as_deref(),
            Some("Describe the water cycle.")
        );
    }

    #[test]
    fn test_trailing_commentary_is_truncated() {
        let raw = "Explain recursion with two Python examples.\n\n\
                   Explanation: I added a language and a count.";
        assert_eq!(
            sanitize_response(raw).as_deref(),
            Some("Explain recursion with two Python examples.")
        );

        let raw = "Plan a 3-day Rome itinerary.\n\n**Changes made:**\n- added duration";
        assert_eq!(sanitize_response(raw).as_deref(), Some("Plan a 3-day Rome itinerary."));
    }

    #[test]
    fn test_empty_replies_are_rejected() {
        assert_eq!(sanitize_response(""), None);
        assert_eq!(sanitize_response("   \n "), None);
        assert_eq!(sanitize_response("\"\""), None);
        assert_eq!(sanitize_response("Sure!"), None);
    }

    #[test]
    fn test_near_duplicates() {
        assert!(is_near_duplicate("write about AI", "  write   about\nAI "));
        assert!(!is_near_duplicate("write about AI", "Write about AI"));
        assert!(is_near_duplicate("", "   "));
    }
}
