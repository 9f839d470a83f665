//! Keyword vocabularies shared by the metric engine and the classifier

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// A fixed list of words and phrases compiled into one word-bounded,
/// case-insensitive pattern
#[derive(Debug, Clone)]
pub struct KeywordSet {
    pattern: Regex,
}

impl KeywordSet {
    pub fn new(words: &[&str]) -> Self {
        let alternatives = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives))
            .expect("escaped keyword alternation is a valid pattern");
        Self { pattern }
    }

    /// Whether any keyword occurs in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Number of different keywords that occur in `text`
    pub fn distinct_matches(&self, text: &str) -> usize {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect::<HashSet<_>>()
            .len()
    }
}

macro_rules! keyword_set {
    ($name:ident, [$($word:literal),+ $(,)?]) => {
        pub static $name: Lazy<KeywordSet> = Lazy::new(|| KeywordSet::new(&[$($word),+]));
    };
}

// Metric vocabularies

keyword_set!(CLARITY, [
    "clear", "clearly", "explain", "describe", "define", "step by step", "in simple terms",
]);
keyword_set!(VAGUE, [
    "something", "stuff", "thing", "things", "whatever", "somehow", "kind of", "sort of",
    "etc", "anything",
]);
keyword_set!(SPECIFICITY, [
    "specific", "specifically", "detailed", "concrete", "exact", "exactly",
    "precise", "particular", "example", "examples",
]);
keyword_set!(DISCOURSE, [
    "first", "firstly", "second", "secondly", "then", "next", "finally",
    "lastly", "additionally", "also", "furthermore",
]);
keyword_set!(CONTEXT, [
    "background", "context", "because", "purpose", "goal", "situation",
    "project", "currently", "working on", "for my",
]);
keyword_set!(AUDIENCE, [
    "beginner", "beginners", "novice", "expert", "experts", "student", "students",
    "audience", "team", "client", "clients", "children", "kids", "professional",
    "professionals",
]);
keyword_set!(ACTION_VERBS, [
    "write", "create", "explain", "describe", "list", "compare", "analyze", "analyse",
    "summarize", "generate", "design", "build", "give", "tell", "help", "make", "plan",
    "suggest", "show", "draft", "develop", "provide", "recommend", "evaluate",
]);
keyword_set!(POLITENESS, [
    "please", "could you", "would you", "can you", "kindly", "thank you", "thanks",
]);
keyword_set!(DETAIL, [
    "detail", "details", "detailed", "thorough", "comprehensive", "in-depth",
    "including", "step-by-step",
]);
keyword_set!(FORMAT, [
    "format", "list", "table", "bullet", "bullets", "bullet points", "paragraph",
    "paragraphs", "outline", "json", "markdown", "headings", "sections", "steps",
]);
keyword_set!(CONSTRAINT, [
    "must", "should", "limit", "within", "under", "at least", "no more than", "avoid",
    "only", "maximum", "minimum", "exactly",
]);
keyword_set!(EXAMPLE, ["example", "examples", "for instance", "such as", "sample", "samples"]);
keyword_set!(CREATIVITY, [
    "innovative", "unique", "imaginative", "creative", "original", "novel",
    "unconventional", "fresh", "inventive", "out of the box",
]);
keyword_set!(SCENARIO, [
    "imagine", "what if", "story", "pretend", "brainstorm", "invent", "scenario",
]);
keyword_set!(PRECISION, [
    "exactly", "precisely", "specific", "accurate", "accurately", "measurable",
    "quantify", "percent", "percentage", "exact",
]);
keyword_set!(ENGAGING, [
    "engaging", "interesting", "fun", "compelling", "exciting", "captivating",
    "interactive", "hook", "memorable",
]);
keyword_set!(TONE, [
    "friendly", "casual", "humorous", "funny", "conversational", "enthusiastic",
    "warm", "formal", "professional", "playful",
]);
keyword_set!(SECOND_PERSON, ["you", "your"]);
keyword_set!(ADAPTABILITY, [
    "flexible", "adapt", "adaptable", "adjust", "alternative", "alternatives",
    "options", "variations", "different", "various", "scenarios", "versions",
]);
keyword_set!(CONDITIONAL, ["if", "depending", "when", "unless", "otherwise", "in case", "whether"]);
keyword_set!(TECHNICAL, [
    "code", "function", "algorithm", "api", "database", "implementation",
    "architecture", "performance", "framework", "syntax", "system", "software",
    "data", "server", "query",
]);
keyword_set!(LANGUAGES, [
    "python", "javascript", "typescript", "rust", "java", "sql", "html", "css",
    "golang", "ruby", "kotlin", "swift",
]);
keyword_set!(LENGTH, [
    "words", "sentences", "paragraphs", "pages", "characters", "brief", "briefly",
    "concise", "short", "long", "length",
]);
keyword_set!(OUTPUT_TYPE, [
    "list", "table", "summary", "essay", "report", "article", "guide", "outline",
    "plan", "email", "code", "script", "poem", "story", "checklist",
]);

// Intent vocabularies

keyword_set!(INTENT_COMPARISON, [
    "compare", "comparison", "versus", "vs", "difference between", "differences",
    "pros and cons", "better than",
]);
keyword_set!(INTENT_EXPLANATION, [
    "explain", "what is", "what are", "why", "how does", "how do", "describe",
    "define", "meaning of", "tell me about",
]);
keyword_set!(INTENT_INSTRUCTION, [
    "how to", "steps", "guide", "tutorial", "teach me", "walk me through", "instructions",
]);
keyword_set!(INTENT_CREATION, [
    "write", "create", "generate", "make", "compose", "design", "draft", "build",
    "give me", "come up with", "brainstorm", "ideas",
]);
keyword_set!(INTENT_ANALYSIS, [
    "analyze", "analyse", "evaluate", "assess", "review", "examine", "critique",
    "break down", "breakdown",
]);
keyword_set!(FORMAT_LIST, ["list", "bullet", "bullets", "bullet points", "points", "top"]);
keyword_set!(FORMAT_STRUCTURED, [
    "table", "outline", "sections", "structured", "step-by-step", "steps", "json",
    "headings", "template",
]);
keyword_set!(FORMAT_NARRATIVE, [
    "story", "essay", "narrative", "article", "paragraph", "blog", "letter",
]);

// Context vocabularies

keyword_set!(DOMAIN_BUSINESS, [
    "business", "marketing", "sales", "startup", "company", "revenue", "customer",
    "customers", "strategy", "brand", "market", "investor", "investors",
]);
keyword_set!(DOMAIN_TECHNICAL, [
    "code", "coding", "programming", "software", "api", "algorithm", "database",
    "python", "javascript", "rust", "ai", "machine learning", "computer",
    "technical", "debug", "app",
]);
keyword_set!(DOMAIN_CREATIVE, [
    "story", "stories", "poem", "poems", "poetry", "creative", "fiction", "novel", "art",
    "song", "songs", "lyrics", "character",
]);
keyword_set!(DOMAIN_ACADEMIC, [
    "research", "study", "theory", "academic", "thesis", "essay", "scientific",
    "science", "history", "physics", "biology", "paper",
]);
keyword_set!(DOMAIN_TRAVEL, [
    "travel", "trip", "vacation", "beach", "destination", "destinations", "hotel",
    "flight", "itinerary", "tourism", "holiday",
]);
// Qualified forms only; bare "show", "book" and "game" start ordinary requests
keyword_set!(DOMAIN_ENTERTAINMENT, [
    "movie", "movies", "film", "films", "music", "tv", "tv show", "tv shows",
    "tv series", "netflix", "anime", "documentary", "documentaries", "podcast",
    "podcasts", "video game", "video games", "board game", "board games", "novels",
    "entertainment", "binge",
]);
keyword_set!(TONE_FORMAL, ["formal", "formally", "official", "academic tone"]);
keyword_set!(TONE_PROFESSIONAL, ["professional", "professionally", "corporate", "business-like"]);
keyword_set!(TONE_CASUAL, ["casual", "friendly", "fun", "conversational", "informal", "relaxed"]);
keyword_set!(AUDIENCE_BEGINNER, [
    "beginner", "beginners", "newbie", "novice", "simple terms", "simply", "eli5",
    "kid", "kids", "child", "children", "new to",
]);
keyword_set!(AUDIENCE_EXPERT, [
    "expert", "experts", "advanced", "in-depth", "technical details", "experienced",
    "phd", "senior",
]);

/// Whether the text mentions any recognised subject domain
pub fn mentions_domain(text: &str) -> bool {
    [
        &DOMAIN_BUSINESS,
        &DOMAIN_TECHNICAL,
        &DOMAIN_CREATIVE,
        &DOMAIN_ACADEMIC,
        &DOMAIN_TRAVEL,
        &DOMAIN_ENTERTAINMENT,
    ]
    .iter()
    .any(|set| set.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_word_bounded() {
        let set = KeywordSet::new(&["ai"]);
        assert!(set.is_match("write about AI"));
        assert!(!set.is_match("explain the rain"));
    }

    #[test]
    fn test_phrases_and_hyphenated_words_match() {
        assert!(POLITENESS.is_match("could you help me"));
        assert!(DETAIL.is_match("an in-depth review"));
        assert!(INTENT_COMPARISON.is_match("the pros and cons of rust"));
    }

    #[test]
    fn test_distinct_matches_ignores_repeats_and_case() {
        assert_eq!(SPECIFICITY.distinct_matches("Specific, specific, SPECIFIC examples"), 2);
        assert_eq!(SPECIFICITY.distinct_matches("nothing here"), 0);
    }

    #[test]
    fn test_mentions_domain() {
        assert!(mentions_domain("plan a beach holiday"));
        assert!(!mentions_domain("hello there"));
    }
}
