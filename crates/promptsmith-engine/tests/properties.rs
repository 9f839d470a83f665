//! Property tests for the engine's global guarantees

use proptest::prelude::*;

use promptsmith_core::{MetricName, MetricSet};
use promptsmith_engine::grader::grade;
use promptsmith_engine::sanitize::sanitize_response;
use promptsmith_engine::{RewritePipeline, analyze};

fn prompt() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,300}",
        "[a-zA-Z ,.?!\n]{0,200}",
        Just(String::new()),
        Just("   \n\t ".to_string()),
    ]
}

proptest! {
    /// Analysis and local rewriting never panic and always change the text.
    #[test]
    fn local_rewrite_always_changes_text(text in prompt()) {
        let analysis = analyze(&text);
        let rewritten = RewritePipeline::standard().run(&text, &analysis);
        prop_assert_ne!(rewritten, text);
    }

    /// Every metric stays within 0..=100.
    #[test]
    fn metrics_are_bounded(text in prompt()) {
        let analysis = analyze(&text);
        for (name, score) in analysis.metrics.iter() {
            prop_assert!(score <= 100, "{} scored {}", name, score);
        }
    }

    /// Repeated analysis of the same text is identical.
    #[test]
    fn analysis_is_deterministic(text in prompt()) {
        prop_assert_eq!(analyze(&text), analyze(&text));
    }

    /// Raising core metrics never lowers the grade.
    #[test]
    fn grade_is_monotonic(
        base in proptest::array::uniform6(0u8..=100),
        bumps in proptest::array::uniform6(0u8..=100),
    ) {
        let mut lower = MetricSet::default();
        let mut higher = MetricSet::default();
        for (i, name) in MetricName::CORE.iter().enumerate() {
            lower.set(*name, base[i]);
            higher.set(*name, base[i].saturating_add(bumps[i]).min(100));
        }
        prop_assert!(grade(&higher) >= grade(&lower));
    }

    /// Sanitization is total and never returns blank text.
    #[test]
    fn sanitize_never_returns_blank(raw in "\\PC{0,300}") {
        if let Some(text) = sanitize_response(&raw) {
            prop_assert!(!text.trim().is_empty());
        }
    }
}
