//! Advisory insights and suggestions
//!
//! Nothing here feeds back into scoring or rewriting.

use promptsmith_core::{Insight, InsightKind, MetricName, MetricSet};

/// Core metrics below this score get a targeted insight
pub const INSIGHT_THRESHOLD: u8 = 40;

/// Core metrics below this score get a suggestion
pub const SUGGESTION_THRESHOLD: u8 = 50;

/// One general insight keyed off the core average, then one targeted
/// insight per weak core metric in reporting order
pub fn generate_insights(metrics: &MetricSet) -> Vec<Insight> {
    let mut insights = vec![general_insight(metrics.core_average())];

    insights.extend(
        MetricName::CORE
            .iter()
            .filter(|name| metrics.get(**name) < INSIGHT_THRESHOLD)
            .map(|name| {
                let (icon, message) = targeted_message(*name);
                Insight {
                    kind: InsightKind::Targeted,
                    metric: Some(*name),
                    icon: icon.to_string(),
                    message: message.to_string(),
                }
            }),
    );

    insights
}

/// Actionable imperatives for every core metric below the suggestion threshold
pub fn generate_suggestions(metrics: &MetricSet) -> Vec<String> {
    MetricName::CORE
        .iter()
        .filter(|name| metrics.get(**name) < SUGGESTION_THRESHOLD)
        .map(|name| suggestion_for(*name).to_string())
        .collect()
}

fn general_insight(average: f64) -> Insight {
    let (icon, message) = if average >= 70.0 {
        ("star", "Strong prompt: clear, specific and well organized.")
    } else if average >= 50.0 {
        ("thumbs-up", "Solid foundation; a few targeted additions would sharpen the result.")
    } else {
        ("lightbulb", "This prompt leaves a lot to guesswork; more detail will pay off.")
    };

    Insight {
        kind: InsightKind::General,
        metric: None,
        icon: icon.to_string(),
        message: message.to_string(),
    }
}

fn targeted_message(name: MetricName) -> (&'static str, &'static str) {
    match name {
        MetricName::Clarity => ("eye", "The request is hard to read at a glance."),
        MetricName::Specificity => ("target", "Few concrete details, numbers or names are given."),
        MetricName::Structure => ("layers", "The prompt has little visible organization."),
        MetricName::Context => (
            "compass",
            "There is no background about purpose, audience or domain.",
        ),
        MetricName::Intent => ("flag", "It is unclear what action the model should take."),
        MetricName::Completeness => ("checklist", "Format, constraints and examples are missing."),
        // advisory metrics never produce targeted insights
        _ => ("info", "This aspect of the prompt could be stronger."),
    }
}

fn suggestion_for(name: MetricName) -> &'static str {
    match name {
        MetricName::Clarity => "Use shorter sentences and replace vague words with precise ones",
        MetricName::Specificity => "Add concrete details such as numbers, names or a target length",
        MetricName::Structure => "Break the request into steps or sections",
        MetricName::Context => "Add context about your audience or domain",
        MetricName::Intent => "Start with a clear action verb that says what you want",
        MetricName::Completeness => "Specify the output format, constraints and an example",
        _ => "Add more detail to this part of the prompt",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_core(score: u8) -> MetricSet {
        let mut metrics = MetricSet::default();
        for name in MetricName::CORE {
            metrics.set(name, score);
        }
        metrics
    }

    #[test]
    fn test_strong_prompt_gets_only_general_insight() {
        let insights = generate_insights(&uniform_core(80));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::General);
        assert_eq!(insights[0].icon, "star");
        assert!(generate_suggestions(&uniform_core(80)).is_empty());
    }

    #[test]
    fn test_targeted_insights_follow_core_order() {
        let mut metrics = uniform_core(60);
        metrics.completeness = 10;
        metrics.clarity = 39;
        metrics.structure = 40;
        // advisory metrics never trigger targeted insights
        metrics.creativity = 0;

        let insights = generate_insights(&metrics);
        let targeted: Vec<_> = insights.iter().filter_map(|i| i.metric).collect();
        assert_eq!(targeted, vec![MetricName::Clarity, MetricName::Completeness]);
    }

    #[test]
    fn test_suggestions_use_wider_threshold() {
        let mut metrics = uniform_core(60);
        metrics.context = 45;
        metrics.intent = 30;

        let suggestions = generate_suggestions(&metrics);
        assert_eq!(
            suggestions,
            vec![
                "Add context about your audience or domain",
                "Start with a clear action verb that says what you want",
            ]
        );
        // only the sub-40 metric is targeted
        assert_eq!(generate_insights(&metrics).len(), 2);
    }

    #[test]
    fn test_general_insight_bands() {
        assert_eq!(general_insight(75.0).icon, "star");
        assert_eq!(general_insight(50.0).icon, "thumbs-up");
        assert_eq!(general_insight(49.9).icon, "lightbulb");
    }
}
