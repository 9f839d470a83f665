use promptsmith_core::{MetricSet, QualityLevel};

/// Grade a prompt from the average of its core metrics
///
/// Advisory metrics never influence the grade.
pub fn grade(metrics: &MetricSet) -> QualityLevel {
    QualityLevel::from_average(metrics.core_average())
}
