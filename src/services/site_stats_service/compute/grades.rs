use crate::models::{GradeValue, Grades, PerformanceSample, PlatformSeries, PlatformType};
use crate::services::site_stats_service::compute::score::{round_half_up, SampleScorer};
use std::collections::HashSet;

// security and aesthetics are not collected yet
const CATEGORIES: [(&str, fn(&Grades) -> f64); 4] = [
    ("performance", |g: &Grades| g.performance),
    ("accessibility", |g: &Grades| g.accessibility),
    ("best_practices", |g: &Grades| g.best_practices),
    ("seo", |g: &Grades| g.seo),
];

/// Rounded mean of every stored category grade, per platform. Samples
/// without stored grades are skipped; an empty category averages to 0.
pub fn grades_distribution(samples: &[PerformanceSample]) -> PlatformSeries<GradeValue> {
    PlatformSeries {
        mobile: platform_averages(samples, PlatformType::Mobile),
        desktop: platform_averages(samples, PlatformType::Desktop),
    }
}

fn platform_averages(samples: &[PerformanceSample], platform: PlatformType) -> Vec<GradeValue> {
    let graded: Vec<&Grades> = samples
        .iter()
        .filter(|s| s.is_on(platform))
        .filter_map(|s| s.grades.as_ref())
        .collect();

    CATEGORIES
        .iter()
        .map(|(metric, pick)| {
            let values: Vec<f64> = graded.iter().map(|g| pick(g)).collect();
            GradeValue {
                metric: metric.to_string(),
                value: rounded_mean(&values),
            }
        })
        .collect()
}

/// Rounded mean quality score over all samples, 0 when there are none.
pub fn average_score<S: SampleScorer + ?Sized>(samples: &[PerformanceSample], scorer: &S) -> i64 {
    let scores: Vec<f64> = samples.iter().map(|s| scorer.score(s)).collect();
    rounded_mean(&scores)
}

/// Number of distinct urls in the batch.
pub fn urls_monitored(samples: &[PerformanceSample]) -> usize {
    samples.iter().map(|s| s.url_id).collect::<HashSet<_>>().len()
}

fn rounded_mean(values: &[f64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    round_half_up(values.iter().sum::<f64>() / values.len() as f64) as i64
}
