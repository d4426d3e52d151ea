use crate::models::{
    Cluster, GradesSummary, PerformanceSample, PlatformStability, PlatformType, Report,
    StabilityEntry, StabilityReport,
};
use crate::services::site_stats_service::compute::{
    apply_minimum_threshold, average_score, cluster_stability, compute_metric_stats,
    diff_platforms, grade_stability, grades_distribution, history, time_of_day, urls_monitored,
    SampleScorer,
};
use log::debug;

// Entries kept per stability list in the response payload
const TOP_ENTRIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    /// Every url in the batch; sparse urls are filtered out of stability
    /// rankings and the distinct url count is reported.
    Global,
    /// A single url. Too few subjects for the datapoint filter to mean
    /// anything, so it is skipped.
    SingleUrl,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub scope: ReportScope,
}

impl ReportOptions {
    pub fn global() -> Self {
        Self {
            scope: ReportScope::Global,
        }
    }

    pub fn single_url() -> Self {
        Self {
            scope: ReportScope::SingleUrl,
        }
    }
}

/// Builds the full statistics report over an already-filtered batch.
/// Total over its input: an empty batch gives zeroed stats and empty lists.
pub fn compute_report<S: SampleScorer + ?Sized>(
    samples: &[PerformanceSample],
    options: &ReportOptions,
    scorer: &S,
) -> Report {
    let stats = compute_metric_stats(samples);

    let mut stability = PlatformStability {
        desktop: grade_stability(samples, PlatformType::Desktop, scorer),
        mobile: grade_stability(samples, PlatformType::Mobile, scorer),
    };
    if options.scope == ReportScope::Global {
        stability = apply_minimum_threshold(stability);
    }
    sort_by_variation(&mut stability.desktop);
    sort_by_variation(&mut stability.mobile);

    let differences = diff_platforms(&stability);

    let latest_timestamp = samples.iter().map(|s| s.recorded_at).max();
    let url_count = match options.scope {
        ReportScope::Global => Some(urls_monitored(samples)),
        ReportScope::SingleUrl => None,
    };

    debug!(
        "report over {} samples: {} desktop / {} mobile stability entries, {} differences",
        samples.len(),
        stability.desktop.len(),
        stability.mobile.len(),
        differences.len()
    );

    Report {
        stats,
        count: samples.len(),
        url_count,
        latest_timestamp,
        stability: StabilityReport {
            mobile: top(stability.mobile),
            desktop: top(stability.desktop),
            differences: differences.into_iter().take(TOP_ENTRIES).collect(),
        },
        time_of_day: time_of_day(samples, scorer),
        history: history(samples),
    }
}

/// Cluster stability for both platforms with their differences. Lists are
/// filtered and sorted like the global report but not truncated.
pub fn cluster_report<S: SampleScorer + ?Sized>(
    clusters: &[Cluster],
    samples: &[PerformanceSample],
    scorer: &S,
) -> StabilityReport {
    let mut stability = apply_minimum_threshold(PlatformStability {
        desktop: cluster_stability(clusters, samples, PlatformType::Desktop, scorer),
        mobile: cluster_stability(clusters, samples, PlatformType::Mobile, scorer),
    });
    sort_by_variation(&mut stability.desktop);
    sort_by_variation(&mut stability.mobile);

    let differences = diff_platforms(&stability);
    StabilityReport {
        mobile: stability.mobile,
        desktop: stability.desktop,
        differences,
    }
}

pub fn grades_summary<S: SampleScorer + ?Sized>(
    samples: &[PerformanceSample],
    scorer: &S,
) -> GradesSummary {
    GradesSummary {
        average_score: average_score(samples, scorer),
        urls_monitored: urls_monitored(samples),
        distribution: grades_distribution(samples),
    }
}

// most stable first; infinite variation sinks to the end
fn sort_by_variation(entries: &mut [StabilityEntry]) {
    entries.sort_by(|a, b| a.variation.total_cmp(&b.variation));
}

fn top(entries: Vec<StabilityEntry>) -> Vec<StabilityEntry> {
    entries.into_iter().take(TOP_ENTRIES).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PercentileSummary;
    use crate::services::site_stats_service::compute::score::tests::sample;
    use crate::services::site_stats_service::compute::score::StoredGrade;
    use chrono::Duration;

    fn series(url_id: i64, platform: PlatformType, scores: &[f64]) -> Vec<PerformanceSample> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let mut s = sample(url_id, platform, score);
                s.recorded_at += Duration::minutes(i as i64 * 15 + url_id);
                s.vitals.lcp = 1000 + (score as u32) * 10;
                s
            })
            .collect()
    }

    #[test]
    fn test_empty_batch() {
        let report = compute_report(&[], &ReportOptions::global(), &StoredGrade);

        assert_eq!(report.count, 0);
        assert_eq!(report.url_count, Some(0));
        assert_eq!(report.latest_timestamp, None);
        assert_eq!(report.stats.lcp, PercentileSummary::default());
        assert_eq!(report.stats.cls, PercentileSummary::default());
        assert!(report.stability.desktop.is_empty());
        assert!(report.stability.differences.is_empty());
        assert!(report.time_of_day.mobile.is_empty());
        assert!(report.history.desktop.is_empty());
    }

    #[test]
    fn test_single_url_end_to_end() {
        let mut samples = series(1, PlatformType::Desktop, &[80.0, 90.0, 70.0, 85.0]);
        samples.extend(series(1, PlatformType::Mobile, &[60.0, 65.0]));

        let report = compute_report(&samples, &ReportOptions::single_url(), &StoredGrade);

        assert_eq!(report.count, 6);
        assert_eq!(report.url_count, None);
        assert_eq!(report.stability.desktop[0].variation, 20.0);
        assert_eq!(report.stability.desktop[0].average, 81);
        assert_eq!(report.stability.mobile[0].variation, 5.0);
        assert_eq!(report.stability.mobile[0].average, 63);
        assert_eq!(report.stability.differences[0].difference, 18);
        assert_eq!(report.history.desktop.len(), 4);
        assert_eq!(report.time_of_day.mobile.len(), 2);
        assert_eq!(report.stats.lcp.min, 1600.0);
        assert_eq!(report.stats.lcp.max, 1900.0);
        assert_eq!(
            report.latest_timestamp,
            samples.iter().map(|s| s.recorded_at).max()
        );
    }

    #[test]
    fn test_global_filters_sorts_and_truncates() {
        let mut samples = Vec::new();
        samples.extend(series(1, PlatformType::Desktop, &[50.0, 60.0, 55.0, 58.0]));
        samples.extend(series(2, PlatformType::Desktop, &[90.0, 91.0, 90.0, 92.0]));
        samples.extend(series(3, PlatformType::Desktop, &[30.0, 70.0, 50.0, 40.0]));
        samples.extend(series(4, PlatformType::Desktop, &[75.0, 76.0, 74.0, 75.0]));
        // one lucky measurement would otherwise rank first
        samples.extend(series(5, PlatformType::Desktop, &[99.0]));

        let report = compute_report(&samples, &ReportOptions::global(), &StoredGrade);

        let slugs: Vec<&str> = report
            .stability
            .desktop
            .iter()
            .map(|e| e.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["page-2", "page-4", "page-1"]);
        assert_eq!(report.url_count, Some(5));
        // every url is mobile-less, so each gets an empty mobile entry
        assert!(report.stability.mobile.iter().all(|e| e.variation.is_infinite()));
        assert_eq!(report.stability.differences.len(), 3);
        assert_eq!(report.history.desktop.len(), samples.len());
    }

    #[test]
    fn test_single_url_skips_threshold() {
        let mut samples = series(1, PlatformType::Desktop, &[50.0, 60.0, 55.0, 58.0]);
        samples.extend(series(2, PlatformType::Desktop, &[99.0]));
        samples.extend(series(3, PlatformType::Desktop, &[10.0, 20.0, 30.0, 40.0]));

        let global = compute_report(&samples, &ReportOptions::global(), &StoredGrade);
        let scoped = compute_report(&samples, &ReportOptions::single_url(), &StoredGrade);

        assert_eq!(global.stability.desktop.len(), 2);
        assert_eq!(scoped.stability.desktop.len(), 3);
        assert_eq!(scoped.stability.desktop[0].slug, "page-2");
    }

    #[test]
    fn test_cluster_report() {
        let mut samples = series(1, PlatformType::Desktop, &[80.0, 82.0]);
        samples.extend(series(2, PlatformType::Mobile, &[40.0, 60.0]));
        samples.extend(series(1, PlatformType::Mobile, &[70.0]));
        let clusters = vec![
            Cluster {
                slug: "home".to_string(),
                name: "Home".to_string(),
                url_ids: vec![1, 2],
            },
            Cluster {
                slug: "empty".to_string(),
                name: "Empty".to_string(),
                url_ids: vec![9],
            },
        ];

        let report = cluster_report(&clusters, &samples, &StoredGrade);

        assert_eq!(report.desktop.len(), 1);
        assert_eq!(report.desktop[0].average, 81);
        assert_eq!(report.mobile[0].variation, 30.0);
        assert_eq!(report.differences[0].key, "home");
        assert_eq!(report.differences[0].difference, 24);
    }

    #[test]
    fn test_grades_summary() {
        let samples = series(1, PlatformType::Desktop, &[80.0, 90.0]);
        let summary = grades_summary(&samples, &StoredGrade);

        assert_eq!(summary.average_score, 85);
        assert_eq!(summary.urls_monitored, 1);
        assert_eq!(summary.distribution.desktop[0].value, 85);
    }
}
