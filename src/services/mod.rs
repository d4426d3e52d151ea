pub mod site_stats_service;

pub use site_stats_service::{
    apply_minimum_threshold, average_score, cluster_report, cluster_stability, compute_metric_stats,
    compute_report, compute_stats, data_points, diff_platforms, grade_stability,
    grades_distribution, grades_summary, history, time_of_day, urls_monitored, CwvHeuristic,
    GradeOrHeuristic, ReportOptions, ReportScope, SampleScorer, ScorerKind, StoredGrade,
};
