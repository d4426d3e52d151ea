pub mod grades;
pub mod history;
pub mod percentiles;
pub mod platform;
pub mod report;
pub mod score;
pub mod stability;
pub mod threshold;
pub mod time_of_day;

pub use grades::{average_score, grades_distribution, urls_monitored};
pub use history::{data_points, history};
pub use percentiles::{compute_metric_stats, compute_stats};
pub use platform::diff_platforms;
pub use report::{
    cluster_report, compute_report, grades_summary, ReportOptions, ReportScope,
};
pub use score::{CwvHeuristic, GradeOrHeuristic, SampleScorer, ScorerKind, StoredGrade};
pub use stability::{cluster_stability, grade_stability};
pub use threshold::apply_minimum_threshold;
pub use time_of_day::time_of_day;
