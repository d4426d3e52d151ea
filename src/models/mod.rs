// src/models/mod.rs

pub mod api;
pub mod app;
pub mod report;
pub mod sample;
pub mod stability;
pub mod stats;

pub use api::{RangeParams, StatsParams};
pub use app::AppState;
pub use report::{
    DataPoint, GradeValue, GradesSummary, HistoryPoint, PlatformSeries, Report, TimeOfDayPoint,
};
pub use sample::{Cluster, CoreWebVitals, Grades, PerformanceSample, PlatformType};
pub use stability::{PlatformDifference, PlatformStability, StabilityEntry, StabilityReport};
pub use stats::{MetricStats, PercentileSummary};
