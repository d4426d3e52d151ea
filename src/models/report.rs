use crate::models::sample::PlatformType;
use crate::models::stability::StabilityReport;
use crate::models::stats::MetricStats;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// Desktop/mobile split used by every per-sample projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSeries<T> {
    pub mobile: Vec<T>,
    pub desktop: Vec<T>,
}

impl<T> Default for PlatformSeries<T> {
    fn default() -> Self {
        Self {
            mobile: Vec::new(),
            desktop: Vec::new(),
        }
    }
}

impl<T> PlatformSeries<T> {
    pub fn push(&mut self, platform: PlatformType, item: T) {
        match platform {
            PlatformType::Desktop => self.desktop.push(item),
            PlatformType::Mobile => self.mobile.push(item),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDayPoint {
    pub date: String,
    pub hour: String,
    pub time_decimal: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDateTime,
    pub ttfb: u32,
    pub fcp: u32,
    pub dcl: u32,
    pub lcp: u32,
    pub tti: u32,
    pub si: u32,
    pub cls: f64,
    pub tbt: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub recorded_at: NaiveDateTime,
    pub platform: PlatformType,
    pub provider: String,
    pub ttfb: u32,
    pub fcp: u32,
    pub dcl: u32,
    pub lcp: u32,
    pub tti: u32,
    pub si: u32,
    pub cls: f64,
    pub tbt: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeValue {
    pub metric: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradesSummary {
    pub average_score: i64,
    pub urls_monitored: usize,
    pub distribution: PlatformSeries<GradeValue>,
}

/// Everything the stats endpoints return for one time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub stats: MetricStats,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_count: Option<usize>,
    pub latest_timestamp: Option<NaiveDateTime>,
    pub stability: StabilityReport,
    pub time_of_day: PlatformSeries<TimeOfDayPoint>,
    pub history: PlatformSeries<HistoryPoint>,
}
