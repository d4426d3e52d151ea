use serde::{Deserialize, Serialize};

// pub struct to store nearest-rank percentile statistics for one metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct PercentileSummary {
    pub min: f64,
    pub p50: f64,
    pub avg: f64,
    pub p75: f64,
    pub p90: f64,
    pub p99: f64,
    pub max: f64,
}

// pub struct holding one summary per Core Web Vitals metric
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MetricStats {
    pub ttfb: PercentileSummary,
    pub fcp: PercentileSummary,
    pub dcl: PercentileSummary,
    pub lcp: PercentileSummary,
    pub tti: PercentileSummary,
    pub si: PercentileSummary,
    pub cls: PercentileSummary,
    pub tbt: PercentileSummary,
}
