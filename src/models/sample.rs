use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// Device class a measurement was taken on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformType {
    Desktop,
    Mobile,
}

impl PlatformType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformType::Desktop => "desktop",
            PlatformType::Mobile => "mobile",
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlatformType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(PlatformType::Desktop),
            "mobile" => Ok(PlatformType::Mobile),
            other => Err(other.to_string()),
        }
    }
}

// Lighthouse-style category grades (0-100) stored alongside a measurement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grades {
    #[serde(default)]
    pub performance: f64,
    #[serde(default)]
    pub accessibility: f64,
    #[serde(default)]
    pub best_practices: f64,
    #[serde(default)]
    pub seo: f64,
}

/// Raw Core Web Vitals for one visit. Timings are integer milliseconds,
/// `cls` is a unitless score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreWebVitals {
    pub ttfb: u32,
    pub fcp: u32,
    pub dcl: u32,
    pub lcp: u32,
    pub tti: u32,
    pub si: u32,
    pub cls: f64,
    pub tbt: u32,
}

/// One measurement event, with url/platform/provider already resolved by
/// the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSample {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub url_id: i64,
    pub url: String,
    pub url_slug: String,
    pub platform: PlatformType,
    pub provider_id: i64,
    #[serde(default)]
    pub provider: String,
    pub recorded_at: NaiveDateTime,
    #[serde(flatten)]
    pub vitals: CoreWebVitals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grades: Option<Grades>,
}

impl PerformanceSample {
    pub fn is_on(&self, platform: PlatformType) -> bool {
        self.platform == platform
    }
}

// Subject grouping several urls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub url_ids: Vec<i64>,
}
