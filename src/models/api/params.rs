use serde::Deserialize;

// Range bounds stay optional here so a missing one is reported as an
// invalid date rather than rejected by the extractor
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub platform: Option<String>,
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}
