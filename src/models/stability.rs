use serde::{Deserialize, Serialize};

/// Spread and mean of the quality scores collected for one subject on one
/// platform. `variation` is `f64::INFINITY` when no scores were collected,
/// which serializes to `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilityEntry {
    pub key: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "infinite_as_null")]
    pub variation: f64,
    pub average: i64,
    pub samples: Vec<f64>,
}

impl StabilityEntry {
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformStability {
    pub desktop: Vec<StabilityEntry>,
    pub mobile: Vec<StabilityEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDifference {
    pub key: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub desktop_average: i64,
    pub mobile_average: i64,
    pub difference: i64,
    #[serde(with = "infinite_as_null")]
    pub desktop_variation: f64,
    #[serde(with = "infinite_as_null")]
    pub mobile_variation: f64,
}

// Response shape for stability sections: both platforms plus their differences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    pub mobile: Vec<StabilityEntry>,
    pub desktop: Vec<StabilityEntry>,
    pub differences: Vec<PlatformDifference>,
}

mod infinite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
