// src/db/mod.rs

use crate::models::{Cluster, CoreWebVitals, Grades, PerformanceSample, PlatformType};
use chrono::NaiveDateTime;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("sample {sample} references unknown {kind} id {id}")]
    DanglingReference {
        sample: Uuid,
        kind: &'static str,
        id: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlTarget {
    pub id: i64,
    pub slug: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: i64,
    pub slug: String,
}

/// Filters the data source applies before the engine sees anything.
/// The time range is inclusive on both ends.
#[derive(Debug, Clone)]
pub struct SampleQuery {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    pub url_id: Option<i64>,
    pub platform: Option<PlatformType>,
    pub provider_id: Option<i64>,
}

impl SampleQuery {
    pub fn between(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            from,
            to,
            url_id: None,
            platform: None,
            provider_id: None,
        }
    }

    fn matches(&self, sample: &PerformanceSample) -> bool {
        sample.recorded_at >= self.from
            && sample.recorded_at <= self.to
            && self.url_id.map_or(true, |id| sample.url_id == id)
            && self.platform.map_or(true, |p| sample.platform == p)
            && self.provider_id.map_or(true, |id| sample.provider_id == id)
    }
}

/// Source of resolved samples and the entities they are keyed by.
pub trait SampleStore: Send + Sync {
    /// Matching samples ordered by `recorded_at` ascending.
    fn samples(&self, query: &SampleQuery) -> Vec<PerformanceSample>;
    fn url_by_slug(&self, slug: &str) -> Option<UrlTarget>;
    fn provider_by_slug(&self, slug: &str) -> Option<Provider>;
    fn clusters(&self) -> Vec<Cluster>;
}

// Sample as stored on disk, before the url/provider join
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub url_id: i64,
    pub platform: PlatformType,
    pub provider_id: i64,
    pub recorded_at: NaiveDateTime,
    #[serde(flatten)]
    pub vitals: CoreWebVitals,
    #[serde(default)]
    pub grades: Option<Grades>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub urls: Vec<UrlTarget>,
    pub providers: Vec<Provider>,
    pub clusters: Vec<Cluster>,
    pub samples: Vec<SampleRecord>,
}

pub struct MemoryStore {
    urls: Vec<UrlTarget>,
    providers: Vec<Provider>,
    clusters: Vec<Cluster>,
    samples: Vec<PerformanceSample>,
}

impl MemoryStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let display = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: display.clone(),
            source,
        })?;
        let dataset: Dataset =
            serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: display.clone(),
                source,
            })?;
        let store = Self::from_dataset(dataset)?;
        info!(
            "Loaded {} samples across {} urls from {}",
            store.samples.len(),
            store.urls.len(),
            display
        );
        Ok(store)
    }

    /// Joins raw records to their url and provider rows.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, StoreError> {
        let urls: HashMap<i64, &UrlTarget> = dataset.urls.iter().map(|u| (u.id, u)).collect();
        let providers: HashMap<i64, &Provider> =
            dataset.providers.iter().map(|p| (p.id, p)).collect();

        let mut samples = Vec::with_capacity(dataset.samples.len());
        for record in &dataset.samples {
            let url = urls
                .get(&record.url_id)
                .ok_or(StoreError::DanglingReference {
                    sample: record.id,
                    kind: "url",
                    id: record.url_id,
                })?;
            let provider =
                providers
                    .get(&record.provider_id)
                    .ok_or(StoreError::DanglingReference {
                        sample: record.id,
                        kind: "provider",
                        id: record.provider_id,
                    })?;

            samples.push(PerformanceSample {
                id: record.id,
                url_id: url.id,
                url: url.url.clone(),
                url_slug: url.slug.clone(),
                platform: record.platform,
                provider_id: provider.id,
                provider: provider.slug.clone(),
                recorded_at: record.recorded_at,
                vitals: record.vitals.clone(),
                grades: record.grades.clone(),
            });
        }
        samples.sort_by_key(|s| s.recorded_at);

        Ok(Self {
            urls: dataset.urls,
            providers: dataset.providers,
            clusters: dataset.clusters,
            samples,
        })
    }
}

impl SampleStore for MemoryStore {
    fn samples(&self, query: &SampleQuery) -> Vec<PerformanceSample> {
        self.samples
            .iter()
            .filter(|s| query.matches(s))
            .cloned()
            .collect()
    }

    fn url_by_slug(&self, slug: &str) -> Option<UrlTarget> {
        self.urls.iter().find(|u| u.slug == slug).cloned()
    }

    fn provider_by_slug(&self, slug: &str) -> Option<Provider> {
        self.providers.iter().find(|p| p.slug == slug).cloned()
    }

    fn clusters(&self) -> Vec<Cluster> {
        self.clusters.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset() -> Dataset {
        serde_json::from_value(json!({
            "urls": [
                { "id": 1, "slug": "home", "url": "https://example.com/" },
                { "id": 2, "slug": "pricing", "url": "https://example.com/pricing" }
            ],
            "providers": [{ "id": 10, "slug": "lighthouse" }],
            "clusters": [{ "slug": "marketing", "name": "Marketing", "urlIds": [1, 2] }],
            "samples": [
                { "urlId": 2, "platform": "mobile", "providerId": 10,
                  "recordedAt": "2025-02-01T12:00:00", "lcp": 3000, "cls": 0.2 },
                { "urlId": 1, "platform": "desktop", "providerId": 10,
                  "recordedAt": "2025-02-01T08:00:00", "lcp": 1200,
                  "grades": { "performance": 93 } }
            ]
        }))
        .unwrap()
    }

    fn at(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_join_and_defaults() {
        let store = MemoryStore::from_dataset(dataset()).unwrap();
        let all = store.samples(&SampleQuery::between(
            at("2025-01-01T00:00:00"),
            at("2025-12-31T00:00:00"),
        ));

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].url_slug, "home");
        assert_eq!(all[0].provider, "lighthouse");
        assert_eq!(all[0].vitals.ttfb, 0);
        assert_eq!(all[1].url, "https://example.com/pricing");
        assert_eq!(all[1].vitals.cls, 0.2);
        assert!(all[1].grades.is_none());
    }

    #[test]
    fn test_query_filters() {
        let store = MemoryStore::from_dataset(dataset()).unwrap();
        let mut query = SampleQuery::between(at("2025-02-01T08:00:00"), at("2025-02-01T12:00:00"));
        assert_eq!(store.samples(&query).len(), 2);

        query.platform = Some(PlatformType::Mobile);
        assert_eq!(store.samples(&query).len(), 1);

        query.url_id = Some(1);
        assert!(store.samples(&query).is_empty());

        let narrow = SampleQuery::between(at("2025-02-01T08:00:01"), at("2025-02-01T11:59:59"));
        assert!(store.samples(&narrow).is_empty());
    }

    #[test]
    fn test_lookups() {
        let store = MemoryStore::from_dataset(dataset()).unwrap();
        assert_eq!(store.url_by_slug("pricing").map(|u| u.id), Some(2));
        assert!(store.url_by_slug("nope").is_none());
        assert_eq!(store.provider_by_slug("lighthouse").map(|p| p.id), Some(10));
        assert_eq!(store.clusters()[0].url_ids, vec![1, 2]);
    }

    #[test]
    fn test_dangling_url_is_rejected() {
        let mut data = dataset();
        data.samples[0].url_id = 99;
        assert!(matches!(
            MemoryStore::from_dataset(data),
            Err(StoreError::DanglingReference { kind: "url", id: 99, .. })
        ));
    }
}
