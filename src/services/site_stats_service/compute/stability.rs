use crate::models::{Cluster, PerformanceSample, PlatformType, StabilityEntry};
use crate::services::site_stats_service::compute::score::{round_half_up, SampleScorer};
use indexmap::IndexMap;
use log::debug;
use std::collections::HashSet;

struct UrlGroup<'a> {
    slug: &'a str,
    scores: Vec<f64>,
}

/// Per-URL stability on one platform.
///
/// Every URL that appears in `samples` gets an entry, including URLs that
/// only have measurements on the other platform. Those come back with an
/// infinite variation and an average of 0. Entries follow the order in
/// which each URL is first seen; callers sort as they need.
pub fn grade_stability<S: SampleScorer + ?Sized>(
    samples: &[PerformanceSample],
    platform: PlatformType,
    scorer: &S,
) -> Vec<StabilityEntry> {
    let mut groups: IndexMap<&str, UrlGroup> = IndexMap::new();

    for sample in samples {
        let group = groups.entry(sample.url.as_str()).or_insert_with(|| UrlGroup {
            slug: sample.url_slug.as_str(),
            scores: Vec::new(),
        });
        if sample.is_on(platform) {
            group.scores.push(scorer.score(sample));
        }
    }

    debug!("{} url groups for {} stability", groups.len(), platform);

    groups
        .into_iter()
        .map(|(url, group)| {
            let (variation, average) = spread_and_mean(&group.scores);
            StabilityEntry {
                key: url.to_string(),
                slug: group.slug.to_string(),
                url: Some(url.to_string()),
                name: None,
                variation,
                average,
                samples: group.scores,
            }
        })
        .collect()
}

/// Per-cluster stability on one platform.
///
/// Scores inside a cluster are ordered by `recorded_at`. Unlike the per-URL
/// variant, clusters without a single score on `platform` are dropped.
pub fn cluster_stability<S: SampleScorer + ?Sized>(
    clusters: &[Cluster],
    samples: &[PerformanceSample],
    platform: PlatformType,
    scorer: &S,
) -> Vec<StabilityEntry> {
    let mut groups: IndexMap<&str, (&str, Vec<&PerformanceSample>)> = IndexMap::new();

    for cluster in clusters {
        let members: HashSet<i64> = cluster.url_ids.iter().copied().collect();
        let group = groups
            .entry(cluster.slug.as_str())
            .or_insert_with(|| (cluster.name.as_str(), Vec::new()));
        group.1.extend(
            samples
                .iter()
                .filter(|s| s.is_on(platform) && members.contains(&s.url_id)),
        );
    }

    let entries: Vec<StabilityEntry> = groups
        .into_iter()
        .filter_map(|(slug, (name, mut members))| {
            if members.is_empty() {
                return None;
            }
            members.sort_by_key(|s| s.recorded_at);
            let scores: Vec<f64> = members.iter().map(|s| scorer.score(s)).collect();
            let (variation, average) = spread_and_mean(&scores);
            Some(StabilityEntry {
                key: slug.to_string(),
                slug: slug.to_string(),
                url: None,
                name: Some(name.to_string()),
                variation,
                average,
                samples: scores,
            })
        })
        .collect();

    debug!(
        "{} of {} clusters have {} data",
        entries.len(),
        clusters.len(),
        platform
    );

    entries
}

// (max - min, rounded mean); (Infinity, 0) for no scores
fn spread_and_mean(scores: &[f64]) -> (f64, i64) {
    if scores.is_empty() {
        return (f64::INFINITY, 0);
    }

    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;

    (max - min, round_half_up(mean) as i64)
}
