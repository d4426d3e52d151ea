use crate::models::{PlatformStability, StabilityEntry};
use log::debug;

/// Drops stability entries backed by too few samples, so that a subject
/// measured once or twice cannot top a "most stable" ranking.
///
/// Heuristic: sort the sample counts, take the one at index
/// `round(len / 2)` and halve it. Entries below that are removed. The index
/// is the upper median and can fall off the end of a one-element list; in
/// that case, and for an empty list, nothing is filtered.
pub fn apply_minimum_threshold(stability: PlatformStability) -> PlatformStability {
    PlatformStability {
        desktop: filter_platform(stability.desktop),
        mobile: filter_platform(stability.mobile),
    }
}

fn filter_platform(entries: Vec<StabilityEntry>) -> Vec<StabilityEntry> {
    let Some(threshold) = minimum_datapoints(&entries) else {
        return entries;
    };

    let before = entries.len();
    let kept: Vec<StabilityEntry> = entries
        .into_iter()
        .filter(|entry| entry.sample_count() as f64 >= threshold)
        .collect();

    debug!(
        "minimum datapoints {}: kept {} of {} entries",
        threshold,
        kept.len(),
        before
    );

    kept
}

fn minimum_datapoints(entries: &[StabilityEntry]) -> Option<f64> {
    let mut counts: Vec<usize> = entries.iter().map(StabilityEntry::sample_count).collect();
    counts.sort_unstable();

    // round half up, as Math.round would
    let index = (counts.len() + 1) / 2;
    counts.get(index).map(|&count| count as f64 / 2.0)
}
