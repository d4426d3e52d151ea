use crate::models::{MetricStats, PercentileSummary, PerformanceSample};

/// Nearest-rank summary of `values`. The caller's slice is left untouched.
/// An empty slice yields an all-zero summary.
pub fn compute_stats(values: &[f64]) -> PercentileSummary {
    if values.is_empty() {
        return PercentileSummary::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    let sum: f64 = sorted.iter().sum();
    let mean = sum / count as f64;

    PercentileSummary {
        min: sorted[0],
        p50: nearest_rank(&sorted, 50),
        avg: round_to_cents(mean),
        p75: nearest_rank(&sorted, 75),
        p90: nearest_rank(&sorted, 90),
        p99: nearest_rank(&sorted, 99),
        max: sorted[count - 1],
    }
}

// index = ceil(p/100 * n) - 1, clamped into the slice
fn nearest_rank(sorted: &[f64], percentile: u32) -> f64 {
    let n = sorted.len();
    let rank = (f64::from(percentile) * n as f64 / 100.0).ceil() as usize;
    let index = rank.saturating_sub(1).min(n - 1);
    sorted[index]
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Headline summary over every sample regardless of platform.
pub fn compute_metric_stats(samples: &[PerformanceSample]) -> MetricStats {
    let column = |pick: fn(&PerformanceSample) -> f64| -> PercentileSummary {
        let values: Vec<f64> = samples.iter().map(pick).collect();
        compute_stats(&values)
    };

    MetricStats {
        ttfb: column(|s| f64::from(s.vitals.ttfb)),
        fcp: column(|s| f64::from(s.vitals.fcp)),
        dcl: column(|s| f64::from(s.vitals.dcl)),
        lcp: column(|s| f64::from(s.vitals.lcp)),
        tti: column(|s| f64::from(s.vitals.tti)),
        si: column(|s| f64::from(s.vitals.si)),
        cls: column(|s| s.vitals.cls),
        tbt: column(|s| f64::from(s.vitals.tbt)),
    }
}
