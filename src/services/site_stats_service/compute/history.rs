use crate::models::{DataPoint, HistoryPoint, PerformanceSample, PlatformSeries};

/// Raw vitals per sample for charting, split by platform. Input order is
/// kept; the caller supplies samples sorted by `recorded_at`.
pub fn history(samples: &[PerformanceSample]) -> PlatformSeries<HistoryPoint> {
    let mut series = PlatformSeries::default();
    for sample in samples {
        let v = &sample.vitals;
        series.push(
            sample.platform,
            HistoryPoint {
                date: sample.recorded_at,
                ttfb: v.ttfb,
                fcp: v.fcp,
                dcl: v.dcl,
                lcp: v.lcp,
                tti: v.tti,
                si: v.si,
                cls: v.cls,
                tbt: v.tbt,
            },
        );
    }
    series
}

/// Flat listing of samples with their platform and provider, oldest first.
pub fn data_points(samples: &[PerformanceSample]) -> Vec<DataPoint> {
    let mut points: Vec<DataPoint> = samples
        .iter()
        .map(|sample| {
            let v = &sample.vitals;
            DataPoint {
                recorded_at: sample.recorded_at,
                platform: sample.platform,
                provider: sample.provider.clone(),
                ttfb: v.ttfb,
                fcp: v.fcp,
                dcl: v.dcl,
                lcp: v.lcp,
                tti: v.tti,
                si: v.si,
                cls: v.cls,
                tbt: v.tbt,
            }
        })
        .collect();
    points.sort_by_key(|p| p.recorded_at);
    points
}
