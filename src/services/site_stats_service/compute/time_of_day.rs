use crate::models::{PerformanceSample, PlatformSeries, TimeOfDayPoint};
use crate::services::site_stats_service::compute::score::SampleScorer;
use chrono::Timelike;

/// One point per sample on the wall clock it was recorded at, split by
/// platform in input order. No timezone conversion is applied.
pub fn time_of_day<S: SampleScorer + ?Sized>(
    samples: &[PerformanceSample],
    scorer: &S,
) -> PlatformSeries<TimeOfDayPoint> {
    let mut series = PlatformSeries::default();
    for sample in samples {
        series.push(sample.platform, to_point(sample, scorer));
    }
    series
}

fn to_point<S: SampleScorer + ?Sized>(sample: &PerformanceSample, scorer: &S) -> TimeOfDayPoint {
    let at = sample.recorded_at;
    TimeOfDayPoint {
        date: at.format("%Y-%m-%d").to_string(),
        hour: at.format("%H:%M").to_string(),
        time_decimal: f64::from(at.hour()) + f64::from(at.minute()) / 60.0,
        score: scorer.score(sample),
    }
}
