use crate::models::PerformanceSample;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const LCP_DIVISOR: f64 = 25.0;
const FCP_DIVISOR: f64 = 18.0;
const CLS_DIVISOR: f64 = 100.0;

/// Turns a sample into the 0-100 quality score the stability analyzers
/// work on. The scoring rule is a business decision, so it is passed in
/// rather than baked into the aggregations.
pub trait SampleScorer {
    fn score(&self, sample: &PerformanceSample) -> f64;
}

impl<F> SampleScorer for F
where
    F: Fn(&PerformanceSample) -> f64,
{
    fn score(&self, sample: &PerformanceSample) -> f64 {
        self(sample)
    }
}

// Pre-computed Lighthouse performance grade, 0 when the sample has none
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredGrade;

impl SampleScorer for StoredGrade {
    fn score(&self, sample: &PerformanceSample) -> f64 {
        sample.grades.as_ref().map_or(0.0, |g| g.performance)
    }
}

/// Grade derived from lcp, fcp and cls. Each metric loses one point per
/// divisor unit (25ms lcp, 18ms fcp, 0.01 cls) from 100, floored at zero,
/// and the three are averaged.
#[derive(Debug, Clone, Copy, Default)]
pub struct CwvHeuristic;

impl SampleScorer for CwvHeuristic {
    fn score(&self, sample: &PerformanceSample) -> f64 {
        let vitals = &sample.vitals;
        let lcp_pts = (100.0 - f64::from(vitals.lcp) / LCP_DIVISOR).max(0.0);
        let fcp_pts = (100.0 - f64::from(vitals.fcp) / FCP_DIVISOR).max(0.0);
        let cls_pts = (100.0 - vitals.cls * CLS_DIVISOR).max(0.0);

        round_half_up((lcp_pts + fcp_pts + cls_pts) / 3.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GradeOrHeuristic;

impl SampleScorer for GradeOrHeuristic {
    fn score(&self, sample: &PerformanceSample) -> f64 {
        match &sample.grades {
            Some(grades) => grades.performance,
            None => CwvHeuristic.score(sample),
        }
    }
}

/// Scorer selection as it appears in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    Stored,
    Heuristic,
    #[default]
    Auto,
}

impl SampleScorer for ScorerKind {
    fn score(&self, sample: &PerformanceSample) -> f64 {
        match self {
            ScorerKind::Stored => StoredGrade.score(sample),
            ScorerKind::Heuristic => CwvHeuristic.score(sample),
            ScorerKind::Auto => GradeOrHeuristic.score(sample),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stored" => Ok(ScorerKind::Stored),
            "heuristic" => Ok(ScorerKind::Heuristic),
            "auto" => Ok(ScorerKind::Auto),
            other => Err(format!("unknown scorer '{}'", other)),
        }
    }
}

// Math.round semantics: halves go towards +inf. Compares the exact
// fraction instead of flooring `value + 0.5`, which can round up.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
