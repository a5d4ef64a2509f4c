//! The shared scoring primitives.
//!
//! Every sport's scorer routes through these functions; none of them is
//! re-implemented per sport.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::benchmarks::{MetricBenchmark, Preference};

/// Sub-score held for values past the ideal window in the good direction,
/// beyond the acceptable edge
pub const GOOD_DIRECTION_FLOOR: f64 = 90.0;

/// Linear partial credit from 0 at `edge` to 100 at `ideal`
fn partial_credit(value: f64, edge: f64, ideal: f64) -> f64 {
    let span = ideal - edge;
    if span.abs() < f64::EPSILON {
        return 0.0;
    }
    ((value - edge) / span * 100.0).clamp(0.0, 100.0)
}

/// Overshoot in the good direction: 100 at the ideal edge tapering to
/// [`GOOD_DIRECTION_FLOOR`] at the acceptable edge, held beyond it
fn overshoot_credit(value: f64, ideal: f64, edge: f64) -> f64 {
    let span = edge - ideal;
    if span.abs() < f64::EPSILON {
        return GOOD_DIRECTION_FLOOR;
    }
    let t = ((value - ideal) / span).clamp(0.0, 1.0);
    100.0 - (100.0 - GOOD_DIRECTION_FLOOR) * t
}

/// Map a raw metric value to a 0-100 sub-score
///
/// `None` for a non-finite value: the metric is excluded, not scored 0.
pub fn score_with_preference(value: f64, benchmark: &MetricBenchmark) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }

    let b = benchmark;
    if value >= b.ideal_min && value <= b.ideal_max {
        return Some(100.0);
    }

    let score = if value < b.ideal_min {
        match b.preference {
            Preference::Lower => overshoot_credit(value, b.ideal_min, b.acceptable_min),
            Preference::Higher | Preference::Center => {
                if value < b.acceptable_min {
                    0.0
                } else {
                    partial_credit(value, b.acceptable_min, b.ideal_min)
                }
            }
        }
    } else {
        match b.preference {
            Preference::Higher => overshoot_credit(value, b.ideal_max, b.acceptable_max),
            Preference::Lower | Preference::Center => {
                if value > b.acceptable_max {
                    0.0
                } else {
                    partial_credit(value, b.acceptable_max, b.ideal_max)
                }
            }
        }
    };
    Some(score)
}

/// Renormalize weights over the metrics that could be scored
///
/// The returned weights sum to 1 whenever `included` is non-empty. When
/// every included weight is zero the metrics share the weight equally.
pub fn adjust_weights_for_missing_metrics(
    weights: &BTreeMap<String, f64>,
    included: &BTreeSet<String>,
) -> BTreeMap<String, f64> {
    if included.is_empty() {
        return BTreeMap::new();
    }

    let raw = |metric: &String| {
        weights
            .get(metric)
            .copied()
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(0.0)
    };
    let total: f64 = included.iter().map(raw).sum();

    included
        .iter()
        .map(|metric| {
            let weight = if total > 0.0 {
                raw(metric) / total
            } else {
                1.0 / included.len() as f64
            };
            (metric.clone(), weight)
        })
        .collect()
}

/// Weighted sum of sub-scores
pub fn calculate_weighted_score(
    scores: &BTreeMap<String, f64>,
    weights: &BTreeMap<String, f64>,
) -> f64 {
    scores
        .iter()
        .map(|(metric, score)| score * weights.get(metric).copied().unwrap_or(0.0))
        .sum()
}

/// How much of the benchmark table could be evaluated, in [0, 1]
///
/// `0.7 × coverage + 0.3 × margin above the minimum`, zero below the
/// minimum or for an empty table.
pub fn calculate_scoring_confidence(included: usize, total: usize, min_required: usize) -> f64 {
    if total == 0 || included == 0 || included < min_required {
        return 0.0;
    }
    let coverage = included as f64 / total as f64;
    let margin = if total <= min_required {
        1.0
    } else {
        (included - min_required) as f64 / (total - min_required) as f64
    };
    (0.7 * coverage + 0.3 * margin).clamp(0.0, 1.0)
}

/// Multiplicative grade curve, then clamp to [0, 100]
pub fn apply_grade_curve(score: f64, factor: f64) -> f64 {
    if !score.is_finite() || !factor.is_finite() {
        return 0.0;
    }
    (score * (1.0 + factor)).clamp(0.0, 100.0)
}

/// Letter grade for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: f64) -> Grade {
        match score {
            s if s >= 90.0 => Grade::A,
            s if s >= 80.0 => Grade::B,
            s if s >= 70.0 => Grade::C,
            s if s >= 60.0 => Grade::D,
            _ => Grade::F,
        }
    }
}
