// Scoring - benchmark-driven 0-100 performance score with confidence
//
// Module organization:
// - primitives: the four shared functions (per-metric normalization, weight
//   renormalization, weighted sum, confidence) plus grade curve and letter grade
// - this module: result types, the generic `score`, and per-sport scorers
//
// Scoring never fails. Missing metrics are excluded, too few metrics give a
// zero score with zero confidence, and an unsupported sport/action gives an
// explicit unsupported result.

mod primitives;

pub use primitives::{
    adjust_weights_for_missing_metrics, apply_grade_curve, calculate_scoring_confidence,
    calculate_weighted_score, score_with_preference, Grade, GOOD_DIRECTION_FLOOR,
};

use std::collections::{BTreeMap, BTreeSet};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::benchmarks::{registry, Action, MetricBenchmark, Sport, SportAction, SportBenchmarks};
use crate::config::ScoringConfig;
use crate::metrics::{metric_value, MetricsMap};

/// How one metric contributed to the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScoreResult {
    /// Raw metric value
    pub value: f64,
    /// 0-100 sub-score
    pub score: f64,
    /// Renormalized weight actually used
    pub weight: f64,
    /// `score × weight`
    pub weighted_score: f64,
    pub within_ideal: bool,
    pub benchmark: MetricBenchmark,
}

/// Outcome of one scoring invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// 0-100 after the grade curve
    pub overall_score: f64,
    /// Metric → 0-100 sub-score, included metrics only
    pub breakdown: BTreeMap<String, f64>,
    pub details: BTreeMap<String, MetricScoreResult>,
    pub metrics_included: usize,
    pub metrics_total: usize,
    /// 0-1, how much of the table could be evaluated
    pub confidence: f64,
    pub grade: Grade,
    /// `sport/action` the table belongs to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Why the score is degraded or missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub supported: bool,
    /// Milliseconds since the Unix epoch
    pub calculated_at_ms: u64,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl ScoringResult {
    /// Well-formed result for a sport/action pair with no table
    pub fn unsupported(sport: &str, action: &str) -> Self {
        Self {
            overall_score: 0.0,
            breakdown: BTreeMap::new(),
            details: BTreeMap::new(),
            metrics_included: 0,
            metrics_total: 0,
            confidence: 0.0,
            grade: Grade::F,
            label: None,
            message: Some(format!(
                "Scoring is not supported for sport '{}' action '{}'",
                sport, action
            )),
            supported: false,
            calculated_at_ms: now_ms(),
        }
    }
}

/// Score a metrics map against a table with no grade curve
pub fn score(metrics: &MetricsMap, benchmarks: &SportBenchmarks) -> ScoringResult {
    score_with_curve(metrics, benchmarks, 0.0)
}

/// Score a metrics map against a table, applying `curve` to the weighted sum
pub fn score_with_curve(
    metrics: &MetricsMap,
    benchmarks: &SportBenchmarks,
    curve: f64,
) -> ScoringResult {
    let mut breakdown = BTreeMap::new();
    let mut raw_values = BTreeMap::new();
    for (metric, benchmark) in &benchmarks.metrics {
        let sub_score = metric_value(metrics, metric)
            .and_then(|value| score_with_preference(value, benchmark).map(|s| (value, s)));
        if let Some((value, sub_score)) = sub_score {
            breakdown.insert(metric.clone(), sub_score);
            raw_values.insert(metric.clone(), value);
        }
    }

    let included: BTreeSet<String> = breakdown.keys().cloned().collect();
    let weights = adjust_weights_for_missing_metrics(&benchmarks.weights, &included);
    let metrics_included = included.len();
    let metrics_total = benchmarks.metrics.len();

    let details = breakdown
        .iter()
        .filter_map(|(metric, &sub_score)| {
            let benchmark = *benchmarks.metrics.get(metric)?;
            let value = *raw_values.get(metric)?;
            let weight = weights.get(metric).copied().unwrap_or(0.0);
            Some((
                metric.clone(),
                MetricScoreResult {
                    value,
                    score: sub_score,
                    weight,
                    weighted_score: sub_score * weight,
                    within_ideal: value >= benchmark.ideal_min && value <= benchmark.ideal_max,
                    benchmark,
                },
            ))
        })
        .collect();

    let (overall_score, confidence, message) = if metrics_included < benchmarks.min_required_metrics
    {
        log::debug!(
            "[Scoring] {} of {} required metrics available, withholding score",
            metrics_included,
            benchmarks.min_required_metrics
        );
        (
            0.0,
            0.0,
            Some(format!(
                "Only {} of {} required metrics could be measured",
                metrics_included, benchmarks.min_required_metrics
            )),
        )
    } else {
        let weighted = calculate_weighted_score(&breakdown, &weights);
        (
            apply_grade_curve(weighted, curve),
            calculate_scoring_confidence(
                metrics_included,
                metrics_total,
                benchmarks.min_required_metrics,
            ),
            None,
        )
    };

    ScoringResult {
        overall_score,
        breakdown,
        details,
        metrics_included,
        metrics_total,
        confidence,
        grade: Grade::from_score(overall_score),
        label: None,
        message,
        supported: true,
        calculated_at_ms: now_ms(),
    }
}

fn score_registered(
    metrics: &MetricsMap,
    sport: Sport,
    action: Action,
    curve: f64,
) -> ScoringResult {
    let key = SportAction { sport, action };
    match registry().get(key) {
        Some(table) => {
            let mut result = score_with_curve(metrics, table, curve);
            result.label = Some(key.to_string());
            result
        }
        None => ScoringResult::unsupported(sport.as_str(), action.as_str()),
    }
}

/// Basketball scorer (no curve by default)
pub fn score_basketball(
    metrics: &MetricsMap,
    action: Action,
    config: &ScoringConfig,
) -> ScoringResult {
    score_registered(metrics, Sport::Basketball, action, config.basketball_curve)
}

/// Badminton scorer (+0.15 curve by default)
pub fn score_badminton(
    metrics: &MetricsMap,
    action: Action,
    config: &ScoringConfig,
) -> ScoringResult {
    score_registered(metrics, Sport::Badminton, action, config.badminton_curve)
}

/// Score by caller-supplied names, dispatching to the sport's scorer
pub fn score_action(
    metrics: &MetricsMap,
    sport: &str,
    action: &str,
    config: &ScoringConfig,
) -> ScoringResult {
    match SportAction::parse(sport, action) {
        Some(key) => match key.sport {
            Sport::Basketball => score_basketball(metrics, key.action, config),
            Sport::Badminton => score_badminton(metrics, key.action, config),
        },
        None => {
            log::warn!(
                "[Scoring] Unsupported sport/action '{}'/'{}'",
                sport,
                action
            );
            ScoringResult::unsupported(sport, action)
        }
    }
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod tests;
