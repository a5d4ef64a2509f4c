// Metrics - sport/action-specific measurements extracted from a session
//
// Module organization:
// - keys: metric name constants shared by extractors, benchmarks and rules
// - common: measurements shared by every sport (knee bend, follow-through, ...)
// - basketball / badminton: per-sport extractors
//
// The hand-off artifact is a flat `MetricsMap`. A `None` entry means "not
// computable for this session" and is never the same as zero. Consumers go
// through `metric_value` / `with_metric` instead of reading the map directly,
// so a missing or non-finite value can never be scored or flagged.

mod badminton;
mod basketball;
mod common;

use std::collections::BTreeMap;

use crate::benchmarks::{Sport, SportAction};
use crate::config::AnalysisConfig;
use crate::keyframes::{JumpAnalysis, Keyframes};
use crate::pose::{PoseFrame, Side};

/// Metric name constants
pub mod keys {
    pub const ELBOW_ANGLE_AT_RELEASE: &str = "elbow_angle_at_release";
    pub const KNEE_BEND: &str = "knee_bend";
    pub const RELEASE_ANGLE: &str = "release_angle";
    pub const RELEASE_HEIGHT: &str = "release_height";
    pub const JUMP_HEIGHT: &str = "jump_height";
    pub const FOLLOW_THROUGH: &str = "follow_through";
    pub const BODY_BALANCE: &str = "body_balance";
    pub const SHOULDER_TILT: &str = "shoulder_tilt";

    pub const ELBOW_AT_CONTACT: &str = "elbow_at_contact";
    pub const CONTACT_HEIGHT: &str = "contact_height";
    pub const TRUNK_ROTATION: &str = "trunk_rotation";
    pub const WRIST_SPEED: &str = "wrist_speed";
    pub const STANCE_WIDTH_RATIO: &str = "stance_width_ratio";
}

/// Metric name → value, `None` when the metric could not be computed
pub type MetricsMap = BTreeMap<String, Option<f64>>;

/// Value of `key`, only when present and finite
pub fn metric_value(metrics: &MetricsMap, key: &str) -> Option<f64> {
    metrics
        .get(key)
        .copied()
        .flatten()
        .filter(|v| v.is_finite())
}

/// Evaluate `f` only when `key` holds a usable value
///
/// ```
/// use biomech_core::metrics::{with_metric, MetricsMap};
///
/// let mut metrics = MetricsMap::new();
/// metrics.insert("knee_bend".to_string(), Some(120.0));
/// metrics.insert("release_angle".to_string(), None);
///
/// assert_eq!(with_metric(&metrics, "knee_bend", |v| v > 100.0), Some(true));
/// assert_eq!(with_metric(&metrics, "release_angle", |v| v > 40.0), None);
/// ```
pub fn with_metric<T, F>(metrics: &MetricsMap, key: &str, f: F) -> Option<T>
where
    F: FnOnce(f64) -> T,
{
    metric_value(metrics, key).map(f)
}

/// Insert a metric, storing non-finite values as `None`
pub(crate) fn record(metrics: &mut MetricsMap, key: &str, value: Option<f64>) {
    metrics.insert(key.to_string(), value.filter(|v| v.is_finite()));
}

/// Everything an extractor may read
#[derive(Debug, Clone, Copy)]
pub struct MetricContext<'a> {
    pub frames: &'a [PoseFrame],
    pub keyframes: &'a Keyframes,
    pub jump: &'a JumpAnalysis,
    /// Resolved frame rate (never <= 0)
    pub fps: f64,
    /// Shooting / racket side
    pub side: Side,
    pub config: &'a AnalysisConfig,
}

impl<'a> MetricContext<'a> {
    /// Frame at a keyframe index, if both exist
    pub fn frame_at(&self, index: Option<usize>) -> Option<&'a PoseFrame> {
        index.and_then(|i| self.frames.get(i))
    }

    /// Configured visibility gate for distances, segments and velocities
    pub fn distance_gate(&self) -> f64 {
        self.config.kinematics.min_distance_visibility
    }
}

/// Extract the metric set for one sport/action
///
/// Every metric of the action is present in the map; those that could not
/// be computed hold `None`.
pub fn extract_metrics(ctx: &MetricContext<'_>, key: SportAction) -> MetricsMap {
    match key.sport {
        Sport::Basketball => basketball::extract(ctx, key.action),
        Sport::Badminton => badminton::extract(ctx, key.action),
    }
}
