//! Body-segment lengths and ratios, composed from the distance primitive.

use super::distance::{calculate_distance, midpoint, DistanceResult};
use crate::pose::landmarks::{
    LEFT_ANKLE, LEFT_HIP, LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP, RIGHT_SHOULDER,
};
use crate::pose::{PoseFrame, Side};

fn distance_between(frame: &PoseFrame, a: usize, b: usize, min_visibility: f64) -> DistanceResult {
    match (frame.landmark(a), frame.landmark(b)) {
        (Some(pa), Some(pb)) => calculate_distance(pa, pb, min_visibility),
        _ => DistanceResult::invalid(0.0),
    }
}

/// Shoulder→elbow plus elbow→wrist
pub fn arm_length(frame: &PoseFrame, side: Side, min_visibility: f64) -> DistanceResult {
    let upper = distance_between(frame, side.shoulder(), side.elbow(), min_visibility);
    let fore = distance_between(frame, side.elbow(), side.wrist(), min_visibility);
    if !upper.is_valid || !fore.is_valid {
        return DistanceResult::invalid(upper.confidence.min(fore.confidence));
    }
    DistanceResult {
        normalized: upper.normalized + fore.normalized,
        is_valid: true,
        confidence: upper.confidence.min(fore.confidence),
    }
}

/// Shoulder midpoint to hip midpoint
pub fn torso_length(frame: &PoseFrame, min_visibility: f64) -> DistanceResult {
    match (
        frame.landmark(LEFT_SHOULDER),
        frame.landmark(RIGHT_SHOULDER),
        frame.landmark(LEFT_HIP),
        frame.landmark(RIGHT_HIP),
    ) {
        (Some(ls), Some(rs), Some(lh), Some(rh)) => {
            let shoulders = midpoint(ls, rs);
            let hips = midpoint(lh, rh);
            calculate_distance(&shoulders, &hips, min_visibility)
        }
        _ => DistanceResult::invalid(0.0),
    }
}

pub fn shoulder_width(frame: &PoseFrame, min_visibility: f64) -> DistanceResult {
    distance_between(frame, LEFT_SHOULDER, RIGHT_SHOULDER, min_visibility)
}

pub fn hip_width(frame: &PoseFrame, min_visibility: f64) -> DistanceResult {
    distance_between(frame, LEFT_HIP, RIGHT_HIP, min_visibility)
}

/// Ankle-to-ankle distance
pub fn stance_width(frame: &PoseFrame, min_visibility: f64) -> DistanceResult {
    distance_between(frame, LEFT_ANKLE, RIGHT_ANKLE, min_visibility)
}

/// Straight-line shoulder→wrist reach as a percentage of the folded arm
/// length, clamped to [0, 100]. `None` when any arm landmark is hidden.
pub fn arm_extension_percentage(frame: &PoseFrame, side: Side, min_visibility: f64) -> Option<f64> {
    let reach =
        distance_between(frame, side.shoulder(), side.wrist(), min_visibility).valid_value()?;
    let length = arm_length(frame, side, min_visibility).valid_value()?;
    if length <= 0.0 {
        return None;
    }
    Some((reach / length * 100.0).clamp(0.0, 100.0))
}
