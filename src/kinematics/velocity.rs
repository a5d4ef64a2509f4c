//! Landmark velocity and acceleration
//!
//! Velocities are in normalized units per second (frame displacement × fps).
//! No smoothing happens here; noisy input produces noisy derivatives, which
//! is why [`calculate_average_velocity`] uses total displacement over total
//! elapsed time instead of averaging per-frame samples.

use serde::{Deserialize, Serialize};

use super::effective_fps;
use crate::pose::{NormalizedPoint, PoseFrame};

/// Velocity of one landmark, image coordinates (positive vy = moving down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityResult {
    pub vx: f64,
    pub vy: f64,
    pub speed: f64,
    pub is_valid: bool,
    pub confidence: f64,
}

impl VelocityResult {
    fn invalid(confidence: f64) -> Self {
        Self {
            vx: 0.0,
            vy: 0.0,
            speed: 0.0,
            is_valid: false,
            confidence,
        }
    }
}

/// Highest speed found in a frame range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakVelocity {
    pub speed: f64,
    /// Frame (index into the slice) where the peak occurred
    pub frame_index: usize,
    pub is_valid: bool,
}

/// Change in velocity per second
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelerationResult {
    pub ax: f64,
    pub ay: f64,
    pub magnitude: f64,
    pub is_valid: bool,
}

/// Velocity between two consecutive samples of the same landmark
pub fn calculate_velocity(
    prev: &NormalizedPoint,
    curr: &NormalizedPoint,
    fps: f64,
    min_visibility: f64,
) -> VelocityResult {
    let confidence = prev.visibility().min(curr.visibility());
    if confidence < min_visibility {
        return VelocityResult::invalid(confidence);
    }

    let fps = effective_fps(fps);
    let vx = (curr.x - prev.x) * fps;
    let vy = (curr.y - prev.y) * fps;
    VelocityResult {
        vx,
        vy,
        speed: (vx * vx + vy * vy).sqrt(),
        is_valid: true,
        confidence,
    }
}

/// Velocity of `landmark` arriving at `frame_index` (from the previous frame)
pub fn landmark_velocity(
    frames: &[PoseFrame],
    landmark: usize,
    frame_index: usize,
    fps: f64,
    min_visibility: f64,
) -> VelocityResult {
    if frame_index == 0 || frame_index >= frames.len() {
        return VelocityResult::invalid(0.0);
    }
    match (
        frames[frame_index - 1].landmark(landmark),
        frames[frame_index].landmark(landmark),
    ) {
        (Some(prev), Some(curr)) => calculate_velocity(prev, curr, fps, min_visibility),
        _ => VelocityResult::invalid(0.0),
    }
}

/// Mean velocity between `start` and `end` frame indices
///
/// Uses total displacement over total elapsed time. Confidence is the
/// average visibility of the two endpoint samples.
pub fn calculate_average_velocity(
    frames: &[PoseFrame],
    landmark: usize,
    start: usize,
    end: usize,
    fps: f64,
    min_visibility: f64,
) -> VelocityResult {
    if end <= start || end >= frames.len() {
        return VelocityResult::invalid(0.0);
    }
    let (first, last) = match (frames[start].landmark(landmark), frames[end].landmark(landmark)) {
        (Some(first), Some(last)) => (first, last),
        _ => return VelocityResult::invalid(0.0),
    };

    let confidence = (first.visibility() + last.visibility()) / 2.0;
    if first.visibility() < min_visibility || last.visibility() < min_visibility {
        return VelocityResult::invalid(confidence);
    }

    let elapsed = (end - start) as f64 / effective_fps(fps);
    let vx = (last.x - first.x) / elapsed;
    let vy = (last.y - first.y) / elapsed;
    VelocityResult {
        vx,
        vy,
        speed: (vx * vx + vy * vy).sqrt(),
        is_valid: true,
        confidence,
    }
}

/// Fastest frame-to-frame speed of `landmark` within `[start, end]`
///
/// Only frame pairs with both samples inside the window count, so the
/// first velocity examined is the one arriving at `start + 1`.
pub fn find_peak_velocity(
    frames: &[PoseFrame],
    landmark: usize,
    start: usize,
    end: usize,
    fps: f64,
    min_visibility: f64,
) -> PeakVelocity {
    let mut peak = PeakVelocity {
        speed: 0.0,
        frame_index: start,
        is_valid: false,
    };
    if frames.is_empty() {
        return peak;
    }

    let last = end.min(frames.len() - 1);
    for i in start.saturating_add(1)..=last {
        let v = landmark_velocity(frames, landmark, i, fps, min_visibility);
        if v.is_valid && (!peak.is_valid || v.speed > peak.speed) {
            peak = PeakVelocity {
                speed: v.speed,
                frame_index: i,
                is_valid: true,
            };
        }
    }
    peak
}

/// Acceleration from two consecutive velocity samples
pub fn calculate_acceleration(
    prev: &VelocityResult,
    curr: &VelocityResult,
    fps: f64,
) -> AccelerationResult {
    if !prev.is_valid || !curr.is_valid {
        return AccelerationResult {
            ax: 0.0,
            ay: 0.0,
            magnitude: 0.0,
            is_valid: false,
        };
    }
    let fps = effective_fps(fps);
    let ax = (curr.vx - prev.vx) * fps;
    let ay = (curr.vy - prev.vy) * fps;
    AccelerationResult {
        ax,
        ay,
        magnitude: (ax * ax + ay * ay).sqrt(),
        is_valid: true,
    }
}
