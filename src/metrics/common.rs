//! Measurements shared by every sport's extractor.
//!
//! Each helper returns `None` instead of a number whenever a contributing
//! landmark fails its visibility gate or the geometry is degenerate.

use super::MetricContext;
use crate::geometry::{Vec2, EPSILON};
use crate::keyframes::hip_center;
use crate::kinematics::{
    arm_extension_percentage, calculate_angle_with, find_peak_velocity, shoulder_width,
    stance_width, torso_length,
};
use crate::pose::landmarks::{LEFT_SHOULDER, RIGHT_SHOULDER};
use crate::pose::{NormalizedPoint, PoseFrame, Side};

/// Seconds after release over which arm extension is averaged
const FOLLOW_THROUGH_WINDOW_S: f64 = 0.3;

fn visible<'f>(
    ctx: &MetricContext<'_>,
    frame: &'f PoseFrame,
    idx: usize,
) -> Option<&'f NormalizedPoint> {
    frame.landmark(idx).filter(|p| p.is_visible(ctx.distance_gate()))
}

/// Angle at vertex `b`, gated with the configured angle visibility
pub(super) fn joint_angle(
    ctx: &MetricContext<'_>,
    frame: &PoseFrame,
    a: usize,
    b: usize,
    c: usize,
) -> Option<f64> {
    let (pa, pb, pc) = (frame.landmark(a)?, frame.landmark(b)?, frame.landmark(c)?);
    calculate_angle_with(pa, pb, pc, ctx.config.kinematics.min_angle_visibility).valid_value()
}

pub(super) fn elbow_angle(ctx: &MetricContext<'_>, frame: &PoseFrame, side: Side) -> Option<f64> {
    joint_angle(ctx, frame, side.shoulder(), side.elbow(), side.wrist())
}

fn knee_angle(ctx: &MetricContext<'_>, frame: &PoseFrame) -> Option<f64> {
    let angles: Vec<f64> = [Side::Left, Side::Right]
        .iter()
        .filter_map(|&side| joint_angle(ctx, frame, side.hip(), side.knee(), side.ankle()))
        .collect();
    if angles.is_empty() {
        return None;
    }
    Some(angles.iter().sum::<f64>() / angles.len() as f64)
}

/// Deepest knee flexion (smallest hip-knee-ankle angle) in `[start, end]`
pub(super) fn knee_bend(ctx: &MetricContext<'_>, start: usize, end: usize) -> Option<f64> {
    ctx.frames
        .iter()
        .take(end + 1)
        .skip(start)
        .filter_map(|frame| knee_angle(ctx, frame))
        .fold(None, |min: Option<f64>, a| Some(min.map_or(a, |m| m.min(a))))
}

/// Mean arm extension over the frames following release
pub(super) fn follow_through(ctx: &MetricContext<'_>, side: Side) -> Option<f64> {
    let release = ctx.keyframes.release?;
    let window = ((ctx.fps * FOLLOW_THROUGH_WINDOW_S).ceil() as usize).max(1);

    let samples: Vec<f64> = ctx
        .frames
        .iter()
        .skip(release + 1)
        .take(window)
        .filter_map(|frame| arm_extension_percentage(frame, side, ctx.distance_gate()))
        .collect();
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Jump height in percent of body height
///
/// A detected baseline and peak with a rise under the noise floor is a
/// genuine zero; no baseline at all means the metric is unavailable.
pub(super) fn jump_height_percent(ctx: &MetricContext<'_>) -> Option<f64> {
    ctx.jump.baseline_frame?;
    ctx.jump.peak_frame?;
    Some(if ctx.jump.height.is_valid {
        ctx.jump.height.percentage
    } else {
        0.0
    })
}

/// Height of `upper` above `reference` in torso lengths (physics sign)
pub(super) fn height_above(
    ctx: &MetricContext<'_>,
    frame: &PoseFrame,
    upper: usize,
    reference: usize,
) -> Option<f64> {
    let upper = visible(ctx, frame, upper)?;
    let reference = visible(ctx, frame, reference)?;
    let torso = torso_length(frame, ctx.distance_gate()).valid_value()?;
    if torso < EPSILON {
        return None;
    }
    Some((reference.y - upper.y) / torso)
}

/// Elevation of the elbow→wrist segment above horizontal, degrees in
/// [-90, 90]
pub(super) fn forearm_elevation(
    ctx: &MetricContext<'_>,
    frame: &PoseFrame,
    side: Side,
) -> Option<f64> {
    let gate = ctx.config.kinematics.min_angle_visibility;
    let elbow = frame.landmark(side.elbow()).filter(|p| p.is_visible(gate))?;
    let wrist = frame.landmark(side.wrist()).filter(|p| p.is_visible(gate))?;

    // Image Y points down; flip so a raised wrist reads positive
    let forearm = Vec2::new((wrist.x - elbow.x).abs(), elbow.y - wrist.y);
    if forearm.magnitude() < EPSILON {
        return None;
    }
    Some(forearm.angle().to_degrees())
}

/// Absolute inclination of the shoulder line, degrees in [0, 90]
pub(super) fn shoulder_tilt(ctx: &MetricContext<'_>, frame: &PoseFrame) -> Option<f64> {
    let gate = ctx.config.kinematics.min_angle_visibility;
    let left = frame.landmark(LEFT_SHOULDER).filter(|p| p.is_visible(gate))?;
    let right = frame.landmark(RIGHT_SHOULDER).filter(|p| p.is_visible(gate))?;

    let line = Vec2::new((right.x - left.x).abs(), (right.y - left.y).abs());
    if line.magnitude() < EPSILON {
        return None;
    }
    Some(line.angle().to_degrees())
}

/// 100 minus horizontal hip drift between start and end, in percent of
/// shoulder width at start
pub(super) fn body_balance(ctx: &MetricContext<'_>) -> Option<f64> {
    let start = ctx.frame_at(ctx.keyframes.start)?;
    let end = ctx.frame_at(ctx.keyframes.end)?;
    let gate = ctx.config.jump_detection.min_hip_visibility;

    let (a, b) = (hip_center(start, gate), hip_center(end, gate));
    if !a.is_valid || !b.is_valid {
        return None;
    }
    let width = shoulder_width(start, ctx.distance_gate()).valid_value()?;
    if width < EPSILON {
        return None;
    }
    let drift = (b.x - a.x).abs() / width;
    Some((100.0 - drift * 100.0).clamp(0.0, 100.0))
}

/// Ankle spread over shoulder width
pub(super) fn stance_width_ratio(ctx: &MetricContext<'_>, frame: &PoseFrame) -> Option<f64> {
    let stance = stance_width(frame, ctx.distance_gate()).valid_value()?;
    let shoulders = shoulder_width(frame, ctx.distance_gate()).valid_value()?;
    if shoulders < EPSILON {
        return None;
    }
    Some(stance / shoulders)
}

/// Shoulder line as seen from above when depth is available, otherwise as
/// seen by the camera
fn shoulder_line(ctx: &MetricContext<'_>, frame: &PoseFrame, use_depth: bool) -> Option<Vec2> {
    let gate = ctx.config.kinematics.min_angle_visibility;
    let left = frame.landmark(LEFT_SHOULDER).filter(|p| p.is_visible(gate))?;
    let right = frame.landmark(RIGHT_SHOULDER).filter(|p| p.is_visible(gate))?;
    if use_depth {
        let (lz, rz) = (left.z?, right.z?);
        Some(Vec2::new(right.x - left.x, rz - lz))
    } else {
        Some(Vec2::new(right.x - left.x, right.y - left.y))
    }
}

/// Range of signed shoulder-line rotation over `[start, end]`, degrees
pub(super) fn trunk_rotation(ctx: &MetricContext<'_>, start: usize, end: usize) -> Option<f64> {
    let first = ctx.frames.get(start)?;
    let use_depth = [LEFT_SHOULDER, RIGHT_SHOULDER]
        .iter()
        .all(|&idx| first.landmark(idx).map_or(false, |p| p.z.is_some()));
    let reference = shoulder_line(ctx, first, use_depth)?;

    let rotations: Vec<f64> = ctx
        .frames
        .iter()
        .take(end + 1)
        .skip(start)
        .filter_map(|frame| shoulder_line(ctx, frame, use_depth))
        .filter_map(|line| reference.signed_angle_between(line))
        .map(f64::to_degrees)
        .collect();
    if rotations.len() < 2 {
        return None;
    }

    let max = rotations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = rotations.iter().copied().fold(f64::INFINITY, f64::min);
    Some(max - min)
}

/// Fastest wrist speed between `start` and `end`
pub(super) fn peak_wrist_speed(
    ctx: &MetricContext<'_>,
    side: Side,
    start: usize,
    end: usize,
) -> Option<f64> {
    let peak = find_peak_velocity(
        ctx.frames,
        side.wrist(),
        start,
        end,
        ctx.fps,
        ctx.distance_gate(),
    );
    peak.is_valid.then_some(peak.speed)
}
