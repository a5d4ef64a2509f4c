// Keyframes - semantically significant frame indices of a motion
//
// Module organization:
// - hip: hip-center tracking (center-of-mass proxy)
// - jump: baseline / peak / takeoff / landing detection and jump height
//
// Keyframes are derived once per session. Metric extraction treats them as
// given context and never re-derives them.

mod hip;
mod jump;

pub use hip::{hip_center, HipCenter};
pub use jump::{
    analyze_jump, calculate_jump_height, detect_landing_frame, detect_takeoff_frame,
    find_baseline_frame, find_peak_jump_frame, hip_vertical_velocity, JumpAnalysis, JumpHeight,
};

use serde::{Deserialize, Serialize};

use crate::config::JumpDetectionConfig;
use crate::pose::{PoseFrame, Side};

/// Frame indices (into the session's frame slice) of the phases of a motion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyframes {
    /// Standing / set position
    pub start: Option<usize>,
    /// Highest hip center
    pub peak_jump: Option<usize>,
    /// Ball release or shuttle contact
    pub release: Option<usize>,
    pub end: Option<usize>,
}

/// Shooting or racket side: the wrist held highest in `frame`
///
/// Falls back to [`Side::Right`] when neither wrist passes the gate.
pub fn detect_dominant_side(frame: &PoseFrame, min_visibility: f64) -> Side {
    let wrist_y = |side: Side| {
        frame
            .landmark(side.wrist())
            .filter(|p| p.is_visible(min_visibility))
            .map(|p| p.y)
    };

    match (wrist_y(Side::Left), wrist_y(Side::Right)) {
        (Some(left), Some(right)) if left < right => Side::Left,
        (Some(_), None) => Side::Left,
        _ => Side::Right,
    }
}

/// Frame in `[start, end]` where either wrist is highest
fn find_release_frame(
    frames: &[PoseFrame],
    start: usize,
    end: usize,
    min_visibility: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, frame) in frames.iter().enumerate().take(end + 1).skip(start) {
        for side in [Side::Left, Side::Right] {
            let wrist = match frame.landmark(side.wrist()) {
                Some(p) if p.is_visible(min_visibility) => p,
                _ => continue,
            };
            if best.map_or(true, |(_, best_y)| wrist.y < best_y) {
                best = Some((i, wrist.y));
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Derive the four keyframes from a completed jump analysis
///
/// `start` is the baseline frame (frame 0 when no baseline was found),
/// `end` is the landing frame (the last frame when no landing follows start),
/// and `release` falls back to the peak frame when no wrist is visible.
pub fn detect_keyframes(
    frames: &[PoseFrame],
    jump: &JumpAnalysis,
    config: &JumpDetectionConfig,
) -> Keyframes {
    if frames.is_empty() {
        return Keyframes::default();
    }

    let last = frames.len() - 1;
    let start = jump.baseline_frame.unwrap_or(0);
    // Without a real jump the "landing" can precede the set position
    let end = jump.landing_frame.filter(|&l| l > start).unwrap_or(last);
    let release =
        find_release_frame(frames, start, end, config.min_hip_visibility).or(jump.peak_frame);

    Keyframes {
        start: Some(start),
        peak_jump: jump.peak_frame,
        release,
        end: Some(end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::landmarks::{LEFT_HIP, LEFT_WRIST, RIGHT_HIP, RIGHT_WRIST};
    use crate::pose::{NormalizedPoint, LANDMARK_COUNT};

    fn frame(hip_y: f64, left_wrist: f64, right_wrist: f64) -> PoseFrame {
        let mut landmarks = vec![NormalizedPoint::new(0.5, 0.5); LANDMARK_COUNT];
        landmarks[LEFT_HIP] = NormalizedPoint::new(0.45, hip_y);
        landmarks[RIGHT_HIP] = NormalizedPoint::new(0.55, hip_y);
        landmarks[LEFT_WRIST] = NormalizedPoint::new(0.4, left_wrist);
        landmarks[RIGHT_WRIST] = NormalizedPoint::new(0.6, right_wrist);
        PoseFrame::new(0, 0.0, landmarks)
    }

    #[test]
    fn test_dominant_side_highest_wrist() {
        assert_eq!(detect_dominant_side(&frame(0.6, 0.2, 0.5), 0.5), Side::Left);
        assert_eq!(detect_dominant_side(&frame(0.6, 0.5, 0.2), 0.5), Side::Right);
    }

    #[test]
    fn test_dominant_side_fallback() {
        let mut f = frame(0.6, 0.2, 0.5);
        f.landmarks[LEFT_WRIST].visibility = Some(0.1);
        f.landmarks[RIGHT_WRIST].visibility = Some(0.1);
        assert_eq!(detect_dominant_side(&f, 0.5), Side::Right);

        f.landmarks[LEFT_WRIST].visibility = Some(0.9);
        assert_eq!(detect_dominant_side(&f, 0.5), Side::Left);
    }

    #[test]
    fn test_keyframes_from_jump() {
        let cfg = JumpDetectionConfig::default();
        let hips = [0.60, 0.62, 0.62, 0.60, 0.55, 0.50, 0.52, 0.56, 0.60, 0.62, 0.62, 0.62];
        let wrists = [0.5, 0.5, 0.5, 0.4, 0.3, 0.2, 0.15, 0.3, 0.4, 0.5, 0.5, 0.5];
        let frames: Vec<PoseFrame> = hips
            .iter()
            .zip(wrists.iter())
            .map(|(&h, &w)| frame(h, 0.5, w))
            .collect();

        let jump = analyze_jump(&frames, 30.0, &cfg);
        let keys = detect_keyframes(&frames, &jump, &cfg);
        assert_eq!(keys.start, jump.baseline_frame);
        assert_eq!(keys.peak_jump, Some(5));
        assert_eq!(keys.release, Some(6));
        assert!(keys.end.unwrap() >= keys.release.unwrap());
    }

    #[test]
    fn test_keyframes_release_falls_back_to_peak() {
        let cfg = JumpDetectionConfig::default();
        let mut frames: Vec<PoseFrame> = [0.6, 0.6, 0.55, 0.5, 0.55, 0.6]
            .iter()
            .map(|&h| frame(h, 0.5, 0.5))
            .collect();
        for f in frames.iter_mut() {
            f.landmarks[LEFT_WRIST].visibility = Some(0.0);
            f.landmarks[RIGHT_WRIST].visibility = Some(0.0);
        }
        let jump = analyze_jump(&frames, 30.0, &cfg);
        let keys = detect_keyframes(&frames, &jump, &cfg);
        assert_eq!(keys.release, Some(3));
        assert_eq!(keys.end, Some(5));
    }

    #[test]
    fn test_keyframes_empty_session() {
        let cfg = JumpDetectionConfig::default();
        let jump = analyze_jump(&[], 30.0, &cfg);
        assert_eq!(detect_keyframes(&[], &jump, &cfg), Keyframes::default());
    }
}
