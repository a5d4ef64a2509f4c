//! Jump detection from the hip-center trajectory.
//!
//! Takeoff and landing are first-crossing detectors over frame-pair
//! velocities, not fitted extrema. Their thresholds (0.5 and 0.3 units/s)
//! and the 3-frame landing offset come from [`JumpDetectionConfig`].

use serde::{Deserialize, Serialize};

use super::hip::hip_y;
use crate::config::JumpDetectionConfig;
use crate::kinematics::effective_fps;
use crate::pose::PoseFrame;

/// Jump height derived from baseline and peak hip positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpHeight {
    /// `baseline_y - peak_y` in fractions of frame height
    pub normalized: f64,
    /// Height as a percentage of the assumed body height, capped at 100
    pub percentage: f64,
    pub is_valid: bool,
}

impl JumpHeight {
    pub const INVALID: JumpHeight = JumpHeight {
        normalized: 0.0,
        percentage: 0.0,
        is_valid: false,
    };
}

/// Everything jump detection found in one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpAnalysis {
    pub baseline_frame: Option<usize>,
    pub peak_frame: Option<usize>,
    pub takeoff_frame: Option<usize>,
    pub landing_frame: Option<usize>,
    pub height: JumpHeight,
    /// Seconds between takeoff and landing
    pub airtime: Option<f64>,
}

/// Frame with the highest valid hip center (smallest Y)
pub fn find_peak_jump_frame(frames: &[PoseFrame], config: &JumpDetectionConfig) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, frame) in frames.iter().enumerate() {
        if let Some(y) = hip_y(frame, config.min_hip_visibility) {
            if best.map_or(true, |(_, best_y)| y < best_y) {
                best = Some((i, y));
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Standing frame: lowest hip center (largest Y) in the leading window
///
/// The window is the first `ceil(len × baseline_window_fraction)` frames,
/// at least one. Returns `None` for clips shorter than `min_frames`.
pub fn find_baseline_frame(frames: &[PoseFrame], config: &JumpDetectionConfig) -> Option<usize> {
    if frames.is_empty() || frames.len() < config.min_frames {
        return None;
    }

    let window = ((frames.len() as f64 * config.baseline_window_fraction).ceil() as usize)
        .clamp(1, frames.len());

    let mut best: Option<(usize, f64)> = None;
    for (i, frame) in frames.iter().enumerate().take(window) {
        if let Some(y) = hip_y(frame, config.min_hip_visibility) {
            if best.map_or(true, |(_, best_y)| y > best_y) {
                best = Some((i, y));
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Jump height from baseline and peak hip Y (image coordinates)
///
/// Rises under `min_jump_height` are rejected as tracking noise.
pub fn calculate_jump_height(
    baseline_y: f64,
    peak_y: f64,
    config: &JumpDetectionConfig,
) -> JumpHeight {
    let normalized = baseline_y - peak_y;
    if !normalized.is_finite() || normalized < config.min_jump_height {
        return JumpHeight::INVALID;
    }

    let percentage = if config.body_height_fraction > 0.0 {
        (normalized / config.body_height_fraction * 100.0).min(100.0)
    } else {
        0.0
    };

    JumpHeight {
        normalized,
        percentage,
        is_valid: true,
    }
}

/// Upward (physics-sign) hip velocity from frame `from` to frame `from + 1`
pub fn hip_vertical_velocity(
    frames: &[PoseFrame],
    from: usize,
    fps: f64,
    config: &JumpDetectionConfig,
) -> Option<f64> {
    let a = hip_y(frames.get(from)?, config.min_hip_visibility)?;
    let b = hip_y(frames.get(from.checked_add(1)?)?, config.min_hip_visibility)?;
    // Image Y grows downward, so a rise is a decrease in Y
    Some((a - b) * effective_fps(fps))
}

/// First frame in `[baseline, peak)` whose pair velocity exceeds the
/// takeoff threshold
pub fn detect_takeoff_frame(
    frames: &[PoseFrame],
    baseline: usize,
    peak: usize,
    fps: f64,
    config: &JumpDetectionConfig,
) -> Option<usize> {
    (baseline..peak.min(frames.len())).find(|&i| {
        hip_vertical_velocity(frames, i, fps, config)
            .map_or(false, |v| v > config.takeoff_velocity)
    })
}

/// First frame more than `landing_frame_offset` frames past the peak whose
/// vertical speed (from the previous frame) drops under the landing threshold
pub fn detect_landing_frame(
    frames: &[PoseFrame],
    peak: usize,
    fps: f64,
    config: &JumpDetectionConfig,
) -> Option<usize> {
    let first = peak
        .saturating_add(config.landing_frame_offset)
        .saturating_add(1);
    (first..frames.len()).find(|&i| {
        hip_vertical_velocity(frames, i - 1, fps, config)
            .map_or(false, |v| v.abs() < config.landing_velocity)
    })
}

/// Run every jump detector over a session
pub fn analyze_jump(frames: &[PoseFrame], fps: f64, config: &JumpDetectionConfig) -> JumpAnalysis {
    let baseline_frame = find_baseline_frame(frames, config);
    let peak_frame = find_peak_jump_frame(frames, config);

    let height = match (baseline_frame, peak_frame) {
        (Some(b), Some(p)) => {
            match (
                hip_y(&frames[b], config.min_hip_visibility),
                hip_y(&frames[p], config.min_hip_visibility),
            ) {
                (Some(by), Some(py)) => calculate_jump_height(by, py, config),
                _ => JumpHeight::INVALID,
            }
        }
        _ => JumpHeight::INVALID,
    };

    let takeoff_frame = match (baseline_frame, peak_frame) {
        (Some(b), Some(p)) if b < p => detect_takeoff_frame(frames, b, p, fps, config),
        _ => None,
    };
    let landing_frame = peak_frame.and_then(|p| detect_landing_frame(frames, p, fps, config));

    let airtime = match (takeoff_frame, landing_frame) {
        (Some(t), Some(l)) if l > t => Some((l - t) as f64 / effective_fps(fps)),
        _ => None,
    };

    JumpAnalysis {
        baseline_frame,
        peak_frame,
        takeoff_frame,
        landing_frame,
        height,
        airtime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::landmarks::{LEFT_HIP, RIGHT_HIP};
    use crate::pose::{NormalizedPoint, LANDMARK_COUNT};

    fn frames_from_hip_y(ys: &[f64]) -> Vec<PoseFrame> {
        ys.iter()
            .enumerate()
            .map(|(i, &y)| {
                let mut landmarks = vec![NormalizedPoint::new(0.5, 0.5); LANDMARK_COUNT];
                landmarks[LEFT_HIP] = NormalizedPoint::new(0.45, y);
                landmarks[RIGHT_HIP] = NormalizedPoint::new(0.55, y);
                PoseFrame::new(i as u32, i as f64 / 30.0, landmarks)
            })
            .collect()
    }

    /// Stand, crouch, jump to 0.5, come down, settle
    fn jump_profile() -> Vec<f64> {
        vec![
            0.60, 0.61, 0.62, 0.62, 0.60, 0.56, 0.52, 0.50, 0.51, 0.54, 0.58, 0.60, 0.62, 0.62,
            0.62, 0.62,
        ]
    }

    #[test]
    fn test_peak_is_min_y() {
        let cfg = JumpDetectionConfig::default();
        let frames = frames_from_hip_y(&jump_profile());
        assert_eq!(find_peak_jump_frame(&frames, &cfg), Some(7));
    }

    #[test]
    fn test_baseline_is_max_y_in_leading_window() {
        let cfg = JumpDetectionConfig::default();
        let frames = frames_from_hip_y(&jump_profile());
        // 16 frames -> window of 4: [0.60, 0.61, 0.62, 0.62], first max wins
        assert_eq!(find_baseline_frame(&frames, &cfg), Some(2));
    }

    #[test]
    fn test_baseline_needs_five_frames() {
        let cfg = JumpDetectionConfig::default();
        let frames = frames_from_hip_y(&[0.6, 0.6, 0.6, 0.6]);
        assert_eq!(find_baseline_frame(&frames, &cfg), None);
        let frames = frames_from_hip_y(&[0.6, 0.6, 0.6, 0.6, 0.6]);
        assert_eq!(find_baseline_frame(&frames, &cfg), Some(0));
    }

    #[test]
    fn test_jump_height_noise_rejected() {
        let cfg = JumpDetectionConfig::default();
        let h = calculate_jump_height(0.60, 0.595, &cfg);
        assert!(!h.is_valid);
        assert_eq!(h.normalized, 0.0);

        let h = calculate_jump_height(0.62, 0.50, &cfg);
        assert!(h.is_valid);
        assert!((h.normalized - 0.12).abs() < 1e-12);
        assert!((h.percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_jump_height_percentage_capped() {
        let cfg = JumpDetectionConfig::default();
        let h = calculate_jump_height(0.9, 0.1, &cfg);
        assert!(h.is_valid);
        assert_eq!(h.percentage, 100.0);
    }

    #[test]
    fn test_takeoff_first_crossing() {
        let cfg = JumpDetectionConfig::default();
        let frames = frames_from_hip_y(&jump_profile());
        // Pair (3, 4) rises 0.02 -> 0.6 units/s, the first above 0.5
        assert_eq!(detect_takeoff_frame(&frames, 2, 7, 30.0, &cfg), Some(3));
    }

    #[test]
    fn test_landing_skips_frames_near_peak() {
        let cfg = JumpDetectionConfig::default();
        let frames = frames_from_hip_y(&jump_profile());
        // Peak at 7; candidates start at 11. Pairs (10, 11) and (11, 12) still
        // fall at 0.6 units/s; pair (12, 13) is still.
        assert_eq!(detect_landing_frame(&frames, 7, 30.0, &cfg), Some(13));
    }

    #[test]
    fn test_analyze_jump() {
        let cfg = JumpDetectionConfig::default();
        let frames = frames_from_hip_y(&jump_profile());
        let jump = analyze_jump(&frames, 30.0, &cfg);
        assert_eq!(jump.baseline_frame, Some(2));
        assert_eq!(jump.peak_frame, Some(7));
        assert_eq!(jump.takeoff_frame, Some(3));
        assert_eq!(jump.landing_frame, Some(13));
        assert!(jump.height.is_valid);
        assert!((jump.airtime.unwrap() - 10.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_standing_still_has_no_jump() {
        let cfg = JumpDetectionConfig::default();
        let frames = frames_from_hip_y(&[0.6; 12]);
        let jump = analyze_jump(&frames, 30.0, &cfg);
        assert!(!jump.height.is_valid);
        assert_eq!(jump.takeoff_frame, None);
        assert_eq!(jump.airtime, None);
    }

    #[test]
    fn test_empty_clip_has_no_baseline() {
        let cfg = JumpDetectionConfig {
            min_frames: 0,
            ..JumpDetectionConfig::default()
        };
        assert_eq!(find_baseline_frame(&[], &cfg), None);
        let jump = analyze_jump(&[], 30.0, &cfg);
        assert_eq!(jump.baseline_frame, None);
        assert_eq!(jump.peak_frame, None);
    }

    #[test]
    fn test_huge_landing_offset_finds_no_landing() {
        let cfg = JumpDetectionConfig {
            landing_frame_offset: usize::MAX,
            ..JumpDetectionConfig::default()
        };
        let frames = frames_from_hip_y(&jump_profile());
        assert_eq!(detect_landing_frame(&frames, 7, 30.0, &cfg), None);
        let jump = analyze_jump(&frames, 30.0, &cfg);
        assert_eq!(jump.peak_frame, Some(7));
        assert_eq!(jump.landing_frame, None);
        assert_eq!(jump.airtime, None);
        assert_eq!(hip_vertical_velocity(&frames, usize::MAX, 30.0, &cfg), None);
    }
}
