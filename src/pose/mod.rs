//! Pose data model: landmarks, frames and sessions.
//!
//! Landmark coordinates are normalized to [0, 1] with Y increasing downward
//! (image convention). Anything that needs "up = positive" goes through
//! [`to_physics_coordinates`] explicitly.

pub mod landmarks;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::geometry::{Vec2, Vec3};

pub use landmarks::{Side, LANDMARK_COUNT};

/// One tracked body landmark in one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
    /// Relative depth, if the detector reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Detector confidence in [0, 1]; absent means fully visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    pub fn with_visibility(x: f64, y: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: Some(visibility),
        }
    }

    /// Visibility with the absent-means-1.0 default applied
    pub fn visibility(&self) -> f64 {
        self.visibility.unwrap_or(1.0)
    }

    pub fn is_visible(&self, min_visibility: f64) -> bool {
        self.visibility() >= min_visibility
    }

    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Position including depth (0 when absent)
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z.unwrap_or(0.0))
    }
}

/// Flip Y so that larger values point up.
pub fn to_physics_coordinates(point: &NormalizedPoint) -> NormalizedPoint {
    NormalizedPoint {
        y: 1.0 - point.y,
        ..*point
    }
}

/// Inverse of [`to_physics_coordinates`]; the flip is its own inverse.
pub fn to_media_pipe_coordinates(point: &NormalizedPoint) -> NormalizedPoint {
    NormalizedPoint {
        y: 1.0 - point.y,
        ..*point
    }
}

/// Landmarks for a single video frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    pub frame_number: u32,
    /// Seconds since the start of the recording
    pub timestamp: f64,
    pub landmarks: Vec<NormalizedPoint>,
    /// Whole-frame detector confidence
    #[serde(default = "default_frame_confidence")]
    pub confidence: f64,
}

fn default_frame_confidence() -> f64 {
    1.0
}

impl PoseFrame {
    pub fn new(frame_number: u32, timestamp: f64, landmarks: Vec<NormalizedPoint>) -> Self {
        Self {
            frame_number,
            timestamp,
            landmarks,
            confidence: 1.0,
        }
    }

    /// Landmark by canonical index, `None` if the frame is short
    pub fn landmark(&self, index: usize) -> Option<&NormalizedPoint> {
        self.landmarks.get(index)
    }
}

/// An ordered motion trace plus the capture metadata the kinematics need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseSession {
    pub frames: Vec<PoseFrame>,
    /// Detected frame rate; non-positive values fall back to the default
    pub fps: f64,
    /// Total video duration in seconds
    #[serde(default)]
    pub video_duration: f64,
}

impl PoseSession {
    pub fn new(frames: Vec<PoseFrame>, fps: f64) -> Self {
        let video_duration = match (frames.first(), frames.last()) {
            (Some(first), Some(last)) => (last.timestamp - first.timestamp).max(0.0),
            _ => 0.0,
        };
        Self {
            frames,
            fps,
            video_duration,
        }
    }

    /// Read a session from a JSON file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SessionError> {
        let contents = fs::read_to_string(&path)?;
        let session: PoseSession = serde_json::from_str(&contents)?;
        session.validate()?;
        log::info!(
            "[PoseSession] Loaded {} frames from {:?}",
            session.frames.len(),
            path.as_ref()
        );
        Ok(session)
    }

    /// Check the invariants the pipeline relies on
    ///
    /// # Validation
    /// - at least one frame
    /// - frame numbers strictly increasing
    /// - every frame carries exactly [`LANDMARK_COUNT`] landmarks
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.frames.is_empty() {
            return Err(SessionError::Empty);
        }

        for (index, frame) in self.frames.iter().enumerate() {
            if frame.landmarks.len() != LANDMARK_COUNT {
                return Err(SessionError::LandmarkCount {
                    index,
                    expected: LANDMARK_COUNT,
                    found: frame.landmarks.len(),
                });
            }
            if index > 0 {
                let previous = self.frames[index - 1].frame_number;
                if frame.frame_number <= previous {
                    return Err(SessionError::FrameOrder {
                        index,
                        previous,
                        current: frame.frame_number,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_frame(frame_number: u32) -> PoseFrame {
        PoseFrame::new(
            frame_number,
            frame_number as f64 / 30.0,
            vec![NormalizedPoint::new(0.5, 0.5); LANDMARK_COUNT],
        )
    }

    #[test]
    fn test_visibility_defaults_to_one() {
        let p = NormalizedPoint::new(0.2, 0.3);
        assert_eq!(p.visibility(), 1.0);
        assert!(p.is_visible(0.5));

        let p = NormalizedPoint::with_visibility(0.2, 0.3, 0.1);
        assert!(!p.is_visible(0.3));
    }

    #[test]
    fn test_coordinate_round_trip() {
        let samples = [
            NormalizedPoint::new(0.1, 0.0),
            NormalizedPoint::new(0.5, 0.25),
            NormalizedPoint::with_visibility(0.9, 0.73, 0.4),
            NormalizedPoint::new(0.3, 1.0),
        ];
        for p in samples {
            let back = to_physics_coordinates(&to_media_pipe_coordinates(&p));
            assert_eq!(back.x, p.x);
            assert!((back.y - p.y).abs() < 1e-12);
            assert_eq!(back.visibility, p.visibility);
        }
    }

    #[test]
    fn test_physics_flip_points_up() {
        let high = NormalizedPoint::new(0.5, 0.2);
        let low = NormalizedPoint::new(0.5, 0.8);
        assert!(to_physics_coordinates(&high).y > to_physics_coordinates(&low).y);
    }

    #[test]
    fn test_validate_accepts_ordered_session() {
        let session = PoseSession::new((0..5).map(blank_frame).collect(), 30.0);
        assert!(session.validate().is_ok());
        assert!((session.video_duration - 4.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_empty() {
        let session = PoseSession::new(Vec::new(), 30.0);
        assert_eq!(session.validate(), Err(SessionError::Empty));
    }

    #[test]
    fn test_validate_rejects_out_of_order() {
        let frames = vec![blank_frame(0), blank_frame(2), blank_frame(2)];
        let session = PoseSession::new(frames, 30.0);
        match session.validate() {
            Err(SessionError::FrameOrder {
                index,
                previous,
                current,
            }) => {
                assert_eq!(index, 2);
                assert_eq!(previous, 2);
                assert_eq!(current, 2);
            }
            other => panic!("Expected FrameOrder, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_short_frame() {
        let mut frames = vec![blank_frame(0), blank_frame(1)];
        frames[1].landmarks.truncate(20);
        let session = PoseSession::new(frames, 30.0);
        assert_eq!(
            session.validate(),
            Err(SessionError::LandmarkCount {
                index: 1,
                expected: LANDMARK_COUNT,
                found: 20
            })
        );
    }

    #[test]
    fn test_session_json_accepts_sparse_points() {
        let json = r#"{"x": 0.4, "y": 0.6}"#;
        let p: NormalizedPoint = serde_json::from_str(json).unwrap();
        assert_eq!(p.z, None);
        assert_eq!(p.visibility(), 1.0);
    }
}
