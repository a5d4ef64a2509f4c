//! Hip center: the center-of-mass proxy used for jump timing.
//!
//! Ankles are distorted by foot articulation and camera foreshortening, so
//! the jump detectors track the midpoint of the two hips instead, which sits
//! close to the true center of mass and usually tracks with high confidence.

use serde::{Deserialize, Serialize};

use crate::pose::landmarks::{LEFT_HIP, RIGHT_HIP};
use crate::pose::PoseFrame;

/// Midpoint of the left and right hip landmarks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HipCenter {
    pub x: f64,
    /// Image coordinates: smaller is higher in frame
    pub y: f64,
    /// Mean of the two hip visibilities
    pub confidence: f64,
    pub is_valid: bool,
}

/// Hip center of one frame
///
/// Invalid (position zeroed) when either hip is below `min_visibility`.
pub fn hip_center(frame: &PoseFrame, min_visibility: f64) -> HipCenter {
    let (left, right) = match (frame.landmark(LEFT_HIP), frame.landmark(RIGHT_HIP)) {
        (Some(left), Some(right)) => (left, right),
        _ => {
            return HipCenter {
                x: 0.0,
                y: 0.0,
                confidence: 0.0,
                is_valid: false,
            }
        }
    };

    let confidence = (left.visibility() + right.visibility()) / 2.0;
    if left.visibility() < min_visibility || right.visibility() < min_visibility {
        return HipCenter {
            x: 0.0,
            y: 0.0,
            confidence,
            is_valid: false,
        };
    }

    HipCenter {
        x: (left.x + right.x) / 2.0,
        y: (left.y + right.y) / 2.0,
        confidence,
        is_valid: true,
    }
}

/// Hip-center Y of a frame, only when valid
pub(crate) fn hip_y(frame: &PoseFrame, min_visibility: f64) -> Option<f64> {
    let center = hip_center(frame, min_visibility);
    center.is_valid.then_some(center.y)
}
