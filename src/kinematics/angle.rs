//! Joint angle calculation using the dot product
//!
//! The angle at vertex B is measured between vectors B→A and B→C:
//! cos(θ) = (BA · BC) / (|BA| × |BC|), clamped to [-1, 1] before `acos`.

use serde::{Deserialize, Serialize};

use super::MIN_ANGLE_VISIBILITY;
use crate::geometry::{safe_acos, EPSILON};
use crate::pose::NormalizedPoint;

/// Joint angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleResult {
    /// Degrees; [0, 180] unsigned, (-180, 180] signed. Zero when invalid.
    pub value: f64,
    pub is_valid: bool,
    /// Minimum visibility of the three contributing points
    pub confidence: f64,
}

impl AngleResult {
    fn invalid(confidence: f64) -> Self {
        Self {
            value: 0.0,
            is_valid: false,
            confidence,
        }
    }

    /// The angle, only when valid
    pub fn valid_value(&self) -> Option<f64> {
        self.is_valid.then_some(self.value)
    }
}

fn min_visibility(a: &NormalizedPoint, b: &NormalizedPoint, c: &NormalizedPoint) -> f64 {
    a.visibility().min(b.visibility()).min(c.visibility())
}

/// Angle A-B-C at vertex B with the default angle visibility gate
pub fn calculate_angle(
    a: &NormalizedPoint,
    b: &NormalizedPoint,
    c: &NormalizedPoint,
) -> AngleResult {
    calculate_angle_with(a, b, c, MIN_ANGLE_VISIBILITY)
}

/// Angle A-B-C at vertex B
///
/// Returns an invalid result when any point is below `min_visibility` or
/// either arm of the angle is shorter than ε.
pub fn calculate_angle_with(
    a: &NormalizedPoint,
    b: &NormalizedPoint,
    c: &NormalizedPoint,
    min_visibility_gate: f64,
) -> AngleResult {
    let confidence = min_visibility(a, b, c);
    if confidence < min_visibility_gate {
        return AngleResult::invalid(confidence);
    }

    let ba = a.to_vec2() - b.to_vec2();
    let bc = c.to_vec2() - b.to_vec2();
    let mag_ba = ba.magnitude();
    let mag_bc = bc.magnitude();

    if mag_ba < EPSILON || mag_bc < EPSILON {
        log::debug!("[Kinematics] Degenerate angle: zero-length limb vector");
        return AngleResult::invalid(confidence);
    }

    let radians = safe_acos(ba.dot(bc) / (mag_ba * mag_bc));
    AngleResult {
        value: radians.to_degrees(),
        is_valid: true,
        confidence,
    }
}

/// Angle A-B-C using depth when the detector provides it
pub fn calculate_angle_3d(
    a: &NormalizedPoint,
    b: &NormalizedPoint,
    c: &NormalizedPoint,
) -> AngleResult {
    let confidence = min_visibility(a, b, c);
    if confidence < MIN_ANGLE_VISIBILITY {
        return AngleResult::invalid(confidence);
    }

    let ba = a.to_vec3() - b.to_vec3();
    let bc = c.to_vec3() - b.to_vec3();
    match ba.angle_between(bc) {
        Some(radians) => AngleResult {
            value: radians.to_degrees(),
            is_valid: true,
            confidence,
        },
        None => {
            log::debug!("[Kinematics] Degenerate 3D angle: zero-length limb vector");
            AngleResult::invalid(confidence)
        }
    }
}

/// Signed rotation from B→A to B→C in degrees, via `atan2(cross, dot)`
///
/// Positive is counter-clockwise in image coordinates as drawn on screen
/// with Y pointing down, i.e. the raw cross-product sign.
pub fn calculate_signed_angle(
    a: &NormalizedPoint,
    b: &NormalizedPoint,
    c: &NormalizedPoint,
) -> AngleResult {
    let confidence = min_visibility(a, b, c);
    if confidence < MIN_ANGLE_VISIBILITY {
        return AngleResult::invalid(confidence);
    }

    let ba = a.to_vec2() - b.to_vec2();
    let bc = c.to_vec2() - b.to_vec2();
    match ba.signed_angle_between(bc) {
        Some(radians) => AngleResult {
            value: radians.to_degrees(),
            is_valid: true,
            confidence,
        },
        None => AngleResult::invalid(confidence),
    }
}
