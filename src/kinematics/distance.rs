//! Gated distances between landmarks.

use serde::{Deserialize, Serialize};

use crate::pose::NormalizedPoint;

/// Euclidean distance in normalized units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Zero when invalid
    pub normalized: f64,
    pub is_valid: bool,
    pub confidence: f64,
}

impl DistanceResult {
    pub(crate) fn invalid(confidence: f64) -> Self {
        Self {
            normalized: 0.0,
            is_valid: false,
            confidence,
        }
    }

    pub fn valid_value(&self) -> Option<f64> {
        self.is_valid.then_some(self.normalized)
    }
}

/// Signed horizontal / vertical offset from one landmark to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalDistance {
    /// `to.x - from.x`; positive is to the right
    pub dx: f64,
    /// `to.y - from.y` in image coordinates; positive is downward
    pub dy: f64,
    pub is_valid: bool,
    pub confidence: f64,
}

/// 2D distance between two landmarks
///
/// Invalid (and zero) when either point is below `min_visibility`.
pub fn calculate_distance(
    a: &NormalizedPoint,
    b: &NormalizedPoint,
    min_visibility: f64,
) -> DistanceResult {
    let confidence = a.visibility().min(b.visibility());
    if confidence < min_visibility {
        return DistanceResult::invalid(confidence);
    }
    DistanceResult {
        normalized: a.to_vec2().distance(b.to_vec2()),
        is_valid: true,
        confidence,
    }
}

/// 3D distance including the depth channel
pub fn calculate_distance_3d(
    a: &NormalizedPoint,
    b: &NormalizedPoint,
    min_visibility: f64,
) -> DistanceResult {
    let confidence = a.visibility().min(b.visibility());
    if confidence < min_visibility {
        return DistanceResult::invalid(confidence);
    }
    DistanceResult {
        normalized: a.to_vec3().distance(b.to_vec3()),
        is_valid: true,
        confidence,
    }
}

/// Signed offsets from `from` to `to`
///
/// The deltas are always reported; the visibility gate only decides
/// `is_valid`.
pub fn calculate_directional_distance(
    from: &NormalizedPoint,
    to: &NormalizedPoint,
    min_visibility: f64,
) -> DirectionalDistance {
    let confidence = from.visibility().min(to.visibility());
    DirectionalDistance {
        dx: to.x - from.x,
        dy: to.y - from.y,
        is_valid: confidence >= min_visibility,
        confidence,
    }
}

/// Midpoint of two landmarks carrying the lower of the two visibilities
pub fn midpoint(a: &NormalizedPoint, b: &NormalizedPoint) -> NormalizedPoint {
    let z = match (a.z, b.z) {
        (Some(za), Some(zb)) => Some((za + zb) / 2.0),
        _ => None,
    };
    NormalizedPoint {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
        z,
        visibility: Some(a.visibility().min(b.visibility())),
    }
}
