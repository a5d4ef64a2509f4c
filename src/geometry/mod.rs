// Geometry - vector primitives shared by every pipeline stage
//
// Module organization:
// - vector: Vec2 / Vec3 arithmetic, normalization, projection, interpolation
// - mod.rs: numeric guards (epsilon, domain clamp before acos/asin)
//
// Degenerate inputs never panic or divide by zero: zero-length vectors
// normalize to the zero vector and angles against them come back as 0.

mod vector;

pub use vector::{Vec2, Vec3};

/// Magnitudes below this are treated as zero-length.
pub const EPSILON: f64 = 1e-10;

/// Clamp a ratio into the closed domain [-1, 1] of acos/asin.
///
/// Non-finite input maps to 0.0 so a NaN can never leak into a transcendental
/// call and from there into a weighted sum.
pub fn clamp_unit(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// `acos` with the mandatory domain clamp, in radians.
pub fn safe_acos(ratio: f64) -> f64 {
    clamp_unit(ratio).acos()
}

/// `asin` with the mandatory domain clamp, in radians.
pub fn safe_asin(ratio: f64) -> f64 {
    clamp_unit(ratio).asin()
}

/// Wrap an angle in degrees into (-180, 180].
pub fn wrap_degrees(angle: f64) -> f64 {
    let mut wrapped = angle % 360.0;
    if wrapped <= -180.0 {
        wrapped += 360.0;
    } else if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit_bounds() {
        assert_eq!(clamp_unit(1.000_000_000_2), 1.0);
        assert_eq!(clamp_unit(-1.000_000_000_2), -1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_safe_acos_never_nan() {
        // Slightly out-of-domain ratios are what floating point error produces
        assert_eq!(safe_acos(1.000_000_1), 0.0);
        assert!((safe_acos(-1.000_000_1) - std::f64::consts::PI).abs() < 1e-12);
        assert!(!safe_acos(f64::NAN).is_nan());
        assert!(!safe_asin(2.0).is_nan());
    }

    #[test]
    fn test_wrap_degrees() {
        assert!((wrap_degrees(190.0) + 170.0).abs() < 1e-9);
        assert!((wrap_degrees(-190.0) - 170.0).abs() < 1e-9);
        assert!((wrap_degrees(180.0) - 180.0).abs() < 1e-9);
        assert!((wrap_degrees(-180.0) - 180.0).abs() < 1e-9);
        assert!((wrap_degrees(725.0) - 5.0).abs() < 1e-9);
    }
}
