// Vector types for landmark geometry
//
// Vec2 operates on (x, y) image-plane coordinates, Vec3 adds the optional
// depth channel reported by the pose detector. Both are plain Copy values.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::{safe_acos, EPSILON};

/// 2D vector in normalized landmark space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; positive when `other` lies
    /// counter-clockwise from `self` in a y-up frame.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared length, for comparisons that do not need the square root
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is below [`EPSILON`].
    pub fn normalize(self) -> Vec2 {
        let mag = self.magnitude();
        if mag < EPSILON {
            Vec2::ZERO
        } else {
            self.scale(1.0 / mag)
        }
    }

    /// Angle from the positive x axis in radians, via `atan2`
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rotate counter-clockwise by `radians`
    pub fn rotate(self, radians: f64) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Projection of `self` onto `onto`; zero when `onto` is degenerate
    pub fn project(self, onto: Vec2) -> Vec2 {
        let denom = onto.magnitude_squared();
        if denom < EPSILON * EPSILON {
            return Vec2::ZERO;
        }
        onto.scale(self.dot(onto) / denom)
    }

    /// Counter-clockwise perpendicular
    pub fn perpendicular(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Linear interpolation with `t` clamped to [0, 1]
    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        self.add(other.sub(self).scale(t))
    }

    pub fn distance(self, other: Vec2) -> f64 {
        self.sub(other).magnitude()
    }

    /// Unsigned angle between two vectors in radians, in [0, π].
    ///
    /// Returns `None` if either vector is degenerate.
    pub fn angle_between(self, other: Vec2) -> Option<f64> {
        let mags = self.magnitude() * other.magnitude();
        if self.magnitude() < EPSILON || other.magnitude() < EPSILON {
            return None;
        }
        Some(safe_acos(self.dot(other) / mags))
    }

    /// Signed angle from `self` to `other` in radians, in (-π, π].
    ///
    /// Sign follows the cross product, so rotation direction survives.
    pub fn signed_angle_between(self, other: Vec2) -> Option<f64> {
        if self.magnitude() < EPSILON || other.magnitude() < EPSILON {
            return None;
        }
        Some(self.cross(other).atan2(self.dot(other)))
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        self.scale(-1.0)
    }
}

/// 3D vector; z is the detector's relative depth
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, factor: f64) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn normalize(self) -> Vec3 {
        let mag = self.magnitude();
        if mag < EPSILON {
            Vec3::ZERO
        } else {
            self.scale(1.0 / mag)
        }
    }

    pub fn project(self, onto: Vec3) -> Vec3 {
        let denom = onto.magnitude_squared();
        if denom < EPSILON * EPSILON {
            return Vec3::ZERO;
        }
        onto.scale(self.dot(onto) / denom)
    }

    pub fn lerp(self, other: Vec3, t: f64) -> Vec3 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        self.add(other.sub(self).scale(t))
    }

    pub fn distance(self, other: Vec3) -> f64 {
        self.sub(other).magnitude()
    }

    pub fn angle_between(self, other: Vec3) -> Option<f64> {
        let a = self.magnitude();
        let b = other.magnitude();
        if a < EPSILON || b < EPSILON {
            return None;
        }
        Some(safe_acos(self.dot(other) / (a * b)))
    }

    /// Drop the depth channel
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::sub(self, rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        self.scale(rhs)
    }
}
