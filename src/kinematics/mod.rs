// Kinematics - landmark-level measurements
//
// Module organization:
// - angle: joint (vertex) angles, unsigned and signed
// - distance: gated Euclidean and directional distances
// - velocity: frame-to-frame, averaged and peak velocity, acceleration
// - segments: body-segment lengths and ratios built on distance
//
// Every measurement returns a small result value carrying `is_valid` and a
// `confidence`. An invalid result holds a zero value so it can never push a
// score or a flaw in either direction. Directional distances are the one
// exception: their signed deltas survive a failed gate.

mod angle;
mod distance;
mod segments;
mod velocity;

pub use angle::{
    calculate_angle, calculate_angle_3d, calculate_angle_with, calculate_signed_angle, AngleResult,
};
pub use distance::{
    calculate_directional_distance, calculate_distance, calculate_distance_3d, midpoint,
    DirectionalDistance, DistanceResult,
};
pub use segments::{
    arm_extension_percentage, arm_length, hip_width, shoulder_width, stance_width, torso_length,
};
pub use velocity::{
    calculate_acceleration, calculate_average_velocity, calculate_velocity, find_peak_velocity,
    landmark_velocity, AccelerationResult, PeakVelocity, VelocityResult,
};

/// Default visibility gate for distance and velocity samples
pub const MIN_VISIBILITY: f64 = 0.3;

/// Visibility gate for joint angles
pub const MIN_ANGLE_VISIBILITY: f64 = 0.5;

/// Frame rate used when the caller passes fps <= 0
pub const DEFAULT_FPS: f64 = 30.0;

/// Resolve a frame rate, falling back to [`DEFAULT_FPS`]
pub fn effective_fps(fps: f64) -> f64 {
    if fps.is_finite() && fps > 0.0 {
        fps
    } else {
        DEFAULT_FPS
    }
}
