//! Deterministic synthetic pose sessions.
//!
//! [`SyntheticJump`] renders a stick figure that stands, crouches, jumps,
//! raises its shooting/racket arm to a configurable release pose, and lands.
//! Joint angles are constructed exactly (knee and elbow angles at the
//! keyframes equal the configured values), so tests can assert metric values
//! without a pose model. Optional jitter comes from a seeded `StdRng`, so the
//! same builder always produces the same session.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::geometry::Vec2;
use crate::pose::landmarks::*;
use crate::pose::{NormalizedPoint, PoseFrame, PoseSession, Side};

/// Ankle height while standing on the ground
const GROUND_Y: f64 = 0.92;
/// Thigh and shin share one length
const THIGH: f64 = 0.18;
const TORSO: f64 = 0.25;
const UPPER_ARM: f64 = 0.15;
const FOREARM: f64 = 0.14;
const HALF_SHOULDER: f64 = 0.08;
const HALF_HIP: f64 = 0.05;
const NOSE_ABOVE_SHOULDERS: f64 = 0.07;
const STANDING_KNEE: f64 = 170.0;

// Phase boundaries as fractions of the clip
const CROUCH_START: f64 = 0.12;
const CROUCH_BOTTOM: f64 = 0.22;
const PUSH_END: f64 = 0.30;
const LANDING: f64 = 0.70;

// Arm pose before the raise: upper arm down-forward, ball held at chest
const SET_ARM_ELEVATION: f64 = -60.0;
const SET_ELBOW: f64 = 80.0;

/// Builder for a synthetic jump (or set shot / stroke when the jump height
/// is zero)
#[derive(Debug, Clone)]
pub struct SyntheticJump {
    pub frame_count: usize,
    pub fps: f64,
    /// Hip rise at the apex, fraction of frame height
    pub jump_height: f64,
    /// Deepest knee angle of the crouch, degrees
    pub knee_bend: f64,
    /// Elbow angle once the arm is raised, degrees
    pub elbow_at_release: f64,
    /// Upper-arm elevation above horizontal once raised, degrees
    pub arm_elevation: f64,
    /// Fraction of the clip the arm raise takes, ending at the apex
    pub raise_duration: f64,
    /// Shoulder-line rotation about the vertical axis, degrees
    pub trunk_rotation: f64,
    pub side: Side,
    /// Half the ankle-to-ankle distance
    pub stance_half_width: f64,
    /// Horizontal body drift from first to last frame
    pub drift: f64,
    pub visibility: f64,
    /// Uniform position noise amplitude
    pub jitter: f64,
    pub seed: u64,
    /// Landmarks reported with zero visibility in every frame
    pub hidden: Vec<usize>,
}

impl Default for SyntheticJump {
    fn default() -> Self {
        Self {
            frame_count: 45,
            fps: 30.0,
            jump_height: 0.10,
            knee_bend: 115.0,
            elbow_at_release: 160.0,
            arm_elevation: 35.0,
            raise_duration: 0.26,
            trunk_rotation: 40.0,
            side: Side::Right,
            stance_half_width: 0.09,
            drift: 0.0,
            visibility: 0.95,
            jitter: 0.0,
            seed: 42,
            hidden: Vec::new(),
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Hip-to-ankle distance for a leg bent to `knee_deg`
fn leg_span(knee_deg: f64) -> f64 {
    // Law of cosines with equal segments
    2.0 * THIGH * (knee_deg.to_radians() / 2.0).sin()
}

/// Unit vector at `deg` above horizontal, converted to image coordinates
fn image_direction(deg: f64) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

impl SyntheticJump {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }

    pub fn fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    pub fn jump_height(mut self, height: f64) -> Self {
        self.jump_height = height;
        self
    }

    pub fn knee_bend(mut self, degrees: f64) -> Self {
        self.knee_bend = degrees;
        self
    }

    pub fn elbow_at_release(mut self, degrees: f64) -> Self {
        self.elbow_at_release = degrees;
        self
    }

    pub fn arm_elevation(mut self, degrees: f64) -> Self {
        self.arm_elevation = degrees;
        self
    }

    pub fn raise_duration(mut self, fraction: f64) -> Self {
        self.raise_duration = fraction;
        self
    }

    pub fn trunk_rotation(mut self, degrees: f64) -> Self {
        self.trunk_rotation = degrees;
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn stance_half_width(mut self, half_width: f64) -> Self {
        self.stance_half_width = half_width;
        self
    }

    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    pub fn visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn jitter(mut self, amplitude: f64, seed: u64) -> Self {
        self.jitter = amplitude;
        self.seed = seed;
        self
    }

    pub fn hide(mut self, landmark: usize) -> Self {
        self.hidden.push(landmark);
        self
    }

    /// Frame index of the apex (and of the completed arm raise)
    pub fn apex_frame(&self) -> usize {
        ((self.frame_count.saturating_sub(1)) as f64 * 0.5).round() as usize
    }

    fn knee_angle(&self, p: f64) -> f64 {
        if p < CROUCH_START {
            STANDING_KNEE
        } else if p < CROUCH_BOTTOM {
            lerp(
                STANDING_KNEE,
                self.knee_bend,
                (p - CROUCH_START) / (CROUCH_BOTTOM - CROUCH_START),
            )
        } else if p < PUSH_END {
            lerp(
                self.knee_bend,
                STANDING_KNEE,
                (p - CROUCH_BOTTOM) / (PUSH_END - CROUCH_BOTTOM),
            )
        } else {
            STANDING_KNEE
        }
    }

    /// Upward hip offset from flight, zero on the ground
    fn flight_lift(&self, p: f64) -> f64 {
        if p <= PUSH_END || p >= LANDING {
            return 0.0;
        }
        let s = (p - PUSH_END) / (LANDING - PUSH_END);
        self.jump_height * 4.0 * s * (1.0 - s)
    }

    /// Arm raise progress in [0, 1], complete at the apex
    fn raise_progress(&self, p: f64) -> f64 {
        let end = 0.5 - 0.02;
        let start = end - self.raise_duration.max(1e-6);
        ((p - start) / (end - start)).clamp(0.0, 1.0)
    }

    fn render_frame(&self, index: usize, rng: &mut Option<StdRng>) -> PoseFrame {
        let n = self.frame_count.max(2);
        let p = index as f64 / (n - 1) as f64;
        let cx = 0.5 + self.drift * p;

        let knee = self.knee_angle(p);
        let ankle_dx = (self.stance_half_width - HALF_HIP).abs();
        let span = leg_span(knee);
        let leg_drop = (span * span - ankle_dx * ankle_dx).max(0.0).sqrt();
        let standing_drop = {
            let s = leg_span(STANDING_KNEE);
            (s * s - ankle_dx * ankle_dx).max(0.0).sqrt()
        };

        let lift = self.flight_lift(p);
        let (hip_y, drop) = if lift > 0.0 {
            (GROUND_Y - standing_drop - lift, standing_drop)
        } else {
            (GROUND_Y - leg_drop, leg_drop)
        };

        let mut lm = vec![NormalizedPoint::new(cx, hip_y); LANDMARK_COUNT];

        // Legs
        for (sign, side) in [(-1.0, Side::Left), (1.0, Side::Right)] {
            let hip = Vec2::new(cx + sign * HALF_HIP, hip_y);
            let ankle = Vec2::new(cx + sign * self.stance_half_width, hip_y + drop);
            let along = ankle - hip;
            let d = along.magnitude();
            let bulge = (THIGH * THIGH - (d / 2.0) * (d / 2.0)).max(0.0).sqrt();
            // Perpendicular pointing forward (+x) for a downward leg
            let forward = Vec2::new(along.y, -along.x).normalize();
            let knee_pt = hip.lerp(ankle, 0.5) + forward * bulge;

            lm[side.hip()] = NormalizedPoint::new(hip.x, hip.y);
            lm[side.knee()] = NormalizedPoint::new(knee_pt.x, knee_pt.y);
            lm[side.ankle()] = NormalizedPoint::new(ankle.x, ankle.y);
            let (heel, toe) = match side {
                Side::Left => (LEFT_HEEL, LEFT_FOOT_INDEX),
                Side::Right => (RIGHT_HEEL, RIGHT_FOOT_INDEX),
            };
            lm[heel] = NormalizedPoint::new(ankle.x - 0.01, ankle.y + 0.02);
            lm[toe] = NormalizedPoint::new(ankle.x + 0.04, ankle.y + 0.02);
        }

        // Shoulders rotate about the vertical axis through the chest
        let shoulder_y = hip_y - TORSO;
        let raise = self.raise_progress(p);
        let phi = lerp(-self.trunk_rotation / 2.0, self.trunk_rotation / 2.0, raise).to_radians();
        for (sign, side) in [(-1.0, Side::Left), (1.0, Side::Right)] {
            lm[side.shoulder()] = NormalizedPoint {
                x: cx + sign * HALF_SHOULDER * phi.cos(),
                y: shoulder_y,
                z: Some(sign * HALF_SHOULDER * phi.sin()),
                visibility: None,
            };
        }

        // Head
        let nose_y = shoulder_y - NOSE_ABOVE_SHOULDERS;
        lm[NOSE] = NormalizedPoint::new(cx, nose_y);
        for (idx, dx, dy) in [
            (LEFT_EYE_INNER, -0.01, -0.01),
            (LEFT_EYE, -0.015, -0.012),
            (LEFT_EYE_OUTER, -0.02, -0.012),
            (RIGHT_EYE_INNER, 0.01, -0.01),
            (RIGHT_EYE, 0.015, -0.012),
            (RIGHT_EYE_OUTER, 0.02, -0.012),
            (LEFT_EAR, -0.03, -0.005),
            (RIGHT_EAR, 0.03, -0.005),
            (MOUTH_LEFT, -0.01, 0.015),
            (MOUTH_RIGHT, 0.01, 0.015),
        ] {
            lm[idx] = NormalizedPoint::new(cx + dx, nose_y + dy);
        }

        // Arms: the active arm raises, the other hangs
        for side in [Side::Left, Side::Right] {
            let s = lm[side.shoulder()].to_vec2();
            let (elbow, wrist) = if side == self.side {
                let elevation = lerp(SET_ARM_ELEVATION, self.arm_elevation, raise);
                let elbow_angle = lerp(SET_ELBOW, self.elbow_at_release, raise);
                let elbow = s + image_direction(elevation) * UPPER_ARM;
                let wrist = elbow + image_direction(elevation + (180.0 - elbow_angle)) * FOREARM;
                (elbow, wrist)
            } else {
                let elbow = s + Vec2::new(0.0, UPPER_ARM);
                (elbow, elbow + Vec2::new(0.02, FOREARM - 0.01))
            };
            lm[side.elbow()] = NormalizedPoint::new(elbow.x, elbow.y);
            lm[side.wrist()] = NormalizedPoint::new(wrist.x, wrist.y);

            let hand = (wrist - elbow).normalize() * 0.02;
            let (pinky, index, thumb) = match side {
                Side::Left => (LEFT_PINKY, LEFT_INDEX, LEFT_THUMB),
                Side::Right => (RIGHT_PINKY, RIGHT_INDEX, RIGHT_THUMB),
            };
            for idx in [pinky, index, thumb] {
                lm[idx] = NormalizedPoint::new(wrist.x + hand.x, wrist.y + hand.y);
            }
        }

        for (idx, point) in lm.iter_mut().enumerate() {
            if let Some(rng) = rng.as_mut() {
                point.x += rng.gen_range(-self.jitter..=self.jitter);
                point.y += rng.gen_range(-self.jitter..=self.jitter);
            }
            let visibility = if self.hidden.contains(&idx) {
                0.0
            } else {
                self.visibility
            };
            point.visibility = Some(visibility);
        }

        PoseFrame::new(index as u32, index as f64 / self.fps, lm)
    }

    /// Render the session
    pub fn build(&self) -> PoseSession {
        let mut rng = (self.jitter > 0.0).then(|| StdRng::seed_from_u64(self.seed));
        let frames = (0..self.frame_count)
            .map(|i| self.render_frame(i, &mut rng))
            .collect();
        PoseSession::new(frames, self.fps)
    }
}
