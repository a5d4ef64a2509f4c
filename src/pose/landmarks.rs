//! Canonical 33-point body landmark layout.
//!
//! Indices follow the MediaPipe Pose topology so a frame produced by any
//! detector using that layout can be indexed with the same constants across
//! the whole pipeline.

use serde::{Deserialize, Serialize};

/// Number of landmarks in every frame
pub const LANDMARK_COUNT: usize = 33;

pub const NOSE: usize = 0;
pub const LEFT_EYE_INNER: usize = 1;
pub const LEFT_EYE: usize = 2;
pub const LEFT_EYE_OUTER: usize = 3;
pub const RIGHT_EYE_INNER: usize = 4;
pub const RIGHT_EYE: usize = 5;
pub const RIGHT_EYE_OUTER: usize = 6;
pub const LEFT_EAR: usize = 7;
pub const RIGHT_EAR: usize = 8;
pub const MOUTH_LEFT: usize = 9;
pub const MOUTH_RIGHT: usize = 10;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_PINKY: usize = 17;
pub const RIGHT_PINKY: usize = 18;
pub const LEFT_INDEX: usize = 19;
pub const RIGHT_INDEX: usize = 20;
pub const LEFT_THUMB: usize = 21;
pub const RIGHT_THUMB: usize = 22;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Body side, used to pick the shooting / racket arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn shoulder(self) -> usize {
        match self {
            Side::Left => LEFT_SHOULDER,
            Side::Right => RIGHT_SHOULDER,
        }
    }

    pub fn elbow(self) -> usize {
        match self {
            Side::Left => LEFT_ELBOW,
            Side::Right => RIGHT_ELBOW,
        }
    }

    pub fn wrist(self) -> usize {
        match self {
            Side::Left => LEFT_WRIST,
            Side::Right => RIGHT_WRIST,
        }
    }

    pub fn index_finger(self) -> usize {
        match self {
            Side::Left => LEFT_INDEX,
            Side::Right => RIGHT_INDEX,
        }
    }

    pub fn hip(self) -> usize {
        match self {
            Side::Left => LEFT_HIP,
            Side::Right => RIGHT_HIP,
        }
    }

    pub fn knee(self) -> usize {
        match self {
            Side::Left => LEFT_KNEE,
            Side::Right => RIGHT_KNEE,
        }
    }

    pub fn ankle(self) -> usize {
        match self {
            Side::Left => LEFT_ANKLE,
            Side::Right => RIGHT_ANKLE,
        }
    }
}
