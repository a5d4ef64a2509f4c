// Pose session error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Session error code constants
///
/// Single source of truth for the numeric codes reported by
/// [`SessionError::code`].
///
/// Error code range: 3001-3004
pub struct SessionErrorCodes {}

impl SessionErrorCodes {
    /// Session contains no frames
    pub const EMPTY: i32 = 3001;

    /// Frame numbers are not strictly increasing
    pub const FRAME_ORDER: i32 = 3002;

    /// A frame does not carry the full landmark layout
    pub const LANDMARK_COUNT: i32 = 3003;

    /// Session file could not be read or parsed
    pub const LOAD_FAILED: i32 = 3004;
}

/// Log a session error with structured context
///
/// Emits error_code, component and message fields in one line so log
/// aggregation can filter on the code.
pub fn log_session_error(err: &SessionError, context: &str) {
    error!(
        "Session error in {}: code={}, component=PoseSession, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Pose-session validation and loading errors
///
/// Error code range: 3001-3004
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// No frames supplied by the pose detector
    Empty,

    /// Frame at `index` does not advance past its predecessor
    FrameOrder {
        index: usize,
        previous: u32,
        current: u32,
    },

    /// Frame at `index` has the wrong number of landmarks
    LandmarkCount {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Session file unreadable or not valid JSON
    LoadFailed { reason: String },
}

impl ErrorCode for SessionError {
    fn code(&self) -> i32 {
        match self {
            SessionError::Empty => SessionErrorCodes::EMPTY,
            SessionError::FrameOrder { .. } => SessionErrorCodes::FRAME_ORDER,
            SessionError::LandmarkCount { .. } => SessionErrorCodes::LANDMARK_COUNT,
            SessionError::LoadFailed { .. } => SessionErrorCodes::LOAD_FAILED,
        }
    }

    fn message(&self) -> String {
        match self {
            SessionError::Empty => "Pose session contains no frames".to_string(),
            SessionError::FrameOrder {
                index,
                previous,
                current,
            } => format!(
                "Frame {} is out of order: frame number {} does not follow {}",
                index, current, previous
            ),
            SessionError::LandmarkCount {
                index,
                expected,
                found,
            } => format!(
                "Frame {} has {} landmarks, expected {}",
                index, found, expected
            ),
            SessionError::LoadFailed { reason } => {
                format!("Failed to load pose session: {}", reason)
            }
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SessionError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::LoadFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::LoadFailed {
            reason: err.to_string(),
        }
    }
}
