//! Configuration management for pipeline tuning constants
//!
//! This module provides runtime configuration loading from JSON files so
//! visibility gates, jump-detection thresholds and grade curves can be
//! adjusted without recompiling. Changing the defaults shifts every
//! downstream score, so stored reports are only comparable under one config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::kinematics::{DEFAULT_FPS, MIN_ANGLE_VISIBILITY, MIN_VISIBILITY};

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub kinematics: KinematicsConfig,
    #[serde(default)]
    pub jump_detection: JumpDetectionConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Visibility gates and frame-rate fallback for the kinematic primitives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Minimum visibility for distance and velocity samples
    pub min_distance_visibility: f64,
    /// Minimum visibility for joint-angle samples
    pub min_angle_visibility: f64,
    /// Frame rate used when the session reports fps <= 0
    pub default_fps: f64,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            min_distance_visibility: MIN_VISIBILITY,
            min_angle_visibility: MIN_ANGLE_VISIBILITY,
            default_fps: DEFAULT_FPS,
        }
    }
}

/// Keyframe and jump detection thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpDetectionConfig {
    /// Both hips need at least this visibility for a valid hip center
    pub min_hip_visibility: f64,
    /// Leading fraction of the clip searched for the standing baseline
    pub baseline_window_fraction: f64,
    /// Fewer frames than this and no baseline is reported
    pub min_frames: usize,
    /// Rise (fraction of frame height) below which a jump is noise
    pub min_jump_height: f64,
    /// Assumed body height as a fraction of frame height
    pub body_height_fraction: f64,
    /// Upward hip velocity (units/s) that marks takeoff
    pub takeoff_velocity: f64,
    /// Vertical speed (units/s) under which the athlete has landed
    pub landing_velocity: f64,
    /// Frames after the peak before landing may be reported
    pub landing_frame_offset: usize,
}

impl Default for JumpDetectionConfig {
    fn default() -> Self {
        Self {
            min_hip_visibility: 0.5,
            baseline_window_fraction: 0.2,
            min_frames: 5,
            min_jump_height: 0.01,
            body_height_fraction: 0.6,
            takeoff_velocity: 0.5,
            landing_velocity: 0.3,
            landing_frame_offset: 3,
        }
    }
}

/// Grade curve factors per sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplicative curve applied to badminton scores before clamping
    pub badminton_curve: f64,
    /// Basketball tables are calibrated without a curve
    pub basketball_curve: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            badminton_curve: 0.15,
            basketball_curve: 0.0,
        }
    }
}

impl KinematicsConfig {
    /// Resolve a caller-supplied frame rate, applying the fallback
    pub fn resolve_fps(&self, fps: f64) -> f64 {
        if fps.is_finite() && fps > 0.0 {
            fps
        } else {
            self.default_fps
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The parsed configuration, or the defaults (with a warning) when the
    /// file is missing or the JSON is invalid. Missing sections and fields
    /// take their default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }
}
