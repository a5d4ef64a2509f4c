// Benchmark table error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Benchmark error code constants
///
/// Error code range: 4001-4004
pub struct BenchmarkErrorCodes {}

impl BenchmarkErrorCodes {
    /// Window bounds violate acceptable_min <= ideal_min <= ideal_max <= acceptable_max
    pub const INVALID_WINDOW: i32 = 4001;

    /// Weight is negative or non-finite
    pub const INVALID_WEIGHT: i32 = 4002;

    /// Weight declared for a metric that has no benchmark
    pub const UNKNOWN_METRIC: i32 = 4003;

    /// Custom table could not be parsed
    pub const PARSE_FAILED: i32 = 4004;
}

/// Log a benchmark error with structured context
pub fn log_benchmark_error(err: &BenchmarkError, context: &str) {
    error!(
        "Benchmark error in {}: code={}, component=BenchmarkRegistry, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Errors raised when validating or loading benchmark tables
///
/// Built-in tables are validated by tests; these surface when a caller
/// registers its own table.
///
/// Error code range: 4001-4004
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkError {
    /// Window ordering invariant violated
    InvalidWindow { metric: String, reason: String },

    /// Weight is negative or non-finite
    InvalidWeight { metric: String, weight: f64 },

    /// Weight names a metric with no benchmark entry
    UnknownMetric { metric: String },

    /// JSON table could not be parsed
    ParseFailed { reason: String },
}

impl ErrorCode for BenchmarkError {
    fn code(&self) -> i32 {
        match self {
            BenchmarkError::InvalidWindow { .. } => BenchmarkErrorCodes::INVALID_WINDOW,
            BenchmarkError::InvalidWeight { .. } => BenchmarkErrorCodes::INVALID_WEIGHT,
            BenchmarkError::UnknownMetric { .. } => BenchmarkErrorCodes::UNKNOWN_METRIC,
            BenchmarkError::ParseFailed { .. } => BenchmarkErrorCodes::PARSE_FAILED,
        }
    }

    fn message(&self) -> String {
        match self {
            BenchmarkError::InvalidWindow { metric, reason } => {
                format!("Invalid benchmark window for {}: {}", metric, reason)
            }
            BenchmarkError::InvalidWeight { metric, weight } => {
                format!("Invalid weight {} for metric {}", weight, metric)
            }
            BenchmarkError::UnknownMetric { metric } => {
                format!("Weight declared for unknown metric {}", metric)
            }
            BenchmarkError::ParseFailed { reason } => {
                format!("Failed to parse benchmark table: {}", reason)
            }
        }
    }
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BenchmarkError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for BenchmarkError {}

impl From<serde_json::Error> for BenchmarkError {
    fn from(err: serde_json::Error) -> Self {
        BenchmarkError::ParseFailed {
            reason: err.to_string(),
        }
    }
}
