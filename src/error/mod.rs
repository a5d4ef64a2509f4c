// Error types for the biomechanics pipeline
//
// The scoring and flaw engines never fail: missing data, degenerate geometry
// and unsupported sport/action pairs come back as structured result fields.
// The types here cover the edges that can genuinely fail: loading and
// validating pose sessions, and loading custom benchmark tables.

mod benchmark;
mod session;

pub use benchmark::{log_benchmark_error, BenchmarkError, BenchmarkErrorCodes};
pub use session::{log_session_error, SessionError, SessionErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, so callers (CLI exit paths, host applications)
/// can branch on a stable number instead of matching message text.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
