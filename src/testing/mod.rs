//! Test harness utilities.
//!
//! Deterministic synthetic pose sessions for unit tests, integration tests
//! and CLI smoke runs, so none of them need a pose model or recorded video.

pub mod synthetic;

pub use synthetic::SyntheticJump;
