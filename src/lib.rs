// Biomech Core - sports biomechanics analysis
// Landmark kinematics, keyframe detection, benchmark scoring and flaw detection

//! Pure, synchronous pipeline from pose landmarks to a coaching report:
//! landmarks → kinematics → keyframes → metrics → {score, flaws}.
//!
//! ```
//! use biomech_core::{analyze_session, AnalysisConfig, SyntheticJump};
//!
//! let session = SyntheticJump::new().build();
//! let analysis = analyze_session(&session, "basketball", "jump_shot", &AnalysisConfig::default())
//!     .unwrap();
//! assert!(analysis.supported);
//! assert!(analysis.scoring.overall_score > 0.0);
//! ```

// Module declarations
pub mod analysis;
pub mod benchmarks;
pub mod config;
pub mod error;
pub mod flaws;
pub mod geometry;
pub mod keyframes;
pub mod kinematics;
pub mod metrics;
pub mod pose;
pub mod scoring;
pub mod testing;

// Re-exports for convenience
pub use analysis::{analyze_session, SessionAnalysis};
pub use benchmarks::{registry, Action, Sport, SportAction, SportBenchmarks};
pub use config::AnalysisConfig;
pub use error::{BenchmarkError, ErrorCode, SessionError};
pub use flaws::{detect_flaws, DetectedFlaw, FlawDetectionResult, InjuryRisk, Severity};
pub use metrics::MetricsMap;
pub use pose::{NormalizedPoint, PoseFrame, PoseSession, Side};
pub use scoring::{score, score_action, Grade, ScoringResult};
pub use testing::SyntheticJump;
