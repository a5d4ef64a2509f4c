// Analysis module - end-to-end session pipeline
//
// Runs the stages in order on one validated pose session:
// - jump analysis (baseline / peak / takeoff / landing)
// - keyframes and dominant side
// - metric extraction for the sport/action
// - scoring and flaw detection, both reading the same metrics map
//
// Every intermediate artifact is returned so callers can display or audit
// each stage. The only failure is an invalid session.

use serde::{Deserialize, Serialize};

use crate::benchmarks::{Sport, SportAction};
use crate::config::AnalysisConfig;
use crate::error::{log_session_error, SessionError};
use crate::flaws::{detect_badminton_flaws, detect_basketball_flaws, FlawDetectionResult};
use crate::keyframes::{
    analyze_jump, detect_dominant_side, detect_keyframes, JumpAnalysis, Keyframes,
};
use crate::metrics::{extract_metrics, MetricContext, MetricsMap};
use crate::pose::{PoseSession, Side};
use crate::scoring::{score_badminton, score_basketball, ScoringResult};

/// Everything the pipeline derived from one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalysis {
    /// Canonical sport name, or the caller's text when unsupported
    pub sport: String,
    pub action: String,
    pub supported: bool,
    /// Frame rate actually used (after fallback)
    pub fps: f64,
    pub frame_count: usize,
    pub jump: JumpAnalysis,
    pub keyframes: Keyframes,
    /// Shooting / racket side
    pub dominant_side: Side,
    pub metrics: MetricsMap,
    pub scoring: ScoringResult,
    pub flaws: FlawDetectionResult,
}

/// Run the full pipeline on a session
///
/// # Arguments
/// * `session` - Pose session from the upstream detector
/// * `sport` / `action` - Lookup key, parsed case-insensitively
/// * `config` - Tuning constants
///
/// # Returns
/// The analysis, or the validation error. An unsupported sport/action pair
/// is not an error: keyframes are still derived, but the metrics map is
/// empty and both the scoring and the flaw result are marked unsupported.
pub fn analyze_session(
    session: &PoseSession,
    sport: &str,
    action: &str,
    config: &AnalysisConfig,
) -> Result<SessionAnalysis, SessionError> {
    if let Err(err) = session.validate() {
        log_session_error(&err, "analyze_session");
        tracing::warn!("[Analysis] Rejected session: {}", err);
        return Err(err);
    }

    let fps = config.kinematics.resolve_fps(session.fps);
    let frames = session.frames.as_slice();
    tracing::info!(
        "[Analysis] Analyzing {} frames at {:.1} fps for {}/{}",
        frames.len(),
        fps,
        sport,
        action
    );

    let jump = analyze_jump(frames, fps, &config.jump_detection);
    let keyframes = detect_keyframes(frames, &jump, &config.jump_detection);
    let side_frame = keyframes
        .release
        .or(keyframes.peak_jump)
        .and_then(|i| frames.get(i));
    let dominant_side = side_frame
        .map(|f| detect_dominant_side(f, config.kinematics.min_angle_visibility))
        .unwrap_or(Side::Right);

    tracing::debug!(
        "[Analysis] Keyframes {:?}, jump height valid={}, side={:?}",
        keyframes,
        jump.height.is_valid,
        dominant_side
    );

    let key = match SportAction::parse(sport, action) {
        Some(key) => key,
        None => {
            tracing::warn!("[Analysis] Unsupported sport/action '{}'/'{}'", sport, action);
            return Ok(SessionAnalysis {
                sport: sport.to_string(),
                action: action.to_string(),
                supported: false,
                fps,
                frame_count: frames.len(),
                jump,
                keyframes,
                dominant_side,
                metrics: MetricsMap::new(),
                scoring: ScoringResult::unsupported(sport, action),
                flaws: FlawDetectionResult::unsupported(sport, action),
            });
        }
    };

    let ctx = MetricContext {
        frames,
        keyframes: &keyframes,
        jump: &jump,
        fps,
        side: dominant_side,
        config,
    };
    let metrics = extract_metrics(&ctx, key);

    let (scoring, flaws) = match key.sport {
        Sport::Basketball => (
            score_basketball(&metrics, key.action, &config.scoring),
            detect_basketball_flaws(&metrics, key.action),
        ),
        Sport::Badminton => (
            score_badminton(&metrics, key.action, &config.scoring),
            detect_badminton_flaws(&metrics, key.action),
        ),
    };

    let measured = metrics.values().filter(|v| v.is_some()).count();
    tracing::info!(
        "[Analysis] {}: {}/{} metrics measured, score {:.1} ({:?}), {} flaw(s)",
        key,
        measured,
        metrics.len(),
        scoring.overall_score,
        scoring.grade,
        flaws.flaws.len()
    );

    Ok(SessionAnalysis {
        sport: key.sport.as_str().to_string(),
        action: key.action.as_str().to_string(),
        supported: true,
        fps,
        frame_count: frames.len(),
        jump,
        keyframes,
        dominant_side,
        metrics,
        scoring,
        flaws,
    })
}
