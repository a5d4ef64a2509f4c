// End-to-end pipeline tests over synthetic sessions

use biomech_core::config::AnalysisConfig;
use biomech_core::flaws::{detect_flaws, InjuryRisk};
use biomech_core::keyframes::analyze_jump;
use biomech_core::metrics::keys;
use biomech_core::pose::PoseSession;
use biomech_core::scoring::score_action;
use biomech_core::{analyze_session, Grade, SessionError, Side, SyntheticJump};

fn analyze(session: &PoseSession, sport: &str, action: &str) -> biomech_core::SessionAnalysis {
    analyze_session(session, sport, action, &AnalysisConfig::default()).unwrap()
}

#[test]
fn test_every_supported_pair_runs() {
    let session = SyntheticJump::new().jitter(0.002, 11).build();
    for (sport, action) in [
        ("basketball", "jump_shot"),
        ("basketball", "free_throw"),
        ("badminton", "smash"),
        ("badminton", "clear"),
        ("badminton", "serve"),
    ] {
        let analysis = analyze(&session, sport, action);
        assert!(analysis.supported, "{}/{}", sport, action);
        assert!(analysis.scoring.supported);
        assert!(analysis.flaws.supported);
        assert!(
            (0.0..=100.0).contains(&analysis.scoring.overall_score),
            "{}/{} score {}",
            sport,
            action,
            analysis.scoring.overall_score
        );
        assert!((0.0..=1.0).contains(&analysis.scoring.confidence));
        assert_eq!(
            analysis.flaws.rules_evaluated + analysis.flaws.rules_skipped,
            biomech_core::flaws::rules_for(
                biomech_core::SportAction::parse(sport, action).unwrap()
            )
            .len()
        );
    }
}

#[test]
fn test_scoring_and_flaws_read_the_same_metrics() {
    let session = SyntheticJump::new().knee_bend(150.0).build();
    let analysis = analyze(&session, "basketball", "jump_shot");

    let config = AnalysisConfig::default();
    let rescored = score_action(&analysis.metrics, "basketball", "jump_shot", &config.scoring);
    let redetected = detect_flaws(&analysis.metrics, "basketball", "jump_shot");

    assert!((rescored.overall_score - analysis.scoring.overall_score).abs() < 1e-9);
    assert_eq!(rescored.breakdown, analysis.scoring.breakdown);
    assert_eq!(redetected, analysis.flaws);
}

#[test]
fn test_worse_technique_scores_lower() {
    let good = analyze(&SyntheticJump::new().build(), "basketball", "jump_shot");
    let bent = analyze(
        &SyntheticJump::new().elbow_at_release(140.0).build(),
        "basketball",
        "jump_shot",
    );
    let very_bent = analyze(
        &SyntheticJump::new().elbow_at_release(120.0).build(),
        "basketball",
        "jump_shot",
    );

    assert!(good.scoring.overall_score > bent.scoring.overall_score);
    assert!(bent.scoring.overall_score >= very_bent.scoring.overall_score);
    assert!(!very_bent.flaws.flaws.is_empty());
}

#[test]
fn test_drift_lowers_balance_and_raises_injury_risk() {
    let session = SyntheticJump::new().drift(0.2).build();
    let analysis = analyze(&session, "basketball", "jump_shot");

    let balance = analysis.metrics[keys::BODY_BALANCE].unwrap();
    assert!(balance < 50.0, "balance {}", balance);

    let flaw = analysis
        .flaws
        .flaws
        .iter()
        .find(|f| f.id == "bb_balance_drift")
        .expect("balance flaw");
    assert!(flaw.injury_risk);
    assert_ne!(analysis.flaws.overall_injury_risk, InjuryRisk::None);
}

#[test]
fn test_no_jump_keeps_full_window() {
    let session = SyntheticJump::new().jump_height(0.0).build();
    let analysis = analyze(&session, "basketball", "jump_shot");

    let start = analysis.keyframes.start.unwrap();
    let end = analysis.keyframes.end.unwrap();
    assert!(end > start);
    let release = analysis.keyframes.release.unwrap();
    assert!(release >= start && release <= end);
}

#[test]
fn test_jump_airtime() {
    let session = SyntheticJump::new().build();
    let config = AnalysisConfig::default();
    let jump = analyze_jump(&session.frames, session.fps, &config.jump_detection);

    let takeoff = jump.takeoff_frame.unwrap();
    let landing = jump.landing_frame.unwrap();
    let peak = jump.peak_frame.unwrap();
    assert!(takeoff < peak && peak < landing);
    let airtime = jump.airtime.unwrap();
    assert!((airtime - (landing - takeoff) as f64 / 30.0).abs() < 1e-9);
    assert!(jump.height.is_valid);
}

#[test]
fn test_left_side_racket_arm() {
    let session = SyntheticJump::new().side(Side::Left).build();
    let analysis = analyze(&session, "badminton", "clear");
    assert_eq!(analysis.dominant_side, Side::Left);
    assert!((analysis.metrics[keys::ELBOW_AT_CONTACT].unwrap() - 160.0).abs() < 1e-3);
}

#[test]
fn test_occluded_session_yields_floor_result() {
    let session = SyntheticJump::new().visibility(0.1).build();
    let analysis = analyze(&session, "badminton", "smash");
    assert_eq!(analysis.scoring.overall_score, 0.0);
    assert_eq!(analysis.scoring.grade, Grade::F);
    assert!(analysis.flaws.flaws.is_empty());
    assert_eq!(analysis.flaws.overall_injury_risk, InjuryRisk::None);
}

#[test]
fn test_out_of_order_frames_rejected() {
    let mut session = SyntheticJump::new().build();
    session.frames.swap(3, 4);
    let err = analyze_session(&session, "basketball", "jump_shot", &AnalysisConfig::default())
        .unwrap_err();
    assert!(matches!(err, SessionError::FrameOrder { index: 4, .. }));
}

#[test]
fn test_session_json_roundtrip_preserves_analysis() {
    let session = SyntheticJump::new().jitter(0.001, 5).build();
    let json = serde_json::to_string(&session).unwrap();
    let restored: PoseSession = serde_json::from_str(&json).unwrap();

    let a = analyze(&session, "basketball", "jump_shot");
    let b = analyze(&restored, "basketball", "jump_shot");
    assert_eq!(a.keyframes, b.keyframes);
    assert!((a.scoring.overall_score - b.scoring.overall_score).abs() < 1e-6);
    assert_eq!(a.flaws.flaws.len(), b.flaws.flaws.len());
}
