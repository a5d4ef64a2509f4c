use super::*;
use crate::metrics::keys;

fn metrics(pairs: &[(&str, f64)]) -> MetricsMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Some(*v)))
        .collect()
}

fn smash_rule(id: &str) -> FlawRule {
    *rules_for(SportAction::parse("badminton", "smash").unwrap())
        .iter()
        .find(|r| r.id == id)
        .unwrap()
}

/// Smash metrics that pass every smash rule
fn clean_smash() -> MetricsMap {
    metrics(&[
        (keys::ELBOW_AT_CONTACT, 170.0),
        (keys::CONTACT_HEIGHT, 1.1),
        (keys::TRUNK_ROTATION, 45.0),
        (keys::WRIST_SPEED, 4.5),
        (keys::FOLLOW_THROUGH, 90.0),
        (keys::KNEE_BEND, 125.0),
        (keys::STANCE_WIDTH_RATIO, 1.3),
        (keys::JUMP_HEIGHT, 15.0),
    ])
}

fn find<'a>(result: &'a FlawDetectionResult, id: &str) -> Option<&'a DetectedFlaw> {
    result.flaws.iter().find(|f| f.id == id)
}

#[test]
fn test_smash_low_elbow_is_high_severity() {
    let mut m = clean_smash();
    m.insert(keys::ELBOW_AT_CONTACT.to_string(), Some(110.0));

    let result = detect_badminton_flaws(&m, Action::Smash);
    let flaw = find(&result, "bd_smash_low_elbow").expect("low elbow flagged");

    assert_eq!(flaw.severity, Severity::High);
    assert!(!flaw.injury_risk);
    assert!(flaw.injury_details.is_none());
    assert!((flaw.confidence - 1.0).abs() < 1e-9);
    assert!((flaw.actual_value - 110.0).abs() < 1e-9);
    assert!((flaw.threshold - 140.0).abs() < 1e-9);
    assert_eq!(result.flaws.len(), 1);
}

#[test]
fn test_moderate_violation_keeps_base_severity() {
    let rule = smash_rule("bd_smash_low_elbow");
    match check_rule(&rule, &metrics(&[(keys::ELBOW_AT_CONTACT, 130.0)])) {
        RuleOutcome::Flagged(flaw) => {
            assert_eq!(flaw.severity, Severity::Medium);
            assert!((flaw.confidence - 10.0 / 25.0).abs() < 1e-9);
        }
        other => panic!("expected a flaw, got {:?}", other),
    }
}

#[test]
fn test_threshold_is_strict() {
    let rule = smash_rule("bd_smash_low_elbow");
    assert_eq!(
        check_rule(&rule, &metrics(&[(keys::ELBOW_AT_CONTACT, 140.0)])),
        RuleOutcome::Passed
    );
}

#[test]
fn test_missing_metric_is_skipped_not_passed() {
    let rule = smash_rule("bd_smash_low_elbow");

    let mut m = MetricsMap::new();
    assert_eq!(check_rule(&rule, &m), RuleOutcome::Skipped);

    m.insert(keys::ELBOW_AT_CONTACT.to_string(), None);
    assert_eq!(check_rule(&rule, &m), RuleOutcome::Skipped);

    m.insert(keys::ELBOW_AT_CONTACT.to_string(), Some(f64::NAN));
    assert_eq!(check_rule(&rule, &m), RuleOutcome::Skipped);
}

#[test]
fn test_skipped_rules_not_counted_as_evaluated() {
    let mut m = clean_smash();
    m.remove(keys::JUMP_HEIGHT);
    m.insert(keys::STANCE_WIDTH_RATIO.to_string(), None);

    let result = detect_badminton_flaws(&m, Action::Smash);
    let total = rules_for(SportAction::parse("badminton", "smash").unwrap()).len();

    assert!(result.flaws.is_empty());
    assert_eq!(result.rules_skipped, 2);
    assert_eq!(result.rules_evaluated, total - 2);
    assert!(result.summary.contains("2 check(s) skipped"));
}

#[test]
fn test_clean_session_has_no_flaws() {
    let result = detect_badminton_flaws(&clean_smash(), Action::Smash);
    assert!(result.supported);
    assert!(result.flaws.is_empty());
    assert_eq!(result.overall_injury_risk, InjuryRisk::None);
    assert_eq!(result.rules_skipped, 0);
    assert!(result.summary.starts_with("No technique flaws detected"));
}

#[test]
fn test_companion_rule_needs_both_conditions() {
    let rule = smash_rule("bd_smash_arm_only");

    let both = metrics(&[(keys::WRIST_SPEED, 2.0), (keys::TRUNK_ROTATION, 15.0)]);
    assert!(matches!(check_rule(&rule, &both), RuleOutcome::Flagged(_)));

    let rotation_ok = metrics(&[(keys::WRIST_SPEED, 2.0), (keys::TRUNK_ROTATION, 40.0)]);
    assert_eq!(check_rule(&rule, &rotation_ok), RuleOutcome::Passed);

    let no_rotation = metrics(&[(keys::WRIST_SPEED, 2.0)]);
    assert_eq!(check_rule(&rule, &no_rotation), RuleOutcome::Skipped);
}

#[test]
fn test_injury_gate_is_stricter_than_threshold() {
    let rule = smash_rule("bd_smash_limited_rotation");

    let mild = check_rule(&rule, &metrics(&[(keys::TRUNK_ROTATION, 15.0)]));
    match mild {
        RuleOutcome::Flagged(flaw) => assert!(!flaw.injury_risk),
        other => panic!("expected a flaw, got {:?}", other),
    }

    let severe = check_rule(&rule, &metrics(&[(keys::TRUNK_ROTATION, 5.0)]));
    match severe {
        RuleOutcome::Flagged(flaw) => {
            assert!(flaw.injury_risk);
            assert!(flaw.injury_details.is_some());
            assert_eq!(flaw.severity, Severity::High);
            assert_eq!(flaw.category, FlawCategory::Alignment);
        }
        other => panic!("expected a flaw, got {:?}", other),
    }
}

fn flaw(severity: Severity, injury_risk: bool) -> DetectedFlaw {
    DetectedFlaw {
        id: "test".to_string(),
        title: String::new(),
        description: String::new(),
        severity,
        category: FlawCategory::Technique,
        injury_risk,
        injury_details: None,
        affected_body_parts: Vec::new(),
        actual_value: 0.0,
        threshold: 0.0,
        ideal_range: String::new(),
        correction: String::new(),
        youtube_url: None,
        youtube_title: None,
        drill: None,
        confidence: 0.5,
    }
}

#[test]
fn test_injury_risk_aggregation() {
    assert_eq!(aggregate_injury_risk(&[]), InjuryRisk::None);
    assert_eq!(
        aggregate_injury_risk(&[flaw(Severity::High, false)]),
        InjuryRisk::None
    );
    assert_eq!(
        aggregate_injury_risk(&[flaw(Severity::Medium, true)]),
        InjuryRisk::Low
    );
    assert_eq!(
        aggregate_injury_risk(&[flaw(Severity::Low, true), flaw(Severity::Medium, true)]),
        InjuryRisk::Moderate
    );
    assert_eq!(
        aggregate_injury_risk(&[flaw(Severity::Low, true), flaw(Severity::High, true)]),
        InjuryRisk::High
    );
    // A single high-severity injury flaw outranks the count rule
    assert_eq!(
        aggregate_injury_risk(&[flaw(Severity::High, true)]),
        InjuryRisk::High
    );
}

#[test]
fn test_summary_reports_counts_and_risk() {
    let mut m = clean_smash();
    m.insert(keys::ELBOW_AT_CONTACT.to_string(), Some(110.0));
    m.insert(keys::TRUNK_ROTATION.to_string(), Some(5.0));

    let result = detect_badminton_flaws(&m, Action::Smash);
    assert_eq!(result.overall_injury_risk, InjuryRisk::High);
    assert!(
        result
            .summary
            .contains(&format!("Detected {} flaw(s)", result.flaws.len())),
        "{}",
        result.summary
    );
    assert!(result.summary.contains("Injury risk: high"));
}

#[test]
fn test_basketball_jump_shot_flaws() {
    let m = metrics(&[
        (keys::ELBOW_ANGLE_AT_RELEASE, 130.0),
        (keys::KNEE_BEND, 115.0),
        (keys::RELEASE_ANGLE, 50.0),
        (keys::RELEASE_HEIGHT, 0.6),
        (keys::JUMP_HEIGHT, 15.0),
        (keys::FOLLOW_THROUGH, 60.0),
        (keys::BODY_BALANCE, 90.0),
        (keys::SHOULDER_TILT, 3.0),
    ]);

    let result = detect_basketball_flaws(&m, Action::JumpShot);
    let ids: Vec<&str> = result.flaws.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["bb_low_elbow_extension", "bb_short_follow_through", "bb_push_shot"]
    );
    assert_eq!(result.rules_skipped, 0);
    assert_eq!(result.overall_injury_risk, InjuryRisk::None);
}

#[test]
fn test_thresholds_differ_per_action() {
    // Same follow-through value: passes the smash rule, fails the free throw rule
    let smash = metrics(&[(keys::FOLLOW_THROUGH, 65.0)]);
    assert!(find(
        &detect_badminton_flaws(&smash, Action::Smash),
        "bd_smash_short_follow_through"
    )
    .is_none());

    let free_throw = metrics(&[(keys::FOLLOW_THROUGH, 65.0)]);
    assert!(find(
        &detect_basketball_flaws(&free_throw, Action::FreeThrow),
        "ft_short_follow_through"
    )
    .is_some());
}

#[test]
fn test_flaw_carries_guidance() {
    let mut m = clean_smash();
    m.insert(keys::ELBOW_AT_CONTACT.to_string(), Some(120.0));
    let result = detect_badminton_flaws(&m, Action::Smash);
    let flaw = find(&result, "bd_smash_low_elbow").unwrap();

    assert!(!flaw.correction.is_empty());
    assert!(!flaw.affected_body_parts.is_empty());
    assert!(flaw.youtube_url.as_deref().unwrap().starts_with("https://"));
    assert!(flaw.youtube_title.is_some());
    assert_eq!(flaw.ideal_range, "160-180°");
}

#[test]
fn test_unsupported_pairs() {
    let result = detect_flaws(&clean_smash(), "tennis", "serve");
    assert!(!result.supported);
    assert!(result.flaws.is_empty());
    assert_eq!(result.rules_evaluated, 0);
    assert_eq!(result.overall_injury_risk, InjuryRisk::None);
    assert!(result.summary.contains("tennis"));

    // A badminton action is never checked against basketball rules
    let crossed = detect_basketball_flaws(&clean_smash(), Action::Smash);
    assert!(!crossed.supported);
}

#[test]
fn test_detect_flaws_parses_loose_names() {
    let mut m = clean_smash();
    m.insert(keys::ELBOW_AT_CONTACT.to_string(), Some(110.0));
    let result = detect_flaws(&m, "Badminton", "SMASH");
    assert!(result.supported);
    assert!(find(&result, "bd_smash_low_elbow").is_some());
}

#[test]
fn test_every_table_is_well_formed() {
    for key in SportAction::all() {
        let rules = rules_for(key);
        assert!(!rules.is_empty(), "{} has no rules", key);
        for rule in rules {
            assert!(!rule.id.is_empty());
            assert!(!rule.metric.is_empty());
            assert!(rule.span > 0.0, "{} span", rule.id);
            // The severe threshold lies at or past the primary one
            assert!(
                !rule.direction.violates(rule.threshold, rule.severe_threshold)
                    || rule.threshold == rule.severe_threshold,
                "{} severe threshold",
                rule.id
            );
            if let Some(gate) = rule.injury {
                assert!(!rule.direction.violates(rule.threshold, gate.threshold));
                // Injury flags belong to stability and alignment deficits
                assert!(
                    matches!(
                        rule.category,
                        FlawCategory::Stability | FlawCategory::Alignment | FlawCategory::Balance
                    ),
                    "{} injury gate on {:?}",
                    rule.id,
                    rule.category
                );
            }
        }
    }
}

#[test]
fn test_detection_is_idempotent() {
    let mut m = clean_smash();
    m.insert(keys::WRIST_SPEED.to_string(), Some(1.0));
    let a = detect_badminton_flaws(&m, Action::Smash);
    let b = detect_badminton_flaws(&m, Action::Smash);
    assert_eq!(a, b);
}
