use super::*;
use crate::benchmarks::Preference;
use crate::metrics::keys;

fn elbow_benchmark() -> MetricBenchmark {
    MetricBenchmark::new(150.0, 170.0, 135.0, 175.0, Preference::Higher)
}

fn jump_shot_table() -> &'static SportBenchmarks {
    registry().lookup("basketball", "jump_shot").unwrap()
}

/// Every jump-shot metric sitting inside its ideal window
fn ideal_jump_shot_metrics() -> MetricsMap {
    let mut metrics = MetricsMap::new();
    for (metric, benchmark) in &jump_shot_table().metrics {
        let mid = (benchmark.ideal_min + benchmark.ideal_max) / 2.0;
        metrics.insert(metric.clone(), Some(mid));
    }
    metrics
}

fn without_timestamp(mut result: ScoringResult) -> ScoringResult {
    result.calculated_at_ms = 0;
    result
}

#[test]
fn test_value_inside_ideal_window_scores_100() {
    assert_eq!(score_with_preference(160.0, &elbow_benchmark()), Some(100.0));
    assert_eq!(score_with_preference(150.0, &elbow_benchmark()), Some(100.0));
    assert_eq!(score_with_preference(170.0, &elbow_benchmark()), Some(100.0));
}

#[test]
fn test_partial_credit_below_ideal() {
    let s = score_with_preference(140.0, &elbow_benchmark()).unwrap();
    assert!((s - 100.0 / 3.0).abs() < 1e-9, "got {}", s);
    assert!(s > 0.0 && s < 100.0);
}

#[test]
fn test_below_acceptable_scores_zero_but_is_included() {
    assert_eq!(score_with_preference(100.0, &elbow_benchmark()), Some(0.0));

    let mut metrics = ideal_jump_shot_metrics();
    metrics.insert(keys::ELBOW_ANGLE_AT_RELEASE.to_string(), Some(100.0));
    let result = score(&metrics, jump_shot_table());
    assert_eq!(result.metrics_included, result.metrics_total);
    assert_eq!(result.breakdown[keys::ELBOW_ANGLE_AT_RELEASE], 0.0);
}

#[test]
fn test_good_direction_overshoot_tapers_to_floor() {
    let b = elbow_benchmark();
    let s = score_with_preference(174.0, &b).unwrap();
    assert!((s - 92.0).abs() < 1e-9, "got {}", s);
    assert_eq!(score_with_preference(175.0, &b), Some(GOOD_DIRECTION_FLOOR));
    assert_eq!(score_with_preference(179.0, &b), Some(GOOD_DIRECTION_FLOOR));

    let lower = MetricBenchmark::new(5.0, 10.0, 0.0, 20.0, Preference::Lower);
    assert!((score_with_preference(2.5, &lower).unwrap() - 95.0).abs() < 1e-9);
    assert_eq!(score_with_preference(-3.0, &lower), Some(GOOD_DIRECTION_FLOOR));
    // The bad direction of a lower-is-better metric still loses credit
    assert!((score_with_preference(15.0, &lower).unwrap() - 50.0).abs() < 1e-9);
    assert_eq!(score_with_preference(25.0, &lower), Some(0.0));
}

#[test]
fn test_center_preference_is_symmetric() {
    let b = MetricBenchmark::new(100.0, 130.0, 80.0, 150.0, Preference::Center);
    let low = score_with_preference(90.0, &b).unwrap();
    let high = score_with_preference(140.0, &b).unwrap();
    assert!((low - 50.0).abs() < 1e-9);
    assert!((high - 50.0).abs() < 1e-9);
    assert_eq!(score_with_preference(79.0, &b), Some(0.0));
    assert_eq!(score_with_preference(151.0, &b), Some(0.0));
}

#[test]
fn test_non_finite_value_is_excluded() {
    assert_eq!(score_with_preference(f64::NAN, &elbow_benchmark()), None);
    assert_eq!(score_with_preference(f64::INFINITY, &elbow_benchmark()), None);
}

#[test]
fn test_higher_preference_is_monotonic_below_ideal() {
    let b = elbow_benchmark();
    let mut previous = 0.0;
    let mut value = 120.0;
    while value < b.ideal_min {
        let s = score_with_preference(value, &b).unwrap();
        assert!(s >= previous, "score dropped at {}", value);
        if value > b.acceptable_min {
            assert!(s > previous, "score did not rise at {}", value);
        }
        previous = s;
        value += 0.5;
    }
}

#[test]
fn test_null_metric_is_excluded_and_weights_renormalize() {
    let mut metrics = ideal_jump_shot_metrics();
    metrics.insert(keys::RELEASE_ANGLE.to_string(), None);

    let result = score(&metrics, jump_shot_table());
    assert_eq!(result.metrics_total, 8);
    assert_eq!(result.metrics_included, 7);
    assert!(!result.breakdown.contains_key(keys::RELEASE_ANGLE));
    assert!(!result.details.contains_key(keys::RELEASE_ANGLE));
    // A missing metric must not lower the achievable maximum
    assert!((result.overall_score - 100.0).abs() < 1e-9);

    let weight_sum: f64 = result.details.values().map(|d| d.weight).sum();
    assert!((weight_sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_renormalized_weights_sum_to_one_for_every_subset() {
    let table = jump_shot_table();
    let names: Vec<&String> = table.metrics.keys().collect();
    for mask in 1u32..(1 << names.len()) {
        let included: BTreeSet<String> = names
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, name)| (*name).clone())
            .collect();
        let weights = adjust_weights_for_missing_metrics(&table.weights, &included);
        let sum: f64 = weights.values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "mask {:b} sums to {}", mask, sum);
    }
}

#[test]
fn test_zero_weights_share_equally() {
    let mut weights = BTreeMap::new();
    weights.insert("a".to_string(), 0.0);
    weights.insert("b".to_string(), 0.0);
    let included: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    let adjusted = adjust_weights_for_missing_metrics(&weights, &included);
    assert_eq!(adjusted["a"], 0.5);
    assert_eq!(adjusted["b"], 0.5);
    assert!(adjust_weights_for_missing_metrics(&weights, &BTreeSet::new()).is_empty());
}

#[test]
fn test_minimum_metrics_floor() {
    let table = jump_shot_table();
    let mut metrics = MetricsMap::new();
    // Three perfect metrics, below the minimum of four
    for metric in table.metrics.keys().take(3) {
        let b = table.metrics[metric];
        metrics.insert(metric.clone(), Some(b.ideal_min));
    }

    let result = score(&metrics, table);
    assert_eq!(result.metrics_included, 3);
    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.grade, Grade::F);
    assert!(result.message.is_some());
    assert!(result.supported);
}

#[test]
fn test_confidence_formula() {
    assert!((calculate_scoring_confidence(8, 8, 4) - 1.0).abs() < 1e-12);
    assert!((calculate_scoring_confidence(4, 8, 4) - 0.35).abs() < 1e-12);
    assert!((calculate_scoring_confidence(6, 8, 4) - (0.7 * 0.75 + 0.3 * 0.5)).abs() < 1e-12);
    assert!((calculate_scoring_confidence(3, 3, 3) - 1.0).abs() < 1e-12);
    assert_eq!(calculate_scoring_confidence(3, 8, 4), 0.0);
    assert_eq!(calculate_scoring_confidence(0, 0, 0), 0.0);
}

#[test]
fn test_confidence_grows_with_coverage() {
    let mut previous = 0.0;
    for included in 4..=8 {
        let c = calculate_scoring_confidence(included, 8, 4);
        assert!(c > previous);
        assert!((0.0..=1.0).contains(&c));
        previous = c;
    }
}

#[test]
fn test_grade_curve() {
    assert!((apply_grade_curve(80.0, 0.15) - 92.0).abs() < 1e-9);
    assert_eq!(apply_grade_curve(90.0, 0.15), 100.0);
    assert_eq!(apply_grade_curve(55.0, 0.0), 55.0);
    assert_eq!(apply_grade_curve(f64::NAN, 0.15), 0.0);
}

#[test]
fn test_letter_grades() {
    assert_eq!(Grade::from_score(95.0), Grade::A);
    assert_eq!(Grade::from_score(90.0), Grade::A);
    assert_eq!(Grade::from_score(85.0), Grade::B);
    assert_eq!(Grade::from_score(70.0), Grade::C);
    assert_eq!(Grade::from_score(60.0), Grade::D);
    assert_eq!(Grade::from_score(59.9), Grade::F);
}

#[test]
fn test_scoring_is_idempotent() {
    let mut metrics = ideal_jump_shot_metrics();
    metrics.insert(keys::ELBOW_ANGLE_AT_RELEASE.to_string(), Some(141.3));
    metrics.insert(keys::KNEE_BEND.to_string(), None);

    let a = without_timestamp(score(&metrics, jump_shot_table()));
    let b = without_timestamp(score(&metrics, jump_shot_table()));
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_badminton_applies_curve() {
    let config = ScoringConfig::default();
    let table = registry().lookup("badminton", "clear").unwrap();
    let mut metrics = MetricsMap::new();
    for (metric, b) in &table.metrics {
        // Halfway into the bad-side partial window: 50 for every metric
        let value = match b.preference {
            Preference::Lower => (b.ideal_max + b.acceptable_max) / 2.0,
            _ => (b.ideal_min + b.acceptable_min) / 2.0,
        };
        metrics.insert(metric.clone(), Some(value));
    }

    let plain = score(&metrics, table);
    let curved = score_badminton(&metrics, Action::Clear, &config);
    assert!((plain.overall_score - 50.0).abs() < 1e-9);
    assert!((curved.overall_score - 57.5).abs() < 1e-9);
    assert_eq!(curved.label.as_deref(), Some("badminton/clear"));
    assert_eq!(plain.confidence, curved.confidence);
}

#[test]
fn test_basketball_has_no_curve_by_default() {
    let metrics = ideal_jump_shot_metrics();
    let result = score_basketball(&metrics, Action::JumpShot, &ScoringConfig::default());
    assert!((result.overall_score - 100.0).abs() < 1e-9);
    assert_eq!(result.grade, Grade::A);
    assert!((result.confidence - 1.0).abs() < 1e-12);
}

#[test]
fn test_unsupported_pair() {
    let metrics = ideal_jump_shot_metrics();
    let config = ScoringConfig::default();

    let result = score_action(&metrics, "tennis", "serve", &config);
    assert!(!result.supported);
    assert_eq!(result.overall_score, 0.0);
    assert!(result.breakdown.is_empty());
    assert!(result.message.unwrap().contains("tennis"));

    // A real action under the wrong sport is also unsupported
    assert!(!score_action(&metrics, "badminton", "jump_shot", &config).supported);
    assert!(!score_basketball(&metrics, Action::Smash, &config).supported);
}

#[test]
fn test_score_action_parses_loose_names() {
    let metrics = ideal_jump_shot_metrics();
    let result = score_action(&metrics, "Basketball", "Jump Shot", &ScoringConfig::default());
    assert!(result.supported);
    assert_eq!(result.label.as_deref(), Some("basketball/jump_shot"));
}

#[test]
fn test_metrics_outside_table_are_ignored() {
    let mut metrics = ideal_jump_shot_metrics();
    metrics.insert("wrist_speed".to_string(), Some(9.0));
    let result = score(&metrics, jump_shot_table());
    assert_eq!(result.metrics_included, 8);
    assert!(!result.breakdown.contains_key("wrist_speed"));
}

#[test]
fn test_empty_table() {
    let result = score(&ideal_jump_shot_metrics(), &SportBenchmarks::empty());
    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.metrics_total, 0);
}
