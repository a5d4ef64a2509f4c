// Badminton benchmark tables
//
// Contact height is the racket wrist above the racket-side shoulder in
// torso lengths (negative below the shoulder), wrist speed is normalized
// units per second, stance width is a ratio of shoulder width.

use super::{Action, BenchmarkEntry, MetricBenchmark, Preference, SportBenchmarks};
use crate::metrics::keys;

const SMASH: &[BenchmarkEntry] = &[
    BenchmarkEntry {
        metric: keys::ELBOW_AT_CONTACT,
        benchmark: MetricBenchmark::new(160.0, 180.0, 140.0, 180.0, Preference::Higher),
        weight: 0.20,
    },
    BenchmarkEntry {
        metric: keys::CONTACT_HEIGHT,
        benchmark: MetricBenchmark::new(0.9, 1.4, 0.5, 1.6, Preference::Higher),
        weight: 0.20,
    },
    BenchmarkEntry {
        metric: keys::TRUNK_ROTATION,
        benchmark: MetricBenchmark::new(30.0, 60.0, 15.0, 75.0, Preference::Center),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::WRIST_SPEED,
        benchmark: MetricBenchmark::new(3.0, 6.0, 1.5, 8.0, Preference::Higher),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::FOLLOW_THROUGH,
        benchmark: MetricBenchmark::new(70.0, 100.0, 40.0, 100.0, Preference::Higher),
        weight: 0.10,
    },
    BenchmarkEntry {
        metric: keys::KNEE_BEND,
        benchmark: MetricBenchmark::new(110.0, 140.0, 90.0, 160.0, Preference::Center),
        weight: 0.05,
    },
    BenchmarkEntry {
        metric: keys::STANCE_WIDTH_RATIO,
        benchmark: MetricBenchmark::new(1.0, 1.6, 0.7, 2.0, Preference::Center),
        weight: 0.05,
    },
    BenchmarkEntry {
        metric: keys::JUMP_HEIGHT,
        benchmark: MetricBenchmark::new(8.0, 25.0, 0.0, 35.0, Preference::Higher),
        weight: 0.10,
    },
];

const CLEAR: &[BenchmarkEntry] = &[
    BenchmarkEntry {
        metric: keys::ELBOW_AT_CONTACT,
        benchmark: MetricBenchmark::new(155.0, 180.0, 130.0, 180.0, Preference::Higher),
        weight: 0.25,
    },
    BenchmarkEntry {
        metric: keys::CONTACT_HEIGHT,
        benchmark: MetricBenchmark::new(0.8, 1.3, 0.4, 1.5, Preference::Higher),
        weight: 0.20,
    },
    BenchmarkEntry {
        metric: keys::TRUNK_ROTATION,
        benchmark: MetricBenchmark::new(25.0, 55.0, 10.0, 70.0, Preference::Center),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::WRIST_SPEED,
        benchmark: MetricBenchmark::new(2.0, 4.5, 1.0, 6.5, Preference::Higher),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::FOLLOW_THROUGH,
        benchmark: MetricBenchmark::new(70.0, 100.0, 40.0, 100.0, Preference::Higher),
        weight: 0.10,
    },
    BenchmarkEntry {
        metric: keys::KNEE_BEND,
        benchmark: MetricBenchmark::new(120.0, 150.0, 100.0, 165.0, Preference::Center),
        weight: 0.05,
    },
    BenchmarkEntry {
        metric: keys::STANCE_WIDTH_RATIO,
        benchmark: MetricBenchmark::new(1.0, 1.5, 0.7, 1.9, Preference::Center),
        weight: 0.10,
    },
];

// Low short serve: contact below the shoulder, compact swing
const SERVE: &[BenchmarkEntry] = &[
    BenchmarkEntry {
        metric: keys::ELBOW_AT_CONTACT,
        benchmark: MetricBenchmark::new(100.0, 140.0, 80.0, 160.0, Preference::Center),
        weight: 0.20,
    },
    BenchmarkEntry {
        metric: keys::CONTACT_HEIGHT,
        benchmark: MetricBenchmark::new(-1.2, -0.7, -1.5, -0.4, Preference::Lower),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::TRUNK_ROTATION,
        benchmark: MetricBenchmark::new(0.0, 20.0, 0.0, 35.0, Preference::Lower),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::WRIST_SPEED,
        benchmark: MetricBenchmark::new(0.5, 2.0, 0.2, 3.0, Preference::Center),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::FOLLOW_THROUGH,
        benchmark: MetricBenchmark::new(40.0, 80.0, 20.0, 100.0, Preference::Center),
        weight: 0.10,
    },
    BenchmarkEntry {
        metric: keys::KNEE_BEND,
        benchmark: MetricBenchmark::new(140.0, 170.0, 120.0, 180.0, Preference::Center),
        weight: 0.10,
    },
    BenchmarkEntry {
        metric: keys::STANCE_WIDTH_RATIO,
        benchmark: MetricBenchmark::new(1.0, 1.6, 0.7, 2.0, Preference::Center),
        weight: 0.15,
    },
];

pub(super) fn benchmarks(action: Action) -> SportBenchmarks {
    match action {
        Action::Clear => SportBenchmarks::from_entries(CLEAR, 4),
        Action::Serve => SportBenchmarks::from_entries(SERVE, 4),
        _ => SportBenchmarks::from_entries(SMASH, 4),
    }
}
