// Basketball benchmark tables
//
// Angles in degrees, release height in torso lengths above the nose,
// jump height in percent of body height, composites 0-100.

use super::{Action, BenchmarkEntry, MetricBenchmark, Preference, SportBenchmarks};
use crate::metrics::keys;

const JUMP_SHOT: &[BenchmarkEntry] = &[
    BenchmarkEntry {
        metric: keys::ELBOW_ANGLE_AT_RELEASE,
        benchmark: MetricBenchmark::new(150.0, 170.0, 135.0, 175.0, Preference::Higher),
        weight: 0.20,
    },
    BenchmarkEntry {
        metric: keys::KNEE_BEND,
        benchmark: MetricBenchmark::new(100.0, 130.0, 80.0, 150.0, Preference::Center),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::RELEASE_ANGLE,
        benchmark: MetricBenchmark::new(45.0, 60.0, 35.0, 70.0, Preference::Center),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::RELEASE_HEIGHT,
        benchmark: MetricBenchmark::new(0.5, 0.9, 0.2, 1.1, Preference::Higher),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::JUMP_HEIGHT,
        benchmark: MetricBenchmark::new(10.0, 25.0, 3.0, 35.0, Preference::Higher),
        weight: 0.10,
    },
    BenchmarkEntry {
        metric: keys::FOLLOW_THROUGH,
        benchmark: MetricBenchmark::new(80.0, 100.0, 50.0, 100.0, Preference::Higher),
        weight: 0.10,
    },
    BenchmarkEntry {
        metric: keys::BODY_BALANCE,
        benchmark: MetricBenchmark::new(80.0, 100.0, 50.0, 100.0, Preference::Higher),
        weight: 0.10,
    },
    BenchmarkEntry {
        metric: keys::SHOULDER_TILT,
        benchmark: MetricBenchmark::new(0.0, 8.0, 0.0, 20.0, Preference::Lower),
        weight: 0.05,
    },
];

// Set shot from the line: deeper elbow extension weight, no jump
const FREE_THROW: &[BenchmarkEntry] = &[
    BenchmarkEntry {
        metric: keys::ELBOW_ANGLE_AT_RELEASE,
        benchmark: MetricBenchmark::new(150.0, 170.0, 135.0, 175.0, Preference::Higher),
        weight: 0.25,
    },
    BenchmarkEntry {
        metric: keys::KNEE_BEND,
        benchmark: MetricBenchmark::new(120.0, 150.0, 100.0, 165.0, Preference::Center),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::RELEASE_ANGLE,
        benchmark: MetricBenchmark::new(48.0, 58.0, 40.0, 65.0, Preference::Center),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::RELEASE_HEIGHT,
        benchmark: MetricBenchmark::new(0.4, 0.8, 0.15, 1.0, Preference::Higher),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::FOLLOW_THROUGH,
        benchmark: MetricBenchmark::new(85.0, 100.0, 60.0, 100.0, Preference::Higher),
        weight: 0.15,
    },
    BenchmarkEntry {
        metric: keys::BODY_BALANCE,
        benchmark: MetricBenchmark::new(85.0, 100.0, 60.0, 100.0, Preference::Higher),
        weight: 0.10,
    },
    BenchmarkEntry {
        metric: keys::SHOULDER_TILT,
        benchmark: MetricBenchmark::new(0.0, 5.0, 0.0, 15.0, Preference::Lower),
        weight: 0.05,
    },
];

pub(super) fn benchmarks(action: Action) -> SportBenchmarks {
    match action {
        Action::FreeThrow => SportBenchmarks::from_entries(FREE_THROW, 4),
        _ => SportBenchmarks::from_entries(JUMP_SHOT, 4),
    }
}
