//! Benchmark registry: per sport × action scoring tables.
//!
//! Every table is plain data. The scoring and flaw engines are generic
//! functions parameterized by these tables, so supporting a new action means
//! adding a table, not new code. Built-in tables live in a process-wide
//! immutable registry; callers that need their own tables build a
//! [`BenchmarkRegistry`] value and register them with validation.

mod badminton;
mod basketball;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::BenchmarkError;

/// Which direction away from the ideal window is penalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Too low is penalized; above the ideal window still scores high
    Higher,
    /// Too high is penalized; below the ideal window still scores high
    Lower,
    /// Deviation either way is penalized symmetrically
    Center,
}

/// Ideal and acceptable windows for one metric
///
/// Invariant: `acceptable_min <= ideal_min <= ideal_max <= acceptable_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBenchmark {
    pub ideal_min: f64,
    pub ideal_max: f64,
    pub acceptable_min: f64,
    pub acceptable_max: f64,
    pub preference: Preference,
}

impl MetricBenchmark {
    pub const fn new(
        ideal_min: f64,
        ideal_max: f64,
        acceptable_min: f64,
        acceptable_max: f64,
        preference: Preference,
    ) -> Self {
        Self {
            ideal_min,
            ideal_max,
            acceptable_min,
            acceptable_max,
            preference,
        }
    }

    /// Check the window ordering invariant
    pub fn validate(&self, metric: &str) -> Result<(), BenchmarkError> {
        let bounds = [
            self.acceptable_min,
            self.ideal_min,
            self.ideal_max,
            self.acceptable_max,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(BenchmarkError::InvalidWindow {
                metric: metric.to_string(),
                reason: "bounds must be finite".to_string(),
            });
        }
        if !(self.acceptable_min <= self.ideal_min
            && self.ideal_min <= self.ideal_max
            && self.ideal_max <= self.acceptable_max)
        {
            return Err(BenchmarkError::InvalidWindow {
                metric: metric.to_string(),
                reason: format!(
                    "expected {} <= {} <= {} <= {}",
                    self.acceptable_min, self.ideal_min, self.ideal_max, self.acceptable_max
                ),
            });
        }
        Ok(())
    }

    /// Display string for the ideal window, e.g. `150-170`
    pub fn ideal_range_label(&self) -> String {
        format!("{}-{}", self.ideal_min, self.ideal_max)
    }
}

/// One row of a declarative benchmark table
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkEntry {
    pub metric: &'static str,
    pub benchmark: MetricBenchmark,
    pub weight: f64,
}

/// Complete scoring table for one sport/action
///
/// Weights are authored to sum to about 1.0 but are renormalized at
/// scoring time, so exact sums are not required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportBenchmarks {
    pub metrics: BTreeMap<String, MetricBenchmark>,
    pub weights: BTreeMap<String, f64>,
    pub min_required_metrics: usize,
}

impl SportBenchmarks {
    /// Build a table from declarative rows
    pub fn from_entries(entries: &[BenchmarkEntry], min_required_metrics: usize) -> Self {
        let mut metrics = BTreeMap::new();
        let mut weights = BTreeMap::new();
        for entry in entries {
            metrics.insert(entry.metric.to_string(), entry.benchmark);
            weights.insert(entry.metric.to_string(), entry.weight);
        }
        Self {
            metrics,
            weights,
            min_required_metrics,
        }
    }

    /// A table with no metrics; scores nothing
    pub fn empty() -> Self {
        Self {
            metrics: BTreeMap::new(),
            weights: BTreeMap::new(),
            min_required_metrics: 0,
        }
    }

    /// Weight of a metric, zero when the table declares none
    pub fn weight(&self, metric: &str) -> f64 {
        self.weights.get(metric).copied().unwrap_or(0.0)
    }

    /// Check every window and weight
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        for (metric, benchmark) in &self.metrics {
            benchmark.validate(metric)?;
        }
        for (metric, &weight) in &self.weights {
            if !self.metrics.contains_key(metric) {
                return Err(BenchmarkError::UnknownMetric {
                    metric: metric.clone(),
                });
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(BenchmarkError::InvalidWeight {
                    metric: metric.clone(),
                    weight,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON table
    pub fn from_json(json: &str) -> Result<Self, BenchmarkError> {
        let table: SportBenchmarks = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Read, parse and validate a JSON table from disk
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, BenchmarkError> {
        let contents = fs::read_to_string(&path).map_err(|err| BenchmarkError::ParseFailed {
            reason: format!("{:?}: {}", path.as_ref(), err),
        })?;
        let table = Self::from_json(&contents)?;
        log::info!(
            "[Benchmarks] Loaded table with {} metrics from {:?}",
            table.metrics.len(),
            path.as_ref()
        );
        Ok(table)
    }
}

/// Lowercase and unify `-`/space separators to `_`
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Basketball,
    Badminton,
}

impl Sport {
    pub const ALL: [Sport; 2] = [Sport::Basketball, Sport::Badminton];

    pub fn parse(raw: &str) -> Option<Sport> {
        match normalize_key(raw).as_str() {
            "basketball" => Some(Sport::Basketball),
            "badminton" => Some(Sport::Badminton),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sport::Basketball => "basketball",
            Sport::Badminton => "badminton",
        }
    }

    pub fn actions(self) -> &'static [Action] {
        match self {
            Sport::Basketball => &[Action::JumpShot, Action::FreeThrow],
            Sport::Badminton => &[Action::Smash, Action::Clear, Action::Serve],
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    JumpShot,
    FreeThrow,
    Smash,
    Clear,
    Serve,
}

impl Action {
    pub fn parse(raw: &str) -> Option<Action> {
        match normalize_key(raw).as_str() {
            "jump_shot" => Some(Action::JumpShot),
            "free_throw" => Some(Action::FreeThrow),
            "smash" => Some(Action::Smash),
            "clear" => Some(Action::Clear),
            "serve" => Some(Action::Serve),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::JumpShot => "jump_shot",
            Action::FreeThrow => "free_throw",
            Action::Smash => "smash",
            Action::Clear => "clear",
            Action::Serve => "serve",
        }
    }

    pub fn sport(self) -> Sport {
        match self {
            Action::JumpShot | Action::FreeThrow => Sport::Basketball,
            Action::Smash | Action::Clear | Action::Serve => Sport::Badminton,
        }
    }

    /// Whether the action includes a jump worth measuring
    pub fn involves_jump(self) -> bool {
        matches!(self, Action::JumpShot | Action::Smash)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry key: an action paired with the sport it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SportAction {
    pub sport: Sport,
    pub action: Action,
}

impl SportAction {
    /// Parse a caller-supplied pair; `None` for unknown names or an action
    /// that does not belong to the sport
    pub fn parse(sport: &str, action: &str) -> Option<SportAction> {
        let sport = Sport::parse(sport)?;
        let action = Action::parse(action)?;
        (action.sport() == sport).then_some(SportAction { sport, action })
    }

    /// Every supported pair in registry order
    pub fn all() -> Vec<SportAction> {
        Sport::ALL
            .iter()
            .flat_map(|&sport| {
                sport
                    .actions()
                    .iter()
                    .map(move |&action| SportAction { sport, action })
            })
            .collect()
    }
}

impl fmt::Display for SportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sport, self.action)
    }
}

/// Immutable lookup of benchmark tables keyed by sport/action
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRegistry {
    tables: BTreeMap<SportAction, SportBenchmarks>,
}

impl BenchmarkRegistry {
    /// Registry holding every built-in table
    pub fn builtin() -> Self {
        let mut tables = BTreeMap::new();
        for key in SportAction::all() {
            let table = match key.sport {
                Sport::Basketball => basketball::benchmarks(key.action),
                Sport::Badminton => badminton::benchmarks(key.action),
            };
            tables.insert(key, table);
        }
        Self { tables }
    }

    /// Register (or replace) a table after validating it
    pub fn with_table(
        mut self,
        key: SportAction,
        table: SportBenchmarks,
    ) -> Result<Self, BenchmarkError> {
        table.validate()?;
        self.tables.insert(key, table);
        Ok(self)
    }

    pub fn get(&self, key: SportAction) -> Option<&SportBenchmarks> {
        self.tables.get(&key)
    }

    /// Look up by caller-supplied names
    pub fn lookup(&self, sport: &str, action: &str) -> Option<&SportBenchmarks> {
        SportAction::parse(sport, action).and_then(|key| self.get(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = SportAction> + '_ {
        self.tables.keys().copied()
    }
}

/// Built-in tables, constructed on first use
static REGISTRY: Lazy<BenchmarkRegistry> = Lazy::new(BenchmarkRegistry::builtin);

/// Access the built-in benchmark registry.
pub fn registry() -> &'static BenchmarkRegistry {
    &REGISTRY
}
