// Flaws - rule-based technique flaw detection
//
// Module organization:
// - this module: rule and result types, the shared rule check, injury-risk
//   aggregation and the sport/action dispatch
// - basketball / badminton: per-action rule tables (pure data)
//
// Rules are independent and non-exclusive. A rule whose metric is missing is
// skipped, never counted as a pass. Flaw detection reads the same metrics map
// as scoring but never looks at the score.

mod badminton;
mod basketball;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::benchmarks::{Action, Sport, SportAction};
use crate::metrics::{with_metric, MetricsMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Session-level injury risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjuryRisk {
    None,
    Low,
    Moderate,
    High,
}

impl fmt::Display for InjuryRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InjuryRisk::None => "none",
            InjuryRisk::Low => "low",
            InjuryRisk::Moderate => "moderate",
            InjuryRisk::High => "high",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlawCategory {
    Technique,
    Power,
    Balance,
    Stability,
    Alignment,
}

/// Which side of the threshold is a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Below,
    Above,
}

impl Direction {
    /// True when `value` is strictly past `threshold` in this direction
    pub fn violates(self, value: f64, threshold: f64) -> bool {
        match self {
            Direction::Below => value < threshold,
            Direction::Above => value > threshold,
        }
    }
}

/// Injury flag raised when the value also passes a stricter threshold
#[derive(Debug, Clone, Copy)]
pub struct InjuryGate {
    pub threshold: f64,
    pub details: &'static str,
}

/// Second metric that must also be out of range for the rule to fire
#[derive(Debug, Clone, Copy)]
pub struct Companion {
    pub metric: &'static str,
    pub direction: Direction,
    pub threshold: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct VideoRef {
    pub url: &'static str,
    pub title: &'static str,
}

/// One declarative flaw check
#[derive(Debug, Clone, Copy)]
pub struct FlawRule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: FlawCategory,
    pub metric: &'static str,
    pub direction: Direction,
    /// Crossing this emits a flaw at `base_severity`
    pub threshold: f64,
    /// Crossing this escalates to `Severity::High`
    pub severe_threshold: f64,
    /// Distance past `threshold` that maps to full confidence
    pub span: f64,
    pub base_severity: Severity,
    pub injury: Option<InjuryGate>,
    pub companion: Option<Companion>,
    pub body_parts: &'static [&'static str],
    pub ideal_range: &'static str,
    pub correction: &'static str,
    pub drill: Option<&'static str>,
    pub video: Option<VideoRef>,
}

/// Field defaults for rule tables (`..RULE_DEFAULTS`)
pub(crate) const RULE_DEFAULTS: FlawRule = FlawRule {
    id: "",
    title: "",
    description: "",
    category: FlawCategory::Technique,
    metric: "",
    direction: Direction::Below,
    threshold: 0.0,
    severe_threshold: 0.0,
    span: 1.0,
    base_severity: Severity::Medium,
    injury: None,
    companion: None,
    body_parts: &[],
    ideal_range: "",
    correction: "",
    drill: None,
    video: None,
};

/// A violated rule in one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFlaw {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub category: FlawCategory,
    pub injury_risk: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_details: Option<String>,
    pub affected_body_parts: Vec<String>,
    pub actual_value: f64,
    pub threshold: f64,
    pub ideal_range: String,
    pub correction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drill: Option<String>,
    /// 0-1, how far past the threshold the value is
    pub confidence: f64,
}

/// Result of one rule check
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    /// A metric the rule reads is missing or non-finite
    Skipped,
    Passed,
    Flagged(DetectedFlaw),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlawDetectionResult {
    pub flaws: Vec<DetectedFlaw>,
    pub rules_evaluated: usize,
    pub rules_skipped: usize,
    pub overall_injury_risk: InjuryRisk,
    pub summary: String,
    pub supported: bool,
}

impl FlawDetectionResult {
    /// Well-formed result for a sport/action pair with no rule set
    pub fn unsupported(sport: &str, action: &str) -> Self {
        Self {
            flaws: Vec::new(),
            rules_evaluated: 0,
            rules_skipped: 0,
            overall_injury_risk: InjuryRisk::None,
            summary: format!(
                "Flaw detection is not supported for sport '{}' action '{}'",
                sport, action
            ),
            supported: false,
        }
    }
}

fn flag(rule: &FlawRule, value: f64) -> DetectedFlaw {
    let severity = if rule.direction.violates(value, rule.severe_threshold) {
        Severity::High
    } else {
        rule.base_severity
    };
    let injury = rule
        .injury
        .filter(|gate| rule.direction.violates(value, gate.threshold));
    let confidence = if rule.span > 0.0 {
        ((rule.threshold - value).abs() / rule.span).clamp(0.0, 1.0)
    } else {
        1.0
    };

    DetectedFlaw {
        id: rule.id.to_string(),
        title: rule.title.to_string(),
        description: rule.description.to_string(),
        severity,
        category: rule.category,
        injury_risk: injury.is_some(),
        injury_details: injury.map(|gate| gate.details.to_string()),
        affected_body_parts: rule.body_parts.iter().map(|s| s.to_string()).collect(),
        actual_value: value,
        threshold: rule.threshold,
        ideal_range: rule.ideal_range.to_string(),
        correction: rule.correction.to_string(),
        youtube_url: rule.video.map(|v| v.url.to_string()),
        youtube_title: rule.video.map(|v| v.title.to_string()),
        drill: rule.drill.map(str::to_string),
        confidence,
    }
}

/// Evaluate one rule against a metrics map
pub fn check_rule(rule: &FlawRule, metrics: &MetricsMap) -> RuleOutcome {
    let companion_holds = match rule.companion {
        Some(c) => match with_metric(metrics, c.metric, |v| c.direction.violates(v, c.threshold)) {
            Some(holds) => holds,
            None => return RuleOutcome::Skipped,
        },
        None => true,
    };

    match with_metric(metrics, rule.metric, |value| {
        (rule.direction.violates(value, rule.threshold), value)
    }) {
        None => RuleOutcome::Skipped,
        Some((true, value)) if companion_holds => RuleOutcome::Flagged(flag(rule, value)),
        Some(_) => RuleOutcome::Passed,
    }
}

/// Ordinal escalation over injury-flagged flaws
///
/// High if any injury flaw is high severity, else moderate for more than
/// one injury flaw, low for exactly one, none otherwise.
pub fn aggregate_injury_risk(flaws: &[DetectedFlaw]) -> InjuryRisk {
    let injury: Vec<&DetectedFlaw> = flaws.iter().filter(|f| f.injury_risk).collect();
    if injury.iter().any(|f| f.severity == Severity::High) {
        InjuryRisk::High
    } else if injury.len() > 1 {
        InjuryRisk::Moderate
    } else if injury.len() == 1 {
        InjuryRisk::Low
    } else {
        InjuryRisk::None
    }
}

fn summarize(flaws: &[DetectedFlaw], evaluated: usize, skipped: usize, risk: InjuryRisk) -> String {
    let mut summary = if flaws.is_empty() {
        format!("No technique flaws detected in {} checks.", evaluated)
    } else {
        let high = flaws.iter().filter(|f| f.severity == Severity::High).count();
        format!(
            "Detected {} flaw(s) in {} checks, {} high severity. Injury risk: {}.",
            flaws.len(),
            evaluated,
            high,
            risk
        )
    };
    if skipped > 0 {
        summary.push_str(&format!(
            " {} check(s) skipped for missing metrics.",
            skipped
        ));
    }
    summary
}

/// Run an ordered rule set
pub fn evaluate_rules(metrics: &MetricsMap, rules: &[FlawRule]) -> FlawDetectionResult {
    let mut flaws = Vec::new();
    let mut evaluated = 0;
    let mut skipped = 0;

    for rule in rules {
        match check_rule(rule, metrics) {
            RuleOutcome::Skipped => skipped += 1,
            RuleOutcome::Passed => evaluated += 1,
            RuleOutcome::Flagged(flaw) => {
                evaluated += 1;
                flaws.push(flaw);
            }
        }
    }

    let overall_injury_risk = aggregate_injury_risk(&flaws);
    let summary = summarize(&flaws, evaluated, skipped, overall_injury_risk);
    FlawDetectionResult {
        flaws,
        rules_evaluated: evaluated,
        rules_skipped: skipped,
        overall_injury_risk,
        summary,
        supported: true,
    }
}

/// Rule table for a sport/action
pub fn rules_for(key: SportAction) -> &'static [FlawRule] {
    match key.sport {
        Sport::Basketball => basketball::rules(key.action),
        Sport::Badminton => badminton::rules(key.action),
    }
}

fn detect_registered(metrics: &MetricsMap, sport: Sport, action: Action) -> FlawDetectionResult {
    if action.sport() != sport {
        return FlawDetectionResult::unsupported(sport.as_str(), action.as_str());
    }
    evaluate_rules(metrics, rules_for(SportAction { sport, action }))
}

pub fn detect_basketball_flaws(metrics: &MetricsMap, action: Action) -> FlawDetectionResult {
    detect_registered(metrics, Sport::Basketball, action)
}

pub fn detect_badminton_flaws(metrics: &MetricsMap, action: Action) -> FlawDetectionResult {
    detect_registered(metrics, Sport::Badminton, action)
}

/// Detect flaws by caller-supplied names
pub fn detect_flaws(metrics: &MetricsMap, sport: &str, action: &str) -> FlawDetectionResult {
    match SportAction::parse(sport, action) {
        Some(key) => match key.sport {
            Sport::Basketball => detect_basketball_flaws(metrics, key.action),
            Sport::Badminton => detect_badminton_flaws(metrics, key.action),
        },
        None => {
            log::warn!(
                "[Flaws] Unsupported sport/action '{}'/'{}'",
                sport,
                action
            );
            FlawDetectionResult::unsupported(sport, action)
        }
    }
}

#[cfg(test)]
#[path = "flaws_tests.rs"]
mod tests;
