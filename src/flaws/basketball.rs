// Basketball flaw rule tables
//
// Jump shot and free throw check the same shapes with their own thresholds.

use super::{
    Companion, Direction, FlawCategory, FlawRule, InjuryGate, Severity, VideoRef, RULE_DEFAULTS,
};
use crate::benchmarks::Action;
use crate::metrics::keys;

const FORM_SHOOTING: VideoRef = VideoRef {
    url: "https://www.youtube.com/results?search_query=basketball+form+shooting+drill",
    title: "Form shooting drill",
};

const SHOT_ARC: VideoRef = VideoRef {
    url: "https://www.youtube.com/results?search_query=basketball+shooting+arc",
    title: "Shooting arc fundamentals",
};

const JUMP_SHOT: &[FlawRule] = &[
    FlawRule {
        id: "bb_low_elbow_extension",
        title: "Incomplete elbow extension",
        description: "The shooting arm is still bent at release, so the ball is pushed rather than shot.",
        metric: keys::ELBOW_ANGLE_AT_RELEASE,
        direction: Direction::Below,
        threshold: 145.0,
        severe_threshold: 135.0,
        span: 20.0,
        body_parts: &["elbow", "shoulder"],
        ideal_range: "150-170°",
        correction: "Extend fully through the elbow and finish with the arm pointing at the rim.",
        drill: Some("One-hand form shooting from two metres, holding the finish for two seconds"),
        video: Some(FORM_SHOOTING),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_shallow_knee_bend",
        title: "Shallow leg load",
        description: "The knees barely bend before the shot, so the arms have to supply the range.",
        category: FlawCategory::Power,
        metric: keys::KNEE_BEND,
        direction: Direction::Above,
        threshold: 150.0,
        severe_threshold: 160.0,
        span: 20.0,
        body_parts: &["knees", "hips"],
        ideal_range: "100-130°",
        correction: "Sit into the shot: bend the knees until the thighs are about halfway to parallel.",
        drill: Some("Dip-and-shoot: catch, dip, release in one rhythm"),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_excessive_knee_bend",
        title: "Over-deep crouch",
        description: "The crouch is deeper than the shot needs, which slows the release and loads the knees.",
        category: FlawCategory::Stability,
        metric: keys::KNEE_BEND,
        direction: Direction::Below,
        threshold: 85.0,
        severe_threshold: 70.0,
        span: 20.0,
        injury: Some(InjuryGate {
            threshold: 75.0,
            details: "Deep loaded knee flexion places high stress on the patellar tendon at takeoff and landing.",
        }),
        body_parts: &["knees"],
        ideal_range: "100-130°",
        correction: "Shorten the dip; load only as deep as you can rise from quickly.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_flat_release",
        title: "Flat release angle",
        description: "The ball leaves the hand on a low trajectory, shrinking the target at the rim.",
        metric: keys::RELEASE_ANGLE,
        direction: Direction::Below,
        threshold: 40.0,
        severe_threshold: 30.0,
        span: 15.0,
        body_parts: &["wrist", "elbow"],
        ideal_range: "45-60°",
        correction: "Release up and out: aim to drop the ball through the top of the rim.",
        video: Some(SHOT_ARC),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_steep_release",
        title: "Overly steep release",
        description: "The ball is launched almost vertically, costing distance control.",
        metric: keys::RELEASE_ANGLE,
        direction: Direction::Above,
        threshold: 68.0,
        severe_threshold: 78.0,
        span: 15.0,
        base_severity: Severity::Low,
        body_parts: &["wrist", "elbow"],
        ideal_range: "45-60°",
        correction: "Push the ball toward the rim as well as up; finish with the wrist toward the target.",
        video: Some(SHOT_ARC),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_low_release_point",
        title: "Low release point",
        description: "The ball is released close to the face, where it is easy to block.",
        metric: keys::RELEASE_HEIGHT,
        direction: Direction::Below,
        threshold: 0.3,
        severe_threshold: 0.1,
        span: 0.3,
        body_parts: &["shoulder", "elbow"],
        ideal_range: "0.5-0.9 torso lengths above the head",
        correction: "Lift the set point above the forehead before extending.",
        drill: Some("Wall shooting: release above a line taped at full reach"),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_low_jump",
        title: "Little vertical lift",
        description: "The shot is taken with almost no jump.",
        category: FlawCategory::Power,
        metric: keys::JUMP_HEIGHT,
        direction: Direction::Below,
        threshold: 5.0,
        severe_threshold: 2.0,
        span: 8.0,
        base_severity: Severity::Low,
        body_parts: &["legs"],
        ideal_range: "10-25% of body height",
        correction: "Drive through the floor with both feet as the ball rises to the set point.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_short_follow_through",
        title: "Short follow-through",
        description: "The arm drops straight after release instead of holding the finish.",
        metric: keys::FOLLOW_THROUGH,
        direction: Direction::Below,
        threshold: 70.0,
        severe_threshold: 50.0,
        span: 30.0,
        body_parts: &["wrist", "elbow"],
        ideal_range: "80-100% arm extension",
        correction: "Hold the goose-neck finish until the ball reaches the rim.",
        drill: Some("Freeze-finish shooting: hold every follow-through for a two count"),
        video: Some(FORM_SHOOTING),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_push_shot",
        title: "Push shot",
        description: "A bent elbow combined with no follow-through: the ball is pushed from the chest.",
        metric: keys::FOLLOW_THROUGH,
        direction: Direction::Below,
        threshold: 80.0,
        severe_threshold: 60.0,
        span: 30.0,
        companion: Some(Companion {
            metric: keys::ELBOW_ANGLE_AT_RELEASE,
            direction: Direction::Below,
            threshold: 150.0,
        }),
        body_parts: &["elbow", "wrist", "shoulder"],
        ideal_range: "Full extension with a held finish",
        correction: "Set the ball above the shooting eye, then extend up through it.",
        video: Some(FORM_SHOOTING),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_balance_drift",
        title: "Drifting on the shot",
        description: "The body lands well away from where it took off.",
        category: FlawCategory::Balance,
        metric: keys::BODY_BALANCE,
        direction: Direction::Below,
        threshold: 70.0,
        severe_threshold: 50.0,
        span: 30.0,
        injury: Some(InjuryGate {
            threshold: 50.0,
            details: "Landing far from the takeoff spot loads one ankle and knee asymmetrically.",
        }),
        body_parts: &["ankles", "knees", "core"],
        ideal_range: "80-100",
        correction: "Jump straight up and land on the same spot, shoulders square to the rim.",
        drill: Some("Shoot off a taped square and land inside it"),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bb_shoulder_tilt",
        title: "Tilted shoulders",
        description: "The shoulder line is tilted at release, pulling the shot sideways.",
        category: FlawCategory::Alignment,
        metric: keys::SHOULDER_TILT,
        direction: Direction::Above,
        threshold: 12.0,
        severe_threshold: 20.0,
        span: 15.0,
        base_severity: Severity::Low,
        injury: Some(InjuryGate {
            threshold: 25.0,
            details: "A strongly tilted shoulder line at release strains the shooting shoulder.",
        }),
        body_parts: &["shoulders", "core"],
        ideal_range: "0-8°",
        correction: "Keep the shoulders level and square to the basket through release.",
        ..RULE_DEFAULTS
    },
];

const FREE_THROW: &[FlawRule] = &[
    FlawRule {
        id: "ft_low_elbow_extension",
        title: "Incomplete elbow extension",
        description: "The shooting arm is still bent at release.",
        metric: keys::ELBOW_ANGLE_AT_RELEASE,
        direction: Direction::Below,
        threshold: 148.0,
        severe_threshold: 138.0,
        span: 20.0,
        body_parts: &["elbow", "shoulder"],
        ideal_range: "150-170°",
        correction: "Extend fully and finish with the arm reaching into the basket.",
        drill: Some("Ten made free throws holding the finish each time"),
        video: Some(FORM_SHOOTING),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "ft_stiff_legs",
        title: "No leg drive",
        description: "The legs stay nearly straight, so the arms supply all the distance.",
        category: FlawCategory::Power,
        metric: keys::KNEE_BEND,
        direction: Direction::Above,
        threshold: 160.0,
        severe_threshold: 170.0,
        span: 15.0,
        body_parts: &["knees", "hips"],
        ideal_range: "120-150°",
        correction: "Add a small, rhythmic knee bend and rise with the ball.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "ft_flat_release",
        title: "Flat release angle",
        description: "The free throw travels on a low arc.",
        metric: keys::RELEASE_ANGLE,
        direction: Direction::Below,
        threshold: 44.0,
        severe_threshold: 36.0,
        span: 12.0,
        body_parts: &["wrist", "elbow"],
        ideal_range: "48-58°",
        correction: "Aim higher: the ball should peak well above the backboard square.",
        video: Some(SHOT_ARC),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "ft_low_release_point",
        title: "Low release point",
        description: "The ball is released from below the forehead.",
        metric: keys::RELEASE_HEIGHT,
        direction: Direction::Below,
        threshold: 0.25,
        severe_threshold: 0.1,
        span: 0.25,
        body_parts: &["shoulder", "elbow"],
        ideal_range: "0.4-0.8 torso lengths above the head",
        correction: "Bring the set point up to the forehead before extending.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "ft_short_follow_through",
        title: "Short follow-through",
        description: "The arm drops before the ball reaches the rim.",
        metric: keys::FOLLOW_THROUGH,
        direction: Direction::Below,
        threshold: 75.0,
        severe_threshold: 55.0,
        span: 30.0,
        body_parts: &["wrist", "elbow"],
        ideal_range: "85-100% arm extension",
        correction: "Hold the finish until the ball goes through the net.",
        video: Some(FORM_SHOOTING),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "ft_push_shot",
        title: "Push shot",
        description: "A bent elbow combined with a dropped finish.",
        metric: keys::FOLLOW_THROUGH,
        direction: Direction::Below,
        threshold: 85.0,
        severe_threshold: 65.0,
        span: 30.0,
        companion: Some(Companion {
            metric: keys::ELBOW_ANGLE_AT_RELEASE,
            direction: Direction::Below,
            threshold: 152.0,
        }),
        body_parts: &["elbow", "wrist", "shoulder"],
        ideal_range: "Full extension with a held finish",
        correction: "Start the ball above the shooting eye and extend up through it.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "ft_balance_drift",
        title: "Falling off the line",
        description: "The body drifts during the shot.",
        category: FlawCategory::Balance,
        metric: keys::BODY_BALANCE,
        direction: Direction::Below,
        threshold: 75.0,
        severe_threshold: 55.0,
        span: 30.0,
        injury: Some(InjuryGate {
            threshold: 50.0,
            details: "Repeatedly finishing off balance loads one ankle and knee asymmetrically.",
        }),
        body_parts: &["ankles", "knees", "core"],
        ideal_range: "85-100",
        correction: "Finish balanced with both feet behind the line until the ball lands.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "ft_shoulder_tilt",
        title: "Tilted shoulders",
        description: "The shoulder line is tilted at release.",
        category: FlawCategory::Alignment,
        metric: keys::SHOULDER_TILT,
        direction: Direction::Above,
        threshold: 10.0,
        severe_threshold: 18.0,
        span: 12.0,
        base_severity: Severity::Low,
        injury: Some(InjuryGate {
            threshold: 25.0,
            details: "A strongly tilted shoulder line at release strains the shooting shoulder.",
        }),
        body_parts: &["shoulders", "core"],
        ideal_range: "0-5°",
        correction: "Square the shoulders to the basket and keep them level.",
        ..RULE_DEFAULTS
    },
];

pub(super) fn rules(action: Action) -> &'static [FlawRule] {
    match action {
        Action::JumpShot => JUMP_SHOT,
        Action::FreeThrow => FREE_THROW,
        _ => &[],
    }
}
