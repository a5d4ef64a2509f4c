// Badminton flaw rule tables
//
// Smash, clear and serve share rule shapes; each action keeps its own
// thresholds.

use super::{
    Companion, Direction, FlawCategory, FlawRule, InjuryGate, Severity, VideoRef, RULE_DEFAULTS,
};
use crate::benchmarks::Action;
use crate::metrics::keys;

const OVERHEAD_STROKE: VideoRef = VideoRef {
    url: "https://www.youtube.com/results?search_query=badminton+overhead+stroke+technique",
    title: "Overhead stroke technique",
};

const SHADOW_FOOTWORK: VideoRef = VideoRef {
    url: "https://www.youtube.com/results?search_query=badminton+shadow+footwork+drill",
    title: "Shadow footwork drill",
};

const SHORT_SERVE: VideoRef = VideoRef {
    url: "https://www.youtube.com/results?search_query=badminton+backhand+short+serve",
    title: "Short serve technique",
};

const ROTATION_INJURY: &str =
    "Hitting with little trunk rotation makes the shoulder generate the power alone, a common source of rotator cuff overload.";

const STIFF_LEG_INJURY: &str =
    "Landing and lunging on straight legs transfers impact to the knees and lower back.";

const NARROW_STANCE_INJURY: &str =
    "A very narrow base makes recovery steps unstable and raises ankle sprain risk.";

const SMASH: &[FlawRule] = &[
    FlawRule {
        id: "bd_smash_low_elbow",
        title: "Bent arm at contact",
        description: "The racket arm is not extended at contact, so the shuttle is hit low and without leverage.",
        metric: keys::ELBOW_AT_CONTACT,
        direction: Direction::Below,
        threshold: 140.0,
        severe_threshold: 115.0,
        span: 25.0,
        body_parts: &["elbow", "shoulder"],
        ideal_range: "160-180°",
        correction: "Reach up and hit at full extension, slightly in front of the body.",
        drill: Some("Shadow smashes reaching for a shuttle hung at full stretch"),
        video: Some(OVERHEAD_STROKE),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_smash_low_contact",
        title: "Low contact point",
        description: "The shuttle is struck close to shoulder height, flattening the angle of the smash.",
        metric: keys::CONTACT_HEIGHT,
        direction: Direction::Below,
        threshold: 0.6,
        severe_threshold: 0.35,
        span: 0.4,
        body_parts: &["shoulder", "elbow"],
        ideal_range: "0.9-1.4 torso lengths above the shoulder",
        correction: "Get behind the shuttle earlier and take it at the highest point you can reach.",
        video: Some(OVERHEAD_STROKE),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_smash_limited_rotation",
        title: "Limited trunk rotation",
        description: "The shoulders barely turn through the stroke.",
        category: FlawCategory::Alignment,
        metric: keys::TRUNK_ROTATION,
        direction: Direction::Below,
        threshold: 20.0,
        severe_threshold: 10.0,
        span: 15.0,
        injury: Some(InjuryGate {
            threshold: 12.0,
            details: ROTATION_INJURY,
        }),
        body_parts: &["trunk", "shoulder"],
        ideal_range: "30-60°",
        correction: "Turn side-on in preparation and uncoil the shoulders into the hit.",
        drill: Some("Side-on shadow swings with a pause at full turn"),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_smash_slow_wrist",
        title: "Slow racket arm",
        description: "Peak wrist speed is low for a smash.",
        category: FlawCategory::Power,
        metric: keys::WRIST_SPEED,
        direction: Direction::Below,
        threshold: 2.0,
        severe_threshold: 1.2,
        span: 1.5,
        body_parts: &["wrist", "forearm"],
        ideal_range: "3-6 units/s",
        correction: "Relax the grip until just before contact, then squeeze and pronate through the shuttle.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_smash_arm_only",
        title: "Arm-only smash",
        description: "A slow racket arm combined with little trunk turn: the body is not driving the stroke.",
        category: FlawCategory::Power,
        metric: keys::WRIST_SPEED,
        direction: Direction::Below,
        threshold: 2.5,
        severe_threshold: 1.5,
        span: 1.5,
        companion: Some(Companion {
            metric: keys::TRUNK_ROTATION,
            direction: Direction::Below,
            threshold: 25.0,
        }),
        body_parts: &["trunk", "shoulder", "wrist"],
        ideal_range: "Rotation above 30° with wrist speed above 3 units/s",
        correction: "Start the swing from the hips and trunk and let the arm follow.",
        video: Some(OVERHEAD_STROKE),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_smash_short_follow_through",
        title: "Cut-off follow-through",
        description: "The racket arm stops early after contact.",
        metric: keys::FOLLOW_THROUGH,
        direction: Direction::Below,
        threshold: 55.0,
        severe_threshold: 35.0,
        span: 30.0,
        base_severity: Severity::Low,
        body_parts: &["wrist", "elbow", "shoulder"],
        ideal_range: "70-100% arm extension",
        correction: "Let the racket continue down and across the body after the hit.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_smash_stiff_legs",
        title: "Stiff legs",
        description: "The knees stay nearly straight through the stroke.",
        category: FlawCategory::Stability,
        metric: keys::KNEE_BEND,
        direction: Direction::Above,
        threshold: 155.0,
        severe_threshold: 168.0,
        span: 20.0,
        injury: Some(InjuryGate {
            threshold: 165.0,
            details: STIFF_LEG_INJURY,
        }),
        body_parts: &["knees", "hips"],
        ideal_range: "110-140°",
        correction: "Load the legs before the jump and land with soft knees.",
        video: Some(SHADOW_FOOTWORK),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_smash_narrow_stance",
        title: "Narrow base",
        description: "The feet are too close together at preparation.",
        category: FlawCategory::Balance,
        metric: keys::STANCE_WIDTH_RATIO,
        direction: Direction::Below,
        threshold: 0.8,
        severe_threshold: 0.6,
        span: 0.3,
        base_severity: Severity::Low,
        injury: Some(InjuryGate {
            threshold: 0.6,
            details: NARROW_STANCE_INJURY,
        }),
        body_parts: &["ankles", "hips"],
        ideal_range: "1.0-1.6× shoulder width",
        correction: "Set the feet at least shoulder width apart with the racket-side foot back.",
        video: Some(SHADOW_FOOTWORK),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_smash_no_jump",
        title: "Flat-footed smash",
        description: "The smash is hit with almost no jump.",
        category: FlawCategory::Power,
        metric: keys::JUMP_HEIGHT,
        direction: Direction::Below,
        threshold: 4.0,
        severe_threshold: 1.0,
        span: 6.0,
        base_severity: Severity::Low,
        body_parts: &["legs"],
        ideal_range: "8-25% of body height",
        correction: "Add a scissor jump to take the shuttle higher and steeper.",
        ..RULE_DEFAULTS
    },
];

const CLEAR: &[FlawRule] = &[
    FlawRule {
        id: "bd_clear_low_elbow",
        title: "Bent arm at contact",
        description: "The racket arm is not extended at contact, so the clear lacks depth.",
        metric: keys::ELBOW_AT_CONTACT,
        direction: Direction::Below,
        threshold: 135.0,
        severe_threshold: 110.0,
        span: 25.0,
        body_parts: &["elbow", "shoulder"],
        ideal_range: "155-180°",
        correction: "Hit at full reach above the racket shoulder.",
        video: Some(OVERHEAD_STROKE),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_clear_low_contact",
        title: "Low contact point",
        description: "The shuttle is taken too low to send it to the back line.",
        metric: keys::CONTACT_HEIGHT,
        direction: Direction::Below,
        threshold: 0.5,
        severe_threshold: 0.3,
        span: 0.4,
        body_parts: &["shoulder", "elbow"],
        ideal_range: "0.8-1.3 torso lengths above the shoulder",
        correction: "Move under the shuttle sooner and contact it above the head.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_clear_limited_rotation",
        title: "Limited trunk rotation",
        description: "The shoulders barely turn, leaving the arm to generate the distance.",
        category: FlawCategory::Alignment,
        metric: keys::TRUNK_ROTATION,
        direction: Direction::Below,
        threshold: 15.0,
        severe_threshold: 8.0,
        span: 15.0,
        injury: Some(InjuryGate {
            threshold: 10.0,
            details: ROTATION_INJURY,
        }),
        body_parts: &["trunk", "shoulder"],
        ideal_range: "25-55°",
        correction: "Turn side-on before the hit and rotate the chest to the net through contact.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_clear_slow_wrist",
        title: "Slow racket arm",
        description: "Peak wrist speed is too low for a full-length clear.",
        category: FlawCategory::Power,
        metric: keys::WRIST_SPEED,
        direction: Direction::Below,
        threshold: 1.5,
        severe_threshold: 0.8,
        span: 1.0,
        body_parts: &["wrist", "forearm"],
        ideal_range: "2-4.5 units/s",
        correction: "Accelerate through contact instead of pushing the shuttle.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_clear_short_follow_through",
        title: "Cut-off follow-through",
        description: "The swing stops at contact.",
        metric: keys::FOLLOW_THROUGH,
        direction: Direction::Below,
        threshold: 55.0,
        severe_threshold: 35.0,
        span: 30.0,
        base_severity: Severity::Low,
        body_parts: &["wrist", "elbow", "shoulder"],
        ideal_range: "70-100% arm extension",
        correction: "Finish the swing across the body.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_clear_stiff_legs",
        title: "Stiff legs",
        description: "The knees stay nearly straight through the stroke.",
        category: FlawCategory::Stability,
        metric: keys::KNEE_BEND,
        direction: Direction::Above,
        threshold: 160.0,
        severe_threshold: 170.0,
        span: 15.0,
        injury: Some(InjuryGate {
            threshold: 168.0,
            details: STIFF_LEG_INJURY,
        }),
        body_parts: &["knees", "hips"],
        ideal_range: "120-150°",
        correction: "Keep a slight knee bend and push from the back leg into the stroke.",
        video: Some(SHADOW_FOOTWORK),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_clear_narrow_stance",
        title: "Narrow base",
        description: "The feet are too close together at preparation.",
        category: FlawCategory::Balance,
        metric: keys::STANCE_WIDTH_RATIO,
        direction: Direction::Below,
        threshold: 0.8,
        severe_threshold: 0.6,
        span: 0.3,
        base_severity: Severity::Low,
        injury: Some(InjuryGate {
            threshold: 0.6,
            details: NARROW_STANCE_INJURY,
        }),
        body_parts: &["ankles", "hips"],
        ideal_range: "1.0-1.5× shoulder width",
        correction: "Widen the base with the racket-side foot back before the hit.",
        video: Some(SHADOW_FOOTWORK),
        ..RULE_DEFAULTS
    },
];

const SERVE: &[FlawRule] = &[
    FlawRule {
        id: "bd_serve_locked_elbow",
        title: "Locked arm",
        description: "The racket arm is nearly straight, which turns the serve into a swing and costs control.",
        metric: keys::ELBOW_AT_CONTACT,
        direction: Direction::Above,
        threshold: 160.0,
        severe_threshold: 172.0,
        span: 15.0,
        base_severity: Severity::Low,
        body_parts: &["elbow"],
        ideal_range: "100-140°",
        correction: "Keep a relaxed bend in the elbow and guide the shuttle with a short push.",
        video: Some(SHORT_SERVE),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_serve_cramped_elbow",
        title: "Cramped arm",
        description: "The racket arm is tucked in too tightly.",
        metric: keys::ELBOW_AT_CONTACT,
        direction: Direction::Below,
        threshold: 80.0,
        severe_threshold: 65.0,
        span: 20.0,
        body_parts: &["elbow", "shoulder"],
        ideal_range: "100-140°",
        correction: "Hold the racket further from the body so the push has room.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_serve_high_contact",
        title: "Contact too high",
        description: "The shuttle is struck close to shoulder height, which is illegal in most formats.",
        metric: keys::CONTACT_HEIGHT,
        direction: Direction::Above,
        threshold: -0.4,
        severe_threshold: -0.2,
        span: 0.3,
        base_severity: Severity::High,
        body_parts: &["wrist", "shoulder"],
        ideal_range: "0.7-1.2 torso lengths below the shoulder",
        correction: "Drop the contact point to waist height or below.",
        video: Some(SHORT_SERVE),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_serve_excess_rotation",
        title: "Excess trunk rotation",
        description: "The body turns during the serve, making the shuttle path inconsistent.",
        category: FlawCategory::Alignment,
        metric: keys::TRUNK_ROTATION,
        direction: Direction::Above,
        threshold: 35.0,
        severe_threshold: 50.0,
        span: 20.0,
        base_severity: Severity::Low,
        body_parts: &["trunk"],
        ideal_range: "0-20°",
        correction: "Keep the chest facing the net and move only the forearm.",
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_serve_fast_wrist",
        title: "Flicked serve",
        description: "The racket wrist moves too fast for a controlled short serve.",
        metric: keys::WRIST_SPEED,
        direction: Direction::Above,
        threshold: 3.0,
        severe_threshold: 4.5,
        span: 2.0,
        base_severity: Severity::Low,
        body_parts: &["wrist"],
        ideal_range: "0.5-2 units/s",
        correction: "Push the shuttle with the thumb rather than flicking the wrist.",
        video: Some(SHORT_SERVE),
        ..RULE_DEFAULTS
    },
    FlawRule {
        id: "bd_serve_narrow_stance",
        title: "Narrow base",
        description: "The feet are too close together to hold a stable serving stance.",
        category: FlawCategory::Balance,
        metric: keys::STANCE_WIDTH_RATIO,
        direction: Direction::Below,
        threshold: 0.7,
        severe_threshold: 0.5,
        span: 0.3,
        base_severity: Severity::Low,
        injury: Some(InjuryGate {
            threshold: 0.5,
            details: NARROW_STANCE_INJURY,
        }),
        body_parts: &["ankles", "hips"],
        ideal_range: "1.0-1.6× shoulder width",
        correction: "Stand with the feet about shoulder width apart, front foot pointing at the net.",
        ..RULE_DEFAULTS
    },
];

pub(super) fn rules(action: Action) -> &'static [FlawRule] {
    match action {
        Action::Smash => SMASH,
        Action::Clear => CLEAR,
        Action::Serve => SERVE,
        _ => &[],
    }
}
