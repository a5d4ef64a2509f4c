// Badminton stroke metrics (smash, clear, serve)
//
// The release keyframe is the shuttle contact frame.

use super::common::{
    elbow_angle, follow_through, height_above, jump_height_percent, knee_bend,
    peak_wrist_speed, stance_width_ratio, trunk_rotation,
};
use super::{keys, record, MetricContext, MetricsMap};
use crate::benchmarks::Action;

pub(super) fn extract(ctx: &MetricContext<'_>, action: Action) -> MetricsMap {
    let mut metrics = MetricsMap::new();
    let side = ctx.side;
    let contact = ctx.frame_at(ctx.keyframes.release);
    let swing = match (ctx.keyframes.start, ctx.keyframes.release) {
        (Some(start), Some(contact)) if contact >= start => Some((start, contact)),
        _ => None,
    };

    record(
        &mut metrics,
        keys::ELBOW_AT_CONTACT,
        contact.and_then(|f| elbow_angle(ctx, f, side)),
    );
    record(
        &mut metrics,
        keys::CONTACT_HEIGHT,
        contact.and_then(|f| height_above(ctx, f, side.wrist(), side.shoulder())),
    );
    record(
        &mut metrics,
        keys::TRUNK_ROTATION,
        swing.and_then(|(start, contact)| trunk_rotation(ctx, start, contact)),
    );
    record(
        &mut metrics,
        keys::WRIST_SPEED,
        swing.and_then(|(start, contact)| peak_wrist_speed(ctx, side, start, contact)),
    );
    record(&mut metrics, keys::FOLLOW_THROUGH, follow_through(ctx, side));
    record(
        &mut metrics,
        keys::KNEE_BEND,
        swing.and_then(|(start, contact)| knee_bend(ctx, start, contact)),
    );
    record(
        &mut metrics,
        keys::STANCE_WIDTH_RATIO,
        ctx.frame_at(ctx.keyframes.start).and_then(|frame| stance_width_ratio(ctx, frame)),
    );

    if action.involves_jump() {
        record(&mut metrics, keys::JUMP_HEIGHT, jump_height_percent(ctx));
    }

    metrics
}
