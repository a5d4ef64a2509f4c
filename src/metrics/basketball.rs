// Basketball shot metrics (jump shot, free throw)

use super::common::{
    body_balance, elbow_angle, follow_through, forearm_elevation, height_above,
    jump_height_percent, knee_bend, shoulder_tilt,
};
use super::{keys, record, MetricContext, MetricsMap};
use crate::benchmarks::Action;
use crate::pose::landmarks::NOSE;

pub(super) fn extract(ctx: &MetricContext<'_>, action: Action) -> MetricsMap {
    let mut metrics = MetricsMap::new();
    let side = ctx.side;
    let release = ctx.frame_at(ctx.keyframes.release);

    record(
        &mut metrics,
        keys::ELBOW_ANGLE_AT_RELEASE,
        release.and_then(|f| elbow_angle(ctx, f, side)),
    );

    let loading = match (ctx.keyframes.start, ctx.keyframes.release) {
        (Some(start), Some(release)) if release >= start => knee_bend(ctx, start, release),
        _ => None,
    };
    record(&mut metrics, keys::KNEE_BEND, loading);

    record(
        &mut metrics,
        keys::RELEASE_ANGLE,
        release.and_then(|f| forearm_elevation(ctx, f, side)),
    );
    record(
        &mut metrics,
        keys::RELEASE_HEIGHT,
        release.and_then(|f| height_above(ctx, f, side.wrist(), NOSE)),
    );

    if action.involves_jump() {
        record(&mut metrics, keys::JUMP_HEIGHT, jump_height_percent(ctx));
    }

    record(&mut metrics, keys::FOLLOW_THROUGH, follow_through(ctx, side));
    record(&mut metrics, keys::BODY_BALANCE, body_balance(ctx));
    record(
        &mut metrics,
        keys::SHOULDER_TILT,
        release.and_then(|f| shoulder_tilt(ctx, f)),
    );

    metrics
}
