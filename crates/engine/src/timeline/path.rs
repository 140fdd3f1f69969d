use crate::scenario::{MovePathMode, MovePayload, OrthogonalOrder, Vec2};

/// Below this total distance a path is treated as already arrived.
const DEGENERATE_DISTANCE: f32 = 1e-6;

pub(crate) fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

pub(crate) fn finite_target(value: Option<f32>, fallback: f32) -> f32 {
    match value {
        Some(value) if value.is_finite() => value,
        _ => fallback,
    }
}

/// Linear interpolation, guarded so a corrupt endpoint or a `t` slightly
/// outside [0, 1] from floating error never produces a non-finite result.
/// `t = 1` returns `b` exactly.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let a = finite_or(a, 0.0);
    let b = finite_or(b, a);
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// Both axes advance simultaneously along the straight segment.
pub fn interpolate_direct(start: Vec2, target: Vec2, progress: f32) -> Vec2 {
    Vec2::new(
        lerp(start.x, target.x, progress),
        lerp(start.y, target.y, progress),
    )
}

/// L-shaped right-angle path: one axis runs to completion before the other
/// starts, with the progress split proportional to the per-axis distances.
/// Troops turn corners, they do not cut diagonals.
pub fn interpolate_orthogonal(
    start: Vec2,
    target: Vec2,
    progress: f32,
    order: OrthogonalOrder,
) -> Vec2 {
    let dx = (target.x - start.x).abs();
    let dy = (target.y - start.y).abs();
    let total = dx + dy;
    if !(total > DEGENERATE_DISTANCE) {
        return target;
    }

    match order {
        OrthogonalOrder::XThenY => {
            let frac_x = dx / total;
            if progress < frac_x {
                Vec2::new(lerp(start.x, target.x, progress / frac_x), start.y)
            } else {
                let rest = leg_progress(progress - frac_x, 1.0 - frac_x);
                Vec2::new(target.x, lerp(start.y, target.y, rest))
            }
        }
        OrthogonalOrder::YThenX => {
            let frac_y = dy / total;
            if progress < frac_y {
                Vec2::new(start.x, lerp(start.y, target.y, progress / frac_y))
            } else {
                let rest = leg_progress(progress - frac_y, 1.0 - frac_y);
                Vec2::new(lerp(start.x, target.x, rest), target.y)
            }
        }
    }
}

/// Two-segment route through an explicit intermediate point, with the
/// progress split proportional to the segment lengths.
pub fn interpolate_via_waypoint(start: Vec2, waypoint: Vec2, target: Vec2, progress: f32) -> Vec2 {
    let d1 = start.distance(waypoint);
    let d2 = waypoint.distance(target);
    let total = d1 + d2;
    if !(total > DEGENERATE_DISTANCE) {
        return target;
    }

    let split = d1 / total;
    if progress <= split {
        interpolate_direct(start, waypoint, leg_progress(progress, split))
    } else {
        interpolate_direct(waypoint, target, leg_progress(progress - split, 1.0 - split))
    }
}

fn leg_progress(elapsed: f32, span: f32) -> f32 {
    if span > 0.0 {
        elapsed / span
    } else {
        1.0
    }
}

/// Target axes missing from the payload (or non-finite) default to the
/// start position, so the move is a no-op on that axis.
pub fn resolve_move_target(start: Vec2, payload: &MovePayload) -> Vec2 {
    Vec2::new(
        finite_target(payload.target_x, start.x),
        finite_target(payload.target_y, start.y),
    )
}

/// Single path-selection point shared by the entity and group evaluators and
/// by the path-overlay preview: waypoint overrides mode, otherwise DIRECT or
/// ORTHOGONAL per the payload.
pub fn interpolate_move(start: Vec2, target: Vec2, payload: &MovePayload, progress: f32) -> Vec2 {
    if let Some(waypoint) = payload.waypoint {
        let waypoint = Vec2::new(
            finite_or(waypoint.x, start.x),
            finite_or(waypoint.y, start.y),
        );
        return interpolate_via_waypoint(start, waypoint, target, progress);
    }
    match payload.move_path_mode {
        MovePathMode::Direct => interpolate_direct(start, target, progress),
        MovePathMode::Orthogonal => {
            interpolate_orthogonal(start, target, progress, payload.orthogonal_order)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::OrthogonalOrder;

    #[test]
    fn lerp_hits_endpoints_exactly() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn lerp_clamps_t_outside_unit_interval() {
        assert_eq!(lerp(2.0, 4.0, -0.25), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.25), 4.0);
    }

    #[test]
    fn lerp_substitutes_non_finite_endpoints() {
        assert_eq!(lerp(f32::NAN, 10.0, 0.5), 5.0);
        assert_eq!(lerp(3.0, f32::INFINITY, 0.5), 3.0);
        assert_eq!(lerp(f32::NAN, f32::NAN, 0.5), 0.0);
    }

    #[test]
    fn direct_advances_both_axes_together() {
        let at = interpolate_direct(Vec2::new(0.0, 0.0), Vec2::new(10.0, 6.0), 0.5);
        assert_eq!(at, Vec2::new(5.0, 3.0));
    }

    #[test]
    fn orthogonal_x_then_y_turns_the_corner() {
        let start = Vec2::ZERO;
        let target = Vec2::new(10.0, 6.0);
        // fracX = 10 / 16 = 0.625: at that exact progress x has arrived and
        // y has not started.
        let corner = interpolate_orthogonal(start, target, 0.625, OrthogonalOrder::XThenY);
        assert_eq!(corner, Vec2::new(10.0, 0.0));

        let before = interpolate_orthogonal(start, target, 0.3125, OrthogonalOrder::XThenY);
        assert_eq!(before, Vec2::new(5.0, 0.0));

        let after = interpolate_orthogonal(start, target, 1.0, OrthogonalOrder::XThenY);
        assert_eq!(after, target);
    }

    #[test]
    fn orthogonal_y_then_x_is_the_mirror() {
        let start = Vec2::ZERO;
        let target = Vec2::new(10.0, 6.0);
        // fracY = 6 / 16 = 0.375.
        let corner = interpolate_orthogonal(start, target, 0.375, OrthogonalOrder::YThenX);
        assert_eq!(corner, Vec2::new(0.0, 6.0));
    }

    #[test]
    fn orthogonal_single_axis_degenerates_to_one_leg() {
        let start = Vec2::ZERO;
        let target = Vec2::new(8.0, 0.0);
        let mid = interpolate_orthogonal(start, target, 0.5, OrthogonalOrder::XThenY);
        assert_eq!(mid, Vec2::new(4.0, 0.0));
        let end = interpolate_orthogonal(start, target, 1.0, OrthogonalOrder::XThenY);
        assert_eq!(end, target);
    }

    #[test]
    fn orthogonal_zero_distance_snaps_to_target() {
        let point = Vec2::new(3.0, 3.0);
        let at = interpolate_orthogonal(point, point, 0.25, OrthogonalOrder::XThenY);
        assert_eq!(at, point);
    }

    #[test]
    fn waypoint_split_is_proportional_to_segment_lengths() {
        let start = Vec2::ZERO;
        let waypoint = Vec2::new(0.0, 10.0);
        let target = Vec2::new(10.0, 10.0);
        // d1 = d2 = 10, split = 0.5: half progress lands exactly on the
        // waypoint.
        assert_eq!(
            interpolate_via_waypoint(start, waypoint, target, 0.5),
            waypoint
        );
        assert_eq!(
            interpolate_via_waypoint(start, waypoint, target, 0.75),
            Vec2::new(5.0, 10.0)
        );
        assert_eq!(
            interpolate_via_waypoint(start, waypoint, target, 1.0),
            target
        );
    }

    #[test]
    fn waypoint_degenerate_route_snaps_to_target() {
        let point = Vec2::new(1.0, 1.0);
        assert_eq!(interpolate_via_waypoint(point, point, point, 0.1), point);
    }

    #[test]
    fn move_target_defaults_missing_axes_to_start() {
        let start = Vec2::new(3.0, 3.0);
        let payload = MovePayload {
            target_x: Some(f32::NAN),
            target_y: Some(5.0),
            ..MovePayload::default()
        };
        assert_eq!(resolve_move_target(start, &payload), Vec2::new(3.0, 5.0));

        let empty = MovePayload::default();
        assert_eq!(resolve_move_target(start, &empty), start);
    }

    #[test]
    fn waypoint_overrides_path_mode() {
        let payload = MovePayload {
            target_x: Some(10.0),
            target_y: Some(10.0),
            move_path_mode: MovePathMode::Direct,
            waypoint: Some(Vec2::new(0.0, 10.0)),
            ..MovePayload::default()
        };
        let target = resolve_move_target(Vec2::ZERO, &payload);
        let at = interpolate_move(Vec2::ZERO, target, &payload, 0.5);
        assert_eq!(at, Vec2::new(0.0, 10.0));
    }
}
