use crate::scenario::{MovePayload, PivotCorner, Vec2};

use super::anchor::{resolve_anchor, resolve_pivot};
use super::path::{interpolate_move, resolve_move_target};

/// Samples the path a MOVE action will take from `start`, for the overlay
/// renderer. The polyline is sampled uniformly in progress through the same
/// interpolation code playback uses, so the drawn trace can never diverge
/// from simulated motion.
pub fn preview_move_path(start: Vec2, payload: &MovePayload, samples: usize) -> Vec<Vec2> {
    let target = resolve_move_target(start, payload);
    let steps = samples.max(1);
    (0..=steps)
        .map(|step| interpolate_move(start, target, payload, step as f32 / steps as f32))
        .collect()
}

/// The anchor's path for a group MOVE, starting from the anchor resolved
/// over the members' current positions.
pub fn preview_group_move_path(
    member_positions: &[Vec2],
    payload: &MovePayload,
    samples: usize,
) -> Vec<Vec2> {
    let anchor = resolve_anchor(member_positions, payload.group_anchor);
    preview_move_path(anchor, payload, samples)
}

/// The pivot point a WHEEL over these members will rotate about.
pub fn wheel_pivot(member_positions: &[Vec2], corner: PivotCorner) -> Vec2 {
    resolve_pivot(member_positions, corner)
}
