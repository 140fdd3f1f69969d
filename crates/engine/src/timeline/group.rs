use crate::scenario::{ActionKind, AnimationAction, Entity, MovePayload, WheelPayload};

use super::anchor::{resolve_anchor, resolve_pivot};
use super::entity::Pose;
use super::path::{finite_or, finite_target, interpolate_move, resolve_move_target};
use super::schedule::{action_progress, sorted_by_start};

/// Replays one owner's action sequence against a rigid formation.
///
/// Every member keeps its own pose, seeded from its own base position; a
/// group has no origin of its own. Rigidity comes from applying identical
/// deltas and rotations to every member, which preserves pairwise distances
/// exactly. Progress and continuity rules match the entity evaluator.
pub fn evaluate_group_track(members: &mut [Entity], actions: &[AnimationAction], t: f32) {
    let mut poses: Vec<Pose> = members.iter().map(Pose::of).collect();

    for action in sorted_by_start(actions) {
        if action.start_time > t {
            break;
        }
        let progress = action_progress(action, t);
        apply_group_action(&mut poses, action, progress);
        if progress < 1.0 {
            break;
        }
    }

    for (member, pose) in members.iter_mut().zip(poses) {
        pose.write_to(member);
    }
}

fn apply_group_action(poses: &mut [Pose], action: &AnimationAction, progress: f32) {
    match &action.kind {
        ActionKind::Move(payload) => apply_group_move(poses, payload, progress),
        ActionKind::Turn(payload) => {
            // The first member is the reference heading so that repeated
            // evaluation of the same snapshot stays deterministic.
            let reference = poses.first().map(|pose| pose.rotation).unwrap_or(0.0);
            let target = finite_target(payload.target_rotation, reference);
            let delta = (target - reference) * progress;
            for pose in poses {
                pose.rotation += delta;
            }
        }
        ActionKind::Wheel(payload) => apply_group_wheel(poses, payload, progress),
    }
}

/// Rigid translation: the chosen anchor of the formation's bounding box is
/// interpolated along the move path, and the anchor's displacement is added
/// uniformly to every member.
fn apply_group_move(poses: &mut [Pose], payload: &MovePayload, progress: f32) {
    let points: Vec<_> = poses.iter().map(|pose| pose.position).collect();
    let anchor_start = resolve_anchor(&points, payload.group_anchor);
    let target = resolve_move_target(anchor_start, payload);
    let anchor_now = interpolate_move(anchor_start, target, payload, progress);

    let dx = finite_or(anchor_now.x - anchor_start.x, 0.0);
    let dy = finite_or(anchor_now.y - anchor_start.y, 0.0);
    for pose in poses {
        pose.position.x += dx;
        pose.position.y += dy;
    }
}

/// The formation drill wheel: the whole block pivots rigidly about one
/// corner of its bounding box (or the center), and every member's heading
/// follows the swept angle.
fn apply_group_wheel(poses: &mut [Pose], payload: &WheelPayload, progress: f32) {
    let points: Vec<_> = poses.iter().map(|pose| pose.position).collect();
    let pivot = resolve_pivot(&points, payload.pivot_corner);
    let degrees = finite_or(payload.wheel_angle, 0.0) * progress;
    let (sin, cos) = degrees.to_radians().sin_cos();

    for pose in poses {
        let dx = pose.position.x - pivot.x;
        let dy = pose.position.y - pivot.y;
        pose.position.x = pivot.x + dx * cos - dy * sin;
        pose.position.y = pivot.y + dx * sin + dy * cos;
        pose.rotation += degrees;
    }
}
