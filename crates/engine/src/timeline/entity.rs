use crate::scenario::{ActionKind, AnimationAction, Entity, Vec2};

use super::path::{finite_or, finite_target, interpolate_move, lerp, resolve_move_target};
use super::schedule::{action_progress, sorted_by_start};

/// Position and heading of one entity at a query time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub rotation: f32,
}

impl Pose {
    pub(crate) fn of(entity: &Entity) -> Self {
        Self {
            position: Vec2::new(finite_or(entity.x, 0.0), finite_or(entity.y, 0.0)),
            rotation: finite_or(entity.rotation, 0.0),
        }
    }

    pub(crate) fn write_to(self, entity: &mut Entity) {
        entity.x = self.position.x;
        entity.y = self.position.y;
        entity.rotation = self.rotation;
    }

    // Last-resort guard: any non-finite component falls back to the value
    // it had before the offending action.
    fn sanitized_against(self, previous: Pose) -> Pose {
        Pose {
            position: Vec2::new(
                finite_or(self.position.x, previous.position.x),
                finite_or(self.position.y, previous.position.y),
            ),
            rotation: finite_or(self.rotation, previous.rotation),
        }
    }
}

/// Replays one owner's action sequence against a single entity's base state.
///
/// Fold over the start-time-sorted actions: every fully-completed action's
/// end state is the start state of the next (continuity invariant), and the
/// first action still in progress at `t` terminates the walk after being
/// applied partially. Actions starting after `t` are never applied.
pub fn evaluate_entity_track(base: &Entity, actions: &[AnimationAction], t: f32) -> Pose {
    let mut pose = Pose::of(base);
    for action in sorted_by_start(actions) {
        if action.start_time > t {
            break;
        }
        let progress = action_progress(action, t);
        pose = apply_entity_action(pose, action, progress).sanitized_against(pose);
        if progress < 1.0 {
            break;
        }
    }
    pose
}

/// Pure per-action step. `pose` is the running state at the action's start,
/// never the entity's original base.
fn apply_entity_action(pose: Pose, action: &AnimationAction, progress: f32) -> Pose {
    match &action.kind {
        ActionKind::Move(payload) => {
            let target = resolve_move_target(pose.position, payload);
            Pose {
                position: interpolate_move(pose.position, target, payload, progress),
                rotation: pose.rotation,
            }
        }
        ActionKind::Turn(payload) => {
            let target = finite_target(payload.target_rotation, pose.rotation);
            Pose {
                position: pose.position,
                rotation: lerp(pose.rotation, target, progress),
            }
        }
        // A lone entity wheels in place: the heading swings through the
        // wheel angle, the position stays put. The orbit-about-a-pivot
        // variant is deliberately not implemented for ungrouped entities.
        ActionKind::Wheel(payload) => Pose {
            position: pose.position,
            rotation: pose.rotation + finite_or(payload.wheel_angle, 0.0) * progress,
        },
    }
}
