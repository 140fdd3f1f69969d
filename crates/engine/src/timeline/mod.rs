mod anchor;
mod entity;
mod evaluate;
mod group;
mod path;
mod preview;
mod schedule;

pub use anchor::{resolve_anchor, resolve_pivot};
pub use entity::{evaluate_entity_track, Pose};
pub use evaluate::{evaluate, EvaluatedState};
pub use group::evaluate_group_track;
pub use path::{
    interpolate_direct, interpolate_move, interpolate_orthogonal, interpolate_via_waypoint, lerp,
    resolve_move_target,
};
pub use preview::{preview_group_move_path, preview_move_path, wheel_pivot};
pub use schedule::{content_end_time, MIN_ACTION_DURATION};
