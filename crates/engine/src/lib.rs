pub mod scenario;
pub mod timeline;

pub use scenario::{
    load_ground_state, parse_ground_state, save_ground_state, ActionKind, AnimationAction,
    AnimationState, AnimationTrack, Entity, GroundState, GroupAnchor, GroupMetadata, MovePathMode,
    MovePayload, OrthogonalOrder, PivotCorner, ScenarioError, TurnPayload, Vec2, WheelPayload,
    DEFAULT_WHEEL_ANGLE_DEGREES,
};
pub use timeline::{
    content_end_time, evaluate, evaluate_entity_track, evaluate_group_track, lerp,
    preview_group_move_path, preview_move_path, resolve_anchor, resolve_pivot, wheel_pivot,
    EvaluatedState, Pose, MIN_ACTION_DURATION,
};
