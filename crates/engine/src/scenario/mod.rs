mod actions;
mod document;
mod types;

pub use actions::{
    ActionKind, AnimationAction, GroupAnchor, MovePathMode, MovePayload, OrthogonalOrder,
    PivotCorner, TurnPayload, WheelPayload, DEFAULT_WHEEL_ANGLE_DEGREES,
};
pub use document::{load_ground_state, parse_ground_state, save_ground_state, ScenarioError};
pub use types::{AnimationState, AnimationTrack, Entity, GroundState, GroupMetadata, Vec2};
