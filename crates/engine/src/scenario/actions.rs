use serde::{Deserialize, Serialize};

use super::types::Vec2;

pub const DEFAULT_WHEEL_ANGLE_DEGREES: f32 = 90.0;

/// One timed maneuver on a track. `start_time` and `duration` are seconds on
/// the shared timeline; the payload shape depends on the maneuver kind.
///
/// Actions on one track are expected to occupy non-overlapping half-open
/// intervals `[start_time, start_time + duration)`. The evaluator does not
/// enforce this; overlap resolves to last-applied-wins in sorted-start order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationAction {
    pub id: String,
    pub start_time: f32,
    pub duration: f32,
    #[serde(flatten)]
    pub kind: ActionKind,
}

/// The maneuver vocabulary. All payload defaulting happens here, at the
/// serde boundary, so both the entity and the group evaluator see identical
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionKind {
    #[serde(rename = "MOVE")]
    Move(MovePayload),
    #[serde(rename = "TURN")]
    Turn(TurnPayload),
    #[serde(rename = "WHEEL")]
    Wheel(WheelPayload),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePayload {
    /// Missing target axes default to the action's start value at
    /// evaluation time, making the move a no-op on that axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_y: Option<f32>,
    #[serde(default)]
    pub move_path_mode: MovePathMode,
    #[serde(default)]
    pub orthogonal_order: OrthogonalOrder,
    /// Explicit intermediate point; when present it overrides
    /// `move_path_mode` with a two-segment route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint: Option<Vec2>,
    /// Which point of a formation's bounding box the target refers to.
    /// Meaningful for group tracks only.
    #[serde(default)]
    pub group_anchor: GroupAnchor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnPayload {
    /// Degrees, unbounded range, never normalized. Missing/non-finite
    /// defaults to the heading at the action's start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rotation: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelPayload {
    #[serde(default = "default_wheel_angle")]
    pub wheel_angle: f32,
    #[serde(default)]
    pub pivot_corner: PivotCorner,
}

impl Default for WheelPayload {
    fn default() -> Self {
        Self {
            wheel_angle: DEFAULT_WHEEL_ANGLE_DEGREES,
            pivot_corner: PivotCorner::default(),
        }
    }
}

fn default_wheel_angle() -> f32 {
    DEFAULT_WHEEL_ANGLE_DEGREES
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePathMode {
    #[serde(rename = "DIRECT")]
    Direct,
    #[default]
    #[serde(rename = "ORTHOGONAL")]
    Orthogonal,
}

/// Which leg of an L-shaped orthogonal path runs first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrthogonalOrder {
    #[default]
    #[serde(rename = "X_THEN_Y")]
    XThenY,
    #[serde(rename = "Y_THEN_X")]
    YThenX,
}

/// The nine relative points of a formation's bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupAnchor {
    #[default]
    #[serde(rename = "TL")]
    TopLeft,
    #[serde(rename = "TM")]
    TopMid,
    #[serde(rename = "TR")]
    TopRight,
    #[serde(rename = "CL")]
    CenterLeft,
    #[serde(rename = "C")]
    Center,
    #[serde(rename = "CR")]
    CenterRight,
    #[serde(rename = "BL")]
    BottomLeft,
    #[serde(rename = "BM")]
    BottomMid,
    #[serde(rename = "BR")]
    BottomRight,
}

/// Wheel pivots use a 5-way subset of the anchor vocabulary: the four
/// corners plus the center of the bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotCorner {
    #[default]
    #[serde(rename = "TL")]
    TopLeft,
    #[serde(rename = "TR")]
    TopRight,
    #[serde(rename = "BL")]
    BottomLeft,
    #[serde(rename = "BR")]
    BottomRight,
    #[serde(rename = "CENTER")]
    Center,
}
