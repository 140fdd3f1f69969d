use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::actions::AnimationAction;

/// A point on the ground plan, measured in paces. The y axis grows toward
/// the bottom of the plan, so "top" anchors sit at minimum y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One placed figure on the ground. Owned by the surrounding editor; the
/// engine only reads it and produces updated copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
    /// Heading in degrees: 0 = north, increasing clockwise. Never normalized.
    pub rotation: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Entity {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A grouping label over entities sharing its id. A group has no position of
/// its own; its spatial extent is always derived from current member
/// positions. `config` is carried opaquely for the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMetadata {
    pub id: String,
    pub label: String,
    pub rotation: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationTrack {
    #[serde(default)]
    pub actions: Vec<AnimationAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Keyed by owner id: an entity id or a group id.
    #[serde(default)]
    pub tracks: HashMap<String, AnimationTrack>,
    /// Editor-authored playback length in seconds.
    #[serde(default)]
    pub duration: f32,
}

/// The full snapshot the engine consumes. Immutable for the duration of one
/// evaluation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundState {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub groups: HashMap<String, GroupMetadata>,
    #[serde(default)]
    pub animation: AnimationState,
}

impl GroundState {
    pub fn find_entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn group_members(&self, group_id: &str) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|entity| entity.group_id.as_deref() == Some(group_id))
            .collect()
    }
}
