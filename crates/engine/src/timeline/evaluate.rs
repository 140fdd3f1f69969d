use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::scenario::{Entity, GroundState, GroupMetadata};

use super::entity::{evaluate_entity_track, Pose};
use super::group::evaluate_group_track;

/// The snapshot fragment produced by one evaluation: fresh entity and group
/// copies with no aliasing into the caller's base state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluatedState {
    pub entities: Vec<Entity>,
    pub groups: HashMap<String, GroupMetadata>,
}

/// Reconstructs the spatial state of every entity at time `t`.
///
/// Pure and total: no input is mutated, no state outlives the call, and no
/// well-typed input panics. The whole timeline is re-derived from `t = 0`
/// on every call, so seeking backward reproduces earlier frames exactly and
/// no floating error accumulates across frames. Callers pass `t >= 0` by
/// convention; negative values are not clamped here.
pub fn evaluate(base: &GroundState, t: f32) -> EvaluatedState {
    let mut entities: Vec<Entity> = base.entities.iter().map(sanitized_copy).collect();
    let groups: HashMap<String, GroupMetadata> = base
        .groups
        .iter()
        .map(|(id, group)| (id.clone(), group.clone()))
        .collect();

    // Tracks are independent per owner; sorted iteration just keeps log
    // output and debugging stable across calls.
    let mut owner_ids: Vec<&String> = base.animation.tracks.keys().collect();
    owner_ids.sort();

    for owner_id in owner_ids {
        let track = &base.animation.tracks[owner_id];
        if track.actions.is_empty() {
            continue;
        }

        // A group id wins over an entity with the same id.
        if groups.contains_key(owner_id) {
            let member_indices: Vec<usize> = entities
                .iter()
                .enumerate()
                .filter(|(_, entity)| entity.group_id.as_deref() == Some(owner_id.as_str()))
                .map(|(index, _)| index)
                .collect();
            let mut members: Vec<Entity> = member_indices
                .iter()
                .map(|&index| entities[index].clone())
                .collect();
            evaluate_group_track(&mut members, &track.actions, t);
            for (index, member) in member_indices.into_iter().zip(members) {
                entities[index] = member;
            }
        } else if let Some(entity) = entities.iter_mut().find(|entity| entity.id == *owner_id) {
            let pose = evaluate_entity_track(entity, &track.actions, t);
            pose.write_to(entity);
        } else {
            // The editor may delete an owner before its track; not an error.
            debug!(owner = %owner_id, "skipping track for missing owner");
        }
    }

    EvaluatedState { entities, groups }
}

// Non-finite base coordinates are zeroed up front so every downstream
// computation starts from finite numbers.
fn sanitized_copy(entity: &Entity) -> Entity {
    let mut copy = entity.clone();
    Pose::of(entity).write_to(&mut copy);
    copy
}
