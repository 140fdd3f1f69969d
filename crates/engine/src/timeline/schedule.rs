use crate::scenario::{AnimationAction, AnimationState};

/// Non-positive durations clamp to this, turning the action into an
/// instantaneous jump at its start time instead of a division by zero.
pub const MIN_ACTION_DURATION: f32 = 1e-3;

/// Stable ascending sort by start time; ties keep their original order.
pub(crate) fn sorted_by_start(actions: &[AnimationAction]) -> Vec<&AnimationAction> {
    let mut sorted: Vec<&AnimationAction> = actions.iter().collect();
    sorted.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    sorted
}

/// Clamped fraction of the action's duration elapsed at `t`. Total over any
/// input: a non-finite intermediate resolves to 1 (treated as complete).
pub(crate) fn action_progress(action: &AnimationAction, t: f32) -> f32 {
    let duration = action.duration.max(MIN_ACTION_DURATION);
    let raw = (t - action.start_time) / duration;
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Latest `start_time + duration` across all tracks: where the timeline's
/// authored content actually ends. The playback clock stops advancing at
/// the authored `duration`; the editor uses this to warn when actions run
/// past it.
pub fn content_end_time(animation: &AnimationState) -> f32 {
    animation
        .tracks
        .values()
        .flat_map(|track| track.actions.iter())
        .map(|action| action.start_time + action.duration.max(MIN_ACTION_DURATION))
        .filter(|end| end.is_finite())
        .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{ActionKind, AnimationTrack, TurnPayload};

    fn turn(id: &str, start_time: f32, duration: f32) -> AnimationAction {
        AnimationAction {
            id: id.to_string(),
            start_time,
            duration,
            kind: ActionKind::Turn(TurnPayload::default()),
        }
    }

    #[test]
    fn sort_is_stable_on_equal_start_times() {
        let actions = vec![turn("b", 1.0, 1.0), turn("a", 0.0, 1.0), turn("c", 1.0, 1.0)];
        let sorted = sorted_by_start(&actions);
        let ids: Vec<&str> = sorted.iter().map(|action| action.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn progress_clamps_to_unit_interval() {
        let action = turn("a", 2.0, 4.0);
        assert_eq!(action_progress(&action, 0.0), 0.0);
        assert_eq!(action_progress(&action, 2.0), 0.0);
        assert_eq!(action_progress(&action, 4.0), 0.5);
        assert_eq!(action_progress(&action, 6.0), 1.0);
        assert_eq!(action_progress(&action, 100.0), 1.0);
    }

    #[test]
    fn non_positive_duration_acts_as_instantaneous() {
        let zero = turn("a", 1.0, 0.0);
        assert_eq!(action_progress(&zero, 1.0), 0.0);
        assert_eq!(action_progress(&zero, 1.01), 1.0);

        let negative = turn("a", 1.0, -5.0);
        assert_eq!(action_progress(&negative, 2.0), 1.0);
    }

    #[test]
    fn content_end_time_spans_all_tracks() {
        let mut animation = AnimationState::default();
        animation.tracks.insert(
            "e1".to_string(),
            AnimationTrack {
                actions: vec![turn("a", 0.0, 2.0), turn("b", 5.0, 3.0)],
            },
        );
        animation.tracks.insert(
            "e2".to_string(),
            AnimationTrack {
                actions: vec![turn("c", 1.0, 4.0)],
            },
        );
        assert_eq!(content_end_time(&animation), 8.0);
        assert_eq!(content_end_time(&AnimationState::default()), 0.0);
    }
}
