use serde::{Deserialize, Serialize};

use crate::{
    search::found_index,
    step::{statuses_at, ElementStatus, Step, Value},
};

/// Result of a search as far as playback has revealed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Playback has not reached the end of the trace yet, or there is no trace.
    Pending,
    Found { index: usize, value: Value },
    NotFound,
}

/// Which user controls make sense in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlAvailability {
    pub can_prev: bool,
    pub can_next: bool,
    pub can_reset: bool,
    pub can_play: bool,
}

/// Read-only snapshot that presentation layers render from.
///
/// Always computed from the step list and position; the controller never
/// stores any of these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackView {
    pub position: usize,
    pub total_steps: usize,
    pub is_playing: bool,
    pub speed_ms: u64,
    pub target: Option<Value>,
    pub current_step: Option<Step>,
    pub progress_percent: f64,
    pub is_at_start: bool,
    pub is_at_end: bool,
    pub statuses: Vec<ElementStatus>,
    pub outcome: SearchOutcome,
    pub controls: ControlAvailability,
}

/// Inputs needed to derive a [`PlaybackView`].
#[derive(Debug, Clone, Copy)]
pub struct ViewSource<'a> {
    pub steps: &'a [Step],
    pub position: usize,
    pub element_count: usize,
    pub is_playing: bool,
    pub speed_ms: u64,
    pub target: Option<Value>,
}

impl PlaybackView {
    pub fn derive(source: ViewSource<'_>) -> Self {
        let ViewSource {
            steps,
            position,
            element_count,
            is_playing,
            speed_ms,
            target,
        } = source;

        let total_steps = steps.len();
        let position = position.min(total_steps);
        let is_at_start = position == 0;
        let is_at_end = position >= total_steps;
        let current_step = position.checked_sub(1).map(|i| steps[i]);
        let progress_percent = if total_steps > 0 {
            100.0 * position as f64 / total_steps as f64
        } else {
            0.0
        };

        let outcome = if is_at_end && total_steps > 0 {
            match found_index(steps) {
                Some(index) => SearchOutcome::Found {
                    index,
                    value: steps[total_steps - 1].value,
                },
                None => SearchOutcome::NotFound,
            }
        } else {
            SearchOutcome::Pending
        };

        Self {
            position,
            total_steps,
            is_playing,
            speed_ms,
            target,
            current_step,
            progress_percent,
            is_at_start,
            is_at_end,
            statuses: statuses_at(steps, position, element_count),
            outcome,
            controls: ControlAvailability {
                can_prev: !is_at_start,
                can_next: !is_at_end,
                can_reset: !is_at_start,
                can_play: !(is_at_end && !is_playing),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::generate;

    fn view(steps: &[Step], position: usize, element_count: usize) -> PlaybackView {
        PlaybackView::derive(ViewSource {
            steps,
            position,
            element_count,
            is_playing: false,
            speed_ms: 800,
            target: Some(34),
        })
    }

    #[test]
    fn start_of_trace() {
        let steps = generate(&[23, 45, 12, 78, 34, 56, 89, 23, 67], 34);
        let v = view(&steps, 0, 9);

        assert!(v.is_at_start);
        assert!(!v.is_at_end);
        assert_eq!(v.current_step, None);
        assert_eq!(v.progress_percent, 0.0);
        assert_eq!(v.outcome, SearchOutcome::Pending);
        assert!(!v.controls.can_prev);
        assert!(!v.controls.can_reset);
        assert!(v.controls.can_play);
    }

    #[test]
    fn end_of_found_trace() {
        let steps = generate(&[23, 45, 12, 78, 34, 56, 89, 23, 67], 34);
        let v = view(&steps, 5, 9);

        assert_eq!(v.total_steps, 5);
        assert_eq!(v.current_step, Some(Step::new(4, 34, true)));
        assert_eq!(v.progress_percent, 100.0);
        assert_eq!(v.outcome, SearchOutcome::Found { index: 4, value: 34 });
        assert_eq!(v.statuses[4], ElementStatus::Found);
        assert_eq!(v.statuses[3], ElementStatus::Checked);
        assert_eq!(v.statuses[5], ElementStatus::Default);
        assert!(!v.controls.can_next);
        assert!(!v.controls.can_play);
    }

    #[test]
    fn end_of_missing_trace_reports_not_found() {
        let steps = generate(&[1, 2, 3], 9);
        let v = view(&steps, 3, 3);

        assert!(v.is_at_end);
        assert_eq!(v.outcome, SearchOutcome::NotFound);
        assert_eq!(v.statuses[2], ElementStatus::Checking);
    }

    #[test]
    fn midway_progress() {
        let steps = generate(&[1, 2, 3, 4], 9);
        let v = view(&steps, 1, 4);

        assert_eq!(v.progress_percent, 25.0);
        assert_eq!(v.outcome, SearchOutcome::Pending);
    }

    #[test]
    fn empty_trace_stays_pending() {
        let v = view(&[], 0, 0);

        assert!(v.is_at_start && v.is_at_end);
        assert_eq!(v.outcome, SearchOutcome::Pending);
        assert_eq!(v.progress_percent, 0.0);
        assert!(!v.controls.can_play);
    }
}
