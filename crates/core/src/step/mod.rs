use serde::{Deserialize, Serialize};

/// Numeric element type the visualiser searches over.
pub type Value = i64;

/// Visual state of a single array element at some point in a trace.
///
/// Only the first four variants are produced by linear search. The remaining
/// ones are reserved for algorithms that compare and move elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ElementStatus {
    #[default]
    Default,
    Checking,
    Checked,
    Found,
    Comparing,
    Swapping,
    Sorted,
}

/// One examined array position.
///
/// `value` is a snapshot taken at generation time; steps are never mutated
/// after they have been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub index: usize,
    pub value: Value,
    pub found: bool,
}

impl Step {
    pub fn new(index: usize, value: Value, found: bool) -> Self {
        Self {
            index,
            value,
            found,
        }
    }

    /// Status of the element this step examines.
    pub fn status(&self) -> ElementStatus {
        if self.found {
            ElementStatus::Found
        } else {
            ElementStatus::Checking
        }
    }
}

/// Rebuilds the per-index status of an array of `len` elements after the
/// first `position` steps of `steps` have been played.
///
/// The element under the most recent step is `Checking` (or `Found`), every
/// other visited element is `Checked`, everything else stays `Default`.
/// Indices at or beyond `len` are ignored and `position` is clamped to the
/// trace length.
pub fn statuses_at(steps: &[Step], position: usize, len: usize) -> Vec<ElementStatus> {
    let mut statuses = vec![ElementStatus::Default; len];
    let played = &steps[..position.min(steps.len())];

    if let Some((current, visited)) = played.split_last() {
        for step in visited {
            if let Some(slot) = statuses.get_mut(step.index) {
                *slot = ElementStatus::Checked;
            }
        }
        if let Some(slot) = statuses.get_mut(current.index) {
            *slot = current.status();
        }
    }

    statuses
}
