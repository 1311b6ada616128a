use std::fmt;

use crate::step::{Step, Value};

/// Produces a replayable trace for an `(array, target)` pair.
///
/// The playback controller only depends on this seam, so tests and other
/// algorithms can supply their own generation logic.
pub trait StepGenerator {
    fn generate(&self, array: &[Value], target: Option<Value>) -> Vec<Step>;
}

impl<F> StepGenerator for F
where
    F: Fn(&[Value], Option<Value>) -> Vec<Step>,
{
    fn generate(&self, array: &[Value], target: Option<Value>) -> Vec<Step> {
        self(array, target)
    }
}

/// Linear search as a [`StepGenerator`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinearSearch;

impl StepGenerator for LinearSearch {
    fn generate(&self, array: &[Value], target: Option<Value>) -> Vec<Step> {
        generate_optional(array, target)
    }
}

impl fmt::Display for LinearSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("linear-search")
    }
}

/// Scans `array` from the front and records one step per examined element,
/// stopping right after the first element equal to `target`.
pub fn generate(array: &[Value], target: Value) -> Vec<Step> {
    let mut steps = Vec::new();

    for (index, &value) in array.iter().enumerate() {
        let found = value == target;
        steps.push(Step::new(index, value, found));
        if found {
            break;
        }
    }

    steps
}

/// Like [`generate`], but a missing target yields an empty trace.
pub fn generate_optional(array: &[Value], target: Option<Value>) -> Vec<Step> {
    match target {
        Some(target) => generate(array, target),
        None => Vec::new(),
    }
}

/// Index of the matching element, if the trace ended on a match.
pub fn found_index(steps: &[Step]) -> Option<usize> {
    steps.last().filter(|step| step.found).map(|step| step.index)
}
