//! Plain-text rendering of playback views.

use std::fmt::Write as _;

use search_visualiser_core::{
    AlgorithmDefinition, ElementStatus, PlaybackView, SearchOutcome, Step, Value,
};

const BAR_WIDTH: usize = 20;

pub fn describe_step(step: &Step, target: Option<Value>) -> String {
    let target = target.map_or_else(|| "?".to_string(), |t| t.to_string());
    if step.found {
        format!("index {}: found target {target}", step.index)
    } else {
        format!("index {}: checking {} != {target}", step.index, step.value)
    }
}

pub fn outcome_line(view: &PlaybackView) -> String {
    let target = view.target.map_or_else(|| "?".to_string(), |t| t.to_string());
    match view.outcome {
        SearchOutcome::Found { index, .. } => format!("target {target} found at index {index}"),
        SearchOutcome::NotFound => format!("target {target} is not in the array"),
        SearchOutcome::Pending if view.total_steps == 0 => "nothing to search".to_string(),
        SearchOutcome::Pending => "search in progress".to_string(),
    }
}

/// One line of array cells followed by a progress line.
pub fn frame(view: &PlaybackView, array: &[Value]) -> String {
    let mut out = String::new();

    for (index, value) in array.iter().enumerate() {
        let status = view.statuses.get(index).copied().unwrap_or_default();
        let _ = write!(out, "{} ", cell(*value, status));
    }

    let filled = (view.progress_percent / 100.0 * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let _ = write!(
        out,
        "\n[{}{}] {}/{}",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        view.position,
        view.total_steps
    );
    if let Some(step) = &view.current_step {
        let _ = write!(out, "  {}", describe_step(step, view.target));
    }
    out
}

pub fn algorithm_line(algorithm: &AlgorithmDefinition) -> String {
    format!(
        "{:<16} {:<16} best {} / average {} / worst {}, space {}",
        algorithm.id,
        algorithm.name,
        algorithm.complexity.best,
        algorithm.complexity.average,
        algorithm.complexity.worst,
        algorithm.complexity.space
    )
}

fn cell(value: Value, status: ElementStatus) -> String {
    match status {
        ElementStatus::Checking | ElementStatus::Comparing => format!("[{value}]"),
        ElementStatus::Found => format!("<{value}>"),
        ElementStatus::Checked => format!("({value})"),
        _ => format!(" {value} "),
    }
}

#[cfg(test)]
mod tests {
    use search_visualiser_core::{ManualClock, PlaybackController, LINEAR_SEARCH};

    use super::*;

    fn controller(array: &[Value], target: Value) -> PlaybackController {
        let mut ctrl = PlaybackController::new(ManualClock::new());
        ctrl.set_data(array.to_vec(), Some(target));
        ctrl
    }

    #[test]
    fn frame_marks_each_status() {
        let mut ctrl = controller(&[5, 7, 9], 7);
        ctrl.advance();
        ctrl.advance();

        let text = frame(&ctrl.view(), ctrl.array());
        assert!(text.starts_with("(5) <7>  9 "));
        assert!(text.contains("2/2"));
        assert!(text.contains("found target 7"));
    }

    #[test]
    fn reports_missing_target() {
        let mut ctrl = controller(&[1, 2, 3], 9);
        ctrl.seek(3);

        assert_eq!(outcome_line(&ctrl.view()), "target 9 is not in the array");
    }

    #[test]
    fn reports_found_target() {
        let mut ctrl = controller(&[23, 45, 12, 78, 34], 34);
        ctrl.seek(5);

        assert_eq!(outcome_line(&ctrl.view()), "target 34 found at index 4");
    }

    #[test]
    fn describes_unsuccessful_checks() {
        let step = Step::new(1, 45, false);
        assert_eq!(describe_step(&step, Some(34)), "index 1: checking 45 != 34");
    }

    #[test]
    fn lists_complexity() {
        let line = algorithm_line(&LINEAR_SEARCH);
        assert!(line.starts_with("linear-search"));
        assert!(line.contains("worst O(n)"));
    }
}
