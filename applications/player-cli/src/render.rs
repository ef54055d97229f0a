//! Text rendering of the player screen

use crate::error::Result;
use frame_transport::{
    project, ControlRow, PlaybackStatus, ProgressSplit, ScreenState, TransportController,
};

/// Format milliseconds as `m:ss`
pub fn format_clock(millis: u64) -> String {
    let total_secs = millis / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Progress line: bar, elapsed and total time
pub fn progress_line(state: &ScreenState, bar_width: usize) -> String {
    let bar = ProgressSplit::from_fraction(state.fraction).to_bar(bar_width);
    let position = state
        .status
        .position_millis
        .map_or_else(|| "-:--".to_string(), format_clock);
    let duration = state
        .status
        .playable_duration_millis
        .map_or_else(|| "-:--".to_string(), format_clock);

    format!(
        "[{}] {:>3}% {} / {}",
        bar,
        state.fraction.percent(),
        position,
        duration
    )
}

/// Control row line, one bracketed label per button
pub fn controls_line(state: &ScreenState, controller: &TransportController) -> String {
    ControlRow::new(controller, &state.status)
        .labels()
        .map(|label| format!("[{}]", label))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full screen report for a raw engine status given as JSON
pub fn status_report(json: &str, step_millis: u64, bar_width: usize) -> Result<String> {
    let status: PlaybackStatus = serde_json::from_str(json)?;
    let state = project(status);
    let controller = TransportController::new(step_millis);

    Ok(format!(
        "fraction: {}\n{}\n{}",
        state.fraction.value(),
        progress_line(&state, bar_width),
        controls_line(&state, &controller)
    ))
}
