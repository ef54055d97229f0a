//! Control row
//!
//! Button labels for the transport row. The play/pause button reflects the
//! latest status; step buttons name the configured step.

use crate::{
    controller::TransportController, status::PlaybackStatus, types::TransportIntent,
};

impl TransportIntent {
    /// Button caption for this intent
    pub fn label(self, status: &PlaybackStatus, step_millis: u64) -> String {
        match self {
            TransportIntent::RewindToStart => "Rewind".to_string(),
            TransportIntent::StepBack => format!("Back {} sec", step_seconds(step_millis)),
            TransportIntent::TogglePlayback => {
                if status.is_playing_or_default() {
                    "Pause".to_string()
                } else {
                    "Play".to_string()
                }
            }
            TransportIntent::StepForward => {
                format!("Forward {} sec", step_seconds(step_millis))
            }
            TransportIntent::Fullscreen => "Full screen".to_string(),
        }
    }
}

fn step_seconds(step_millis: u64) -> String {
    if step_millis % 1000 == 0 {
        (step_millis / 1000).to_string()
    } else {
        format!("{:.1}", step_millis as f64 / 1000.0)
    }
}

/// One button in the transport row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlButton {
    pub intent: TransportIntent,
    pub label: String,
}

/// The transport row, in on-screen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRow {
    buttons: Vec<ControlButton>,
}

impl ControlRow {
    /// Build the row for the latest status
    pub fn new(controller: &TransportController, status: &PlaybackStatus) -> Self {
        let buttons = TransportIntent::ALL
            .iter()
            .map(|&intent| ControlButton {
                intent,
                label: intent.label(status, controller.step_millis()),
            })
            .collect();

        Self { buttons }
    }

    pub fn buttons(&self) -> &[ControlButton] {
        &self.buttons
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().map(|b| b.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let row = ControlRow::new(&TransportController::default(), &PlaybackStatus::default());
        let labels: Vec<&str> = row.labels().collect();
        assert_eq!(
            labels,
            ["Rewind", "Back 5 sec", "Play", "Forward 5 sec", "Full screen"]
        );
    }

    #[test]
    fn test_toggle_label_follows_status() {
        let playing = PlaybackStatus::new(true, 0, 1000);
        assert_eq!(
            TransportIntent::TogglePlayback.label(&playing, 5000),
            "Pause"
        );

        let unknown = PlaybackStatus {
            is_playing: None,
            ..playing
        };
        assert_eq!(
            TransportIntent::TogglePlayback.label(&unknown, 5000),
            "Play"
        );
    }

    #[test]
    fn test_fractional_step_label() {
        let status = PlaybackStatus::default();
        assert_eq!(TransportIntent::StepBack.label(&status, 2500), "Back 2.5 sec");
        assert_eq!(
            TransportIntent::StepForward.label(&status, 10000),
            "Forward 10 sec"
        );
    }

    #[test]
    fn test_buttons_carry_intents_in_order() {
        let row = ControlRow::new(&TransportController::default(), &PlaybackStatus::default());
        let intents: Vec<TransportIntent> = row.buttons().iter().map(|b| b.intent).collect();
        assert_eq!(intents, TransportIntent::ALL);
    }
}
