//! Transport controller
//!
//! Maps each button press to the single command it should issue, reading
//! only the latest status snapshot. Stateless between presses.

use crate::{
    status::PlaybackStatus,
    types::{PlaybackCommand, TransportConfig, TransportIntent, DEFAULT_STEP_MILLIS},
};

/// Computes the next playback command for a transport intent
///
/// Seek targets are clamped here rather than left to the engine: whenever the
/// duration is known, no command targets a position outside `[0, duration]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportController {
    step_millis: u64,
}

impl Default for TransportController {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_MILLIS)
    }
}

impl TransportController {
    /// Create a controller stepping by `step_millis`
    pub fn new(step_millis: u64) -> Self {
        Self { step_millis }
    }

    /// Create a controller from configuration
    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(config.step_millis)
    }

    /// Step distance used by back/forward
    pub fn step_millis(&self) -> u64 {
        self.step_millis
    }

    /// Command for `intent` given the latest status
    ///
    /// Returns `None` only when the command would depend on an unknown
    /// operand (step forward before any position is known).
    pub fn command_for(
        &self,
        intent: TransportIntent,
        status: &PlaybackStatus,
    ) -> Option<PlaybackCommand> {
        match intent {
            TransportIntent::RewindToStart => Some(seek(0)),
            TransportIntent::StepBack => Some(self.step_back(status)),
            TransportIntent::TogglePlayback => Some(toggle(status)),
            TransportIntent::StepForward => self.step_forward(status),
            TransportIntent::Fullscreen => Some(PlaybackCommand::PresentFullscreen),
        }
    }

    fn step_back(&self, status: &PlaybackStatus) -> PlaybackCommand {
        let target = match status.position_millis {
            Some(position) if position > self.step_millis => position - self.step_millis,
            // Unknown position falls through to the start, same as a short one
            _ => 0,
        };

        // A position reported past the end must not carry the target with it
        match status.playable_duration_millis {
            Some(duration) => seek(target.min(duration)),
            None => seek(target),
        }
    }

    fn step_forward(&self, status: &PlaybackStatus) -> Option<PlaybackCommand> {
        let position = status.position_millis?;

        let Some(duration) = status.playable_duration_millis else {
            // No upper bound known yet
            return Some(seek(position.saturating_add(self.step_millis)));
        };

        if position < duration.saturating_sub(self.step_millis) {
            Some(seek(position + self.step_millis))
        } else {
            Some(seek(duration))
        }
    }
}

fn toggle(status: &PlaybackStatus) -> PlaybackCommand {
    if status.is_playing_or_default() {
        PlaybackCommand::Pause
    } else {
        PlaybackCommand::Play
    }
}

fn seek(position_millis: u64) -> PlaybackCommand {
    PlaybackCommand::Seek { position_millis }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(position: u64, duration: u64) -> PlaybackStatus {
        PlaybackStatus::new(true, position, duration)
    }

    fn seek_to(position_millis: u64) -> Option<PlaybackCommand> {
        Some(PlaybackCommand::Seek { position_millis })
    }

    #[test]
    fn test_rewind_always_seeks_to_start() {
        let controller = TransportController::default();
        for status in [at(0, 0), at(7000, 10000), PlaybackStatus::default()] {
            assert_eq!(
                controller.command_for(TransportIntent::RewindToStart, &status),
                seek_to(0)
            );
        }
    }

    #[test]
    fn test_step_back_clamps_at_start() {
        let controller = TransportController::default();
        assert_eq!(
            controller.command_for(TransportIntent::StepBack, &at(3000, 10000)),
            seek_to(0)
        );
        // Exactly one step in is not strictly greater, so it clamps too
        assert_eq!(
            controller.command_for(TransportIntent::StepBack, &at(5000, 10000)),
            seek_to(0)
        );
    }

    #[test]
    fn test_step_back_moves_by_step() {
        let controller = TransportController::default();
        assert_eq!(
            controller.command_for(TransportIntent::StepBack, &at(8000, 10000)),
            seek_to(3000)
        );
    }

    #[test]
    fn test_step_back_past_end_clamps_to_duration() {
        let controller = TransportController::default();
        assert_eq!(
            controller.command_for(TransportIntent::StepBack, &at(20000, 10000)),
            seek_to(10000)
        );
        // Within one step of the end it lands inside the media
        assert_eq!(
            controller.command_for(TransportIntent::StepBack, &at(12000, 10000)),
            seek_to(7000)
        );
    }

    #[test]
    fn test_step_back_with_unknown_position_seeks_to_start() {
        let controller = TransportController::default();
        assert_eq!(
            controller.command_for(TransportIntent::StepBack, &PlaybackStatus::default()),
            seek_to(0)
        );
    }

    #[test]
    fn test_step_forward_moves_by_step() {
        let controller = TransportController::default();
        assert_eq!(
            controller.command_for(TransportIntent::StepForward, &at(1000, 10000)),
            seek_to(6000)
        );
    }

    #[test]
    fn test_step_forward_clamps_at_end() {
        let controller = TransportController::default();
        assert_eq!(
            controller.command_for(TransportIntent::StepForward, &at(9000, 10000)),
            seek_to(10000)
        );
        assert_eq!(
            controller.command_for(TransportIntent::StepForward, &at(5000, 10000)),
            seek_to(10000)
        );
    }

    #[test]
    fn test_step_forward_on_media_shorter_than_step() {
        let controller = TransportController::default();
        assert_eq!(
            controller.command_for(TransportIntent::StepForward, &at(0, 3000)),
            seek_to(3000)
        );
    }

    #[test]
    fn test_step_forward_without_duration_is_unclamped() {
        let controller = TransportController::default();
        let status = PlaybackStatus {
            is_playing: Some(true),
            position_millis: Some(2000),
            playable_duration_millis: None,
        };
        assert_eq!(
            controller.command_for(TransportIntent::StepForward, &status),
            seek_to(7000)
        );
    }

    #[test]
    fn test_step_forward_without_position_is_noop() {
        let controller = TransportController::default();
        let status = PlaybackStatus {
            is_playing: Some(false),
            position_millis: None,
            playable_duration_millis: Some(10000),
        };
        assert_eq!(
            controller.command_for(TransportIntent::StepForward, &status),
            None
        );
        assert_eq!(
            controller.command_for(TransportIntent::StepForward, &PlaybackStatus::default()),
            None
        );
    }

    #[test]
    fn test_toggle_follows_playing_flag() {
        let controller = TransportController::default();
        let mut status = at(0, 10000);

        status.is_playing = Some(true);
        assert_eq!(
            controller.command_for(TransportIntent::TogglePlayback, &status),
            Some(PlaybackCommand::Pause)
        );

        status.is_playing = Some(false);
        assert_eq!(
            controller.command_for(TransportIntent::TogglePlayback, &status),
            Some(PlaybackCommand::Play)
        );

        status.is_playing = None;
        assert_eq!(
            controller.command_for(TransportIntent::TogglePlayback, &status),
            Some(PlaybackCommand::Play)
        );
    }

    #[test]
    fn test_fullscreen() {
        let controller = TransportController::default();
        assert_eq!(
            controller.command_for(TransportIntent::Fullscreen, &PlaybackStatus::default()),
            Some(PlaybackCommand::PresentFullscreen)
        );
    }

    #[test]
    fn test_custom_step() {
        let controller = TransportController::from_config(&TransportConfig { step_millis: 10000 });
        assert_eq!(controller.step_millis(), 10000);
        assert_eq!(
            controller.command_for(TransportIntent::StepBack, &at(15000, 60000)),
            seek_to(5000)
        );
        assert_eq!(
            controller.command_for(TransportIntent::StepForward, &at(15000, 60000)),
            seek_to(25000)
        );
    }

    #[test]
    fn test_forward_saturates_near_max() {
        let controller = TransportController::default();
        let status = PlaybackStatus {
            is_playing: Some(true),
            position_millis: Some(u64::MAX - 1),
            playable_duration_millis: None,
        };
        assert_eq!(
            controller.command_for(TransportIntent::StepForward, &status),
            seek_to(u64::MAX)
        );
    }
}
