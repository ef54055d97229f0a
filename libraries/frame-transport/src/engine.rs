//! Platform-agnostic playback engine trait
//!
//! Abstracts the native video component that owns decode and render.

use crate::{error::Result, types::PlaybackCommand};

/// Native playback component driven by the transport controls
///
/// All operations are fire-and-forget from the caller's side: their effect
/// is observed only through the next status event the engine pushes.
pub trait PlaybackEngine {
    /// Move the playhead to `position_millis`
    fn seek(&mut self, position_millis: u64) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Present the engine's own fullscreen player
    fn present_fullscreen(&mut self) -> Result<()>;

    /// Route a command to the matching operation
    fn dispatch(&mut self, command: &PlaybackCommand) -> Result<()> {
        match *command {
            PlaybackCommand::Seek { position_millis } => self.seek(position_millis),
            PlaybackCommand::Play => self.play(),
            PlaybackCommand::Pause => self.pause(),
            PlaybackCommand::PresentFullscreen => self.present_fullscreen(),
        }
    }
}

/// Engine that records every command it receives
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub commands: Vec<PlaybackCommand>,
    pub fail: bool,
}

#[cfg(test)]
impl RecordingEngine {
    fn record(&mut self, command: PlaybackCommand) -> Result<()> {
        self.commands.push(command);
        if self.fail {
            return Err(crate::error::TransportError::Engine(
                "engine unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
impl PlaybackEngine for RecordingEngine {
    fn seek(&mut self, position_millis: u64) -> Result<()> {
        self.record(PlaybackCommand::Seek { position_millis })
    }

    fn play(&mut self) -> Result<()> {
        self.record(PlaybackCommand::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.record(PlaybackCommand::Pause)
    }

    fn present_fullscreen(&mut self) -> Result<()> {
        self.record(PlaybackCommand::PresentFullscreen)
    }
}
