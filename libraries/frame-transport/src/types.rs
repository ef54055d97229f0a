//! Core types for transport control

use crate::error::{Result, TransportError};
use serde::{Deserialize, Serialize};

/// Default step used by the back/forward buttons
pub const DEFAULT_STEP_MILLIS: u64 = 5000;

/// One of the five on-screen transport buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportIntent {
    /// Jump back to the start of the media
    RewindToStart,

    /// Step back by one step (clamped at the start)
    StepBack,

    /// Pause when playing, play otherwise
    TogglePlayback,

    /// Step forward by one step (clamped at the end)
    StepForward,

    /// Hand the surface to the engine's fullscreen player
    Fullscreen,
}

impl TransportIntent {
    /// All intents, in on-screen order
    pub const ALL: [TransportIntent; 5] = [
        TransportIntent::RewindToStart,
        TransportIntent::StepBack,
        TransportIntent::TogglePlayback,
        TransportIntent::StepForward,
        TransportIntent::Fullscreen,
    ];
}

/// Command issued to the playback engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackCommand {
    /// Move the playhead to an absolute offset
    Seek {
        /// Target offset from the start of the media
        position_millis: u64,
    },

    /// Start or resume playback
    Play,

    /// Pause playback
    Pause,

    /// Present the engine's fullscreen player
    PresentFullscreen,
}

/// Configuration for the transport controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Distance covered by the back/forward buttons (default: 5000)
    #[serde(default = "default_step_millis")]
    pub step_millis: u64,
}

fn default_step_millis() -> u64 {
    DEFAULT_STEP_MILLIS
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            step_millis: DEFAULT_STEP_MILLIS,
        }
    }
}

impl TransportConfig {
    /// Reject a zero step, which would make back/forward silent no-ops
    pub fn validate(&self) -> Result<()> {
        if self.step_millis == 0 {
            return Err(TransportError::InvalidConfig(
                "step_millis must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
