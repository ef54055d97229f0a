//! Session events
//!
//! The two inbound event kinds: engine status pushes and user presses.

use crate::{status::PlaybackStatus, types::TransportIntent};
use serde::{Deserialize, Serialize};

/// Inbound event handled by a player session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Playback engine pushed a new status snapshot
    StatusUpdate(PlaybackStatus),

    /// User pressed a transport button
    Press(TransportIntent),
}

impl From<PlaybackStatus> for SessionEvent {
    fn from(status: PlaybackStatus) -> Self {
        SessionEvent::StatusUpdate(status)
    }
}

impl From<TransportIntent> for SessionEvent {
    fn from(intent: TransportIntent) -> Self {
        SessionEvent::Press(intent)
    }
}
