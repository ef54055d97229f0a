//! Press scripts
//!
//! A comma-separated list of button names and waits, used to drive the
//! player without a real input device: `play,wait:2000,fwd,back,pause`.

use crate::error::{PlayerError, Result};
use frame_transport::TransportIntent;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Press(TransportIntent),
    Wait(Duration),
}

/// Parse a single button name
pub fn parse_intent(name: &str) -> Result<TransportIntent> {
    match name {
        "rewind" | "start" => Ok(TransportIntent::RewindToStart),
        "back" | "rw" => Ok(TransportIntent::StepBack),
        "play" | "pause" | "toggle" => Ok(TransportIntent::TogglePlayback),
        "forward" | "fwd" | "ff" => Ok(TransportIntent::StepForward),
        "fullscreen" | "fs" => Ok(TransportIntent::Fullscreen),
        other => Err(PlayerError::Script(format!("unknown button '{}'", other))),
    }
}

/// Parse a full script
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.strip_prefix("wait:") {
            Some(ms) => ms
                .parse::<u64>()
                .map(|ms| ScriptStep::Wait(Duration::from_millis(ms)))
                .map_err(|e| PlayerError::Script(format!("bad wait '{}': {}", token, e))),
            None => parse_intent(&token.to_ascii_lowercase()).map(ScriptStep::Press),
        })
        .collect()
}
