//! Simulated playback engine
//!
//! Stands in for the native video component: advances a playhead on every
//! tick and reports status the way a real engine does, with the duration
//! unknown until its metadata has "loaded".

use crate::config::{SimulationSettings, SourceSettings};
use frame_transport::{PlaybackEngine, PlaybackStatus, TransportError};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SimulatedEngine {
    uri: String,
    position_ms: u64,
    duration_ms: u64,
    metadata_delay: Duration,
    elapsed: Duration,
    playing: bool,
    looping: bool,
    fullscreen: bool,
}

impl SimulatedEngine {
    pub fn new(source: &SourceSettings, simulation: &SimulationSettings) -> Self {
        Self {
            uri: source.uri.clone(),
            position_ms: 0,
            duration_ms: simulation.duration_ms,
            metadata_delay: Duration::from_millis(simulation.metadata_delay_ms),
            elapsed: Duration::ZERO,
            playing: source.autoplay,
            looping: source.looping,
            fullscreen: false,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn metadata_loaded(&self) -> bool {
        self.elapsed >= self.metadata_delay
    }

    /// Advance wall-clock time by `dt` and report the resulting status
    pub fn tick(&mut self, dt: Duration) -> PlaybackStatus {
        self.elapsed += dt;

        if self.playing {
            self.position_ms = self
                .position_ms
                .saturating_add(u64::try_from(dt.as_millis()).unwrap_or(u64::MAX));
        }

        if self.metadata_loaded() && self.position_ms >= self.duration_ms {
            if self.looping {
                tracing::debug!(uri = %self.uri, "Reached end, looping");
                self.position_ms = 0;
            } else {
                self.position_ms = self.duration_ms;
                self.playing = false;
            }
        }

        self.status()
    }

    /// Status as the engine would push it right now
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            is_playing: Some(self.playing),
            position_millis: Some(self.position_ms),
            playable_duration_millis: self.metadata_loaded().then_some(self.duration_ms),
        }
    }
}

impl PlaybackEngine for SimulatedEngine {
    fn seek(&mut self, position_millis: u64) -> frame_transport::Result<()> {
        // Engine-side clamp once the real length is known
        self.position_ms = if self.metadata_loaded() {
            position_millis.min(self.duration_ms)
        } else {
            position_millis
        };
        Ok(())
    }

    fn play(&mut self) -> frame_transport::Result<()> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> frame_transport::Result<()> {
        self.playing = false;
        Ok(())
    }

    fn present_fullscreen(&mut self) -> frame_transport::Result<()> {
        if self.fullscreen {
            return Err(TransportError::Engine(
                "fullscreen player already presented".to_string(),
            ));
        }
        self.fullscreen = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(looping: bool, autoplay: bool) -> SimulatedEngine {
        SimulatedEngine::new(
            &SourceSettings {
                uri: "memory://clip".to_string(),
                looping,
                autoplay,
            },
            &SimulationSettings {
                tick_ms: 100,
                duration_ms: 1000,
                metadata_delay_ms: 200,
            },
        )
    }

    #[test]
    fn duration_unknown_until_metadata_loads() {
        let mut engine = engine(false, false);
        let status = engine.tick(Duration::from_millis(100));
        assert_eq!(status.playable_duration_millis, None);
        assert_eq!(status.position_millis, Some(0));

        let status = engine.tick(Duration::from_millis(100));
        assert_eq!(status.playable_duration_millis, Some(1000));
    }

    #[test]
    fn paused_engine_holds_position() {
        let mut engine = engine(false, false);
        engine.seek(300).unwrap();
        let status = engine.tick(Duration::from_millis(500));
        assert_eq!(status.position_millis, Some(300));
        assert_eq!(status.is_playing, Some(false));
    }

    #[test]
    fn playing_engine_stops_at_end_without_loop() {
        let mut engine = engine(false, true);
        let status = engine.tick(Duration::from_millis(1500));
        assert_eq!(status.position_millis, Some(1000));
        assert_eq!(status.is_playing, Some(false));
    }

    #[test]
    fn looping_engine_wraps_to_start() {
        let mut engine = engine(true, true);
        let status = engine.tick(Duration::from_millis(1000));
        assert_eq!(status.position_millis, Some(0));
        assert_eq!(status.is_playing, Some(true));
    }

    #[test]
    fn seek_clamped_once_duration_known() {
        let mut engine = engine(false, false);
        engine.seek(5000).unwrap();
        assert_eq!(engine.status().position_millis, Some(5000));

        engine.tick(Duration::from_millis(200));
        engine.seek(5000).unwrap();
        assert_eq!(engine.status().position_millis, Some(1000));
    }

    #[test]
    fn second_fullscreen_request_fails() {
        let mut engine = engine(false, false);
        assert!(engine.present_fullscreen().is_ok());
        assert!(engine.is_fullscreen());
        assert!(engine.present_fullscreen().is_err());
    }
}
