//! Status projection
//!
//! Turns the raw status snapshots pushed by the playback engine into the
//! progress fraction drawn by the progress bar. The snapshot itself is kept
//! verbatim so the transport controller can read position and duration.

use serde::{Deserialize, Serialize};

/// Status snapshot pushed by the playback engine
///
/// Any subset of fields may be known. Position and duration stay unknown
/// until the first event and until media metadata loads, respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStatus {
    /// Whether the engine is advancing the playhead
    pub is_playing: Option<bool>,

    /// Current playback offset
    pub position_millis: Option<u64>,

    /// Duration currently available for seeking
    pub playable_duration_millis: Option<u64>,
}

impl Default for PlaybackStatus {
    /// Status held before the engine has reported anything
    fn default() -> Self {
        Self {
            is_playing: Some(false),
            position_millis: None,
            playable_duration_millis: None,
        }
    }
}

impl PlaybackStatus {
    /// Build a fully-known status
    pub fn new(is_playing: bool, position_millis: u64, playable_duration_millis: u64) -> Self {
        Self {
            is_playing: Some(is_playing),
            position_millis: Some(position_millis),
            playable_duration_millis: Some(playable_duration_millis),
        }
    }

    /// Playing flag, with unknown treated as not playing
    pub fn is_playing_or_default(&self) -> bool {
        self.is_playing.unwrap_or(false)
    }

    /// Progress fraction for this snapshot
    pub fn fraction(&self) -> ProgressFraction {
        ProgressFraction::from_status(self)
    }
}

/// Normalized playback completion
///
/// Always finite and within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct ProgressFraction(f64);

impl ProgressFraction {
    /// No progress
    pub const ZERO: ProgressFraction = ProgressFraction(0.0);

    /// Derive the fraction from a status snapshot
    ///
    /// Yields zero when position or duration is unknown, or when the duration
    /// is zero. Positions past the end clamp to one.
    pub fn from_status(status: &PlaybackStatus) -> Self {
        match (status.position_millis, status.playable_duration_millis) {
            (Some(position), Some(duration)) if duration > 0 => {
                Self::clamped(position as f64 / duration as f64)
            }
            _ => Self::ZERO,
        }
    }

    /// Wrap an arbitrary ratio, clamping into [0, 1]
    ///
    /// Non-finite input collapses to zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::ZERO
        }
    }

    /// Fraction in [0, 1]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Fraction as a whole percentage (0-100)
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

/// Status snapshot together with its derived progress
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ProjectedStatus {
    /// Snapshot exactly as received
    pub status: PlaybackStatus,

    /// Derived progress
    pub fraction: ProgressFraction,
}

/// Project a status snapshot into UI state
pub fn project(status: PlaybackStatus) -> ProjectedStatus {
    ProjectedStatus {
        fraction: ProgressFraction::from_status(&status),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_of_known_status() {
        let projected = project(PlaybackStatus::new(true, 2500, 10000));
        assert_eq!(projected.fraction.value(), 0.25);
        assert_eq!(projected.fraction.percent(), 25);
    }

    #[test]
    fn test_snapshot_retained_verbatim() {
        let status = PlaybackStatus {
            is_playing: None,
            position_millis: Some(42),
            playable_duration_millis: None,
        };
        assert_eq!(project(status).status, status);
    }

    #[test]
    fn test_zero_duration_yields_zero() {
        let projected = project(PlaybackStatus::new(false, 1234, 0));
        assert_eq!(projected.fraction, ProgressFraction::ZERO);
        assert!(projected.fraction.value().is_finite());

        let projected = project(PlaybackStatus::new(false, 0, 0));
        assert_eq!(projected.fraction.value(), 0.0);
    }

    #[test]
    fn test_unknown_fields_yield_zero() {
        let no_duration = PlaybackStatus {
            is_playing: Some(true),
            position_millis: Some(5000),
            playable_duration_millis: None,
        };
        assert_eq!(no_duration.fraction().value(), 0.0);

        let no_position = PlaybackStatus {
            is_playing: Some(true),
            position_millis: None,
            playable_duration_millis: Some(5000),
        };
        assert_eq!(no_position.fraction().value(), 0.0);

        assert_eq!(PlaybackStatus::default().fraction().value(), 0.0);
    }

    #[test]
    fn test_position_past_end_clamps_to_one() {
        let projected = project(PlaybackStatus::new(true, 12000, 10000));
        assert_eq!(projected.fraction.value(), 1.0);
    }

    #[test]
    fn test_clamped_rejects_non_finite() {
        assert_eq!(ProgressFraction::clamped(f64::NAN).value(), 0.0);
        assert_eq!(ProgressFraction::clamped(f64::INFINITY).value(), 0.0);
        assert_eq!(ProgressFraction::clamped(-0.5).value(), 0.0);
    }

    #[test]
    fn test_unknown_playing_is_not_playing() {
        let status = PlaybackStatus {
            is_playing: None,
            ..PlaybackStatus::default()
        };
        assert!(!status.is_playing_or_default());
    }

    #[test]
    fn test_deserialize_engine_status() {
        let status: PlaybackStatus = serde_json::from_str(
            r#"{"isPlaying":true,"positionMillis":8000,"playableDurationMillis":20000,"uri":"x","rate":1.0}"#,
        )
        .unwrap();
        assert_eq!(status, PlaybackStatus::new(true, 8000, 20000));

        let partial: PlaybackStatus = serde_json::from_str(r#"{"positionMillis":100}"#).unwrap();
        assert_eq!(partial.is_playing, None);
        assert_eq!(partial.playable_duration_millis, None);
    }
}
