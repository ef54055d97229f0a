//! Error types for transport control

use thiserror::Error;

/// Transport errors
///
/// The projector and controller never fail. These variants only cover
/// the edges: a playback engine rejecting a command, and bad configuration.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Playback engine rejected or failed a command
    #[error("Playback engine error: {0}")]
    Engine(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;
