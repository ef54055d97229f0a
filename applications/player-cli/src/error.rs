/// Player error types
use frame_transport::TransportError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlayerError>;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid press script: {0}")]
    Script(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Press channel closed")]
    ChannelClosed,

    #[error("Invalid status JSON: {0}")]
    Status(#[from] serde_json::Error),
}
