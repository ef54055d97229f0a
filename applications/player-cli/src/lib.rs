//! Frame Player - headless host
//!
//! Runs the transport controls against a simulated playback engine and
//! renders the screen as text.

pub mod config;
pub mod engine;
pub mod error;
pub mod render;
pub mod runtime;
pub mod script;

pub use config::PlayerConfig;
pub use engine::SimulatedEngine;
pub use error::{PlayerError, Result};
pub use runtime::{feed_script, PlayerRuntime, RuntimeHandles};
