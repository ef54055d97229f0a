//! Frame Player - Transport Controls
//!
//! Platform-agnostic glue between a native video engine and the player
//! screen.
//!
//! This crate provides:
//! - Status projection (engine telemetry to a [0, 1] progress fraction)
//! - Transport controller (rewind, step back/forward, play/pause, fullscreen)
//! - Seek clamping to the playable range
//! - An explicit screen state and single-threaded session
//! - Control labels and responsive layout metrics
//!
//! # Architecture
//!
//! `frame-transport` never talks to a real video component. The engine is
//! supplied through the [`PlaybackEngine`] trait; status snapshots are fed
//! in as they arrive.
//!
//! # Example
//!
//! ```rust
//! use frame_transport::{
//!     PlaybackCommand, PlaybackEngine, PlaybackStatus, PlayerSession, Result, TransportIntent,
//! };
//!
//! #[derive(Default)]
//! struct Log(Vec<PlaybackCommand>);
//!
//! impl PlaybackEngine for Log {
//!     fn seek(&mut self, position_millis: u64) -> Result<()> {
//!         self.0.push(PlaybackCommand::Seek { position_millis });
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         self.0.push(PlaybackCommand::Play);
//!         Ok(())
//!     }
//!     fn pause(&mut self) -> Result<()> {
//!         self.0.push(PlaybackCommand::Pause);
//!         Ok(())
//!     }
//!     fn present_fullscreen(&mut self) -> Result<()> {
//!         self.0.push(PlaybackCommand::PresentFullscreen);
//!         Ok(())
//!     }
//! }
//!
//! let mut session = PlayerSession::new(Log::default());
//! session.on_status(PlaybackStatus::new(true, 9000, 10000));
//! assert_eq!(session.state().fraction.value(), 0.9);
//!
//! // Forward is clamped to the end of the media
//! session.press(TransportIntent::StepForward);
//! assert_eq!(
//!     session.engine().0,
//!     vec![PlaybackCommand::Seek { position_millis: 10000 }]
//! );
//! ```

mod controller;
mod controls;
mod engine;
mod error;
mod events;
pub mod layout;
mod session;
mod status;
pub mod types;

// Public exports
pub use controller::TransportController;
pub use controls::{ControlButton, ControlRow};
pub use engine::PlaybackEngine;
pub use error::{Result, TransportError};
pub use events::SessionEvent;
pub use layout::{ProgressSplit, ScreenLayout, Viewport};
pub use session::{PlayerSession, ScreenState};
pub use status::{project, PlaybackStatus, ProgressFraction, ProjectedStatus};
pub use types::{PlaybackCommand, TransportConfig, TransportIntent, DEFAULT_STEP_MILLIS};
