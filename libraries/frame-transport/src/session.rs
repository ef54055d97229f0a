//! Player session - explicit screen state and event handling
//!
//! Holds the latest projected status and drives the engine from presses.
//! The state is replaced wholesale on every status event and never mutated
//! in place, so handing a copy to a reader is always a consistent snapshot.

use crate::{
    controller::TransportController,
    engine::PlaybackEngine,
    events::SessionEvent,
    status::{project, PlaybackStatus, ProjectedStatus},
    types::{PlaybackCommand, TransportConfig, TransportIntent},
};

/// Everything the screen draws from
pub type ScreenState = ProjectedStatus;

impl ProjectedStatus {
    /// Reduce one event into the next state and the command it triggers
    ///
    /// Status events replace the state and issue nothing. Presses leave the
    /// state untouched and issue at most one command.
    pub fn apply(
        &self,
        controller: &TransportController,
        event: &SessionEvent,
    ) -> (ScreenState, Option<PlaybackCommand>) {
        match *event {
            SessionEvent::StatusUpdate(status) => (project(status), None),
            SessionEvent::Press(intent) => (*self, controller.command_for(intent, &self.status)),
        }
    }
}

/// Binds a playback engine to the transport controls
///
/// Single-threaded: status events and presses are handled one at a time in
/// arrival order. Presses are not queued or coalesced.
pub struct PlayerSession<E: PlaybackEngine> {
    engine: E,
    controller: TransportController,
    state: ScreenState,
}

impl<E: PlaybackEngine> PlayerSession<E> {
    /// Create a session with the default step
    pub fn new(engine: E) -> Self {
        Self::with_controller(engine, TransportController::default())
    }

    /// Create a session from configuration
    pub fn with_config(engine: E, config: &TransportConfig) -> Self {
        Self::with_controller(engine, TransportController::from_config(config))
    }

    /// Create a session with an explicit controller
    pub fn with_controller(engine: E, controller: TransportController) -> Self {
        Self {
            engine,
            controller,
            state: ScreenState::default(),
        }
    }

    /// Handle one inbound event
    ///
    /// Returns the command issued to the engine, if any. Engine failures are
    /// logged and swallowed; the next status event tells the real story.
    pub fn handle(&mut self, event: SessionEvent) -> Option<PlaybackCommand> {
        let (next, command) = self.state.apply(&self.controller, &event);

        if let SessionEvent::StatusUpdate(status) = event {
            tracing::trace!(
                position_ms = ?status.position_millis,
                duration_ms = ?status.playable_duration_millis,
                fraction = next.fraction.value(),
                "Status update"
            );
        }
        self.state = next;

        let command = command?;
        tracing::debug!(?command, "Issuing playback command");
        if let Err(e) = self.engine.dispatch(&command) {
            tracing::warn!("Playback engine rejected {:?}: {}", command, e);
        }
        Some(command)
    }

    /// Apply a status snapshot from the engine
    pub fn on_status(&mut self, status: PlaybackStatus) {
        self.handle(SessionEvent::StatusUpdate(status));
    }

    /// Handle a button press against the latest known status
    pub fn press(&mut self, intent: TransportIntent) -> Option<PlaybackCommand> {
        let command = self.handle(SessionEvent::Press(intent));
        if command.is_none() {
            tracing::debug!(?intent, "Press ignored, status incomplete");
        }
        command
    }

    /// Current screen state
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Controller in use
    pub fn controller(&self) -> &TransportController {
        &self.controller
    }

    /// Borrow the engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably borrow the engine
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Tear down the session, returning the engine
    pub fn into_engine(self) -> E {
        self.engine
    }
}
