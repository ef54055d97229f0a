//! Player event loop
//!
//! One task owns the session. Engine ticks and button presses arrive on the
//! same loop and are handled one at a time; readers observe the screen via a
//! watch channel, which only ever holds the latest complete snapshot.

use crate::{
    config::PlayerConfig,
    engine::SimulatedEngine,
    error::{PlayerError, Result},
    script::ScriptStep,
};
use frame_transport::{PlayerSession, ScreenState, TransportIntent};
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Capacity of the press channel
const PRESS_BUFFER: usize = 32;

pub struct PlayerRuntime {
    session: PlayerSession<SimulatedEngine>,
    tick: Duration,
    state_tx: watch::Sender<ScreenState>,
    presses: mpsc::Receiver<TransportIntent>,
}

/// Handles returned alongside a runtime
pub struct RuntimeHandles {
    pub presses: mpsc::Sender<TransportIntent>,
    pub screen: watch::Receiver<ScreenState>,
}

impl PlayerRuntime {
    pub fn new(config: &PlayerConfig) -> Result<(Self, RuntimeHandles)> {
        config.validate()?;

        let engine = SimulatedEngine::new(&config.source, &config.simulation);
        let session = PlayerSession::with_config(engine, &config.transport);
        let (state_tx, screen) = watch::channel(session.state());
        let (presses, press_rx) = mpsc::channel(PRESS_BUFFER);

        let runtime = Self {
            session,
            tick: Duration::from_millis(config.simulation.tick_ms),
            state_tx,
            presses: press_rx,
        };

        Ok((runtime, RuntimeHandles { presses, screen }))
    }

    pub fn session(&self) -> &PlayerSession<SimulatedEngine> {
        &self.session
    }

    /// Run until every press sender is dropped
    ///
    /// Returns the session so callers can inspect the final engine state.
    pub async fn run(mut self) -> Result<PlayerSession<SimulatedEngine>> {
        tracing::info!(uri = %self.session.engine().uri(), "Player started");

        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let status = self.session.engine_mut().tick(self.tick);
                    self.session.on_status(status);
                    self.publish();
                }
                press = self.presses.recv() => {
                    let Some(intent) = press else {
                        break;
                    };
                    match self.session.press(intent) {
                        Some(command) => tracing::info!(?intent, ?command, "Button pressed"),
                        None => tracing::info!(?intent, "Button pressed, nothing to do yet"),
                    }
                }
            }
        }

        tracing::info!("Player stopped");
        Ok(self.session)
    }

    fn publish(&self) {
        // Replace wholesale; receivers only ever see complete snapshots
        self.state_tx.send_replace(self.session.state());
    }
}

/// Feed a parsed press script into the runtime, then hang up
pub async fn feed_script(
    steps: Vec<ScriptStep>,
    presses: mpsc::Sender<TransportIntent>,
) -> Result<()> {
    for step in steps {
        match step {
            ScriptStep::Wait(duration) => tokio::time::sleep(duration).await,
            ScriptStep::Press(intent) => presses
                .send(intent)
                .await
                .map_err(|_| PlayerError::ChannelClosed)?,
        }
    }
    Ok(())
}
