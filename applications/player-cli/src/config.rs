/// Player configuration
use crate::error::{PlayerError, Result};
use frame_transport::{TransportConfig, Viewport};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "frame-player.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default)]
    pub simulation: SimulationSettings,

    #[serde(default)]
    pub viewport: Viewport,

    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_looping")]
    pub looping: bool,

    #[serde(default)]
    pub autoplay: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationSettings {
    /// Interval between engine status pushes
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Length of the simulated media
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Time before the engine learns the duration
    #[serde(default = "default_metadata_delay_ms")]
    pub metadata_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderSettings {
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl PlayerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `frame-player.toml` in the
    /// working directory is used if present. `FRAME_`-prefixed variables
    /// override both, e.g. `FRAME_TRANSPORT__STEP_MILLIS=10000`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("FRAME")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| PlayerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| PlayerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.transport.validate()?;

        if self.source.uri.is_empty() {
            return Err(PlayerError::Config("source.uri is required".to_string()));
        }

        if self.simulation.tick_ms == 0 {
            return Err(PlayerError::Config(
                "simulation.tick_ms must be greater than zero".to_string(),
            ));
        }

        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 || self.viewport.scale <= 0.0 {
            return Err(PlayerError::Config(format!(
                "viewport must be positive, got {}x{} @{}",
                self.viewport.width, self.viewport.height, self.viewport.scale
            )));
        }

        Ok(())
    }
}

// Default values
fn default_uri() -> String {
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4"
        .to_string()
}

fn default_looping() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    250
}

fn default_duration_ms() -> u64 {
    596_000
}

fn default_metadata_delay_ms() -> u64 {
    500
}

fn default_bar_width() -> usize {
    40
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            looping: default_looping(),
            autoplay: false,
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            duration_ms: default_duration_ms(),
            metadata_delay_ms: default_metadata_delay_ms(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
        }
    }
}
