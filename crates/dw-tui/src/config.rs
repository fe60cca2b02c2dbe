//! Configuration for a TUI session.
//!
//! Values come from defaults, then an optional TOML file, then command-line
//! flags, each layer overriding the last:
//!
//! ```toml
//! seed = 7
//! start_tab = "companion"
//! dice = 2
//! roll_ms = 800
//! reveal_ms = 500
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use dw_dice::DiceSelection;

use crate::tabs::TabId;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Allowed roll transition lengths in milliseconds.
const ROLL_MS_RANGE: (u64, u64) = (100, 5_000);

/// Longest reveal transition in milliseconds.
const MAX_REVEAL_MS: u64 = 5_000;

/// Allowed event loop tick lengths in milliseconds.
const TICK_MS_RANGE: (u64, u64) = (10, 1_000);

/// Settings for the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// RNG seed for the dice; entropy when unset.
    pub seed: Option<u64>,
    /// Tab shown on launch.
    pub start_tab: TabId,
    /// Dice shown on launch.
    pub dice: DiceSelection,
    /// Length of the dice rolling transition.
    pub roll_ms: u64,
    /// Length of the recommendation fade-in.
    pub reveal_ms: u64,
    /// How often the event loop wakes to advance transitions.
    pub tick_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_tab: TabId::Dice,
            dice: DiceSelection::One,
            roll_ms: 800,
            reveal_ms: 500,
            tick_ms: 50,
        }
    }
}

impl TuiConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting tab.
    pub fn with_tab(mut self, tab: TabId) -> Self {
        self.start_tab = tab;
        self
    }

    /// Set the starting dice selection.
    pub fn with_dice(mut self, dice: DiceSelection) -> Self {
        self.dice = dice;
        self
    }

    /// Rolling transition length (clamped to 100-5000 ms).
    pub fn roll_duration(&self) -> Duration {
        Duration::from_millis(self.roll_ms.clamp(ROLL_MS_RANGE.0, ROLL_MS_RANGE.1))
    }

    /// Reveal transition length (at most 5000 ms).
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_ms.min(MAX_REVEAL_MS))
    }

    /// Event loop tick (clamped to 10-1000 ms).
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.clamp(TICK_MS_RANGE.0, TICK_MS_RANGE.1))
    }
}
