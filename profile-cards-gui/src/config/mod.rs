use std::{fs, io, path::Path};

use profile_cards_lib::fs::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Presentation preferences for the GUI, serialized to TOML.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuiConfig {
    #[serde(default)]
    pub theme: Theme,
}

impl GuiConfig {
    /// Load `gui.toml` from the configuration directory, writing the defaults there if it doesn't
    /// exist yet. Any failure falls back to the defaults.
    pub fn load() -> Self {
        match config_dir() {
            Ok(dir) => Self::load_from(&dir.join(FILE_NAME)),
            Err(e) => {
                warn!("No configuration directory available, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            let cfg = Self::default();
            if let Err(e) = cfg.save_to(path) {
                warn!("Failed to write default config to {}: {e}", path.display());
            }
            return cfg;
        }

        match Self::read(path) {
            Ok(cfg) => {
                debug!("Loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("Ignoring invalid config at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Read and parse an existing config file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let contents = toml::to_string_pretty(self).map_err(io::Error::other)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}
