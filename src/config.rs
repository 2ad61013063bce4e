//! Persisted user preferences.
//!
//! A single JSON file under the platform config directory. Currently it
//! only records whether the user opted into the full desktop on a
//! too-small terminal, so the notice is not shown again next launch.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("could not read preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse preferences: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicePreferences {
    /// Keep the full desktop even when the terminal is smaller than the
    /// designed minimum.
    #[serde(default)]
    pub prefer_desktop: bool,
}

impl DevicePreferences {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("termfolio").join("preferences.json"))
    }

    /// Load from `path`; a missing file is the default preferences, not
    /// an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "preferences saved");
        Ok(())
    }
}
