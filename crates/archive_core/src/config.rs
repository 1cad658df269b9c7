//! Runtime configuration for the archive core.
//!
//! # Responsibility
//! - Carry the record table location, image root and map settings.
//! - Apply the single supported environment override (`MAPBOX_API_KEY`).
//!
//! # Invariants
//! - `data_path` is never empty after `validate()` succeeds.
//! - Config values are plain data; nothing here touches the filesystem.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Default relative location of the record table.
pub const DEFAULT_DATA_PATH: &str = "data/architecture_data.csv";
/// Default base map style handed to the map collaborator.
pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/light-v9";
/// Environment variable holding the optional map provider key.
pub const MAPBOX_API_KEY_ENV: &str = "MAPBOX_API_KEY";

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDataPath,
    EmptyMapStyle,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDataPath => f.write_str("data_path cannot be empty"),
            Self::EmptyMapStyle => f.write_str("map style cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

/// Settings forwarded to the map rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSettings {
    pub style: String,
    /// Provider token; `None` leaves the collaborator on its own default.
    pub api_key: Option<String>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            style: DEFAULT_MAP_STYLE.to_string(),
            api_key: None,
        }
    }
}

impl MapSettings {
    /// Fills `api_key` from `MAPBOX_API_KEY` when set and non-blank.
    pub fn with_api_key_from_env(mut self) -> Self {
        if let Ok(raw) = std::env::var(MAPBOX_API_KEY_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.api_key = Some(trimmed.to_string());
            }
        }
        self
    }
}

/// Top-level archive configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub data_path: PathBuf,
    /// Base directory for relative image paths; working directory when unset.
    pub image_root: Option<PathBuf>,
    pub map: MapSettings,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            image_root: None,
            map: MapSettings::default(),
        }
    }
}

impl ArchiveConfig {
    /// Default config with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.map = config.map.with_api_key_from_env();
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataPath);
        }
        if self.map.style.trim().is_empty() {
            return Err(ConfigError::EmptyMapStyle);
        }
        Ok(())
    }
}
