//! Game configuration: field size, avatar geometry, RNG seed and frame rate.
//!
//! Loaded from a JSON file. Every field has a default, so a partial file only
//! needs the values it changes.

use crate::avatar::AvatarGeometry;
use crate::core::constants::{
    DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_FRAME_RATE, MAX_FRAME_RATE,
    MIN_FIELD_HEIGHT,
};
use crate::core::geometry::Field;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: Field,
    pub avatar: AvatarGeometry,
    /// Seed for hole placement. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Animation frames per second delivered by the host.
    pub frame_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: Field::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT),
            avatar: AvatarGeometry::default(),
            seed: None,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl GameConfig {
    /// Default config file location for this platform.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "flappy").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load and validate a config file. A missing file is an error.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file at [`GameConfig::default_path`], falling back to defaults
    /// when it is absent or unusable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Write the config as pretty-printed JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    pub fn validate(&self) -> io::Result<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(invalid(format!("{name} must be a positive number, got {value}")))
            }
        };
        positive("field.width", self.field.width)?;
        positive("field.height", self.field.height)?;
        if self.field.height < MIN_FIELD_HEIGHT {
            return Err(invalid(format!(
                "field.height must be at least {MIN_FIELD_HEIGHT} to fit an obstacle hole, got {}",
                self.field.height
            )));
        }
        positive("avatar.width", self.avatar.width)?;
        positive("avatar.height", self.avatar.height)?;
        if !self.avatar.left.is_finite() {
            return Err(invalid(format!(
                "avatar.left must be finite, got {}",
                self.avatar.left
            )));
        }
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(invalid(format!(
                "frame_rate must be between 1 and {MAX_FRAME_RATE}, got {}",
                self.frame_rate
            )));
        }
        Ok(())
    }

    /// Time between animation frames at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
