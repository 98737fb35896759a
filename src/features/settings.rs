//! Application settings
//!
//! Read once at startup from a JSON file in the user's config directory.
//! Every section is optional; a missing file means defaults, while a file
//! that exists but cannot be read or parsed is reported to the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;
use super::content::{Labels, StageTable};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Window and motion settings
    pub display: DisplaySettings,
    /// Per-stage image, message and background
    pub content: StageTable,
    /// Button and footer text
    pub labels: Labels,
    /// Heart shower shown after a "yes"
    pub celebration: CelebrationSettings,
    /// Keyboard shortcuts
    pub keybindings: KeyBindings,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Turn off the continuous float/bounce motion; stage fades still run
    pub reduce_motion: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            window_width: 560.0,
            window_height: 900.0,
        }
    }
}

/// Celebration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationSettings {
    /// Number of hearts in the shower
    pub particle_count: usize,
}

impl Default for CelebrationSettings {
    fn default() -> Self {
        Self { particle_count: 20 }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "milktea", "milk-tea-pup")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default file
    ///
    /// On first run the defaults are written out so there is a file to edit.
    pub fn load() -> Result<Self, SettingsError> {
        let Some(path) = Self::file_path() else {
            tracing::warn!("No config directory, using default settings");
            return Ok(Self::default());
        };

        if path.exists() {
            tracing::info!("Loading settings from {}", path.display());
            return Self::load_from_file(&path);
        }

        let settings = Self::default();
        match settings.save_to_file(&path) {
            Ok(()) => tracing::info!("Wrote default settings to {}", path.display()),
            Err(e) => tracing::warn!("Failed to write default settings: {}", e),
        }
        Ok(settings)
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
