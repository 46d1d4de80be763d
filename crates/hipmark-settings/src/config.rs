//! Configuration and settings management for HipMark
//!
//! Configuration is stored as pretty-printed JSON in the platform config
//! directory and is organized into two sections:
//! - View preferences (zoom limits and step, visibility of shapes and text)
//! - Session information (last working folder and image index)

use hipmark_core::constants::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Directory name created under the platform config directory.
const APP_DIR_NAME: &str = "hipmark";

/// File name of the configuration file.
const CONFIG_FILE_NAME: &str = "config.json";

/// View preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Lower zoom bound
    pub zoom_min: f64,
    /// Upper zoom bound
    pub zoom_max: f64,
    /// Zoom in/out multiplier
    pub zoom_step: f64,
    /// Whether annotation shapes are drawn at all
    pub show_shapes: bool,
    /// Whether shape labels are drawn
    pub show_text: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            show_shapes: true,
            show_text: true,
        }
    }
}

/// Where the user left off
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionInfo {
    /// Last opened image folder
    pub last_folder: Option<PathBuf>,
    /// Index of the last displayed image within that folder
    pub last_image_index: usize,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// View preferences
    pub view: ViewSettings,
    /// Last session
    pub session: SessionInfo,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the configuration file.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from a JSON file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config, falling back to defaults when the file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a JSON file, creating parent directories as needed
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let view = &self.view;

        if !(view.zoom_min > 0.0) {
            return Err(SettingsError::invalid("view.zoom_min", "must be > 0"));
        }

        if !(view.zoom_min <= 1.0 && view.zoom_max >= 1.0) {
            return Err(SettingsError::invalid(
                "view.zoom_max",
                "zoom range must include 1.0",
            ));
        }

        if !(view.zoom_step > 1.0) {
            return Err(SettingsError::invalid("view.zoom_step", "must be > 1"));
        }

        Ok(())
    }

    /// Record the folder and image the user is currently on.
    pub fn remember_session(&mut self, session: SessionInfo) {
        self.session = session;
    }
}
