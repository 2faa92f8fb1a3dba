//! Engine settings surfaced by the debug overlay.
//!
//! The HUD never reaches for globals; the panels get a shared handle to
//! this struct and read/write it through suppliers and consumers.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const DEFAULT_SETTINGS_PATH: &str = "config/settings.toml";

/// Renderer-side settings the debug panel exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsSettings {
    /// Whether chunk frustum culling is enabled.
    pub frustum_culling: bool,
    /// Fog distance factor (0.0 = off).
    pub fog: f64,
}

impl Default for GraphicsSettings {
    fn default() -> Self {
        Self {
            frustum_culling: true,
            fog: 0.0,
        }
    }
}

/// Debug visualization flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    /// Draw chunk border outlines.
    pub show_chunk_borders: bool,
}

/// All settings the HUD layer binds to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Renderer-side settings.
    pub graphics: GraphicsSettings,
    /// Debug visualization flags.
    pub debug: DebugSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_SETTINGS_PATH))
    }

    /// Load settings from an explicit path, falling back to defaults on
    /// errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Settings>(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    Settings::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                Settings::default()
            }
        }
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(Path::new(DEFAULT_SETTINGS_PATH))
    }

    /// Save settings to an explicit path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        tracing::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
