//! App configuration for MoodBeats
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/moodbeats/config.yaml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the catalog's `songs/...` references are resolved against.
    pub songs_root: PathBuf,
    /// Where the playlist archive is written.
    pub export_dir: PathBuf,
    /// Volume on startup, 0.0..=1.0
    pub initial_volume: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            songs_root: PathBuf::from("."),
            export_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            initial_volume: 0.8,
        }
    }
}

/// Returns: ~/.config/moodbeats/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("moodbeats")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// Missing file -> defaults. Unreadable or invalid file -> warning + defaults.
pub fn load_config(path: &Path) -> AppConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return AppConfig::default();
    }

    let config = match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<AppConfig>(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                return AppConfig::default();
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read config file: {}, using defaults", e);
            return AppConfig::default();
        }
    };

    let initial_volume = if config.initial_volume.is_finite() {
        config.initial_volume.clamp(0.0, 1.0)
    } else {
        log::warn!("load_config: initial_volume is not a number, using default");
        AppConfig::default().initial_volume
    };
    let config = AppConfig {
        initial_volume,
        ..config
    };
    log::info!(
        "load_config: songs_root={:?} export_dir={:?} volume={:.2}",
        config.songs_root,
        config.export_dir,
        config.initial_volume
    );
    config
}
