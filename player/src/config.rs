use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;

/// Host-facing playback settings, loaded from an optional JSON file.
///
/// Every field has a default so a config file only needs to override
/// what it cares about; a missing file is not an error, the caller just
/// uses [`PlayerConfig::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub log_level: String,
    pub log_file: Option<String>,
    pub playback_speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            log_level: "info".to_string(),
            log_file: None,
            playback_speed: 1.0,
        }
    }
}

impl PlayerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: PlayerConfig = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }
}
