//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CuetrackResult;

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Subtitle parsing defaults.
    pub parser: ParserDefaults,

    /// Playback / caption display defaults.
    pub playback: PlaybackDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default SRT parsing behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserDefaults {
    /// Fail on the first malformed timecode instead of skipping the block.
    pub strict: bool,

    /// Token used to join the lines of a multi-line caption.
    pub line_break: String,

    /// Drop cues whose start and end are identical.
    pub reject_zero_length: bool,
}

/// Default caption display behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackDefaults {
    /// Rate of simulated time-update events (Hz).
    pub tick_hz: u32,

    /// Whether captions are shown as soon as a track is loaded.
    pub auto_enable: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "cuetrack_engine=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for ParserDefaults {
    fn default() -> Self {
        Self {
            strict: false,
            line_break: "<br />".to_string(),
            reject_zero_length: false,
        }
    }
}

impl Default for PlaybackDefaults {
    fn default() -> Self {
        Self {
            tick_hz: 4,
            auto_enable: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match Self::from_json(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Parse a config document. Missing sections take their defaults.
    pub fn from_json(content: &str) -> CuetrackResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("cuetrack").join("config.json")
}
