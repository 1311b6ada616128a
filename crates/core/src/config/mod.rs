use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{playback::DEFAULT_SPEED_MS, step::Value, Result, VisualiserError};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub playback: PlaybackConfig,
    pub input: InputConfig,
    pub initial: InitialData,
}

impl AppConfig {
    /// Reads a JSON configuration file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.playback.speed_ms == 0 {
            return Err(VisualiserError::invalid("playback.speed_ms must be positive"));
        }
        if self.input.max_len == 0 {
            return Err(VisualiserError::invalid("input.max_len must be positive"));
        }
        if self.input.random_len == 0 {
            return Err(VisualiserError::invalid("input.random_len must be positive"));
        }
        if self.input.random_max < 1 {
            return Err(VisualiserError::invalid("input.random_max must be at least 1"));
        }
        Ok(())
    }
}

/// Configuration specific to step playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub speed_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

/// Limits applied to user supplied and randomly generated arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub max_len: usize,
    pub random_len: usize,
    pub random_max: Value,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_len: 15,
            random_len: 9,
            random_max: 99,
        }
    }
}

/// Data shown before the user enters anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialData {
    pub array: Vec<Value>,
    pub target: Option<Value>,
}

impl Default for InitialData {
    fn default() -> Self {
        let data = crate::registry::LINEAR_SEARCH.initial_data();
        Self {
            array: data.array,
            target: data.target,
        }
    }
}
