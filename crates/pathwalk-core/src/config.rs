use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::segment::LineSegment;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0:?} (expected .toml or .json)")]
    UnsupportedFormat(String),
    #[error("step_factor must be finite and non-negative, got {0}")]
    InvalidStepFactor(f32),
    #[error("tick_rate must be finite and positive, got {0}")]
    InvalidTickRate(f32),
    #[error("segment {index} has non-finite coordinates")]
    InvalidSegment { index: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Coordinate units per second along x.
    pub step_factor: f32,
    pub draw_debug: bool,
    pub segments: Vec<LineSegment>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            step_factor: 1.0,
            draw_debug: false,
            segments: Vec::new(),
        }
    }
}

impl WalkerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_factor.is_finite() || self.step_factor < 0.0 {
            return Err(ConfigError::InvalidStepFactor(self.step_factor));
        }
        if let Some(index) = self.segments.iter().position(|s| !s.is_finite()) {
            return Err(ConfigError::InvalidSegment { index });
        }
        Ok(())
    }
}

/// Top-level file layout for the driver binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub walker: WalkerConfig,
    /// Fixed ticks per second of the driver loop.
    pub tick_rate: f32,
    pub ticks: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            walker: WalkerConfig::default(),
            tick_rate: 60.0,
            ticks: 600,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }
        self.walker.validate()
    }

    pub fn delta_time(&self) -> f32 {
        if self.tick_rate > 0.0 {
            1.0 / self.tick_rate
        } else {
            0.0
        }
    }
}

/// Load an [`AppConfig`], picking the parser from the file extension.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "toml" => AppConfig::from_toml_str(&fs::read_to_string(path)?),
        "json" => AppConfig::from_json_str(&fs::read_to_string(path)?),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}
