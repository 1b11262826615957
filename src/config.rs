//! Configuration management for sharpness analysis
//!
//! Provides loading, saving, and validation of the tunable classification
//! thresholds. The analysis core itself is pure; configuration only feeds
//! the classifier.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tunable thresholds for the sharp / motion / defocus decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum orientation score for a frame to count as sharp.
    /// Every one of the four scores must strictly exceed it.
    pub sharpness_threshold: f64,

    /// Relative score spread `(max - min) / max` above which a non-sharp
    /// frame is classified as motion blur rather than defocus blur.
    pub motion_spread_ratio: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sharpness_threshold: 100.0,
            motion_spread_ratio: 0.5,
        }
    }
}

/// Configuration error types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConfigError {
    /// File could not be read or written
    Io(String),
    /// TOML contents could not be parsed
    Parse(String),
    /// Configuration could not be serialized
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Config serialize error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config file: {}", e)))?;

        let config: AnalysisConfig = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config file: {}", e)))?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Io(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("sharpgate.toml")
    }

    /// Load from default location or create with defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !self.sharpness_threshold.is_finite() || self.sharpness_threshold <= 0.0 {
            return Err("Sharpness threshold must be a positive finite number".to_string());
        }
        if !self.motion_spread_ratio.is_finite()
            || self.motion_spread_ratio <= 0.0
            || self.motion_spread_ratio >= 1.0
        {
            return Err("Motion spread ratio must be strictly between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}
