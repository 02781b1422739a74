//! Configuration management for planseed
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (PLANSEED_*)
//! 3. Config file (~/.config/planseed/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::issue::Priority;
use crate::{Error, Result};

/// Plan parsing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Priority applied to items without a `[P<n>]` tag
    pub default_priority: Priority,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::default(),
        }
    }
}

/// External tracker configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Tracker binary name used for command-format output
    pub bin: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            bin: "bd".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Plan parsing configuration
    pub plan: PlanConfig,
    /// Tracker configuration
    pub tracker: TrackerConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/planseed/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("planseed").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - PLANSEED_DEFAULT_PRIORITY: default priority for untagged items (1-3)
    /// - PLANSEED_TRACKER_BIN: tracker binary name
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(value) = std::env::var("PLANSEED_DEFAULT_PRIORITY") {
            self.plan.default_priority = parse_priority(&value)?;
        }

        if let Ok(bin) = std::env::var("PLANSEED_TRACKER_BIN") {
            self.tracker.bin = bin;
        }

        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        default_priority: Option<u8>,
        tracker_bin: Option<String>,
    ) -> Result<Self> {
        if let Some(value) = default_priority {
            self.plan.default_priority = Priority::new(value)
                .ok_or_else(|| Error::Config(format!("default priority must be 1-3, got {}", value)))?;
        }

        if let Some(bin) = tracker_bin {
            self.tracker.bin = bin;
        }

        Ok(self)
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        default_priority: Option<u8>,
        tracker_bin: Option<String>,
    ) -> Result<Self> {
        Self::load()?
            .with_env_overrides()?
            .with_cli_overrides(default_priority, tracker_bin)
    }
}

fn parse_priority(value: &str) -> Result<Priority> {
    value
        .parse::<u8>()
        .ok()
        .and_then(Priority::new)
        .ok_or_else(|| Error::Config(format!("default priority must be 1-3, got '{}'", value)))
}
