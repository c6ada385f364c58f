//! Configuration management for cloudpilot
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/cloudpilot/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{CloudpilotError, Result};

/// Main configuration shared by both binaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Azure CLI invocation settings
    pub az: AzConfig,
    /// Browser automation settings
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Azure CLI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzConfig {
    /// Executable to invoke (default: az, must be on PATH)
    pub program: String,
    /// Wall-clock bound for one invocation, in seconds
    pub timeout_secs: u64,
}

/// Browser automation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether to run with a visible window instead of headless
    pub headed: bool,
    /// Viewport width in pixels
    pub window_width: u32,
    /// Viewport height in pixels
    pub window_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            az: AzConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}

impl Default for AzConfig {
    fn default() -> Self {
        Self {
            program: env::var("CLOUDPILOT_AZ_PROGRAM").unwrap_or_else(|_| "az".to_string()),
            timeout_secs: env::var("CLOUDPILOT_AZ_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headed: env::var("CLOUDPILOT_BROWSER_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            window_width: 1280,
            window_height: 720,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cloudpilot")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(CloudpilotError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| CloudpilotError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CloudpilotError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|e| {
                CloudpilotError::config(format!("Failed to create config dir: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CloudpilotError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| CloudpilotError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}
