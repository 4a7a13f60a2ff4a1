//! # Configuration Management Module
//!
//! Ambient settings for the `crawler` binary, stored as TOML. Game content (grid size,
//! enemy table, probabilities) is compiled in and deliberately absent here.
//!
//! ## Configuration Structure
//!
//! - [`LoggingConfig`] - log level and optional log file
//! - [`GameConfig`] - optional fixed seed for reproducible runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crawler::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Write a starter file, then read it back
//!     Config::create_default("crawler.toml")?;
//!     let config = Config::load("crawler.toml")?;
//!     println!("log level: {}", config.logging.level);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [logging]
//! level = "warn"
//! file = "crawler.log"
//!
//! [game]
//! seed = 42
//! ```
//!
//! Precedence: CLI flags > config file > defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub game: GameConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace. Unknown values fall back to warn.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append log lines here instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.trim().to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!("Invalid log level '{}', defaulting to warn", self.level);
                log::LevelFilter::Warn
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    /// Fixed RNG seed. Unset means a fresh seed every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
