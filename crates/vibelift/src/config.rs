//! User configuration file support for vibelift.
//!
//! Loads configuration from `vibelift.toml`, either the path given with
//! `--config` or `<config dir>/vibelift/vibelift.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use vibelift_logging::LogFormat;
use vibelift_sessions::{default_split, DayConfig};

/// User-level configuration loaded from `vibelift.toml`
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// History file location (default: data dir)
    pub data_file: Option<PathBuf>,
    /// Weight unit shown next to numbers
    pub unit: Option<String>,
    /// Default tracing level
    pub log_level: Option<String>,
    /// Default log format
    pub log_format: Option<LogFormat>,
    /// Also write JSON logs to this file
    pub log_file: Option<PathBuf>,
    /// Replaces the built-in training split when non-empty
    #[serde(default)]
    pub days: Vec<DayConfig>,
}

/// The config file name
pub const CONFIG_FILE_NAME: &str = "vibelift.toml";

impl Config {
    /// Load configuration.
    ///
    /// Returns:
    /// - `Ok(config)` parsed from an explicit path, which must exist
    /// - `Ok(Config::default())` if the default file does not exist
    /// - `Err(...)` if a file exists but fails to parse (hard error)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;

        let mut seen = std::collections::HashSet::new();
        for day in &config.days {
            if !seen.insert(day.id) {
                anyhow::bail!("Duplicate day id {} in [[days]]", day.id);
            }
            if day.pool.is_empty() {
                anyhow::bail!("Day {} has an empty exercise pool", day.id);
            }
        }

        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("vibelift").join(CONFIG_FILE_NAME))
    }

    /// Get the effective unit label.
    pub fn unit(&self) -> &str {
        self.unit.as_deref().unwrap_or("lbs")
    }

    /// Get the effective training split.
    /// Priority: [[days]] > built-in split
    pub fn split(&self) -> Vec<DayConfig> {
        if self.days.is_empty() {
            default_split()
        } else {
            self.days.clone()
        }
    }
}
