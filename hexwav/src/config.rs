//! Configuration for the hexwav command-line tool
//!
//! Bootstrap-only TOML configuration; nothing here changes during a run.
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (`--config`, `--log-level`)
//! 2. Environment variables (`HEXWAV_CONFIG`, `RUST_LOG`)
//! 3. TOML configuration file (`<config dir>/hexwav/config.toml`)
//! 4. Built-in defaults
//!
//! ```toml
//! [logging]
//! level = "debug"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::Level;

use crate::error::{Error, Result};

/// Configuration loaded from TOML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl LoggingConfig {
    /// Level to run with: the command-line override wins over the file
    pub fn effective_level<'a>(&'a self, cli_override: Option<&'a str>) -> &'a str {
        cli_override.unwrap_or(self.level.as_str())
    }
}

impl TomlConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: TomlConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;

        config.logging.level.parse::<Level>().map_err(|_| {
            Error::Config(format!(
                "invalid log level '{}' in {}",
                config.logging.level,
                path.display()
            ))
        })?;

        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicitly named file must load; the per-user default file is only
    /// read when it exists. Without either, built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Per-user configuration file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hexwav").join("config.toml"))
}
