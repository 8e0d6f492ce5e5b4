//! Configuration loading for the `tcm` binary
//!
//! Settings come from, in priority order:
//! 1. Command-line arguments
//! 2. Environment variables (`TCM_CONFIG`, `TCM_OUTPUT_DIR`)
//! 3. TOML configuration file
//! 4. Compiled defaults
//!
//! A missing configuration file at the platform default location is not an
//! error; compiled defaults apply.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "TCM_CONFIG";

/// Environment variable naming the catalogue output directory
pub const OUTPUT_DIR_ENV: &str = "TCM_OUTPUT_DIR";

/// Output directory used when nothing else is configured
pub const DEFAULT_OUTPUT_DIR: &str = "catalogues";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    /// Directory catalogues are written to
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
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
    "info".to_string()
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration.
    ///
    /// An explicit path (argument, then `TCM_CONFIG`) must exist and parse.
    /// Otherwise the platform default file is used when present, and compiled
    /// defaults when it is not.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        let explicit = cli_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = explicit {
            return Self::load_file(&path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the catalogue output directory.
    ///
    /// Priority: `cli_arg`, `TCM_OUTPUT_DIR`, TOML `output_dir`,
    /// [`DEFAULT_OUTPUT_DIR`].
    pub fn resolve_output_dir(&self, cli_arg: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_arg {
            return path.to_path_buf();
        }

        if let Some(path) = std::env::var_os(OUTPUT_DIR_ENV) {
            return PathBuf::from(path);
        }

        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

/// Platform configuration file location (`<config dir>/tcm/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tcm").join("config.toml"))
}
