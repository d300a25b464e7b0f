//! Configuration loading and config file resolution
//!
//! Config file resolution priority order:
//! 1. `ARTPIPE_CONFIG` environment variable
//! 2. `<user config dir>/artpipe/config.toml`
//! 3. Compiled defaults (fallback)
//!
//! A missing or broken file never aborts a tool; it falls back to defaults
//! and records a warning for the caller to log once tracing is up.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::seed::DEFAULT_SEED_TAGS;
use crate::{Error, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "ARTPIPE_CONFIG";

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
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

/// Seed tool section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Extra articles merged into generated ones; defaults to
    /// `articles.extra.json` next to the output file
    #[serde(default)]
    pub extra_file: Option<PathBuf>,

    /// Tags attached to generated articles
    #[serde(default = "default_seed_tags")]
    pub tags: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            extra_file: None,
            tags: default_seed_tags(),
        }
    }
}

/// Top-level TOML configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_seed_tags() -> Vec<String> {
    DEFAULT_SEED_TAGS.iter().map(|t| t.to_string()).collect()
}

/// Outcome of config resolution
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    /// File the config was read from, if any
    pub path: Option<PathBuf>,
    /// Why defaults were used despite a candidate file
    pub warning: Option<String>,
}

impl LoadedConfig {
    /// Report where configuration came from (call after tracing init)
    pub fn log_outcome(&self) {
        if let Some(warning) = &self.warning {
            warn!("{} (using defaults)", warning);
        }
        match &self.path {
            Some(path) => info!("Configuration loaded from {}", path.display()),
            None => info!("Using compiled default configuration"),
        }
    }
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Locate the config file following the priority order
///
/// The environment variable wins even when the file it names is missing,
/// so the load attempt can report it.
pub fn resolve_config_path() -> Option<PathBuf> {
    // Priority 1: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 2: User config directory
    dirs::config_dir()
        .map(|d| d.join("artpipe").join("config.toml"))
        .filter(|p| p.exists())
}

/// Resolve and load configuration, degrading to defaults on any failure
pub fn load_or_default() -> LoadedConfig {
    let Some(path) = resolve_config_path() else {
        return LoadedConfig {
            config: TomlConfig::default(),
            path: None,
            warning: None,
        };
    };

    match load_toml_config(&path) {
        Ok(config) => LoadedConfig {
            config,
            path: Some(path),
            warning: None,
        },
        Err(e) => LoadedConfig {
            config: TomlConfig::default(),
            path: None,
            warning: Some(e.to_string()),
        },
    }
}
