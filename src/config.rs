//! Configuration handling.
//!
//! Settings are read from a TOML file: the path given with `--config`, else
//! `clusterview.toml` in the working directory, else built-in defaults.
//! Command line flags override individual values afterwards.
//!
//! ```toml
//! [browser]
//! zoom = 1
//! name_type = "locus-tag"
//! max_gene_name_length = 8
//! include_suboptimal = false
//! context_genes = 2
//!
//! [ui]
//! fancy_glyphs = true
//! tick_rate_ms = 50
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::{DEFAULT_MAX_GENE_NAME_LENGTH, MAX_ZOOM};
use crate::model::NameType;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "clusterview.toml";

/// Errors that can occur while loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Initial zoom level
    #[serde(default)]
    pub zoom: u16,

    /// Label written into gene boxes
    #[serde(default)]
    pub name_type: NameType,

    /// Labels longer than this are cut
    #[serde(default = "default_max_gene_name_length")]
    pub max_gene_name_length: usize,

    /// Browse all occurrences instead of the optimal ones only
    #[serde(default)]
    pub include_suboptimal: bool,

    /// Genes shown on each side of the aligned cluster
    #[serde(default = "default_context_genes")]
    pub context_genes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Use Unicode arrows and chromosome symbols
    #[serde(default)]
    pub fancy_glyphs: bool,

    /// Event poll timeout
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_max_gene_name_length() -> usize { DEFAULT_MAX_GENE_NAME_LENGTH }
fn default_context_genes() -> usize { 2 }
fn default_tick_rate_ms() -> u64 { 50 }

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            zoom: 0,
            name_type: NameType::default(),
            max_gene_name_length: default_max_gene_name_length(),
            include_suboptimal: false,
            context_genes: default_context_genes(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fancy_glyphs: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from file or uses defaults.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)
                } else {
                    log::info!("Using default configuration");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Loads configuration from a specific TOML file.
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that the TOML types cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.browser.zoom > MAX_ZOOM {
            return Err(ConfigError::Invalid(format!(
                "browser.zoom must be at most {} (got {})",
                MAX_ZOOM, self.browser.zoom
            )));
        }
        if self.browser.max_gene_name_length == 0 {
            return Err(ConfigError::Invalid(
                "browser.max_gene_name_length must be at least 1".to_string(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("ui.tick_rate_ms must be positive".to_string()));
        }
        Ok(())
    }
}
