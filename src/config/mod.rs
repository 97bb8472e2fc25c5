//! User configuration for the generator.
//!
//! An optional TOML file tunes discovery:
//!
//! ```toml
//! # ~/.vcatalog/config.toml
//! max-depth = 3
//! exclude-dirs = ["buildSrc", "node_modules"]
//! ```
//!
//! **Location:** `--config <FILE>` (or `VCATALOG_CONFIG`) when given, otherwise
//! `~/.vcatalog/config.toml` (`%LOCALAPPDATA%\vcatalog\config.toml` on Windows).
//! A missing default file means built-in defaults; an explicit file must exist.
//!
//! Command-line flags override values from the file.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_MAX_DEPTH};
use crate::core::CatalogError;
use crate::utils::fs::DiscoveryOptions;
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Settings read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Deepest directory scanned for build scripts; the project root is depth 0
    pub max_depth: usize,
    /// Directory names never descended into
    pub exclude_dirs: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            exclude_dirs: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load from `explicit` when given, otherwise from the default location.
    ///
    /// # Errors
    ///
    /// [`CatalogError::ConfigError`] when the explicit file is missing, or any
    /// file that exists cannot be read or decoded.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CatalogError::ConfigError {
                    message: format!("Configuration file not found: {}", path.display()),
                }
                .into());
            }
            return Self::load_from(path).await;
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path).await,
            _ => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| CatalogError::ConfigError {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| CatalogError::ConfigError {
            message: format!("Failed to parse {}: {}", path.display(), e.message()),
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// `~/.vcatalog/config.toml`, or the local data directory on Windows.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()?.join(CONFIG_DIR_NAME.trim_start_matches('.'))
        } else {
            dirs::home_dir()?.join(CONFIG_DIR_NAME)
        };
        Some(config_dir.join(CONFIG_FILE_NAME))
    }

    /// Discovery bounds, with `max_depth` taking precedence over the file value.
    #[must_use]
    pub fn discovery_options(&self, max_depth: Option<usize>) -> DiscoveryOptions {
        DiscoveryOptions {
            max_depth: max_depth.unwrap_or(self.max_depth),
            exclude_dirs: self.exclude_dirs.clone(),
        }
    }
}
