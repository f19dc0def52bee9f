//! Settings loading utilities
//!
//! Resolves the settings file location and layers file, environment and
//! defaults into a validated [`Settings`].

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming an explicit settings file
pub const ENV_CONFIG: &str = "IPFS_PATCH_CONFIG";

/// Settings loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new settings loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Get the settings file path from IPFS_PATCH_CONFIG or the default location
    ///
    /// Priority:
    /// 1. IPFS_PATCH_CONFIG environment variable
    /// 2. ~/.config/ipfs-config-patcher/config.toml (or platform equivalent)
    pub fn get_config_path() -> Option<PathBuf> {
        if let Ok(config_path) = std::env::var(ENV_CONFIG) {
            let path = PathBuf::from(config_path);
            if path.exists() {
                debug!("Using settings file from {}: {:?}", ENV_CONFIG, path);
                return Some(path);
            } else {
                warn!("{} points to non-existent file: {:?}", ENV_CONFIG, path);
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("ipfs-config-patcher").join("config.toml");
            if default_path.exists() {
                debug!("Using default settings file: {:?}", default_path);
                return Some(default_path);
            }
        }

        debug!("No settings file found");
        None
    }

    /// Load settings with precedence order:
    /// 1. Environment variables
    /// 2. Settings file
    /// 3. Default values (lowest priority)
    ///
    /// Command-line overrides are applied by the caller. An explicitly named
    /// file that does not exist is an error.
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let settings = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(crate::Error::config(
                        "file",
                        &format!("Settings file not found: {}", path.display()),
                    ));
                }
                debug!("Loading settings from file: {:?}", path);
                debug!("Applying environment variable overrides");
                Settings::from_file(path)?.merge_with_env()?
            }
            None => {
                debug!("No settings file, using defaults with environment overrides");
                Settings::from_env()?
            }
        };

        settings.validate()?;

        debug!("Final settings: {:?}", settings);
        Ok(settings)
    }

    /// Get default settings
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
