//! Patcher settings
//!
//! Settings come from a TOML file, environment variables and command-line
//! overrides. Defaults reproduce the built-in patch literal exactly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::patch::literal::{
    DEFAULT_AGENT_VERSION_CUT_OFF, DEFAULT_API_ADDRESS, DEFAULT_GATEWAY_ADDRESS,
    DEFAULT_HTTP_LISTEN_ADDRESS, DEFAULT_PLUGIN_NAME, DEFAULT_POPULATE_PROMETHEUS_INTERVAL,
    DEFAULT_TCP_LISTEN_ADDRESS,
};

/// Default location of the node configuration, relative to the working directory
pub const DEFAULT_TARGET_PATH: &str = ".ipfs/config";

pub const ENV_TARGET: &str = "IPFS_PATCH_TARGET";
pub const ENV_GATEWAY: &str = "IPFS_PATCH_GATEWAY";
pub const ENV_API: &str = "IPFS_PATCH_API";
pub const ENV_LOG_LEVEL: &str = "IPFS_PATCH_LOG_LEVEL";

// Helper functions for serde defaults
fn default_target_path() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET_PATH)
}

fn default_gateway() -> String {
    DEFAULT_GATEWAY_ADDRESS.to_string()
}

fn default_api() -> String {
    DEFAULT_API_ADDRESS.to_string()
}

fn default_plugin_name() -> String {
    DEFAULT_PLUGIN_NAME.to_string()
}

fn default_populate_prometheus_interval() -> u64 {
    DEFAULT_POPULATE_PROMETHEUS_INTERVAL
}

fn default_agent_version_cut_off() -> u64 {
    DEFAULT_AGENT_VERSION_CUT_OFF
}

fn default_tcp_listen_addresses() -> Vec<String> {
    vec![DEFAULT_TCP_LISTEN_ADDRESS.to_string()]
}

fn default_http_listen_addresses() -> Vec<String> {
    vec![DEFAULT_HTTP_LISTEN_ADDRESS.to_string()]
}

fn default_log_level() -> String {
    "error".to_string()
}

/// Main settings for the config patcher
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// File to patch
    #[serde(default)]
    pub target: TargetSettings,
    /// Address values written under `Addresses`
    #[serde(default)]
    pub addresses: AddressSettings,
    /// Plugin table written under `Plugins`
    #[serde(default)]
    pub plugin: PluginSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Target file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSettings {
    /// Path of the node configuration file
    #[serde(default = "default_target_path")]
    pub path: PathBuf,
}

/// Address fields assigned into the document's `Addresses` object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSettings {
    /// Multiaddr for `Addresses.Gateway`
    #[serde(default = "default_gateway")]
    pub gateway: String,
    /// Multiaddr for `Addresses.API`
    #[serde(default = "default_api")]
    pub api: String,
}

/// Metric export plugin values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Key of the entry in the plugin table
    #[serde(default = "default_plugin_name")]
    pub name: String,
    #[serde(default = "default_populate_prometheus_interval")]
    pub populate_prometheus_interval: u64,
    #[serde(default = "default_agent_version_cut_off")]
    pub agent_version_cut_off: u64,
    /// `host:port` listeners for the TCP exporter
    #[serde(default = "default_tcp_listen_addresses")]
    pub tcp_listen_addresses: Vec<String>,
    /// `host:port` listeners for the HTTP exporter
    #[serde(default = "default_http_listen_addresses")]
    pub http_listen_addresses: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            path: default_target_path(),
        }
    }
}

impl Default for AddressSettings {
    fn default() -> Self {
        Self {
            gateway: default_gateway(),
            api: default_api(),
        }
    }
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            name: default_plugin_name(),
            populate_prometheus_interval: default_populate_prometheus_interval(),
            agent_version_cut_off: default_agent_version_cut_off(),
            tcp_listen_addresses: default_tcp_listen_addresses(),
            http_listen_addresses: default_http_listen_addresses(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables on top of defaults
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read settings file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content)?;

        Ok(settings)
    }

    /// Override fields whose environment variable is set
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(target) = std::env::var(ENV_TARGET) {
            self.target.path = PathBuf::from(target);
        }

        if let Ok(gateway) = std::env::var(ENV_GATEWAY) {
            self.addresses.gateway = gateway;
        }

        if let Ok(api) = std::env::var(ENV_API) {
            self.addresses.api = api;
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        Ok(self)
    }

    /// Whether the patch values are the built-in ones
    pub fn uses_builtin_patch(&self) -> bool {
        self.addresses == AddressSettings::default() && self.plugin == PluginSettings::default()
    }

    /// Validate settings
    pub fn validate(&self) -> crate::Result<()> {
        if self.target.path.as_os_str().is_empty() {
            return Err(crate::Error::config("target.path", "Target path cannot be empty"));
        }

        for (name, addr) in [
            ("addresses.gateway", &self.addresses.gateway),
            ("addresses.api", &self.addresses.api),
        ] {
            if !addr.starts_with('/') {
                return Err(crate::Error::config(
                    name,
                    &format!("Invalid multiaddr '{}': must start with '/'", addr),
                ));
            }
        }

        if self.plugin.name.trim().is_empty() {
            return Err(crate::Error::config("plugin.name", "Plugin name cannot be empty"));
        }

        for (name, listeners) in [
            ("plugin.tcp_listen_addresses", &self.plugin.tcp_listen_addresses),
            ("plugin.http_listen_addresses", &self.plugin.http_listen_addresses),
        ] {
            if listeners.is_empty() {
                return Err(crate::Error::config(name, "At least one listen address is required"));
            }
            for listener in listeners {
                if let Err(e) = listener.parse::<std::net::SocketAddr>() {
                    return Err(crate::Error::config(
                        name,
                        &format!("Invalid listen address '{}': {}", listener, e),
                    ));
                }
            }
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "logging.level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        Ok(())
    }
}
