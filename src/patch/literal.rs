//! The patch applied to a node configuration
//!
//! [`METRIC_EXPORT_PATCH`] is the canonical literal. [`PatchDocument`] carries
//! the `Plugins` sub-tree extracted from it together with the two address
//! values, or the same shape built from [`Settings`].

use serde_json::{Map, Value};

use crate::{Error, Result, config::Settings, types::MetricExportConfig};

/// Plugin table injected into the node configuration, reproduced verbatim
pub const METRIC_EXPORT_PATCH: &str = r#"{"Plugins":{"Plugins":{"metric-export-plugin":{"Config":{"PopulatePrometheusInterval":10,"AgentVersionCutOff":20,"TCPServerConfig":{"ListenAddresses":["0.0.0.0:4321"]},"HTTPServerConfig":{"ListenAddresses":["0.0.0.0:4322"]}}}}}}"#;

pub const PLUGINS_KEY: &str = "Plugins";
pub const ADDRESSES_KEY: &str = "Addresses";
pub const GATEWAY_KEY: &str = "Gateway";
pub const API_KEY: &str = "API";

pub const DEFAULT_PLUGIN_NAME: &str = "metric-export-plugin";
pub const DEFAULT_GATEWAY_ADDRESS: &str = "/ip4/0.0.0.0/tcp/8080";
pub const DEFAULT_API_ADDRESS: &str = "/ip4/0.0.0.0/tcp/5001";
pub const DEFAULT_POPULATE_PROMETHEUS_INTERVAL: u64 = 10;
pub const DEFAULT_AGENT_VERSION_CUT_OFF: u64 = 20;
pub const DEFAULT_TCP_LISTEN_ADDRESS: &str = "0.0.0.0:4321";
pub const DEFAULT_HTTP_LISTEN_ADDRESS: &str = "0.0.0.0:4322";

/// Values written into a configuration document
#[derive(Debug, Clone, PartialEq)]
pub struct PatchDocument {
    /// Replacement for the document's top-level `Plugins` field
    pub plugins: Value,
    /// Value for `Addresses.Gateway`
    pub gateway: String,
    /// Value for `Addresses.API`
    pub api: String,
}

impl PatchDocument {
    /// Parse [`METRIC_EXPORT_PATCH`] and pair its `Plugins` value with the
    /// default addresses
    pub fn from_literal() -> Result<Self> {
        Self::from_json(METRIC_EXPORT_PATCH)
    }

    /// Extract the `Plugins` field of an arbitrary patch literal
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut parsed: Value = serde_json::from_str(raw)?;
        let plugins = parsed
            .get_mut(PLUGINS_KEY)
            .map(Value::take)
            .ok_or_else(|| Error::missing_field(PLUGINS_KEY))?;

        Ok(Self {
            plugins,
            gateway: DEFAULT_GATEWAY_ADDRESS.to_string(),
            api: DEFAULT_API_ADDRESS.to_string(),
        })
    }

    /// Build the patch from typed settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let plugin = &settings.plugin;
        let entry = MetricExportConfig::new(
            plugin.populate_prometheus_interval,
            plugin.agent_version_cut_off,
            plugin.tcp_listen_addresses.clone(),
            plugin.http_listen_addresses.clone(),
        )
        .into_entry();

        let mut table = Map::new();
        table.insert(plugin.name.clone(), serde_json::to_value(entry)?);

        let mut plugins = Map::new();
        plugins.insert(PLUGINS_KEY.to_string(), Value::Object(table));

        Ok(Self {
            plugins: Value::Object(plugins),
            gateway: settings.addresses.gateway.clone(),
            api: settings.addresses.api.clone(),
        })
    }
}
