//! Plugin configuration types
//!
//! Typed view of the `metric-export-plugin` section as it appears inside an
//! IPFS node configuration under `Plugins.Plugins.<name>.Config`.

use serde::{Deserialize, Serialize};

/// Listener configuration shared by the TCP and HTTP exporters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerConfig {
    /// `host:port` pairs the exporter binds to
    #[serde(rename = "ListenAddresses")]
    pub listen_addresses: Vec<String>,
}

/// Configuration block of the metric export plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricExportConfig {
    /// Seconds between Prometheus metric refreshes
    pub populate_prometheus_interval: u64,

    /// Agent version cut-off used when bucketing peers
    pub agent_version_cut_off: u64,

    /// TCP bitswap message stream listener
    #[serde(rename = "TCPServerConfig")]
    pub tcp_server_config: ListenerConfig,

    /// HTTP metrics listener
    #[serde(rename = "HTTPServerConfig")]
    pub http_server_config: ListenerConfig,
}

/// A single entry of the node's plugin table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry {
    #[serde(rename = "Config")]
    pub config: MetricExportConfig,
}

impl MetricExportConfig {
    pub fn new(
        populate_prometheus_interval: u64,
        agent_version_cut_off: u64,
        tcp_listen_addresses: Vec<String>,
        http_listen_addresses: Vec<String>,
    ) -> Self {
        Self {
            populate_prometheus_interval,
            agent_version_cut_off,
            tcp_server_config: ListenerConfig {
                listen_addresses: tcp_listen_addresses,
            },
            http_server_config: ListenerConfig {
                listen_addresses: http_listen_addresses,
            },
        }
    }

    /// Wrap into a plugin table entry
    pub fn into_entry(self) -> PluginEntry {
        PluginEntry { config: self }
    }
}
