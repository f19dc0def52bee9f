//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables read by the patcher
pub const PATCHER_ENV_VARS: &[&str] = &[
    "IPFS_PATCH_CONFIG",
    "IPFS_PATCH_TARGET",
    "IPFS_PATCH_GATEWAY",
    "IPFS_PATCH_API",
    "IPFS_PATCH_LOG_LEVEL",
    "RUST_LOG",
];

/// Test data factory
pub struct SampleConfig;

impl SampleConfig {
    /// A trimmed-down node configuration as written by `ipfs init`
    pub fn node() -> serde_json::Value {
        serde_json::json!({
            "Identity": {
                "PeerID": "12D3KooWQkYVbUjW4u1zbCnaS2zCuuXnNc8cNgfHJVu6RuGx9oD5",
                "PrivKey": "CAESQFv1"
            },
            "Datastore": {
                "StorageMax": "10GB",
                "StorageGCWatermark": 90,
                "GCPeriod": "1h",
                "BloomFilterSize": 0,
                "Spec": {
                    "mounts": [
                        { "mountpoint": "/blocks", "shardFunc": -2, "sync": true },
                        { "mountpoint": "/", "compression": 0.75, "sync": true }
                    ]
                }
            },
            "Addresses": {
                "Swarm": ["/ip4/0.0.0.0/tcp/4001", "/ip6/::/tcp/4001"],
                "Announce": [],
                "API": "/ip4/127.0.0.1/tcp/5001",
                "Gateway": "/ip4/127.0.0.1/tcp/8080"
            },
            "Bootstrap": [
                "/dnsaddr/bootstrap.libp2p.io/p2p/QmNnooDu7bfjPFoTZYxMNLWUQJyrVwtbZg5gBMjTezGAJN"
            ],
            "Plugins": {
                "Plugins": null
            }
        })
    }

    /// The `Plugins` value the built-in patch writes
    pub fn expected_plugins() -> serde_json::Value {
        serde_json::json!({
            "Plugins": {
                "metric-export-plugin": {
                    "Config": {
                        "PopulatePrometheusInterval": 10,
                        "AgentVersionCutOff": 20,
                        "TCPServerConfig": { "ListenAddresses": ["0.0.0.0:4321"] },
                        "HTTPServerConfig": { "ListenAddresses": ["0.0.0.0:4322"] }
                    }
                }
            }
        })
    }
}

/// A temporary working directory holding a `.ipfs/config` file
pub struct NodeRepo {
    pub dir: TempDir,
}

impl NodeRepo {
    /// Create a repo whose config file contains `content` verbatim
    pub fn with_content(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".ipfs")).unwrap();
        std::fs::write(dir.path().join(".ipfs").join("config"), content).unwrap();
        Self { dir }
    }

    /// Create a repo from a JSON value
    pub fn with_json(value: &serde_json::Value) -> Self {
        Self::with_content(&serde_json::to_string_pretty(value).unwrap())
    }

    /// Create a working directory without any config file
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(".ipfs").join("config")
    }

    pub fn read(&self) -> String {
        std::fs::read_to_string(self.config_path()).unwrap()
    }

    pub fn read_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read()).unwrap()
    }

    /// Binary command running inside this repo with a clean environment
    pub fn command(&self) -> Command {
        isolated_command(self.dir.path())
    }
}

/// Binary command with patcher env vars removed and the user config dir
/// redirected into `cwd`
pub fn isolated_command(cwd: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("ipfs-config-patch");
    cmd.current_dir(cwd);
    for var in PATCHER_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("XDG_CONFIG_HOME", cwd.join(".xdg"));
    cmd.env("HOME", cwd);
    cmd
}
