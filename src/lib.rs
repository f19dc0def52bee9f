//! IPFS Config Patcher
//!
//! Prepares an IPFS node for the metric export plugin. The node configuration
//! is loaded as an untyped JSON document, its `Plugins` table is replaced with
//! the exporter configuration, `Addresses.Gateway` and `Addresses.API` are
//! bound to all interfaces, and the result is written back in place.
//!
//! # Usage
//!
//! ```bash
//! ipfs-config-patch
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use ipfs_config_patcher::{ConfigPatcher, ConfigStore};
//!
//! # async fn example() -> ipfs_config_patcher::Result<()> {
//! let patcher = ConfigPatcher::with_literal(ConfigStore::new(".ipfs/config"))?;
//! patcher.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod patch;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use patch::{ConfigDocument, ConfigPatcher, ConfigStore, PatchDocument, PatchOutcome};
pub use types::MetricExportConfig;
