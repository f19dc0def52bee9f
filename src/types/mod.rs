//! Type definitions for the config patcher
//!
//! This module contains the typed pieces of the node configuration the patch writes.

pub mod plugin;

pub use plugin::{ListenerConfig, MetricExportConfig, PluginEntry};
