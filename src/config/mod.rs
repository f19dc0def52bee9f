//! Settings management for the config patcher
//!
//! This module handles loading and validating the patcher's own settings.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;
