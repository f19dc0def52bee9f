//! Configuration patching
//!
//! Parses the node configuration as an untyped JSON tree, overlays the
//! metric-export plugin table and address fields, and rewrites the file.

pub mod document;
pub mod literal;
pub mod patcher;
pub mod store;

pub use document::ConfigDocument;
pub use literal::{METRIC_EXPORT_PATCH, PatchDocument};
pub use patcher::{ConfigPatcher, PatchOutcome, apply};
pub use store::ConfigStore;
