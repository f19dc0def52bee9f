//! Command-line entry points

pub mod patch;

pub use patch::{PatchArgs, run_patch_mode};
