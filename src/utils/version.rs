//! Version information utilities

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name as shown in logs
pub const BIN_NAME: &str = "ipfs-config-patch";

/// Get the current application version
pub fn get_version() -> &'static str {
    VERSION
}

/// Version banner logged at startup
pub fn get_banner() -> String {
    format!("{} v{}", BIN_NAME, get_version())
}
