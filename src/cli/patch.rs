//! Patch mode CLI logic
//!
//! Resolves settings, initializes logging and runs the patcher once.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    Settings,
    config::ConfigLoader,
    error::format_error_for_logging,
    patch::{ConfigPatcher, ConfigStore, PatchDocument},
    utils::version,
};

/// Arguments for patch mode
#[derive(Debug, Default)]
pub struct PatchArgs {
    pub target: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

/// Run patch mode with the given arguments
pub async fn run_patch_mode(args: PatchArgs) -> Result<()> {
    // Settings are loaded before logging so logging.level can apply.
    //
    // Precedence:
    // 1. Command line arguments (highest priority)
    // 2. Environment variables
    // 3. Settings file (from --config, IPFS_PATCH_CONFIG or default location)
    // 4. Default values (lowest priority)
    let settings = resolve_settings(&args)?;

    init_logging(&settings);
    info!("Starting {}", version::get_banner());

    let patcher = build_patcher(&settings)?;
    debug!(
        "Patching {:?} with plugin table {}",
        patcher.store().path(),
        patcher.patch().plugins
    );

    match patcher.run().await {
        Ok(outcome) => {
            info!(
                "Configuration updated ({} bytes, plugins replaced: {})",
                outcome.bytes_written, outcome.replaced_plugins
            );
            Ok(())
        }
        Err(e) => {
            error!(details = %format_error_for_logging(&e), "Failed to patch configuration");
            if e.is_document_error() {
                info!("Target file was left unchanged");
            }
            Err(e.into())
        }
    }
}

/// Load settings and apply command-line overrides
pub fn resolve_settings(args: &PatchArgs) -> Result<Settings> {
    let config_loader = ConfigLoader::new();

    let config_path = match &args.config {
        Some(config) => Some(config.clone()),
        None => ConfigLoader::get_config_path(),
    };

    let mut settings = config_loader
        .load(config_path.as_deref())
        .context("Failed to load settings")?;

    if let Some(target) = &args.target {
        settings.target.path = target.clone();
    }
    settings.logging.verbose |= args.verbose;

    Ok(settings)
}

/// Build the patcher for the configured target
///
/// The built-in literal is used unless the settings change a patch value.
pub fn build_patcher(settings: &Settings) -> Result<ConfigPatcher> {
    let store = ConfigStore::new(&settings.target.path);
    let patcher = if settings.uses_builtin_patch() {
        ConfigPatcher::with_literal(store)?
    } else {
        debug!("Building patch from settings");
        ConfigPatcher::new(store, PatchDocument::from_settings(settings)?)
    };
    Ok(patcher)
}

// Logs go to stderr. Precedence: --verbose, then RUST_LOG, then logging.level.
fn init_logging(settings: &Settings) {
    let env_filter = if settings.logging.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.logging.level)
    };

    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
