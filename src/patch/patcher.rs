//! Config patcher
//!
//! Loads the target document, overlays the plugin table, points the gateway
//! and API at the public interface, and writes the result back over the
//! original file.

use serde_json::Value;
use tracing::{debug, info};

use super::{
    document::ConfigDocument,
    literal::{ADDRESSES_KEY, API_KEY, GATEWAY_KEY, PLUGINS_KEY, PatchDocument},
    store::ConfigStore,
};
use crate::Result;

/// Summary of a completed patch, for logging
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome {
    /// Whether the document already had a `Plugins` field
    pub replaced_plugins: bool,
    /// `Addresses.Gateway` before patching
    pub previous_gateway: Option<Value>,
    /// `Addresses.API` before patching
    pub previous_api: Option<Value>,
    /// Size of the rewritten file
    pub bytes_written: usize,
}

/// Applies a [`PatchDocument`] to the file behind a [`ConfigStore`]
#[derive(Debug, Clone)]
pub struct ConfigPatcher {
    store: ConfigStore,
    patch: PatchDocument,
}

impl ConfigPatcher {
    pub fn new(store: ConfigStore, patch: PatchDocument) -> Self {
        Self { store, patch }
    }

    /// Patcher for the given file using the built-in literal
    pub fn with_literal(store: ConfigStore) -> Result<Self> {
        Ok(Self::new(store, PatchDocument::from_literal()?))
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn patch(&self) -> &PatchDocument {
        &self.patch
    }

    /// Read, patch and overwrite the target file
    ///
    /// The file is only written once the whole document has been parsed and
    /// patched in memory, so a malformed or incomplete document leaves it
    /// untouched.
    pub async fn run(&self) -> Result<PatchOutcome> {
        let content = self.store.load().await?;
        let mut document = ConfigDocument::parse(&content)?;
        debug!(
            "Parsed configuration document with {} top-level keys",
            document.keys().count()
        );

        let mut outcome = apply(&self.patch, &mut document)?;
        let output = document.to_pretty_string()?;
        self.store.save(&output).await?;
        outcome.bytes_written = output.len();

        info!(
            "Patched {:?}: Gateway={}, API={}",
            self.store.path(),
            self.patch.gateway,
            self.patch.api
        );
        Ok(outcome)
    }
}

/// Apply the patch to an in-memory document
///
/// `Plugins` is replaced wholesale. `Addresses` must already exist as an
/// object; it is assigned into, never created.
pub fn apply(patch: &PatchDocument, document: &mut ConfigDocument) -> Result<PatchOutcome> {
    let previous_gateway = document.get(&[ADDRESSES_KEY, GATEWAY_KEY]).cloned();
    let previous_api = document.get(&[ADDRESSES_KEY, API_KEY]).cloned();

    let replaced_plugins = document
        .replace(PLUGINS_KEY, patch.plugins.clone())
        .is_some();
    document.set_in_existing(
        &[ADDRESSES_KEY],
        GATEWAY_KEY,
        Value::String(patch.gateway.clone()),
    )?;
    document.set_in_existing(&[ADDRESSES_KEY], API_KEY, Value::String(patch.api.clone()))?;

    debug!(
        "Replaced Gateway {:?} and API {:?}",
        previous_gateway, previous_api
    );

    Ok(PatchOutcome {
        replaced_plugins,
        previous_gateway,
        previous_api,
        bytes_written: 0,
    })
}
