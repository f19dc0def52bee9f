//! Whole-file access to the target configuration
//!
//! The file is read completely, then later truncated and rewritten in place.
//! No backup or temporary copy is made.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

use crate::{Error, Result};

/// Reads and overwrites a single configuration file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full file contents
    pub async fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                debug!("Read {} bytes from {:?}", content.len(), self.path);
                Ok(content)
            }
            Err(e) => {
                error!("Failed to read config file {:?}: {}", self.path, e);
                Err(Error::io(&self.path, e))
            }
        }
    }

    /// Replace the file contents entirely
    pub async fn save(&self, content: &str) -> Result<()> {
        match fs::write(&self.path, content).await {
            Ok(()) => {
                debug!("Wrote {} bytes to {:?}", content.len(), self.path);
                Ok(())
            }
            Err(e) => {
                error!("Failed to write config file {:?}: {}", self.path, e);
                Err(Error::io(&self.path, e))
            }
        }
    }
}
