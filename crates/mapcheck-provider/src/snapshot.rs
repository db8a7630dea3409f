//! Snapshot context provider
//!
//! Loads a model snapshot - a JSON array of mapping contexts - from disk and
//! serves it through the provider contract. Snapshots are how CI runs the
//! conventions without a live mapping framework: export the model once,
//! validate it anywhere.

use crate::provider::{ContextProvider, ProviderError};
use async_trait::async_trait;
use mapcheck_core::{validate_model, MappingContext};
use std::path::PathBuf;

/// Context provider backed by a JSON snapshot file
///
/// Model invariants are checked at load time, so a malformed export fails
/// the run before any rule sees it. Release is a no-op - nothing is held
/// open once the file has been read.
pub struct SnapshotProvider {
    /// Path to the snapshot file
    path: PathBuf,
}

impl SnapshotProvider {
    /// Create a provider for the given snapshot file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot path
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl ContextProvider for SnapshotProvider {
    fn name(&self) -> &'static str {
        "Snapshot"
    }

    async fn acquire(&self) -> Result<Vec<MappingContext>, ProviderError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProviderError::SnapshotNotFound(self.path.display().to_string())
            } else {
                ProviderError::IoError(e.to_string())
            }
        })?;

        let contexts: Vec<MappingContext> = serde_json::from_str(&contents)
            .map_err(|e| ProviderError::InvalidSnapshot(e.to_string()))?;

        validate_model(&contexts).map_err(|e| ProviderError::InvalidModel(e.to_string()))?;

        Ok(contexts)
    }

    async fn release(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
