//! Context provider trait for acquiring mapping metadata

use async_trait::async_trait;
use mapcheck_core::MappingContext;

/// Errors that can occur when acquiring or releasing contexts
///
/// These cross the collaborator boundary unchanged - the harness never
/// catches or reinterprets them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Connection failed: {0}")]
    ConnectionError(String),

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Release failed: {0}")]
    ReleaseError(String),
}

/// Trait for collaborators that materialize mapping contexts
///
/// The harness does not know or care how the `(contextName, entities)` pairs
/// were produced - live introspection, a cached snapshot, or a test fixture
/// all satisfy the same contract. The model is fully materialized before any
/// rule runs; `release` is called once, after every rule has completed.
#[async_trait]
pub trait ContextProvider: Send + Sync {
    /// Get the provider name (e.g. "Snapshot", "Mock")
    fn name(&self) -> &'static str;

    /// Materialize every mapping context
    async fn acquire(&self) -> Result<Vec<MappingContext>, ProviderError>;

    /// Release whatever `acquire` held
    async fn release(&self) -> Result<(), ProviderError>;
}
