//! Mapcheck providers
//!
//! The collaborator boundary: everything that materializes mapping contexts
//! for a validation run lives here, behind the [`ContextProvider`] trait.

pub mod mock;
pub mod provider;
pub mod snapshot;

pub use mock::{MockProvider, MockProviderBuilder};
pub use provider::{ContextProvider, ProviderError};
pub use snapshot::SnapshotProvider;
