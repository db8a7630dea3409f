//! Mock context provider for testing
//!
//! Serves predefined contexts without touching any mapping framework.
//! Useful for unit testing the rules and harness, CI runs without a real
//! model, and simulating acquisition failures.

use crate::provider::{ContextProvider, ProviderError};
use async_trait::async_trait;
use mapcheck_core::MappingContext;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Mock context provider
///
/// Stores contexts in memory and returns clones on `acquire`. Releases are
/// counted so tests can assert the harness tears down exactly once.
///
/// # Example
///
/// ```rust,ignore
/// let provider = MockProvider::new()
///     .with_latency(50)            // 50ms simulated latency
///     .with_acquire_failure();     // fail every acquisition
/// ```
pub struct MockProvider {
    /// Predefined contexts, in acquisition order
    contexts: Arc<RwLock<Vec<MappingContext>>>,

    /// Number of completed releases
    releases: Arc<AtomicUsize>,

    /// Simulate acquisition failure
    fail_acquire: bool,

    /// Simulate release failure
    fail_release: bool,

    /// Simulate latency (milliseconds)
    latency_ms: u64,

    /// Name to return from name() method
    provider_name: &'static str,
}

impl MockProvider {
    /// Create a new mock provider with no contexts
    pub fn new() -> Self {
        Self {
            contexts: Arc::new(RwLock::new(Vec::new())),
            releases: Arc::new(AtomicUsize::new(0)),
            fail_acquire: false,
            fail_release: false,
            latency_ms: 0,
            provider_name: "Mock",
        }
    }

    /// Create a mock provider from pre-built contexts
    pub fn from_contexts(contexts: Vec<MappingContext>) -> Self {
        Self {
            contexts: Arc::new(RwLock::new(contexts)),
            releases: Arc::new(AtomicUsize::new(0)),
            fail_acquire: false,
            fail_release: false,
            latency_ms: 0,
            provider_name: "Mock",
        }
    }

    /// Append a context
    pub async fn add_context(&self, context: MappingContext) {
        self.contexts.write().await.push(context);
    }

    /// Configure every acquisition to fail
    pub fn with_acquire_failure(mut self) -> Self {
        self.fail_acquire = true;
        self
    }

    /// Configure every release to fail
    pub fn with_release_failure(mut self) -> Self {
        self.fail_release = true;
        self
    }

    /// Configure simulated latency for all operations
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Set a custom provider name
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.provider_name = name;
        self
    }

    /// Number of stored contexts
    pub async fn context_count(&self) -> usize {
        self.contexts.read().await.len()
    }

    /// Clear all stored contexts
    pub async fn clear_contexts(&self) {
        self.contexts.write().await.clear();
    }

    /// How many times `release` has completed
    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    /// Simulate latency if configured
    async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await;
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            contexts: Arc::clone(&self.contexts),
            releases: Arc::clone(&self.releases),
            fail_acquire: self.fail_acquire,
            fail_release: self.fail_release,
            latency_ms: self.latency_ms,
            provider_name: self.provider_name,
        }
    }
}

#[async_trait]
impl ContextProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.provider_name
    }

    async fn acquire(&self) -> Result<Vec<MappingContext>, ProviderError> {
        self.simulate_latency().await;

        if self.fail_acquire {
            return Err(ProviderError::ConnectionError(
                "Simulated acquisition failure".to_string(),
            ));
        }

        Ok(self.contexts.read().await.clone())
    }

    async fn release(&self) -> Result<(), ProviderError> {
        self.simulate_latency().await;

        if self.fail_release {
            return Err(ProviderError::ReleaseError(
                "Simulated release failure".to_string(),
            ));
        }

        self.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Builder for creating a MockProvider with multiple contexts
///
/// # Example
///
/// ```rust,ignore
/// let provider = MockProviderBuilder::new()
///     .with_context(MappingContext::new("SalesContext"))
///     .with_context(MappingContext::new("BillingContext"))
///     .build();
/// ```
pub struct MockProviderBuilder {
    contexts: Vec<MappingContext>,
    fail_acquire: bool,
    fail_release: bool,
    latency_ms: u64,
    provider_name: &'static str,
}

impl MockProviderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            contexts: Vec::new(),
            fail_acquire: false,
            fail_release: false,
            latency_ms: 0,
            provider_name: "Mock",
        }
    }

    /// Add a context
    pub fn with_context(mut self, context: MappingContext) -> Self {
        self.contexts.push(context);
        self
    }

    /// Configure acquisition failure
    pub fn with_acquire_failure(mut self) -> Self {
        self.fail_acquire = true;
        self
    }

    /// Configure release failure
    pub fn with_release_failure(mut self) -> Self {
        self.fail_release = true;
        self
    }

    /// Configure latency
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Set provider name
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.provider_name = name;
        self
    }

    /// Build the MockProvider
    pub fn build(self) -> MockProvider {
        MockProvider {
            contexts: Arc::new(RwLock::new(self.contexts)),
            releases: Arc::new(AtomicUsize::new(0)),
            fail_acquire: self.fail_acquire,
            fail_release: self.fail_release,
            latency_ms: self.latency_ms,
            provider_name: self.provider_name,
        }
    }
}

impl Default for MockProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcheck_core::{EntityDescriptor, PropertyDescriptor, PropertyKind};

    fn sample_context() -> MappingContext {
        MappingContext::from_entities(
            "SalesContext",
            vec![EntityDescriptor::new("Invoice", "Invoices").with_property(
                PropertyDescriptor::new("InvoiceId", PropertyKind::Integer).primary_key(),
            )],
        )
    }

    #[tokio::test]
    async fn acquire_returns_stored_contexts() {
        let provider = MockProvider::new();
        provider.add_context(sample_context()).await;

        let contexts = provider.acquire().await.unwrap();
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].name, "SalesContext");
    }

    #[tokio::test]
    async fn acquire_failure_simulation() {
        let provider = MockProvider::new().with_acquire_failure();
        let result = provider.acquire().await;
        assert!(matches!(result, Err(ProviderError::ConnectionError(_))));
    }

    #[tokio::test]
    async fn release_is_counted() {
        let provider = MockProvider::new();
        assert_eq!(provider.release_count(), 0);

        provider.release().await.unwrap();
        provider.release().await.unwrap();
        assert_eq!(provider.release_count(), 2);
    }

    #[tokio::test]
    async fn release_failure_simulation() {
        let provider = MockProvider::new().with_release_failure();
        let result = provider.release().await;
        assert!(matches!(result, Err(ProviderError::ReleaseError(_))));
        assert_eq!(provider.release_count(), 0);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let provider = MockProvider::new();
        let cloned = provider.clone();

        provider.add_context(sample_context()).await;
        assert_eq!(cloned.context_count().await, 1);

        cloned.release().await.unwrap();
        assert_eq!(provider.release_count(), 1);
    }

    #[tokio::test]
    async fn builder_assembles_contexts() {
        let provider = MockProviderBuilder::new()
            .with_context(sample_context())
            .with_context(MappingContext::new("BillingContext"))
            .with_name("Fixture")
            .build();

        assert_eq!(provider.name(), "Fixture");
        assert_eq!(provider.context_count().await, 2);
    }

    #[tokio::test]
    async fn clear_contexts() {
        let provider = MockProvider::from_contexts(vec![sample_context()]);
        assert_eq!(provider.context_count().await, 1);

        provider.clear_contexts().await;
        assert_eq!(provider.context_count().await, 0);
    }
}
