//! Convention test harness
//!
//! Orchestrates one validation run: acquire contexts from the provider,
//! freeze the exclusion configuration from a declarative callback, run the
//! catalogue, aggregate the results, release the contexts. The lifecycle is
//! an explicit state machine; calling an operation in the wrong state is an
//! error, not a panic.

use mapcheck_core::{
    CheckResult, ConfigError, ExclusionBuilder, ExclusionConfiguration, MappingContext, Report,
    RuleId,
};
use mapcheck_provider::{ContextProvider, ProviderError};
use mapcheck_rules::{rule_for, ExclusionResolver};

/// Lifecycle states of a harness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessState {
    /// Created; no contexts acquired yet
    Uninitialized,

    /// Contexts acquired and exclusions frozen; checks may run
    Ready,

    /// A check is executing
    Running,

    /// Contexts released; the harness is spent
    TornDown,
}

impl std::fmt::Display for HarnessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Ready => write!(f, "ready"),
            Self::Running => write!(f, "running"),
            Self::TornDown => write!(f, "torn down"),
        }
    }
}

/// Harness error types
///
/// Convention violations are never errors - they come back as data inside
/// [`CheckResult`]. Provider and configuration failures pass through
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("harness is {actual}, expected {expected}")]
    InvalidState {
        expected: HarnessState,
        actual: HarnessState,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

/// One validation run over a provider's contexts
pub struct ConventionHarness<P: ContextProvider> {
    provider: P,
    state: HarnessState,
    contexts: Vec<MappingContext>,
    exclusions: ExclusionConfiguration,
}

impl<P: ContextProvider> ConventionHarness<P> {
    /// Create an uninitialized harness
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: HarnessState::Uninitialized,
            contexts: Vec::new(),
            exclusions: ExclusionConfiguration::default(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> HarnessState {
        self.state
    }

    /// The acquired contexts (empty before initialization)
    pub fn contexts(&self) -> &[MappingContext] {
        &self.contexts
    }

    /// Acquire contexts and freeze the exclusion configuration
    ///
    /// The callback runs against a fresh builder; a configuration error
    /// (invalid selector) surfaces here, before any rule runs, and the
    /// already-acquired contexts are handed back to the provider.
    pub async fn initialize<F>(&mut self, configure: F) -> Result<(), HarnessError>
    where
        F: FnOnce(&mut ExclusionBuilder),
    {
        self.expect_state(HarnessState::Uninitialized)?;

        tracing::debug!(provider = self.provider.name(), "acquiring mapping contexts");
        self.contexts = self.provider.acquire().await?;

        let mut builder = ExclusionBuilder::new();
        configure(&mut builder);

        match builder.build() {
            Ok(exclusions) => {
                self.exclusions = exclusions;
                self.state = HarnessState::Ready;
                tracing::debug!(contexts = self.contexts.len(), "harness ready");
                Ok(())
            }
            Err(error) => {
                self.contexts.clear();
                if let Err(release_error) = self.provider.release().await {
                    tracing::warn!(%release_error, "release failed after configuration error");
                }
                self.state = HarnessState::TornDown;
                Err(error.into())
            }
        }
    }

    /// Run a single named check
    pub fn run_check(&mut self, rule: RuleId) -> Result<CheckResult, HarnessError> {
        self.expect_state(HarnessState::Ready)?;
        self.state = HarnessState::Running;

        let resolver = ExclusionResolver::new(&self.exclusions);
        let violations = rule_for(rule).validate(&self.contexts, &resolver);

        self.state = HarnessState::Ready;
        Ok(CheckResult::new(rule, violations))
    }

    /// Run a specific set of checks and aggregate the outcomes
    ///
    /// Every requested check runs even when earlier ones fail, so a single
    /// run surfaces every violation category at once.
    pub fn run_checks(&mut self, rules: &[RuleId]) -> Result<Report, HarnessError> {
        self.expect_state(HarnessState::Ready)?;

        let mut checks = Vec::with_capacity(rules.len());
        for rule in rules {
            let check = self.run_check(*rule)?;
            if let Some(message) = check.failure_message() {
                tracing::debug!(rule = %check.rule, "{message}");
            }
            checks.push(check);
        }

        let entities = self.contexts.iter().map(|c| c.entities.len()).sum();
        Ok(Report::from_checks(checks).with_model_stats(self.contexts.len(), entities))
    }

    /// Run the full catalogue
    pub fn run_all_checks(&mut self) -> Result<Report, HarnessError> {
        self.run_checks(&RuleId::ALL)
    }

    /// Release the contexts
    ///
    /// Idempotent: tearing down a torn-down harness is a no-op. A harness
    /// that never initialized has nothing to release.
    pub async fn teardown(&mut self) -> Result<(), HarnessError> {
        match self.state {
            HarnessState::TornDown => Ok(()),
            HarnessState::Running => Err(HarnessError::InvalidState {
                expected: HarnessState::Ready,
                actual: HarnessState::Running,
            }),
            HarnessState::Uninitialized => {
                self.state = HarnessState::TornDown;
                Ok(())
            }
            HarnessState::Ready => {
                self.provider.release().await?;
                self.contexts.clear();
                self.state = HarnessState::TornDown;
                tracing::debug!("harness torn down");
                Ok(())
            }
        }
    }

    fn expect_state(&self, expected: HarnessState) -> Result<(), HarnessError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(HarnessError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }
}

/// One-shot orchestration of a full run
///
/// Acquires, configures, runs the whole catalogue, and releases on both the
/// success and the failure path.
pub async fn run_conventions<P, F>(provider: P, configure: F) -> Result<Report, HarnessError>
where
    P: ContextProvider,
    F: FnOnce(&mut ExclusionBuilder),
{
    let mut harness = ConventionHarness::new(provider);
    harness.initialize(configure).await?;

    let outcome = harness.run_all_checks();
    let teardown = harness.teardown().await;

    let report = outcome?;
    teardown?;
    Ok(report)
}
