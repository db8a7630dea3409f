//! Report schema (stable v1)
//!
//! This schema is STABLE and VERSIONED.
//! Breaking changes require a new version.

use crate::rule::RuleId;
use crate::violation::ViolationRecord;
use serde::{Deserialize, Serialize};

/// Report schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVersion {
    /// Major version (breaking changes)
    pub major: u32,

    /// Minor version (backward-compatible additions)
    pub minor: u32,
}

impl ReportVersion {
    /// Current report schema version
    pub const CURRENT: ReportVersion = ReportVersion { major: 1, minor: 0 };
}

impl std::fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Outcome of one convention check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Stable rule code
    pub rule: RuleId,

    /// Human-readable rule name
    pub rule_name: String,

    /// Every unexcluded violation the rule detected
    pub violations: Vec<ViolationRecord>,
}

impl CheckResult {
    /// Create a result from a rule's violation list
    pub fn new(rule: RuleId, violations: Vec<ViolationRecord>) -> Self {
        Self {
            rule,
            rule_name: rule.display_name().to_string(),
            violations,
        }
    }

    /// Whether the check passed
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Failure detail enumerating every violation, or `None` when passed
    pub fn failure_message(&self) -> Option<String> {
        if self.violations.is_empty() {
            return None;
        }

        let mut message = format!(
            "{}: {} violation(s)",
            self.rule_name,
            self.violations.len()
        );
        for violation in &self.violations {
            message.push_str("\n  ");
            message.push_str(&violation.to_string());
        }
        Some(message)
    }
}

/// Summary statistics for a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of checks run
    pub checks_run: usize,

    /// Number of checks that failed
    pub checks_failed: usize,

    /// Total violations across all checks
    pub total_violations: usize,

    /// Number of mapping contexts validated
    pub contexts_checked: usize,

    /// Number of entities validated
    pub entities_checked: usize,
}

/// Convention check report (report.json v1)
///
/// This is the stable output format.
/// All fields are versioned and backward-compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version
    pub version: ReportVersion,

    /// Timestamp (ISO 8601)
    pub timestamp: String,

    /// Summary statistics
    pub summary: ReportSummary,

    /// Per-check outcomes
    pub checks: Vec<CheckResult>,
}

impl Report {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            version: ReportVersion::CURRENT,
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary: ReportSummary::default(),
            checks: Vec::new(),
        }
    }

    /// Create a report from check results
    pub fn from_checks(checks: Vec<CheckResult>) -> Self {
        let summary = ReportSummary {
            checks_run: checks.len(),
            checks_failed: checks.iter().filter(|c| !c.passed()).count(),
            total_violations: checks.iter().map(|c| c.violations.len()).sum(),
            contexts_checked: 0,
            entities_checked: 0,
        };

        Self {
            version: ReportVersion::CURRENT,
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary,
            checks,
        }
    }

    /// Record how much of the model the run covered
    pub fn with_model_stats(mut self, contexts: usize, entities: usize) -> Self {
        self.summary.contexts_checked = contexts;
        self.summary.entities_checked = entities;
        self
    }

    /// Add a check result to the report
    pub fn add_check(&mut self, check: CheckResult) {
        self.summary.checks_run += 1;
        if !check.passed() {
            self.summary.checks_failed += 1;
        }
        self.summary.total_violations += check.violations.len();
        self.checks.push(check);
    }

    /// Check if any convention failed
    pub fn has_failures(&self) -> bool {
        self.summary.checks_failed > 0
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
