//! Configuration schema (mapcheck.toml)

use crate::exclusion::{ExclusionBuilder, ExclusionConfiguration};
use crate::rule::RuleId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declarative exclusions
///
/// Keys are written as `"Entity"` or `"Entity.Property"`. Rule-scoped
/// entries are keyed by the stable rule code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExclusionsConfig {
    /// Keys suppressed from every rule
    #[serde(default)]
    pub global: Vec<String>,

    /// Keys suppressed from a single rule, keyed by rule code
    #[serde(default)]
    pub rules: HashMap<String, Vec<String>>,
}

/// Check selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecksConfig {
    /// Rule codes to skip entirely
    #[serde(default)]
    pub skip: Vec<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Exclusion declarations
    #[serde(default)]
    pub exclusions: ExclusionsConfig,

    /// Check selection
    #[serde(default)]
    pub checks: ChecksConfig,
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Apply the declared exclusions to a builder
    ///
    /// Unknown rule codes are rejected — the catalogue is a closed set, so a
    /// code that parses to nothing is a typo. Keys that match nothing in the
    /// eventual model are deliberately left inert. Every problem is recorded
    /// on the builder and surfaced by its `build`.
    pub fn apply_exclusions(&self, builder: &mut ExclusionBuilder) {
        for path in &self.exclusions.global {
            match parse_exclusion_path(path) {
                Ok((entity, None)) => {
                    builder.exclude_entity_from_all_rules(entity);
                }
                Ok((entity, Some(property))) => {
                    builder.exclude_property_from_all_rules(entity, property);
                }
                Err(error) => builder.record_error(error),
            }
        }

        for (code, paths) in &self.exclusions.rules {
            let Some(rule) = RuleId::from_code(code) else {
                builder.record_error(ConfigError::UnknownRule(code.clone()));
                continue;
            };

            for path in paths {
                match parse_exclusion_path(path) {
                    Ok(parsed) => {
                        builder.for_rule(rule, |scope| match parsed {
                            (entity, None) => {
                                scope.exclude_entity(entity);
                            }
                            (entity, Some(property)) => {
                                scope.exclude_property(entity, property);
                            }
                        });
                    }
                    Err(error) => builder.record_error(error),
                }
            }
        }
    }

    /// Build a frozen exclusion configuration from this config alone
    pub fn exclusions(&self) -> Result<ExclusionConfiguration, ConfigError> {
        let mut builder = ExclusionBuilder::new();
        self.apply_exclusions(&mut builder);
        builder.build()
    }

    /// Parse the skip list into rule identifiers
    pub fn skipped_rules(&self) -> Result<Vec<RuleId>, ConfigError> {
        self.checks
            .skip
            .iter()
            .map(|code| {
                RuleId::from_code(code).ok_or_else(|| ConfigError::UnknownRule(code.clone()))
            })
            .collect()
    }
}

/// Split an exclusion path into entity and optional property
fn parse_exclusion_path(path: &str) -> Result<(String, Option<String>), ConfigError> {
    let invalid = || ConfigError::InvalidExclusionPath(path.to_string());

    let mut parts = path.split('.');
    let entity = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;

    match (parts.next(), parts.next()) {
        (None, _) => Ok((entity.to_string(), None)),
        (Some(property), None) if !property.is_empty() => {
            Ok((entity.to_string(), Some(property.to_string())))
        }
        _ => Err(invalid()),
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("invalid property selector '{0}': expected a simple member access")]
    InvalidSelector(String),

    #[error("invalid exclusion path '{0}': expected 'Entity' or 'Entity.Property'")]
    InvalidExclusionPath(String),

    #[error("unknown rule code '{0}'")]
    UnknownRule(String),
}
