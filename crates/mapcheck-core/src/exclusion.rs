//! Exclusion keys, configuration, and the declarative builder
//!
//! Exclusions suppress violations for a specific entity, or entity+property,
//! either globally (every rule) or scoped to one rule. The configuration is
//! built once per run and frozen; the resolver in the rules crate answers
//! lookups against it.

use crate::config::ConfigError;
use crate::rule::RuleId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Identity of an excluded entity or entity+property
///
/// An entity-level key (`property` absent) is a distinct value from any
/// property-level key on the same entity; the resolver checks entity-level
/// suppression explicitly rather than inferring it from key equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusionKey {
    /// Entity name
    pub entity: String,

    /// Property name; absent for entity-level keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl ExclusionKey {
    /// Create an entity-level key
    pub fn entity(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            property: None,
        }
    }

    /// Create a property-level key
    pub fn property(entity: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            property: Some(property.into()),
        }
    }

    /// Whether this key suppresses the whole entity
    pub fn is_entity_level(&self) -> bool {
        self.property.is_none()
    }

    fn matches(&self, entity: &str, property: Option<&str>) -> bool {
        self.entity == entity && self.property.as_deref() == property
    }
}

impl std::fmt::Display for ExclusionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.property {
            Some(property) => write!(f, "{}.{}", self.entity, property),
            None => write!(f, "{}", self.entity),
        }
    }
}

/// Frozen exclusion configuration for one validation run
///
/// Built by [`ExclusionBuilder`] and immutable thereafter. A key that matches
/// nothing in the current model is silently inert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExclusionConfiguration {
    global: HashSet<ExclusionKey>,
    per_rule: HashMap<RuleId, HashSet<ExclusionKey>>,
}

impl ExclusionConfiguration {
    /// Membership check against the global set for exactly this key shape
    pub fn global_contains(&self, entity: &str, property: Option<&str>) -> bool {
        self.global.iter().any(|k| k.matches(entity, property))
    }

    /// Membership check against one rule's set for exactly this key shape
    pub fn rule_contains(&self, rule: RuleId, entity: &str, property: Option<&str>) -> bool {
        self.per_rule
            .get(&rule)
            .is_some_and(|keys| keys.iter().any(|k| k.matches(entity, property)))
    }

    /// Number of global keys
    pub fn global_len(&self) -> usize {
        self.global.len()
    }

    /// Rules that carry scoped exclusions
    pub fn scoped_rules(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.per_rule.keys().copied()
    }
}

/// Validate a property selector as a simple member access
///
/// Rust has no expression trees to inspect, so the configuration surface
/// takes the member name literally and rejects anything that is not a bare
/// identifier (paths, calls, whitespace).
fn is_simple_member_access(selector: &str) -> bool {
    let mut chars = selector.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Declarative builder for an [`ExclusionConfiguration`]
///
/// Invalid selectors are recorded as they are seen and surfaced by
/// [`ExclusionBuilder::build`], so a misconfiguration fails the run before
/// any rule executes.
#[derive(Debug, Default)]
pub struct ExclusionBuilder {
    global: HashSet<ExclusionKey>,
    per_rule: HashMap<RuleId, HashSet<ExclusionKey>>,
    errors: Vec<ConfigError>,
}

impl ExclusionBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress an entity from every rule
    pub fn exclude_entity_from_all_rules(&mut self, entity: impl Into<String>) -> &mut Self {
        self.global.insert(ExclusionKey::entity(entity));
        self
    }

    /// Suppress one property from every rule
    pub fn exclude_property_from_all_rules(
        &mut self,
        entity: impl Into<String>,
        property: impl Into<String>,
    ) -> &mut Self {
        let property = property.into();
        if is_simple_member_access(&property) {
            self.global.insert(ExclusionKey::property(entity, property));
        } else {
            self.errors.push(ConfigError::InvalidSelector(property));
        }
        self
    }

    /// Configure exclusions scoped to a single rule
    pub fn for_rule(&mut self, rule: RuleId, configure: impl FnOnce(&mut RuleScope<'_>)) -> &mut Self {
        let keys = self.per_rule.entry(rule).or_default();
        let mut scope = RuleScope {
            keys,
            errors: &mut self.errors,
        };
        configure(&mut scope);
        self
    }

    /// Record a configuration error to be surfaced by [`ExclusionBuilder::build`]
    pub(crate) fn record_error(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    /// Freeze the configuration
    ///
    /// Returns the first configuration error recorded while building.
    pub fn build(self) -> Result<ExclusionConfiguration, ConfigError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }

        Ok(ExclusionConfiguration {
            global: self.global,
            per_rule: self.per_rule,
        })
    }
}

/// Exclusion surface scoped to one rule inside [`ExclusionBuilder::for_rule`]
#[derive(Debug)]
pub struct RuleScope<'a> {
    keys: &'a mut HashSet<ExclusionKey>,
    errors: &'a mut Vec<ConfigError>,
}

impl RuleScope<'_> {
    /// Suppress an entity from this rule only
    pub fn exclude_entity(&mut self, entity: impl Into<String>) -> &mut Self {
        self.keys.insert(ExclusionKey::entity(entity));
        self
    }

    /// Suppress one property from this rule only
    pub fn exclude_property(
        &mut self,
        entity: impl Into<String>,
        property: impl Into<String>,
    ) -> &mut Self {
        let property = property.into();
        if is_simple_member_access(&property) {
            self.keys.insert(ExclusionKey::property(entity, property));
        } else {
            self.errors.push(ConfigError::InvalidSelector(property));
        }
        self
    }
}
