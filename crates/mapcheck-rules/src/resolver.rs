//! Exclusion resolution
//!
//! Answers "is this entity/property excluded from rule R?" against the
//! frozen configuration. Pure lookup, no side effects.

use mapcheck_core::{ExclusionConfiguration, RuleId};

/// Layered exclusion lookup with fixed precedence
///
/// Resolution order (first match wins):
/// 1. global entity-level key — suppresses the entity from every rule;
/// 2. global property-level key, when a property is in question;
/// 3. the rule's own entity-level key;
/// 4. the rule's own property-level key, when a property is in question.
#[derive(Debug, Clone, Copy)]
pub struct ExclusionResolver<'a> {
    config: &'a ExclusionConfiguration,
}

impl<'a> ExclusionResolver<'a> {
    /// Borrow a frozen configuration for the duration of a validation pass
    pub fn new(config: &'a ExclusionConfiguration) -> Self {
        Self { config }
    }

    /// Whether the given entity (or entity+property) is excluded from `rule`
    pub fn is_excluded(&self, rule: RuleId, entity: &str, property: Option<&str>) -> bool {
        if self.config.global_contains(entity, None) {
            return true;
        }

        if let Some(property) = property {
            if self.config.global_contains(entity, Some(property)) {
                return true;
            }
        }

        if self.config.rule_contains(rule, entity, None) {
            return true;
        }

        if let Some(property) = property {
            if self.config.rule_contains(rule, entity, Some(property)) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcheck_core::ExclusionBuilder;

    fn config(build: impl FnOnce(&mut ExclusionBuilder)) -> ExclusionConfiguration {
        let mut builder = ExclusionBuilder::new();
        build(&mut builder);
        builder.build().unwrap()
    }

    #[test]
    fn nothing_excluded_by_default() {
        let config = ExclusionConfiguration::default();
        let resolver = ExclusionResolver::new(&config);

        assert!(!resolver.is_excluded(RuleId::PrimaryKeysMustBeInts, "User", None));
        assert!(!resolver.is_excluded(RuleId::PrimaryKeysMustBeInts, "User", Some("UserId")));
    }

    #[test]
    fn global_entity_key_suppresses_everything() {
        let config = config(|b| {
            b.exclude_entity_from_all_rules("User");
        });
        let resolver = ExclusionResolver::new(&config);

        // Entity-level, property-level, any rule
        assert!(resolver.is_excluded(RuleId::TableNamesMustBePlural, "User", None));
        assert!(resolver.is_excluded(RuleId::ProhibitGuidPrimaryKeys, "User", Some("UserId")));
        assert!(resolver.is_excluded(RuleId::EnumsMustEndWithType, "User", Some("Kind")));

        assert!(!resolver.is_excluded(RuleId::TableNamesMustBePlural, "Order", None));
    }

    #[test]
    fn global_property_key_suppresses_only_that_property() {
        let config = config(|b| {
            b.exclude_property_from_all_rules("User", "LegacyRef");
        });
        let resolver = ExclusionResolver::new(&config);

        assert!(resolver.is_excluded(RuleId::PropertyNamesMustBePascalCase, "User", Some("LegacyRef")));
        assert!(resolver.is_excluded(RuleId::EnumsMustEndWithType, "User", Some("LegacyRef")));

        assert!(!resolver.is_excluded(RuleId::PropertyNamesMustBePascalCase, "User", None));
        assert!(!resolver.is_excluded(RuleId::PropertyNamesMustBePascalCase, "User", Some("Name")));
    }

    #[test]
    fn rule_scoped_entity_key_stays_scoped() {
        let config = config(|b| {
            b.for_rule(RuleId::TableNamesMustBePlural, |scope| {
                scope.exclude_entity("Metadata");
            });
        });
        let resolver = ExclusionResolver::new(&config);

        assert!(resolver.is_excluded(RuleId::TableNamesMustBePlural, "Metadata", None));
        assert!(resolver.is_excluded(RuleId::TableNamesMustBePlural, "Metadata", Some("Key")));

        assert!(!resolver.is_excluded(RuleId::TableNamesMustBePascalCase, "Metadata", None));
    }

    #[test]
    fn rule_scoped_property_key_stays_scoped() {
        let config = config(|b| {
            b.for_rule(RuleId::StringsMustHaveMaxLength, |scope| {
                scope.exclude_property("Document", "Body");
            });
        });
        let resolver = ExclusionResolver::new(&config);

        assert!(resolver.is_excluded(RuleId::StringsMustHaveMaxLength, "Document", Some("Body")));

        // Other rules, other properties, and the bare entity stay in scope
        assert!(!resolver.is_excluded(RuleId::ProhibitNullableStrings, "Document", Some("Body")));
        assert!(!resolver.is_excluded(RuleId::StringsMustHaveMaxLength, "Document", Some("Title")));
        assert!(!resolver.is_excluded(RuleId::StringsMustHaveMaxLength, "Document", None));
    }

    #[test]
    fn unmatched_keys_are_inert() {
        let config = config(|b| {
            b.exclude_entity_from_all_rules("NoSuchEntity");
        });
        let resolver = ExclusionResolver::new(&config);

        assert!(!resolver.is_excluded(RuleId::PrimaryKeysMustBeInts, "User", None));
    }
}
