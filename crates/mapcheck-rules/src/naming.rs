//! Naming conventions: table names, casing, and kind-specific affixes

use crate::heuristics::{is_pascal_case, is_plural_table_name};
use crate::resolver::ExclusionResolver;
use crate::rule::{entity_violations, property_violations, ConventionRule};
use mapcheck_core::{MappingContext, PropertyKind, RuleId, ViolationRecord};

/// Recognized prefixes for boolean property names
const BOOLEAN_PREFIXES: &[&str] = &["Is", "Has", "Can"];

/// Table names must be plural
///
/// Judged by the heuristic in [`crate::heuristics`]; entity-level finding.
pub struct TableNamesMustBePlural;

impl ConventionRule for TableNamesMustBePlural {
    fn id(&self) -> RuleId {
        RuleId::TableNamesMustBePlural
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        entity_violations(self.id(), contexts, resolver, |entity| {
            !is_plural_table_name(&entity.table_name)
        })
    }
}

/// Table names must be PascalCase; entity-level finding
pub struct TableNamesMustBePascalCase;

impl ConventionRule for TableNamesMustBePascalCase {
    fn id(&self) -> RuleId {
        RuleId::TableNamesMustBePascalCase
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        entity_violations(self.id(), contexts, resolver, |entity| {
            !is_pascal_case(&entity.table_name)
        })
    }
}

/// Property names must be PascalCase
pub struct PropertyNamesMustBePascalCase;

impl ConventionRule for PropertyNamesMustBePascalCase {
    fn id(&self) -> RuleId {
        RuleId::PropertyNamesMustBePascalCase
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            !is_pascal_case(&property.name)
        })
    }
}

/// Date/time properties must end with "Date"
pub struct DateTimesMustEndWithDate;

impl ConventionRule for DateTimesMustEndWithDate {
    fn id(&self) -> RuleId {
        RuleId::DateTimesMustEndWithDate
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.kind == PropertyKind::DateTime && !property.name.ends_with("Date")
        })
    }
}

/// Boolean properties must start with a recognized prefix
pub struct BooleansMustStartWithPrefix;

impl ConventionRule for BooleansMustStartWithPrefix {
    fn id(&self) -> RuleId {
        RuleId::BooleansMustStartWithPrefix
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.kind == PropertyKind::Boolean
                && !BOOLEAN_PREFIXES
                    .iter()
                    .any(|prefix| property.name.starts_with(prefix))
        })
    }
}

/// Non-key GUID properties must end with "Unique"
///
/// Primary-key GUIDs are the key rules' concern, not a naming matter.
pub struct GuidsMustEndWithUnique;

impl ConventionRule for GuidsMustEndWithUnique {
    fn id(&self) -> RuleId {
        RuleId::GuidsMustEndWithUnique
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.kind == PropertyKind::Guid
                && !property.is_primary_key
                && !property.name.ends_with("Unique")
        })
    }
}

/// Enum properties must end with "Type"
pub struct EnumsMustEndWithType;

impl ConventionRule for EnumsMustEndWithType {
    fn id(&self) -> RuleId {
        RuleId::EnumsMustEndWithType
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.kind == PropertyKind::Enum && !property.name.ends_with("Type")
        })
    }
}
