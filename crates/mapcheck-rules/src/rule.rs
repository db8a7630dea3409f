//! The convention rule contract and the fixed catalogue
//!
//! Dispatch from a rule identifier to its implementation is an explicit
//! match over the closed [`RuleId`] set — there is no registry to mutate and
//! no runtime type lookup.

use crate::keys::{
    ForeignKeysMustEndWithId, PrimaryKeyMustBeEntityNameId, PrimaryKeysMustBeInts,
    ProhibitGuidPrimaryKeys,
};
use crate::naming::{
    BooleansMustStartWithPrefix, DateTimesMustEndWithDate, EnumsMustEndWithType,
    GuidsMustEndWithUnique, PropertyNamesMustBePascalCase, TableNamesMustBePascalCase,
    TableNamesMustBePlural,
};
use crate::resolver::ExclusionResolver;
use crate::shape::{ProhibitNullableBooleans, ProhibitNullableStrings, StringsMustHaveMaxLength};
use mapcheck_core::{EntityDescriptor, MappingContext, PropertyDescriptor, RuleId, ViolationRecord};

/// One naming/shape convention applied uniformly across the model
///
/// Rules are pure: they read the contexts and the resolver, and yield a
/// violation for every unexcluded failure. Output order follows context,
/// entity, then property iteration order, so two runs over the same model
/// produce identical sequences.
pub trait ConventionRule {
    /// The rule's identifier in the catalogue
    fn id(&self) -> RuleId;

    /// Run the rule over every context
    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord>;
}

/// Map a rule identifier to its implementation
pub fn rule_for(id: RuleId) -> Box<dyn ConventionRule> {
    match id {
        RuleId::PrimaryKeysMustBeInts => Box::new(PrimaryKeysMustBeInts),
        RuleId::ProhibitGuidPrimaryKeys => Box::new(ProhibitGuidPrimaryKeys),
        RuleId::ProhibitNullableBooleans => Box::new(ProhibitNullableBooleans),
        RuleId::ProhibitNullableStrings => Box::new(ProhibitNullableStrings),
        RuleId::StringsMustHaveMaxLength => Box::new(StringsMustHaveMaxLength),
        RuleId::TableNamesMustBePlural => Box::new(TableNamesMustBePlural),
        RuleId::TableNamesMustBePascalCase => Box::new(TableNamesMustBePascalCase),
        RuleId::PropertyNamesMustBePascalCase => Box::new(PropertyNamesMustBePascalCase),
        RuleId::ForeignKeysMustEndWithId => Box::new(ForeignKeysMustEndWithId),
        RuleId::PrimaryKeyMustBeEntityNameId => Box::new(PrimaryKeyMustBeEntityNameId),
        RuleId::DateTimesMustEndWithDate => Box::new(DateTimesMustEndWithDate),
        RuleId::BooleansMustStartWithPrefix => Box::new(BooleansMustStartWithPrefix),
        RuleId::GuidsMustEndWithUnique => Box::new(GuidsMustEndWithUnique),
        RuleId::EnumsMustEndWithType => Box::new(EnumsMustEndWithType),
    }
}

/// Instantiate the full catalogue in canonical order
pub fn catalogue() -> Vec<Box<dyn ConventionRule>> {
    RuleId::ALL.iter().map(|id| rule_for(*id)).collect()
}

/// Walk every property, yielding a record where `offends` holds
///
/// The exclusion check runs only for offending properties, with the
/// property-level key.
pub(crate) fn property_violations<F>(
    rule: RuleId,
    contexts: &[MappingContext],
    resolver: &ExclusionResolver<'_>,
    mut offends: F,
) -> Vec<ViolationRecord>
where
    F: FnMut(&EntityDescriptor, &PropertyDescriptor) -> bool,
{
    let mut violations = Vec::new();
    for context in contexts {
        for entity in &context.entities {
            for property in &entity.properties {
                if !offends(entity, property) {
                    continue;
                }
                if resolver.is_excluded(rule, &entity.name, Some(&property.name)) {
                    continue;
                }
                violations.push(ViolationRecord::property(
                    &context.name,
                    &entity.name,
                    &property.name,
                ));
            }
        }
    }
    violations
}

/// Walk every entity, yielding an entity-level record where `offends` holds
///
/// Table-level and entity-level findings consult only the entity-level key.
pub(crate) fn entity_violations<F>(
    rule: RuleId,
    contexts: &[MappingContext],
    resolver: &ExclusionResolver<'_>,
    mut offends: F,
) -> Vec<ViolationRecord>
where
    F: FnMut(&EntityDescriptor) -> bool,
{
    let mut violations = Vec::new();
    for context in contexts {
        for entity in &context.entities {
            if !offends(entity) {
                continue;
            }
            if resolver.is_excluded(rule, &entity.name, None) {
                continue;
            }
            violations.push(ViolationRecord::entity(&context.name, &entity.name));
        }
    }
    violations
}
