//! Shape conventions: nullability and length declarations

use crate::resolver::ExclusionResolver;
use crate::rule::{property_violations, ConventionRule};
use mapcheck_core::{MappingContext, PropertyKind, RuleId, ViolationRecord};

/// Boolean properties must not be nullable
///
/// A three-state flag should be an enum, not a NULL.
pub struct ProhibitNullableBooleans;

impl ConventionRule for ProhibitNullableBooleans {
    fn id(&self) -> RuleId {
        RuleId::ProhibitNullableBooleans
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.kind == PropertyKind::Boolean && property.nullable
        })
    }
}

/// String properties must not be nullable
pub struct ProhibitNullableStrings;

impl ConventionRule for ProhibitNullableStrings {
    fn id(&self) -> RuleId {
        RuleId::ProhibitNullableStrings
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.kind == PropertyKind::String && property.nullable
        })
    }
}

/// String properties must declare a maximum length
pub struct StringsMustHaveMaxLength;

impl ConventionRule for StringsMustHaveMaxLength {
    fn id(&self) -> RuleId {
        RuleId::StringsMustHaveMaxLength
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.kind == PropertyKind::String && property.max_length.is_none()
        })
    }
}
