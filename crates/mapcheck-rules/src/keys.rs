//! Key conventions: primary-key kinds and key naming

use crate::heuristics::ends_with_ignore_ascii_case;
use crate::resolver::ExclusionResolver;
use crate::rule::{property_violations, ConventionRule};
use mapcheck_core::{MappingContext, PropertyKind, RuleId, ViolationRecord};

/// Every primary-key property must be an integer
pub struct PrimaryKeysMustBeInts;

impl ConventionRule for PrimaryKeysMustBeInts {
    fn id(&self) -> RuleId {
        RuleId::PrimaryKeysMustBeInts
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.is_primary_key && property.kind != PropertyKind::Integer
        })
    }
}

/// GUID primary keys are prohibited
///
/// Overlaps with [`PrimaryKeysMustBeInts`] on purpose: a team that allows
/// non-integer keys can still keep GUIDs out by excluding only the broader
/// rule.
pub struct ProhibitGuidPrimaryKeys;

impl ConventionRule for ProhibitGuidPrimaryKeys {
    fn id(&self) -> RuleId {
        RuleId::ProhibitGuidPrimaryKeys
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.is_primary_key && property.kind == PropertyKind::Guid
        })
    }
}

/// Foreign-key properties must end with "Id" (case-insensitive)
pub struct ForeignKeysMustEndWithId;

impl ConventionRule for ForeignKeysMustEndWithId {
    fn id(&self) -> RuleId {
        RuleId::ForeignKeysMustEndWithId
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |_, property| {
            property.is_foreign_key && !ends_with_ignore_ascii_case(&property.name, "Id")
        })
    }
}

/// A single-column primary key must be named exactly "{EntityName}Id"
///
/// Composite keys are out of scope for this rule.
pub struct PrimaryKeyMustBeEntityNameId;

impl ConventionRule for PrimaryKeyMustBeEntityNameId {
    fn id(&self) -> RuleId {
        RuleId::PrimaryKeyMustBeEntityNameId
    }

    fn validate(
        &self,
        contexts: &[MappingContext],
        resolver: &ExclusionResolver<'_>,
    ) -> Vec<ViolationRecord> {
        property_violations(self.id(), contexts, resolver, |entity, property| {
            entity
                .single_column_primary_key()
                .is_some_and(|key| key.name == property.name)
                && property.name != format!("{}Id", entity.name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcheck_core::{EntityDescriptor, ExclusionConfiguration, PropertyDescriptor};

    fn contexts(entity: EntityDescriptor) -> Vec<MappingContext> {
        vec![MappingContext::from_entities("SampleContext", vec![entity])]
    }

    fn no_exclusions() -> ExclusionConfiguration {
        ExclusionConfiguration::default()
    }

    #[test]
    fn integer_primary_key_passes() {
        let entity = EntityDescriptor::new("Invoice", "Invoices").with_property(
            PropertyDescriptor::new("InvoiceId", PropertyKind::Integer).primary_key(),
        );

        let exclusions = no_exclusions();
        let resolver = ExclusionResolver::new(&exclusions);
        assert!(PrimaryKeysMustBeInts
            .validate(&contexts(entity), &resolver)
            .is_empty());
    }

    #[test]
    fn string_primary_key_fails() {
        let entity = EntityDescriptor::new("Invoice", "Invoices")
            .with_property(PropertyDescriptor::new("InvoiceId", PropertyKind::String).primary_key());

        let exclusions = no_exclusions();
        let resolver = ExclusionResolver::new(&exclusions);
        let violations = PrimaryKeysMustBeInts.validate(&contexts(entity), &resolver);

        assert_eq!(
            violations,
            vec![ViolationRecord::property(
                "SampleContext",
                "Invoice",
                "InvoiceId"
            )]
        );
    }

    #[test]
    fn guid_primary_key_fails_both_key_rules() {
        let entity = EntityDescriptor::new("User", "Users")
            .with_property(PropertyDescriptor::new("UserId", PropertyKind::Guid).primary_key());
        let contexts = contexts(entity);

        let exclusions = no_exclusions();
        let resolver = ExclusionResolver::new(&exclusions);

        let expected = vec![ViolationRecord::property("SampleContext", "User", "UserId")];
        assert_eq!(
            ProhibitGuidPrimaryKeys.validate(&contexts, &resolver),
            expected
        );
        assert_eq!(PrimaryKeysMustBeInts.validate(&contexts, &resolver), expected);
    }

    #[test]
    fn composite_integer_key_only_checks_kinds() {
        let entity = EntityDescriptor::new("OrderLine", "OrderLines")
            .with_property(PropertyDescriptor::new("OrderId", PropertyKind::Integer).primary_key())
            .with_property(PropertyDescriptor::new("LineNo", PropertyKind::Integer).primary_key());
        let contexts = contexts(entity);

        let exclusions = no_exclusions();
        let resolver = ExclusionResolver::new(&exclusions);

        assert!(PrimaryKeysMustBeInts.validate(&contexts, &resolver).is_empty());
        // Name rule does not apply to composite keys
        assert!(PrimaryKeyMustBeEntityNameId
            .validate(&contexts, &resolver)
            .is_empty());
    }

    #[test]
    fn entity_name_id_round_trip() {
        let good = EntityDescriptor::new("Invoice", "Invoices").with_property(
            PropertyDescriptor::new("InvoiceId", PropertyKind::Integer).primary_key(),
        );
        let bad = EntityDescriptor::new("Invoice", "Invoices")
            .with_property(PropertyDescriptor::new("Id", PropertyKind::Integer).primary_key());

        let exclusions = no_exclusions();
        let resolver = ExclusionResolver::new(&exclusions);

        assert!(PrimaryKeyMustBeEntityNameId
            .validate(&contexts(good), &resolver)
            .is_empty());
        assert_eq!(
            PrimaryKeyMustBeEntityNameId.validate(&contexts(bad), &resolver),
            vec![ViolationRecord::property("SampleContext", "Invoice", "Id")]
        );
    }

    #[test]
    fn entity_name_id_is_case_sensitive() {
        let entity = EntityDescriptor::new("Invoice", "Invoices")
            .with_property(PropertyDescriptor::new("InvoiceID", PropertyKind::Integer).primary_key());

        let exclusions = no_exclusions();
        let resolver = ExclusionResolver::new(&exclusions);
        assert_eq!(
            PrimaryKeyMustBeEntityNameId
                .validate(&contexts(entity), &resolver)
                .len(),
            1
        );
    }

    #[test]
    fn foreign_key_suffix_is_case_insensitive() {
        let entity = EntityDescriptor::new("Order", "Orders")
            .with_property(PropertyDescriptor::new("OrderId", PropertyKind::Integer).primary_key())
            .with_property(PropertyDescriptor::new("CustomerID", PropertyKind::Integer).foreign_key())
            .with_property(PropertyDescriptor::new("Owner", PropertyKind::Integer).foreign_key());

        let exclusions = no_exclusions();
        let resolver = ExclusionResolver::new(&exclusions);
        let violations = ForeignKeysMustEndWithId.validate(&contexts(entity), &resolver);

        assert_eq!(
            violations,
            vec![ViolationRecord::property("SampleContext", "Order", "Owner")]
        );
    }
}
