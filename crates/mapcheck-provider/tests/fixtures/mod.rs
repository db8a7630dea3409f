//! Shared model fixtures for provider integration tests

use mapcheck_core::{EntityDescriptor, MappingContext, PropertyDescriptor, PropertyKind};

/// A small, convention-clean model
pub fn clean_model() -> Vec<MappingContext> {
    let invoice = EntityDescriptor::new("Invoice", "Invoices")
        .with_property(PropertyDescriptor::new("InvoiceId", PropertyKind::Integer).primary_key())
        .with_property(PropertyDescriptor::new("Number", PropertyKind::String).with_max_length(32))
        .with_property(
            PropertyDescriptor::new("CustomerId", PropertyKind::Integer).foreign_key(),
        )
        .with_property(PropertyDescriptor::new("IssuedDate", PropertyKind::DateTime));

    let customer = EntityDescriptor::new("Customer", "Customers")
        .with_property(PropertyDescriptor::new("CustomerId", PropertyKind::Integer).primary_key())
        .with_property(PropertyDescriptor::new("Name", PropertyKind::String).with_max_length(100))
        .with_property(PropertyDescriptor::new("IsActive", PropertyKind::Boolean));

    vec![MappingContext::from_entities(
        "SalesContext",
        vec![invoice, customer],
    )]
}

/// A model that breaks the unique-property-name invariant
pub fn duplicate_property_model() -> Vec<MappingContext> {
    let entity = EntityDescriptor::new("User", "Users")
        .with_property(PropertyDescriptor::new("UserId", PropertyKind::Integer).primary_key())
        .with_property(PropertyDescriptor::new("Name", PropertyKind::String).with_max_length(50))
        .with_property(PropertyDescriptor::new("Name", PropertyKind::String).with_max_length(50));

    vec![MappingContext::from_entities("AppContext", vec![entity])]
}
