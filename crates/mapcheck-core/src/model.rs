//! Mapping metadata model
//!
//! A read-only projection of an object-relational mapping context into
//! entities, properties, keys, and table names. The model is produced by an
//! external provider and only borrowed during a validation pass — nothing in
//! this crate mutates it.

use serde::{Deserialize, Serialize};

/// Logical kind of a mapped property
///
/// Maps store-specific column types to the common representation the
/// convention rules operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Integer type (any precision)
    Integer,

    /// Globally unique identifier
    Guid,

    /// String/text type
    String,

    /// Boolean type
    Boolean,

    /// Date or timestamp type
    DateTime,

    /// Enumeration mapped to a column
    Enum,

    /// Anything the projection cannot classify
    Other,
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "INTEGER"),
            Self::Guid => write!(f, "GUID"),
            Self::String => write!(f, "STRING"),
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::DateTime => write!(f, "DATETIME"),
            Self::Enum => write!(f, "ENUM"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

/// A mapped property of an entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name
    pub name: String,

    /// Logical kind
    pub kind: PropertyKind,

    /// Whether the mapped column accepts NULL
    #[serde(default)]
    pub nullable: bool,

    /// Maximum length; meaningful only for `String` properties
    #[serde(default)]
    pub max_length: Option<u32>,

    /// Whether the property is part of the primary key
    #[serde(default)]
    pub is_primary_key: bool,

    /// Whether the property participates in a foreign key
    #[serde(default)]
    pub is_foreign_key: bool,
}

impl PropertyDescriptor {
    /// Create a new non-nullable, non-key property
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: false,
            max_length: None,
            is_primary_key: false,
            is_foreign_key: false,
        }
    }

    /// Mark the property as nullable
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the maximum length
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Mark the property as part of the primary key
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Mark the property as a foreign key
    pub fn foreign_key(mut self) -> Self {
        self.is_foreign_key = true;
        self
    }
}

/// A mapped entity with its table name and ordered properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    /// Stable entity name
    pub name: String,

    /// Name of the table the entity maps to
    pub table_name: String,

    /// Ordered properties
    pub properties: Vec<PropertyDescriptor>,
}

impl EntityDescriptor {
    /// Create a new entity with no properties
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property, preserving declaration order
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Find a property by name
    pub fn find_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Properties forming the primary key, in declaration order
    pub fn primary_key(&self) -> Vec<&PropertyDescriptor> {
        self.properties.iter().filter(|p| p.is_primary_key).collect()
    }

    /// The primary-key property, when the key is single-column
    pub fn single_column_primary_key(&self) -> Option<&PropertyDescriptor> {
        let key = self.primary_key();
        match key.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Foreign-key properties, in declaration order
    pub fn foreign_keys(&self) -> Vec<&PropertyDescriptor> {
        self.properties.iter().filter(|p| p.is_foreign_key).collect()
    }
}

/// A named collection of entity-to-table mappings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingContext {
    /// Context name (e.g. "SalesContext")
    pub name: String,

    /// Ordered entities
    pub entities: Vec<EntityDescriptor>,
}

impl MappingContext {
    /// Create a new empty context
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
        }
    }

    /// Create a context from entities
    pub fn from_entities(name: impl Into<String>, entities: Vec<EntityDescriptor>) -> Self {
        Self {
            name: name.into(),
            entities,
        }
    }

    /// Append an entity, preserving order
    pub fn with_entity(mut self, entity: EntityDescriptor) -> Self {
        self.entities.push(entity);
        self
    }

    /// Find an entity by name
    pub fn find_entity(&self, name: &str) -> Option<&EntityDescriptor> {
        self.entities.iter().find(|e| e.name == name)
    }
}

/// Model integrity error
///
/// Raised when a materialized model breaks an invariant the rules rely on.
/// Providers run these checks when they load a snapshot; an in-memory model
/// built by hand in tests is trusted as-is.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("duplicate property '{property}' on entity '{entity}' in context '{context}'")]
    DuplicateProperty {
        context: String,
        entity: String,
        property: String,
    },

    #[error("entity '{entity}' in context '{context}' has no primary key")]
    MissingPrimaryKey { context: String, entity: String },

    #[error("property '{property}' on entity '{entity}' in context '{context}' has max length 0")]
    InvalidMaxLength {
        context: String,
        entity: String,
        property: String,
    },

    #[error(
        "property '{property}' on entity '{entity}' in context '{context}' is a nullable single-column primary key"
    )]
    NullableSingleColumnKey {
        context: String,
        entity: String,
        property: String,
    },
}

/// Check model invariants across a set of contexts
///
/// Invariants: property names are unique within an entity, every entity has
/// a non-empty primary key, `max_length` is positive when present, and a
/// single-column primary key is never nullable. The first broken invariant
/// is returned.
pub fn validate_model(contexts: &[MappingContext]) -> Result<(), ModelError> {
    for context in contexts {
        for entity in &context.entities {
            let mut seen = std::collections::HashSet::new();
            for property in &entity.properties {
                if !seen.insert(property.name.as_str()) {
                    return Err(ModelError::DuplicateProperty {
                        context: context.name.clone(),
                        entity: entity.name.clone(),
                        property: property.name.clone(),
                    });
                }

                if property.max_length == Some(0) {
                    return Err(ModelError::InvalidMaxLength {
                        context: context.name.clone(),
                        entity: entity.name.clone(),
                        property: property.name.clone(),
                    });
                }
            }

            if entity.primary_key().is_empty() {
                return Err(ModelError::MissingPrimaryKey {
                    context: context.name.clone(),
                    entity: entity.name.clone(),
                });
            }

            if let Some(key) = entity.single_column_primary_key() {
                if key.nullable {
                    return Err(ModelError::NullableSingleColumnKey {
                        context: context.name.clone(),
                        entity: entity.name.clone(),
                        property: key.name.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn invoice() -> EntityDescriptor {
        EntityDescriptor::new("Invoice", "Invoices")
            .with_property(
                PropertyDescriptor::new("InvoiceId", PropertyKind::Integer).primary_key(),
            )
            .with_property(
                PropertyDescriptor::new("Number", PropertyKind::String).with_max_length(32),
            )
            .with_property(
                PropertyDescriptor::new("CustomerId", PropertyKind::Integer).foreign_key(),
            )
    }

    #[test]
    fn property_kind_display() {
        assert_eq!(PropertyKind::Integer.to_string(), "INTEGER");
        assert_eq!(PropertyKind::DateTime.to_string(), "DATETIME");
    }

    #[test]
    fn entity_accessors() {
        let entity = invoice();

        assert!(entity.find_property("Number").is_some());
        assert!(entity.find_property("nope").is_none());

        let key = entity.primary_key();
        assert_eq!(key.len(), 1);
        assert_eq!(key[0].name, "InvoiceId");
        assert_eq!(entity.single_column_primary_key().unwrap().name, "InvoiceId");

        let fks = entity.foreign_keys();
        assert_eq!(fks.len(), 1);
        assert_eq!(fks[0].name, "CustomerId");
    }

    #[test]
    fn composite_key_has_no_single_column_key() {
        let entity = EntityDescriptor::new("OrderLine", "OrderLines")
            .with_property(PropertyDescriptor::new("OrderId", PropertyKind::Integer).primary_key())
            .with_property(PropertyDescriptor::new("LineNo", PropertyKind::Integer).primary_key());

        assert_eq!(entity.primary_key().len(), 2);
        assert!(entity.single_column_primary_key().is_none());
    }

    #[test]
    fn validate_accepts_well_formed_model() {
        let contexts = vec![MappingContext::from_entities("SalesContext", vec![invoice()])];
        assert!(validate_model(&contexts).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_property() {
        let entity = EntityDescriptor::new("User", "Users")
            .with_property(PropertyDescriptor::new("UserId", PropertyKind::Integer).primary_key())
            .with_property(PropertyDescriptor::new("Name", PropertyKind::String))
            .with_property(PropertyDescriptor::new("Name", PropertyKind::String));

        let contexts = vec![MappingContext::from_entities("AppContext", vec![entity])];
        assert!(matches!(
            validate_model(&contexts),
            Err(ModelError::DuplicateProperty { .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_primary_key() {
        let entity = EntityDescriptor::new("Log", "Logs")
            .with_property(PropertyDescriptor::new("Message", PropertyKind::String));

        let contexts = vec![MappingContext::from_entities("AppContext", vec![entity])];
        assert!(matches!(
            validate_model(&contexts),
            Err(ModelError::MissingPrimaryKey { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_max_length() {
        let entity = EntityDescriptor::new("User", "Users")
            .with_property(PropertyDescriptor::new("UserId", PropertyKind::Integer).primary_key())
            .with_property(PropertyDescriptor::new("Name", PropertyKind::String).with_max_length(0));

        let contexts = vec![MappingContext::from_entities("AppContext", vec![entity])];
        assert!(matches!(
            validate_model(&contexts),
            Err(ModelError::InvalidMaxLength { .. })
        ));
    }

    #[test]
    fn validate_rejects_nullable_single_column_key() {
        let entity = EntityDescriptor::new("User", "Users").with_property(
            PropertyDescriptor::new("UserId", PropertyKind::Integer)
                .primary_key()
                .nullable(),
        );

        let contexts = vec![MappingContext::from_entities("AppContext", vec![entity])];
        assert!(matches!(
            validate_model(&contexts),
            Err(ModelError::NullableSingleColumnKey { .. })
        ));
    }

    #[test]
    fn model_json_round_trip() {
        let contexts = vec![MappingContext::from_entities("SalesContext", vec![invoice()])];
        let json = serde_json::to_string(&contexts).unwrap();
        let parsed: Vec<MappingContext> = serde_json::from_str(&json).unwrap();
        assert_eq!(contexts, parsed);
    }
}
