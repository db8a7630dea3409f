//! Violation records

use serde::{Deserialize, Serialize};

/// One convention failure
///
/// Created by a rule during validation, collected by the harness, and
/// rendered into the failure detail of a check. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViolationRecord {
    /// Name of the owning mapping context
    pub context_name: String,

    /// Name of the entity the violation belongs to
    pub entity_name: String,

    /// Offending property; absent for entity-level and table-level violations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
}

impl ViolationRecord {
    /// Create an entity-level violation (no property)
    pub fn entity(context: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            context_name: context.into(),
            entity_name: entity.into(),
            property_name: None,
        }
    }

    /// Create a property-level violation
    pub fn property(
        context: impl Into<String>,
        entity: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            context_name: context.into(),
            entity_name: entity.into(),
            property_name: Some(property.into()),
        }
    }
}

impl std::fmt::Display for ViolationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.property_name {
            Some(property) => {
                write!(f, "{} ({}) {}", self.context_name, self.entity_name, property)
            }
            None => write!(f, "{} ({})", self.context_name, self.entity_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_level_rendering() {
        let record = ViolationRecord::entity("SampleContext", "BlogPost");
        assert_eq!(record.to_string(), "SampleContext (BlogPost)");
        assert!(record.property_name.is_none());
    }

    #[test]
    fn property_level_rendering() {
        let record = ViolationRecord::property("SampleContext", "BlogPost", "PublishedAt");
        assert_eq!(record.to_string(), "SampleContext (BlogPost) PublishedAt");
    }

    #[test]
    fn equality_is_structural() {
        let a = ViolationRecord::property("C", "E", "P");
        let b = ViolationRecord::property("C", "E", "P");
        assert_eq!(a, b);

        let entity_level = ViolationRecord::entity("C", "E");
        assert_ne!(a, entity_level);
    }

    #[test]
    fn serialization_omits_absent_property() {
        let record = ViolationRecord::entity("C", "E");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("property_name"));
    }
}
