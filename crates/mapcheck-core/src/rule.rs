//! Rule identifiers
//!
//! IMPORTANT: Rule codes are versioned and stable.
//! NEVER rename or remove codes - they are part of the public API.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};

/// Rule identifier registry (v1)
///
/// A closed set of identifiers known at compile time. Exclusion sets, the
/// rule catalogue, and the config file all key off these codes; dispatch is
/// an explicit match, never a runtime type lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleId {
    /// Primary-key properties must be integers
    PrimaryKeysMustBeInts,

    /// Primary-key properties must not be GUIDs
    ProhibitGuidPrimaryKeys,

    /// Boolean properties must not be nullable
    ProhibitNullableBooleans,

    /// String properties must not be nullable
    ProhibitNullableStrings,

    /// String properties must declare a maximum length
    StringsMustHaveMaxLength,

    /// Table names must be plural
    TableNamesMustBePlural,

    /// Table names must be PascalCase
    TableNamesMustBePascalCase,

    /// Property names must be PascalCase
    PropertyNamesMustBePascalCase,

    /// Foreign-key properties must end with "Id"
    ForeignKeysMustEndWithId,

    /// A single-column primary key must be named "{EntityName}Id"
    PrimaryKeyMustBeEntityNameId,

    /// Date/time properties must end with "Date"
    DateTimesMustEndWithDate,

    /// Boolean properties must start with a recognized prefix
    BooleansMustStartWithPrefix,

    /// Non-key GUID properties must end with "Unique"
    GuidsMustEndWithUnique,

    /// Enum properties must end with "Type"
    EnumsMustEndWithType,
}

impl RuleId {
    /// The full catalogue, in canonical execution order
    pub const ALL: [RuleId; 14] = [
        Self::PrimaryKeysMustBeInts,
        Self::ProhibitGuidPrimaryKeys,
        Self::ProhibitNullableBooleans,
        Self::ProhibitNullableStrings,
        Self::StringsMustHaveMaxLength,
        Self::TableNamesMustBePlural,
        Self::TableNamesMustBePascalCase,
        Self::PropertyNamesMustBePascalCase,
        Self::ForeignKeysMustEndWithId,
        Self::PrimaryKeyMustBeEntityNameId,
        Self::DateTimesMustEndWithDate,
        Self::BooleansMustStartWithPrefix,
        Self::GuidsMustEndWithUnique,
        Self::EnumsMustEndWithType,
    ];

    /// Get the rule code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryKeysMustBeInts => "PRIMARY_KEYS_MUST_BE_INTS",
            Self::ProhibitGuidPrimaryKeys => "PROHIBIT_GUID_PRIMARY_KEYS",
            Self::ProhibitNullableBooleans => "PROHIBIT_NULLABLE_BOOLEANS",
            Self::ProhibitNullableStrings => "PROHIBIT_NULLABLE_STRINGS",
            Self::StringsMustHaveMaxLength => "STRINGS_MUST_HAVE_MAX_LENGTH",
            Self::TableNamesMustBePlural => "TABLE_NAMES_MUST_BE_PLURAL",
            Self::TableNamesMustBePascalCase => "TABLE_NAMES_MUST_BE_PASCAL_CASE",
            Self::PropertyNamesMustBePascalCase => "PROPERTY_NAMES_MUST_BE_PASCAL_CASE",
            Self::ForeignKeysMustEndWithId => "FOREIGN_KEYS_MUST_END_WITH_ID",
            Self::PrimaryKeyMustBeEntityNameId => "PRIMARY_KEY_MUST_BE_ENTITY_NAME_ID",
            Self::DateTimesMustEndWithDate => "DATE_TIMES_MUST_END_WITH_DATE",
            Self::BooleansMustStartWithPrefix => "BOOLEANS_MUST_START_WITH_PREFIX",
            Self::GuidsMustEndWithUnique => "GUIDS_MUST_END_WITH_UNIQUE",
            Self::EnumsMustEndWithType => "ENUMS_MUST_END_WITH_TYPE",
        }
    }

    /// Human-readable rule name, used in failure messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PrimaryKeysMustBeInts => "Primary keys must be ints",
            Self::ProhibitGuidPrimaryKeys => "Prohibit GUID primary keys",
            Self::ProhibitNullableBooleans => "Prohibit nullable booleans",
            Self::ProhibitNullableStrings => "Prohibit nullable strings",
            Self::StringsMustHaveMaxLength => "Strings must have max length",
            Self::TableNamesMustBePlural => "Table names must be plural",
            Self::TableNamesMustBePascalCase => "Table names must be PascalCase",
            Self::PropertyNamesMustBePascalCase => "Property names must be PascalCase",
            Self::ForeignKeysMustEndWithId => "Foreign keys must end with Id",
            Self::PrimaryKeyMustBeEntityNameId => "Primary key must be named {EntityName}Id",
            Self::DateTimesMustEndWithDate => "Date/times must end with Date",
            Self::BooleansMustStartWithPrefix => "Booleans must start with a recognized prefix",
            Self::GuidsMustEndWithUnique => "GUIDs must end with Unique",
            Self::EnumsMustEndWithType => "Enums must end with Type",
        }
    }

    /// Parse a stable code back into an identifier
    ///
    /// Returns `None` for codes outside the catalogue; the config layer
    /// turns that into an unknown-rule error.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == code)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
