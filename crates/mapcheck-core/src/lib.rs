//! Mapcheck Core
//!
//! Core domain model with stable, versioned types.
//! Never rename rule codes - they are part of the public API.

pub mod config;
pub mod exclusion;
pub mod model;
pub mod report;
pub mod rule;
pub mod violation;

pub use config::{ChecksConfig, Config, ConfigError, ExclusionsConfig};
pub use exclusion::{ExclusionBuilder, ExclusionConfiguration, ExclusionKey, RuleScope};
pub use model::{
    validate_model, EntityDescriptor, MappingContext, ModelError, PropertyDescriptor, PropertyKind,
};
pub use report::{CheckResult, Report, ReportSummary, ReportVersion};
pub use rule::RuleId;
pub use violation::ViolationRecord;
