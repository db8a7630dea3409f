//! Mapcheck harness
//!
//! Lifecycle orchestration for a convention run: acquisition, declarative
//! exclusion configuration, check execution, aggregation, teardown.

pub mod harness;

pub use harness::{run_conventions, ConventionHarness, HarnessError, HarnessState};
