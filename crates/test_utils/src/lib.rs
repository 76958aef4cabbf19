//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! FNOL claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built incidents, claims, clocks and wired adapters
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
