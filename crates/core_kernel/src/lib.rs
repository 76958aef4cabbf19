//! Core Kernel - Foundational types shared by the FNOL claims crates
//!
//! This crate provides the building blocks used by the domain and application layers:
//! - String-backed identifiers with generated defaults
//! - An injectable clock so time-dependent construction stays deterministic in tests
//! - The port error type and marker trait for collaborator interfaces

pub mod identifiers;
pub mod temporal;
pub mod ports;

pub use identifiers::{AttachmentId, ClaimId, PolicyId, SubmissionId};
pub use temporal::{Clock, FixedClock, SystemClock};
pub use ports::{DomainPort, PortError};
