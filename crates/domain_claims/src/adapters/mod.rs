//! Adapter implementations of the claims ports
//!
//! Only in-memory and fake adapters live here. They back the demo wiring and
//! the tests; adapters for real systems belong in their own crates.

pub mod in_memory;

pub use in_memory::{
    FakeAttachmentProvider, FakePolicyProvider, InMemoryClaimRepository, InMemorySubmissionGateway,
};
