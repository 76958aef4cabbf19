//! FNOL claims application layer
//!
//! Configuration loading, tracing setup, and the in-memory wiring used by the
//! `fnol-demo` binary and by integration tests.

pub mod config;
pub mod error;
pub mod module;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
pub use module::InMemoryClaimsModule;
pub use telemetry::init_tracing;
