//! Application error handling

use thiserror::Error;

use domain_claims::ClaimError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Logging setup failed: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Claims(#[from] ClaimError),
}
