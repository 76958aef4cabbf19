//! Claims domain errors

use thiserror::Error;

use core_kernel::PortError;
use crate::incident::IncidentType;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// Malformed input handed to a builder step
    #[error("{0}")]
    InvalidArgument(String),

    /// Required incident data absent at build time
    #[error(
        "{field} is required{}",
        .incident_type.map(|t| format!(" for {t}")).unwrap_or_default()
    )]
    MissingField {
        field: &'static str,
        incident_type: Option<IncidentType>,
    },

    /// Required data absent or business rule violated
    #[error("{0}")]
    InvalidState(String),

    /// Incident builder branch does not match the builder's fixed type
    #[error("This builder is for {actual}, not {attempted}")]
    TypeMismatch {
        actual: IncidentType,
        attempted: IncidentType,
    },

    /// Referenced record could not be resolved
    #[error("{0}")]
    NotFound(String),

    /// A collaborator failed
    #[error("Port error: {0}")]
    Port(#[from] PortError),
}

impl ClaimError {
    /// Creates the error for a blank text argument
    pub fn blank(field: &str) -> Self {
        ClaimError::InvalidArgument(format!("{field} must not be blank"))
    }

    /// Creates an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        ClaimError::InvalidState(message.into())
    }

    /// Creates a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        ClaimError::NotFound(message.into())
    }
}

/// Validates that a text argument is not blank, returning it owned
pub(crate) fn require_text(value: impl Into<String>, field: &str) -> Result<String, ClaimError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ClaimError::blank(field));
    }
    Ok(value)
}
