//! Ports and Adapters Infrastructure
//!
//! Each domain defines its own port traits for the collaborators it calls
//! (stores, lookups, outbound gateways). Those traits extend [`DomainPort`]
//! and report failures with [`PortError`], so the domain can surface adapter
//! failures uniformly whichever adapter is plugged in.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        Application / Use Cases           │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  Port traits (ClaimRepository, ...)      │
//! └──────────────────────────────────────────┘
//!            ▲                    ▲
//!   ┌────────┴───────┐   ┌────────┴────────┐
//!   │ In-memory /    │   │ External system │
//!   │ fake adapters  │   │ adapters        │
//!   └────────────────┘   └─────────────────┘
//! ```

use thiserror::Error;

/// Error type for port operations
///
/// Absence of a record is not an error at the port level; lookups return
/// `Ok(None)` and the caller decides what absence means.
#[derive(Debug, Error)]
pub enum PortError {
    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// The adapter itself failed
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl PortError {
    /// Creates a ServiceUnavailable error
    pub fn service_unavailable(service: impl Into<String>) -> Self {
        PortError::ServiceUnavailable {
            service: service.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    ///
    /// Retrying is left to the caller or the adapter itself; the domain never retries.
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::ServiceUnavailable { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared behind `Arc<dyn ...>` by use cases, so every
/// implementation must be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}
