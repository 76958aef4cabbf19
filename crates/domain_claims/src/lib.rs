//! Claims Intake Domain
//!
//! This crate implements First Notice of Loss (FNOL) intake and submission:
//! capturing an incident, opening a claim for it, and submitting the claim to
//! downstream processing through a MANUAL or an AUTO channel.
//!
//! # Submission flow
//!
//! ```text
//! Incident -> Claim (DRAFT | SUBMITTED) -> ClaimSubmission -> ClaimSubmitted event
//! ```
//!
//! Construction goes through step builders ([`IncidentBuilder`],
//! [`ClaimBuilder`], [`ClaimSubmissionBuilder`], [`DomainEventBuilder`]).
//! Collaborators are reached through the traits in [`ports`].

pub mod incident;
pub mod claim;
pub mod submission;
pub mod events;
pub mod ports;
pub mod adapters;
pub mod services;
pub mod error;

pub use incident::{Incident, IncidentBuilder, IncidentDetails, IncidentType};
pub use claim::{Claim, ClaimBuilder, ClaimStatus, AUTO_CHANNEL, MANUAL_CHANNEL};
pub use submission::{ClaimSubmission, ClaimSubmissionBuilder, SubmissionChannel};
pub use events::{ClaimSubmittedEvent, DomainEvent, DomainEventBuilder};
pub use ports::{AttachmentProvider, ClaimRepository, PolicyProvider, SubmissionGateway};
pub use services::{SubmissionResult, SubmitClaimUseCase};
pub use error::ClaimError;
