//! Port definitions for the claims domain
//!
//! These are the collaborators the submission use case calls. All calls are
//! synchronous. A lookup that finds nothing returns `Ok(None)` (or an empty
//! list); `Err` is reserved for the adapter itself failing.

use core_kernel::{AttachmentId, ClaimId, DomainPort, PolicyId, PortError};

use crate::claim::Claim;
use crate::submission::ClaimSubmission;

/// Claim store
pub trait ClaimRepository: DomainPort {
    /// Loads a claim by id
    fn get_by_id(&self, claim_id: &ClaimId) -> Result<Option<Claim>, PortError>;

    /// Stores a claim, replacing any previous version with the same id
    fn save(&self, claim: &Claim) -> Result<(), PortError>;
}

/// Resolves the business policy number for a policy id
pub trait PolicyProvider: DomainPort {
    fn get_policy_number(&self, policy_id: &PolicyId) -> Result<Option<String>, PortError>;
}

/// Lists the attachments already uploaded for a claim
pub trait AttachmentProvider: DomainPort {
    /// Returns attachment ids in upload order; empty when there are none
    fn find_attachment_ids_for_claim(
        &self,
        claim_id: &ClaimId,
    ) -> Result<Vec<AttachmentId>, PortError>;
}

/// Outbound channel to downstream claim processing
pub trait SubmissionGateway: DomainPort {
    fn send(&self, submission: &ClaimSubmission) -> Result<(), PortError>;
}
