//! Application services for the claims domain

use std::sync::Arc;

use tracing::{debug, info, instrument};

use core_kernel::{ClaimId, Clock, SystemClock};
use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::events::{DomainEvent, DomainEventBuilder};
use crate::ports::{AttachmentProvider, ClaimRepository, PolicyProvider, SubmissionGateway};
use crate::submission::{ClaimSubmission, ClaimSubmissionBuilder, SubmissionChannel};

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub submission: ClaimSubmission,
    pub updated_claim: Claim,
    pub event: DomainEvent,
}

/// Submits a stored claim to downstream processing
///
/// Steps run in a fixed order: load claim, resolve policy number, list
/// attachments, build the submission, send it, save the claim with its new
/// status, build the event. Anything that fails before `send` leaves no side
/// effects behind. Nothing is retried.
pub struct SubmitClaimUseCase {
    claims: Arc<dyn ClaimRepository>,
    policies: Arc<dyn PolicyProvider>,
    attachments: Arc<dyn AttachmentProvider>,
    gateway: Arc<dyn SubmissionGateway>,
    clock: Arc<dyn Clock>,
}

impl SubmitClaimUseCase {
    pub fn new(
        claims: Arc<dyn ClaimRepository>,
        policies: Arc<dyn PolicyProvider>,
        attachments: Arc<dyn AttachmentProvider>,
        gateway: Arc<dyn SubmissionGateway>,
    ) -> Self {
        Self::with_clock(claims, policies, attachments, gateway, SystemClock::shared())
    }

    /// Creates the use case with an explicit clock for submission and event timestamps
    pub fn with_clock(
        claims: Arc<dyn ClaimRepository>,
        policies: Arc<dyn PolicyProvider>,
        attachments: Arc<dyn AttachmentProvider>,
        gateway: Arc<dyn SubmissionGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            claims,
            policies,
            attachments,
            gateway,
            clock,
        }
    }

    /// Submits the claim through `channel` on behalf of `actor`
    ///
    /// `terms_accepted` is only consulted for the AUTO channel.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no claim is stored under `claim_id`
    /// - `InvalidState` if the policy number cannot be resolved or the AUTO rules are not met
    /// - `InvalidArgument` if `actor` is blank
    /// - `Port` if a collaborator fails
    #[instrument(skip_all, fields(claim_id = %claim_id, channel = %channel))]
    pub fn submit(
        &self,
        claim_id: &ClaimId,
        channel: SubmissionChannel,
        actor: &str,
        terms_accepted: bool,
    ) -> Result<SubmissionResult, ClaimError> {
        let claim = self
            .claims
            .get_by_id(claim_id)?
            .ok_or_else(|| ClaimError::not_found(format!("Claim not found: {claim_id}")))?;
        debug!(status = %claim.status(), "claim loaded");

        let policy_number = self
            .policies
            .get_policy_number(claim.policy_id())?
            .ok_or_else(|| {
                ClaimError::invalid_state(format!(
                    "Policy number not found for policyId: {}",
                    claim.policy_id()
                ))
            })?;
        debug!(%policy_number, "policy number resolved");

        let attachment_ids = self.attachments.find_attachment_ids_for_claim(claim_id)?;
        debug!(attachments = attachment_ids.len(), "attachments listed");

        let base = ClaimSubmissionBuilder::with_clock(Arc::clone(&self.clock))
            .from_claim(&claim)
            .policy_number(policy_number)?
            .attachments(attachment_ids)
            .submitted_by(actor)?;

        let submission = match channel {
            SubmissionChannel::Auto => base.auto().terms_accepted(terms_accepted).build()?,
            SubmissionChannel::Manual => base.manual().build()?,
        };

        self.gateway.send(&submission)?;
        info!(submission_id = %submission.submission_id(), "submission sent");

        let updated_claim = claim.with_status(ClaimStatus::after_submission(channel));
        self.claims.save(&updated_claim)?;
        info!(status = %updated_claim.status(), "claim status saved");

        let event = DomainEventBuilder::claim_submitted_with_clock(Arc::clone(&self.clock))
            .claim(&updated_claim)
            .submission(&submission)
            .actor(actor)?
            .build();

        Ok(SubmissionResult {
            submission,
            updated_claim,
            event,
        })
    }
}
