//! Claim submissions
//!
//! A [`ClaimSubmission`] is not an entity. It is a frozen snapshot of what was
//! sent to downstream claim processing at one point in time, assembled from a
//! claim, the policy number, attachments and the submitting actor. Later
//! changes to the claim never touch a submission already built.
//!
//! # Construction
//!
//! ```text
//! ClaimSubmissionBuilder::create() -> from_claim -> policy_number -> attachments -> submitted_by
//!     -> manual() -> [terms_accepted] [submission_id] [submitted_at] -> build()
//!     -> auto()   -> terms_accepted   [submission_id] [submitted_at] -> build()
//! ```
//!
//! The channel choice decides strictness. MANUAL accepts missing terms and no
//! attachments. AUTO requires accepted terms and at least one attachment,
//! checked when `build()` is called.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AttachmentId, ClaimId, Clock, PolicyId, SubmissionId, SystemClock};
use crate::claim::Claim;
use crate::error::{require_text, ClaimError};

/// Channel a submission is made through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionChannel {
    /// Human-mediated, relaxed rules
    Manual,
    /// Automated, strict rules
    Auto,
}

impl SubmissionChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionChannel::Manual => "MANUAL",
            SubmissionChannel::Auto => "AUTO",
        }
    }
}

impl fmt::Display for SubmissionChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of a claim submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSubmission {
    submission_id: SubmissionId,
    submitted_at: DateTime<Utc>,
    channel: SubmissionChannel,
    submitted_by: String,

    claim_id: ClaimId,
    policy_id: PolicyId,
    policy_number: String,

    incident_type: String,
    occurred_at: DateTime<Utc>,
    location: String,

    attachment_ids: Vec<AttachmentId>,
    terms_accepted: bool,
}

impl ClaimSubmission {
    pub fn submission_id(&self) -> &SubmissionId {
        &self.submission_id
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn channel(&self) -> SubmissionChannel {
        self.channel
    }

    pub fn submitted_by(&self) -> &str {
        &self.submitted_by
    }

    pub fn claim_id(&self) -> &ClaimId {
        &self.claim_id
    }

    pub fn policy_id(&self) -> &PolicyId {
        &self.policy_id
    }

    pub fn policy_number(&self) -> &str {
        &self.policy_number
    }

    /// Incident type as text, e.g. `"AUTO"`
    pub fn incident_type(&self) -> &str {
        &self.incident_type
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn attachment_ids(&self) -> &[AttachmentId] {
        &self.attachment_ids
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }
}

/// Entry points for submission construction
pub struct ClaimSubmissionBuilder;

impl ClaimSubmissionBuilder {
    /// Starts a submission stamped by the system clock
    pub fn create() -> FromClaimStep {
        Self::with_clock(SystemClock::shared())
    }

    /// Starts a submission stamped by `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> FromClaimStep {
        FromClaimStep { clock }
    }
}

pub struct FromClaimStep {
    clock: Arc<dyn Clock>,
}

impl FromClaimStep {
    pub fn from_claim(self, claim: &Claim) -> PolicyNumberStep {
        PolicyNumberStep {
            clock: self.clock,
            claim: claim.clone(),
        }
    }
}

pub struct PolicyNumberStep {
    clock: Arc<dyn Clock>,
    claim: Claim,
}

impl PolicyNumberStep {
    pub fn policy_number(
        self,
        policy_number: impl Into<String>,
    ) -> Result<AttachmentsStep, ClaimError> {
        let policy_number = require_text(policy_number, "policyNumber")?;
        Ok(AttachmentsStep {
            clock: self.clock,
            claim: self.claim,
            policy_number,
        })
    }
}

pub struct AttachmentsStep {
    clock: Arc<dyn Clock>,
    claim: Claim,
    policy_number: String,
}

impl AttachmentsStep {
    /// Sets the attachment ids; order is preserved
    pub fn attachments<I>(self, attachment_ids: I) -> SubmittedByStep
    where
        I: IntoIterator,
        I::Item: Into<AttachmentId>,
    {
        SubmittedByStep {
            clock: self.clock,
            claim: self.claim,
            policy_number: self.policy_number,
            attachment_ids: attachment_ids.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct SubmittedByStep {
    clock: Arc<dyn Clock>,
    claim: Claim,
    policy_number: String,
    attachment_ids: Vec<AttachmentId>,
}

impl SubmittedByStep {
    pub fn submitted_by(self, actor: impl Into<String>) -> Result<ChannelSelectStep, ClaimError> {
        let submitted_by = require_text(actor, "submittedBy")?;
        Ok(ChannelSelectStep {
            draft: SubmissionDraft {
                clock: self.clock,
                claim: self.claim,
                policy_number: self.policy_number,
                attachment_ids: self.attachment_ids,
                submitted_by,
                terms_accepted: false,
                submission_id: None,
                submitted_at: None,
            },
        })
    }
}

/// Decision point between the relaxed and the strict channel
pub struct ChannelSelectStep {
    draft: SubmissionDraft,
}

impl ChannelSelectStep {
    pub fn manual(self) -> ManualStep {
        ManualStep { draft: self.draft }
    }

    pub fn auto(self) -> AutoStep {
        AutoStep { draft: self.draft }
    }
}

/// MANUAL branch: terms and attachments are optional
pub struct ManualStep {
    draft: SubmissionDraft,
}

impl ManualStep {
    pub fn terms_accepted(mut self, accepted: bool) -> Self {
        self.draft.terms_accepted = accepted;
        self
    }

    pub fn submission_id(mut self, id: impl Into<String>) -> Result<Self, ClaimError> {
        self.draft.set_submission_id(id)?;
        Ok(self)
    }

    pub fn submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.draft.submitted_at = Some(at);
        self
    }

    pub fn build(self) -> Result<ClaimSubmission, ClaimError> {
        Ok(self.draft.assemble(SubmissionChannel::Manual))
    }
}

/// AUTO branch: accepted terms and at least one attachment are required
pub struct AutoStep {
    draft: SubmissionDraft,
}

impl AutoStep {
    pub fn terms_accepted(mut self, accepted: bool) -> Self {
        self.draft.terms_accepted = accepted;
        self
    }

    pub fn submission_id(mut self, id: impl Into<String>) -> Result<Self, ClaimError> {
        self.draft.set_submission_id(id)?;
        Ok(self)
    }

    pub fn submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.draft.submitted_at = Some(at);
        self
    }

    /// Builds the submission
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if terms were not accepted, or if there are no attachments
    pub fn build(self) -> Result<ClaimSubmission, ClaimError> {
        if !self.draft.terms_accepted {
            return Err(ClaimError::invalid_state("termsAccepted must be true for AUTO channel"));
        }
        if self.draft.attachment_ids.is_empty() {
            return Err(ClaimError::invalid_state(
                "at least 1 attachment is required for AUTO channel",
            ));
        }
        Ok(self.draft.assemble(SubmissionChannel::Auto))
    }
}

/// Everything collected before the channel branch
struct SubmissionDraft {
    clock: Arc<dyn Clock>,
    claim: Claim,
    policy_number: String,
    attachment_ids: Vec<AttachmentId>,
    submitted_by: String,
    terms_accepted: bool,
    submission_id: Option<SubmissionId>,
    submitted_at: Option<DateTime<Utc>>,
}

impl SubmissionDraft {
    fn set_submission_id(&mut self, id: impl Into<String>) -> Result<(), ClaimError> {
        self.submission_id = Some(SubmissionId::new(require_text(id, "submissionId")?));
        Ok(())
    }

    fn assemble(self, channel: SubmissionChannel) -> ClaimSubmission {
        let submitted_at = self.submitted_at.unwrap_or_else(|| self.clock.now());
        let incident = self.claim.incident();

        ClaimSubmission {
            submission_id: self.submission_id.unwrap_or_else(SubmissionId::generate),
            submitted_at,
            channel,
            submitted_by: self.submitted_by,
            claim_id: self.claim.claim_id().clone(),
            policy_id: self.claim.policy_id().clone(),
            policy_number: self.policy_number,
            incident_type: incident.incident_type().to_string(),
            occurred_at: incident.occurred_at(),
            location: incident.location().to_string(),
            attachment_ids: self.attachment_ids,
            terms_accepted: self.terms_accepted,
        }
    }
}
