//! Claim entity and the FNOL claim builder
//!
//! A claim is the administrative record tracking an incident through its
//! lifecycle. It is immutable; a status change produces a new value with the
//! same identity via [`Claim::with_status`].
//!
//! # FNOL construction
//!
//! ```text
//! ClaimBuilder::fnol() -> policy_id -> incident -> created_by -> channel
//!                      -> [claim_id] [created_at] -> build()
//! ```
//!
//! Each arrow is a distinct step type, so a required input cannot be skipped.
//! `build()` fills in a generated id and the clock's current time when not
//! overridden, and derives the initial status from the intake channel.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Clock, PolicyId, SystemClock};
use crate::error::{require_text, ClaimError};
use crate::incident::Incident;
use crate::submission::SubmissionChannel;

/// Intake channel text for human-mediated reports
pub const MANUAL_CHANNEL: &str = "MANUAL";
/// Intake channel text for automated reports
pub const AUTO_CHANNEL: &str = "AUTO";

/// Claim status
///
/// Only `Draft` and `Submitted` are produced by intake and submission.
/// The remaining states are reserved for review and settlement stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Captured but not yet submitted for processing
    Draft,
    /// Submitted for processing
    Submitted,
    /// Being reviewed by an adjuster
    InReview,
    /// Approved
    Approved,
    /// Rejected
    Rejected,
    /// Reopened after a decision
    Reopened,
    /// Submitted again after reopening
    Resubmitted,
}

impl ClaimStatus {
    /// Initial status for a claim reported through the given intake channel
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for any channel other than `MANUAL` or `AUTO`
    pub fn for_intake_channel(channel: &str) -> Result<Self, ClaimError> {
        match channel {
            MANUAL_CHANNEL => Ok(ClaimStatus::Draft),
            AUTO_CHANNEL => Ok(ClaimStatus::Submitted),
            other => Err(ClaimError::InvalidArgument(format!("Unknown channel: {other}"))),
        }
    }

    /// Status a claim moves to after being submitted through `channel`
    ///
    /// Manual submissions leave the claim in draft until an agent completes it.
    pub fn after_submission(channel: SubmissionChannel) -> Self {
        match channel {
            SubmissionChannel::Auto => ClaimStatus::Submitted,
            SubmissionChannel::Manual => ClaimStatus::Draft,
        }
    }

    /// Stable textual form
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Draft => "DRAFT",
            ClaimStatus::Submitted => "SUBMITTED",
            ClaimStatus::InReview => "IN_REVIEW",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Rejected => "REJECTED",
            ClaimStatus::Reopened => "REOPENED",
            ClaimStatus::Resubmitted => "RESUBMITTED",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim against a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    claim_id: ClaimId,
    policy_id: PolicyId,
    incident: Incident,
    status: ClaimStatus,
    created_at: DateTime<Utc>,
    /// Actor who reported the claim (user id or system name)
    created_by: String,
    /// How the claim was reported, e.g. through a phone agent or the portal
    channel: String,
}

impl Claim {
    pub fn claim_id(&self) -> &ClaimId {
        &self.claim_id
    }

    pub fn policy_id(&self) -> &PolicyId {
        &self.policy_id
    }

    pub fn incident(&self) -> &Incident {
        &self.incident
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns a copy of this claim carrying `status`; every other field is kept
    pub fn with_status(&self, status: ClaimStatus) -> Claim {
        Claim {
            status,
            ..self.clone()
        }
    }
}

/// Entry points for FNOL claim construction
pub struct ClaimBuilder;

impl ClaimBuilder {
    /// Starts a claim stamped by the system clock
    pub fn fnol() -> PolicyStep {
        Self::fnol_with_clock(SystemClock::shared())
    }

    /// Starts a claim stamped by `clock`
    pub fn fnol_with_clock(clock: Arc<dyn Clock>) -> PolicyStep {
        PolicyStep { clock }
    }
}

pub struct PolicyStep {
    clock: Arc<dyn Clock>,
}

impl PolicyStep {
    pub fn policy_id(self, policy_id: impl Into<String>) -> Result<IncidentStep, ClaimError> {
        let policy_id = PolicyId::new(require_text(policy_id, "policyId")?);
        Ok(IncidentStep {
            clock: self.clock,
            policy_id,
        })
    }
}

pub struct IncidentStep {
    clock: Arc<dyn Clock>,
    policy_id: PolicyId,
}

impl IncidentStep {
    pub fn incident(self, incident: Incident) -> ReporterStep {
        ReporterStep {
            clock: self.clock,
            policy_id: self.policy_id,
            incident,
        }
    }
}

pub struct ReporterStep {
    clock: Arc<dyn Clock>,
    policy_id: PolicyId,
    incident: Incident,
}

impl ReporterStep {
    pub fn created_by(self, actor: impl Into<String>) -> Result<ChannelStep, ClaimError> {
        let created_by = require_text(actor, "createdBy")?;
        Ok(ChannelStep {
            clock: self.clock,
            policy_id: self.policy_id,
            incident: self.incident,
            created_by,
        })
    }
}

pub struct ChannelStep {
    clock: Arc<dyn Clock>,
    policy_id: PolicyId,
    incident: Incident,
    created_by: String,
}

impl ChannelStep {
    /// Sets the intake channel (`"MANUAL"` or `"AUTO"`); unknown values are rejected at build
    pub fn channel(self, channel: impl Into<String>) -> Result<ClaimOptionsStep, ClaimError> {
        let channel = require_text(channel, "channel")?;
        Ok(ClaimOptionsStep {
            clock: self.clock,
            policy_id: self.policy_id,
            incident: self.incident,
            created_by: self.created_by,
            channel,
            claim_id: None,
            created_at: None,
        })
    }
}

/// Final step: optional overrides, then build
pub struct ClaimOptionsStep {
    clock: Arc<dyn Clock>,
    policy_id: PolicyId,
    incident: Incident,
    created_by: String,
    channel: String,
    claim_id: Option<ClaimId>,
    created_at: Option<DateTime<Utc>>,
}

impl ClaimOptionsStep {
    /// Overrides the generated claim id, e.g. when importing an existing claim
    pub fn claim_id(mut self, claim_id: impl Into<String>) -> Result<Self, ClaimError> {
        self.claim_id = Some(ClaimId::new(require_text(claim_id, "claimId")?));
        Ok(self)
    }

    /// Overrides the clock-derived creation time
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the claim
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument("Unknown channel: ...")` if the channel is neither
    /// `MANUAL` nor `AUTO`
    pub fn build(self) -> Result<Claim, ClaimError> {
        let status = ClaimStatus::for_intake_channel(&self.channel)?;

        Ok(Claim {
            claim_id: self.claim_id.unwrap_or_else(ClaimId::generate),
            policy_id: self.policy_id,
            incident: self.incident,
            status,
            created_at: self.created_at.unwrap_or_else(|| self.clock.now()),
            created_by: self.created_by,
            channel: self.channel,
        })
    }
}
