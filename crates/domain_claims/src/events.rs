//! Domain events for the claims domain
//!
//! Events are immutable records of something that happened. They are built
//! by the use cases and handed back to the caller; publishing them is the
//! caller's concern.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Clock, SubmissionId, SystemClock};
use crate::claim::Claim;
use crate::error::{require_text, ClaimError};
use crate::submission::ClaimSubmission;

/// A claim was submitted through some channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSubmittedEvent {
    claim_id: ClaimId,
    submission_id: SubmissionId,
    /// Submission channel text, `"MANUAL"` or `"AUTO"`
    channel: String,
    actor: String,
    occurred_at: DateTime<Utc>,
}

impl ClaimSubmittedEvent {
    pub fn claim_id(&self) -> &ClaimId {
        &self.claim_id
    }

    pub fn submission_id(&self) -> &SubmissionId {
        &self.submission_id
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Domain events emitted by the claims domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    ClaimSubmitted(ClaimSubmittedEvent),
}

impl DomainEvent {
    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::ClaimSubmitted(_) => "ClaimSubmitted",
        }
    }

    /// Returns when the event occurred
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::ClaimSubmitted(e) => e.occurred_at,
        }
    }

    /// Returns the claim the event concerns
    pub fn claim_id(&self) -> &ClaimId {
        match self {
            DomainEvent::ClaimSubmitted(e) => &e.claim_id,
        }
    }
}

/// Entry points for event construction
pub struct DomainEventBuilder;

impl DomainEventBuilder {
    /// Starts a `ClaimSubmitted` event stamped by the system clock
    pub fn claim_submitted() -> ClaimStep {
        Self::claim_submitted_with_clock(SystemClock::shared())
    }

    /// Starts a `ClaimSubmitted` event stamped by `clock`
    pub fn claim_submitted_with_clock(clock: Arc<dyn Clock>) -> ClaimStep {
        ClaimStep { clock }
    }
}

pub struct ClaimStep {
    clock: Arc<dyn Clock>,
}

impl ClaimStep {
    pub fn claim(self, claim: &Claim) -> SubmissionStep {
        SubmissionStep {
            clock: self.clock,
            claim_id: claim.claim_id().clone(),
        }
    }
}

pub struct SubmissionStep {
    clock: Arc<dyn Clock>,
    claim_id: ClaimId,
}

impl SubmissionStep {
    pub fn submission(self, submission: &ClaimSubmission) -> ActorStep {
        ActorStep {
            clock: self.clock,
            claim_id: self.claim_id,
            submission_id: submission.submission_id().clone(),
            channel: submission.channel().to_string(),
        }
    }
}

pub struct ActorStep {
    clock: Arc<dyn Clock>,
    claim_id: ClaimId,
    submission_id: SubmissionId,
    channel: String,
}

impl ActorStep {
    pub fn actor(self, actor: impl Into<String>) -> Result<EventReadyStep, ClaimError> {
        let actor = require_text(actor, "actor")?;
        Ok(EventReadyStep {
            clock: self.clock,
            claim_id: self.claim_id,
            submission_id: self.submission_id,
            channel: self.channel,
            actor,
        })
    }
}

pub struct EventReadyStep {
    clock: Arc<dyn Clock>,
    claim_id: ClaimId,
    submission_id: SubmissionId,
    channel: String,
    actor: String,
}

impl EventReadyStep {
    /// Builds the event, stamping it with the clock's current time
    pub fn build(self) -> DomainEvent {
        DomainEvent::ClaimSubmitted(ClaimSubmittedEvent {
            occurred_at: self.clock.now(),
            claim_id: self.claim_id,
            submission_id: self.submission_id,
            channel: self.channel,
            actor: self.actor,
        })
    }
}
