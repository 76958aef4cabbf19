//! In-memory adapters
//!
//! Each adapter keeps its state behind a `RwLock` so it can be shared across
//! threads through `Arc<dyn Port>`. A poisoned lock is reported as
//! `PortError::Internal`.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use core_kernel::{AttachmentId, ClaimId, DomainPort, PolicyId, PortError};

use crate::claim::Claim;
use crate::ports::{AttachmentProvider, ClaimRepository, PolicyProvider, SubmissionGateway};
use crate::submission::ClaimSubmission;

fn read<'a, T>(lock: &'a RwLock<T>, store: &str) -> Result<RwLockReadGuard<'a, T>, PortError> {
    lock.read()
        .map_err(|_| PortError::internal(format!("{store} lock poisoned")))
}

fn write<'a, T>(lock: &'a RwLock<T>, store: &str) -> Result<RwLockWriteGuard<'a, T>, PortError> {
    lock.write()
        .map_err(|_| PortError::internal(format!("{store} lock poisoned")))
}

/// Claim store backed by a map keyed by claim id
#[derive(Debug, Default)]
pub struct InMemoryClaimRepository {
    claims: RwLock<HashMap<ClaimId, Claim>>,
}

impl InMemoryClaimRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored claims
    pub fn len(&self) -> Result<usize, PortError> {
        Ok(read(&self.claims, "claim repository")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, PortError> {
        Ok(self.len()? == 0)
    }
}

impl DomainPort for InMemoryClaimRepository {}

impl ClaimRepository for InMemoryClaimRepository {
    fn get_by_id(&self, claim_id: &ClaimId) -> Result<Option<Claim>, PortError> {
        let claim = read(&self.claims, "claim repository")?.get(claim_id).cloned();
        trace!(claim_id = %claim_id, found = claim.is_some(), "claim lookup");
        Ok(claim)
    }

    fn save(&self, claim: &Claim) -> Result<(), PortError> {
        write(&self.claims, "claim repository")?.insert(claim.claim_id().clone(), claim.clone());
        debug!(claim_id = %claim.claim_id(), status = %claim.status(), "claim saved");
        Ok(())
    }
}

/// Policy lookup that derives the policy number from the policy id
///
/// Every policy resolves to `{prefix}{policy_id}` unless it was marked
/// unresolvable.
#[derive(Debug)]
pub struct FakePolicyProvider {
    prefix: String,
    unresolvable: RwLock<HashSet<PolicyId>>,
}

impl FakePolicyProvider {
    /// Default policy number prefix
    pub const DEFAULT_PREFIX: &'static str = "PN-";

    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            unresolvable: RwLock::new(HashSet::new()),
        }
    }

    /// Makes lookups for `policy_id` return no policy number
    pub fn unresolvable(mut self, policy_id: impl Into<PolicyId>) -> Self {
        self.unresolvable
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(policy_id.into());
        self
    }

    /// Marks `policy_id` unresolvable on a shared provider
    pub fn mark_unresolvable(&self, policy_id: impl Into<PolicyId>) -> Result<(), PortError> {
        write(&self.unresolvable, "policy provider")?.insert(policy_id.into());
        Ok(())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for FakePolicyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainPort for FakePolicyProvider {}

impl PolicyProvider for FakePolicyProvider {
    fn get_policy_number(&self, policy_id: &PolicyId) -> Result<Option<String>, PortError> {
        if read(&self.unresolvable, "policy provider")?.contains(policy_id) {
            trace!(policy_id = %policy_id, "policy marked unresolvable");
            return Ok(None);
        }
        Ok(Some(format!("{}{}", self.prefix, policy_id)))
    }
}

/// Attachment lookup seeded per claim
#[derive(Debug, Default)]
pub struct FakeAttachmentProvider {
    attachments: RwLock<HashMap<ClaimId, Vec<AttachmentId>>>,
}

impl FakeAttachmentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the attachment list for `claim_id`
    pub fn put<I>(&self, claim_id: impl Into<ClaimId>, attachment_ids: I) -> Result<(), PortError>
    where
        I: IntoIterator,
        I::Item: Into<AttachmentId>,
    {
        let ids = attachment_ids.into_iter().map(Into::into).collect();
        write(&self.attachments, "attachment provider")?.insert(claim_id.into(), ids);
        Ok(())
    }
}

impl DomainPort for FakeAttachmentProvider {}

impl AttachmentProvider for FakeAttachmentProvider {
    fn find_attachment_ids_for_claim(
        &self,
        claim_id: &ClaimId,
    ) -> Result<Vec<AttachmentId>, PortError> {
        Ok(read(&self.attachments, "attachment provider")?
            .get(claim_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Gateway that records every submission it is asked to send
#[derive(Debug, Default)]
pub struct InMemorySubmissionGateway {
    sent: RwLock<Vec<ClaimSubmission>>,
}

impl InMemorySubmissionGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions sent so far, oldest first
    pub fn sent_submissions(&self) -> Result<Vec<ClaimSubmission>, PortError> {
        Ok(read(&self.sent, "submission gateway")?.clone())
    }
}

impl DomainPort for InMemorySubmissionGateway {}

impl SubmissionGateway for InMemorySubmissionGateway {
    fn send(&self, submission: &ClaimSubmission) -> Result<(), PortError> {
        write(&self.sent, "submission gateway")?.push(submission.clone());
        debug!(
            submission_id = %submission.submission_id(),
            claim_id = %submission.claim_id(),
            channel = %submission.channel(),
            "submission sent"
        );
        Ok(())
    }
}
