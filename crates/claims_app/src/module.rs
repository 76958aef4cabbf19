//! In-memory wiring of the claims domain

use std::sync::Arc;

use tracing::debug;

use core_kernel::{Clock, SystemClock};
use domain_claims::adapters::{
    FakeAttachmentProvider, FakePolicyProvider, InMemoryClaimRepository, InMemorySubmissionGateway,
};
use domain_claims::SubmitClaimUseCase;

use crate::config::AppConfig;

/// Owns the in-memory adapters and hands out use cases wired to them
///
/// The adapters stay reachable so callers can seed claims and attachments
/// and inspect what was sent.
pub struct InMemoryClaimsModule {
    claims: Arc<InMemoryClaimRepository>,
    policies: Arc<FakePolicyProvider>,
    attachments: Arc<FakeAttachmentProvider>,
    gateway: Arc<InMemorySubmissionGateway>,
    clock: Arc<dyn Clock>,
}

impl InMemoryClaimsModule {
    /// Wires fresh adapters using the system clock
    pub fn new(config: &AppConfig) -> Self {
        Self::with_clock(config, SystemClock::shared())
    }

    /// Wires fresh adapters using `clock`
    pub fn with_clock(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        debug!(
            policy_number_prefix = %config.policy_number_prefix,
            "wiring in-memory claims module"
        );
        let policies = FakePolicyProvider::with_prefix(config.policy_number_prefix.clone());
        Self {
            claims: Arc::new(InMemoryClaimRepository::new()),
            policies: Arc::new(policies),
            attachments: Arc::new(FakeAttachmentProvider::new()),
            gateway: Arc::new(InMemorySubmissionGateway::new()),
            clock,
        }
    }

    pub fn claims(&self) -> &Arc<InMemoryClaimRepository> {
        &self.claims
    }

    pub fn policies(&self) -> &Arc<FakePolicyProvider> {
        &self.policies
    }

    pub fn attachments(&self) -> &Arc<FakeAttachmentProvider> {
        &self.attachments
    }

    pub fn gateway(&self) -> &Arc<InMemorySubmissionGateway> {
        &self.gateway
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Builds a submission use case sharing this module's adapters
    pub fn submit_claim_use_case(&self) -> SubmitClaimUseCase {
        SubmitClaimUseCase::with_clock(
            self.claims.clone(),
            self.policies.clone(),
            self.attachments.clone(),
            self.gateway.clone(),
            self.clock(),
        )
    }
}
