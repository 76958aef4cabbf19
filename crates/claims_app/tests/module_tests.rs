//! Tests for the in-memory claims module wiring

use claims_app::{AppConfig, InMemoryClaimsModule};
use core_kernel::{Clock, PolicyId};
use domain_claims::{ClaimRepository, ClaimStatus, DomainEvent, PolicyProvider, SubmissionChannel};
use test_utils::{ClaimFixtures, TemporalFixtures};

fn module_with_prefix(prefix: &str) -> InMemoryClaimsModule {
    let config = AppConfig {
        policy_number_prefix: prefix.to_string(),
        ..AppConfig::default()
    };
    InMemoryClaimsModule::with_clock(&config, TemporalFixtures::fixed_clock())
}

#[test]
fn test_policy_prefix_comes_from_config() {
    let module = module_with_prefix("POLNUM-");
    let number = module.policies().get_policy_number(&PolicyId::new("42")).unwrap();
    assert_eq!(number.as_deref(), Some("POLNUM-42"));
}

#[test]
fn test_use_case_shares_module_adapters() {
    let module = module_with_prefix("PN-");
    let claim = ClaimFixtures::auto_claim("CLM-1", "POL-1");
    module.claims().save(&claim).unwrap();
    module.attachments().put("CLM-1", ["att-1"]).unwrap();

    let result = module
        .submit_claim_use_case()
        .submit(claim.claim_id(), SubmissionChannel::Auto, "fnol-demo", true)
        .unwrap();

    assert_eq!(result.submission.policy_number(), "PN-POL-1");
    assert_eq!(module.gateway().sent_submissions().unwrap().len(), 1);
    assert_eq!(
        module.claims().get_by_id(claim.claim_id()).unwrap().unwrap().status(),
        ClaimStatus::Submitted
    );
}

#[test]
fn test_event_serializes_for_publishing() {
    let module = module_with_prefix("PN-");
    let claim = ClaimFixtures::manual_theft_claim("CLM-2", "POL-2");
    module.claims().save(&claim).unwrap();

    let result = module
        .submit_claim_use_case()
        .submit(claim.claim_id(), SubmissionChannel::Manual, "agent-7", false)
        .unwrap();

    assert!(matches!(result.event, DomainEvent::ClaimSubmitted(_)));
    let json = serde_json::to_value(&result.event).unwrap();
    let payload = &json["ClaimSubmitted"];
    assert_eq!(payload["claim_id"], "CLM-2");
    assert_eq!(payload["channel"], "MANUAL");
    assert_eq!(payload["actor"], "agent-7");
}

#[test]
fn test_module_clock_is_used_for_timestamps() {
    let module = module_with_prefix("PN-");
    assert_eq!(module.clock().now(), TemporalFixtures::submitted_at());
}
