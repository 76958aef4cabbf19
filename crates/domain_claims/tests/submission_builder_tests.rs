//! Tests for claim submission construction

use proptest::prelude::*;

use core_kernel::{AttachmentId, FixedClock};
use domain_claims::submission::ChannelSelectStep;
use domain_claims::{Claim, ClaimSubmissionBuilder, SubmissionChannel};
use test_utils::{
    assert_invalid_state, assert_submission_matches_claim, attachment_ids_strategy,
    incident_type_strategy, ClaimFixtures, IncidentFixtures, TemporalFixtures,
};

fn select_channel(claim: &Claim, attachments: Vec<AttachmentId>) -> ChannelSelectStep {
    ClaimSubmissionBuilder::with_clock(TemporalFixtures::fixed_clock())
        .from_claim(claim)
        .policy_number("PN-POL-1")
        .unwrap()
        .attachments(attachments)
        .submitted_by("user-1")
        .unwrap()
}

fn att(ids: &[&str]) -> Vec<AttachmentId> {
    ids.iter().copied().map(AttachmentId::from).collect()
}

mod auto_channel {
    use super::*;

    #[test]
    fn test_auto_with_terms_and_attachment_builds() {
        let claim = ClaimFixtures::auto_claim("CLM-1", "POL-1");
        let submission = select_channel(&claim, att(&["att-1"]))
            .auto()
            .terms_accepted(true)
            .build()
            .unwrap();

        assert_eq!(submission.channel(), SubmissionChannel::Auto);
        assert!(submission.terms_accepted());
        assert_eq!(submission.policy_number(), "PN-POL-1");
        assert_eq!(submission.submitted_by(), "user-1");
        assert_eq!(submission.submitted_at(), TemporalFixtures::submitted_at());
        assert_submission_matches_claim(&submission, &claim);
    }

    #[test]
    fn test_auto_without_terms_fails_even_with_attachments() {
        let claim = ClaimFixtures::auto_claim("CLM-1", "POL-1");
        let result = select_channel(&claim, att(&["att-1", "att-2"]))
            .auto()
            .terms_accepted(false)
            .build();

        assert_invalid_state(&result, "termsAccepted must be true for AUTO channel");
    }

    #[test]
    fn test_auto_terms_default_to_not_accepted() {
        let claim = ClaimFixtures::auto_claim("CLM-1", "POL-1");
        let result = select_channel(&claim, att(&["att-1"])).auto().build();

        assert_invalid_state(&result, "termsAccepted must be true");
    }

    #[test]
    fn test_auto_without_attachments_fails() {
        let claim = ClaimFixtures::auto_claim("CLM-1", "POL-1");
        let result = select_channel(&claim, vec![]).auto().terms_accepted(true).build();

        assert_invalid_state(&result, "at least 1 attachment is required for AUTO channel");
    }

    #[test]
    fn test_terms_may_be_set_after_branch_choice() {
        let claim = ClaimFixtures::auto_claim("CLM-1", "POL-1");
        let submission = select_channel(&claim, att(&["att-1"]))
            .auto()
            .terms_accepted(false)
            .submission_id("SUB-1")
            .unwrap()
            .terms_accepted(true)
            .build()
            .unwrap();

        assert!(submission.terms_accepted());
        assert_eq!(submission.submission_id().as_str(), "SUB-1");
    }
}

mod manual_channel {
    use super::*;

    #[test]
    fn test_manual_permits_no_attachments_and_no_terms() {
        let claim = ClaimFixtures::manual_theft_claim("CLM-2", "POL-2");
        let submission = select_channel(&claim, vec![])
            .manual()
            .terms_accepted(false)
            .build()
            .unwrap();

        assert_eq!(submission.channel(), SubmissionChannel::Manual);
        assert!(submission.attachment_ids().is_empty());
        assert!(!submission.terms_accepted());
        assert_eq!(submission.incident_type(), "THEFT");
    }

    #[test]
    fn test_manual_overrides_are_used() {
        let claim = ClaimFixtures::manual_theft_claim("CLM-2", "POL-2");
        let submission = select_channel(&claim, vec![])
            .manual()
            .submission_id("SUB-X")
            .unwrap()
            .submitted_at(TemporalFixtures::occurred_at())
            .build()
            .unwrap();

        assert_eq!(submission.submission_id().as_str(), "SUB-X");
        assert_eq!(submission.submitted_at(), TemporalFixtures::occurred_at());
    }
}

#[test]
fn test_blank_policy_number_rejected() {
    let claim = ClaimFixtures::auto_claim("CLM-1", "POL-1");
    let err = ClaimSubmissionBuilder::create()
        .from_claim(&claim)
        .policy_number(" ")
        .err()
        .unwrap();

    assert_eq!(err.to_string(), "policyNumber must not be blank");
}

#[test]
fn test_submission_is_a_snapshot() {
    let claim = ClaimFixtures::manual_theft_claim("CLM-3", "POL-3");
    let submission = select_channel(&claim, vec![]).manual().build().unwrap();

    let later = claim.with_status(domain_claims::ClaimStatus::Submitted);
    assert_eq!(later.status(), domain_claims::ClaimStatus::Submitted);
    assert_submission_matches_claim(&submission, &claim);
    assert_eq!(submission.claim_id(), later.claim_id());
}

#[test]
fn test_generated_submission_ids_are_distinct() {
    let claim = ClaimFixtures::auto_claim("CLM-1", "POL-1");
    let clock = FixedClock::shared(TemporalFixtures::submitted_at());
    let build = || {
        ClaimSubmissionBuilder::with_clock(clock.clone())
            .from_claim(&claim)
            .policy_number("PN-POL-1")
            .unwrap()
            .attachments(["att-1"])
            .submitted_by("user-1")
            .unwrap()
            .manual()
            .build()
            .unwrap()
    };

    assert_ne!(build().submission_id(), build().submission_id());
}

proptest! {
    #[test]
    fn attachment_order_is_preserved(ids in attachment_ids_strategy(6)) {
        let claim = ClaimFixtures::manual_theft_claim("CLM-4", "POL-4");
        let submission = select_channel(&claim, ids.clone()).manual().build().unwrap();
        prop_assert_eq!(submission.attachment_ids(), ids.as_slice());
    }

    #[test]
    fn incident_facts_are_copied_exactly(incident_type in incident_type_strategy()) {
        let incident = IncidentFixtures::of_type(incident_type);
        let claim = ClaimFixtures::claim("CLM-5", "POL-5", "MANUAL", incident);
        let submission = select_channel(&claim, vec![]).manual().build().unwrap();

        prop_assert_eq!(submission.incident_type(), incident_type.as_str());
        prop_assert_eq!(submission.occurred_at(), claim.incident().occurred_at());
        prop_assert_eq!(submission.location(), claim.incident().location());
    }

    #[test]
    fn auto_outcome_follows_terms_and_attachments(
        terms in any::<bool>(),
        ids in attachment_ids_strategy(3),
    ) {
        let claim = ClaimFixtures::auto_claim("CLM-6", "POL-6");
        let has_attachments = !ids.is_empty();
        let result = select_channel(&claim, ids).auto().terms_accepted(terms).build();

        match (terms, has_attachments) {
            (true, true) => prop_assert!(result.is_ok()),
            (false, _) => {
                let message = result.unwrap_err().to_string();
                prop_assert!(message.contains("termsAccepted must be true"));
            }
            (true, false) => {
                let message = result.unwrap_err().to_string();
                prop_assert!(message.contains("at least 1 attachment"));
            }
        }
    }
}
