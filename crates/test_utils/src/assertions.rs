//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for claim types that give more
//! meaningful failure messages than standard assertions.

use domain_claims::{Claim, ClaimError, ClaimSubmission};

/// Asserts that a submission carries the claim's identity and incident facts
///
/// # Panics
///
/// Panics naming the first field that differs
pub fn assert_submission_matches_claim(submission: &ClaimSubmission, claim: &Claim) {
    let incident = claim.incident();
    assert_eq!(submission.claim_id(), claim.claim_id(), "claim id mismatch");
    assert_eq!(submission.policy_id(), claim.policy_id(), "policy id mismatch");
    assert_eq!(
        submission.incident_type(),
        incident.incident_type().as_str(),
        "incident type mismatch"
    );
    assert_eq!(submission.occurred_at(), incident.occurred_at(), "occurredAt mismatch");
    assert_eq!(submission.location(), incident.location(), "location mismatch");
}

/// Asserts that an error's message contains `fragment`
pub fn assert_error_contains(err: &ClaimError, fragment: &str) {
    let message = err.to_string();
    assert!(
        message.contains(fragment),
        "Expected error containing {fragment:?}, got {message:?}"
    );
}

/// Asserts that a result failed with `InvalidState` containing `fragment`
pub fn assert_invalid_state<T: std::fmt::Debug>(result: &Result<T, ClaimError>, fragment: &str) {
    match result {
        Err(err @ ClaimError::InvalidState(_)) => assert_error_contains(err, fragment),
        other => panic!("Expected InvalidState containing {fragment:?}, got {other:?}"),
    }
}
