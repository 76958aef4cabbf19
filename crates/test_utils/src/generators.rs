//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating inputs to the claim builders.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use core_kernel::AttachmentId;
use domain_claims::{IncidentType, SubmissionChannel};

/// Strategy for generating incident types
pub fn incident_type_strategy() -> impl Strategy<Value = IncidentType> {
    prop_oneof![
        Just(IncidentType::Auto),
        Just(IncidentType::Theft),
        Just(IncidentType::Property),
        Just(IncidentType::Injury),
    ]
}

/// Strategy for generating submission channels
pub fn submission_channel_strategy() -> impl Strategy<Value = SubmissionChannel> {
    prop_oneof![Just(SubmissionChannel::Manual), Just(SubmissionChannel::Auto)]
}

/// Strategy for text that passes blank checks
pub fn non_blank_text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,./-]{0,30}"
}

/// Strategy for empty or whitespace-only text
pub fn blank_text_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

/// Strategy for intake channel text other than `MANUAL` and `AUTO`
pub fn unknown_channel_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}".prop_filter("must not be a known channel", |s| s != "MANUAL" && s != "AUTO")
}

/// Strategy for ordered attachment id lists
pub fn attachment_ids_strategy(max: usize) -> impl Strategy<Value = Vec<AttachmentId>> {
    prop::collection::vec("att-[a-z0-9]{1,8}", 0..=max)
        .prop_map(|ids| ids.into_iter().map(AttachmentId::new).collect())
}

/// Strategy for timestamps within 2020-2030
pub fn datetime_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..3650i64, 0i64..86_400i64).prop_map(|(days, secs)| {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(days)
            + Duration::seconds(secs)
    })
}
