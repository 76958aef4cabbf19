//! Pre-built Test Fixtures
//!
//! Provides ready-to-use incidents, claims and wired in-memory adapters.
//! Timestamps are fixed so tests stay deterministic.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::{Clock, FixedClock};
use domain_claims::adapters::{
    FakeAttachmentProvider, FakePolicyProvider, InMemoryClaimRepository, InMemorySubmissionGateway,
};
use domain_claims::{
    Claim, ClaimBuilder, Incident, IncidentBuilder, IncidentType, SubmitClaimUseCase,
};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// When the sample incident happened (Feb 1, 2026 10:00 UTC)
    pub fn occurred_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap()
    }

    /// When the sample claim was reported (five minutes after the incident)
    pub fn reported_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 10, 5, 0).unwrap()
    }

    /// Instant used by fixed clocks in submission tests
    pub fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 11, 0, 0).unwrap()
    }

    /// A clock frozen at [`TemporalFixtures::submitted_at`]
    pub fn fixed_clock() -> Arc<dyn Clock> {
        FixedClock::shared(Self::submitted_at())
    }
}

/// Fixture for incidents of every type
pub struct IncidentFixtures;

impl IncidentFixtures {
    pub const LOCATION: &'static str = "Warsaw";
    pub const VIN: &'static str = "WVWZZZ1JZXW000001";
    pub const LICENSE_PLATE: &'static str = "WI1234A";

    /// AUTO incident in Warsaw
    pub fn auto() -> Incident {
        IncidentBuilder::auto()
            .occurred_at(TemporalFixtures::occurred_at())
            .location(Self::LOCATION)
            .unwrap()
            .description("Rear-end collision at a traffic light")
            .unwrap()
            .for_auto()
            .unwrap()
            .vin(Self::VIN)
            .unwrap()
            .license_plate(Self::LICENSE_PLATE)
            .unwrap()
            .build()
            .unwrap()
    }

    /// THEFT incident with a police report
    pub fn theft() -> Incident {
        IncidentBuilder::theft()
            .occurred_at(TemporalFixtures::occurred_at())
            .location(Self::LOCATION)
            .unwrap()
            .for_theft()
            .unwrap()
            .stolen_item("Laptop")
            .unwrap()
            .police_report_number("KRP-123/2026")
            .unwrap()
            .build()
            .unwrap()
    }

    /// PROPERTY incident
    pub fn property() -> Incident {
        IncidentBuilder::property()
            .occurred_at(TemporalFixtures::occurred_at())
            .location(Self::LOCATION)
            .unwrap()
            .for_property()
            .unwrap()
            .property_address("Marszalkowska 10, Warsaw")
            .unwrap()
            .build()
            .unwrap()
    }

    /// INJURY incident without a medical report
    pub fn injury() -> Incident {
        IncidentBuilder::injury()
            .occurred_at(TemporalFixtures::occurred_at())
            .location(Self::LOCATION)
            .unwrap()
            .for_injury()
            .unwrap()
            .injured_person("Jan Kowalski")
            .unwrap()
            .build()
            .unwrap()
    }

    /// A valid incident of the given type
    pub fn of_type(incident_type: IncidentType) -> Incident {
        match incident_type {
            IncidentType::Auto => Self::auto(),
            IncidentType::Theft => Self::theft(),
            IncidentType::Property => Self::property(),
            IncidentType::Injury => Self::injury(),
        }
    }

    /// PROPERTY incident with randomised but realistic text
    pub fn random_property() -> Incident {
        let city: String = CityName().fake();
        let street: String = StreetName().fake();
        IncidentBuilder::property()
            .occurred_at(TemporalFixtures::occurred_at())
            .location(city.clone())
            .unwrap()
            .for_property()
            .unwrap()
            .property_address(format!("{street}, {city}"))
            .unwrap()
            .build()
            .unwrap()
    }

    /// INJURY incident naming a random person
    pub fn random_injury() -> Incident {
        let person: String = Name().fake();
        IncidentBuilder::injury()
            .occurred_at(TemporalFixtures::occurred_at())
            .location(Self::LOCATION)
            .unwrap()
            .for_injury()
            .unwrap()
            .injured_person(person)
            .unwrap()
            .build()
            .unwrap()
    }
}

/// Fixture for claims
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Claim with a fixed id and creation time
    pub fn claim(claim_id: &str, policy_id: &str, channel: &str, incident: Incident) -> Claim {
        ClaimBuilder::fnol()
            .policy_id(policy_id)
            .unwrap()
            .incident(incident)
            .created_by("user-1")
            .unwrap()
            .channel(channel)
            .unwrap()
            .claim_id(claim_id)
            .unwrap()
            .created_at(TemporalFixtures::reported_at())
            .build()
            .unwrap()
    }

    /// AUTO-channel claim for an AUTO incident
    pub fn auto_claim(claim_id: &str, policy_id: &str) -> Claim {
        Self::claim(claim_id, policy_id, "AUTO", IncidentFixtures::auto())
    }

    /// MANUAL-channel claim for a THEFT incident
    pub fn manual_theft_claim(claim_id: &str, policy_id: &str) -> Claim {
        Self::claim(claim_id, policy_id, "MANUAL", IncidentFixtures::theft())
    }
}

/// The four in-memory adapters plus a use case wired to them
pub struct SubmissionHarness {
    pub claims: Arc<InMemoryClaimRepository>,
    pub policies: Arc<FakePolicyProvider>,
    pub attachments: Arc<FakeAttachmentProvider>,
    pub gateway: Arc<InMemorySubmissionGateway>,
    pub use_case: SubmitClaimUseCase,
}

impl SubmissionHarness {
    /// Wires fresh adapters with the default policy provider
    pub fn new() -> Self {
        Self::with_policies(FakePolicyProvider::new())
    }

    /// Wires fresh adapters around the given policy provider
    pub fn with_policies(policies: FakePolicyProvider) -> Self {
        let claims = Arc::new(InMemoryClaimRepository::new());
        let policies = Arc::new(policies);
        let attachments = Arc::new(FakeAttachmentProvider::new());
        let gateway = Arc::new(InMemorySubmissionGateway::new());

        let use_case = SubmitClaimUseCase::with_clock(
            claims.clone(),
            policies.clone(),
            attachments.clone(),
            gateway.clone(),
            TemporalFixtures::fixed_clock(),
        );

        Self {
            claims,
            policies,
            attachments,
            gateway,
            use_case,
        }
    }
}

impl Default for SubmissionHarness {
    fn default() -> Self {
        Self::new()
    }
}
