//! Tests for incident construction

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use domain_claims::{ClaimError, IncidentBuilder, IncidentDetails, IncidentType};
use test_utils::{
    assert_error_contains, blank_text_strategy, datetime_strategy, incident_type_strategy,
    non_blank_text_strategy, IncidentFixtures, TemporalFixtures,
};

// ============================================================================
// Building each type
// ============================================================================

mod building {
    use super::*;

    #[test]
    fn test_every_type_builds_with_minimal_fields() {
        for incident_type in IncidentType::ALL {
            let incident = IncidentFixtures::of_type(incident_type);
            assert_eq!(incident.incident_type(), incident_type);
            assert_eq!(incident.location(), IncidentFixtures::LOCATION);
            assert_eq!(incident.occurred_at(), TemporalFixtures::occurred_at());
        }
    }

    #[test]
    fn test_theft_keeps_optional_police_report() {
        let incident = IncidentFixtures::theft();
        assert_eq!(incident.stolen_item(), Some("Laptop"));
        assert_eq!(incident.police_report_number(), Some("KRP-123/2026"));
        assert_eq!(incident.vin(), None);
    }

    #[test]
    fn test_injury_without_medical_report() {
        let incident = IncidentFixtures::injury();
        assert_eq!(incident.injured_person(), Some("Jan Kowalski"));
        assert_eq!(incident.medical_report_number(), None);
        assert!(matches!(incident.details(), IncidentDetails::Injury { .. }));
    }

    #[test]
    fn test_random_text_fixtures_build() {
        let property = IncidentFixtures::random_property();
        assert!(property.property_address().is_some());
        assert!(!property.location().trim().is_empty());

        let injury = IncidentFixtures::random_injury();
        assert!(injury.injured_person().is_some());
    }

    #[test]
    fn test_repeated_setter_keeps_last_value() {
        let incident = IncidentBuilder::auto()
            .occurred_at(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
            .occurred_at(TemporalFixtures::occurred_at())
            .location("Krakow")
            .unwrap()
            .location("Warsaw")
            .unwrap()
            .for_auto()
            .unwrap()
            .vin("VIN-1")
            .unwrap()
            .vin(IncidentFixtures::VIN)
            .unwrap()
            .license_plate("WX12345")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(incident.occurred_at(), TemporalFixtures::occurred_at());
        assert_eq!(incident.location(), "Warsaw");
        assert_eq!(incident.vin(), Some(IncidentFixtures::VIN));
    }
}

// ============================================================================
// Missing and invalid input
// ============================================================================

mod validation {
    use super::*;

    #[test]
    fn test_missing_location_is_named() {
        let err = IncidentBuilder::property()
            .occurred_at(TemporalFixtures::occurred_at())
            .for_property()
            .unwrap()
            .property_address("Main St 1")
            .unwrap()
            .build()
            .unwrap_err();

        assert!(matches!(err, ClaimError::MissingField { field: "location", incident_type: None }));
        assert_eq!(err.to_string(), "location is required");
    }

    #[test]
    fn test_missing_license_plate_names_field_and_type() {
        let err = IncidentBuilder::auto()
            .occurred_at(TemporalFixtures::occurred_at())
            .location("Warsaw")
            .unwrap()
            .for_auto()
            .unwrap()
            .vin(IncidentFixtures::VIN)
            .unwrap()
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "licensePlate is required for AUTO");
    }

    #[test]
    fn test_missing_vin_names_field_and_type() {
        let err = IncidentBuilder::auto()
            .occurred_at(TemporalFixtures::occurred_at())
            .location("Warsaw")
            .unwrap()
            .for_auto()
            .unwrap()
            .license_plate(IncidentFixtures::LICENSE_PLATE)
            .unwrap()
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ClaimError::MissingField { field: "vin", incident_type: Some(IncidentType::Auto) }
        ));
        assert_eq!(err.to_string(), "vin is required for AUTO");
    }

    #[test]
    fn test_missing_property_address() {
        let err = IncidentBuilder::property()
            .occurred_at(TemporalFixtures::occurred_at())
            .location("Warsaw")
            .unwrap()
            .for_property()
            .unwrap()
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ClaimError::MissingField {
                field: "propertyAddress",
                incident_type: Some(IncidentType::Property),
            }
        ));
        assert_eq!(err.to_string(), "propertyAddress is required for PROPERTY");
    }

    #[test]
    fn test_missing_stolen_item() {
        let err = IncidentBuilder::theft()
            .occurred_at(TemporalFixtures::occurred_at())
            .location("Warsaw")
            .unwrap()
            .for_theft()
            .unwrap()
            .police_report_number("KRP-1")
            .unwrap()
            .build()
            .unwrap_err();

        assert_error_contains(&err, "stolenItem");
        assert_error_contains(&err, "THEFT");
    }

    #[test]
    fn test_missing_injured_person() {
        let err = IncidentBuilder::injury()
            .occurred_at(TemporalFixtures::occurred_at())
            .location("Warsaw")
            .unwrap()
            .for_injury()
            .unwrap()
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "injuredPerson is required for INJURY");
    }

    #[test]
    fn test_blank_location_rejected_at_call() {
        let result = IncidentBuilder::auto().location("   ");
        assert!(matches!(result, Err(ClaimError::InvalidArgument(_))));
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn mismatched_branch_names_both_types(
        actual in incident_type_strategy(),
        attempted in incident_type_strategy(),
    ) {
        let builder = IncidentBuilder::new(actual).occurred_at(TemporalFixtures::occurred_at());
        let result = match attempted {
            IncidentType::Auto => builder.for_auto().map(|_| ()),
            IncidentType::Theft => builder.for_theft().map(|_| ()),
            IncidentType::Property => builder.for_property().map(|_| ()),
            IncidentType::Injury => builder.for_injury().map(|_| ()),
        };

        if actual == attempted {
            prop_assert!(result.is_ok());
        } else {
            let message = result.unwrap_err().to_string();
            prop_assert!(message.contains(actual.as_str()));
            prop_assert!(message.contains(attempted.as_str()));
        }
    }

    #[test]
    fn built_incident_keeps_common_fields(
        occurred_at in datetime_strategy(),
        location in non_blank_text_strategy(),
        address in non_blank_text_strategy(),
    ) {
        let incident = IncidentBuilder::property()
            .occurred_at(occurred_at)
            .location(location.clone())
            .unwrap()
            .for_property()
            .unwrap()
            .property_address(address.clone())
            .unwrap()
            .build()
            .unwrap();

        prop_assert_eq!(incident.occurred_at(), occurred_at);
        prop_assert_eq!(incident.location(), location.as_str());
        prop_assert_eq!(incident.property_address(), Some(address.as_str()));
    }

    #[test]
    fn blank_text_is_rejected(text in blank_text_strategy()) {
        let result = IncidentBuilder::theft().description(text);
        prop_assert!(matches!(result, Err(ClaimError::InvalidArgument(_))));
    }
}
