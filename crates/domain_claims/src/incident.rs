//! Incident value and its guided builder
//!
//! An incident is the real-world event a claim is raised against. Every
//! incident carries the common facts (when, where, an optional description)
//! plus details specific to its [`IncidentType`], held in the
//! [`IncidentDetails`] sum type so that details of one type can never leak
//! into an incident of another.
//!
//! # Construction
//!
//! ```text
//! IncidentBuilder::auto()     -> occurred_at / location / description (any order)
//!                             -> for_auto()      -> vin / license_plate      -> build()
//! IncidentBuilder::theft()    -> ...             -> for_theft()    -> stolen_item / police_report_number
//! IncidentBuilder::property() -> ...             -> for_property() -> property_address
//! IncidentBuilder::injury()   -> ...             -> for_injury()   -> injured_person / medical_report_number
//! ```
//!
//! The entry point fixes the type. Choosing a `for_*` branch for another type
//! fails with [`ClaimError::TypeMismatch`]; once on a typed step only that
//! type's setters exist.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{require_text, ClaimError};

/// Kind of incident being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentType {
    /// Vehicle collision or damage
    Auto,
    /// Stolen property
    Theft,
    /// Damage to real estate
    Property,
    /// Bodily injury
    Injury,
}

impl IncidentType {
    /// All incident types
    pub const ALL: [IncidentType; 4] = [
        IncidentType::Auto,
        IncidentType::Theft,
        IncidentType::Property,
        IncidentType::Injury,
    ];

    /// Stable textual form
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentType::Auto => "AUTO",
            IncidentType::Theft => "THEFT",
            IncidentType::Property => "PROPERTY",
            IncidentType::Injury => "INJURY",
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific incident details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "incident_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentDetails {
    Auto {
        vin: String,
        license_plate: String,
    },
    Theft {
        stolen_item: String,
        police_report_number: Option<String>,
    },
    Property {
        property_address: String,
    },
    Injury {
        injured_person: String,
        medical_report_number: Option<String>,
    },
}

impl IncidentDetails {
    /// Returns the incident type these details belong to
    pub fn incident_type(&self) -> IncidentType {
        match self {
            IncidentDetails::Auto { .. } => IncidentType::Auto,
            IncidentDetails::Theft { .. } => IncidentType::Theft,
            IncidentDetails::Property { .. } => IncidentType::Property,
            IncidentDetails::Injury { .. } => IncidentType::Injury,
        }
    }
}

/// An immutable, validated incident
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    occurred_at: DateTime<Utc>,
    location: String,
    description: Option<String>,
    details: IncidentDetails,
}

impl Incident {
    pub fn incident_type(&self) -> IncidentType {
        self.details.incident_type()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn details(&self) -> &IncidentDetails {
        &self.details
    }

    pub fn vin(&self) -> Option<&str> {
        match &self.details {
            IncidentDetails::Auto { vin, .. } => Some(vin),
            _ => None,
        }
    }

    pub fn license_plate(&self) -> Option<&str> {
        match &self.details {
            IncidentDetails::Auto { license_plate, .. } => Some(license_plate),
            _ => None,
        }
    }

    pub fn stolen_item(&self) -> Option<&str> {
        match &self.details {
            IncidentDetails::Theft { stolen_item, .. } => Some(stolen_item),
            _ => None,
        }
    }

    pub fn police_report_number(&self) -> Option<&str> {
        match &self.details {
            IncidentDetails::Theft { police_report_number, .. } => police_report_number.as_deref(),
            _ => None,
        }
    }

    pub fn property_address(&self) -> Option<&str> {
        match &self.details {
            IncidentDetails::Property { property_address } => Some(property_address),
            _ => None,
        }
    }

    pub fn injured_person(&self) -> Option<&str> {
        match &self.details {
            IncidentDetails::Injury { injured_person, .. } => Some(injured_person),
            _ => None,
        }
    }

    pub fn medical_report_number(&self) -> Option<&str> {
        match &self.details {
            IncidentDetails::Injury {
                medical_report_number,
                ..
            } => medical_report_number.as_deref(),
            _ => None,
        }
    }
}

/// Fields shared by every incident type, collected on the common step
#[derive(Debug, Clone, Default)]
struct CommonFields {
    occurred_at: Option<DateTime<Utc>>,
    location: Option<String>,
    description: Option<String>,
}

impl CommonFields {
    fn require(self) -> Result<CommonFacts, ClaimError> {
        let occurred_at = self.occurred_at.ok_or(ClaimError::MissingField {
            field: "occurredAt",
            incident_type: None,
        })?;
        let location = self.location.ok_or(ClaimError::MissingField {
            field: "location",
            incident_type: None,
        })?;
        Ok(CommonFacts {
            occurred_at,
            location,
            description: self.description,
        })
    }
}

/// Validated common fields, ready to be joined with type details
struct CommonFacts {
    occurred_at: DateTime<Utc>,
    location: String,
    description: Option<String>,
}

impl CommonFacts {
    fn with_details(self, details: IncidentDetails) -> Incident {
        Incident {
            occurred_at: self.occurred_at,
            location: self.location,
            description: self.description,
            details,
        }
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    incident_type: IncidentType,
) -> Result<String, ClaimError> {
    value.ok_or(ClaimError::MissingField {
        field,
        incident_type: Some(incident_type),
    })
}

/// Common step of the incident builder; the incident type is fixed at creation
#[derive(Debug, Clone)]
pub struct IncidentBuilder {
    incident_type: IncidentType,
    common: CommonFields,
}

impl IncidentBuilder {
    /// Starts an incident of the given type
    pub fn new(incident_type: IncidentType) -> Self {
        Self {
            incident_type,
            common: CommonFields::default(),
        }
    }

    pub fn auto() -> Self {
        Self::new(IncidentType::Auto)
    }

    pub fn theft() -> Self {
        Self::new(IncidentType::Theft)
    }

    pub fn property() -> Self {
        Self::new(IncidentType::Property)
    }

    pub fn injury() -> Self {
        Self::new(IncidentType::Injury)
    }

    /// The type this builder was created for
    pub fn incident_type(&self) -> IncidentType {
        self.incident_type
    }

    pub fn occurred_at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.common.occurred_at = Some(occurred_at);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Result<Self, ClaimError> {
        self.common.location = Some(require_text(location, "location")?);
        Ok(self)
    }

    pub fn description(mut self, description: impl Into<String>) -> Result<Self, ClaimError> {
        self.common.description = Some(require_text(description, "description")?);
        Ok(self)
    }

    pub fn for_auto(self) -> Result<AutoDetailsStep, ClaimError> {
        self.ensure_type(IncidentType::Auto)?;
        Ok(AutoDetailsStep {
            common: self.common,
            vin: None,
            license_plate: None,
        })
    }

    pub fn for_theft(self) -> Result<TheftDetailsStep, ClaimError> {
        self.ensure_type(IncidentType::Theft)?;
        Ok(TheftDetailsStep {
            common: self.common,
            stolen_item: None,
            police_report_number: None,
        })
    }

    pub fn for_property(self) -> Result<PropertyDetailsStep, ClaimError> {
        self.ensure_type(IncidentType::Property)?;
        Ok(PropertyDetailsStep {
            common: self.common,
            property_address: None,
        })
    }

    pub fn for_injury(self) -> Result<InjuryDetailsStep, ClaimError> {
        self.ensure_type(IncidentType::Injury)?;
        Ok(InjuryDetailsStep {
            common: self.common,
            injured_person: None,
            medical_report_number: None,
        })
    }

    fn ensure_type(&self, attempted: IncidentType) -> Result<(), ClaimError> {
        if self.incident_type != attempted {
            return Err(ClaimError::TypeMismatch {
                actual: self.incident_type,
                attempted,
            });
        }
        Ok(())
    }
}

/// Details step for [`IncidentType::Auto`]
#[derive(Debug, Clone)]
pub struct AutoDetailsStep {
    common: CommonFields,
    vin: Option<String>,
    license_plate: Option<String>,
}

impl AutoDetailsStep {
    pub fn vin(mut self, vin: impl Into<String>) -> Result<Self, ClaimError> {
        self.vin = Some(require_text(vin, "vin")?);
        Ok(self)
    }

    pub fn license_plate(mut self, plate: impl Into<String>) -> Result<Self, ClaimError> {
        self.license_plate = Some(require_text(plate, "licensePlate")?);
        Ok(self)
    }

    /// Builds the incident
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if a common field, `vin` or `licensePlate` is absent
    pub fn build(self) -> Result<Incident, ClaimError> {
        let facts = self.common.require()?;
        let details = IncidentDetails::Auto {
            vin: required(self.vin, "vin", IncidentType::Auto)?,
            license_plate: required(self.license_plate, "licensePlate", IncidentType::Auto)?,
        };
        Ok(facts.with_details(details))
    }
}

/// Details step for [`IncidentType::Theft`]
#[derive(Debug, Clone)]
pub struct TheftDetailsStep {
    common: CommonFields,
    stolen_item: Option<String>,
    police_report_number: Option<String>,
}

impl TheftDetailsStep {
    pub fn stolen_item(mut self, item: impl Into<String>) -> Result<Self, ClaimError> {
        self.stolen_item = Some(require_text(item, "stolenItem")?);
        Ok(self)
    }

    pub fn police_report_number(
        mut self,
        report_number: impl Into<String>,
    ) -> Result<Self, ClaimError> {
        self.police_report_number = Some(require_text(report_number, "policeReportNumber")?);
        Ok(self)
    }

    /// Builds the incident
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if a common field or `stolenItem` is absent
    pub fn build(self) -> Result<Incident, ClaimError> {
        let facts = self.common.require()?;
        let details = IncidentDetails::Theft {
            stolen_item: required(self.stolen_item, "stolenItem", IncidentType::Theft)?,
            police_report_number: self.police_report_number,
        };
        Ok(facts.with_details(details))
    }
}

/// Details step for [`IncidentType::Property`]
#[derive(Debug, Clone)]
pub struct PropertyDetailsStep {
    common: CommonFields,
    property_address: Option<String>,
}

impl PropertyDetailsStep {
    pub fn property_address(mut self, address: impl Into<String>) -> Result<Self, ClaimError> {
        self.property_address = Some(require_text(address, "propertyAddress")?);
        Ok(self)
    }

    /// Builds the incident
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if a common field or `propertyAddress` is absent
    pub fn build(self) -> Result<Incident, ClaimError> {
        let facts = self.common.require()?;
        let details = IncidentDetails::Property {
            property_address: required(
                self.property_address,
                "propertyAddress",
                IncidentType::Property,
            )?,
        };
        Ok(facts.with_details(details))
    }
}

/// Details step for [`IncidentType::Injury`]
#[derive(Debug, Clone)]
pub struct InjuryDetailsStep {
    common: CommonFields,
    injured_person: Option<String>,
    medical_report_number: Option<String>,
}

impl InjuryDetailsStep {
    pub fn injured_person(mut self, person: impl Into<String>) -> Result<Self, ClaimError> {
        self.injured_person = Some(require_text(person, "injuredPerson")?);
        Ok(self)
    }

    pub fn medical_report_number(
        mut self,
        report_number: impl Into<String>,
    ) -> Result<Self, ClaimError> {
        self.medical_report_number = Some(require_text(report_number, "medicalReportNumber")?);
        Ok(self)
    }

    /// Builds the incident
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if a common field or `injuredPerson` is absent
    pub fn build(self) -> Result<Incident, ClaimError> {
        let facts = self.common.require()?;
        let details = IncidentDetails::Injury {
            injured_person: required(self.injured_person, "injuredPerson", IncidentType::Injury)?,
            medical_report_number: self.medical_report_number,
        };
        Ok(facts.with_details(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn occurred() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 27, 10, 15, 30).unwrap()
    }

    #[test]
    fn test_auto_incident_builds() {
        let incident = IncidentBuilder::auto()
            .occurred_at(occurred())
            .location("Warsaw")
            .unwrap()
            .description("Minor crash")
            .unwrap()
            .for_auto()
            .unwrap()
            .vin("WVWZZZ1JZXW000001")
            .unwrap()
            .license_plate("WX12345")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(incident.incident_type(), IncidentType::Auto);
        assert_eq!(incident.occurred_at(), occurred());
        assert_eq!(incident.location(), "Warsaw");
        assert_eq!(incident.description(), Some("Minor crash"));
        assert_eq!(incident.vin(), Some("WVWZZZ1JZXW000001"));
        assert_eq!(incident.license_plate(), Some("WX12345"));
        assert_eq!(incident.stolen_item(), None);
    }

    #[test]
    fn test_wrong_branch_names_both_types() {
        let err = IncidentBuilder::auto()
            .occurred_at(occurred())
            .for_theft()
            .unwrap_err();

        assert!(matches!(
            err,
            ClaimError::TypeMismatch { actual: IncidentType::Auto, attempted: IncidentType::Theft }
        ));
        assert_eq!(err.to_string(), "This builder is for AUTO, not THEFT");
    }

    #[test]
    fn test_common_fields_checked_before_type_fields() {
        let err = IncidentBuilder::auto()
            .location("Warsaw")
            .unwrap()
            .for_auto()
            .unwrap()
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "occurredAt is required");
    }

    #[test]
    fn test_details_serialize_with_type_tag() {
        let details = IncidentDetails::Property { property_address: "Main St 1".to_string() };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["incident_type"], "PROPERTY");
        assert_eq!(json["property_address"], "Main St 1");
    }
}
