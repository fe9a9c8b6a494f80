use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mediboard_types::RecordId;

use crate::filter::Filterable;

/// Admission state of a patient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Inpatient,
    Outpatient,
    Discharged,
}

impl PatientStatus {
    /// Convert to the wire string.
    pub fn as_wire(self) -> &'static str {
        match self {
            PatientStatus::Inpatient => "inpatient",
            PatientStatus::Outpatient => "outpatient",
            PatientStatus::Discharged => "discharged",
        }
    }

    /// Parse from the wire string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "inpatient" => Some(PatientStatus::Inpatient),
            "outpatient" => Some(PatientStatus::Outpatient),
            "discharged" => Some(PatientStatus::Discharged),
            _ => None,
        }
    }

    /// Dictionary key for the localized display name.
    pub fn title_key(self) -> &'static str {
        match self {
            PatientStatus::Inpatient => "status.patient.inpatient",
            PatientStatus::Outpatient => "status.patient.outpatient",
            PatientStatus::Discharged => "status.patient.discharged",
        }
    }
}

/// Latest vital signs, when the patient is monitored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Vitals {
    pub heart_rate: u32,
    pub temperature: f64,
    pub spo2: u32,
    pub blood_pressure: String,
}

/// One prescribed medication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

/// One patient as shown in the patients listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Patient {
    #[schema(value_type = String)]
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub department: String,
    pub condition: String,
    pub assigned_doctor: String,
    pub admission_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharge_date: Option<NaiveDate>,
    pub status: PatientStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitals: Option<Vitals>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharge_summary: Option<String>,
}

impl Filterable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.id.as_str(), &self.assigned_doctor]
    }

    fn facet(&self, dimension: &str) -> Option<Cow<'_, str>> {
        match dimension {
            "department" => Some(Cow::Borrowed(&self.department)),
            "status" => Some(Cow::Borrowed(self.status.as_wire())),
            "gender" => Some(Cow::Borrowed(&self.gender)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_round_trip() {
        for status in [
            PatientStatus::Inpatient,
            PatientStatus::Outpatient,
            PatientStatus::Discharged,
        ] {
            assert_eq!(PatientStatus::from_wire(status.as_wire()), Some(status));
        }
        assert_eq!(PatientStatus::from_wire("admitted"), None);
    }

    #[test]
    fn test_optional_fields_deserialize_as_absent() {
        let json = r#"{
            "id": "PT001",
            "name": "John Smith",
            "age": 56,
            "gender": "male",
            "department": "Cardiology",
            "condition": "Stable",
            "assigned_doctor": "Dr. Sarah Chen",
            "admission_date": "2025-04-25",
            "status": "inpatient"
        }"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert!(patient.discharge_date.is_none());
        assert!(patient.vitals.is_none());
        assert!(patient.medications.is_empty());
        assert!(patient.allergies.is_empty());
    }
}
