use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mediboard_types::RecordId;

use crate::filter::Filterable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no-show",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(AppointmentStatus::Scheduled),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            "no-show" => Some(AppointmentStatus::NoShow),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Consultation,
    FollowUp,
    Procedure,
    Emergency,
}

impl AppointmentType {
    pub fn as_wire(self) -> &'static str {
        match self {
            AppointmentType::Consultation => "consultation",
            AppointmentType::FollowUp => "follow-up",
            AppointmentType::Procedure => "procedure",
            AppointmentType::Emergency => "emergency",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "consultation" => Some(AppointmentType::Consultation),
            "follow-up" => Some(AppointmentType::FollowUp),
            "procedure" => Some(AppointmentType::Procedure),
            "emergency" => Some(AppointmentType::Emergency),
            _ => None,
        }
    }
}

/// One calendar appointment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Appointment {
    #[schema(value_type = String)]
    pub id: RecordId,
    pub patient_name: String,
    #[schema(value_type = String)]
    pub patient_id: RecordId,
    pub doctor_name: String,
    #[schema(value_type = String)]
    pub doctor_id: RecordId,
    pub department: String,
    pub date: NaiveDate,
    /// Start time label, e.g. "09:30".
    pub time: String,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Filterable for Appointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.patient_name, &self.doctor_name, self.id.as_str()]
    }

    fn facet(&self, dimension: &str) -> Option<Cow<'_, str>> {
        match dimension {
            "department" => Some(Cow::Borrowed(&self.department)),
            "status" => Some(Cow::Borrowed(self.status.as_wire())),
            "type" => Some(Cow::Borrowed(self.kind.as_wire())),
            // Calendar views filter by exact day; the facet value is the
            // ISO date (YYYY-MM-DD).
            "date" => Some(Cow::Owned(self.date.to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_type_wire_round_trip() {
        for status in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
        ] {
            assert_eq!(AppointmentStatus::from_wire(status.as_wire()), Some(status));
        }
        for kind in [
            AppointmentType::Consultation,
            AppointmentType::FollowUp,
            AppointmentType::Procedure,
            AppointmentType::Emergency,
        ] {
            assert_eq!(AppointmentType::from_wire(kind.as_wire()), Some(kind));
        }
    }

    #[test]
    fn test_date_facet_uses_iso_format() {
        let appointment = Appointment {
            id: RecordId::new("apt-001").unwrap(),
            patient_name: "John Smith".into(),
            patient_id: RecordId::new("P-10045").unwrap(),
            doctor_name: "Dr. Sarah Chen".into(),
            doctor_id: RecordId::new("D-5023").unwrap(),
            department: "Cardiology".into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            time: "09:30".into(),
            duration_minutes: 30,
            status: AppointmentStatus::Scheduled,
            kind: AppointmentType::Consultation,
            notes: None,
        };
        assert_eq!(appointment.facet("date").unwrap(), "2025-05-01");
    }
}
