use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use mediboard_types::RecordId;

use crate::filter::Filterable;

/// Load state of a department.
///
/// This is the canonical enumeration; the old dashboard carried a second,
/// drifted set of values (`stable`/`overloaded`/`understaffed`) in some
/// copies of the same component, which is not preserved here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentStatus {
    Normal,
    Busy,
    Critical,
}

impl DepartmentStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            DepartmentStatus::Normal => "normal",
            DepartmentStatus::Busy => "busy",
            DepartmentStatus::Critical => "critical",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(DepartmentStatus::Normal),
            "busy" => Some(DepartmentStatus::Busy),
            "critical" => Some(DepartmentStatus::Critical),
            _ => None,
        }
    }

    /// Dictionary key for the localized display name.
    pub fn title_key(self) -> &'static str {
        match self {
            DepartmentStatus::Normal => "status.department.normal",
            DepartmentStatus::Busy => "status.department.busy",
            DepartmentStatus::Critical => "status.department.critical",
        }
    }
}

/// One hospital department.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Department {
    #[schema(value_type = String)]
    pub id: RecordId,
    pub name: String,
    pub head: String,
    pub head_title: String,
    pub total_beds: u32,
    pub occupied_beds: u32,
    pub active_staff: u32,
    pub patient_count: u32,
    pub status: DepartmentStatus,
    pub description: String,
}

impl Department {
    /// Beds not currently occupied. Saturates rather than underflowing if
    /// the source data over-reports occupancy.
    pub fn available_beds(&self) -> u32 {
        self.total_beds.saturating_sub(self.occupied_beds)
    }
}

impl Filterable for Department {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.head]
    }

    fn facet(&self, dimension: &str) -> Option<Cow<'_, str>> {
        match dimension {
            "status" => Some(Cow::Borrowed(self.status.as_wire())),
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
            DepartmentStatus::Normal,
            DepartmentStatus::Busy,
            DepartmentStatus::Critical,
        ] {
            assert_eq!(DepartmentStatus::from_wire(status.as_wire()), Some(status));
        }
        assert_eq!(DepartmentStatus::from_wire("overloaded"), None);
    }

    #[test]
    fn test_available_beds_saturates() {
        let dept = Department {
            id: RecordId::new("icu").unwrap(),
            name: "Intensive Care Unit".into(),
            head: "Dr. James Wilson".into(),
            head_title: "Critical Care Specialist".into(),
            total_beds: 15,
            occupied_beds: 20,
            active_staff: 45,
            patient_count: 14,
            status: DepartmentStatus::Critical,
            description: String::new(),
        };
        assert_eq!(dept.available_beds(), 0);
    }
}
