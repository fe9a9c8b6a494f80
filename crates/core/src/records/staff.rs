use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use mediboard_types::RecordId;

use crate::filter::Filterable;

/// Duty state of a staff member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    OnDuty,
    OffDuty,
    InSurgery,
    OnLeave,
}

impl StaffStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            StaffStatus::OnDuty => "on-duty",
            StaffStatus::OffDuty => "off-duty",
            StaffStatus::InSurgery => "in-surgery",
            StaffStatus::OnLeave => "on-leave",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "on-duty" => Some(StaffStatus::OnDuty),
            "off-duty" => Some(StaffStatus::OffDuty),
            "in-surgery" => Some(StaffStatus::InSurgery),
            "on-leave" => Some(StaffStatus::OnLeave),
            _ => None,
        }
    }

    /// Dictionary key for the localized display name.
    pub fn title_key(self) -> &'static str {
        match self {
            StaffStatus::OnDuty => "status.staff.on-duty",
            StaffStatus::OffDuty => "status.staff.off-duty",
            StaffStatus::InSurgery => "status.staff.in-surgery",
            StaffStatus::OnLeave => "status.staff.on-leave",
        }
    }
}

/// One rostered shift.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Shift {
    /// Day label as provided by the roster source (e.g. "Monday").
    pub day: String,
    /// Hours label, e.g. "08:00 - 16:00".
    pub hours: String,
}

/// One staff member as shown in the roster listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StaffMember {
    #[schema(value_type = String)]
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub department: String,
    pub status: StaffStatus,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Filterable for StaffMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.id.as_str(), &self.role]
    }

    fn facet(&self, dimension: &str) -> Option<Cow<'_, str>> {
        match dimension {
            "department" => Some(Cow::Borrowed(&self.department)),
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
            StaffStatus::OnDuty,
            StaffStatus::OffDuty,
            StaffStatus::InSurgery,
            StaffStatus::OnLeave,
        ] {
            assert_eq!(StaffStatus::from_wire(status.as_wire()), Some(status));
        }
        assert_eq!(StaffStatus::from_wire("sick"), None);
    }
}
