use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mediboard_types::RecordId;

use crate::filter::Filterable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Critical,
    Warning,
    Info,
}

impl AlertPriority {
    pub fn as_wire(self) -> &'static str {
        match self {
            AlertPriority::Critical => "critical",
            AlertPriority::Warning => "warning",
            AlertPriority::Info => "info",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(AlertPriority::Critical),
            "warning" => Some(AlertPriority::Warning),
            "info" => Some(AlertPriority::Info),
            _ => None,
        }
    }

    /// Ordering rank for feeds: critical first, info last.
    pub fn rank(self) -> u8 {
        match self {
            AlertPriority::Critical => 0,
            AlertPriority::Warning => 1,
            AlertPriority::Info => 2,
        }
    }

    /// Dictionary key for the localized display name.
    pub fn title_key(self) -> &'static str {
        match self {
            AlertPriority::Critical => "priority.critical",
            AlertPriority::Warning => "priority.warning",
            AlertPriority::Info => "priority.info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Patient,
    System,
    Device,
}

impl AlertCategory {
    pub fn as_wire(self) -> &'static str {
        match self {
            AlertCategory::Patient => "patient",
            AlertCategory::System => "system",
            AlertCategory::Device => "device",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "patient" => Some(AlertCategory::Patient),
            "system" => Some(AlertCategory::System),
            "device" => Some(AlertCategory::Device),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Acknowledged => "acknowledged",
            AlertStatus::Resolved => "resolved",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "active" => Some(AlertStatus::Active),
            "acknowledged" => Some(AlertStatus::Acknowledged),
            "resolved" => Some(AlertStatus::Resolved),
            _ => None,
        }
    }
}

/// One alert in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Alert {
    #[schema(value_type = String)]
    pub id: RecordId,
    pub message: String,
    pub priority: AlertPriority,
    pub category: AlertCategory,
    pub timestamp: DateTime<Utc>,
    pub affected_entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub status: AlertStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Filterable for Alert {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.message, &self.affected_entity]
    }

    fn facet(&self, dimension: &str) -> Option<Cow<'_, str>> {
        match dimension {
            "priority" => Some(Cow::Borrowed(self.priority.as_wire())),
            "category" => Some(Cow::Borrowed(self.category.as_wire())),
            "status" => Some(Cow::Borrowed(self.status.as_wire())),
            // Optional field: an absent department can never equal a
            // requested value, but the dimension itself is always known.
            "department" => Some(Cow::Borrowed(self.department.as_deref().unwrap_or(""))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_orders_critical_first() {
        assert!(AlertPriority::Critical.rank() < AlertPriority::Warning.rank());
        assert!(AlertPriority::Warning.rank() < AlertPriority::Info.rank());
    }

    #[test]
    fn test_wire_round_trips() {
        for priority in [
            AlertPriority::Critical,
            AlertPriority::Warning,
            AlertPriority::Info,
        ] {
            assert_eq!(AlertPriority::from_wire(priority.as_wire()), Some(priority));
        }
        for category in [
            AlertCategory::Patient,
            AlertCategory::System,
            AlertCategory::Device,
        ] {
            assert_eq!(AlertCategory::from_wire(category.as_wire()), Some(category));
        }
        for status in [
            AlertStatus::Active,
            AlertStatus::Acknowledged,
            AlertStatus::Resolved,
        ] {
            assert_eq!(AlertStatus::from_wire(status.as_wire()), Some(status));
        }
    }
}
