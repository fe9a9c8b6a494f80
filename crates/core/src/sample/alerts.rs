use chrono::{DateTime, Duration, Utc};

use mediboard_types::RecordId;

use crate::records::{Alert, AlertCategory, AlertPriority, AlertStatus};
use crate::DashboardResult;

struct AlertSeed {
    id: &'static str,
    message: &'static str,
    priority: AlertPriority,
    category: AlertCategory,
    minutes_ago: i64,
    affected_entity: &'static str,
    details: Option<&'static str>,
    status: AlertStatus,
    assigned_to: Option<&'static str>,
    department: Option<&'static str>,
}

fn build(now: DateTime<Utc>, seed: AlertSeed) -> DashboardResult<Alert> {
    Ok(Alert {
        id: RecordId::new(seed.id)?,
        message: seed.message.into(),
        priority: seed.priority,
        category: seed.category,
        timestamp: now - Duration::minutes(seed.minutes_ago),
        affected_entity: seed.affected_entity.into(),
        details: seed.details.map(Into::into),
        status: seed.status,
        assigned_to: seed.assigned_to.map(Into::into),
        department: seed.department.map(Into::into),
    })
}

pub fn alerts() -> DashboardResult<Vec<Alert>> {
    let now = Utc::now();
    let seeds = [
        AlertSeed {
            id: "AL001",
            message: "Patient PT003 oxygen saturation below 90%",
            priority: AlertPriority::Critical,
            category: AlertCategory::Patient,
            minutes_ago: 4,
            affected_entity: "PT003",
            details: Some("SpO2 reading 88% sustained for over two minutes."),
            status: AlertStatus::Active,
            assigned_to: Some("Dr. James Wilson"),
            department: Some("Neurology"),
        },
        AlertSeed {
            id: "AL002",
            message: "Code blue called in ICU bed 4",
            priority: AlertPriority::Critical,
            category: AlertCategory::Patient,
            minutes_ago: 12,
            affected_entity: "ICU-BED-04",
            details: None,
            status: AlertStatus::Acknowledged,
            assigned_to: Some("Nurse Patricia Lee"),
            department: Some("ICU"),
        },
        AlertSeed {
            id: "AL003",
            message: "Ventilator VNT-07 reporting pressure fault",
            priority: AlertPriority::Critical,
            category: AlertCategory::Device,
            minutes_ago: 25,
            affected_entity: "VNT-07",
            details: Some("Inspiratory pressure outside configured limits."),
            status: AlertStatus::Active,
            assigned_to: None,
            department: Some("ICU"),
        },
        AlertSeed {
            id: "AL004",
            message: "Blood bank stock of O-negative critically low",
            priority: AlertPriority::Critical,
            category: AlertCategory::System,
            minutes_ago: 47,
            affected_entity: "BLOOD-BANK",
            details: Some("Two units remaining against a four-unit floor."),
            status: AlertStatus::Active,
            assigned_to: None,
            department: None,
        },
        AlertSeed {
            id: "AL005",
            message: "Patient PT005 sustained tachycardia",
            priority: AlertPriority::Critical,
            category: AlertCategory::Patient,
            minutes_ago: 63,
            affected_entity: "PT005",
            details: None,
            status: AlertStatus::Resolved,
            assigned_to: Some("Dr. Michael Brown"),
            department: Some("Pulmonology"),
        },
        AlertSeed {
            id: "AL006",
            message: "Infusion pump INF-22 battery below 15%",
            priority: AlertPriority::Warning,
            category: AlertCategory::Device,
            minutes_ago: 18,
            affected_entity: "INF-22",
            details: None,
            status: AlertStatus::Active,
            assigned_to: None,
            department: Some("Cardiology"),
        },
        AlertSeed {
            id: "AL007",
            message: "Emergency department wait time above 45 minutes",
            priority: AlertPriority::Warning,
            category: AlertCategory::System,
            minutes_ago: 34,
            affected_entity: "ED-QUEUE",
            details: Some("Fourteen patients waiting, longest 52 minutes."),
            status: AlertStatus::Acknowledged,
            assigned_to: Some("Dr. Robert Davis"),
            department: Some("Emergency"),
        },
        AlertSeed {
            id: "AL008",
            message: "Patient PT001 blood pressure trending upward",
            priority: AlertPriority::Warning,
            category: AlertCategory::Patient,
            minutes_ago: 58,
            affected_entity: "PT001",
            details: None,
            status: AlertStatus::Active,
            assigned_to: Some("Dr. Sarah Chen"),
            department: Some("Cardiology"),
        },
        AlertSeed {
            id: "AL009",
            message: "Pharmacy stock of insulin glargine below reorder point",
            priority: AlertPriority::Warning,
            category: AlertCategory::System,
            minutes_ago: 95,
            affected_entity: "PHARMACY",
            details: None,
            status: AlertStatus::Active,
            assigned_to: None,
            department: None,
        },
        AlertSeed {
            id: "AL010",
            message: "Telemetry monitor TM-11 intermittent signal loss",
            priority: AlertPriority::Warning,
            category: AlertCategory::Device,
            minutes_ago: 130,
            affected_entity: "TM-11",
            details: Some("Three dropouts in the last hour."),
            status: AlertStatus::Resolved,
            assigned_to: None,
            department: Some("ICU"),
        },
        AlertSeed {
            id: "AL011",
            message: "Nightly backup completed with warnings",
            priority: AlertPriority::Info,
            category: AlertCategory::System,
            minutes_ago: 210,
            affected_entity: "BACKUP-JOB",
            details: Some("Two non-critical volumes skipped."),
            status: AlertStatus::Acknowledged,
            assigned_to: None,
            department: None,
        },
        AlertSeed {
            id: "AL012",
            message: "Security badge reader at east entrance back online",
            priority: AlertPriority::Info,
            category: AlertCategory::System,
            minutes_ago: 245,
            affected_entity: "BADGE-EAST",
            details: None,
            status: AlertStatus::Resolved,
            assigned_to: None,
            department: None,
        },
        AlertSeed {
            id: "AL013",
            message: "Patient PT004 discharge paperwork ready for review",
            priority: AlertPriority::Info,
            category: AlertCategory::Patient,
            minutes_ago: 300,
            affected_entity: "PT004",
            details: None,
            status: AlertStatus::Active,
            assigned_to: Some("Dr. Lisa Rodriguez"),
            department: Some("Pediatrics"),
        },
        AlertSeed {
            id: "AL014",
            message: "Dialysis machine DLY-03 scheduled maintenance due",
            priority: AlertPriority::Info,
            category: AlertCategory::Device,
            minutes_ago: 380,
            affected_entity: "DLY-03",
            details: None,
            status: AlertStatus::Active,
            assigned_to: None,
            department: Some("Nephrology"),
        },
        AlertSeed {
            id: "AL015",
            message: "Monthly infection control report published",
            priority: AlertPriority::Info,
            category: AlertCategory::System,
            minutes_ago: 460,
            affected_entity: "REPORTS",
            details: None,
            status: AlertStatus::Resolved,
            assigned_to: None,
            department: None,
        },
    ];

    seeds.into_iter().map(|seed| build(now, seed)).collect()
}
