//! Per-listing derived summaries.
//!
//! Each summary is a pure computation over a record slice, recomputed on
//! demand for the summary cards and charts. Empty inputs produce all-zero
//! summaries (see [`crate::stats`] for the numeric contract).

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::records::{Alert, Appointment, Department, Patient, PatientStatus};
use crate::stats::{average_by, count_by, percentage, round1, GroupCount};

/// Headline numbers for the patients listing.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct PatientSummary {
    pub total: u64,
    pub admitted_today: u64,
    pub discharged_today: u64,
    pub inpatients: u64,
    /// Mean stay in days over discharged patients, one decimal; `0.0` when
    /// nobody has been discharged.
    pub average_stay_days: f64,
    pub by_department: Vec<GroupCount>,
}

impl PatientSummary {
    pub fn compute(patients: &[Patient], today: NaiveDate) -> Self {
        let discharged: Vec<&Patient> = patients
            .iter()
            .filter(|p| p.discharge_date.is_some())
            .collect();

        let average_stay_days = round1(average_by(&discharged, |p| {
            match p.discharge_date {
                Some(discharge) => (discharge - p.admission_date).num_days() as f64,
                None => 0.0,
            }
        }));

        Self {
            total: patients.len() as u64,
            admitted_today: patients
                .iter()
                .filter(|p| p.admission_date == today)
                .count() as u64,
            discharged_today: patients
                .iter()
                .filter(|p| p.discharge_date == Some(today))
                .count() as u64,
            inpatients: patients
                .iter()
                .filter(|p| p.status == PatientStatus::Inpatient)
                .count() as u64,
            average_stay_days,
            by_department: count_by(patients, |p| p.department.clone()),
        }
    }
}

/// Headline numbers for the appointments listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct AppointmentSummary {
    pub total: u64,
    pub by_status: Vec<GroupCount>,
    pub by_type: Vec<GroupCount>,
}

impl AppointmentSummary {
    pub fn compute(appointments: &[Appointment]) -> Self {
        Self {
            total: appointments.len() as u64,
            by_status: count_by(appointments, |a| a.status.as_wire()),
            by_type: count_by(appointments, |a| a.kind.as_wire()),
        }
    }
}

/// Headline numbers for the alert feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct AlertSummary {
    pub total: u64,
    pub by_priority: Vec<GroupCount>,
    pub by_status: Vec<GroupCount>,
}

impl AlertSummary {
    pub fn compute(alerts: &[Alert]) -> Self {
        Self {
            total: alerts.len() as u64,
            by_priority: count_by(alerts, |a| a.priority.as_wire()),
            by_status: count_by(alerts, |a| a.status.as_wire()),
        }
    }
}

/// Occupancy of one department, as a percentage of its total beds.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct DepartmentOccupancy {
    pub id: String,
    pub name: String,
    pub occupancy_percent: f64,
}

/// Aggregate bed and status numbers across all departments.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct DepartmentSummary {
    pub total_beds: u64,
    pub occupied_beds: u64,
    pub available_beds: u64,
    /// Occupied beds as a percentage of all beds, one decimal.
    pub occupancy_rate: f64,
    pub by_status: Vec<GroupCount>,
    pub occupancy: Vec<DepartmentOccupancy>,
}

impl DepartmentSummary {
    pub fn compute(departments: &[Department]) -> Self {
        let total_beds: u64 = departments.iter().map(|d| d.total_beds as u64).sum();
        let occupied_beds: u64 = departments.iter().map(|d| d.occupied_beds as u64).sum();

        Self {
            total_beds,
            occupied_beds,
            available_beds: total_beds.saturating_sub(occupied_beds),
            occupancy_rate: round1(percentage(occupied_beds, total_beds)),
            by_status: count_by(departments, |d| d.status.as_wire()),
            occupancy: departments
                .iter()
                .map(|d| DepartmentOccupancy {
                    id: d.id.to_string(),
                    name: d.name.clone(),
                    occupancy_percent: round1(percentage(
                        d.occupied_beds as u64,
                        d.total_beds as u64,
                    )),
                })
                .collect(),
        }
    }
}

/// One day in the admission trend chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub admissions: u64,
}

/// Daily admission counts over the trailing `days` window ending at
/// `today`, inclusive. Days without admissions appear with a zero count so
/// the chart axis stays continuous.
pub fn admission_trend(patients: &[Patient], today: NaiveDate, days: u64) -> Vec<TrendPoint> {
    let mut trend = Vec::with_capacity(days as usize);
    let Some(start) = today.checked_sub_days(Days::new(days.saturating_sub(1))) else {
        return trend;
    };

    let mut date = start;
    while date <= today {
        trend.push(TrendPoint {
            date,
            admissions: patients
                .iter()
                .filter(|p| p.admission_date == date)
                .count() as u64,
        });
        let Some(next) = date.checked_add_days(Days::new(1)) else {
            break;
        };
        date = next;
    }
    trend
}

/// Alerts ordered critical-first for the feed.
///
/// The sort is stable: alerts sharing a priority keep their original
/// relative order.
pub fn sorted_by_priority(alerts: &[Alert]) -> Vec<&Alert> {
    let mut ordered: Vec<&Alert> = alerts.iter().collect();
    ordered.sort_by_key(|a| a.priority.rank());
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{AlertCategory, AlertPriority, AlertStatus, DepartmentStatus};
    use chrono::{TimeZone, Utc};
    use mediboard_types::RecordId;

    fn patient(
        id: &str,
        department: &str,
        status: PatientStatus,
        admitted: &str,
        discharged: Option<&str>,
    ) -> Patient {
        Patient {
            id: RecordId::new(id).unwrap(),
            name: format!("Patient {id}"),
            age: 50,
            gender: "female".into(),
            department: department.into(),
            condition: "Stable".into(),
            assigned_doctor: "Dr. Sarah Chen".into(),
            admission_date: admitted.parse().unwrap(),
            discharge_date: discharged.map(|d| d.parse().unwrap()),
            status,
            vitals: None,
            medications: Vec::new(),
            allergies: Vec::new(),
            discharge_summary: None,
        }
    }

    fn alert(id: &str, priority: AlertPriority) -> Alert {
        Alert {
            id: RecordId::new(id).unwrap(),
            message: format!("alert {id}"),
            priority,
            category: AlertCategory::System,
            timestamp: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
            affected_entity: "Main Server".into(),
            details: None,
            status: AlertStatus::Active,
            assigned_to: None,
            department: None,
        }
    }

    #[test]
    fn test_patient_summary_counts_and_average_stay() {
        let today: NaiveDate = "2025-04-29".parse().unwrap();
        let patients = vec![
            patient("PT001", "Cardiology", PatientStatus::Inpatient, "2025-04-29", None),
            patient(
                "PT002",
                "Pediatrics",
                PatientStatus::Discharged,
                "2025-04-26",
                Some("2025-04-29"),
            ),
            patient(
                "PT003",
                "Cardiology",
                PatientStatus::Discharged,
                "2025-04-23",
                Some("2025-04-27"),
            ),
            patient("PT004", "Neurology", PatientStatus::Inpatient, "2025-04-25", None),
        ];

        let summary = PatientSummary::compute(&patients, today);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.admitted_today, 1);
        assert_eq!(summary.discharged_today, 1);
        assert_eq!(summary.inpatients, 2);
        // Stays of 3 and 4 days average to 3.5.
        assert_eq!(summary.average_stay_days, 3.5);
        let cardiology = summary
            .by_department
            .iter()
            .find(|g| g.key == "Cardiology")
            .unwrap();
        assert_eq!(cardiology.count, 2);
    }

    #[test]
    fn test_patient_summary_over_empty_set_is_all_zero() {
        let summary = PatientSummary::compute(&[], "2025-04-29".parse().unwrap());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_stay_days, 0.0);
        assert!(summary.average_stay_days.is_finite());
        assert!(summary.by_department.is_empty());
    }

    #[test]
    fn test_department_summary_occupancy_rate() {
        let dept = |id: &str, total: u32, occupied: u32, status: DepartmentStatus| Department {
            id: RecordId::new(id).unwrap(),
            name: id.to_uppercase(),
            head: "Dr. Michael Brown".into(),
            head_title: "Specialist".into(),
            total_beds: total,
            occupied_beds: occupied,
            active_staff: 20,
            patient_count: occupied,
            status,
            description: String::new(),
        };
        let departments = vec![
            dept("emergency", 20, 14, DepartmentStatus::Normal),
            dept("icu", 15, 14, DepartmentStatus::Critical),
            dept("general", 40, 28, DepartmentStatus::Busy),
        ];

        let summary = DepartmentSummary::compute(&departments);
        assert_eq!(summary.total_beds, 75);
        assert_eq!(summary.occupied_beds, 56);
        assert_eq!(summary.available_beds, 19);
        assert_eq!(summary.occupancy_rate, 74.7);
        let icu = summary.occupancy.iter().find(|o| o.id == "icu").unwrap();
        assert_eq!(icu.occupancy_percent, 93.3);
    }

    #[test]
    fn test_department_summary_empty_set_has_zero_rate() {
        let summary = DepartmentSummary::compute(&[]);
        assert_eq!(summary.occupancy_rate, 0.0);
        assert!(summary.occupancy_rate.is_finite());
    }

    #[test]
    fn test_admission_trend_has_one_bucket_per_day() {
        let today: NaiveDate = "2025-04-29".parse().unwrap();
        let patients = vec![
            patient("PT001", "Cardiology", PatientStatus::Inpatient, "2025-04-29", None),
            patient("PT002", "Cardiology", PatientStatus::Inpatient, "2025-04-29", None),
            patient("PT003", "Neurology", PatientStatus::Inpatient, "2025-04-27", None),
        ];

        let trend = admission_trend(&patients, today, 14);
        assert_eq!(trend.len(), 14);
        assert_eq!(trend.first().unwrap().date, "2025-04-16".parse().unwrap());
        assert_eq!(trend.last().unwrap().date, today);
        assert_eq!(trend.last().unwrap().admissions, 2);
        let quiet_days = trend.iter().filter(|p| p.admissions == 0).count();
        assert_eq!(quiet_days, 12);
    }

    #[test]
    fn test_priority_sort_is_stable_within_equal_priorities() {
        let alerts = vec![
            alert("AL001", AlertPriority::Info),
            alert("AL002", AlertPriority::Critical),
            alert("AL003", AlertPriority::Warning),
            alert("AL004", AlertPriority::Critical),
            alert("AL005", AlertPriority::Info),
        ];

        let ordered = sorted_by_priority(&alerts);
        let ids: Vec<&str> = ordered.iter().map(|a| a.id.as_str()).collect();
        // Criticals first in original order, then warnings, then infos in
        // original order.
        assert_eq!(ids, vec!["AL002", "AL004", "AL003", "AL001", "AL005"]);
    }

    #[test]
    fn test_alert_summary_counts_by_priority() {
        let alerts = vec![
            alert("AL001", AlertPriority::Critical),
            alert("AL002", AlertPriority::Warning),
            alert("AL003", AlertPriority::Critical),
        ];
        let summary = AlertSummary::compute(&alerts);
        assert_eq!(summary.total, 3);
        let critical = summary
            .by_priority
            .iter()
            .find(|g| g.key == "critical")
            .unwrap();
        assert_eq!(critical.count, 2);
    }
}
