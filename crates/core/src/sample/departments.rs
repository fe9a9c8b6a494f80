use mediboard_types::RecordId;

use crate::records::{Department, DepartmentStatus};
use crate::DashboardResult;

#[allow(clippy::too_many_arguments)]
fn department(
    id: &str,
    name: &str,
    head: &str,
    head_title: &str,
    total_beds: u32,
    occupied_beds: u32,
    active_staff: u32,
    patient_count: u32,
    status: DepartmentStatus,
    description: &str,
) -> DashboardResult<Department> {
    Ok(Department {
        id: RecordId::new(id)?,
        name: name.into(),
        head: head.into(),
        head_title: head_title.into(),
        total_beds,
        occupied_beds,
        active_staff,
        patient_count,
        status,
        description: description.into(),
    })
}

pub fn departments() -> DashboardResult<Vec<Department>> {
    Ok(vec![
        department(
            "DP001",
            "Cardiology",
            "Dr. Sarah Chen",
            "Head of Cardiology",
            40,
            32,
            18,
            35,
            DepartmentStatus::Busy,
            "Diagnosis and treatment of cardiovascular conditions.",
        )?,
        department(
            "DP002",
            "Neurology",
            "Dr. James Wilson",
            "Head of Neurology",
            30,
            21,
            14,
            24,
            DepartmentStatus::Normal,
            "Care for disorders of the brain and nervous system.",
        )?,
        department(
            "DP003",
            "ICU",
            "Nurse Patricia Lee",
            "ICU Charge Nurse",
            20,
            19,
            22,
            19,
            DepartmentStatus::Critical,
            "Intensive care for critically ill patients.",
        )?,
        department(
            "DP004",
            "Pediatrics",
            "Dr. Lisa Rodriguez",
            "Head of Pediatrics",
            35,
            18,
            16,
            22,
            DepartmentStatus::Normal,
            "Medical care for infants, children and adolescents.",
        )?,
        department(
            "DP005",
            "Emergency",
            "Dr. Robert Davis",
            "ED Director",
            25,
            23,
            20,
            31,
            DepartmentStatus::Critical,
            "Round-the-clock emergency and trauma care.",
        )?,
        department(
            "DP006",
            "Pulmonology",
            "Dr. Michael Brown",
            "Head of Pulmonology",
            28,
            15,
            11,
            17,
            DepartmentStatus::Normal,
            "Treatment of respiratory and lung conditions.",
        )?,
    ])
}
