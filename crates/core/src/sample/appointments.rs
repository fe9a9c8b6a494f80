use chrono::{Days, NaiveDate, Utc};

use mediboard_types::RecordId;

use crate::records::{Appointment, AppointmentStatus, AppointmentType};
use crate::DashboardResult;

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    patient_name: &str,
    patient_id: &str,
    doctor_name: &str,
    doctor_id: &str,
    department: &str,
    date: NaiveDate,
    time: &str,
    duration_minutes: u32,
    status: AppointmentStatus,
    kind: AppointmentType,
    notes: Option<&str>,
) -> DashboardResult<Appointment> {
    Ok(Appointment {
        id: RecordId::new(id)?,
        patient_name: patient_name.into(),
        patient_id: RecordId::new(patient_id)?,
        doctor_name: doctor_name.into(),
        doctor_id: RecordId::new(doctor_id)?,
        department: department.into(),
        date,
        time: time.into(),
        duration_minutes,
        status,
        kind,
        notes: notes.map(Into::into),
    })
}

pub fn appointments() -> DashboardResult<Vec<Appointment>> {
    let today = Utc::now().date_naive();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    let day_after = today.checked_add_days(Days::new(2)).unwrap_or(today);

    Ok(vec![
        appointment(
            "AP001",
            "John Smith",
            "PT001",
            "Dr. Sarah Chen",
            "ST001",
            "Cardiology",
            today,
            "09:00",
            30,
            AppointmentStatus::Completed,
            AppointmentType::FollowUp,
            Some("Post-catheterization review."),
        )?,
        appointment(
            "AP002",
            "Mary Johnson",
            "PT002",
            "Dr. Lisa Rodriguez",
            "ST005",
            "Obstetrics",
            today,
            "10:30",
            20,
            AppointmentStatus::Scheduled,
            AppointmentType::Consultation,
            None,
        )?,
        appointment(
            "AP003",
            "Robert Garcia",
            "PT003",
            "Dr. James Wilson",
            "ST002",
            "Neurology",
            today,
            "13:00",
            60,
            AppointmentStatus::Scheduled,
            AppointmentType::Procedure,
            Some("EEG under sedation."),
        )?,
        appointment(
            "AP004",
            "Sarah Miller",
            "PT006",
            "Dr. Sarah Chen",
            "ST001",
            "Cardiology",
            today,
            "15:30",
            30,
            AppointmentStatus::Cancelled,
            AppointmentType::Consultation,
            None,
        )?,
        appointment(
            "AP005",
            "David Williams",
            "PT005",
            "Dr. Michael Brown",
            "ST004",
            "Pulmonology",
            tomorrow,
            "08:30",
            45,
            AppointmentStatus::Scheduled,
            AppointmentType::FollowUp,
            None,
        )?,
        appointment(
            "AP006",
            "Emily Chen",
            "PT004",
            "Dr. Lisa Rodriguez",
            "ST005",
            "Pediatrics",
            tomorrow,
            "11:00",
            20,
            AppointmentStatus::NoShow,
            AppointmentType::FollowUp,
            Some("Family did not attend; reschedule requested."),
        )?,
        appointment(
            "AP007",
            "Thomas Anderson",
            "PT007",
            "Dr. Robert Davis",
            "ST006",
            "General Medicine",
            day_after,
            "09:45",
            30,
            AppointmentStatus::Scheduled,
            AppointmentType::Consultation,
            None,
        )?,
        appointment(
            "AP008",
            "John Smith",
            "PT001",
            "Dr. James Wilson",
            "ST002",
            "Neurology",
            day_after,
            "14:00",
            40,
            AppointmentStatus::Scheduled,
            AppointmentType::Emergency,
            Some("Referred after episode of dizziness."),
        )?,
    ])
}
