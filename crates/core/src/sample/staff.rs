use mediboard_types::RecordId;

use crate::records::{Shift, StaffMember, StaffStatus};
use crate::DashboardResult;
use mediboard_locale::Locale;

fn member(
    id: &str,
    name: &str,
    role: &str,
    department: &str,
    status: StaffStatus,
    shifts: Vec<Shift>,
) -> DashboardResult<StaffMember> {
    Ok(StaffMember {
        id: RecordId::new(id)?,
        name: name.into(),
        role: role.into(),
        department: department.into(),
        status,
        shifts,
    })
}

fn shift(day: &str, hours: &str) -> Shift {
    Shift {
        day: day.into(),
        hours: hours.into(),
    }
}

pub fn staff(locale: Locale) -> DashboardResult<Vec<StaffMember>> {
    match locale {
        Locale::En => english(),
        Locale::Ar => arabic(),
    }
}

fn english() -> DashboardResult<Vec<StaffMember>> {
    Ok(vec![
        member(
            "ST001",
            "Dr. Sarah Chen",
            "Cardiologist",
            "Cardiology",
            StaffStatus::OnDuty,
            vec![shift("Monday", "08:00-16:00"), shift("Wednesday", "08:00-16:00")],
        )?,
        member(
            "ST002",
            "Dr. James Wilson",
            "Neurologist",
            "Neurology",
            StaffStatus::InSurgery,
            vec![shift("Tuesday", "10:00-18:00"), shift("Thursday", "10:00-18:00")],
        )?,
        member(
            "ST003",
            "Nurse Patricia Lee",
            "Head Nurse",
            "ICU",
            StaffStatus::OnDuty,
            vec![shift("Monday", "06:00-14:00"), shift("Friday", "06:00-14:00")],
        )?,
        member(
            "ST004",
            "Dr. Michael Brown",
            "Pulmonologist",
            "Pulmonology",
            StaffStatus::OffDuty,
            vec![shift("Wednesday", "12:00-20:00")],
        )?,
        member(
            "ST005",
            "Dr. Lisa Rodriguez",
            "Pediatrician",
            "Pediatrics",
            StaffStatus::OnDuty,
            vec![shift("Monday", "09:00-17:00"), shift("Thursday", "09:00-17:00")],
        )?,
        member(
            "ST006",
            "Dr. Robert Davis",
            "General Physician",
            "General Medicine",
            StaffStatus::OnLeave,
            Vec::new(),
        )?,
    ])
}

fn arabic() -> DashboardResult<Vec<StaffMember>> {
    Ok(vec![
        member(
            "ST001",
            "د. فاطمة حسن",
            "استشارية قلب",
            "قسم القلب",
            StaffStatus::OnDuty,
            vec![shift("الاثنين", "08:00-16:00"), shift("الأربعاء", "08:00-16:00")],
        )?,
        member(
            "ST002",
            "د. علي محمد",
            "استشاري أعصاب",
            "قسم الأعصاب",
            StaffStatus::InSurgery,
            vec![shift("الثلاثاء", "10:00-18:00"), shift("الخميس", "10:00-18:00")],
        )?,
        member(
            "ST003",
            "الممرضة سارة يوسف",
            "رئيسة التمريض",
            "العناية المركزة",
            StaffStatus::OnDuty,
            vec![shift("الاثنين", "06:00-14:00"), shift("الجمعة", "06:00-14:00")],
        )?,
        member(
            "ST004",
            "د. مريم الخالد",
            "استشارية صدرية",
            "قسم الرئة",
            StaffStatus::OffDuty,
            vec![shift("الأربعاء", "12:00-20:00")],
        )?,
        member(
            "ST005",
            "د. سارة أحمد",
            "طبيبة أطفال",
            "قسم الأطفال",
            StaffStatus::OnDuty,
            vec![shift("الاثنين", "09:00-17:00"), shift("الخميس", "09:00-17:00")],
        )?,
        member(
            "ST006",
            "د. عبدالله العمري",
            "طبيب عام",
            "قسم الباطنة",
            StaffStatus::OnLeave,
            Vec::new(),
        )?,
    ])
}
