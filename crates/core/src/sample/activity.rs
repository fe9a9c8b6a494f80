use chrono::{DateTime, Duration, Utc};

use mediboard_types::RecordId;

use crate::records::ActivityEntry;
use crate::DashboardResult;
use mediboard_locale::Locale;

fn entry(
    now: DateTime<Utc>,
    id: &str,
    user: &str,
    action: &str,
    module: &str,
    minutes_ago: i64,
) -> DashboardResult<ActivityEntry> {
    Ok(ActivityEntry {
        id: RecordId::new(id)?,
        user: user.into(),
        action: action.into(),
        module: module.into(),
        timestamp: now - Duration::minutes(minutes_ago),
    })
}

pub fn activity(locale: Locale) -> DashboardResult<Vec<ActivityEntry>> {
    let now = Utc::now();
    match locale {
        Locale::En => english(now),
        Locale::Ar => arabic(now),
    }
}

fn english(now: DateTime<Utc>) -> DashboardResult<Vec<ActivityEntry>> {
    Ok(vec![
        entry(now, "AC001", "Dr. Sarah Chen", "Updated vitals for patient PT001", "Patients", 6)?,
        entry(now, "AC002", "Nurse Patricia Lee", "Acknowledged ICU code blue alert", "Alerts", 11)?,
        entry(now, "AC003", "Admin Desk", "Scheduled appointment AP007", "Appointments", 24)?,
        entry(now, "AC004", "Dr. Lisa Rodriguez", "Completed discharge for patient PT004", "Patients", 41)?,
        entry(now, "AC005", "Dr. James Wilson", "Ordered EEG for patient PT003", "Monitoring", 57)?,
        entry(now, "AC006", "Pharmacy", "Flagged low insulin glargine stock", "Alerts", 96)?,
        entry(now, "AC007", "Dr. Michael Brown", "Reviewed pulmonology bed occupancy", "Departments", 120)?,
        entry(now, "AC008", "Admin Desk", "Cancelled appointment AP004", "Appointments", 141)?,
        entry(now, "AC009", "Dr. Robert Davis", "Published weekly staffing report", "Reports", 190)?,
        entry(now, "AC010", "System", "Completed nightly data backup", "System", 260)?,
    ])
}

fn arabic(now: DateTime<Utc>) -> DashboardResult<Vec<ActivityEntry>> {
    Ok(vec![
        entry(now, "AC001", "د. فاطمة حسن", "تحديث العلامات الحيوية للمريض PT001", "Patients", 6)?,
        entry(now, "AC002", "الممرضة سارة يوسف", "تأكيد استلام إنذار العناية المركزة", "Alerts", 11)?,
        entry(now, "AC003", "مكتب الاستقبال", "جدولة الموعد AP007", "Appointments", 24)?,
        entry(now, "AC004", "د. سارة أحمد", "إتمام خروج المريضة PT004", "Patients", 41)?,
        entry(now, "AC005", "د. علي محمد", "طلب تخطيط دماغ للمريض PT003", "Monitoring", 57)?,
        entry(now, "AC006", "الصيدلية", "تنبيه انخفاض مخزون الأنسولين", "Alerts", 96)?,
        entry(now, "AC007", "د. مريم الخالد", "مراجعة إشغال أسرة قسم الرئة", "Departments", 120)?,
        entry(now, "AC008", "مكتب الاستقبال", "إلغاء الموعد AP004", "Appointments", 141)?,
        entry(now, "AC009", "د. عبدالله العمري", "نشر تقرير التوظيف الأسبوعي", "Reports", 190)?,
        entry(now, "AC010", "النظام", "اكتمال النسخ الاحتياطي الليلي", "System", 260)?,
    ])
}
