//! Keyed translation table.
//!
//! Every user-facing string lives here once, keyed, with its English and
//! Arabic renderings side by side. Consumers look strings up with
//! [`text`]; inline per-string conditionals on the locale are not used
//! anywhere in the workspace, so a missing translation shows up in this
//! one table (and in the logs) instead of drifting per call site.

use crate::Locale;

struct Entry {
    key: &'static str,
    en: &'static str,
    ar: &'static str,
}

const ENTRIES: &[Entry] = &[
    // Page titles
    Entry { key: "page.dashboard", en: "Dashboard", ar: "لوحة التحكم" },
    Entry { key: "page.patients", en: "Patients Management", ar: "إدارة المرضى" },
    Entry { key: "page.staff", en: "Staff Management", ar: "إدارة الموظفين" },
    Entry { key: "page.appointments", en: "Appointments", ar: "المواعيد" },
    Entry { key: "page.departments", en: "Departments", ar: "الأقسام" },
    Entry { key: "page.monitoring", en: "System Monitoring", ar: "مراقبة النظام" },
    Entry { key: "page.alerts", en: "System Alerts", ar: "تنبيهات النظام" },
    Entry { key: "page.reports", en: "Reports & Analytics", ar: "التقارير والتحليلات" },
    Entry { key: "page.activity", en: "Activity Log", ar: "سجل النشاط" },
    Entry { key: "page.not_found", en: "Page Not Found", ar: "الصفحة غير موجودة" },
    // Patient statuses
    Entry { key: "status.patient.inpatient", en: "Inpatient", ar: "مريض داخلي" },
    Entry { key: "status.patient.outpatient", en: "Outpatient", ar: "مريض خارجي" },
    Entry { key: "status.patient.discharged", en: "Discharged", ar: "خرج من المستشفى" },
    // Staff statuses
    Entry { key: "status.staff.on-duty", en: "On Duty", ar: "في الخدمة" },
    Entry { key: "status.staff.off-duty", en: "Off Duty", ar: "خارج الخدمة" },
    Entry { key: "status.staff.in-surgery", en: "In Surgery", ar: "في العمليات" },
    Entry { key: "status.staff.on-leave", en: "On Leave", ar: "في إجازة" },
    // Alert priorities
    Entry { key: "priority.critical", en: "Critical", ar: "حرج" },
    Entry { key: "priority.warning", en: "Warning", ar: "تحذير" },
    Entry { key: "priority.info", en: "Info", ar: "معلومات" },
    // Department statuses
    Entry { key: "status.department.normal", en: "Normal", ar: "طبيعي" },
    Entry { key: "status.department.busy", en: "Busy", ar: "مشغول" },
    Entry { key: "status.department.critical", en: "Critical", ar: "حرج" },
    // Summary card labels
    Entry { key: "stats.total_patients", en: "Total Patients", ar: "إجمالي المرضى" },
    Entry { key: "stats.admitted_today", en: "Admitted Today", ar: "تم قبولهم اليوم" },
    Entry { key: "stats.discharged_today", en: "Discharged Today", ar: "خرجوا اليوم" },
    Entry { key: "stats.inpatients", en: "Inpatients", ar: "المرضى الداخليون" },
    Entry { key: "stats.average_stay", en: "Average Stay (days)", ar: "متوسط الإقامة (أيام)" },
    Entry { key: "stats.occupancy_rate", en: "Occupancy Rate", ar: "معدل الإشغال" },
    Entry { key: "stats.available_beds", en: "Available Beds", ar: "الأسرة المتاحة" },
    Entry { key: "stats.total_appointments", en: "Total Appointments", ar: "إجمالي المواعيد" },
];

/// Look up the translation of `key` for `locale`.
///
/// Unknown keys are echoed back unchanged (and logged once per call) so a
/// missing translation degrades to a visible key rather than a crash.
pub fn text<'a>(locale: Locale, key: &'a str) -> &'a str {
    match ENTRIES.iter().find(|entry| entry.key == key) {
        Some(entry) => match locale {
            Locale::En => entry.en,
            Locale::Ar => entry.ar,
        },
        None => {
            tracing::warn!("missing dictionary key: {}", key);
            key
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_localizes_known_keys() {
        assert_eq!(text(Locale::En, "page.patients"), "Patients Management");
        assert_eq!(text(Locale::Ar, "page.patients"), "إدارة المرضى");
    }

    #[test]
    fn test_text_echoes_missing_keys() {
        assert_eq!(text(Locale::En, "page.pharmacy"), "page.pharmacy");
        assert_eq!(text(Locale::Ar, "page.pharmacy"), "page.pharmacy");
    }

    #[test]
    fn test_every_entry_has_both_translations() {
        for entry in ENTRIES {
            assert!(!entry.en.trim().is_empty(), "empty en for {}", entry.key);
            assert!(!entry.ar.trim().is_empty(), "empty ar for {}", entry.key);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, entry) in ENTRIES.iter().enumerate() {
            assert!(
                !ENTRIES[i + 1..].iter().any(|other| other.key == entry.key),
                "duplicate key {}",
                entry.key
            );
        }
    }
}
