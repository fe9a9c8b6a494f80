use chrono::{DateTime, Days, Duration, Utc};

use mediboard_types::RecordId;

use crate::records::{MonitoredPatient, VitalsSample};
use crate::DashboardResult;

/// Six readings at hourly spacing, ending roughly now. Each reading drifts
/// from the given baseline so the series is not flat.
fn history(
    now: DateTime<Utc>,
    base_hr: u32,
    base_temp: f64,
    base_spo2: u32,
) -> Vec<VitalsSample> {
    (0..6)
        .map(|i| {
            let step = 5 - i as i64;
            VitalsSample {
                time: now - Duration::hours(step),
                heart_rate: base_hr + i * 2,
                temperature: base_temp + f64::from(i) * 0.1,
                spo2: base_spo2.saturating_sub(i / 2),
            }
        })
        .collect()
}

pub fn monitored_patients() -> DashboardResult<Vec<MonitoredPatient>> {
    let now = Utc::now();
    let today = now.date_naive();
    let admitted = |days: u64| today.checked_sub_days(Days::new(days)).unwrap_or(today);

    Ok(vec![
        MonitoredPatient {
            id: RecordId::new("MP001")?,
            name: "Robert Garcia".into(),
            age: 45,
            admission_date: admitted(6),
            diagnosis: "Traumatic brain injury".into(),
            doctor: "Dr. James Wilson".into(),
            history: history(now, 92, 37.8, 94),
        },
        MonitoredPatient {
            id: RecordId::new("MP002")?,
            name: "Linda Thompson".into(),
            age: 67,
            admission_date: admitted(2),
            diagnosis: "Septic shock".into(),
            doctor: "Dr. Robert Davis".into(),
            history: history(now, 108, 38.9, 91),
        },
        MonitoredPatient {
            id: RecordId::new("MP003")?,
            name: "Carlos Mendez".into(),
            age: 58,
            admission_date: admitted(1),
            diagnosis: "Post-operative cardiac monitoring".into(),
            doctor: "Dr. Sarah Chen".into(),
            history: history(now, 74, 36.9, 97),
        },
    ])
}
