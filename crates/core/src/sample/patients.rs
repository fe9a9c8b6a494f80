use chrono::{Days, NaiveDate, Utc};

use mediboard_types::RecordId;

use crate::records::{Medication, Patient, PatientStatus, Vitals};
use crate::DashboardResult;
use mediboard_locale::Locale;

#[allow(clippy::too_many_arguments)]
fn patient(
    id: &str,
    name: &str,
    age: u32,
    gender: &str,
    department: &str,
    condition: &str,
    doctor: &str,
    admitted: NaiveDate,
    discharged: Option<NaiveDate>,
    status: PatientStatus,
) -> DashboardResult<Patient> {
    Ok(Patient {
        id: RecordId::new(id)?,
        name: name.into(),
        age,
        gender: gender.into(),
        department: department.into(),
        condition: condition.into(),
        assigned_doctor: doctor.into(),
        admission_date: admitted,
        discharge_date: discharged,
        status,
        vitals: None,
        medications: Vec::new(),
        allergies: Vec::new(),
        discharge_summary: None,
    })
}

fn days_ago(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

pub fn patients(locale: Locale) -> DashboardResult<Vec<Patient>> {
    let today = Utc::now().date_naive();
    match locale {
        Locale::En => english(today),
        Locale::Ar => arabic(today),
    }
}

fn english(today: NaiveDate) -> DashboardResult<Vec<Patient>> {
    let mut list = vec![
        Patient {
            vitals: Some(Vitals {
                heart_rate: 78,
                temperature: 98.6,
                spo2: 96,
                blood_pressure: "120/80".into(),
            }),
            medications: vec![
                Medication {
                    name: "Metoprolol".into(),
                    dosage: "50mg".into(),
                    frequency: "Twice daily".into(),
                },
                Medication {
                    name: "Aspirin".into(),
                    dosage: "81mg".into(),
                    frequency: "Once daily".into(),
                },
            ],
            allergies: vec!["Penicillin".into(), "Shellfish".into()],
            ..patient(
                "PT001",
                "John Smith",
                56,
                "male",
                "Cardiology",
                "Stable",
                "Dr. Sarah Chen",
                days_ago(today, 4),
                None,
                PatientStatus::Inpatient,
            )?
        },
        Patient {
            vitals: Some(Vitals {
                heart_rate: 82,
                temperature: 99.1,
                spo2: 98,
                blood_pressure: "110/70".into(),
            }),
            allergies: vec!["Latex".into()],
            ..patient(
                "PT002",
                "Mary Johnson",
                34,
                "female",
                "Obstetrics",
                "Good",
                "Dr. Robert Martinez",
                days_ago(today, 2),
                None,
                PatientStatus::Inpatient,
            )?
        },
        Patient {
            vitals: Some(Vitals {
                heart_rate: 92,
                temperature: 100.2,
                spo2: 94,
                blood_pressure: "145/95".into(),
            }),
            medications: vec![Medication {
                name: "Mannitol".into(),
                dosage: "20%".into(),
                frequency: "Q6h as needed".into(),
            }],
            allergies: vec!["Sulfa drugs".into()],
            ..patient(
                "PT003",
                "Robert Garcia",
                45,
                "male",
                "Neurology",
                "Critical",
                "Dr. James Wilson",
                days_ago(today, 6),
                None,
                PatientStatus::Inpatient,
            )?
        },
        Patient {
            discharge_summary: Some(
                "Discharged in stable condition. Diagnosis: acute bronchiolitis due \
                 to RSV. Continue inhaler as needed and complete course of antibiotics."
                    .into(),
            ),
            ..patient(
                "PT004",
                "Emily Chen",
                8,
                "female",
                "Pediatrics",
                "Stable",
                "Dr. Lisa Rodriguez",
                days_ago(today, 3),
                Some(today),
                PatientStatus::Discharged,
            )?
        },
        patient(
            "PT005",
            "David Williams",
            62,
            "male",
            "Pulmonology",
            "Serious",
            "Dr. Michael Brown",
            days_ago(today, 5),
            None,
            PatientStatus::Inpatient,
        )?,
        patient(
            "PT006",
            "Sarah Miller",
            29,
            "female",
            "Cardiology",
            "Good",
            "Dr. Sarah Chen",
            today,
            None,
            PatientStatus::Outpatient,
        )?,
    ];

    // One older discharge so the average-stay figure reflects more than a
    // single record.
    list.push(patient(
        "PT007",
        "Thomas Anderson",
        51,
        "male",
        "General Medicine",
        "Stable",
        "Dr. Robert Davis",
        days_ago(today, 9),
        Some(days_ago(today, 5)),
        PatientStatus::Discharged,
    )?);

    Ok(list)
}

fn arabic(today: NaiveDate) -> DashboardResult<Vec<Patient>> {
    Ok(vec![
        Patient {
            vitals: Some(Vitals {
                heart_rate: 78,
                temperature: 37.0,
                spo2: 96,
                blood_pressure: "120/80".into(),
            }),
            allergies: vec!["بنسلين".into()],
            ..patient(
                "PT001",
                "أحمد العتيبي",
                56,
                "ذكر",
                "قسم القلب",
                "مستقرة",
                "د. فاطمة حسن",
                days_ago(today, 4),
                None,
                PatientStatus::Inpatient,
            )?
        },
        patient(
            "PT002",
            "نورة القحطاني",
            34,
            "أنثى",
            "قسم الولادة",
            "جيدة",
            "د. أحمد الزهراني",
            days_ago(today, 2),
            None,
            PatientStatus::Inpatient,
        )?,
        Patient {
            vitals: Some(Vitals {
                heart_rate: 105,
                temperature: 38.5,
                spo2: 89,
                blood_pressure: "135/90".into(),
            }),
            allergies: vec!["أسبرين".into()],
            ..patient(
                "PT003",
                "خالد الدوسري",
                45,
                "ذكر",
                "قسم الأعصاب",
                "حرجة",
                "د. علي محمد",
                days_ago(today, 6),
                None,
                PatientStatus::Inpatient,
            )?
        },
        patient(
            "PT004",
            "لمياء السعيد",
            8,
            "أنثى",
            "قسم الأطفال",
            "مستقرة",
            "د. سارة أحمد",
            days_ago(today, 3),
            Some(today),
            PatientStatus::Discharged,
        )?,
        patient(
            "PT005",
            "فهد الشمري",
            62,
            "ذكر",
            "قسم الرئة",
            "خطيرة",
            "د. مريم الخالد",
            days_ago(today, 5),
            None,
            PatientStatus::Inpatient,
        )?,
        patient(
            "PT006",
            "هند المطيري",
            29,
            "أنثى",
            "قسم القلب",
            "جيدة",
            "د. فاطمة حسن",
            today,
            None,
            PatientStatus::Outpatient,
        )?,
        patient(
            "PT007",
            "سعود الغامدي",
            51,
            "ذكر",
            "قسم الباطنة",
            "مستقرة",
            "د. عبدالله العمري",
            days_ago(today, 9),
            Some(days_ago(today, 5)),
            PatientStatus::Discharged,
        )?,
    ])
}
