use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};

use mediboard_core::summary::{
    admission_trend, sorted_by_priority, AlertSummary, AppointmentSummary, DepartmentSummary,
    PatientSummary,
};
use mediboard_core::{
    filter, DashboardError, DataProvider, FacetSelection, FilterCriteria, Route, SampleProvider,
};
use mediboard_locale::{dictionary, Locale, LocaleStore};

const DEFAULT_LOCALE_PREFS: &str = "data/locale.pref";

#[derive(Parser)]
#[command(name = "mediboard")]
#[command(about = "Mediboard hospital dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List patients
    Patients {
        /// Substring search over name, id and assigned doctor
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        department: Option<String>,
        /// inpatient, outpatient or discharged
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        gender: Option<String>,
    },
    /// List staff members
    Staff {
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        department: Option<String>,
        /// on-duty, off-duty, in-surgery or on-leave
        #[arg(long)]
        status: Option<String>,
    },
    /// List appointments
    Appointments {
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        department: Option<String>,
        /// scheduled, completed, cancelled or no-show
        #[arg(long)]
        status: Option<String>,
        /// Restrict to one day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the alert feed, highest priority first
    Alerts {
        /// critical, warning or info
        #[arg(long)]
        priority: Option<String>,
        /// active, acknowledged or resolved
        #[arg(long)]
        status: Option<String>,
    },
    /// List departments with bed occupancy
    Departments,
    /// Print the summary numbers every dashboard card derives from
    Stats,
    /// Show or switch the active locale
    Locale {
        /// New locale tag (en or ar); omit to print the current one
        locale: Option<String>,
    },
    /// List the navigable pages
    Routes,
}

fn locale_store() -> Result<LocaleStore, Box<dyn std::error::Error>> {
    let prefs = std::env::var("MEDIBOARD_LOCALE_PREFS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| DEFAULT_LOCALE_PREFS.into());
    Ok(LocaleStore::open(prefs)?)
}

/// Folds optional `--flag value` filters into criteria; `all` means no
/// constraint, like the dashboard's dropdowns.
fn criteria_of(q: Option<String>, facets: &[(&str, &Option<String>)]) -> FilterCriteria {
    let mut criteria = FilterCriteria::new().with_search(q.unwrap_or_default());
    for (dimension, value) in facets {
        if let Some(v) = value {
            match FacetSelection::from_wire(v) {
                FacetSelection::All => {}
                selection => criteria = criteria.with_facet(*dimension, selection),
            }
        }
    }
    criteria
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let provider = SampleProvider::new();

    match cli.command {
        Some(Commands::Patients {
            q,
            department,
            status,
            gender,
        }) => {
            let locale = locale_store()?.state().locale;
            let records = provider.patients(locale)?;
            let criteria = criteria_of(
                q,
                &[
                    ("department", &department),
                    ("status", &status),
                    ("gender", &gender),
                ],
            );
            let visible = filter(&records, &criteria)?;
            if visible.is_empty() {
                println!("No patients found.");
            }
            for p in visible {
                println!(
                    "{}  {}  {}  {}  admitted {}  [{}]",
                    p.id,
                    p.name,
                    p.department,
                    p.assigned_doctor,
                    p.admission_date,
                    p.status.as_wire()
                );
            }
        }
        Some(Commands::Staff {
            q,
            department,
            status,
        }) => {
            let locale = locale_store()?.state().locale;
            let records = provider.staff(locale)?;
            let criteria = criteria_of(q, &[("department", &department), ("status", &status)]);
            let visible = filter(&records, &criteria)?;
            if visible.is_empty() {
                println!("No staff found.");
            }
            for s in visible {
                println!(
                    "{}  {}  {}  {}  [{}]",
                    s.id,
                    s.name,
                    s.role,
                    s.department,
                    s.status.as_wire()
                );
            }
        }
        Some(Commands::Appointments {
            q,
            department,
            status,
            date,
        }) => {
            let records = provider.appointments()?;
            let mut criteria =
                criteria_of(q, &[("department", &department), ("status", &status)]);
            if let Some(raw) = &date {
                if raw != "all" {
                    // Filter on the canonical ISO form so unpadded input
                    // still matches.
                    let parsed: chrono::NaiveDate = raw.parse().map_err(|_| {
                        DashboardError::InvalidInput(format!("invalid date: {raw}"))
                    })?;
                    criteria =
                        criteria.with_facet("date", FacetSelection::Value(parsed.to_string()));
                }
            }
            let visible = filter(&records, &criteria)?;
            if visible.is_empty() {
                println!("No appointments found.");
            }
            for a in visible {
                println!(
                    "{}  {} {}  {} with {}  {}  [{}]",
                    a.id,
                    a.date,
                    a.time,
                    a.patient_name,
                    a.doctor_name,
                    a.kind.as_wire(),
                    a.status.as_wire()
                );
            }
        }
        Some(Commands::Alerts { priority, status }) => {
            let records = provider.alerts()?;
            let criteria = criteria_of(None, &[("priority", &priority), ("status", &status)]);
            let visible: Vec<_> = filter(&records, &criteria)?.into_iter().cloned().collect();
            let ordered = sorted_by_priority(&visible);
            if ordered.is_empty() {
                println!("No alerts found.");
            }
            for a in ordered {
                println!(
                    "{}  [{}] {}  ({}, {})",
                    a.id,
                    a.priority.as_wire(),
                    a.message,
                    a.category.as_wire(),
                    a.status.as_wire()
                );
            }
        }
        Some(Commands::Departments) => {
            let records = provider.departments()?;
            for d in &records {
                println!(
                    "{}  {}  beds {}/{}  staff {}  [{}]",
                    d.id,
                    d.name,
                    d.occupied_beds,
                    d.total_beds,
                    d.active_staff,
                    d.status.as_wire()
                );
            }
            let summary = DepartmentSummary::compute(&records);
            println!(
                "Overall occupancy: {}% ({}/{} beds)",
                summary.occupancy_rate, summary.occupied_beds, summary.total_beds
            );
        }
        Some(Commands::Stats) => {
            let locale = locale_store()?.state().locale;
            let today = Utc::now().date_naive();
            let patients = provider.patients(locale)?;
            let appointments = provider.appointments()?;
            let departments = provider.departments()?;
            let alerts = provider.alerts()?;

            let ps = PatientSummary::compute(&patients, today);
            println!(
                "Patients: {} total, {} inpatients, {} admitted today, {} discharged today, avg stay {} days",
                ps.total, ps.inpatients, ps.admitted_today, ps.discharged_today, ps.average_stay_days
            );

            let aps = AppointmentSummary::compute(&appointments);
            println!("Appointments: {} total", aps.total);
            for g in &aps.by_status {
                println!("  {}: {}", g.key, g.count);
            }

            let ds = DepartmentSummary::compute(&departments);
            println!(
                "Departments: {}% occupancy ({}/{} beds)",
                ds.occupancy_rate, ds.occupied_beds, ds.total_beds
            );

            let als = AlertSummary::compute(&alerts);
            println!("Alerts: {} total", als.total);
            for g in &als.by_priority {
                println!("  {}: {}", g.key, g.count);
            }

            println!("Admissions, last 14 days:");
            for point in admission_trend(&patients, today, 14) {
                println!("  {}  {}", point.date, point.admissions);
            }
        }
        Some(Commands::Locale { locale }) => {
            let store = locale_store()?;
            match locale {
                Some(tag) => match Locale::from_wire(&tag) {
                    Some(locale) => {
                        let state = store.set_locale(locale)?;
                        println!(
                            "Locale set to {} (direction {})",
                            state.locale.as_wire(),
                            state.direction.as_wire()
                        );
                    }
                    None => eprintln!("Unknown locale: {} (expected en or ar)", tag),
                },
                None => {
                    let state = store.state();
                    println!(
                        "Locale: {} (direction {})",
                        state.locale.as_wire(),
                        state.direction.as_wire()
                    );
                }
            }
        }
        Some(Commands::Routes) => {
            let locale = locale_store()?.state().locale;
            for route in Route::ALL {
                println!(
                    "{:<14} {}",
                    route.path(),
                    dictionary::text(locale, route.title_key())
                );
            }
        }
        None => {
            println!("Use 'mediboard --help' for commands");
        }
    }

    Ok(())
}
