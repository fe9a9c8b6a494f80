//! Injected data-provider seam.
//!
//! The filter/derive core never knows where records come from. A real
//! deployment would back this trait with an EHR or admission system; the
//! workspace ships [`SampleProvider`](crate::sample::SampleProvider), an
//! in-memory stand-in, so every consumer can be tested against fixtures.

use mediboard_locale::Locale;

use crate::records::{
    ActivityEntry, Alert, Appointment, Department, MonitoredPatient, Patient, StaffMember,
};
use crate::DashboardResult;

/// Source of the record sets shown by the dashboard.
///
/// Patient, staff, and activity text is produced per locale (the upstream
/// source mirrors names and labels into both languages); appointments,
/// alerts, departments, and monitoring samples are locale-independent.
pub trait DataProvider: Send + Sync {
    fn patients(&self, locale: Locale) -> DashboardResult<Vec<Patient>>;
    fn staff(&self, locale: Locale) -> DashboardResult<Vec<StaffMember>>;
    fn appointments(&self) -> DashboardResult<Vec<Appointment>>;
    fn alerts(&self) -> DashboardResult<Vec<Alert>>;
    fn departments(&self) -> DashboardResult<Vec<Department>>;
    fn monitored_patients(&self) -> DashboardResult<Vec<MonitoredPatient>>;
    fn activity(&self, locale: Locale) -> DashboardResult<Vec<ActivityEntry>>;
}
