//! In-memory sample datasets.
//!
//! All data in this module is hardcoded and fictional, standing in for a
//! real admission/EHR backend during development and tests. Record
//! timestamps and admission dates are generated relative to the current
//! day so the "today" summary cards stay meaningful.
//!
//! Patients, staff, and activity entries exist in both languages;
//! appointments, alerts, departments, and monitoring samples are a single
//! locale-independent set.

mod activity;
mod alerts;
mod appointments;
mod departments;
mod monitoring;
mod patients;
mod staff;

use mediboard_locale::Locale;

use crate::provider::DataProvider;
use crate::records::{
    ActivityEntry, Alert, Appointment, Department, MonitoredPatient, Patient, StaffMember,
};
use crate::DashboardResult;

/// [`DataProvider`] backed by the fixtures in this module.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleProvider;

impl SampleProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for SampleProvider {
    fn patients(&self, locale: Locale) -> DashboardResult<Vec<Patient>> {
        patients::patients(locale)
    }

    fn staff(&self, locale: Locale) -> DashboardResult<Vec<StaffMember>> {
        staff::staff(locale)
    }

    fn appointments(&self) -> DashboardResult<Vec<Appointment>> {
        appointments::appointments()
    }

    fn alerts(&self) -> DashboardResult<Vec<Alert>> {
        alerts::alerts()
    }

    fn departments(&self) -> DashboardResult<Vec<Department>> {
        departments::departments()
    }

    fn monitored_patients(&self) -> DashboardResult<Vec<MonitoredPatient>> {
        monitoring::monitored_patients()
    }

    fn activity(&self, locale: Locale) -> DashboardResult<Vec<ActivityEntry>> {
        activity::activity(locale)
    }
}
