//! Domain records shown in the dashboard listings.
//!
//! Records are immutable-in-practice value objects handed over by a
//! [`DataProvider`](crate::provider::DataProvider). Identifiers are unique
//! within one listing's source array; no cross-entity referential
//! integrity is enforced — this is a display layer, not a store. Optional
//! sub-records (vitals, medications, shifts) are tolerated as absent.
//!
//! Each conceptual status field has exactly one canonical enumeration with
//! a fixed wire-string mapping; the drifted per-copy variants of the old
//! dashboard are gone.

mod activity;
mod alert;
mod appointment;
mod department;
mod monitoring;
mod patient;
mod staff;

pub use activity::ActivityEntry;
pub use alert::{Alert, AlertCategory, AlertPriority, AlertStatus};
pub use appointment::{Appointment, AppointmentStatus, AppointmentType};
pub use department::{Department, DepartmentStatus};
pub use monitoring::{MonitoredPatient, VitalsSample};
pub use patient::{Medication, Patient, PatientStatus, Vitals};
pub use staff::{Shift, StaffMember, StaffStatus};
