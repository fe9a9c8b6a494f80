//! # Mediboard Core
//!
//! Core data layer for the Mediboard hospital-administration dashboard.
//!
//! This crate contains pure, synchronous operations over in-memory record
//! sets:
//! - Domain records (patients, staff, appointments, alerts, departments,
//!   monitoring samples, activity entries) with canonical status enums
//! - The generic filter engine (free-text search + categorical facets)
//! - Aggregate helpers and per-listing derived summaries
//! - The injected data-provider seam and the in-memory sample provider
//! - The fixed navigation surface
//!
//! **No API concerns**: HTTP serving, OpenAPI documentation, and timers
//! belong in `api-rest`; terminal output belongs in `mediboard-cli`.

pub mod config;
pub mod error;
pub mod filter;
pub mod provider;
pub mod records;
pub mod routes;
pub mod sample;
pub mod stats;
pub mod summary;

pub use config::CoreConfig;
pub use error::{DashboardError, DashboardResult};
pub use filter::{filter, FacetSelection, FilterCriteria, Filterable};
pub use provider::DataProvider;
pub use routes::Route;
pub use sample::SampleProvider;
