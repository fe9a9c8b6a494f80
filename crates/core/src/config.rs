//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! services. Request handlers never read process-wide environment
//! variables; that keeps behaviour consistent across multi-threaded
//! runtimes and test harnesses.

use std::path::{Path, PathBuf};

use crate::{DashboardError, DashboardResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    locale_prefs_path: PathBuf,
    refresh_interval_secs: u64,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `locale_prefs_path` is where the locale preference is persisted;
    /// `refresh_interval_secs` is the auto-refresh tick period and must be
    /// non-zero.
    pub fn new(
        locale_prefs_path: PathBuf,
        refresh_interval_secs: u64,
    ) -> DashboardResult<Self> {
        if refresh_interval_secs == 0 {
            return Err(DashboardError::InvalidInput(
                "refresh interval must be at least one second".into(),
            ));
        }

        Ok(Self {
            locale_prefs_path,
            refresh_interval_secs,
        })
    }

    pub fn locale_prefs_path(&self) -> &Path {
        &self.locale_prefs_path
    }

    pub fn refresh_interval_secs(&self) -> u64 {
        self.refresh_interval_secs
    }
}
