//! Fixed navigation surface.
//!
//! The dashboard exposes a static set of named pages; there are no route
//! parameters. An unmatched path is the user-facing not-found case, which
//! callers render explicitly rather than treating as a failure.

use serde::Serialize;

/// One navigable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dashboard,
    Patients,
    Staff,
    Appointments,
    Departments,
    Monitoring,
    Alerts,
    Reports,
    Activity,
}

impl Route {
    /// Every route, in sidebar order.
    pub const ALL: [Route; 9] = [
        Route::Dashboard,
        Route::Patients,
        Route::Staff,
        Route::Appointments,
        Route::Departments,
        Route::Monitoring,
        Route::Alerts,
        Route::Reports,
        Route::Activity,
    ];

    /// URL path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Patients => "/patients",
            Route::Staff => "/staff",
            Route::Appointments => "/appointments",
            Route::Departments => "/departments",
            Route::Monitoring => "/monitoring",
            Route::Alerts => "/alerts",
            Route::Reports => "/reports",
            Route::Activity => "/activity",
        }
    }

    /// Resolve a path to its page, or `None` for the not-found case.
    pub fn parse(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }

    /// Dictionary key for the localized page title.
    pub fn title_key(self) -> &'static str {
        match self {
            Route::Dashboard => "page.dashboard",
            Route::Patients => "page.patients",
            Route::Staff => "page.staff",
            Route::Appointments => "page.appointments",
            Route::Departments => "page.departments",
            Route::Monitoring => "page.monitoring",
            Route::Alerts => "page.alerts",
            Route::Reports => "page.reports",
            Route::Activity => "page.activity",
        }
    }
}
