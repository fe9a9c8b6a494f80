//! # API REST
//!
//! REST API for the Mediboard hospital administration dashboard.
//!
//! Handles:
//! - HTTP endpoints with axum (one listing endpoint per dashboard page)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, query validation, CORS)
//!
//! All listing endpoints are read-only views over a [`DataProvider`]; the
//! only mutable pieces of state are the active locale and the auto-refresh
//! timer.

#![warn(rust_2018_idioms)]

mod ticker;

pub use ticker::RefreshTicker;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use mediboard_core::records::{
    ActivityEntry, Alert, AlertCategory, AlertPriority, AlertStatus, Appointment,
    AppointmentStatus, AppointmentType, Department, MonitoredPatient, Patient, PatientStatus,
    StaffMember, StaffStatus,
};
use mediboard_core::summary::{
    admission_trend, sorted_by_priority, AlertSummary, AppointmentSummary, DepartmentSummary,
    PatientSummary, TrendPoint,
};
use mediboard_core::{
    filter, CoreConfig, DashboardError, DataProvider, FacetSelection, FilterCriteria, Route,
    SampleProvider,
};
use mediboard_locale::{dictionary, Locale, LocaleStore};

/// Days of history in the admission trend chart.
const TREND_WINDOW_DAYS: u64 = 14;

const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_LOCALE_PREFS: &str = "data/locale.pref";
const DEFAULT_REFRESH_SECS: u64 = 30;

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request
/// handlers: the resolved configuration, the locale store, the record
/// provider and the auto-refresh ticker.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    locale: Arc<LocaleStore>,
    provider: Arc<dyn DataProvider>,
    ticker: Arc<RefreshTicker>,
}

impl AppState {
    pub fn new(
        cfg: Arc<CoreConfig>,
        locale: Arc<LocaleStore>,
        provider: Arc<dyn DataProvider>,
        ticker: Arc<RefreshTicker>,
    ) -> Self {
        Self {
            cfg,
            locale,
            provider,
            ticker,
        }
    }

    /// Locale every localized listing resolves against.
    fn active_locale(&self) -> Locale {
        self.locale.state().locale
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        get_locale,
        set_locale,
        list_routes,
        list_patients,
        list_staff,
        list_appointments,
        list_departments,
        list_monitoring,
        list_alerts,
        list_activity,
        reports,
        get_refresh,
        set_refresh,
    ),
    components(schemas(
        HealthRes,
        LocaleRes,
        SetLocaleReq,
        RouteInfo,
        RoutesRes,
        PatientsRes,
        StaffRes,
        AppointmentsRes,
        DepartmentsRes,
        MonitoringRes,
        AlertsRes,
        ActivityRes,
        ReportsRes,
        RefreshRes,
        SetRefreshReq,
        ErrorRes,
        NotFoundRes,
    ))
)]
struct ApiDoc;

// ---- wire envelopes ----

#[derive(Serialize, utoipa::ToSchema)]
struct HealthRes {
    ok: bool,
    message: String,
}

/// Active locale with its derived document attributes.
#[derive(Serialize, utoipa::ToSchema)]
struct LocaleRes {
    locale: String,
    lang: String,
    dir: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
struct SetLocaleReq {
    /// Wire tag of the locale to activate ("en" or "ar").
    locale: String,
}

#[derive(Serialize, utoipa::ToSchema)]
struct RouteInfo {
    path: String,
    /// Page title in the active locale.
    title: String,
}

#[derive(Serialize, utoipa::ToSchema)]
struct RoutesRes {
    routes: Vec<RouteInfo>,
}

#[derive(Serialize, utoipa::ToSchema)]
struct PatientsRes {
    patients: Vec<Patient>,
    /// Computed over the full dataset, not the filtered listing.
    summary: PatientSummary,
}

#[derive(Serialize, utoipa::ToSchema)]
struct StaffRes {
    staff: Vec<StaffMember>,
}

#[derive(Serialize, utoipa::ToSchema)]
struct AppointmentsRes {
    appointments: Vec<Appointment>,
    summary: AppointmentSummary,
}

#[derive(Serialize, utoipa::ToSchema)]
struct DepartmentsRes {
    departments: Vec<Department>,
    summary: DepartmentSummary,
}

#[derive(Serialize, utoipa::ToSchema)]
struct MonitoringRes {
    patients: Vec<MonitoredPatient>,
    last_updated: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
struct AlertsRes {
    /// Ordered critical first, then warning, then info; ties keep their
    /// feed order.
    alerts: Vec<Alert>,
    summary: AlertSummary,
}

#[derive(Serialize, utoipa::ToSchema)]
struct ActivityRes {
    entries: Vec<ActivityEntry>,
}

#[derive(Serialize, utoipa::ToSchema)]
struct ReportsRes {
    patients: PatientSummary,
    appointments: AppointmentSummary,
    departments: DepartmentSummary,
    alerts: AlertSummary,
    admission_trend: Vec<TrendPoint>,
}

#[derive(Serialize, utoipa::ToSchema)]
struct RefreshRes {
    enabled: bool,
    interval_secs: u64,
    last_updated: DateTime<Utc>,
}

#[derive(Deserialize, utoipa::ToSchema)]
struct SetRefreshReq {
    enabled: bool,
}

#[derive(Serialize, utoipa::ToSchema)]
struct ErrorRes {
    error: String,
}

/// Body of the navigation fallback.
#[derive(Serialize, utoipa::ToSchema)]
struct NotFoundRes {
    error: String,
    path: String,
}

type ApiError = (StatusCode, Json<ErrorRes>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorRes {
            error: message.into(),
        }),
    )
}

fn internal(err: DashboardError) -> ApiError {
    tracing::error!("dashboard error: {:?}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorRes {
            error: "Internal error".into(),
        }),
    )
}

// ---- query parameters ----

/// Validates an enum-valued query parameter. Absent values and the `all`
/// sentinel place no constraint; anything else must be a known wire tag.
fn enum_facet(
    param: &str,
    value: Option<&str>,
    is_known: impl Fn(&str) -> bool,
) -> Result<Option<FacetSelection>, ApiError> {
    match value {
        None => Ok(None),
        Some(v) => match FacetSelection::from_wire(v) {
            FacetSelection::All => Ok(None),
            FacetSelection::Value(v) if is_known(&v) => Ok(Some(FacetSelection::Value(v))),
            FacetSelection::Value(v) => {
                Err(bad_request(format!("unknown {param} value: {v}")))
            }
        },
    }
}

/// Free-text facets (departments, doctors) accept any value; only the
/// `all` sentinel and absence are unconstrained.
fn text_facet(value: Option<&str>) -> Option<FacetSelection> {
    match value {
        None => None,
        Some(v) => match FacetSelection::from_wire(v) {
            FacetSelection::All => None,
            selection => Some(selection),
        },
    }
}

#[derive(Deserialize, utoipa::IntoParams)]
struct PatientsQuery {
    /// Case-insensitive substring over name, id and assigned doctor.
    q: Option<String>,
    department: Option<String>,
    status: Option<String>,
    gender: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
struct StaffQuery {
    q: Option<String>,
    department: Option<String>,
    status: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
struct AppointmentsQuery {
    q: Option<String>,
    department: Option<String>,
    status: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    /// ISO date (YYYY-MM-DD) restricting the listing to one day.
    date: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
struct DepartmentsQuery {
    q: Option<String>,
    status: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
struct MonitoringQuery {
    q: Option<String>,
    doctor: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
struct AlertsQuery {
    q: Option<String>,
    priority: Option<String>,
    category: Option<String>,
    status: Option<String>,
    department: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
struct ActivityQuery {
    q: Option<String>,
    module: Option<String>,
}

// ---- handlers ----

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Mediboard REST API is alive".into(),
    })
}

fn locale_res(store: &LocaleStore) -> LocaleRes {
    let state = store.state();
    let document = store.document();
    LocaleRes {
        locale: state.locale.as_wire().into(),
        lang: document.lang,
        dir: document.dir,
    }
}

#[utoipa::path(
    get,
    path = "/locale",
    responses(
        (status = 200, description = "Active locale and document attributes", body = LocaleRes)
    )
)]
/// Active locale
///
/// Returns the active locale together with the document `lang`/`dir`
/// attributes derived from it.
#[axum::debug_handler]
async fn get_locale(State(state): State<AppState>) -> Json<LocaleRes> {
    Json(locale_res(&state.locale))
}

#[utoipa::path(
    put,
    path = "/locale",
    request_body = SetLocaleReq,
    responses(
        (status = 200, description = "Locale activated", body = LocaleRes),
        (status = 400, description = "Unknown locale tag", body = ErrorRes),
        (status = 500, description = "Preference could not be persisted", body = ErrorRes)
    )
)]
/// Switch the active locale
///
/// Persists the preference, then updates the in-memory state and the
/// derived document attributes. Setting the already-active locale is a
/// no-op beyond rewriting the preference file.
#[axum::debug_handler]
async fn set_locale(
    State(state): State<AppState>,
    Json(req): Json<SetLocaleReq>,
) -> Result<Json<LocaleRes>, ApiError> {
    let locale = Locale::from_wire(&req.locale)
        .ok_or_else(|| bad_request(format!("unknown locale: {}", req.locale)))?;

    if let Err(e) = state.locale.set_locale(locale) {
        tracing::error!("set locale error: {:?}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorRes {
                error: "Internal error".into(),
            }),
        ));
    }
    Ok(Json(locale_res(&state.locale)))
}

#[utoipa::path(
    get,
    path = "/routes",
    responses(
        (status = 200, description = "Navigable pages with localized titles", body = RoutesRes)
    )
)]
/// Navigation surface
///
/// The fixed set of dashboard pages in sidebar order, with page titles in
/// the active locale.
#[axum::debug_handler]
async fn list_routes(State(state): State<AppState>) -> Json<RoutesRes> {
    let locale = state.active_locale();
    let routes = Route::ALL
        .iter()
        .map(|route| RouteInfo {
            path: route.path().into(),
            title: dictionary::text(locale, route.title_key()).into(),
        })
        .collect();
    Json(RoutesRes { routes })
}

#[utoipa::path(
    get,
    path = "/patients",
    params(PatientsQuery),
    responses(
        (status = 200, description = "Patient listing with summary cards", body = PatientsRes),
        (status = 400, description = "Invalid filter value", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Patient listing
///
/// Records come back in the active locale. Filters combine with AND; the
/// summary block always reflects the unfiltered dataset.
#[axum::debug_handler]
async fn list_patients(
    State(state): State<AppState>,
    Query(query): Query<PatientsQuery>,
) -> Result<Json<PatientsRes>, ApiError> {
    let records = state
        .provider
        .patients(state.active_locale())
        .map_err(internal)?;
    let summary = PatientSummary::compute(&records, Utc::now().date_naive());

    let mut criteria = FilterCriteria::new().with_search(query.q.unwrap_or_default());
    if let Some(selection) = enum_facet("status", query.status.as_deref(), |v| {
        PatientStatus::from_wire(v).is_some()
    })? {
        criteria = criteria.with_facet("status", selection);
    }
    if let Some(selection) = text_facet(query.department.as_deref()) {
        criteria = criteria.with_facet("department", selection);
    }
    if let Some(selection) = text_facet(query.gender.as_deref()) {
        criteria = criteria.with_facet("gender", selection);
    }

    let patients = filter(&records, &criteria)
        .map_err(internal)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(PatientsRes { patients, summary }))
}

#[utoipa::path(
    get,
    path = "/staff",
    params(StaffQuery),
    responses(
        (status = 200, description = "Staff listing", body = StaffRes),
        (status = 400, description = "Invalid filter value", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Staff listing
#[axum::debug_handler]
async fn list_staff(
    State(state): State<AppState>,
    Query(query): Query<StaffQuery>,
) -> Result<Json<StaffRes>, ApiError> {
    let records = state
        .provider
        .staff(state.active_locale())
        .map_err(internal)?;

    let mut criteria = FilterCriteria::new().with_search(query.q.unwrap_or_default());
    if let Some(selection) = enum_facet("status", query.status.as_deref(), |v| {
        StaffStatus::from_wire(v).is_some()
    })? {
        criteria = criteria.with_facet("status", selection);
    }
    if let Some(selection) = text_facet(query.department.as_deref()) {
        criteria = criteria.with_facet("department", selection);
    }

    let staff = filter(&records, &criteria)
        .map_err(internal)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(StaffRes { staff }))
}

#[utoipa::path(
    get,
    path = "/appointments",
    params(AppointmentsQuery),
    responses(
        (status = 200, description = "Appointment listing with summary", body = AppointmentsRes),
        (status = 400, description = "Invalid filter value", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Appointment listing
///
/// The `date` filter restricts the listing to one calendar day and must be
/// an ISO date.
#[axum::debug_handler]
async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<AppointmentsRes>, ApiError> {
    let records = state.provider.appointments().map_err(internal)?;
    let summary = AppointmentSummary::compute(&records);

    let mut criteria = FilterCriteria::new().with_search(query.q.unwrap_or_default());
    if let Some(selection) = enum_facet("status", query.status.as_deref(), |v| {
        AppointmentStatus::from_wire(v).is_some()
    })? {
        criteria = criteria.with_facet("status", selection);
    }
    if let Some(selection) = enum_facet("type", query.kind.as_deref(), |v| {
        AppointmentType::from_wire(v).is_some()
    })? {
        criteria = criteria.with_facet("type", selection);
    }
    if let Some(selection) = text_facet(query.department.as_deref()) {
        criteria = criteria.with_facet("department", selection);
    }
    if let Some(FacetSelection::Value(raw)) = text_facet(query.date.as_deref()) {
        let parsed: NaiveDate = raw
            .parse()
            .map_err(|_| bad_request(format!("invalid date: {raw}")))?;
        // Filter on the canonical ISO form; the facet value is always
        // zero-padded, the query string need not be.
        criteria = criteria.with_facet("date", FacetSelection::Value(parsed.to_string()));
    }

    let appointments = filter(&records, &criteria)
        .map_err(internal)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(AppointmentsRes {
        appointments,
        summary,
    }))
}

#[utoipa::path(
    get,
    path = "/departments",
    params(DepartmentsQuery),
    responses(
        (status = 200, description = "Department listing with occupancy summary", body = DepartmentsRes),
        (status = 400, description = "Invalid filter value", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Department listing
#[axum::debug_handler]
async fn list_departments(
    State(state): State<AppState>,
    Query(query): Query<DepartmentsQuery>,
) -> Result<Json<DepartmentsRes>, ApiError> {
    let records = state.provider.departments().map_err(internal)?;
    let summary = DepartmentSummary::compute(&records);

    let mut criteria = FilterCriteria::new().with_search(query.q.unwrap_or_default());
    if let Some(selection) = enum_facet("status", query.status.as_deref(), |v| {
        mediboard_core::records::DepartmentStatus::from_wire(v).is_some()
    })? {
        criteria = criteria.with_facet("status", selection);
    }

    let departments = filter(&records, &criteria)
        .map_err(internal)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DepartmentsRes {
        departments,
        summary,
    }))
}

#[utoipa::path(
    get,
    path = "/monitoring",
    params(MonitoringQuery),
    responses(
        (status = 200, description = "Monitored ICU patients", body = MonitoringRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Monitored patients with their vitals history
#[axum::debug_handler]
async fn list_monitoring(
    State(state): State<AppState>,
    Query(query): Query<MonitoringQuery>,
) -> Result<Json<MonitoringRes>, ApiError> {
    let records = state.provider.monitored_patients().map_err(internal)?;

    let mut criteria = FilterCriteria::new().with_search(query.q.unwrap_or_default());
    if let Some(selection) = text_facet(query.doctor.as_deref()) {
        criteria = criteria.with_facet("doctor", selection);
    }

    let patients = filter(&records, &criteria)
        .map_err(internal)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(MonitoringRes {
        patients,
        last_updated: state.ticker.last_updated(),
    }))
}

#[utoipa::path(
    get,
    path = "/alerts",
    params(AlertsQuery),
    responses(
        (status = 200, description = "Alert feed, highest priority first", body = AlertsRes),
        (status = 400, description = "Invalid filter value", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Alert feed
///
/// Alerts come back ordered critical, warning, info; within a priority the
/// original feed order is kept.
#[axum::debug_handler]
async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertsQuery>,
) -> Result<Json<AlertsRes>, ApiError> {
    let records = state.provider.alerts().map_err(internal)?;
    let summary = AlertSummary::compute(&records);

    let mut criteria = FilterCriteria::new().with_search(query.q.unwrap_or_default());
    if let Some(selection) = enum_facet("priority", query.priority.as_deref(), |v| {
        AlertPriority::from_wire(v).is_some()
    })? {
        criteria = criteria.with_facet("priority", selection);
    }
    if let Some(selection) = enum_facet("category", query.category.as_deref(), |v| {
        AlertCategory::from_wire(v).is_some()
    })? {
        criteria = criteria.with_facet("category", selection);
    }
    if let Some(selection) = enum_facet("status", query.status.as_deref(), |v| {
        AlertStatus::from_wire(v).is_some()
    })? {
        criteria = criteria.with_facet("status", selection);
    }
    if let Some(selection) = text_facet(query.department.as_deref()) {
        criteria = criteria.with_facet("department", selection);
    }

    let visible: Vec<Alert> = filter(&records, &criteria)
        .map_err(internal)?
        .into_iter()
        .cloned()
        .collect();
    let alerts = sorted_by_priority(&visible).into_iter().cloned().collect();

    Ok(Json(AlertsRes { alerts, summary }))
}

#[utoipa::path(
    get,
    path = "/activity",
    params(ActivityQuery),
    responses(
        (status = 200, description = "System activity log", body = ActivityRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Activity log in the active locale
#[axum::debug_handler]
async fn list_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ActivityRes>, ApiError> {
    let records = state
        .provider
        .activity(state.active_locale())
        .map_err(internal)?;

    let mut criteria = FilterCriteria::new().with_search(query.q.unwrap_or_default());
    if let Some(selection) = text_facet(query.module.as_deref()) {
        criteria = criteria.with_facet("module", selection);
    }

    let entries = filter(&records, &criteria)
        .map_err(internal)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(ActivityRes { entries }))
}

#[utoipa::path(
    get,
    path = "/reports",
    responses(
        (status = 200, description = "Cross-listing summaries and the admission trend", body = ReportsRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Reports page data
///
/// Every summary plus the trailing 14-day admission trend, computed fresh
/// from the provider on each request.
#[axum::debug_handler]
async fn reports(State(state): State<AppState>) -> Result<Json<ReportsRes>, ApiError> {
    let today = Utc::now().date_naive();
    let patients = state
        .provider
        .patients(state.active_locale())
        .map_err(internal)?;
    let appointments = state.provider.appointments().map_err(internal)?;
    let departments = state.provider.departments().map_err(internal)?;
    let alerts = state.provider.alerts().map_err(internal)?;

    Ok(Json(ReportsRes {
        patients: PatientSummary::compute(&patients, today),
        appointments: AppointmentSummary::compute(&appointments),
        departments: DepartmentSummary::compute(&departments),
        alerts: AlertSummary::compute(&alerts),
        admission_trend: admission_trend(&patients, today, TREND_WINDOW_DAYS),
    }))
}

fn refresh_res(state: &AppState) -> RefreshRes {
    RefreshRes {
        enabled: state.ticker.is_enabled(),
        interval_secs: state.cfg.refresh_interval_secs(),
        last_updated: state.ticker.last_updated(),
    }
}

#[utoipa::path(
    get,
    path = "/refresh",
    responses(
        (status = 200, description = "Auto-refresh state", body = RefreshRes)
    )
)]
/// Auto-refresh state
#[axum::debug_handler]
async fn get_refresh(State(state): State<AppState>) -> Json<RefreshRes> {
    Json(refresh_res(&state))
}

#[utoipa::path(
    put,
    path = "/refresh",
    request_body = SetRefreshReq,
    responses(
        (status = 200, description = "Auto-refresh toggled", body = RefreshRes)
    )
)]
/// Toggle auto-refresh
///
/// Enabling when already enabled (or disabling when already disabled) is a
/// no-op.
#[axum::debug_handler]
async fn set_refresh(
    State(state): State<AppState>,
    Json(req): Json<SetRefreshReq>,
) -> Json<RefreshRes> {
    if req.enabled {
        state.ticker.enable();
    } else {
        state.ticker.disable();
    }
    Json(refresh_res(&state))
}

/// Fallback for paths outside the fixed navigation surface.
async fn not_found(uri: axum::http::Uri) -> (StatusCode, Json<NotFoundRes>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundRes {
            error: "not found".into(),
            path: uri.path().into(),
        }),
    )
}

/// Builds the full router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/locale", get(get_locale).put(set_locale))
        .route("/routes", get(list_routes))
        .route("/patients", get(list_patients))
        .route("/staff", get(list_staff))
        .route("/appointments", get(list_appointments))
        .route("/departments", get(list_departments))
        .route("/monitoring", get(list_monitoring))
        .route("/alerts", get(list_alerts))
        .route("/activity", get(list_activity))
        .route("/reports", get(reports))
        .route("/refresh", get(get_refresh).put(set_refresh))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Main entry point for the Mediboard REST API server
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:3000) with OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `MEDIBOARD_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `MEDIBOARD_LOCALE_PREFS`: Locale preference file (default: "data/locale.pref")
/// - `MEDIBOARD_REFRESH_SECS`: Auto-refresh interval in seconds (default: 30)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration or locale preference cannot be read, or
/// - the server address cannot be bound.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MEDIBOARD_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let prefs_path = std::env::var("MEDIBOARD_LOCALE_PREFS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| DEFAULT_LOCALE_PREFS.into());
    let refresh_secs = match std::env::var("MEDIBOARD_REFRESH_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("invalid MEDIBOARD_REFRESH_SECS: {raw}"))?,
        Err(_) => DEFAULT_REFRESH_SECS,
    };

    let cfg = Arc::new(CoreConfig::new(prefs_path, refresh_secs)?);
    let locale = Arc::new(LocaleStore::open(cfg.locale_prefs_path())?);
    let ticker = Arc::new(RefreshTicker::new(Duration::from_secs(
        cfg.refresh_interval_secs(),
    )));
    let state = AppState::new(cfg, locale, Arc::new(SampleProvider::new()), ticker);

    tracing::info!("-- Starting Mediboard REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let prefs = dir.path().join("locale.pref");
        let cfg = Arc::new(CoreConfig::new(prefs.clone(), 30).unwrap());
        let locale = Arc::new(LocaleStore::open(prefs).unwrap());
        let ticker = Arc::new(RefreshTicker::new(Duration::from_secs(30)));
        let state = AppState::new(cfg, locale, Arc::new(SampleProvider::new()), ticker);
        (dir, app(state))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn put_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let (_dir, app) = test_app();
        let (status, body) = get_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (_dir, app) = test_app();
        let (status, body) = get_json(app, "/no-such-page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not found");
        assert_eq!(body["path"], "/no-such-page");
    }

    #[tokio::test]
    async fn test_locale_round_trip() {
        let (_dir, app) = test_app();

        let (status, body) = get_json(app.clone(), "/locale").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["locale"], "en");
        assert_eq!(body["dir"], "ltr");

        let (status, body) = put_json(app.clone(), "/locale", r#"{"locale":"ar"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["locale"], "ar");
        assert_eq!(body["lang"], "ar");
        assert_eq!(body["dir"], "rtl");

        let (status, body) = get_json(app, "/locale").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["locale"], "ar");
        assert_eq!(body["dir"], "rtl");
    }

    #[tokio::test]
    async fn test_unknown_locale_is_rejected() {
        let (_dir, app) = test_app();
        let (status, _) = put_json(app, "/locale", r#"{"locale":"fr"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_routes_lists_all_pages() {
        let (_dir, app) = test_app();
        let (status, body) = get_json(app, "/routes").await;
        assert_eq!(status, StatusCode::OK);
        let routes = body["routes"].as_array().unwrap();
        assert_eq!(routes.len(), 9);
        assert_eq!(routes[0]["path"], "/");
        assert_eq!(routes[0]["title"], "Dashboard");
    }

    #[tokio::test]
    async fn test_route_titles_follow_the_locale() {
        let (_dir, app) = test_app();
        let (status, _) = put_json(app.clone(), "/locale", r#"{"locale":"ar"}"#).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = get_json(app, "/routes").await;
        let routes = body["routes"].as_array().unwrap();
        assert_eq!(routes[0]["title"], "لوحة التحكم");
    }

    #[tokio::test]
    async fn test_patients_listing_filters_and_summarises() {
        let (_dir, app) = test_app();
        let (status, body) = get_json(app.clone(), "/patients").await;
        assert_eq!(status, StatusCode::OK);
        let all = body["patients"].as_array().unwrap().len();
        assert!(all > 0);
        assert_eq!(body["summary"]["total"].as_u64(), Some(all as u64));

        let (status, body) = get_json(app, "/patients?status=discharged&q=").await;
        assert_eq!(status, StatusCode::OK);
        let discharged = body["patients"].as_array().unwrap();
        assert!(!discharged.is_empty());
        assert!(discharged.iter().all(|p| p["status"] == "discharged"));
        // Summary still covers the full dataset.
        assert_eq!(body["summary"]["total"].as_u64(), Some(all as u64));
    }

    #[tokio::test]
    async fn test_unknown_status_value_is_rejected() {
        let (_dir, app) = test_app();
        let (status, _) = get_json(app, "/patients?status=zombie").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_all_sentinel_places_no_constraint() {
        let (_dir, app) = test_app();
        let (_, unfiltered) = get_json(app.clone(), "/patients").await;
        let (status, body) = get_json(app, "/patients?status=all&department=all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["patients"].as_array().unwrap().len(),
            unfiltered["patients"].as_array().unwrap().len()
        );
    }

    #[tokio::test]
    async fn test_alerts_come_back_priority_ordered() {
        let (_dir, app) = test_app();
        let (status, body) = get_json(app.clone(), "/alerts").await;
        assert_eq!(status, StatusCode::OK);
        let alerts = body["alerts"].as_array().unwrap();
        assert_eq!(alerts.len(), 15);
        let rank = |v: &serde_json::Value| match v["priority"].as_str() {
            Some("critical") => 0,
            Some("warning") => 1,
            _ => 2,
        };
        assert!(alerts.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));

        let (status, body) = get_json(app, "/alerts?priority=critical").await;
        assert_eq!(status, StatusCode::OK);
        let criticals = body["alerts"].as_array().unwrap();
        assert_eq!(criticals.len(), 5);
        assert!(criticals.iter().all(|a| a["priority"] == "critical"));
    }

    #[tokio::test]
    async fn test_invalid_appointment_date_is_rejected() {
        let (_dir, app) = test_app();
        let (status, _) = get_json(app, "/appointments?date=yesterday").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unpadded_date_still_matches_its_day() {
        use chrono::Datelike;

        let (_dir, app) = test_app();
        let today = Utc::now().date_naive();
        let unpadded = format!("{}-{}-{}", today.year(), today.month(), today.day());

        let (status, body) = get_json(app.clone(), &format!("/appointments?date={unpadded}")).await;
        assert_eq!(status, StatusCode::OK);
        let on_day = body["appointments"].as_array().unwrap();
        assert!(!on_day.is_empty());
        assert!(on_day.iter().all(|a| a["date"] == today.to_string()));

        // Both spellings of the day produce the same listing.
        let (_, padded) = get_json(app, &format!("/appointments?date={today}")).await;
        assert_eq!(body["appointments"], padded["appointments"]);
    }

    #[tokio::test]
    async fn test_reports_carry_the_trend_window() {
        let (_dir, app) = test_app();
        let (status, body) = get_json(app, "/reports").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["admission_trend"].as_array().unwrap().len(), 14);
        assert!(body["departments"]["occupancy_rate"].as_f64().is_some());
    }

    #[tokio::test]
    async fn test_refresh_toggle_round_trip() {
        let (_dir, app) = test_app();
        let (status, body) = get_json(app.clone(), "/refresh").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["enabled"], false);
        assert_eq!(body["interval_secs"], 30);

        let (status, body) = put_json(app.clone(), "/refresh", r#"{"enabled":true}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["enabled"], true);

        let (status, body) = put_json(app, "/refresh", r#"{"enabled":false}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["enabled"], false);
    }
}
