use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::TimeError;
use crate::services::time::{DateSpec, TimeService};
use crate::utils::datetime::format_time_verbose;
use crate::utils::logging::{log_request_rejected, log_unexpected_failure};

#[derive(Debug, Deserialize, Default)]
pub struct ZoneQuery {
    pub tz: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DateDiffQuery {
    pub start: Option<DateSpec>,
    pub end: Option<DateSpec>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentTimeResponse {
    pub current_time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentDateResponse {
    pub current_date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DateDiffResponse {
    pub dates_difference: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub time: TimeService,
}

/// The HTTP surface of the service: JSON endpoints under `/api/v1` plus two
/// HTML pages, with every unmatched request answered as a 400.
pub struct ApiService {
    pub router: Router,
}

impl ApiService {
    pub fn new(config: &Config) -> Self {
        let state = AppState {
            time: TimeService::new(config.server_tz),
        };

        // The wildcard GET doubles as the per-zone page; zone names such as
        // Asia/Bangkok contain slashes, so a plain path segment won't do.
        let router = Router::new()
            .route("/", get(root_page).fallback(unrouted))
            .route("/api/v1/time", post(current_time).fallback(unrouted))
            .route("/api/v1/date", post(current_date).fallback(unrouted))
            .route("/api/v1/datediff", post(date_diff).fallback(unrouted))
            .route("/*tz", get(zone_page).fallback(unrouted))
            .fallback(unrouted)
            .layer(CatchPanicLayer::custom(recover_panic))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

impl IntoResponse for TimeError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

async fn root_page(State(state): State<AppState>) -> Response {
    // The server zone is validated at startup, so this cannot miss
    match state.time.now_in(None) {
        Ok(now) => Html(page(&format!(
            "Current time (server zone): {}",
            format_time_verbose(&now)
        )))
        .into_response(),
        Err(err) => html_error(&err),
    }
}

async fn zone_page(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let tz_name = raw.trim_matches('/');
    match state.time.now_in(Some(tz_name)) {
        Ok(now) => Html(page(&format!(
            "Current time ({}): {}",
            tz_name,
            format_time_verbose(&now)
        )))
        .into_response(),
        Err(err) => {
            log_request_rejected("GET", &format!("/{}", tz_name), &err.to_string());
            html_error(&err)
        }
    }
}

async fn current_time(
    State(state): State<AppState>,
    payload: Result<Json<ZoneQuery>, JsonRejection>,
) -> Result<Json<CurrentTimeResponse>, TimeError> {
    let Json(query) = payload.map_err(|_| TimeError::MalformedRequestBody)?;
    let current_time = state.time.current_time(query.tz.as_deref()).map_err(|err| {
        log_request_rejected("POST", "/api/v1/time", &err.to_string());
        err
    })?;
    Ok(Json(CurrentTimeResponse { current_time }))
}

async fn current_date(
    State(state): State<AppState>,
    payload: Result<Json<ZoneQuery>, JsonRejection>,
) -> Result<Json<CurrentDateResponse>, TimeError> {
    let Json(query) = payload.map_err(|_| TimeError::MalformedRequestBody)?;
    let current_date = state.time.current_date(query.tz.as_deref()).map_err(|err| {
        log_request_rejected("POST", "/api/v1/date", &err.to_string());
        err
    })?;
    Ok(Json(CurrentDateResponse { current_date }))
}

async fn date_diff(
    State(state): State<AppState>,
    payload: Result<Json<DateDiffQuery>, JsonRejection>,
) -> Result<Json<DateDiffResponse>, TimeError> {
    let Json(query) = payload.map_err(|_| TimeError::MalformedRequestBody)?;
    let dates_difference = state
        .time
        .difference(query.start.as_ref(), query.end.as_ref())
        .map_err(|err| {
            log_request_rejected("POST", "/api/v1/datediff", &err.to_string());
            err
        })?;
    Ok(Json(DateDiffResponse { dates_difference }))
}

async fn unrouted(method: Method, uri: Uri) -> TimeError {
    log_request_rejected(method.as_str(), uri.path(), "no matching route");
    TimeError::UnroutedRequest
}

fn page(message: &str) -> String {
    format!("<html><body><h1>{}</h1></body></html>", message)
}

fn html_error(err: &TimeError) -> Response {
    (StatusCode::BAD_REQUEST, Html(page(&err.to_string()))).into_response()
}

fn recover_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    log_unexpected_failure(&detail);

    let body = ErrorResponse {
        error: "Internal server error".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
