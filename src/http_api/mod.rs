use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    EmployeeName, EventMaterializer, ParsedRoster, ResolvedConfig, RosterError, SessionId,
    SessionStore, calendar_file_name, ics::CALENDAR_MIME_TYPE, parse_roster, render_calendar,
};

/// Sessions kept by [`AppState::new`] before the oldest upload is evicted.
pub const DEFAULT_SESSION_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct AppState {
    sessions: Arc<SessionStore>,
    config: Arc<ResolvedConfig>,
}

impl AppState {
    pub fn new(config: ResolvedConfig) -> Self {
        Self::with_session_capacity(config, DEFAULT_SESSION_CAPACITY)
    }

    pub fn with_session_capacity(config: ResolvedConfig, capacity: usize) -> Self {
        Self::with_sessions(config, Arc::new(SessionStore::with_capacity(capacity)))
    }

    pub fn with_sessions(config: ResolvedConfig, sessions: Arc<SessionStore>) -> Self {
        Self {
            sessions,
            config: Arc::new(config),
        }
    }

    fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn parse(&self, document: &str) -> Result<ParsedRoster, ApiError> {
        parse_roster(document, &self.config).map_err(ApiError::from)
    }

    fn roster(&self, id: &SessionId) -> Result<Arc<ParsedRoster>, ApiError> {
        self.sessions()
            .get(id)
            .ok_or_else(|| ApiError::not_found(format!("roster session {id} not found")))
    }
}

/// What a client needs after an upload: its handle and the names to pick from.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterSummary {
    pub session: SessionId,
    pub dates: Vec<NaiveDate>,
    pub employees: Vec<String>,
    #[serde(default)]
    pub rejected: BTreeMap<String, String>,
}

impl RosterSummary {
    fn new(session: SessionId, roster: &ParsedRoster) -> Self {
        Self {
            session,
            dates: roster.dates().to_vec(),
            employees: roster
                .employee_names()
                .into_iter()
                .map(ToString::to_string)
                .collect(),
            rejected: roster
                .rejected()
                .iter()
                .map(|(name, err)| (name.to_string(), err.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CalendarQuery {
    employee: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Unprocessable(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl From<RosterError> for ApiError {
    fn from(value: RosterError) -> Self {
        match value {
            RosterError::NoMatchingEmployee { .. } => ApiError::NotFound(value.to_string()),
            RosterError::HeaderNotFound { .. }
            | RosterError::NoDateTokens
            | RosterError::InvalidHeaderDate { .. }
            | RosterError::TimePhraseInvalid { .. }
            | RosterError::DuplicateEmployee { .. } => ApiError::Unprocessable(value.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Unprocessable(message) => {
                let body = Json(ErrorBody {
                    error: "unprocessable_roster",
                    message,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rosters", post(upload_roster))
        .route(
            "/rosters/:session",
            get(get_roster).put(replace_roster).delete(delete_roster),
        )
        .route("/rosters/:session/calendar", get(download_calendar))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn upload_roster(
    State(state): State<AppState>,
    document: String,
) -> Result<(StatusCode, Json<RosterSummary>), ApiError> {
    let roster = Arc::new(state.parse(&document)?);
    let session = state.sessions().insert_shared(Arc::clone(&roster));
    let summary = RosterSummary::new(session, &roster);
    Ok((StatusCode::CREATED, Json(summary)))
}

async fn get_roster(
    State(state): State<AppState>,
    Path(session): Path<SessionId>,
) -> Result<Json<RosterSummary>, ApiError> {
    let roster = state.roster(&session)?;
    Ok(Json(RosterSummary::new(session, &roster)))
}

async fn replace_roster(
    State(state): State<AppState>,
    Path(session): Path<SessionId>,
    document: String,
) -> Result<Json<RosterSummary>, ApiError> {
    state.roster(&session)?;
    let roster = state.parse(&document)?;
    let summary = RosterSummary::new(session, &roster);
    if !state.sessions().replace(&session, roster) {
        return Err(ApiError::not_found(format!(
            "roster session {session} not found"
        )));
    }
    Ok(Json(summary))
}

async fn delete_roster(
    State(state): State<AppState>,
    Path(session): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    if !state.sessions().remove(&session) {
        return Err(ApiError::not_found(format!(
            "roster session {session} not found"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn download_calendar(
    State(state): State<AppState>,
    Path(session): Path<SessionId>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, ApiError> {
    let roster = state.roster(&session)?;
    let materializer = EventMaterializer::from_config(&state.config);
    let events = roster.materialize(&query.employee, &materializer)?;

    let name = EmployeeName::new(query.employee);
    let body = render_calendar(&name, &events);
    let disposition = format!("attachment; filename=\"{}\"", calendar_file_name(&name));
    let headers = [
        (header::CONTENT_TYPE, CALENDAR_MIME_TYPE.to_string()),
        (header::CONTENT_DISPOSITION, disposition),
    ];
    Ok((headers, body).into_response())
}
