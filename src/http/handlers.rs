use super::pages::{AssistantView, InterviewView};
use super::state::{AppState, BrowserSession};
use crate::assistant::{AssistantForm, StartRequest};
use crate::interview::{interview_assistant, InterviewForm};
use crate::session::{Notice, SessionError, SessionSnapshot, StopOutcome};
use axum::{
    extract::{Form, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Cookie carrying the browser session id
pub const SESSION_COOKIE: &str = "vapi_console_sid";

// ============================================================================
// Request/Response Types
// ============================================================================

/// A submitted form plus the credential field shown when none is configured
#[derive(Debug, Deserialize)]
pub struct WithCredential<T> {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(flatten)]
    pub form: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Helpers
// ============================================================================

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

fn set_cookie(session_id: &str) -> [(header::HeaderName, String); 1] {
    [(
        header::SET_COOKIE,
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, session_id
        ),
    )]
}

/// Configured credential wins over one typed into the page
fn credential<'a>(state: &'a AppState, submitted: Option<&'a str>) -> Option<&'a str> {
    state.config.vapi.api_key.as_deref().or(submitted)
}

fn render_failure(e: anyhow::Error) -> Response {
    error!("Failed to render page: {:#}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Failed to render page: {}", e),
        }),
    )
        .into_response()
}

fn assistant_page(
    state: &AppState,
    session_id: &str,
    session: &BrowserSession,
    form: &AssistantForm,
    notice: Option<&Notice>,
) -> Response {
    let snapshot = session.assistant.snapshot();
    let view = AssistantView {
        form,
        snapshot: &snapshot,
        notice,
        needs_api_key: state.config.vapi.api_key.is_none(),
    };

    match state.pages.assistant(&view) {
        Ok(body) => (set_cookie(session_id), Html(body)).into_response(),
        Err(e) => render_failure(e),
    }
}

fn interview_page(
    state: &AppState,
    session_id: &str,
    session: &BrowserSession,
    form: &InterviewForm,
    notice: Option<&Notice>,
) -> Response {
    let snapshot = session.interview.snapshot();
    let role = form
        .settings()
        .map(|s| s.role)
        .unwrap_or(session.interview_settings.role);
    let view = InterviewView {
        form,
        role,
        snapshot: &snapshot,
        notice,
        needs_api_key: state.config.vapi.api_key.is_none(),
    };

    match state.pages.interview(&view) {
        Ok(body) => (set_cookie(session_id), Html(body)).into_response(),
        Err(e) => render_failure(e),
    }
}

fn start_notice(result: Result<(), SessionError>, subject: &str) -> Notice {
    match result {
        Ok(()) => Notice::success(format!("{} started successfully!", subject)),
        Err(SessionError::StartFailed(message)) => Notice::error(format!(
            "Error starting {}: {}",
            subject.to_lowercase(),
            message
        )),
        Err(SessionError::AlreadyActive) => Notice::warning(SessionError::AlreadyActive.to_string()),
        Err(e) => Notice::error(e.to_string()),
    }
}

fn stop_notice(result: Result<StopOutcome, SessionError>, subject: &str, verb: &str) -> Notice {
    match result {
        Ok(StopOutcome::Stopped) => Notice::success(format!("{} {} successfully!", subject, verb)),
        Ok(StopOutcome::Orphaned { error }) => Notice::error(format!(
            "Error stopping {}: {}",
            subject.to_lowercase(),
            error
        )),
        Err(e) => {
            warn!("Stop requested without an active session");
            Notice::warning(e.to_string())
        }
    }
}

// ============================================================================
// Assistant flow
// ============================================================================

/// GET /
pub async fn show_assistant(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session_id, session) = state.browser_session(session_cookie(&headers).as_deref()).await;
    let session = session.lock().await;
    let form = AssistantForm::with_defaults(&state.config.assistant);

    assistant_page(&state, &session_id, &session, &form, None)
}

/// POST /assistant/start
/// Start a call with a pre-registered or custom assistant
pub async fn start_assistant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<WithCredential<AssistantForm>>,
) -> Response {
    let (session_id, session) = state.browser_session(session_cookie(&headers).as_deref()).await;
    let mut session = session.lock().await;

    let request: StartRequest = input.form.start_request();
    let api_key = credential(&state, input.api_key.as_deref());
    let result = session
        .assistant
        .start(state.factory.as_ref(), api_key, request)
        .await;
    let notice = start_notice(result, "Call");

    assistant_page(&state, &session_id, &session, &input.form, Some(&notice))
}

/// POST /assistant/stop
pub async fn stop_assistant(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session_id, session) = state.browser_session(session_cookie(&headers).as_deref()).await;
    let mut session = session.lock().await;

    let result = session.assistant.stop().await;
    let notice = stop_notice(result, "Call", "stopped");
    let form = AssistantForm::with_defaults(&state.config.assistant);

    assistant_page(&state, &session_id, &session, &form, Some(&notice))
}

/// GET /assistant/status
/// Never creates a browser session; unknown browsers read as INACTIVE
pub async fn assistant_status(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match state.existing_session(session_cookie(&headers).as_deref()).await {
        Some((session_id, session)) => {
            let snapshot = session.lock().await.assistant.snapshot();
            (set_cookie(&session_id), Json(snapshot)).into_response()
        }
        None => Json(SessionSnapshot::default()).into_response(),
    }
}

// ============================================================================
// Interview flow
// ============================================================================

/// GET /interview
pub async fn show_interview(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session_id, session) = state.browser_session(session_cookie(&headers).as_deref()).await;
    let session = session.lock().await;
    let form = InterviewForm::from_settings(&session.interview_settings);

    interview_page(&state, &session_id, &session, &form, None)
}

/// POST /interview/start
/// Compose the interviewer prompt and start the call
pub async fn start_interview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<WithCredential<InterviewForm>>,
) -> Response {
    let settings = match input.form.settings() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Rejected interview options: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let (session_id, session) = state.browser_session(session_cookie(&headers).as_deref()).await;
    let mut session = session.lock().await;

    let api_key = credential(&state, input.api_key.as_deref());

    // A start rejected for a missing key leaves the remembered settings alone
    if api_key.is_some_and(|key| !key.trim().is_empty()) {
        session.interview_settings.role = settings.role;
        session.interview_settings.level = settings.level;
        session.interview_settings.duration = settings.duration;
    }

    let request = StartRequest::Assistant(interview_assistant(&settings, &input.form.job_description));
    let result = session
        .interview
        .start(state.factory.as_ref(), api_key, request)
        .await;
    let notice = start_notice(result, "Interview");

    interview_page(&state, &session_id, &session, &input.form, Some(&notice))
}

/// POST /interview/stop
pub async fn stop_interview(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (session_id, session) = state.browser_session(session_cookie(&headers).as_deref()).await;
    let mut session = session.lock().await;

    let result = session.interview.stop().await;
    let notice = stop_notice(result, "Interview", "ended");
    let form = InterviewForm::from_settings(&session.interview_settings);

    interview_page(&state, &session_id, &session, &form, Some(&notice))
}

/// GET /interview/status
pub async fn interview_status(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match state.existing_session(session_cookie(&headers).as_deref()).await {
        Some((session_id, session)) => {
            let snapshot = session.lock().await.interview.snapshot();
            (set_cookie(&session_id), Json(snapshot)).into_response()
        }
        None => Json(SessionSnapshot::default()).into_response(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
