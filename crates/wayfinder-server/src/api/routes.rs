//! REST API routes.

use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::session::{PlanError, Session, SessionPhase, TransitionError};
use crate::state::AppState;
use wayfinder_core::{
    catalog, fallback_advice, fallback_instructions, Airport, Language, TravelMode,
};

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/airports", get(list_airports))
        .route("/v1/airports/:airport_id", get(get_airport))
        .route("/v1/sessions", post(create_session))
        .route("/v1/sessions/:session_id", get(get_session))
        .route("/v1/sessions/:session_id/plan", post(plan_route))
        .route("/v1/sessions/:session_id/language", post(set_language))
        .route("/v1/sessions/:session_id/step", post(change_step))
        .route("/v1/sessions/:session_id/emergency", post(toggle_emergency))
        .route("/v1/sessions/:session_id/narrate", post(narrate))
        .route("/v1/sessions/:session_id/summary", get(journey_summary))
}

// === Request/Response types ===

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub airport_id: String,
    pub start_id: String,
    pub end_id: String,
    pub mode: TravelMode,
    /// Defaults to the session's current language.
    pub language: Option<Language>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: Language,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Next,
    Prev,
}

#[derive(Debug, Deserialize)]
pub struct StepRequest {
    pub direction: StepDirection,
}

#[derive(Debug, Deserialize)]
pub struct EmergencyRequest {
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrateAction {
    Start,
    Stop,
}

#[derive(Debug, Deserialize)]
pub struct NarrateRequest {
    pub action: NarrateAction,
}

#[derive(Debug, Serialize)]
pub struct NarrateResponse {
    pub speaking: bool,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub from: String,
    pub to: String,
    pub steps: Vec<String>,
}

// === Error helpers ===

fn bad_request(message: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message.to_string() })),
    )
}

fn conflict(message: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CONFLICT,
        Json(json!({ "error": message.to_string() })),
    )
}

fn session_not_found(session_id: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Unknown session {}", session_id) })),
    )
}

fn transition_error(err: TransitionError) -> (StatusCode, Json<Value>) {
    match err {
        TransitionError::EmergencyActive | TransitionError::EmergencyNotActive => conflict(err),
        _ => bad_request(err),
    }
}

// === Advice dispatch ===

/// Request advice for the step the session is currently on. The request is
/// tagged with the step index at dispatch time; a result arriving after the
/// traveler has moved on is discarded rather than applied to the wrong step.
fn dispatch_advice(state: Arc<AppState>, session: &Session) {
    if session.phase != SessionPhase::Navigating {
        return;
    }
    let Some(path) = session.path.as_ref() else {
        return;
    };
    let Some(step) = path.steps.get(session.current_step) else {
        return;
    };

    let session_id = session.id.clone();
    let step_index = session.current_step;
    let language = session.language;

    if !state.config().advice_enabled {
        // Offline mode: apply the static pair directly.
        state.with_session(&session_id, |s| {
            s.apply_advice(step_index, fallback_advice(language))
        });
        return;
    }

    let instruction = step.instruction.clone();
    let destination = path.to.clone();
    tokio::spawn(async move {
        let advice = state
            .advice()
            .advice_or_fallback(&instruction, &destination, language)
            .await;
        let applied = state
            .with_session(&session_id, |s| s.apply_advice(step_index, advice))
            .unwrap_or(false);
        if !applied {
            tracing::debug!(
                "Discarding stale advice for session {} step {}",
                session_id,
                step_index
            );
        }
    });
}

// === Handlers ===

async fn list_airports() -> Json<&'static [Airport]> {
    Json(catalog::airports())
}

async fn get_airport(
    UrlPath(airport_id): UrlPath<String>,
) -> Result<Json<&'static Airport>, StatusCode> {
    catalog::airport(&airport_id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.create_session();
    tracing::info!("Created session {}", session.id);
    (StatusCode::CREATED, Json(session))
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    UrlPath(session_id): UrlPath<String>,
) -> Result<Json<Session>, (StatusCode, Json<Value>)> {
    state
        .get_session(&session_id)
        .map(Json)
        .ok_or_else(|| session_not_found(&session_id))
}

async fn plan_route(
    State(state): State<Arc<AppState>>,
    UrlPath(session_id): UrlPath<String>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<Session>, (StatusCode, Json<Value>)> {
    let result = state
        .with_session(&session_id, |session| {
            let language = req.language.unwrap_or(session.language);
            session
                .plan(&req.airport_id, &req.start_id, &req.end_id, req.mode, language)
                .map(|()| session.clone())
        })
        .ok_or_else(|| session_not_found(&session_id))?;

    let session = result.map_err(|err| match err {
        PlanError::Route(err) => bad_request(err),
        PlanError::Transition(err) => transition_error(err),
    })?;

    tracing::info!(
        "Session {} planned route {} -> {} ({})",
        session_id,
        session.path.as_ref().map(|p| p.from.as_str()).unwrap_or(""),
        session.path.as_ref().map(|p| p.to.as_str()).unwrap_or(""),
        session.mode.as_str()
    );
    dispatch_advice(state, &session);
    Ok(Json(session))
}

async fn set_language(
    State(state): State<Arc<AppState>>,
    UrlPath(session_id): UrlPath<String>,
    Json(req): Json<LanguageRequest>,
) -> Result<Json<Session>, (StatusCode, Json<Value>)> {
    let result = state
        .with_session(&session_id, |session| {
            session.set_language(req.language).map(|()| session.clone())
        })
        .ok_or_else(|| session_not_found(&session_id))?;

    let session = result.map_err(bad_request)?;
    dispatch_advice(state, &session);
    Ok(Json(session))
}

async fn change_step(
    State(state): State<Arc<AppState>>,
    UrlPath(session_id): UrlPath<String>,
    Json(req): Json<StepRequest>,
) -> Result<Json<Session>, (StatusCode, Json<Value>)> {
    let result = state
        .with_session(&session_id, |session| {
            let moved = match req.direction {
                StepDirection::Next => session.advance_step(),
                StepDirection::Prev => session.retreat_step(),
            };
            moved.map(|_| session.clone())
        })
        .ok_or_else(|| session_not_found(&session_id))?;

    let session = result.map_err(transition_error)?;
    dispatch_advice(state, &session);
    Ok(Json(session))
}

async fn toggle_emergency(
    State(state): State<Arc<AppState>>,
    UrlPath(session_id): UrlPath<String>,
    Json(req): Json<EmergencyRequest>,
) -> Result<Json<Session>, (StatusCode, Json<Value>)> {
    let result = state
        .with_session(&session_id, |session| {
            let toggled = if req.active {
                session.trigger_emergency()
            } else {
                session.cancel_emergency()
            };
            toggled.map(|()| session.clone())
        })
        .ok_or_else(|| session_not_found(&session_id))?;

    let session = result.map_err(transition_error)?;
    if req.active {
        tracing::warn!("Session {} activated emergency evacuation", session_id);
    } else {
        tracing::info!("Session {} cancelled emergency evacuation", session_id);
    }
    Ok(Json(session))
}

async fn narrate(
    State(state): State<Arc<AppState>>,
    UrlPath(session_id): UrlPath<String>,
    Json(req): Json<NarrateRequest>,
) -> Result<Json<NarrateResponse>, (StatusCode, Json<Value>)> {
    let session = state
        .get_session(&session_id)
        .ok_or_else(|| session_not_found(&session_id))?;

    match req.action {
        NarrateAction::Start => {
            let instruction = session
                .current_instruction()
                .ok_or_else(|| transition_error(TransitionError::NoActiveRoute))?;
            state
                .narrator()
                .start(instruction.to_string(), session.language);
        }
        NarrateAction::Stop => state.narrator().stop(),
    }

    Ok(Json(NarrateResponse {
        speaking: state.narrator().is_speaking(),
    }))
}

/// Condensed journey overview, suitable for reading out before departure.
async fn journey_summary(
    State(state): State<Arc<AppState>>,
    UrlPath(session_id): UrlPath<String>,
) -> Result<Json<SummaryResponse>, (StatusCode, Json<Value>)> {
    let session = state
        .get_session(&session_id)
        .ok_or_else(|| session_not_found(&session_id))?;
    let path = session
        .path
        .as_ref()
        .ok_or_else(|| transition_error(TransitionError::NoActiveRoute))?;

    let steps = if state.config().advice_enabled {
        state
            .advice()
            .instructions_or_fallback(&path.from, &path.to, session.language)
            .await
    } else {
        fallback_instructions(&path.from, &path.to, session.language)
    };

    Ok(Json(SummaryResponse {
        from: path.from.clone(),
        to: path.to.clone(),
        steps,
    }))
}
