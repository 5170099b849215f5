//! Axum route handlers for the Intake API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::session::Session;
use crate::intake::store::SessionHandle;
use crate::models::candidate::SessionRecord;
use crate::models::message::Message;
use crate::models::progress::TechnicalAnswer;
use crate::models::stage::Stage;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

/// What a client needs to render after every turn.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub reply: String,
    pub stage: Stage,
    pub stage_name: &'static str,
    pub progress_percent: f64,
    pub terminated: bool,
    pub profile: SessionRecord,
    pub questions_answered: usize,
    pub questions_total: usize,
}

#[derive(Debug, Serialize)]
pub struct SessionDetailResponse {
    #[serde(flatten)]
    pub view: SessionView,
    pub created_at: DateTime<Utc>,
    pub summary: String,
    pub questions: Vec<String>,
    pub answers: Vec<TechnicalAnswer>,
    pub messages: Vec<Message>,
}

impl SessionView {
    fn of(session: &Session) -> Self {
        let state = session.state();
        let stage = state.stage();
        let (questions_answered, questions_total) = state
            .progress()
            .map(|p| (p.answered_count(), p.total()))
            .unwrap_or((0, 0));
        Self {
            session_id: session.id(),
            reply: session.last_reply().to_string(),
            stage,
            stage_name: stage.display_name(),
            progress_percent: stage.progress_percent(),
            terminated: state.is_terminated(),
            profile: state.record().clone(),
            questions_answered,
            questions_total,
        }
    }
}

async fn find_session(state: &AppState, id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Starts a conversation and returns the welcome message.
pub async fn handle_start_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let handle = state.sessions.create().await;
    let session = handle.lock().await;
    Ok((StatusCode::CREATED, Json(SessionView::of(&session))))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionDetailResponse>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;
    let progress = session.state().progress();
    Ok(Json(SessionDetailResponse {
        view: SessionView::of(&session),
        created_at: session.created_at(),
        summary: session.state().record().summary(),
        questions: progress.map(|p| p.questions().to_vec()).unwrap_or_default(),
        answers: progress.map(|p| p.answers().to_vec()).unwrap_or_default(),
        messages: session.messages().to_vec(),
    }))
}

/// POST /api/v1/sessions/:id/messages
///
/// Runs one dialogue step. The session lock is held across the optional
/// reply delay, so a second message waits until this reply exists.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SessionView>, AppError> {
    let max_chars = state.config.max_message_chars;
    if request.text.chars().count() > max_chars {
        return Err(AppError::Validation(format!(
            "text cannot exceed {max_chars} characters"
        )));
    }

    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;

    if let Some(delay) = state.config.reply_delay() {
        tokio::time::sleep(delay).await;
    }

    session.submit(&request.text);
    Ok(Json(SessionView::of(&session)))
}

/// POST /api/v1/sessions/:id/reset
///
/// Discards everything collected so far and greets the candidate again.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.reset();
    session.begin();
    Ok(Json(SessionView::of(&session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}
