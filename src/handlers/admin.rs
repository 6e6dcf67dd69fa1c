use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::SessionSummary;
use crate::services::chat;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/status
#[derive(Serialize)]
pub struct StatusResponse {
    active_sessions: usize,
    total_messages: usize,
    pending_replies: usize,
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatusResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let sessions = state.sessions.lock().unwrap();
    Ok(Json(StatusResponse {
        active_sessions: sessions.len(),
        total_messages: sessions.values().map(|s| s.messages.len()).sum(),
        pending_replies: sessions.values().filter(|s| s.reply_pending).count(),
    }))
}

// GET /api/admin/sessions
pub async fn get_sessions(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<SessionSummary>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;
    Ok(Json(chat::session_summaries(&state)))
}

// POST /api/admin/sessions/:id/end
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(session_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;
    chat::end_session(&state, &session_id)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
