use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::response::sse::{Event, Sse};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::errors::AppError;
use crate::models::{ChatEvent, ChatMessage};
use crate::services::chat;
use crate::state::AppState;

// POST /api/chat/session
#[derive(Serialize)]
pub struct StartSessionResponse {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

pub async fn start_session(State(state): State<Arc<AppState>>) -> Json<StartSessionResponse> {
    let session = chat::start_session(&state);
    Json(StartSessionResponse {
        session_id: session.id,
        messages: session.messages,
    })
}

// POST /api/chat/message
#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    pub reply: String,
    pub delay_ms: u64,
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    let posted = chat::process_message(&state, &payload.session_id, &payload.message)?;
    Ok(Json(SendMessageResponse {
        reply: posted.reply,
        delay_ms: posted.delay_ms,
    }))
}

// GET /api/chat/session/:id/messages
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    Ok(Json(chat::transcript(&state, &session_id)?))
}

// GET /api/chat/events - SSE stream of transcript appends
#[derive(Deserialize)]
pub struct EventsQuery {
    pub session_id: String,
}

pub async fn events_stream(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventsQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>, AppError> {
    let session_id = query.session_id;

    // Replay the transcript so a reconnecting widget misses nothing.
    let catchup_events: Vec<ChatEvent> = chat::transcript(&state, &session_id)?
        .into_iter()
        .map(|message| ChatEvent {
            session_id: session_id.clone(),
            message,
        })
        .collect();

    let rx = state.events_tx.subscribe();

    let catchup_stream = tokio_stream::iter(catchup_events.into_iter().map(|event| {
        let data = serde_json::to_string(&event).unwrap_or_default();
        Ok::<_, Infallible>(Event::default().data(data).event("chat_message"))
    }));

    let live_stream = BroadcastStream::new(rx).filter_map(move |result| match result {
        Ok(event) if event.session_id == session_id => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data).event("chat_message")))
        }
        Ok(_) => None,
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(_)) => None,
    });

    let keepalive_stream = tokio_stream::StreamExt::map(
        tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(Duration::from_secs(30))),
        |_| Ok(Event::default().comment("keepalive")),
    );

    let combined = catchup_stream.chain(live_stream);
    let merged = StreamExt::merge(combined, keepalive_stream);

    Ok(Sse::new(merged))
}
