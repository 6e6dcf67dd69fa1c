use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{ChatEvent, ChatMessage, ChatSession, Intent, SessionSummary};
use crate::services::responder::WELCOME_MESSAGE;
use crate::state::AppState;

pub struct PostedReply {
    pub reply: String,
    pub delay_ms: u64,
}

/// Create a session seeded with the assistant's welcome message.
pub fn start_session(state: &Arc<AppState>) -> ChatSession {
    let mut session = ChatSession::new(state.config.session_ttl_minutes);
    session.messages.push(ChatMessage::from_bot(WELCOME_MESSAGE));

    {
        let mut sessions = state.sessions.lock().unwrap();
        sweep_expired(&mut sessions);
        sessions.insert(session.id.clone(), session.clone());
    }

    tracing::info!(session_id = %session.id, "chat session started");
    session
}

/// Append a user message, classify it, and schedule the bot reply.
///
/// Classification runs synchronously; only the transcript append of the bot
/// message is deferred by the typing delay. Blank input is rejected before
/// anything is appended. A session with a reply pending rejects further
/// submissions until the pending message lands.
pub fn process_message(
    state: &Arc<AppState>,
    session_id: &str,
    text: &str,
) -> Result<PostedReply, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::BlankMessage);
    }

    let user_message = ChatMessage::from_user(text);

    {
        let mut sessions = state.sessions.lock().unwrap();
        sweep_expired(&mut sessions);
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))?;
        if session.reply_pending {
            return Err(AppError::ReplyPending(session_id.to_string()));
        }
        session.messages.push(user_message.clone());
        session.reply_pending = true;
        session.touch(state.config.session_ttl_minutes);
    }

    broadcast(state, session_id, &user_message);

    let reply = state.responder.respond(text);
    let delay_ms = typing_delay_ms(&state.config);

    tracing::info!(
        session_id,
        intent = Intent::classify(text).map(|i| i.as_str()).unwrap_or("fallback"),
        delay_ms,
        "message classified"
    );

    schedule_bot_reply(state, session_id.to_string(), reply.clone(), delay_ms);

    Ok(PostedReply { reply, delay_ms })
}

pub fn transcript(state: &Arc<AppState>, session_id: &str) -> Result<Vec<ChatMessage>, AppError> {
    let mut sessions = state.sessions.lock().unwrap();
    sweep_expired(&mut sessions);
    let session = sessions
        .get(session_id)
        .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))?;
    Ok(session.messages.clone())
}

/// Drop a session. A reply still "typing" for it is abandoned silently.
pub fn end_session(state: &Arc<AppState>, session_id: &str) -> Result<(), AppError> {
    let mut sessions = state.sessions.lock().unwrap();
    if sessions.remove(session_id).is_none() {
        return Err(AppError::SessionNotFound(session_id.to_string()));
    }
    tracing::info!(session_id, "chat session ended");
    Ok(())
}

pub fn session_summaries(state: &Arc<AppState>) -> Vec<SessionSummary> {
    let mut sessions = state.sessions.lock().unwrap();
    sweep_expired(&mut sessions);
    let mut summaries: Vec<SessionSummary> = sessions
        .values()
        .map(|s| SessionSummary {
            id: s.id.clone(),
            message_count: s.messages.len(),
            last_message: s.messages.last().map(|m| m.text.clone()),
            reply_pending: s.reply_pending,
            last_activity: s.last_activity.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();
    summaries.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
    summaries
}

fn schedule_bot_reply(state: &Arc<AppState>, session_id: String, reply: String, delay_ms: u64) {
    let state = Arc::clone(state);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let bot_message = ChatMessage::from_bot(&reply);
        let delivered = {
            let mut sessions = state.sessions.lock().unwrap();
            match sessions.get_mut(&session_id) {
                Some(session) => {
                    session.messages.push(bot_message.clone());
                    session.reply_pending = false;
                    true
                }
                None => false,
            }
        };

        if delivered {
            broadcast(&state, &session_id, &bot_message);
        } else {
            // Session ended while the reply was typing; nothing to deliver.
            tracing::info!(session_id = %session_id, "dropping reply for ended session");
        }
    });
}

fn broadcast(state: &Arc<AppState>, session_id: &str, message: &ChatMessage) {
    // Ignore send errors; no SSE subscriber is listening.
    let _ = state.events_tx.send(ChatEvent {
        session_id: session_id.to_string(),
        message: message.clone(),
    });
}

fn typing_delay_ms(config: &AppConfig) -> u64 {
    if config.typing_delay_max_ms <= config.typing_delay_min_ms {
        config.typing_delay_min_ms
    } else {
        rand::thread_rng().gen_range(config.typing_delay_min_ms..=config.typing_delay_max_ms)
    }
}

fn sweep_expired(sessions: &mut HashMap<String, ChatSession>) {
    let now = Utc::now().naive_utc();
    sessions.retain(|_, s| !s.is_expired(now));
}
