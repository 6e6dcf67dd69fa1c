use chrono::{Duration, NaiveDateTime, Utc};
use serde::Serialize;

use crate::models::ChatMessage;

/// One widget conversation. Lives in memory only; dropped on expiry.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    pub reply_pending: bool,
    pub last_activity: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl ChatSession {
    pub fn new(ttl_minutes: i64) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            messages: Vec::new(),
            reply_pending: false,
            last_activity: now,
            expires_at: now + Duration::minutes(ttl_minutes),
        }
    }

    pub fn touch(&mut self, ttl_minutes: i64) {
        let now = Utc::now().naive_utc();
        self.last_activity = now;
        self.expires_at = now + Duration::minutes(ttl_minutes);
    }

    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.expires_at <= now
    }
}

/// Transcript append, broadcast to SSE subscribers.
#[derive(Debug, Clone, Serialize)]
pub struct ChatEvent {
    pub session_id: String,
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: String,
    pub message_count: usize,
    pub last_message: Option<String>,
    pub reply_pending: bool,
    pub last_activity: String,
}
