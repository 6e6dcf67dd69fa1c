use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One entry in a session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_from_bot: bool,
    pub timestamp: NaiveDateTime,
}

impl ChatMessage {
    pub fn from_user(text: &str) -> Self {
        Self::new(text, false)
    }

    pub fn from_bot(text: &str) -> Self {
        Self::new(text, true)
    }

    fn new(text: &str, is_from_bot: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            is_from_bot,
            timestamp: chrono::Utc::now().naive_utc(),
        }
    }
}
