use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::models::{ChatEvent, ChatSession};
use crate::services::responder::ResponderEngine;

pub struct AppState {
    pub config: AppConfig,
    pub sessions: Mutex<HashMap<String, ChatSession>>,
    pub responder: Box<dyn ResponderEngine>,
    pub events_tx: broadcast::Sender<ChatEvent>,
}
