use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub admin_token: String,
    pub typing_delay_min_ms: u64,
    pub typing_delay_max_ms: u64,
    pub session_ttl_minutes: i64,
    pub responder_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            typing_delay_min_ms: env::var("TYPING_DELAY_MIN_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            typing_delay_max_ms: env::var("TYPING_DELAY_MAX_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            responder_seed: env::var("RESPONDER_SEED").ok().and_then(|v| v.parse().ok()),
        }
    }
}
