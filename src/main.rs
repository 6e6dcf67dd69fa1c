use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use cookbot::config::AppConfig;
use cookbot::handlers;
use cookbot::services::responder::{ResponderEngine, ScriptedResponder};
use cookbot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let responder: Box<dyn ResponderEngine> = match config.responder_seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded scripted responder");
            Box::new(ScriptedResponder::with_seed(seed))
        }
        None => Box::new(ScriptedResponder::new()),
    };

    let (events_tx, _) = broadcast::channel(256);

    let state = Arc::new(AppState {
        config: config.clone(),
        sessions: Mutex::new(HashMap::new()),
        responder,
        events_tx,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/chat/session", post(handlers::chat::start_session))
        .route("/api/chat/message", post(handlers::chat::send_message))
        .route(
            "/api/chat/session/:id/messages",
            get(handlers::chat::get_messages),
        )
        .route("/api/chat/events", get(handlers::chat::events_stream))
        .route("/api/admin/status", get(handlers::admin::get_status))
        .route("/api/admin/sessions", get(handlers::admin::get_sessions))
        .route(
            "/api/admin/sessions/:id/end",
            post(handlers::admin::end_session),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
