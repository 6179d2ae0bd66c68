//! Router assembly and server lifecycle.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::infrastructure::repository::{InMemoryMessageStore, InMemoryParticipantRegistry};
use crate::ui::{handler, signal, state::AppState};
use crate::usecase::ExpireParticipantsUseCase;

/// Build the application router over the given state.
///
/// Kept separate from [`run_server`] so tests can serve the same router on an
/// ephemeral port.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handler::health_check))
        .route(
            "/participants",
            post(handler::join)
                .get(handler::list_participants)
                .delete(handler::leave),
        )
        .route(
            "/messages",
            post(handler::send_message).get(handler::fetch_messages),
        )
        .route("/status", post(handler::heartbeat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the chat room server until a shutdown signal arrives.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        participants: Arc::new(InMemoryParticipantRegistry::new()),
        messages: Arc::new(InMemoryMessageStore::new()),
    });

    spawn_staleness_sweeper(state.clone(), config.sweep_interval(), config.stale_after());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Chat room server listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(signal::shutdown_signal())
        .await?;

    Ok(())
}

/// Periodically expire participants whose heartbeat went quiet.
///
/// Each expiry emits one leave announcement through the usecase.
fn spawn_staleness_sweeper(state: Arc<AppState>, interval: Duration, stale_after: Duration) {
    let usecase = ExpireParticipantsUseCase::new(state.participants.clone(), state.messages.clone());

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match usecase.execute(stale_after).await {
                Ok(removed) if !removed.is_empty() => {
                    tracing::info!("Expired {} stale participant(s)", removed.len());
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Staleness sweep failed: {}", e);
                }
            }
        }
    });
}
