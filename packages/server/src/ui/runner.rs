//! Router construction and server lifecycle.

use std::{future::Future, io, sync::Arc};

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{PresenceConfig, ServerConfig};

use super::{
    handler::{
        delete_message, edit_message, get_messages, health_check, list_participants,
        post_message, refresh_status, register_participant,
    },
    signal::shutdown_signal,
    state::AppState,
    sweeper::spawn_presence_sweeper,
};

/// Build the HTTP router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/participants",
            post(register_participant).get(list_participants),
        )
        .route("/messages", post(post_message).get(get_messages))
        .route("/messages/{id}", put(edit_message).delete(delete_message))
        .route("/status", post(refresh_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> io::Result<()> {
    let state = Arc::new(AppState::in_memory());

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Chat room server listening on {}", listener.local_addr()?);
    tracing::info!(
        "Presence sweep every {:?}, stale after {:?}",
        config.presence.sweep_interval,
        config.presence.stale_after
    );

    serve(listener, state, config.presence, shutdown_signal()).await
}

/// Serve on `listener` with the presence sweeper running alongside.
///
/// The sweeper is stopped once `shutdown` resolves and the server drains.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    presence: PresenceConfig,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let sweeper = spawn_presence_sweeper(state.clone(), presence);

    let result = axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await;

    sweeper.abort();
    tracing::info!("Server stopped");
    result
}
