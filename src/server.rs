//! HTTP listener and routing.

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api;
use crate::config::Config;
use crate::state::AppState;

/// Build the relay router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/market/{*endpoint}", get(api::market_relay))
        .route("/api/aster/{*endpoint}", get(api::aster_relay))
        .route("/api/llm", post(api::llm_relay))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
pub async fn run(config: Config) -> Result<()> {
    let state = Arc::new(AppState::new(&config)?);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(
        "Aster credentials: {}",
        if state.aster.has_credentials() { "configured" } else { "missing" }
    );
    info!("LLM providers with keys: {:?}", state.llm.providers().configured());
    info!("✅ Relay running on port {} (http://{})", config.port, addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
