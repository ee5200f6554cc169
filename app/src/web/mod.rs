//! Axum web server — REST endpoints + WebSocket swing streaming.

pub mod routes;
pub mod ws;

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

use crate::config::SwingforgeConfig;

/// Shared state for the web layer.
pub struct WebState {
    pub settings: SwingforgeConfig,
    pub ws_count: AtomicU64,
}

/// Run the web server. Blocks until ctrl-c.
pub async fn serve(addr: SocketAddr, settings: SwingforgeConfig) -> anyhow::Result<()> {
    let state = Arc::new(WebState {
        settings,
        ws_count: AtomicU64::new(0),
    });

    let app = Router::new()
        .route("/api/clubs", get(routes::get_clubs))
        .route("/api/swing", get(routes::get_swing))
        .route("/api/ws", get(ws::ws_upgrade))
        .layer(CorsLayer::permissive())
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    tracing::info!("web server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down...");
        })
        .await?;

    Ok(())
}
