//! HTTP surface: the Telegram webhook and a liveness probe.
//!
//! The webhook answers as soon as the reply has been handed off, so a slow
//! or failing Telegram API never makes Telegram redeliver the same update.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tracing::{debug, info, warn};

use crate::bot::Dispatcher;
use crate::update::Update;

pub const HEALTH_TEXT: &str = "God’s Eye Bot running — POWERED BY PH03NIX";

// ── Handlers ───────────────────────────────────────────────────────────────────

async fn health() -> &'static str {
    HEALTH_TEXT
}

/// Any syntactically valid JSON is acknowledged; only unparsable bodies are
/// rejected. The content type is not checked.
async fn webhook(State(dispatcher): State<Dispatcher>, body: Bytes) -> StatusCode {
    let value: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejected webhook body that is not JSON: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };
    let update = Update::from_json(&value);

    debug!("Webhook update {:?}", update.update_id);
    dispatcher.process_update(&update);
    StatusCode::OK
}

// ── Router ─────────────────────────────────────────────────────────────────────

/// Build the router with the webhook mounted at `webhook_path`.
pub fn router(webhook_path: &str, dispatcher: Dispatcher) -> Router {
    Router::new()
        .route("/", get(health))
        .route(webhook_path, post(webhook))
        .with_state(dispatcher)
}

/// Serve `app` on `addr` until Ctrl-C or SIGTERM.
pub async fn serve(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("God’s Eye Bot is running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
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

// ── Tests ──────────────────────────────────────────────────────────────────────
