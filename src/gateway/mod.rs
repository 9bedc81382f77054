//! HTTP gateway
//!
//! Thin boundary over [`crate::transfer::TransferService`]: routing, payload
//! parsing and error-to-status mapping. No ledger logic lives here.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::transfer::TransferService;
use state::AppState;

/// Build the complete router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/api/v1/health", get(handlers::health_check))
        .route("/authenticate", post(handlers::authenticate))
        .route("/bank-transfer", post(handlers::bank_transfer))
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Serve until Ctrl+C
pub async fn run_server(config: &GatewayConfig, service: TransferService) -> Result<()> {
    let app = router(Arc::new(AppState::new(service)));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.with_context(|| {
        format!(
            "Failed to bind to {} (port {} may already be in use)",
            addr, config.port
        )
    })?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("Swagger UI at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Keep serving without a shutdown hook
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
