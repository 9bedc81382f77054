//! Health check and welcome handlers

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use utoipa::ToSchema;

use super::super::types::ApiResponse;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Welcome response data
#[derive(serde::Serialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to the Simple Banking API!")]
    pub message: String,
    /// Crate version and git hash
    #[schema(example = "0.1.0 (a1b2c3d)")]
    pub version: String,
}

/// Welcome endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = WelcomeResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn welcome() -> Json<ApiResponse<WelcomeResponse>> {
    Json(ApiResponse::success(WelcomeResponse {
        message: "Welcome to the Simple Banking API!".to_string(),
        version: format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH")),
    }))
}

/// Health check endpoint
///
/// The ledger is in-memory with no external dependencies, so a response
/// at all means healthy.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    Json(ApiResponse::success(HealthResponse { timestamp_ms }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_timestamp() {
        let Json(resp) = health_check().await;
        assert_eq!(resp.code, 0);
        assert!(resp.data.unwrap().timestamp_ms > 0);
    }

    #[tokio::test]
    async fn test_welcome_message() {
        let Json(resp) = welcome().await;
        let data = resp.data.unwrap();
        assert_eq!(data.message, "Welcome to the Simple Banking API!");
        assert!(data.version.starts_with(env!("CARGO_PKG_VERSION")));
    }
}
