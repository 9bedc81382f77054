//! Account handlers

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::super::state::AppState;
use super::super::types::{ApiResult, AuthRequest, AuthResponseData, ok};

/// Authenticate by name/PIN
///
/// POST /authenticate
#[utoipa::path(
    post,
    path = "/authenticate",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Authenticated, returns balance", body = AuthResponseData, content_type = "application/json"),
        (status = 401, description = "Invalid name or PIN"),
        (status = 422, description = "Malformed request body")
    ),
    tag = "Account"
)]
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> ApiResult<AuthResponseData> {
    let Json(req) = payload?;
    let snapshot = state
        .transfer_service
        .authenticate(&req.name, &req.pin_number)?;
    ok(AuthResponseData {
        name: snapshot.id,
        balance: snapshot.balance,
    })
}
