//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError`: Error response carrying the HTTP status
//! - `error_codes`: Standard error code constants
//! - Response DTOs

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::money::Money;
use crate::transfer::TransferError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

pub mod error_codes {
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INVALID_AMOUNT: i32 = 1002;
    pub const INSUFFICIENT_FUNDS: i32 = 1003;

    // Auth errors (2xxx)
    pub const UNAUTHORIZED: i32 = 2001;

    // Resource errors (4xxx)
    pub const RECIPIENT_NOT_FOUND: i32 = 4001;
    pub const ACCOUNT_NOT_FOUND: i32 = 4002;
    pub const BALANCE_OVERFLOW: i32 = 4221;
}

// ============================================================================
// ApiError
// ============================================================================

/// Error half of [`ApiResult`]. Rendered as `ApiResponse<()>` with `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Wrap `data` in a success envelope
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }
}

impl From<TransferError> for ApiError {
    fn from(e: TransferError) -> Self {
        let status =
            StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = match e {
            TransferError::Unauthorized => error_codes::UNAUTHORIZED,
            TransferError::RecipientNotFound => error_codes::RECIPIENT_NOT_FOUND,
            TransferError::InvalidAmount => error_codes::INVALID_AMOUNT,
            TransferError::InsufficientFunds => error_codes::INSUFFICIENT_FUNDS,
            TransferError::AccountNotFound(_) => error_codes::ACCOUNT_NOT_FOUND,
            TransferError::Overflow => error_codes::BALANCE_OVERFLOW,
        };
        Self::new(status, code, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Malformed payloads: missing fields, wrong types, bad JSON
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            error_codes::INVALID_PARAMETER,
            rejection.body_text(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.code, self.msg);
        (self.status, Json(body)).into_response()
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// `/authenticate` response data
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponseData {
    #[schema(example = "Owais")]
    pub name: String,
    #[schema(value_type = String, example = "10000.00")]
    pub balance: Money,
}

/// `/bank-transfer` response data
#[derive(Debug, Serialize, ToSchema)]
pub struct TransferResponseData {
    #[schema(example = "Successfully transferred 2000.00 from Owais to Danish.")]
    pub message: String,
    #[schema(value_type = String, example = "8000.00")]
    pub sender_new_balance: Money,
    #[schema(value_type = String, example = "7000.00")]
    pub recipient_new_balance: Money,
}
