//! Gateway types module
//!
//! ## Input Types
//! - [`AuthRequest`], [`BankTransferRequest`]: HTTP request bodies
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`ApiError`] / [`ApiResult`]: Error responses with HTTP status

pub mod request;
pub mod response;

// Re-export commonly used types at module root
pub use request::{AuthRequest, BankTransferRequest};
pub use response::{
    ApiError, ApiResponse, ApiResult, AuthResponseData, TransferResponseData, error_codes, ok,
};
