//! Transfer Error Types
//!
//! Caller-facing error kinds. The gateway maps each kind to a status code;
//! the core only guarantees that every condition has a distinct kind.

use thiserror::Error;

use crate::account::{AuthError, StoreError};

/// Transfer error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Invalid name or PIN")]
    Unauthorized,

    #[error("Recipient not found")]
    RecipientNotFound,

    #[error("Transfer amount must be positive")]
    InvalidAmount,

    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Account vanished between lookup and mutation
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Balance would overflow")]
    Overflow,
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::Unauthorized => "UNAUTHORIZED",
            TransferError::RecipientNotFound => "RECIPIENT_NOT_FOUND",
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TransferError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            TransferError::Overflow => "OVERFLOW",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::Unauthorized => 401,
            TransferError::RecipientNotFound | TransferError::AccountNotFound(_) => 404,
            TransferError::InvalidAmount | TransferError::InsufficientFunds => 400,
            TransferError::Overflow => 422,
        }
    }
}

impl From<AuthError> for TransferError {
    fn from(_: AuthError) -> Self {
        // Unknown name and wrong PIN are indistinguishable to the caller
        TransferError::Unauthorized
    }
}

impl From<StoreError> for TransferError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidAmount => TransferError::InvalidAmount,
            StoreError::NotFound(id) => TransferError::AccountNotFound(id),
            StoreError::InsufficientFunds => TransferError::InsufficientFunds,
            StoreError::Overflow => TransferError::Overflow,
        }
    }
}
