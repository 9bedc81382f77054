//! Account store error types

use thiserror::Error;

use crate::core_types::AccountId;

/// Authentication failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Account not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Balance adjustment failures. None of these mutate state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Account not found: {0}")]
    NotFound(AccountId),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Balance would overflow")]
    Overflow,
}

/// Account construction and seeding failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account id cannot be empty")]
    EmptyId,

    #[error("PIN cannot be empty for account {0}")]
    EmptyPin(AccountId),

    #[error("Duplicate account id: {0}")]
    DuplicateId(AccountId),
}
