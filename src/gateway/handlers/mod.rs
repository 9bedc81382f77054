//! HTTP handlers
//!
//! Handlers only parse payloads and translate `TransferError` into status
//! codes. All ledger logic lives in `TransferService`.

pub mod account;
pub mod health;
pub mod transfer;

pub use account::authenticate;
pub use health::{HealthResponse, WelcomeResponse, health_check, welcome};
pub use transfer::bank_transfer;
