//! Transfer orchestration
//!
//! [`TransferService`] authenticates the sender, validates the request and
//! delegates the atomic balance move to [`crate::account::AccountStore`].
//! It never touches a balance directly.

pub mod error;
pub mod service;
pub mod types;

// Re-exports for convenience
pub use error::TransferError;
pub use service::TransferService;
pub use types::{TransferReceipt, TransferRequest};
