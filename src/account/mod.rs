//! Account management module
//!
//! In-memory account records and the store that owns them.

pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use error::{AccountError, AuthError, StoreError};
pub use models::{Account, AccountSeed, AccountSnapshot};
pub use store::AccountStore;
