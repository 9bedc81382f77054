//! PIN Ledger - In-memory account ledger
//!
//! Authenticates users by name/PIN and moves funds between accounts held in
//! memory. Every balance read and write goes through [`AccountStore`], which
//! runs the funds check and both balance mutations of a transfer inside one
//! critical section.
//!
//! # Modules
//!
//! - [`core_types`] - Core type definitions (AccountId)
//! - [`money`] - Fixed-point amount type
//! - [`account`] - Account entity and the store that owns it
//! - [`transfer`] - Transfer validation and sequencing
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`gateway`] - HTTP boundary (axum)

// Core types - must be first!
pub mod core_types;

pub mod account;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod money;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountSeed, AccountSnapshot, AccountStore, AuthError, StoreError};
pub use core_types::AccountId;
pub use money::{Money, MoneyError};
pub use transfer::{TransferError, TransferReceipt, TransferRequest, TransferService};
