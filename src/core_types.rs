//! Core types used throughout the ledger

/// Account ID - the human-readable account name.
///
/// # Constraints:
/// - **Immutable**: Once an account is seeded, its id NEVER changes
/// - **Unique**: Used as the key of the account map
/// - **Ordered**: Lexicographic order defines the lock acquisition order
pub type AccountId = String;

/// Number of decimal places carried by [`crate::money::Money`].
pub const MONEY_DECIMALS: u32 = 2;
