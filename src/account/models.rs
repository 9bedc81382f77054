//! Account entity and read-only views

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{AccountError, StoreError};
use crate::core_types::AccountId;
use crate::money::Money;

/// A ledger entry identified by name, guarded by a PIN.
///
/// # Invariants (enforced by private fields):
/// - `id` and `pin` are non-empty and immutable after creation
/// - `balance` is `Money`, so it can never be negative
/// - Balance mutations are crate-private and return `Result`;
///   a failed mutation leaves the balance unchanged
#[derive(Clone)]
pub struct Account {
    id: AccountId,
    pin: String,
    balance: Money,
}

impl Account {
    pub fn new(
        id: impl Into<AccountId>,
        pin: impl Into<String>,
        balance: Money,
    ) -> Result<Self, AccountError> {
        let id = id.into();
        let pin = pin.into();
        if id.trim().is_empty() {
            return Err(AccountError::EmptyId);
        }
        if pin.is_empty() {
            return Err(AccountError::EmptyPin(id));
        }
        Ok(Self { id, pin, balance })
    }

    #[inline(always)]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline(always)]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Exact match, no normalization.
    #[inline(always)]
    pub fn pin_matches(&self, pin: &str) -> bool {
        self.pin == pin
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id.clone(),
            balance: self.balance,
        }
    }

    /// Remove funds from the balance.
    ///
    /// # Errors
    /// - `InsufficientFunds` if balance < amount
    pub(crate) fn debit(&mut self, amount: Money) -> Result<Money, StoreError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(StoreError::InsufficientFunds)?;
        Ok(self.balance)
    }

    /// Add funds to the balance.
    ///
    /// # Errors
    /// - `Overflow` if the result does not fit
    pub(crate) fn credit(&mut self, amount: Money) -> Result<Money, StoreError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(StoreError::Overflow)?;
        Ok(self.balance)
    }
}

// PIN stays out of logs and panic messages
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("pin", &"***")
            .field("balance", &self.balance)
            .finish()
    }
}

/// Read-only copy of an account, safe to hand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSnapshot {
    pub id: AccountId,
    pub balance: Money,
}

/// Initial account record, as written in the config file.
#[derive(Clone, Serialize, Deserialize)]
pub struct AccountSeed {
    pub id: AccountId,
    pub pin: String,
    pub balance: Money,
}

impl fmt::Debug for AccountSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountSeed")
            .field("id", &self.id)
            .field("pin", &"***")
            .field("balance", &self.balance)
            .finish()
    }
}

impl TryFrom<AccountSeed> for Account {
    type Error = AccountError;

    fn try_from(seed: AccountSeed) -> Result<Self, Self::Error> {
        Account::new(seed.id, seed.pin, seed.balance)
    }
}
