//! AccountStore - sole owner of account state
//!
//! # Locking discipline
//!
//! The account map itself is immutable after construction (no creation or
//! deletion at runtime), so it needs no lock. Each account sits behind its
//! own `Mutex`:
//!
//! - Reads (`authenticate`, `snapshot`) lock one account
//! - `apply_transfer` locks sender and recipient in lexicographic id order,
//!   then checks funds and mutates both balances while holding both locks
//! - `snapshot_all` locks every account in the same order
//!
//! The fixed order rules out deadlock when two transfers touch the same pair
//! of accounts in opposite directions. The funds check always runs on the
//! value read under the lock, never on an earlier read.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::error::{AccountError, AuthError, StoreError};
use super::models::{Account, AccountSeed, AccountSnapshot};
use crate::core_types::AccountId;
use crate::money::Money;

/// In-memory account store.
#[derive(Debug)]
pub struct AccountStore {
    accounts: HashMap<AccountId, Mutex<Account>>,
}

/// Balances are only written after every check has passed, so a panic inside
/// a critical section cannot leave a half-applied transfer behind.
fn lock(cell: &Mutex<Account>) -> MutexGuard<'_, Account> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AccountStore {
    /// Build a store from a fixed account set.
    ///
    /// # Errors
    /// - `DuplicateId` if two accounts share an id
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Result<Self, AccountError> {
        let mut map = HashMap::new();
        for account in accounts {
            let id = account.id().to_string();
            if map.contains_key(&id) {
                return Err(AccountError::DuplicateId(id));
            }
            map.insert(id, Mutex::new(account));
        }
        Ok(Self { accounts: map })
    }

    /// Build from config seeds, validating each one like [`Account::new`].
    pub fn from_seeds(seeds: impl IntoIterator<Item = AccountSeed>) -> Result<Self, AccountError> {
        let accounts = seeds
            .into_iter()
            .map(Account::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(accounts)
    }

    /// Number of accounts. Fixed after construction.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Look up an account and check its PIN.
    ///
    /// Returns a snapshot, never the record itself.
    pub fn authenticate(&self, id: &str, pin: &str) -> Result<AccountSnapshot, AuthError> {
        let cell = self.accounts.get(id).ok_or(AuthError::NotFound)?;
        let account = lock(cell);
        if !account.pin_matches(pin) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(account.snapshot())
    }

    pub fn exists(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    /// Current balance of one account, or `None` if the id is unknown.
    pub fn snapshot(&self, id: &str) -> Option<AccountSnapshot> {
        self.accounts.get(id).map(|cell| lock(cell).snapshot())
    }

    /// Consistent view of every account, sorted by id.
    pub fn snapshot_all(&self) -> Vec<AccountSnapshot> {
        let mut cells: Vec<(&AccountId, &Mutex<Account>)> = self.accounts.iter().collect();
        cells.sort_by(|a, b| a.0.cmp(b.0));

        // Hold every guard until all snapshots are taken
        let guards: Vec<MutexGuard<'_, Account>> =
            cells.into_iter().map(|(_, cell)| lock(cell)).collect();
        guards.iter().map(|account| account.snapshot()).collect()
    }

    fn cell(&self, id: &str) -> Result<&Mutex<Account>, StoreError> {
        self.accounts
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Atomically debit `sender_id` and credit `recipient_id`.
    ///
    /// Returns `(new_sender_balance, new_recipient_balance)`.
    ///
    /// # Errors
    /// - `InvalidAmount` if amount is zero
    /// - `NotFound` if either id is unknown
    /// - `InsufficientFunds` if the sender balance (read under lock) < amount
    /// - `Overflow` if the recipient balance would not fit
    ///
    /// On error both balances are unchanged.
    pub fn apply_transfer(
        &self,
        sender_id: &str,
        recipient_id: &str,
        amount: Money,
    ) -> Result<(Money, Money), StoreError> {
        if amount.is_zero() {
            return Err(StoreError::InvalidAmount);
        }
        let sender_cell = self.cell(sender_id)?;
        let recipient_cell = self.cell(recipient_id)?;

        if sender_id == recipient_id {
            // Single lock; debit then credit the same record nets to zero
            let mut account = lock(sender_cell);
            account.debit(amount)?;
            let balance = account.credit(amount)?;
            return Ok((balance, balance));
        }

        let (mut sender, mut recipient) = if sender_id < recipient_id {
            let sender = lock(sender_cell);
            let recipient = lock(recipient_cell);
            (sender, recipient)
        } else {
            let recipient = lock(recipient_cell);
            let sender = lock(sender_cell);
            (sender, recipient)
        };

        // Validate both legs before touching either balance
        if sender.balance() < amount {
            return Err(StoreError::InsufficientFunds);
        }
        if recipient.balance().checked_add(amount).is_none() {
            return Err(StoreError::Overflow);
        }

        let sender_balance = sender.debit(amount)?;
        let recipient_balance = recipient.credit(amount)?;
        Ok((sender_balance, recipient_balance))
    }
}
