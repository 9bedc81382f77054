//! Transfer request/result types

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core_types::AccountId;
use crate::money::Money;

/// One transfer call. Not persisted.
///
/// `amount` is a signed decimal so that zero and negative inputs reach
/// validation instead of being rejected by the type.
#[derive(Clone)]
pub struct TransferRequest {
    pub sender_id: AccountId,
    pub sender_pin: String,
    pub recipient_id: AccountId,
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(
        sender_id: impl Into<AccountId>,
        sender_pin: impl Into<String>,
        recipient_id: impl Into<AccountId>,
        amount: Decimal,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            sender_pin: sender_pin.into(),
            recipient_id: recipient_id.into(),
            amount,
        }
    }
}

impl fmt::Debug for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferRequest")
            .field("sender_id", &self.sender_id)
            .field("sender_pin", &"***")
            .field("recipient_id", &self.recipient_id)
            .field("amount", &self.amount)
            .finish()
    }
}

/// Successful transfer outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    /// Human-readable confirmation
    pub message: String,
    pub sender_balance: Money,
    pub recipient_balance: Money,
}
