//! TransferService - validates and sequences a transfer
//!
//! # Check order
//!
//! ```text
//! authenticate sender → recipient exists → amount > 0 → ApplyTransfer (funds)
//! ```
//!
//! The order fixes error precedence: a bad PIN is reported as `Unauthorized`
//! even when the recipient is unknown or the funds are short.
//!
//! The amount is validated here and again inside `AccountStore::apply_transfer`,
//! which holds the locks and therefore never trusts its caller.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::TransferError;
use super::types::{TransferReceipt, TransferRequest};
use crate::account::{AccountSnapshot, AccountStore};
use crate::money::Money;

#[derive(Debug, Clone)]
pub struct TransferService {
    store: Arc<AccountStore>,
}

impl TransferService {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self { store }
    }

    /// Read-only access for balance views
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Authenticate by name/PIN and return the current balance.
    pub fn authenticate(&self, name: &str, pin: &str) -> Result<AccountSnapshot, TransferError> {
        match self.store.authenticate(name, pin) {
            Ok(snapshot) => {
                tracing::debug!(account = %name, "authenticated");
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(account = %name, reason = %e, "authentication rejected");
                Err(e.into())
            }
        }
    }

    /// Execute a transfer. A rejected transfer leaves every balance unchanged.
    pub fn transfer(&self, req: &TransferRequest) -> Result<TransferReceipt, TransferError> {
        let result = self.execute(req);
        match &result {
            Ok(receipt) => tracing::info!(
                sender = %req.sender_id,
                recipient = %req.recipient_id,
                amount = %req.amount,
                sender_balance = %receipt.sender_balance,
                recipient_balance = %receipt.recipient_balance,
                "transfer committed"
            ),
            Err(e) => tracing::warn!(
                sender = %req.sender_id,
                recipient = %req.recipient_id,
                amount = %req.amount,
                code = e.code(),
                "transfer rejected"
            ),
        }
        result
    }

    fn execute(&self, req: &TransferRequest) -> Result<TransferReceipt, TransferError> {
        // 1. Sender credentials
        self.store
            .authenticate(&req.sender_id, &req.sender_pin)
            .map_err(TransferError::from)?;

        // 2. Recipient lookup
        if !self.store.exists(&req.recipient_id) {
            return Err(TransferError::RecipientNotFound);
        }

        // 3. Amount
        let amount = validate_amount(req.amount)?;

        // 4. Funds check + mutation under the store's locks
        let (sender_balance, recipient_balance) =
            self.store
                .apply_transfer(&req.sender_id, &req.recipient_id, amount)?;

        // 5. Receipt
        Ok(TransferReceipt {
            message: format!(
                "Successfully transferred {} from {} to {}.",
                amount, req.sender_id, req.recipient_id
            ),
            sender_balance,
            recipient_balance,
        })
    }
}

/// Positive, representable in minor units, no sub-cent precision.
fn validate_amount(amount: Decimal) -> Result<Money, TransferError> {
    if amount <= Decimal::ZERO {
        return Err(TransferError::InvalidAmount);
    }
    Money::from_decimal(amount).map_err(|_| TransferError::InvalidAmount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;

    fn service() -> TransferService {
        let store = AccountStore::new([
            Account::new("Owais", "1234", Money::from_minor_units(1_000_000)).unwrap(),
            Account::new("Danish", "5678", Money::from_minor_units(500_000)).unwrap(),
        ])
        .unwrap();
        TransferService::new(Arc::new(store))
    }

    fn req(pin: &str, recipient: &str, amount: Decimal) -> TransferRequest {
        TransferRequest::new("Owais", pin, recipient, amount)
    }

    #[test]
    fn test_authenticate() {
        let svc = service();
        let snap = svc.authenticate("Owais", "1234").unwrap();
        assert_eq!(snap.balance.to_string(), "10000.00");
        assert_eq!(
            svc.authenticate("Owais", "9999"),
            Err(TransferError::Unauthorized)
        );
        assert_eq!(
            svc.authenticate("Ghost", "1234"),
            Err(TransferError::Unauthorized)
        );
    }

    #[test]
    fn test_receipt_message() {
        let receipt = service()
            .transfer(&req("1234", "Danish", Decimal::new(2000, 0)))
            .unwrap();
        assert_eq!(
            receipt.message,
            "Successfully transferred 2000.00 from Owais to Danish."
        );
        assert_eq!(receipt.sender_balance.to_string(), "8000.00");
        assert_eq!(receipt.recipient_balance.to_string(), "7000.00");
    }

    #[test]
    fn test_auth_precedes_everything() {
        let svc = service();
        // Unknown recipient, negative amount, insufficient funds: still Unauthorized
        assert_eq!(
            svc.transfer(&req("0000", "Ghost", Decimal::new(-5, 0))),
            Err(TransferError::Unauthorized)
        );
        assert_eq!(
            svc.transfer(&req("0000", "Danish", Decimal::new(99_999, 0))),
            Err(TransferError::Unauthorized)
        );
    }

    #[test]
    fn test_recipient_precedes_amount() {
        assert_eq!(
            service().transfer(&req("1234", "Ghost", Decimal::ZERO)),
            Err(TransferError::RecipientNotFound)
        );
    }

    #[test]
    fn test_amount_precedes_funds() {
        assert_eq!(
            service().transfer(&req("1234", "Danish", Decimal::new(-99_999, 0))),
            Err(TransferError::InvalidAmount)
        );
    }

    #[test]
    fn test_invalid_amounts() {
        let svc = service();
        for amount in [
            Decimal::ZERO,
            Decimal::new(-5, 0),
            Decimal::new(1, 3), // 0.001, below one cent
        ] {
            assert_eq!(
                svc.transfer(&req("1234", "Danish", amount)),
                Err(TransferError::InvalidAmount),
                "amount {}",
                amount
            );
        }
    }

    #[test]
    fn test_fractional_amount() {
        let receipt = service()
            .transfer(&req("1234", "Danish", Decimal::new(1050, 2)))
            .unwrap();
        assert_eq!(receipt.sender_balance.to_string(), "9989.50");
        assert_eq!(receipt.recipient_balance.to_string(), "5010.50");
    }

    #[test]
    fn test_self_transfer_permitted() {
        let receipt = service()
            .transfer(&TransferRequest::new(
                "Owais",
                "1234",
                "Owais",
                Decimal::new(100, 0),
            ))
            .unwrap();
        assert_eq!(receipt.sender_balance, receipt.recipient_balance);
        assert_eq!(receipt.sender_balance.to_string(), "10000.00");
    }
}
