use crate::transfer::TransferService;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Ledger entry point; the only path to account state
    pub transfer_service: TransferService,
}

impl AppState {
    pub fn new(transfer_service: TransferService) -> Self {
        Self { transfer_service }
    }
}

#[cfg(test)]
impl AppState {
    /// Owais/1234/10000.00 and Danish/5678/5000.00
    pub(crate) fn for_test() -> std::sync::Arc<Self> {
        use crate::account::{Account, AccountStore};
        use crate::money::Money;

        let store = AccountStore::new([
            Account::new("Owais", "1234", Money::from_minor_units(1_000_000)).unwrap(),
            Account::new("Danish", "5678", Money::from_minor_units(500_000)).unwrap(),
        ])
        .unwrap();
        std::sync::Arc::new(Self::new(TransferService::new(std::sync::Arc::new(store))))
    }
}
