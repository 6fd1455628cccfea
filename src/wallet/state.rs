use crate::types::Amount;

/// The wallet aggregate state: just the current balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletState {
    pub balance: Amount,
}

impl WalletState {
    /// Returns the state with `amount` added to the balance.
    pub const fn add_amount(self, amount: Amount) -> Self {
        Self {
            balance: self.balance + amount,
        }
    }

    /// Returns the state with `amount` taken from the balance.
    pub const fn sub_amount(self, amount: Amount) -> Self {
        Self {
            balance: self.balance - amount,
        }
    }
}
