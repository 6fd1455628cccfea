use crate::types::Amount;

/// Balance changes a caller can request on a [`crate::Wallet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletCommand {
    /// Adds `amount` to the balance.
    Increase { amount: Amount },
    /// Takes `amount` away from the balance.
    Decrease { amount: Amount },
}
