use thiserror::Error;

use crate::types::Amount;

/// Reasons a wallet refuses to open or to change its balance. A refused request leaves the wallet as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WalletError {
    /// A negative amount was requested, or a negative opening balance was not allowed.
    #[error("Amount must be zero or greater, got {amount}")]
    InvalidArgument { amount: Amount },

    /// The decrease would take the balance below zero.
    #[error("Insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: Amount, requested: Amount },

    /// The increase would not fit in an [`Amount`].
    #[error("Adding {amount} to a balance of {balance} overflows")]
    Overflow { balance: Amount, amount: Amount },
}
