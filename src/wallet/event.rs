use serde::{Deserialize, Serialize};

use crate::types::Amount;

/// Facts produced by validated wallet commands.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletEvent {
    /// The wallet was opened; recorded as the seed entry.
    Opened { initial_balance: Amount },
    /// The balance went up by `amount`.
    Increased { amount: Amount },
    /// The balance went down by `amount`.
    Decreased { amount: Amount },
}

impl WalletEvent {
    /// Magnitude of the balance change carried by the event.
    pub const fn delta(&self) -> Amount {
        match self {
            Self::Opened { initial_balance } => *initial_balance,
            Self::Increased { amount } | Self::Decreased { amount } => *amount,
        }
    }
}
