use typed_builder::TypedBuilder;

use crate::clock::{Clock, SystemClock};
use crate::handler::EventHandler;
use crate::types::Amount;

/// Everything needed to open a [`crate::Wallet`].
///
/// ```
/// use wallet_ledger::{Wallet, WalletConfig};
///
/// let config = WalletConfig::builder().initial_balance(10).build();
/// let wallet = Wallet::with_config(config).unwrap();
/// assert_eq!(wallet.balance(), 10);
/// ```
#[derive(TypedBuilder)]
pub struct WalletConfig {
    /// Balance the wallet opens with. It is also recorded as the delta of the seed entry.
    pub(crate) initial_balance: Amount,
    /// When `false` (the default) a negative opening balance is refused with
    /// [`crate::WalletError::InvalidArgument`]. Setting it to `true` accepts any opening balance.
    #[builder(default)]
    pub(crate) allow_negative_opening_balance: bool,
    /// Time source for entry timestamps. Defaults to the system clock.
    #[builder(default = Box::new(SystemClock))]
    pub(crate) clock: Box<dyn Clock>,
    /// Handlers notified of every recorded entry, in this order.
    #[builder(default)]
    pub(crate) event_handlers: Vec<Box<dyn EventHandler>>,
}
