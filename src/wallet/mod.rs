use std::fmt::{Debug, Formatter};

use uuid::Uuid;

pub use command::WalletCommand;
pub use config::WalletConfig;
pub use error::WalletError;
pub use event::WalletEvent;
pub use state::WalletState;

use crate::aggregate::Aggregate;
use crate::clock::Clock;
use crate::entry::{newest_first, Entry};
use crate::handler::EventHandler;
use crate::state::AggregateState;
use crate::types::Amount;

mod command;
mod config;
mod error;
mod event;
mod state;

/// A single account holding a non-negative balance and the history of every change made to it.
///
/// The history is append-only. It always starts with a seed entry recording the opening balance, and the
/// latest entry always carries the current balance.
///
/// ```
/// use wallet_ledger::Wallet;
///
/// let mut wallet = Wallet::new(10).unwrap();
/// wallet.increase_balance(100).unwrap();
/// wallet.decrease_balance(20).unwrap();
///
/// assert_eq!(wallet.balance(), 90);
/// assert_eq!(wallet.history().len(), 3);
/// ```
pub struct Wallet {
    state: AggregateState<WalletState>,
    history: Vec<Entry>,
    clock: Box<dyn Clock>,
    event_handlers: Vec<Box<dyn EventHandler>>,
}

impl Wallet {
    /// Opens a wallet with the given balance, using the system clock and no event handlers.
    ///
    /// # Errors
    ///
    /// Fails with [`WalletError::InvalidArgument`] if `initial_balance` is negative.
    pub fn new(initial_balance: Amount) -> Result<Self, WalletError> {
        Self::with_config(WalletConfig::builder().initial_balance(initial_balance).build())
    }

    /// Opens a wallet from a [`WalletConfig`] and records the seed entry.
    ///
    /// # Errors
    ///
    /// Fails with [`WalletError::InvalidArgument`] if the opening balance is negative and the config does
    /// not allow it.
    pub fn with_config(config: WalletConfig) -> Result<Self, WalletError> {
        let WalletConfig {
            initial_balance,
            allow_negative_opening_balance,
            clock,
            event_handlers,
        } = config;

        if initial_balance < 0 && !allow_negative_opening_balance {
            tracing::debug!(initial_balance, "refusing to open a wallet with a negative balance");
            return Err(WalletError::InvalidArgument {
                amount: initial_balance,
            });
        }

        let mut wallet = Self {
            state: AggregateState::new(),
            history: vec![],
            clock,
            event_handlers,
        };

        wallet.record(vec![WalletEvent::Opened { initial_balance }]);

        Ok(wallet)
    }

    /// Adds `amount` to the balance and records it.
    ///
    /// # Errors
    ///
    /// [`WalletError::InvalidArgument`] if `amount` is negative, [`WalletError::Overflow`] if the new
    /// balance does not fit. The wallet is left untouched on error.
    pub fn increase_balance(&mut self, amount: Amount) -> Result<(), WalletError> {
        self.handle_command(WalletCommand::Increase { amount })
    }

    /// Takes `amount` away from the balance and records it.
    ///
    /// # Errors
    ///
    /// [`WalletError::InvalidArgument`] if `amount` is negative, [`WalletError::InsufficientFunds`] if the
    /// balance would drop below zero. The wallet is left untouched on error.
    pub fn decrease_balance(&mut self, amount: Amount) -> Result<(), WalletError> {
        self.handle_command(WalletCommand::Decrease { amount })
    }

    /// Validates the command against the current balance, then applies and records the resulting events.
    ///
    /// # Errors
    ///
    /// Whatever [`Aggregate::handle_command`] refuses the command with. Nothing is recorded in that case.
    pub fn handle_command(&mut self, command: WalletCommand) -> Result<(), WalletError> {
        let events = <Self as Aggregate>::handle_command(self.state.inner(), command).map_err(|error| {
            tracing::debug!({
                wallet_id = %self.state.id(),
                command = ?command,
                error = %error,
            }, "wallet command refused");
            error
        })?;

        self.record(events);
        Ok(())
    }

    /// Current balance.
    pub fn balance(&self) -> Amount {
        self.state.inner().balance
    }

    /// Returns a snapshot of the history, most recent entry first.
    ///
    /// Entries are ordered by timestamp, descending. Entries sharing a timestamp are ordered by reverse
    /// insertion, so the last recorded one comes first.
    pub fn history(&self) -> Vec<Entry> {
        tracing::info!(
            wallet_id = %self.state.id(),
            entries = self.history.len(),
            "listing wallet history, newest first"
        );
        newest_first(&self.history)
    }

    /// The entry recorded last. Its resulting balance is the current balance.
    pub fn latest_entry(&self) -> &Entry {
        self.history
            .last()
            .expect("a wallet history always holds at least the seed entry")
    }

    /// Number of recorded entries, the seed entry included.
    pub fn entry_count(&self) -> usize {
        self.history.len()
    }

    /// Unique identifier of this wallet.
    pub const fn id(&self) -> &Uuid {
        self.state.id()
    }

    fn record(&mut self, events: Vec<WalletEvent>) {
        let timestamp = self.clock.now();

        for event in events {
            let sequence_number = self.state.next_sequence_number();
            let state = <Self as Aggregate>::apply_event(*self.state.inner(), event);
            self.state.set_inner(state);

            let entry = Entry {
                timestamp,
                delta: event.delta(),
                resulting_balance: state.balance,
                sequence_number,
            };

            tracing::debug!(
                wallet_id = %self.state.id(),
                sequence_number,
                delta = entry.delta,
                balance = entry.resulting_balance,
                "wallet entry recorded"
            );

            // Handlers only ever see entries already in the history.
            self.history.push(entry);
            let entry = &self.history[self.history.len() - 1];

            for event_handler in &self.event_handlers {
                let span = tracing::debug_span!(
                    "wallet.event_handler",
                    aggregate = <Self as Aggregate>::NAME,
                    wallet_id = %self.state.id(),
                    sequence_number,
                    event_handler = event_handler.name()
                );
                let _e = span.enter();

                event_handler.handle(entry);
            }
        }
    }
}

impl Aggregate for Wallet {
    const NAME: &'static str = "wallet";
    type State = WalletState;
    type Command = WalletCommand;
    type Event = WalletEvent;
    type Error = WalletError;

    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            WalletCommand::Increase { amount } => {
                ensure_non_negative(amount)?;
                if state.balance.checked_add(amount).is_none() {
                    return Err(WalletError::Overflow {
                        balance: state.balance,
                        amount,
                    });
                }
                Ok(vec![WalletEvent::Increased { amount }])
            }
            WalletCommand::Decrease { amount } => {
                ensure_non_negative(amount)?;
                match state.balance.checked_sub(amount) {
                    Some(balance) if balance >= 0 => Ok(vec![WalletEvent::Decreased { amount }]),
                    _ => Err(WalletError::InsufficientFunds {
                        balance: state.balance,
                        requested: amount,
                    }),
                }
            }
        }
    }

    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State {
        match payload {
            WalletEvent::Opened { initial_balance } => WalletState {
                balance: initial_balance,
            },
            WalletEvent::Increased { amount } => state.add_amount(amount),
            WalletEvent::Decreased { amount } => state.sub_amount(amount),
        }
    }
}

impl Debug for Wallet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("id", self.state.id())
            .field("balance", &self.balance())
            .field("entries", &self.history.len())
            .field(
                "event_handlers",
                &self.event_handlers.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

fn ensure_non_negative(amount: Amount) -> Result<(), WalletError> {
    if amount < 0 {
        Err(WalletError::InvalidArgument { amount })
    } else {
        Ok(())
    }
}
