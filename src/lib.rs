//! An in-memory wallet ledger.
//!
//! A [`Wallet`] holds a balance that never goes below zero and an append-only history of every change,
//! each [`Entry`] stamped by an injected [`Clock`]. Changes go through the [`Aggregate`] seam: a
//! [`WalletCommand`] is validated against the current state and turned into [`WalletEvent`]s, which are then
//! applied and recorded.

pub use crate::aggregate::Aggregate;
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::entry::Entry;
pub use crate::handler::EventHandler;
pub use crate::state::AggregateState;
pub use crate::wallet::{Wallet, WalletCommand, WalletConfig, WalletError, WalletEvent, WalletState};

mod aggregate;
mod clock;
mod entry;
mod handler;
mod state;
mod wallet;

pub mod types;
