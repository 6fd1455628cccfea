use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Amount, SequenceNumber};

/// An `Entry` is one immutable line of a wallet history: when the balance changed, by how much, and what
/// it became.
///
/// The direction of the change is not recorded. `delta` is always the magnitude of the change, whatever
/// operation produced it; for the seed entry it is the opening balance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The timestamp of when the change was applied.
    pub timestamp: DateTime<Utc>,
    /// Magnitude of the change.
    pub delta: Amount,
    /// Balance immediately after the change.
    pub resulting_balance: Amount,
    /// Position of the entry in its wallet, the seed entry being 1.
    pub sequence_number: SequenceNumber,
}

/// Returns a copy of `entries` (given in insertion order) sorted newest first.
///
/// Entries sharing a timestamp come out in reverse insertion order.
pub(crate) fn newest_first(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted: Vec<Entry> = entries.iter().rev().cloned().collect();
    // `sort_by` is stable: ties keep the reversed insertion order built above.
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}
