/// Position of a recorded entry inside its wallet, starting from 1 for the seed entry.
pub type SequenceNumber = i32;

/// Monetary quantity handled by the ledger. Signed, so that negative requests can be expressed and refused.
pub type Amount = i64;
