use uuid::Uuid;

use crate::types::SequenceNumber;

/// The internal state for an Aggregate.
/// It contains:
/// - an id uniquely representing the aggregate,
/// - an incremental sequence number,
/// - a state defined by the user of this library.
#[derive(Clone, Debug)]
pub struct AggregateState<S> {
    id: Uuid,
    sequence_number: SequenceNumber,
    inner: S,
}

impl<S: Default> Default for AggregateState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Default> AggregateState<S> {
    /// Creates a new instance of an [`AggregateState`] with a new unique id.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates a new instance of an [`AggregateState`] with the given aggregate id.
    #[must_use]
    pub(crate) fn with_id(id: impl Into<Uuid>) -> Self {
        Self {
            id: id.into(),
            inner: Default::default(),
            sequence_number: 0,
        }
    }
}

impl<S> AggregateState<S> {
    /// Returns an Uuid representing the aggregate's identifier.
    pub const fn id(&self) -> &Uuid {
        &self.id
    }

    /// Returns the internal state.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the internal sequence number incremented by 1.
    pub fn next_sequence_number(&mut self) -> SequenceNumber {
        self.sequence_number += 1;
        self.sequence_number
    }

    /// Returns the last sequence number handed out.
    #[cfg(test)]
    pub(crate) const fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    pub(crate) fn set_inner(&mut self, inner: S) {
        self.inner = inner;
    }
}
