/// The Aggregate trait is responsible for validating commands, mapping commands to events, and applying
/// events onto the state.
///
/// An Aggregate should be able to derive its own state from nothing but its initial configuration, and its
/// event stream. Applying the same events, in the same order, to the same aggregate, should always yield an
/// identical aggregate state.
///
/// This trait is purposefully _synchronous_. The wallet lives in memory: there is nothing to await between
/// validating a command and recording what it produced.
pub trait Aggregate {
    /// Internally used name. It is attached to every tracing span and event emitted for this aggregate.
    const NAME: &'static str;

    /// Internal aggregate state. This will be wrapped in [`crate::AggregateState`] and could be used to
    /// validate commands.
    type State: Default + Clone;

    /// A command is an action that the caller can execute over an aggregate in order to trigger an
    /// aggregate action.
    type Command;

    /// An event represents a fact that took place in the domain. They are the source of truth; your current
    /// state is derived from the events.
    type Event;

    /// This error is returned by [`Aggregate::handle_command`] when a command cannot be applied.
    type Error: std::error::Error;

    /// Handles, validate a command and emits events.
    ///
    /// Returning an error leaves the aggregate untouched: no event is produced, nothing is applied.
    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Updates the aggregate state using the new event. This assumes that the event can be correctly applied
    /// to the state.
    ///
    /// If this is not the case, this function is allowed to panic.
    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State;
}
