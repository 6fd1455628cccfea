use std::ops::Deref;

use crate::entry::Entry;

/// This trait is used to implement an `EventHandler`. An event handler is notified of every entry a wallet
/// records, the seed entry included, right after the balance has been updated.
///
/// Handlers run synchronously, in registration order. They cannot fail the operation that produced the
/// entry: all the errors should be handled from within the `EventHandler` and it shouldn't panic.
pub trait EventHandler: Send {
    /// Handle a freshly recorded entry and perform an action. This could be feeding a read model or a
    /// side-effect.
    fn handle(&self, entry: &Entry);

    /// The name of the event handler. By default, this is the type name of the event handler,
    /// but it can be overridden to provide a custom name. This name is used as
    /// part of tracing spans, to identify the event handler being run.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<Q, T> EventHandler for T
where
    Q: EventHandler + ?Sized + Sync,
    T: Deref<Target = Q> + Send,
{
    /// Deref call to [`EventHandler::handle`].
    fn handle(&self, entry: &Entry) {
        self.deref().handle(entry);
    }

    /// Deref call to [`EventHandler::name`].
    fn name(&self) -> &'static str {
        self.deref().name()
    }
}
