//! Named-event listener bus.
//!
//! Listeners are stored in registration order and fired synchronously. A
//! trigger snapshots the matching listeners before calling any of them, so a
//! listener that registers more listeners (or triggers further events) only
//! affects later dispatches.

use grapnel_core::{BoxError, Event, EventName, GrapnelError, IntoHandlerResult};
use std::{cell::RefCell, fmt, rc::Rc};

/// Type-erased listener: `(context, event)`.
pub type ListenerFn<C> = Rc<dyn Fn(&C, &Event) -> Result<(), BoxError>>;

/// A listener registered under one event name.
pub struct Listener<C> {
    event: EventName,
    handler: ListenerFn<C>,
}

impl<C> Listener<C> {
    /// The event this listener is registered under.
    pub fn event(&self) -> &EventName {
        &self.event
    }

    /// Invokes the listener.
    pub fn call(&self, ctx: &C, event: &Event) -> Result<(), GrapnelError> {
        (self.handler)(ctx, event).map_err(|source| GrapnelError::listener(event.name(), source))
    }
}

impl<C> Clone for Listener<C> {
    fn clone(&self) -> Self {
        Self {
            event: self.event.clone(),
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<C> fmt::Debug for Listener<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("event", &self.event).finish_non_exhaustive()
    }
}

/// Conversion into the list of event names a handler is registered under.
///
/// A single string is always exactly one name; it is never split on commas
/// or whitespace. Pass a slice or array to register several names at once.
pub trait IntoEventNames {
    /// The names, in registration order.
    fn into_event_names(self) -> Vec<EventName>;
}

impl IntoEventNames for EventName {
    fn into_event_names(self) -> Vec<EventName> {
        vec![self]
    }
}

impl IntoEventNames for &str {
    fn into_event_names(self) -> Vec<EventName> {
        vec![EventName::from(self)]
    }
}

impl IntoEventNames for String {
    fn into_event_names(self) -> Vec<EventName> {
        vec![EventName::from(self)]
    }
}

impl IntoEventNames for &[&str] {
    fn into_event_names(self) -> Vec<EventName> {
        self.iter().copied().map(EventName::from).collect()
    }
}

impl<const N: usize> IntoEventNames for [&str; N] {
    fn into_event_names(self) -> Vec<EventName> {
        self.into_iter().map(EventName::from).collect()
    }
}

impl<const N: usize> IntoEventNames for [EventName; N] {
    fn into_event_names(self) -> Vec<EventName> {
        self.into()
    }
}

impl IntoEventNames for Vec<EventName> {
    fn into_event_names(self) -> Vec<EventName> {
        self
    }
}

/// Listeners in registration order.
pub struct EventBus<C> {
    listeners: RefCell<Vec<Listener<C>>>,
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> EventBus<C> {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Registers `handler` under each of `events`.
    ///
    /// Every name gets its own listener entry; the entries share the handler.
    pub fn on<N, F, R>(&self, events: N, handler: F)
    where
        C: 'static,
        N: IntoEventNames,
        F: Fn(&C, &Event) -> R + 'static,
        R: IntoHandlerResult,
    {
        let handler: ListenerFn<C> =
            Rc::new(move |ctx: &C, event: &Event| handler(ctx, event).into_handler_result());
        self.on_erased(events, handler);
    }

    /// Registers an already type-erased handler under each of `events`.
    pub fn on_erased<N: IntoEventNames>(&self, events: N, handler: ListenerFn<C>) {
        let mut listeners = self.listeners.borrow_mut();
        for event in events.into_event_names() {
            #[cfg(feature = "tracing")]
            tracing::trace!(%event, "Registered listener");
            listeners.push(Listener {
                event,
                handler: Rc::clone(&handler),
            });
        }
    }

    /// Listeners registered under `name`, in order, as a snapshot.
    pub fn listeners_for(&self, name: &str) -> Vec<Listener<C>> {
        self.listeners
            .borrow()
            .iter()
            .filter(|listener| listener.event.as_str() == name)
            .cloned()
            .collect()
    }

    /// Number of listeners registered under `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|listener| listener.event.as_str() == name)
            .count()
    }

    /// Fires `event` at every listener registered under its name.
    ///
    /// Events nobody listens to are skipped silently. The first failing
    /// listener stops the trigger and its error is returned.
    pub fn trigger(&self, ctx: &C, event: &Event) -> Result<(), GrapnelError> {
        let listeners = self.listeners_for(event.name());
        #[cfg(feature = "tracing")]
        tracing::trace!(%event, listeners = listeners.len(), "Triggering event");
        for listener in listeners {
            #[cfg(feature = "tracing")]
            tracing::trace!(event = %listener.event, "Firing listener");
            listener.call(ctx, event)?;
        }
        Ok(())
    }
}

impl<C> fmt::Debug for EventBus<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.listeners.borrow().iter()).finish()
    }
}
