//! Error types for Grapnel.
//!
//! Normal dispatch never fails: an anchor without a hook, an empty anchor or
//! an action nobody registered all resolve to "no match". The only failures
//! come from caller-supplied handlers, and they are surfaced as-is:
//!
//! - [`GrapnelError::Listener`] - a listener returned an error for an event
//! - [`GrapnelError::Action`] - an action handler returned an error
//! - [`GrapnelError::Anchor`] - the anchor capability itself failed
//!
//! [`GrapnelError::Reserved`] is the one misuse error: firing an event only
//! the dispatcher may fire.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Shorthand for results carrying a [`GrapnelError`].
pub type Result<T, E = GrapnelError> = std::result::Result<T, E>;

/// Top-level error type for all Grapnel operations.
#[derive(Error, Debug)]
pub enum GrapnelError {
    /// A listener failed while an event was being triggered.
    #[error("listener for `{event}` failed")]
    Listener {
        /// Name of the event being triggered.
        event: String,
        /// The error returned by the listener.
        #[source]
        source: BoxError,
    },

    /// An action handler failed.
    #[error("action `{name}` failed")]
    Action {
        /// Name of the matched action.
        name: String,
        /// The error returned by the handler.
        #[source]
        source: BoxError,
    },

    /// Reading or writing the anchor failed.
    #[error("anchor error")]
    Anchor(#[source] BoxError),

    /// The event is fired by the dispatcher itself and cannot be triggered.
    #[error("`{0}` is fired by the router itself")]
    Reserved(String),
}

impl GrapnelError {
    /// Wraps a listener failure for `event`.
    ///
    /// A source that already is a [`GrapnelError`] (a nested dispatch cycle
    /// failing inside a listener) is passed through unchanged so the
    /// innermost failing handler stays at the top of the chain.
    pub fn listener(event: impl Into<String>, source: BoxError) -> Self {
        match source.downcast::<GrapnelError>() {
            Ok(inner) => *inner,
            Err(source) => GrapnelError::Listener {
                event: event.into(),
                source,
            },
        }
    }

    /// Wraps an action handler failure for `name`.
    pub fn action(name: impl Into<String>, source: BoxError) -> Self {
        match source.downcast::<GrapnelError>() {
            Ok(inner) => *inner,
            Err(source) => GrapnelError::Action {
                name: name.into(),
                source,
            },
        }
    }

    /// Wraps an error reported by an [`Anchor`](crate::Anchor) implementation.
    pub fn anchor(source: BoxError) -> Self {
        match source.downcast::<GrapnelError>() {
            Ok(inner) => *inner,
            Err(source) => GrapnelError::Anchor(source),
        }
    }
}
