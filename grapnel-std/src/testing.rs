//! Testing utilities for Grapnel.
//!
//! - [`CallLog`]: a shared, ordered record of handler invocations
//! - [`Failure`]: a plain error for handlers that are meant to fail

use grapnel_core::Event;
use std::{cell::RefCell, rc::Rc};
use thiserror::Error;

// ============================================================================
// Call Log
// ============================================================================

/// An ordered log shared between a test and the handlers it registers.
///
/// # Example
///
/// ```rust
/// use grapnel_std::registry::{Action, ActionRegistry};
/// use grapnel_std::testing::CallLog;
///
/// let log = CallLog::new();
/// let registry = ActionRegistry::<()>::new();
/// registry.add(Action::new("page", log.action("page")));
///
/// for action in registry.matches(Some("page")) {
///     action.call(&(), "5", "page").unwrap();
/// }
/// assert_eq!(log.entries(), ["page(5, page)"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&self, entry: impl Into<String>) {
        self.entries.borrow_mut().push(entry.into());
    }

    /// A copy of the recorded entries.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// An action handler recording `label(value, action)`.
    pub fn action<C: 'static>(&self, label: &str) -> impl Fn(&C, &str, &str) + use<C> {
        let log = self.clone();
        let label = label.to_owned();
        move |_: &C, value: &str, action: &str| log.push(format!("{label}({value}, {action})"))
    }

    /// A listener recording `label:<event>`.
    pub fn listener<C: 'static>(&self, label: &str) -> impl Fn(&C, &Event) + use<C> {
        let log = self.clone();
        let label = label.to_owned();
        move |_: &C, event: &Event| log.push(format!("{label}:{event}"))
    }
}

// ============================================================================
// Failure
// ============================================================================

/// An error for handlers that should fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Failure(String);

impl Failure {
    /// Create a failure with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
