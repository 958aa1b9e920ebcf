//! Ordered registry of named actions.

use grapnel_core::{BoxError, GrapnelError, IntoHandlerResult};
use std::{cell::RefCell, fmt, rc::Rc};

/// Type-erased action handler: `(context, value, action)`.
pub type ActionFn<C> = Rc<dyn Fn(&C, &str, &str) -> Result<(), BoxError>>;

/// A named action and its handler.
pub struct Action<C> {
    name: String,
    handler: ActionFn<C>,
}

impl<C> Action<C> {
    /// Creates an action from any handler returning `()` or `Result<(), E>`.
    pub fn new<F, R>(name: impl Into<String>, handler: F) -> Self
    where
        C: 'static,
        F: Fn(&C, &str, &str) -> R + 'static,
        R: IntoHandlerResult,
    {
        Self {
            name: name.into(),
            handler: Rc::new(move |ctx: &C, value: &str, action: &str| {
                handler(ctx, value, action).into_handler_result()
            }),
        }
    }

    /// The action name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the handler with `(value, action)`.
    pub fn call(&self, ctx: &C, value: &str, action: &str) -> Result<(), GrapnelError> {
        (self.handler)(ctx, value, action)
            .map_err(|source| GrapnelError::action(&self.name, source))
    }
}

impl<C> Clone for Action<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Actions in registration order.
///
/// The same name may be added more than once; every entry fires. Entries
/// are never removed.
pub struct ActionRegistry<C> {
    actions: RefCell<Vec<Action<C>>>,
}

impl<C> Default for ActionRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ActionRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            actions: RefCell::new(Vec::new()),
        }
    }

    /// Append an action.
    pub fn add(&self, action: Action<C>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(action = %action.name(), "Registered action");
        self.actions.borrow_mut().push(action);
    }

    /// Every action named exactly `current`, in registration order.
    ///
    /// The result is a snapshot: handlers may add actions while it is being
    /// walked without affecting it. `None` matches nothing.
    pub fn matches(&self, current: Option<&str>) -> Vec<Action<C>> {
        let Some(current) = current else {
            return Vec::new();
        };
        self.actions
            .borrow()
            .iter()
            .filter(|action| action.name == current)
            .cloned()
            .collect()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.actions.borrow().len()
    }

    /// Whether no action was registered yet.
    pub fn is_empty(&self) -> bool {
        self.actions.borrow().is_empty()
    }

    /// Registered names in order, duplicates included.
    pub fn names(&self) -> Vec<String> {
        self.actions.borrow().iter().map(|a| a.name.clone()).collect()
    }
}

impl<C> fmt::Debug for ActionRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.actions.borrow().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallLog, Failure};

    #[test]
    fn matches_in_registration_order() {
        let log = CallLog::new();
        let registry = ActionRegistry::<()>::new();
        registry.add(Action::new("page", log.action("first")));
        registry.add(Action::new("home", log.action("other")));
        registry.add(Action::new("page", log.action("second")));

        let matched = registry.matches(Some("page"));
        assert_eq!(matched.len(), 2);
        for action in &matched {
            action.call(&(), "5", "page").unwrap();
        }
        assert_eq!(log.entries(), ["first(5, page)", "second(5, page)"]);
    }

    #[test]
    fn none_matches_nothing() {
        let registry = ActionRegistry::<()>::new();
        registry.add(Action::new("", |_: &(), _: &str, _: &str| ()));
        assert!(registry.matches(None).is_empty());
        assert_eq!(registry.matches(Some("")).len(), 1);
    }

    #[test]
    fn names_keep_duplicates() {
        let registry = ActionRegistry::<()>::new();
        assert!(registry.is_empty());
        registry.add(Action::new("a", |_: &(), _: &str, _: &str| ()));
        registry.add(Action::new("a", |_: &(), _: &str, _: &str| ()));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), ["a", "a"]);
    }

    #[test]
    fn handler_errors_name_the_action() {
        let action = Action::new("save", |_: &(), _: &str, _: &str| -> Result<(), Failure> {
            Err(Failure::new("disk full"))
        });
        let err = action.call(&(), "1", "save").unwrap_err();
        assert!(matches!(err, GrapnelError::Action { ref name, .. } if name == "save"));
    }
}
