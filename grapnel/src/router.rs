//! # Dispatcher (Router)
//!
//! The [`Router`] ties the pieces together. On every fragment change it
//! re-reads the anchor, splits it on the configured [`Hook`], records the
//! result, fires `match` when at least one action is registered under the
//! parsed name, and then calls every such action in registration order.
//!
//! ```text
//! anchor change ─▶ hashchange ─▶ run ─▶ parse ─▶ matches ─▶ match ─▶ actions
//! ```
//!
//! # Re-entrancy
//!
//! Dispatch is synchronous and runs to completion. Handlers receive the
//! router as their first argument and may call [`Router::add`],
//! [`Router::on`], [`Router::trigger`] or [`Router::set_anchor`] from inside
//! a cycle; those calls start nested cycles but never alter the list of
//! handlers the outer cycle is walking.
//!
//! Prefer the `&Router` argument over capturing a clone of the router in a
//! handler: a captured clone keeps the router alive through its own handler
//! list.

use grapnel_core::{Anchor, Event, EventName, GrapnelError, IntoHandlerResult, Notify, Result};
use grapnel_std::{
    bus::{EventBus, IntoEventNames, ListenerFn},
    hook::Hook,
    registry::{Action, ActionRegistry},
};
use std::{cell::RefCell, fmt, rc::Rc};

/// Where the router is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No anchor has been parsed yet.
    #[default]
    Idle,
    /// At least one dispatch cycle parsed the anchor.
    Parsed,
}

#[derive(Debug, Default)]
struct State {
    phase: Phase,
    action: Option<String>,
    value: Option<String>,
}

struct Inner {
    hook: Hook,
    anchor: Box<dyn Anchor>,
    state: RefCell<State>,
    actions: ActionRegistry<Router>,
    listeners: EventBus<Router>,
}

/// Watches an [`Anchor`] and dispatches `action:value` fragments.
///
/// `Router` is a cheap handle; clones share the same registries and state.
///
/// # Example
///
/// ```rust
/// use grapnel::{Anchor, MemoryAnchor, Router};
/// use std::{cell::RefCell, rc::Rc};
///
/// let anchor = MemoryAnchor::new();
/// let router = Router::new(anchor.clone()).unwrap();
///
/// let pages = Rc::new(RefCell::new(Vec::new()));
/// let seen = pages.clone();
/// router
///     .add("page", move |_: &Router, value: &str, _: &str| seen.borrow_mut().push(value.to_owned()))
///     .unwrap();
///
/// anchor.set(Some("page:5")).unwrap();
/// assert_eq!(*pages.borrow(), ["5"]);
/// ```
#[derive(Clone)]
pub struct Router {
    inner: Rc<Inner>,
}

impl Router {
    /// Creates a router on `anchor` with the default hook.
    ///
    /// Construction ends by firing `ready`, which runs the first dispatch
    /// cycle against whatever the anchor currently holds.
    pub fn new(anchor: impl Anchor + 'static) -> Result<Self> {
        RouterBuilder::new().build(anchor)
    }

    /// Starts configuring a router.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Registers `handler` under each of `events`, then runs a dispatch cycle.
    ///
    /// A single string is one event name: `"a,b"` registers one listener for
    /// an event literally called `a,b`. Pass an array for several names.
    pub fn on<N, F, R>(&self, events: N, handler: F) -> Result<&Self>
    where
        N: IntoEventNames,
        F: Fn(&Router, &Event) -> R + 'static,
        R: IntoHandlerResult,
    {
        self.inner.listeners.on(events, handler);
        self.run()
    }

    /// Registers an action, then runs a dispatch cycle.
    ///
    /// The handler receives `(router, value, action)`. Because a cycle runs
    /// right away, an action whose name is already in the anchor fires
    /// immediately, without waiting for a fragment change.
    pub fn add<F, R>(&self, name: impl Into<String>, handler: F) -> Result<&Self>
    where
        F: Fn(&Router, &str, &str) -> R + 'static,
        R: IntoHandlerResult,
    {
        self.inner.actions.add(Action::new(name, handler));
        self.run()
    }

    /// Fires `event` at every listener registered under its name.
    ///
    /// `ready` belongs to construction and is rejected with
    /// [`GrapnelError::Reserved`]. `hashchange` and `match` may be fired by
    /// hand; a `hashchange` runs a dispatch cycle.
    pub fn trigger(&self, event: Event) -> Result<&Self> {
        if matches!(event, Event::Ready) {
            return Err(GrapnelError::Reserved(event.name().to_owned()));
        }
        self.inner.listeners.trigger(self, &event)?;
        Ok(self)
    }

    /// Re-reads the anchor and stores the action and value it holds.
    ///
    /// Both are cleared when the anchor does not contain the hook. No
    /// handler runs.
    pub fn parse(&self) -> &Self {
        let anchor = self.inner.anchor.get();
        let parsed = self.inner.hook.parse(&anchor);
        let mut state = self.inner.state.borrow_mut();
        state.phase = Phase::Parsed;
        state.action = parsed.action.map(str::to_owned);
        state.value = parsed.value.map(str::to_owned);
        self
    }

    /// Actions registered under the current action, in registration order.
    pub fn matches(&self) -> Vec<Action<Router>> {
        let current = self.current_action();
        self.inner.actions.matches(current.as_deref())
    }

    /// Runs one dispatch cycle.
    ///
    /// `match` is fired before any action handler. The first failing
    /// listener or handler aborts the rest of the cycle; everything
    /// registered so far, and the parsed state, stays as it is.
    pub fn run(&self) -> Result<&Self> {
        let matches = self.parse().matches();
        let (action, value) = {
            let state = self.inner.state.borrow();
            (state.action.clone(), state.value.clone())
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            action = ?action,
            value = ?value,
            matches = matches.len(),
            "Dispatch cycle"
        );

        let (Some(action), Some(value)) = (action, value) else {
            return Ok(self);
        };
        if matches.is_empty() {
            return Ok(self);
        }

        let result = self.dispatch(&matches, &value, &action);
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::warn!(action = %action, error = %err, "Dispatch cycle aborted");
        }
        result.map(|()| self)
    }

    fn dispatch(&self, matches: &[Action<Router>], value: &str, action: &str) -> Result<()> {
        let event = Event::Match {
            value: value.to_owned(),
            action: action.to_owned(),
        };
        self.inner.listeners.trigger(self, &event)?;
        for matched in matches {
            matched.call(self, value, action)?;
        }
        Ok(())
    }

    fn hash_changed(&self) -> Result<()> {
        let anchor = self.get_anchor();
        self.inner.listeners.trigger(self, &Event::HashChange { anchor })
    }

    /// The current fragment, without the leading `#`.
    pub fn get_anchor(&self) -> String {
        self.inner.anchor.get()
    }

    /// Sets the fragment; `None` or `""` clears it.
    ///
    /// When the fragment changes the anchor notifies its subscribers, this
    /// router included, so a dispatch cycle runs before this returns.
    pub fn set_anchor<'a>(&self, value: impl Into<Option<&'a str>>) -> Result<&Self> {
        self.inner
            .anchor
            .set(value.into())
            .map_err(GrapnelError::anchor)?;
        Ok(self)
    }

    /// Clears the fragment. Same as `set_anchor(None)`.
    pub fn clear_anchor(&self) -> Result<&Self> {
        self.set_anchor(None)
    }

    /// The separator this router splits anchors on.
    pub fn hook(&self) -> &Hook {
        &self.inner.hook
    }

    /// The action parsed by the last cycle, if the anchor contained the hook.
    pub fn current_action(&self) -> Option<String> {
        self.inner.state.borrow().action.clone()
    }

    /// The value parsed by the last cycle, if the anchor contained the hook.
    pub fn current_value(&self) -> Option<String> {
        self.inner.state.borrow().value.clone()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase
    }

    /// Names of all registered actions, in registration order.
    pub fn action_names(&self) -> Vec<String> {
        self.inner.actions.names()
    }

    /// Number of listeners registered under `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.inner.listeners.listener_count(event)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Router")
            .field("hook", &self.inner.hook)
            .field("phase", &state.phase)
            .field("action", &state.action)
            .field("value", &state.value)
            .field("actions", &self.inner.actions)
            .field("listeners", &self.inner.listeners)
            .finish()
    }
}

/// Builder for constructing a [`Router`].
#[derive(Default)]
pub struct RouterBuilder {
    hook: Hook,
    listeners: Vec<(Vec<EventName>, ListenerFn<Router>)>,
    #[cfg(feature = "inventory")]
    registered: bool,
}

impl RouterBuilder {
    /// Create a builder with the default hook and no extra listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator. An empty hook keeps the default `":"`.
    pub fn hook(mut self, hook: impl Into<Hook>) -> Self {
        self.hook = hook.into();
        self
    }

    /// Registers a listener before construction, so it also sees `ready`.
    ///
    /// Listeners registered here run after the router's own dispatch for
    /// the same event, in the order they were added.
    pub fn on<N, F, R>(mut self, events: N, handler: F) -> Self
    where
        N: IntoEventNames,
        F: Fn(&Router, &Event) -> R + 'static,
        R: IntoHandlerResult,
    {
        let handler: ListenerFn<Router> = Rc::new(move |router: &Router, event: &Event| {
            handler(router, event).into_handler_result()
        });
        self.listeners.push((events.into_event_names(), handler));
        self
    }

    /// Adds a `hashchange` listener installed before the router subscribes
    /// to the anchor.
    ///
    /// Use it to carry an existing fragment-change callback over into the
    /// router's dispatch cycle.
    pub fn chain<F, R>(self, handler: F) -> Self
    where
        F: Fn(&Router, &Event) -> R + 'static,
        R: IntoHandlerResult,
    {
        self.on(EventName::HashChange, handler)
    }

    /// Adds every action submitted through [`ActionRegistration`] at build
    /// time, before `ready` fires.
    ///
    /// [`ActionRegistration`]: crate::ActionRegistration
    #[cfg(feature = "inventory")]
    pub fn with_registered(mut self) -> Self {
        self.registered = true;
        self
    }

    /// Builds the router on `anchor` and fires `ready`.
    pub fn build(self, anchor: impl Anchor + 'static) -> Result<Router> {
        let router = Router {
            inner: Rc::new(Inner {
                hook: self.hook,
                anchor: Box::new(anchor),
                state: RefCell::new(State::default()),
                actions: ActionRegistry::new(),
                listeners: EventBus::new(),
            }),
        };

        router
            .inner
            .listeners
            .on([EventName::Ready, EventName::HashChange], |router: &Router, _: &Event| {
                router.run().map(|_| ())
            });
        for (events, handler) in self.listeners {
            router.inner.listeners.on_erased(events, handler);
        }

        #[cfg(feature = "inventory")]
        if self.registered {
            for registration in crate::registration::registered() {
                router.inner.actions.add(registration.to_action());
            }
        }

        router
            .inner
            .anchor
            .subscribe(Notify::tied_to(&router.inner, |inner: Rc<Inner>| {
                Router { inner }.hash_changed().map_err(Into::into)
            }));

        #[cfg(feature = "tracing")]
        tracing::debug!(hook = %router.inner.hook, anchor = %router.get_anchor(), "Router ready");
        router.inner.listeners.trigger(&router, &Event::Ready)?;
        Ok(router)
    }
}

impl fmt::Debug for RouterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterBuilder")
            .field("hook", &self.hook)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
