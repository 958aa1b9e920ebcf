//! In-memory anchor for tests and non-browser hosts.

use grapnel_core::{Anchor, BoxError, Notify, fragment_from_hash, hash_for};
use std::{cell::RefCell, fmt, rc::Rc};

#[derive(Default)]
struct State {
    hash: String,
    subscribers: Vec<Notify>,
}

/// A fragment held in memory, behaving like `window.location.hash`.
///
/// Clones share the same fragment and subscriber list, so a test can keep a
/// handle and simulate the user editing the location bar while a router
/// observes the other handle.
#[derive(Clone, Default)]
pub struct MemoryAnchor {
    state: Rc<RefCell<State>>,
}

impl MemoryAnchor {
    /// Creates an anchor with no fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an anchor already pointing at `fragment`, without notifying.
    pub fn with_fragment(fragment: &str) -> Self {
        let anchor = Self::new();
        anchor.state.borrow_mut().hash = hash_for(Some(fragment));
        anchor
    }

    /// The raw hash, including the leading `#` when set.
    pub fn hash(&self) -> String {
        self.state.borrow().hash.clone()
    }

    /// Number of installed subscribers that are still live.
    pub fn subscriber_count(&self) -> usize {
        self.state
            .borrow()
            .subscribers
            .iter()
            .filter(|notify| notify.is_live())
            .count()
    }
}

impl Anchor for MemoryAnchor {
    fn get(&self) -> String {
        fragment_from_hash(&self.state.borrow().hash).to_owned()
    }

    fn set(&self, value: Option<&str>) -> Result<(), BoxError> {
        let hash = hash_for(value);
        let subscribers = {
            let mut state = self.state.borrow_mut();
            if state.hash == hash {
                return Ok(());
            }
            state.hash = hash;
            state.subscribers.retain(Notify::is_live);
            state.subscribers.clone()
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(anchor = %self.get(), subscribers = subscribers.len(), "Anchor changed");

        // Subscribers are independent: a failure is reported, not propagated
        // to the ones after it.
        let mut first_error = None;
        for notify in subscribers {
            if let Err(err) = notify.call() {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %err, "Anchor subscriber failed");
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn subscribe(&self, callback: Notify) {
        let mut state = self.state.borrow_mut();
        state.subscribers.retain(Notify::is_live);
        state.subscribers.push(callback);
    }
}

impl fmt::Debug for MemoryAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryAnchor")
            .field("hash", &state.hash)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}
