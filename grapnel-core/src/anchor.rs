//! # Environment Capability (Anchor)
//!
//! The URL fragment is the one piece of global state a dispatcher depends on.
//! Instead of reaching for it as an ambient global, Grapnel receives it as an
//! [`Anchor`] implementation: something that can read the fragment, write it,
//! and tell interested parties when it changed.
//!
//! Change notifications go to a subscriber *list*. Installing a new
//! subscriber never replaces an earlier one, so several dispatchers (or
//! unrelated page code) can observe the same fragment side by side.

use crate::error::BoxError;
use std::{
    any::Any,
    fmt,
    rc::{Rc, Weak},
};

/// Callback invoked when the fragment changes.
///
/// A callback created with [`Notify::tied_to`] dies with its owner; anchors
/// drop dead callbacks instead of calling them.
#[derive(Clone)]
pub struct Notify {
    callback: Rc<dyn Fn() -> Result<(), BoxError>>,
    owner: Option<Weak<dyn Any>>,
}

impl Notify {
    /// A callback that stays installed for the anchor's whole lifetime.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() -> Result<(), BoxError> + 'static,
    {
        Self {
            callback: Rc::new(callback),
            owner: None,
        }
    }

    /// A callback that lives only as long as `owner` does.
    ///
    /// The callback holds a weak reference and receives the upgraded owner.
    pub fn tied_to<T, F>(owner: &Rc<T>, callback: F) -> Self
    where
        T: 'static,
        F: Fn(Rc<T>) -> Result<(), BoxError> + 'static,
    {
        let handle = Rc::downgrade(owner);
        let liveness: Weak<dyn Any> = handle.clone();
        Self {
            callback: Rc::new(move || match handle.upgrade() {
                Some(owner) => callback(owner),
                None => Ok(()),
            }),
            owner: Some(liveness),
        }
    }

    /// Whether the owner, if any, is still alive.
    pub fn is_live(&self) -> bool {
        self.owner
            .as_ref()
            .is_none_or(|owner| owner.strong_count() > 0)
    }

    /// Runs the callback.
    pub fn call(&self) -> Result<(), BoxError> {
        (self.callback)()
    }
}

impl fmt::Debug for Notify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notify")
            .field("live", &self.is_live())
            .finish_non_exhaustive()
    }
}

/// Wraps a closure as a [`Notify`] callback.
pub fn notify<F>(callback: F) -> Notify
where
    F: Fn() -> Result<(), BoxError> + 'static,
{
    Notify::new(callback)
}

/// Read/write/notify access to the hosting environment's URL fragment.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Anchor`",
    label = "missing `Anchor` implementation",
    note = "Anchors must be able to read, write and observe the URL fragment."
)]
pub trait Anchor {
    /// Returns the fragment text after the `#` delimiter, or `""` if none is set.
    fn get(&self) -> String;

    /// Sets the fragment. `None` (or an empty string) clears it.
    ///
    /// Implementations notify subscribers when the stored fragment actually
    /// changes. Every live subscriber is called even if an earlier one
    /// fails; the first error is returned to the caller.
    fn set(&self, value: Option<&str>) -> Result<(), BoxError>;

    /// Appends a change-notification callback.
    fn subscribe(&self, callback: Notify);
}

impl<A: Anchor + ?Sized> Anchor for Rc<A> {
    fn get(&self) -> String {
        (**self).get()
    }

    fn set(&self, value: Option<&str>) -> Result<(), BoxError> {
        (**self).set(value)
    }

    fn subscribe(&self, callback: Notify) {
        (**self).subscribe(callback)
    }
}

/// Extracts the fragment from a raw `location.hash`-style string.
///
/// Only the text between the first and second `#` counts, so `"#a#b"`
/// yields `"a"` and both `""` and `"#"` yield `""`.
pub fn fragment_from_hash(hash: &str) -> &str {
    hash.split('#').nth(1).unwrap_or("")
}

/// Builds a raw hash string for `value`, the inverse of [`fragment_from_hash`].
///
/// `None` and `""` clear the hash; a single leading `#` on `value` is
/// tolerated the way `location.hash = "#x"` is.
pub fn hash_for(value: Option<&str>) -> String {
    match value.map(|v| v.strip_prefix('#').unwrap_or(v)) {
        Some(v) if !v.is_empty() => format!("#{v}"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_reads_text_after_delimiter() {
        assert_eq!(fragment_from_hash("#page:5"), "page:5");
        assert_eq!(fragment_from_hash(""), "");
        assert_eq!(fragment_from_hash("#"), "");
        assert_eq!(fragment_from_hash("#a#b"), "a");
    }

    #[test]
    fn hash_for_clears_on_empty() {
        assert_eq!(hash_for(None), "");
        assert_eq!(hash_for(Some("")), "");
        assert_eq!(hash_for(Some("#")), "");
        assert_eq!(hash_for(Some("page:5")), "#page:5");
        assert_eq!(hash_for(Some("#page:5")), "#page:5");
    }

    #[test]
    fn tied_callbacks_die_with_their_owner() {
        let owner = Rc::new(std::cell::Cell::new(0));
        let callback = Notify::tied_to(&owner, |owner: Rc<std::cell::Cell<i32>>| {
            owner.set(owner.get() + 1);
            Ok(())
        });
        callback.call().unwrap();
        assert_eq!(owner.get(), 1);
        assert!(callback.is_live());

        drop(owner);
        assert!(!callback.is_live());
        assert!(callback.call().is_ok());
        assert!(notify(|| Ok(())).is_live());
    }
}
