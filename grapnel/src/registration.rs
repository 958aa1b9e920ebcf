//! # Static Action Registration
//!
//! Actions can be declared next to the code they belong to and collected at
//! router construction, instead of being wired up one `add` call at a time.
//! Registrations are gathered with the `inventory` crate, either through the
//! `#[action]` attribute (feature `macros`) or manually:
//!
//! ```rust,ignore
//! fn show_page(value: &str, _action: &str) {
//!     println!("page {value}");
//! }
//!
//! grapnel::inventory::submit! {
//!     grapnel::ActionRegistration::new("page", |value, action| {
//!         grapnel::IntoHandlerResult::into_handler_result(show_page(value, action))
//!     })
//! }
//!
//! let router = grapnel::Router::builder().with_registered().build(anchor)?;
//! ```
//!
//! `inventory` does not define an order between submissions, so when two
//! static registrations share a name their relative order is unspecified.
//! Actions added later with [`Router::add`](crate::Router::add) always come
//! after all static ones.

use crate::router::Router;
use grapnel_core::BoxError;
use grapnel_std::registry::Action;

/// Signature of a statically registered action: `(value, action)`.
pub type StaticActionFn = fn(&str, &str) -> Result<(), BoxError>;

/// Registration entry for an action in the global registry.
///
/// This struct is submitted to `inventory` for automatic collection.
#[derive(Debug, Clone, Copy)]
pub struct ActionRegistration {
    /// The action name.
    pub name: &'static str,
    /// The handler.
    pub handler: StaticActionFn,
}

impl ActionRegistration {
    /// Creates a registration.
    pub const fn new(name: &'static str, handler: StaticActionFn) -> Self {
        Self { name, handler }
    }

    pub(crate) fn to_action(&'static self) -> Action<Router> {
        Action::new(self.name, move |_: &Router, value: &str, action: &str| {
            (self.handler)(value, action)
        })
    }
}

inventory::collect!(ActionRegistration);

/// Every submitted registration.
pub fn registered() -> impl Iterator<Item = &'static ActionRegistration> {
    inventory::iter::<ActionRegistration>.into_iter()
}
