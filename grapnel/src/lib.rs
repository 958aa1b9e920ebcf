//! # grapnel - Action Hooks in URL Anchors
//!
//! `grapnel` watches a URL fragment of the form `<action><hook><value>` and
//! calls the handlers registered for `<action>`. With the default hook `:`,
//! the anchor `#page:5` calls every `page` action with value `"5"`.
//!
//! ## Quick Start
//!
//! ```rust
//! use grapnel::{Anchor, Event, MemoryAnchor, Router};
//!
//! let anchor = MemoryAnchor::new();
//! let router = Router::new(anchor.clone())?;
//!
//! router
//!     .on("match", |_: &Router, event: &Event| println!("matched {event}"))?
//!     .add("page", |_: &Router, value: &str, _: &str| println!("page {value}"))?;
//!
//! anchor.set(Some("page:5"))?;
//! assert_eq!(router.current_value().as_deref(), Some("5"));
//! # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
//! ```
//!
//! ## Events
//!
//! | name | fired | payload |
//! |------|-------|---------|
//! | `ready` | once, at the end of construction | the router (listener context) |
//! | `hashchange` | on every fragment change | the new anchor |
//! | `match` | when at least one action matches, before the actions run | value, action |
//!
//! Any other name is a custom event, fired with [`Router::trigger`].
//!
//! ## Environment
//!
//! The router never touches a global location. It is handed an [`Anchor`]:
//! [`MemoryAnchor`] for tests and headless hosts, or a host-specific binding.
//!
//! ## Features
//!
//! - `tracing` (default): dispatch diagnostics through `tracing`
//! - `inventory`: static action registration via [`ActionRegistration`]
//! - `macros`: the `#[action]` attribute

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod router;

#[cfg(feature = "inventory")]
mod registration;

pub use grapnel_core::{
    // Environment
    Anchor,
    // Errors
    BoxError,
    // Events
    Event,
    EventName,
    GrapnelError,
    // Handler output
    IntoHandlerResult,
    Notify,
    Result,
    fragment_from_hash,
    notify,
};

pub use grapnel_std::{
    anchor::MemoryAnchor,
    bus::{EventBus, IntoEventNames, Listener},
    hook::{DEFAULT_HOOK, Hook, Parsed, parse},
    registry::{Action, ActionRegistry},
};

pub use router::{Phase, Router, RouterBuilder};

#[cfg(feature = "inventory")]
pub use registration::{ActionRegistration, StaticActionFn, registered};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use grapnel_std::testing::*;
}

/// Prelude module - common imports for Grapnel.
///
/// # Usage
///
/// ```rust
/// use grapnel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Anchor, BoxError, Event, EventName, GrapnelError, Hook, IntoHandlerResult, MemoryAnchor,
        Router, RouterBuilder,
    };
}

#[cfg(feature = "macros")]
pub use grapnel_macros::action;

#[cfg(feature = "inventory")]
pub use inventory;
