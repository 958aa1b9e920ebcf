//! # grapnel-core
//!
//! Core vocabulary for the Grapnel anchor dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by hosts
//! that provide their own [`Anchor`] (a browser binding, a terminal UI that
//! fakes a location bar) without pulling in the standard implementations.
//!
//! # Pieces
//!
//! ## Environment ([`Anchor`])
//!
//! Read, write and observe the URL fragment. The one genuinely global
//! dependency of a hash router, modeled as an injected capability.
//!
//! ## Events ([`Event`], [`EventName`])
//!
//! The lifecycle vocabulary: `ready`, `hashchange`, `match`, plus
//! user-defined names.
//!
//! ## Handler output ([`IntoHandlerResult`])
//!
//! Lets handlers return `()` or any `Result<(), E>`.
//!
//! # Error Types
//!
//! - [`GrapnelError`] - Top-level error type
//! - [`BoxError`] - Boxed handler error

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod anchor;
mod error;
mod event;
mod handler;

// Re-exports
pub use anchor::{Anchor, Notify, fragment_from_hash, hash_for, notify};
pub use error::{BoxError, GrapnelError, Result};
pub use event::{Event, EventName};
pub use handler::IntoHandlerResult;
