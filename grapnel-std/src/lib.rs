//! # grapnel-std
//!
//! Standard implementations for the Grapnel anchor dispatcher.
//!
//! This crate provides:
//! - **Parsing**: [`hook`] splits an anchor into action and value
//! - **Actions**: [`registry::ActionRegistry`]
//! - **Events**: [`bus::EventBus`]
//! - **Environment**: [`anchor::MemoryAnchor`], an in-memory fragment
//! - **Testing**: [`testing`] helpers
//!
//! Everything here is single-threaded and synchronous; collections use
//! interior mutability so handlers may register more handlers while being
//! dispatched.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use grapnel_core;

// Modules
pub mod anchor;
pub mod bus;
pub mod hook;
pub mod registry;
pub mod testing;
