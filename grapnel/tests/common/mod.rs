#![allow(dead_code)]

use grapnel::{MemoryAnchor, Router, testing::Failure};

// ============================================================================
// Fixtures
// ============================================================================

/// A router with the default hook on an anchor holding `fragment`.
pub fn router_at(fragment: &str) -> (MemoryAnchor, Router) {
    let anchor = MemoryAnchor::with_fragment(fragment);
    let router = Router::new(anchor.clone()).unwrap();
    (anchor, router)
}

/// A router using `hook` on an anchor holding `fragment`.
pub fn router_with_hook(hook: &str, fragment: &str) -> (MemoryAnchor, Router) {
    let anchor = MemoryAnchor::with_fragment(fragment);
    let router = Router::builder().hook(hook).build(anchor.clone()).unwrap();
    (anchor, router)
}

// ============================================================================
// Handlers
// ============================================================================

/// An action handler that always fails with `message`.
pub fn failing_action(
    message: &'static str,
) -> impl Fn(&Router, &str, &str) -> Result<(), Failure> {
    move |_: &Router, _: &str, _: &str| Err(Failure::new(message))
}
