//! Failing handlers abort their cycle and leave the router usable.

use grapnel::{Anchor, Event, GrapnelError, MemoryAnchor, Router, testing::{CallLog, Failure}};

mod common;
use common::{failing_action, router_at};

#[test]
fn failing_action_aborts_the_rest_of_the_cycle() {
    let log = CallLog::new();
    let (anchor, router) = router_at("");
    router.add("save", log.action("before")).unwrap();
    router.add("save", failing_action("disk full")).unwrap();
    router.add("save", log.action("after")).unwrap();

    let err = anchor.set(Some("save:1")).unwrap_err();
    assert_eq!(err.to_string(), "action `save` failed");
    assert_eq!(log.entries(), ["before(1, save)"]);
}

#[test]
fn state_survives_a_failed_cycle() {
    let log = CallLog::new();
    let (anchor, router) = router_at("");
    router.add("save", failing_action("disk full")).unwrap();
    router.add("load", log.action("load")).unwrap();

    assert!(anchor.set(Some("save:1")).is_err());
    assert_eq!(router.current_action().as_deref(), Some("save"));
    assert_eq!(router.action_names(), ["save", "load"]);

    anchor.set(Some("load:2")).unwrap();
    assert_eq!(log.entries(), ["load(2, load)"]);
}

#[test]
fn errors_surface_from_the_call_that_started_the_cycle() {
    let (_anchor, router) = router_at("save:1");

    let err = router.add("save", failing_action("disk full")).unwrap_err();
    match err {
        GrapnelError::Action { name, source } => {
            assert_eq!(name, "save");
            assert_eq!(source.to_string(), "disk full");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Subsequent registrations rerun the cycle and fail the same way.
    assert!(router.on("match", |_: &Router, _: &Event| ()).is_err());
    assert!(router.run().is_err());
    assert!(router.set_anchor("other:1").is_ok());
}

#[test]
fn failing_match_listener_skips_the_actions() {
    let log = CallLog::new();
    let (anchor, router) = router_at("");
    router
        .on("match", |_: &Router, _: &Event| -> Result<(), Failure> {
            Err(Failure::new("rejected"))
        })
        .unwrap();
    router.add("page", log.action("page")).unwrap();

    let err = router.set_anchor("page:1").unwrap_err();
    assert!(matches!(err, GrapnelError::Listener { ref event, .. } if event == "match"));
    assert!(log.is_empty());
    assert_eq!(anchor.get(), "page:1");
}

#[test]
fn failing_ready_listener_fails_construction() {
    let result = Router::builder()
        .on("ready", |_: &Router, _: &Event| -> Result<(), Failure> {
            Err(Failure::new("not yet"))
        })
        .build(MemoryAnchor::new());

    match result {
        Err(GrapnelError::Listener { event, source }) => {
            assert_eq!(event, "ready");
            assert_eq!(source.to_string(), "not yet");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn nested_failures_keep_the_innermost_error() {
    let (anchor, router) = router_at("");
    router
        .add("go", |router: &Router, _: &str, _: &str| {
            router.set_anchor("boom:1").map(|_| ())
        })
        .unwrap();
    router.add("boom", failing_action("inner")).unwrap();

    let err = anchor.set(Some("go:1")).unwrap_err();
    let err = err.downcast::<GrapnelError>().unwrap();
    assert!(matches!(*err, GrapnelError::Action { ref name, .. } if name == "boom"));
}
