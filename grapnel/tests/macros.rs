//! The `#[action]` attribute.
#![cfg(feature = "macros")]

use grapnel::{Anchor, MemoryAnchor, Router};
use std::sync::Mutex;

static SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());

#[grapnel::action("open")]
fn open_document(value: &str, action: &str) {
    SEEN.lock().unwrap().push(format!("{action}={value}"));
}

#[grapnel::action]
fn close(value: &str, _action: &str) -> Result<(), std::num::ParseIntError> {
    let id: u32 = value.parse()?;
    SEEN.lock().unwrap().push(format!("close#{id}"));
    Ok(())
}

#[test]
fn attribute_registers_actions() {
    let anchor = MemoryAnchor::new();
    let router = Router::builder().with_registered().build(anchor.clone()).unwrap();

    anchor.set(Some("open:readme")).unwrap();
    anchor.set(Some("close:7")).unwrap();
    assert!(anchor.set(Some("close:seven")).is_err());

    assert_eq!(*SEEN.lock().unwrap(), ["open=readme", "close#7"]);
    let mut names = router.action_names();
    names.sort_unstable();
    assert_eq!(names, ["close", "open"]);
}

#[test]
fn attributed_functions_stay_callable() {
    assert!(close("not-a-number", "close").is_err());
}
