//! Anchor parsing.
//!
//! An anchor of the form `<action><hook><value>` is split on the **first**
//! occurrence of the hook. There is no escaping and no second split: with the
//! default hook `"a:b:c"` parses to action `"a"`, value `"b:c"`.

use std::fmt;

/// The separator used when none is configured.
pub const DEFAULT_HOOK: &str = ":";

/// The separator token between action and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hook(String);

impl Hook {
    /// Creates a hook. An empty token falls back to [`DEFAULT_HOOK`].
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.is_empty() {
            Self::default()
        } else {
            Self(token)
        }
    }

    /// The separator text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits `anchor` on this hook. See [`parse`].
    pub fn parse<'a>(&self, anchor: &'a str) -> Parsed<'a> {
        parse(anchor, &self.0)
    }
}

impl Default for Hook {
    fn default() -> Self {
        Self(DEFAULT_HOOK.to_owned())
    }
}

impl From<&str> for Hook {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Hook {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The result of splitting an anchor.
///
/// Both fields are `None` when the hook does not occur in the anchor, and
/// both are `Some` otherwise (possibly empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parsed<'a> {
    /// Text before the first hook.
    pub action: Option<&'a str>,
    /// Text after the first hook.
    pub value: Option<&'a str>,
}

impl Parsed<'_> {
    /// Whether the anchor contained the hook at all.
    pub fn is_hooked(&self) -> bool {
        self.action.is_some()
    }
}

/// Splits `anchor` into action and value on the first occurrence of `hook`.
pub fn parse<'a>(anchor: &'a str, hook: &str) -> Parsed<'a> {
    match anchor.split_once(hook) {
        Some((action, value)) => Parsed {
            action: Some(action),
            value: Some(value),
        },
        None => Parsed::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_action_and_value() {
        let parsed = parse("page:5", ":");
        assert_eq!(parsed.action, Some("page"));
        assert_eq!(parsed.value, Some("5"));
    }

    #[test]
    fn missing_hook_yields_nothing() {
        for anchor in ["", "home", "settings|on"] {
            let parsed = parse(anchor, ":");
            assert_eq!(parsed, Parsed::default(), "anchor {anchor:?}");
            assert!(!parsed.is_hooked());
        }
    }

    #[test]
    fn bare_hook_yields_empty_parts() {
        let parsed = parse(":", ":");
        assert_eq!(parsed.action, Some(""));
        assert_eq!(parsed.value, Some(""));
    }

    #[test]
    fn only_the_first_hook_splits() {
        let parsed = parse("a:b:c", ":");
        assert_eq!(parsed.action, Some("a"));
        assert_eq!(parsed.value, Some("b:c"));
    }

    #[test]
    fn multi_character_hooks() {
        let parsed = parse("user=>ada=>admin", "=>");
        assert_eq!(parsed.action, Some("user"));
        assert_eq!(parsed.value, Some("ada=>admin"));
    }

    #[test]
    fn hook_is_literal() {
        // A regex-looking hook is matched as plain text.
        assert_eq!(parse("a.b", ".").action, Some("a"));
        assert_eq!(parse("ab", ".").action, None);
    }

    #[test]
    fn empty_hook_falls_back_to_default() {
        assert_eq!(Hook::new("").as_str(), DEFAULT_HOOK);
        assert_eq!(Hook::from("|").parse("settings|on").value, Some("on"));
        assert_eq!(Hook::from("|").parse("settings:on"), Parsed::default());
    }
}
