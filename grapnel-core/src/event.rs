//! Lifecycle events and their names.

use std::{borrow::Cow, fmt};

/// The name a listener is registered under.
///
/// The three built-in names are recognized from their string form, so
/// `EventName::from("match")` is [`EventName::Match`]. Anything else is a
/// [`EventName::Custom`] name, taken verbatim: `"a,b"` is one name, not two.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventName {
    /// Fired once when a dispatcher finishes construction.
    Ready,
    /// Fired whenever the environment reports a fragment change.
    HashChange,
    /// Fired when at least one action matches the current anchor.
    Match,
    /// A user-defined event.
    Custom(Cow<'static, str>),
}

impl EventName {
    /// Returns the string form of the name.
    pub fn as_str(&self) -> &str {
        match self {
            EventName::Ready => "ready",
            EventName::HashChange => "hashchange",
            EventName::Match => "match",
            EventName::Custom(name) => name,
        }
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        match name {
            "ready" => EventName::Ready,
            "hashchange" => EventName::HashChange,
            "match" => EventName::Match,
            other => EventName::Custom(Cow::Owned(other.to_owned())),
        }
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        match EventName::from(name.as_str()) {
            EventName::Custom(_) => EventName::Custom(Cow::Owned(name)),
            builtin => builtin,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event together with its payload.
///
/// The `ready` payload (the dispatcher itself) is not carried here: every
/// listener already receives the dispatcher as its context argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The dispatcher finished construction.
    Ready,
    /// The fragment changed; carries the new anchor.
    HashChange {
        /// The anchor after the change.
        anchor: String,
    },
    /// One or more actions matched the current anchor.
    Match {
        /// The parsed value.
        value: String,
        /// The parsed action name.
        action: String,
    },
    /// A user-defined event with positional string arguments.
    Custom {
        /// The event name.
        name: String,
        /// Positional arguments, passed to listeners unchanged.
        args: Vec<String>,
    },
}

impl Event {
    /// Creates a custom event.
    pub fn custom<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event::Custom {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The name listeners must be registered under to receive this event.
    pub fn name(&self) -> &str {
        match self {
            Event::Ready => "ready",
            Event::HashChange { .. } => "hashchange",
            Event::Match { .. } => "match",
            Event::Custom { name, .. } => name,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Ready => f.write_str("ready"),
            Event::HashChange { anchor } => write!(f, "hashchange({anchor})"),
            Event::Match { value, action } => write!(f, "match({value}, {action})"),
            Event::Custom { name, args } => write!(f, "{name}({})", args.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_recognized() {
        assert_eq!(EventName::from("ready"), EventName::Ready);
        assert_eq!(EventName::from("hashchange"), EventName::HashChange);
        assert_eq!(EventName::from(String::from("match")), EventName::Match);
    }

    #[test]
    fn delimited_names_stay_whole() {
        let name = EventName::from("a,b");
        assert_eq!(name.as_str(), "a,b");
        assert!(matches!(name, EventName::Custom(_)));
    }

    #[test]
    fn event_names_line_up_with_listener_names() {
        let events = [
            Event::Ready,
            Event::HashChange {
                anchor: "x".into(),
            },
            Event::Match {
                value: "5".into(),
                action: "page".into(),
            },
            Event::custom("saved", ["a"]),
        ];
        let names: Vec<_> = events.iter().map(Event::name).collect();
        assert_eq!(names, ["ready", "hashchange", "match", "saved"]);
        assert_eq!(events[2].to_string(), "match(5, page)");
    }
}
