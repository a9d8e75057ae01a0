/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The document finished loading
    Ready,
    /// Pointer click on an element
    Click { target: Option<String> },
    /// Key press, targeted at the focused element
    Key { target: Option<String>, key: Key },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: Some(target.into()),
            key,
        }
    }

    /// The element this event activates, if any.
    /// Enter and Space on a focused element activate it like a click.
    pub fn activation_target(&self) -> Option<&str> {
        match self {
            Event::Click { target } => target.as_deref(),
            Event::Key {
                target,
                key: Key::Enter | Key::Char(' '),
            } => target.as_deref(),
            _ => None,
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
