//! Document lifecycle: a root element plus the handlers attached to it.

use crate::element::Element;
use crate::event::{Event, EventResult};

/// Something that reacts to the document lifecycle and to events.
pub trait Handler {
    /// Called once, after the document content has loaded.
    fn on_ready(&mut self, _root: &mut Element) {}

    /// Handle an event. Return `EventResult::Consumed` to stop propagation.
    fn on_event(&mut self, _root: &mut Element, _event: &Event) -> EventResult {
        EventResult::Ignored
    }
}

pub struct Document {
    root: Element,
    handlers: Vec<Box<dyn Handler>>,
    ready: bool,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root.id)
            .field("handlers", &self.handlers.len())
            .field("ready", &self.ready)
            .finish()
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            handlers: Vec::new(),
            ready: false,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Register a handler. Handlers added after `load()` never see `on_ready`.
    pub fn add_handler(&mut self, handler: impl Handler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Mark the content as loaded and run every handler's `on_ready`.
    /// Only the first call has any effect.
    pub fn load(&mut self) {
        if self.ready {
            log::trace!("[document] load() called again, ignoring");
            return;
        }
        self.ready = true;

        log::debug!("[document] ready, notifying {} handlers", self.handlers.len());
        for handler in &mut self.handlers {
            handler.on_ready(&mut self.root);
        }
    }

    /// Deliver an event to the handlers in registration order until one
    /// consumes it. Events before `load()` go nowhere.
    pub fn dispatch(&mut self, event: &Event) -> EventResult {
        if matches!(event, Event::Ready) {
            self.load();
            return EventResult::Consumed;
        }

        if !self.ready {
            log::trace!("[document] dropping {:?} before ready", event);
            return EventResult::Ignored;
        }

        for handler in &mut self.handlers {
            if handler.on_event(&mut self.root, event).is_handled() {
                return EventResult::Consumed;
            }
        }

        EventResult::Ignored
    }
}
