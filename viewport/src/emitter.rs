use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::KeyCode;

/// Events published by a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportEvent {
    /// The surface was scrolled. Always followed by [`ViewportEvent::Change`].
    Scroll,
    /// The surface was resized. Always followed by [`ViewportEvent::Change`].
    Resize,
    /// A key went down and survived coalescing.
    KeyPress(KeyCode),
    /// Metrics should be recomputed.
    Change,
}

impl ViewportEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Scroll => EventKind::Scroll,
            Self::Resize => EventKind::Resize,
            Self::KeyPress(_) => EventKind::KeyPress,
            Self::Change => EventKind::Change,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Scroll,
    Resize,
    KeyPress,
    Change,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::KeyPress => "keypress",
            Self::Change => "change",
        }
    }
}

/// Handle returned by [`Emitter::subscribe`]/[`Emitter::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler = Rc<dyn Fn(&ViewportEvent)>;

struct Entry {
    id: Subscription,
    filter: Option<EventKind>,
    handler: Handler,
}

/// A small single-threaded observer list.
///
/// Handlers may subscribe or unsubscribe from inside a callback; an `emit` always dispatches to
/// the subscribers present when it started.
#[derive(Default)]
pub struct Emitter {
    entries: RefCell<Vec<Entry>>,
    next_id: Cell<u64>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to every event.
    pub fn subscribe(&self, handler: impl Fn(&ViewportEvent) + 'static) -> Subscription {
        self.insert(None, Rc::new(handler))
    }

    /// Subscribes to a single kind of event.
    pub fn on(&self, kind: EventKind, handler: impl Fn(&ViewportEvent) + 'static) -> Subscription {
        self.insert(Some(kind), Rc::new(handler))
    }

    fn insert(&self, filter: Option<EventKind>, handler: Handler) -> Subscription {
        let id = Subscription(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.entries.borrow_mut().push(Entry {
            id,
            filter,
            handler,
        });
        id
    }

    /// Returns `true` when the subscription was still registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|e| e.id != subscription);
        entries.len() != before
    }

    pub fn emit(&self, event: &ViewportEvent) {
        let kind = event.kind();
        let targets: Vec<Handler> = self
            .entries
            .borrow()
            .iter()
            .filter(|e| e.filter.is_none_or(|k| k == kind))
            .map(|e| Rc::clone(&e.handler))
            .collect();
        vtrace!(event = kind.as_str(), subscribers = targets.len(), "emit");
        for handler in targets {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl core::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Emitter")
            .field("subscribers", &self.len())
            .finish()
    }
}
