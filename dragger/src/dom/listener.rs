use std::fmt;
use std::rc::Rc;

use crate::event::{Event, EventKind};

/// An event handler with pointer identity.
///
/// Clones share identity, so registering a clone of an already registered
/// listener for the same kind is a no-op.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn(&Event)>);

impl Listener {
    pub fn new(handler: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }

    /// True when both handles refer to the same handler.
    pub fn same(&self, other: &Listener) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Listeners attached to one element, in registration order.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    entries: Vec<(EventKind, Listener)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Returns false when the pair was already present.
    pub fn add(&mut self, kind: EventKind, listener: &Listener) -> bool {
        if self.contains(kind, listener) {
            return false;
        }
        self.entries.push((kind, listener.clone()));
        true
    }

    /// Unregister a listener. Returns false when it was not registered.
    pub fn remove(&mut self, kind: EventKind, listener: &Listener) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|(k, l)| !(*k == kind && l.same(listener)));
        self.entries.len() != before
    }

    pub fn contains(&self, kind: EventKind, listener: &Listener) -> bool {
        self.entries
            .iter()
            .any(|(k, l)| *k == kind && l.same(listener))
    }

    /// Snapshot of the listeners for `kind`, so dispatch runs without a borrow held.
    pub fn listeners_for(&self, kind: EventKind) -> Vec<Listener> {
        self.entries
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| l.clone())
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
