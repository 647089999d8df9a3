use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::css::{StyleElement, StyleId, StyleSheets};
use super::element::Element;
use super::next_handle;
use super::timer::{Scheduler, TimerId};

pub type MutationCallback = Rc<dyn Fn(&MutationRecord)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MutationObserverId(u64);

/// One structural change to the tree under `body`.
#[derive(Debug, Clone)]
pub struct MutationRecord {
    pub target: Element,
    pub added: Vec<Element>,
    pub removed: Vec<Element>,
}

pub(crate) struct DocumentInner {
    body: Element,
    mutation_observers: RefCell<Vec<(MutationObserverId, MutationCallback)>>,
    styles: RefCell<StyleSheets>,
    scheduler: Scheduler,
}

/// Handle to a host document. Clones refer to the same document.
#[derive(Clone)]
pub struct Document {
    inner: Rc<DocumentInner>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let inner = Rc::new_cyclic(|weak| DocumentInner {
            body: Element::new_in("body", weak.clone()),
            mutation_observers: RefCell::new(Vec::new()),
            styles: RefCell::new(StyleSheets::new()),
            scheduler: Scheduler::new(),
        });
        Self { inner }
    }

    pub(crate) fn from_inner(inner: Rc<DocumentInner>) -> Self {
        Self { inner }
    }

    pub fn ptr_eq(&self, other: &Document) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn body(&self) -> Element {
        self.inner.body.clone()
    }

    /// Create a detached element owned by this document.
    pub fn create_element(&self, tag: &str) -> Element {
        Element::new_in(tag, Rc::downgrade(&self.inner))
    }

    // =========================================================================
    // Mutation observation
    // =========================================================================

    /// Watch the whole tree under `body` for child additions and removals.
    pub fn observe_mutations(
        &self,
        callback: impl Fn(&MutationRecord) + 'static,
    ) -> MutationObserverId {
        let id = MutationObserverId(next_handle());
        self.inner
            .mutation_observers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    pub fn disconnect(&self, id: MutationObserverId) -> bool {
        let mut observers = self.inner.mutation_observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(i, _)| *i != id);
        observers.len() != before
    }

    pub fn mutation_observer_count(&self) -> usize {
        self.inner.mutation_observers.borrow().len()
    }

    pub(crate) fn notify_mutation(&self, record: &MutationRecord) {
        let callbacks: Vec<MutationCallback> = self
            .inner
            .mutation_observers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback(record);
        }
    }

    // =========================================================================
    // Style elements
    // =========================================================================

    pub fn append_style(&self, text: impl Into<String>) -> StyleId {
        self.inner.styles.borrow_mut().append(None, text.into())
    }

    /// Append a style element keyed by `owner` so it can be removed by key later.
    pub fn append_owned_style(&self, owner: &str, text: impl Into<String>) -> StyleId {
        self.inner.styles.borrow_mut().append(Some(owner), text.into())
    }

    pub fn remove_style(&self, id: StyleId) -> bool {
        self.inner.styles.borrow_mut().remove(id)
    }

    pub fn remove_styles_owned_by(&self, owner: &str) -> usize {
        self.inner.styles.borrow_mut().remove_owned_by(owner)
    }

    pub fn styles(&self) -> Vec<StyleElement> {
        self.inner.styles.borrow().all().to_vec()
    }

    pub fn styles_owned_by(&self, owner: &str) -> Vec<StyleElement> {
        self.inner.styles.borrow().owned_by(owner)
    }

    pub fn style_count(&self) -> usize {
        self.inner.styles.borrow().len()
    }

    // =========================================================================
    // Timers
    // =========================================================================

    pub fn scheduler(&self) -> &Scheduler {
        &self.inner.scheduler
    }

    pub fn set_interval(&self, period: Duration, callback: impl Fn() + 'static) -> TimerId {
        self.inner.scheduler.set_interval(period, callback)
    }

    pub fn clear_interval(&self, id: TimerId) -> bool {
        self.inner.scheduler.clear_interval(id)
    }

    pub fn advance(&self, by: Duration) -> usize {
        self.inner.scheduler.advance(by)
    }

    pub fn now(&self) -> Duration {
        self.inner.scheduler.now()
    }

    pub fn active_timers(&self) -> usize {
        self.inner.scheduler.active_timers()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("children", &self.inner.body.children().len())
            .field("styles", &self.style_count())
            .field("mutation_observers", &self.mutation_observer_count())
            .field("scheduler", &self.inner.scheduler)
            .finish()
    }
}
