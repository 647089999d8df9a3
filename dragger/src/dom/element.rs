use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::css::{InlineStyle, Priority};
use super::document::{Document, DocumentInner, MutationRecord};
use super::listener::{Listener, ListenerRegistry};
use super::next_handle;
use crate::event::{Event, EventKind};
use crate::types::{Point, Rect};

pub type ResizeCallback = Rc<dyn Fn(&Element)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeObserverId(u64);

pub(crate) struct ElementInner {
    tag: String,
    document: Weak<DocumentInner>,
    parent: RefCell<Weak<ElementInner>>,
    children: RefCell<Vec<Element>>,

    // Geometry
    bounds: Cell<Rect>,
    /// Size of the scrollable content (before clamping to the client box).
    content: Cell<(f64, f64)>,
    scroll: Cell<Point>,

    // Presentation
    classes: RefCell<Vec<String>>,
    style: RefCell<InlineStyle>,

    // Wiring
    listeners: RefCell<ListenerRegistry>,
    resize_observers: RefCell<Vec<(ResizeObserverId, ResizeCallback)>>,
}

/// Handle to an element of a [`Document`]. Clones refer to the same node.
#[derive(Clone)]
pub struct Element {
    inner: Rc<ElementInner>,
}

impl Element {
    pub(crate) fn new_in(tag: &str, document: Weak<DocumentInner>) -> Self {
        Self {
            inner: Rc::new(ElementInner {
                tag: tag.to_string(),
                document,
                parent: RefCell::new(Weak::new()),
                children: RefCell::new(Vec::new()),
                bounds: Cell::new(Rect::default()),
                content: Cell::new((0.0, 0.0)),
                scroll: Cell::new(Point::ORIGIN),
                classes: RefCell::new(Vec::new()),
                style: RefCell::new(InlineStyle::new()),
                listeners: RefCell::new(ListenerRegistry::new()),
                resize_observers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn owner_document(&self) -> Option<Document> {
        self.inner.document.upgrade().map(Document::from_inner)
    }

    // =========================================================================
    // Tree
    // =========================================================================

    pub fn parent(&self) -> Option<Element> {
        self.inner
            .parent
            .borrow()
            .upgrade()
            .map(|inner| Element { inner })
    }

    pub fn children(&self) -> Vec<Element> {
        self.inner.children.borrow().clone()
    }

    /// True when the element hangs off the document body.
    pub fn is_connected(&self) -> bool {
        let Some(document) = self.owner_document() else {
            return false;
        };
        let body = document.body();
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.ptr_eq(&body) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn is_inclusive_ancestor_of(&self, other: &Element) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node.ptr_eq(self) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Append `child`, moving it out of its previous parent.
    /// Appending an ancestor of `self` is refused.
    pub fn append_child(&self, child: &Element) -> bool {
        if child.is_inclusive_ancestor_of(self) {
            log::warn!("[dom] refusing to append <{}> into its own subtree", child.tag());
            return false;
        }

        let previous = child.parent();
        if let Some(old) = &previous {
            old.inner
                .children
                .borrow_mut()
                .retain(|c| !c.ptr_eq(child));
        }
        self.inner.children.borrow_mut().push(child.clone());
        *child.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);

        let connected = self.is_connected() || previous.is_some_and(|p| p.is_connected());
        if connected {
            self.notify_mutation(vec![child.clone()], Vec::new());
        }
        true
    }

    pub fn remove_child(&self, child: &Element) -> bool {
        let removed = {
            let mut children = self.inner.children.borrow_mut();
            let before = children.len();
            children.retain(|c| !c.ptr_eq(child));
            children.len() != before
        };
        if !removed {
            return false;
        }
        *child.inner.parent.borrow_mut() = Weak::new();

        if self.is_connected() {
            self.notify_mutation(Vec::new(), vec![child.clone()]);
        }
        true
    }

    fn notify_mutation(&self, added: Vec<Element>, removed: Vec<Element>) {
        if let Some(document) = self.owner_document() {
            document.notify_mutation(&MutationRecord {
                target: self.clone(),
                added,
                removed,
            });
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Border box in page coordinates.
    pub fn bounds(&self) -> Rect {
        self.inner.bounds.get()
    }

    pub fn set_bounds(&self, bounds: Rect) {
        let old = self.inner.bounds.replace(bounds);
        self.clamp_scroll();
        if old.width != bounds.width || old.height != bounds.height {
            self.notify_resize();
        }
    }

    /// Size of the content inside the element, driving `scroll_width`/`scroll_height`.
    pub fn set_content_size(&self, width: f64, height: f64) {
        let old = self.inner.content.replace((width, height));
        self.clamp_scroll();
        if old != (width, height) {
            self.notify_resize();
        }
    }

    pub fn bounding_client_rect(&self) -> Rect {
        self.bounds()
    }

    pub fn offset_left(&self) -> f64 {
        self.bounds().x
    }

    pub fn offset_top(&self) -> f64 {
        self.bounds().y
    }

    pub fn client_width(&self) -> f64 {
        self.bounds().width
    }

    pub fn client_height(&self) -> f64 {
        self.bounds().height
    }

    pub fn scroll_width(&self) -> f64 {
        self.inner.content.get().0.max(self.client_width())
    }

    pub fn scroll_height(&self) -> f64 {
        self.inner.content.get().1.max(self.client_height())
    }

    // =========================================================================
    // Scroll
    // =========================================================================

    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width() - self.client_width()).max(0.0)
    }

    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height() - self.client_height()).max(0.0)
    }

    pub fn scroll_left(&self) -> f64 {
        self.inner.scroll.get().x
    }

    pub fn scroll_top(&self) -> f64 {
        self.inner.scroll.get().y
    }

    /// Set the horizontal offset, clamped to the scrollable range.
    pub fn set_scroll_left(&self, value: f64) {
        let value = clamp_offset(value, self.max_scroll_left());
        let current = self.inner.scroll.get();
        self.inner.scroll.set(Point::new(value, current.y));
    }

    /// Set the vertical offset, clamped to the scrollable range.
    pub fn set_scroll_top(&self, value: f64) {
        let value = clamp_offset(value, self.max_scroll_top());
        let current = self.inner.scroll.get();
        self.inner.scroll.set(Point::new(current.x, value));
    }

    fn clamp_scroll(&self) {
        let current = self.inner.scroll.get();
        self.inner.scroll.set(Point::new(
            clamp_offset(current.x, self.max_scroll_left()),
            clamp_offset(current.y, self.max_scroll_top()),
        ));
    }

    // =========================================================================
    // Classes and inline style
    // =========================================================================

    pub fn add_class(&self, class: &str) {
        let mut classes = self.inner.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, class: &str) -> bool {
        let mut classes = self.inner.classes.borrow_mut();
        let before = classes.len();
        classes.retain(|c| c != class);
        classes.len() != before
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.classes.borrow().iter().any(|c| c == class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.classes.borrow().clone()
    }

    pub fn set_style_property(&self, name: &str, value: &str, priority: Priority) {
        self.inner.style.borrow_mut().set(name, value, priority);
    }

    pub fn remove_style_property(&self, name: &str) -> Option<String> {
        self.inner.style.borrow_mut().remove(name)
    }

    pub fn style_property(&self, name: &str) -> Option<String> {
        self.inner.style.borrow().get(name).map(str::to_string)
    }

    pub fn style_priority(&self, name: &str) -> Option<Priority> {
        self.inner.style.borrow().priority(name)
    }

    pub fn style(&self) -> Ref<'_, InlineStyle> {
        self.inner.style.borrow()
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Returns false when the same listener is already registered for `kind`.
    pub fn add_event_listener(&self, kind: EventKind, listener: &Listener) -> bool {
        self.inner.listeners.borrow_mut().add(kind, listener)
    }

    pub fn remove_event_listener(&self, kind: EventKind, listener: &Listener) -> bool {
        self.inner.listeners.borrow_mut().remove(kind, listener)
    }

    pub fn has_event_listener(&self, kind: EventKind, listener: &Listener) -> bool {
        self.inner.listeners.borrow().contains(kind, listener)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn listener_count_for(&self, kind: EventKind) -> usize {
        self.inner.listeners.borrow().count(kind)
    }

    /// Drop every listener, as a host re-render that rebuilds the node's wiring does.
    pub fn clear_listeners(&self) {
        self.inner.listeners.borrow_mut().clear();
    }

    /// Deliver `event` to this element's listeners in registration order.
    /// Returns false when a listener prevented the default action.
    ///
    /// Listeners added during dispatch wait for the next event; listeners
    /// removed during dispatch are skipped.
    pub fn dispatch(&self, event: &Event) -> bool {
        let kind = event.kind();
        let listeners = self.inner.listeners.borrow().listeners_for(kind);
        for listener in listeners {
            if self.has_event_listener(kind, &listener) {
                listener.call(event);
            }
        }
        !event.default_prevented()
    }

    // =========================================================================
    // Resize observation
    // =========================================================================

    pub fn observe_resize(&self, callback: impl Fn(&Element) + 'static) -> ResizeObserverId {
        let id = ResizeObserverId(next_handle());
        self.inner
            .resize_observers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    pub fn unobserve_resize(&self, id: ResizeObserverId) -> bool {
        let mut observers = self.inner.resize_observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(i, _)| *i != id);
        observers.len() != before
    }

    pub fn resize_observer_count(&self) -> usize {
        self.inner.resize_observers.borrow().len()
    }

    fn notify_resize(&self) {
        let callbacks: Vec<ResizeCallback> = self
            .inner
            .resize_observers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback(self);
        }
    }
}

fn clamp_offset(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.inner.tag)
            .field("bounds", &self.bounds())
            .field("scroll", &self.inner.scroll.get())
            .field("classes", &*self.inner.classes.borrow())
            .finish()
    }
}
