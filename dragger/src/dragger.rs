//! The drag-and-scroll controller and its lifecycle.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use uuid::Uuid;

use crate::cursor::{set_cursor, OverflowCursor, CURSOR_PROPERTY};
use crate::dom::{
    Document, Element, Listener, MutationObserverId, Priority, ResizeObserverId, TimerId,
};
use crate::error::DraggerError;
use crate::event::Event;
use crate::interaction::{DragSession, InteractionState};
use crate::options::DraggerOptions;
use crate::rebind::{self, Handlers};
use crate::scrollbar;
use crate::tracker::PointerTracker;
use crate::tractor::{tractor_step, Tractor};
use crate::types::{Cursor, Point, RebindStrategy};
use crate::wheel::redirect_wheel;

const SCROLL_BEHAVIOR: &str = "scroll-behavior";

/// Outward notification receiving the container after a scroll mutation.
pub type ContainerCallback = Rc<dyn Fn(&Element)>;

fn generate_id() -> String {
    format!("dragger-{}", Uuid::new_v4())
}

/// Resources acquired by `init` and released by `destroy`.
struct Session {
    document: Document,
    container: Element,
    mutation: Option<MutationObserverId>,
    resize: ResizeObserverId,
}

/// A callback to run once the core borrow is released.
struct Notify {
    callback: ContainerCallback,
    container: Element,
}

impl Notify {
    fn run(self) {
        (self.callback)(&self.container);
    }
}

struct Core {
    id: String,
    options: DraggerOptions,
    session: Option<Session>,
    drag: DragSession,
    tracker: PointerTracker,
    cursor: OverflowCursor,
    tractor: Option<TimerId>,
    tractor_enabled: bool,
    dragged: Option<ContainerCallback>,
    scrolled: Option<ContainerCallback>,
    handlers: Handlers,
}

impl Core {
    fn container(&self) -> Option<Element> {
        self.session.as_ref().map(|s| s.container.clone())
    }

    fn attach(&self) -> usize {
        match &self.session {
            Some(session) => rebind::attach(&session.container, &self.options, &self.handlers),
            None => 0,
        }
    }

    fn notify(callback: &Option<ContainerCallback>, container: Element) -> Option<Notify> {
        callback.clone().map(|callback| Notify {
            callback,
            container,
        })
    }

    // =========================================================================
    // Event handlers
    // =========================================================================

    fn on_pointer_down(&mut self, event: &Event) -> Option<Notify> {
        self.tracker.track(event);
        let container = self.container()?;
        self.cursor.show(&container, Cursor::Grabbing);
        self.drag.begin(&container, event.page());
        log::trace!(
            "[dragger] {}: drag start at {:?}, origin {:?}",
            self.id,
            self.drag.anchor(),
            self.drag.origin()
        );
        None
    }

    fn on_pointer_move(&mut self, event: &Event) -> Option<Notify> {
        self.tracker.track(event);
        if !self.drag.is_dragging() {
            return None;
        }
        let container = self.container()?;
        event.prevent_default();
        self.drag.drag_to(
            &container,
            event.page(),
            self.options.direction,
            self.options.speed,
        );
        Self::notify(&self.dragged, container)
    }

    fn on_pointer_release(&mut self, event: &Event) -> Option<Notify> {
        if self.drag.is_dragging() {
            log::trace!("[dragger] {}: drag end ({:?})", self.id, event.kind());
        }
        self.drag.end();
        if let Some(container) = self.container() {
            self.cursor.show(&container, Cursor::Grab);
        }
        self.tracker.track(event);
        None
    }

    fn on_click(&mut self, event: &Event) -> Option<Notify> {
        if self.drag.ignore_click() {
            event.prevent_default();
        }
        self.tracker.track(event);
        None
    }

    fn on_wheel(&mut self, event: &Event) -> Option<Notify> {
        let container = self.container()?;
        event.prevent_default();
        redirect_wheel(
            self.options.direction,
            event.delta_x(),
            event.delta_y(),
            event.shift_key(),
        )
        .apply(&container);
        Self::notify(&self.scrolled, container)
    }

    fn on_track(&mut self, event: &Event) -> Option<Notify> {
        self.tracker.track(event);
        None
    }

    fn tractor_tick(&self) {
        let Some(session) = &self.session else {
            return;
        };
        let container = &session.container;
        let step = tractor_step(
            container.bounding_client_rect(),
            self.tracker.last().x,
            self.options.tractor.edge_size,
            self.options.speed,
        );
        if step != 0.0 {
            container.set_scroll_left(container.scroll_left() + step);
        }
    }

    /// Start the interval on the bound document if enabled and not yet running.
    fn start_tractor(&mut self, weak: Weak<RefCell<Core>>) {
        if !self.tractor_enabled || self.tractor.is_some() {
            return;
        }
        let Some(session) = &self.session else {
            return;
        };
        let timer = session
            .document
            .set_interval(self.options.tractor.interval(), move || {
                let Some(strong) = weak.upgrade() else {
                    return;
                };
                let Ok(core) = strong.try_borrow() else {
                    return;
                };
                core.tractor_tick();
            });
        self.tractor = Some(timer);
        log::debug!(
            "[dragger] {}: tractor running every {}ms",
            self.id,
            self.options.tractor.interval_ms
        );
    }

    fn stop_tractor(&mut self) {
        let Some(timer) = self.tractor.take() else {
            return;
        };
        if let Some(session) = &self.session {
            session.document.clear_interval(timer);
        }
        log::debug!("[dragger] {}: tractor stopped", self.id);
    }

    fn disable_tractor(&mut self) {
        self.tractor_enabled = false;
        self.stop_tractor();
    }
}

/// Wrap a core handler into a listener that holds only a weak reference.
///
/// The borrow is released before any outward callback runs, so a callback may
/// call back into the dragger. Re-entrant deliveries are dropped.
fn listener(
    weak: &Weak<RefCell<Core>>,
    handle: fn(&mut Core, &Event) -> Option<Notify>,
) -> Listener {
    let weak = weak.clone();
    Listener::new(move |event| {
        let Some(strong) = weak.upgrade() else {
            return;
        };
        let notify = match strong.try_borrow_mut() {
            Ok(mut core) => handle(&mut core, event),
            Err(_) => {
                log::trace!("[dragger] re-entrant {:?} ignored", event.kind());
                return;
            }
        };
        if let Some(notify) = notify {
            notify.run();
        }
    })
}

/// Drag-and-scroll controller for one externally owned container.
///
/// # Example
///
/// ```
/// use dragger::{Document, Dragger, DraggerOptions, Event, Rect};
///
/// let document = Document::new();
/// let strip = document.create_element("div");
/// strip.set_bounds(Rect::new(0.0, 0.0, 300.0, 40.0));
/// strip.set_content_size(1200.0, 40.0);
/// document.body().append_child(&strip);
///
/// let dragger = Dragger::new(DraggerOptions::default()).unwrap();
/// dragger.init(Some(&strip));
///
/// strip.dispatch(&Event::pointer_down(150.0, 20.0));
/// strip.dispatch(&Event::pointer_move(140.0, 20.0));
/// assert_eq!(strip.scroll_left(), 30.0);
///
/// dragger.destroy();
/// assert_eq!(strip.listener_count(), 0);
/// ```
pub struct Dragger {
    id: String,
    core: Rc<RefCell<Core>>,
}

impl Default for Dragger {
    fn default() -> Self {
        Self::build(DraggerOptions::default())
    }
}

impl Dragger {
    /// Create a controller. Options are validated and frozen here.
    pub fn new(options: DraggerOptions) -> Result<Self, DraggerError> {
        options.validate()?;
        Ok(Self::build(options))
    }

    fn build(options: DraggerOptions) -> Self {
        let id = generate_id();
        let core = Rc::new_cyclic(|weak: &Weak<RefCell<Core>>| {
            RefCell::new(Core {
                id: id.clone(),
                options,
                session: None,
                drag: DragSession::new(),
                tracker: PointerTracker::new(),
                cursor: OverflowCursor::default(),
                tractor: None,
                tractor_enabled: false,
                dragged: None,
                scrolled: None,
                handlers: Handlers {
                    down: listener(weak, Core::on_pointer_down),
                    drag_move: listener(weak, Core::on_pointer_move),
                    up: listener(weak, Core::on_pointer_release),
                    leave: listener(weak, Core::on_pointer_release),
                    click: listener(weak, Core::on_click),
                    wheel: listener(weak, Core::on_wheel),
                    track: listener(weak, Core::on_track),
                },
            })
        });
        log::debug!("[dragger] {}: created", id);
        Self { id, core }
    }

    /// Process-unique identifier, also used as the scrollbar-suppression class.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> DraggerOptions {
        self.core.borrow().options.clone()
    }

    /// Called with the container after every drag-driven scroll.
    pub fn set_dragged(&self, callback: impl Fn(&Element) + 'static) {
        self.core.borrow_mut().dragged = Some(Rc::new(callback));
    }

    /// Called with the container after every wheel-driven scroll.
    pub fn set_scrolled(&self, callback: impl Fn(&Element) + 'static) {
        self.core.borrow_mut().scrolled = Some(Rc::new(callback));
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Bind to `container`. A missing container is logged and ignored.
    ///
    /// Calling `init` on a bound instance first tears down the previous binding.
    pub fn init(&self, container: Option<&Element>) {
        let Some(container) = container else {
            log::warn!("[dragger] {}: init called without a container", self.id);
            return;
        };
        let Some(document) = container.owner_document() else {
            log::warn!(
                "[dragger] {}: container's document no longer exists",
                self.id
            );
            return;
        };
        if self.is_initialized() {
            log::debug!("[dragger] {}: re-init, releasing previous container", self.id);
            let tractor_enabled = self.core.borrow().tractor_enabled;
            self.destroy();
            self.core.borrow_mut().tractor_enabled = tractor_enabled;
        }

        let mut core = self.core.borrow_mut();

        if core.options.hides_scrollbar() {
            scrollbar::suppress(&document, container, &core.id);
        }
        if core.options.drag {
            set_cursor(container, Cursor::Grab);
        }
        container.set_style_property(SCROLL_BEHAVIOR, "smooth", Priority::Important);

        let attached = rebind::attach(container, &core.options, &core.handlers);

        let mutation = match core.options.rebind {
            RebindStrategy::Watch => {
                let weak = Rc::downgrade(&self.core);
                Some(rebind::watch(&document, move || {
                    let Some(strong) = weak.upgrade() else {
                        return 0;
                    };
                    let Ok(core) = strong.try_borrow() else {
                        return 0;
                    };
                    core.attach()
                }))
            }
            RebindStrategy::Manual => None,
        };

        core.cursor.refresh(container);
        let weak = Rc::downgrade(&self.core);
        let resize = container.observe_resize(move |element| {
            let Some(strong) = weak.upgrade() else {
                return;
            };
            let Ok(mut core) = strong.try_borrow_mut() else {
                return;
            };
            core.cursor.refresh(element);
        });

        core.session = Some(Session {
            document,
            container: container.clone(),
            mutation,
            resize,
        });
        core.start_tractor(Rc::downgrade(&self.core));

        log::debug!(
            "[dragger] {}: bound to <{}> with {} listener(s), rebind={:?}",
            core.id,
            container.tag(),
            attached,
            core.options.rebind
        );
    }

    /// Release everything `init` acquired. Safe to call repeatedly or before `init`.
    pub fn destroy(&self) {
        let mut core = self.core.borrow_mut();
        core.disable_tractor();
        core.drag.end();

        let Some(session) = core.session.take() else {
            return;
        };
        let container = &session.container;

        let detached = rebind::detach(container, &core.options, &core.handlers);
        if let Some(observer) = session.mutation {
            session.document.disconnect(observer);
        }
        container.unobserve_resize(session.resize);

        if core.options.hides_scrollbar() {
            scrollbar::restore(&session.document, container, &core.id);
        }
        container.remove_style_property(SCROLL_BEHAVIOR);
        container.remove_style_property(CURSOR_PROPERTY);

        log::debug!(
            "[dragger] {}: released <{}>, {} listener(s) detached",
            core.id,
            container.tag(),
            detached
        );
    }

    /// Force the interaction back to idle without touching listeners or watchers.
    pub fn clear(&self) {
        self.core.borrow_mut().drag.end();
    }

    /// Re-attach listeners to the bound container. Returns how many were missing.
    ///
    /// For hosts with a reliable remount hook, paired with [`RebindStrategy::Manual`].
    pub fn resubscribe(&self) -> usize {
        let restored = self.core.borrow().attach();
        if restored > 0 {
            log::debug!("[dragger] {}: resubscribed {} listener(s)", self.id, restored);
        }
        restored
    }

    pub fn tractor(&self) -> Tractor<'_> {
        Tractor::new(self)
    }

    /// Request the tractor. It runs while the dragger is bound, starting at `init`
    /// when requested before it.
    pub(crate) fn enable_tractor(&self) {
        let mut core = self.core.borrow_mut();
        core.tractor_enabled = true;
        if core.session.is_none() {
            log::debug!("[dragger] {}: tractor enabled, waiting for init", self.id);
        }
        core.start_tractor(Rc::downgrade(&self.core));
    }

    pub(crate) fn disable_tractor(&self) {
        self.core.borrow_mut().disable_tractor();
    }

    pub(crate) fn tractor_running(&self) -> bool {
        self.core.borrow().tractor.is_some()
    }

    pub(crate) fn tractor_enabled(&self) -> bool {
        self.core.borrow().tractor_enabled
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn is_initialized(&self) -> bool {
        self.core.borrow().session.is_some()
    }

    pub fn container(&self) -> Option<Element> {
        self.core.borrow().container()
    }

    pub fn state(&self) -> InteractionState {
        self.core.borrow().drag.state()
    }

    pub fn ignore_click(&self) -> bool {
        self.core.borrow().drag.ignore_click()
    }

    /// Last pointer position seen over the container.
    pub fn last_pointer(&self) -> Point {
        self.core.borrow().tracker.last()
    }

    /// Whether content currently overflows the container horizontally.
    pub fn overflow_cursor(&self) -> bool {
        self.core.borrow().cursor.enabled()
    }
}

impl Drop for Dragger {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for Dragger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.core.borrow();
        f.debug_struct("Dragger")
            .field("id", &self.id)
            .field("options", &core.options)
            .field("state", &core.drag.state())
            .field("bound", &core.session.is_some())
            .field("tractor", &core.tractor.is_some())
            .finish()
    }
}
