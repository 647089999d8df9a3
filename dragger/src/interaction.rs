//! Idle/Dragging state machine and the drag-to-scroll computation.

use crate::dom::Element;
use crate::types::{Axis, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
}

/// Drag bookkeeping for one container.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragSession {
    state: InteractionState,
    /// Set once a drag produced movement, cleared on the next pointer-down.
    ignore_click: bool,
    /// Pointer position at drag start, relative to the container origin.
    anchor: Point,
    /// Scroll offsets at drag start.
    origin: Point,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == InteractionState::Dragging
    }

    pub fn ignore_click(&self) -> bool {
        self.ignore_click
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Enter `Dragging`, anchoring at `page` and the container's current offsets.
    pub fn begin(&mut self, container: &Element, page: Point) {
        self.state = InteractionState::Dragging;
        self.anchor = relative_to(container, page);
        self.origin = Point::new(container.scroll_left(), container.scroll_top());
        self.ignore_click = false;
    }

    /// Scroll the container to follow the pointer. Returns false when idle.
    pub fn drag_to(&mut self, container: &Element, page: Point, axis: Axis, speed: f64) -> bool {
        if !self.is_dragging() {
            return false;
        }

        let pointer = relative_to(container, page);
        let (left, top) = drag_offset(self.origin, self.anchor, pointer, speed, axis);
        if let Some(left) = left {
            container.set_scroll_left(left);
        }
        if let Some(top) = top {
            container.set_scroll_top(top);
        }
        self.ignore_click = true;
        true
    }

    pub fn end(&mut self) {
        self.state = InteractionState::Idle;
    }
}

/// Target scroll offsets for a pointer at `pointer` (container-relative).
///
/// Axes outside `axis` are `None` and must be left untouched.
pub fn drag_offset(
    origin: Point,
    anchor: Point,
    pointer: Point,
    speed: f64,
    axis: Axis,
) -> (Option<f64>, Option<f64>) {
    let walk = pointer - anchor;
    let left = axis.includes_x().then(|| origin.x - walk.x * speed);
    let top = axis.includes_y().then(|| origin.y - walk.y * speed);
    (left, top)
}

fn relative_to(container: &Element, page: Point) -> Point {
    Point::new(page.x - container.offset_left(), page.y - container.offset_top())
}
