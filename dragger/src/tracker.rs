use crate::event::Event;
use crate::types::Point;

/// Last pointer position seen over the container, whatever the drag state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    last: Point,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, event: &Event) {
        self.last = event.page();
    }

    pub fn last(&self) -> Point {
        self.last
    }
}
