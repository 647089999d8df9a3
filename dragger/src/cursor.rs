//! Overflow-aware grab cursor.

use crate::dom::{Element, Priority};
use crate::types::Cursor;

pub(crate) const CURSOR_PROPERTY: &str = "cursor";

/// Tracks whether the container's content overflows horizontally and keeps
/// the grab affordance in sync with it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OverflowCursor {
    enabled: bool,
}

impl Default for OverflowCursor {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl OverflowCursor {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Recompute overflow and write or clear the `grab` cursor.
    pub fn refresh(&mut self, container: &Element) {
        self.enabled = container.scroll_width() > container.client_width();
        if self.enabled {
            set_cursor(container, Cursor::Grab);
        } else {
            container.remove_style_property(CURSOR_PROPERTY);
        }
        log::trace!(
            "[cursor] overflow={} ({} > {})",
            self.enabled,
            container.scroll_width(),
            container.client_width()
        );
    }

    /// Show `cursor` only while content overflows.
    pub fn show(&self, container: &Element, cursor: Cursor) {
        if self.enabled {
            set_cursor(container, cursor);
        }
    }
}

pub(crate) fn set_cursor(container: &Element, cursor: Cursor) {
    container.set_style_property(CURSOR_PROPERTY, cursor.as_css(), Priority::Normal);
}
