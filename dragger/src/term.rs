//! Terminal integration: crossterm mouse input as container events.
//!
//! Terminal coordinates are cells, so a host drives a container whose geometry
//! is expressed in cells too.

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::dom::Element;
use crate::event::{Event, EventKind, Modifiers};
use crate::types::Point;

/// Wheel delta reported per scroll notch.
pub const DEFAULT_LINE_DELTA: f64 = 1.0;

/// Translate one crossterm mouse event. A button release yields a pointer-up
/// followed by a click, since terminals report no separate click.
pub fn translate(event: &MouseEvent, line_delta: f64) -> Vec<Event> {
    let page = Point::new(f64::from(event.column), f64::from(event.row));
    let modifiers = Modifiers::from(event.modifiers);
    let pointer = |kind| Event::new(kind, page).with_modifiers(modifiers);
    let wheel = |dx, dy| Event::wheel(dx, dy).with_page(page).with_modifiers(modifiers);

    match event.kind {
        MouseEventKind::Down(button) => {
            vec![pointer(EventKind::PointerDown).with_button(button.into())]
        }
        MouseEventKind::Up(button) => vec![
            pointer(EventKind::PointerUp).with_button(button.into()),
            pointer(EventKind::Click).with_button(button.into()),
        ],
        MouseEventKind::Drag(button) => {
            vec![pointer(EventKind::PointerMove).with_button(button.into())]
        }
        MouseEventKind::Moved => vec![pointer(EventKind::PointerMove)],
        MouseEventKind::ScrollDown => vec![wheel(0.0, line_delta)],
        MouseEventKind::ScrollUp => vec![wheel(0.0, -line_delta)],
        MouseEventKind::ScrollRight => vec![wheel(line_delta, 0.0)],
        MouseEventKind::ScrollLeft => vec![wheel(-line_delta, 0.0)],
    }
}

/// Route a crossterm mouse event to `container`.
///
/// Events outside the container's bounds become a single pointer-leave, which
/// ends any drag in progress. Returns false if any delivered event had its
/// default action prevented.
pub fn dispatch_mouse(container: &Element, event: &MouseEvent, line_delta: f64) -> bool {
    let page = Point::new(f64::from(event.column), f64::from(event.row));
    let inside = container.bounds().contains(page);
    let is_drag = matches!(event.kind, MouseEventKind::Drag(_));

    if !inside && !is_drag {
        let leave = Event::new(EventKind::PointerLeave, page);
        return container.dispatch(&leave);
    }

    translate(event, line_delta)
        .iter()
        .fold(true, |proceed, e| container.dispatch(e) && proceed)
}
