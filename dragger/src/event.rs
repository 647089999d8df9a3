use std::cell::Cell;

use crate::types::Point;

/// Event categories a container can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    Click,
    /// Pointer moving over the container during a native drag-and-drop.
    DragOver,
    Wheel,
}

/// A dispatched event. Handlers receive it by reference and may only flip
/// its prevent-default flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: EventKind,
    /// Pointer position in page coordinates.
    page: Point,
    /// Wheel deltas, zero for pointer events.
    delta: Point,
    modifiers: Modifiers,
    button: MouseButton,
    default_prevented: Cell<bool>,
}

impl Event {
    pub fn new(kind: EventKind, page: Point) -> Self {
        Self {
            kind,
            page,
            delta: Point::ORIGIN,
            modifiers: Modifiers::default(),
            button: MouseButton::Left,
            default_prevented: Cell::new(false),
        }
    }

    pub fn pointer_down(x: f64, y: f64) -> Self {
        Self::new(EventKind::PointerDown, Point::new(x, y))
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::new(EventKind::PointerMove, Point::new(x, y))
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        Self::new(EventKind::PointerUp, Point::new(x, y))
    }

    pub fn pointer_leave(x: f64, y: f64) -> Self {
        Self::new(EventKind::PointerLeave, Point::new(x, y))
    }

    pub fn click(x: f64, y: f64) -> Self {
        Self::new(EventKind::Click, Point::new(x, y))
    }

    pub fn drag_over(x: f64, y: f64) -> Self {
        Self::new(EventKind::DragOver, Point::new(x, y))
    }

    pub fn wheel(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta: Point::new(delta_x, delta_y),
            ..Self::new(EventKind::Wheel, Point::ORIGIN)
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_page(mut self, page: Point) -> Self {
        self.page = page;
        self
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn page(&self) -> Point {
        self.page
    }

    pub fn delta_x(&self) -> f64 {
        self.delta.x
    }

    pub fn delta_y(&self) -> f64 {
        self.delta.y
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn button(&self) -> MouseButton {
        self.button
    }

    pub fn shift_key(&self) -> bool {
        self.modifiers.shift
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Key modifiers held while the event fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
