pub mod dom;
pub mod error;
pub mod event;
pub mod logging;
pub mod options;
pub mod term;
pub mod types;

mod cursor;
mod dragger;
mod interaction;
mod rebind;
mod scrollbar;
mod tracker;
mod tractor;
mod wheel;

pub use dom::{Document, Element, Listener};
pub use dragger::{ContainerCallback, Dragger};
pub use error::{DraggerError, LoggingError, OptionsError};
pub use event::{Event, EventKind, Modifiers, MouseButton};
pub use interaction::{drag_offset, DragSession, InteractionState};
pub use options::{DraggerOptions, TractorOptions};
pub use scrollbar::scrollbar_rule;
pub use tracker::PointerTracker;
pub use tractor::{tractor_step, Tractor, TRACTOR_STEP};
pub use types::*;
pub use wheel::{redirect_wheel, WheelRedirect, WHEEL_LINE_FACTOR};
