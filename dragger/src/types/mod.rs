mod enums;
mod geometry;

pub use enums::{Axis, Cursor, RebindStrategy};
pub use geometry::{Point, Rect};
