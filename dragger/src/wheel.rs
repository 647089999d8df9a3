//! Wheel-to-axis redirection.

use crate::dom::Element;
use crate::types::Axis;

/// Multiplier applied to single-axis wheel deltas.
pub const WHEEL_LINE_FACTOR: f64 = 5.0;

/// Scroll increments produced by one wheel event. `None` leaves the axis alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelRedirect {
    pub left: Option<f64>,
    pub top: Option<f64>,
}

impl WheelRedirect {
    pub fn apply(&self, container: &Element) {
        if let Some(left) = self.left {
            container.set_scroll_left(container.scroll_left() + left);
        }
        if let Some(top) = self.top {
            container.set_scroll_top(container.scroll_top() + top);
        }
    }
}

/// Map a wheel delta onto `axis`.
///
/// On the x axis a nonzero horizontal delta is used as is. Only when it is zero
/// does the vertical delta stand in, gated by shift and scaled by
/// [`WHEEL_LINE_FACTOR`]. The y axis always scales, `Both` never does.
pub fn redirect_wheel(axis: Axis, delta_x: f64, delta_y: f64, shift: bool) -> WheelRedirect {
    match axis {
        Axis::X => {
            let fallback = (if shift { delta_y } else { 0.0 }) * WHEEL_LINE_FACTOR;
            let left = if truthy(delta_x) { delta_x } else { fallback };
            WheelRedirect {
                left: Some(left),
                top: None,
            }
        }
        Axis::Y => WheelRedirect {
            left: None,
            top: Some(delta_y * WHEEL_LINE_FACTOR),
        },
        Axis::Both => WheelRedirect {
            left: Some(delta_x),
            top: Some(delta_y),
        },
    }
}

/// Zero and NaN deltas count as "no horizontal input".
fn truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
