//! Edge-band autoscroll.

use crate::dragger::Dragger;
use crate::types::Rect;

/// Scroll step per tick, multiplied by the configured speed.
pub const TRACTOR_STEP: f64 = 15.0;

/// Horizontal scroll increment for one tick with the pointer at `pointer_x`.
///
/// Negative inside the left band, positive inside the right band, zero elsewhere.
/// Only the horizontal axis is considered, whatever the drag direction.
pub fn tractor_step(rect: Rect, pointer_x: f64, edge_size: f64, speed: f64) -> f64 {
    if pointer_x < rect.left() + edge_size {
        -speed * TRACTOR_STEP
    } else if pointer_x > rect.right() - edge_size {
        speed * TRACTOR_STEP
    } else {
        0.0
    }
}

/// Control handle for a dragger's autoscroll timer.
#[derive(Debug)]
pub struct Tractor<'a> {
    dragger: &'a Dragger,
}

impl<'a> Tractor<'a> {
    pub(crate) fn new(dragger: &'a Dragger) -> Self {
        Self { dragger }
    }

    /// Start the repeating timer. A running timer is left as is.
    ///
    /// Before `init` the request is remembered and the timer starts once a
    /// container is bound.
    pub fn enable(&self) {
        self.dragger.enable_tractor();
    }

    /// Stop the timer and drop any pending request.
    pub fn disable(&self) {
        self.dragger.disable_tractor();
    }

    /// Whether the tractor has been requested and not disabled since.
    pub fn is_enabled(&self) -> bool {
        self.dragger.tractor_enabled()
    }

    /// Whether the timer is live on a bound document.
    pub fn is_running(&self) -> bool {
        self.dragger.tractor_running()
    }
}
