//! Controller configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::types::{Axis, RebindStrategy};

/// Edge-band autoscroll settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TractorOptions {
    /// Width in pixels of the band along each horizontal edge.
    ///
    /// Default: 100
    #[serde(rename = "size")]
    pub edge_size: f64,

    /// Timer period in milliseconds.
    ///
    /// Default: 20
    #[serde(rename = "interval")]
    pub interval_ms: u64,
}

impl Default for TractorOptions {
    fn default() -> Self {
        Self {
            edge_size: 100.0,
            interval_ms: 20,
        }
    }
}

impl TractorOptions {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Configuration snapshot for a [`Dragger`](crate::Dragger).
///
/// Every key is optional when deserializing; missing keys keep their defaults.
///
/// # Example
///
/// ```
/// use dragger::{Axis, DraggerOptions};
///
/// let options = DraggerOptions::from_json(r#"{ "direction": "both", "tractor": { "size": 60 } }"#)
///     .unwrap();
/// assert_eq!(options.direction, Axis::Both);
/// assert_eq!(options.tractor.edge_size, 60.0);
/// assert_eq!(options.tractor.interval_ms, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraggerOptions {
    /// Pointer-drag scrolling.
    ///
    /// Default: true
    pub drag: bool,

    /// Wheel redirection onto the configured axis.
    ///
    /// Default: true
    pub scroll: bool,

    /// Axis constraint for drag and wheel scrolling.
    ///
    /// Default: x
    pub direction: Axis,

    /// Drag displacement multiplier, also scaling the tractor step.
    ///
    /// Default: 3
    pub speed: f64,

    /// Keep the native scrollbar visible. `false` suppresses it.
    ///
    /// Default: true
    pub scrollbar: bool,

    pub tractor: TractorOptions,

    /// Listener recovery strategy when the host rebuilds the tree.
    ///
    /// Default: watch
    pub rebind: RebindStrategy,
}

impl Default for DraggerOptions {
    fn default() -> Self {
        Self {
            drag: true,
            scroll: true,
            direction: Axis::X,
            speed: 3.0,
            scrollbar: true,
            tractor: TractorOptions::default(),
            rebind: RebindStrategy::Watch,
        }
    }
}

impl DraggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON, merging over the defaults, and validate them.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(OptionsError::InvalidSpeed(self.speed));
        }
        if !self.tractor.edge_size.is_finite() || self.tractor.edge_size < 0.0 {
            return Err(OptionsError::InvalidEdgeSize(self.tractor.edge_size));
        }
        if self.tractor.interval_ms == 0 {
            return Err(OptionsError::ZeroInterval);
        }
        Ok(())
    }

    pub fn with_drag(mut self, enabled: bool) -> Self {
        self.drag = enabled;
        self
    }

    pub fn with_scroll(mut self, enabled: bool) -> Self {
        self.scroll = enabled;
        self
    }

    pub fn with_direction(mut self, direction: Axis) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Hide the native scrollbar while keeping scrolling functional.
    pub fn hide_scrollbar(mut self) -> Self {
        self.scrollbar = false;
        self
    }

    pub fn with_tractor(mut self, edge_size: f64, interval_ms: u64) -> Self {
        self.tractor = TractorOptions {
            edge_size,
            interval_ms,
        };
        self
    }

    pub fn with_rebind(mut self, rebind: RebindStrategy) -> Self {
        self.rebind = rebind;
        self
    }

    pub(crate) fn hides_scrollbar(&self) -> bool {
        !self.scrollbar
    }
}
