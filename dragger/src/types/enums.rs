use serde::{Deserialize, Serialize};

/// Axis constraint for drag and wheel scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    Both,
}

impl Axis {
    pub const fn includes_x(self) -> bool {
        matches!(self, Axis::X | Axis::Both)
    }

    pub const fn includes_y(self) -> bool {
        matches!(self, Axis::Y | Axis::Both)
    }
}

/// Cursor affordance written to the container's inline `cursor` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    pub const fn as_css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// How listeners are re-attached when the host rebuilds the surrounding tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebindStrategy {
    /// Watch the whole document for structural changes and re-attach on each one.
    #[default]
    Watch,
    /// No watcher. The integration layer calls `Dragger::resubscribe` on remount.
    Manual,
}
