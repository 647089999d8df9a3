//! Headless, single-threaded host document.
//!
//! Stands in for the browser tree the controller drives: elements with scroll
//! offsets, class lists and inline style, a style-element collection, tree
//! mutation watchers, per-element resize watchers and interval timers on a
//! virtual clock.

mod css;
mod document;
mod element;
mod listener;
mod timer;

use std::sync::atomic::{AtomicU64, Ordering};

pub use css::{InlineStyle, Priority, StyleElement, StyleId, StyleSheets};
pub use document::{Document, MutationCallback, MutationObserverId, MutationRecord};
pub use element::{Element, ResizeCallback, ResizeObserverId};
pub use listener::{Listener, ListenerRegistry};
pub use timer::{Scheduler, TimerCallback, TimerId};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Process-wide counter shared by every handle type in this module.
pub(crate) fn next_handle() -> u64 {
    NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
}
