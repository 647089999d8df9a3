//! Listener attachment and recovery after the host rebuilds the tree.
//!
//! Attachment is idempotent: the element's registry refuses a second
//! registration of the same handler for the same event kind, so re-running
//! [`attach`] after every tree mutation never stacks handlers.

use crate::dom::{Document, Element, Listener, MutationObserverId};
use crate::event::EventKind;
use crate::options::DraggerOptions;

/// One stable listener per interaction. Identity must not change between
/// attach calls, otherwise re-attachment would duplicate handlers.
#[derive(Debug, Clone)]
pub(crate) struct Handlers {
    pub down: Listener,
    pub drag_move: Listener,
    pub up: Listener,
    pub leave: Listener,
    pub click: Listener,
    pub wheel: Listener,
    pub track: Listener,
}

impl Handlers {
    /// Listener set implied by `options`.
    fn bindings(&self, options: &DraggerOptions) -> Vec<(EventKind, &Listener)> {
        let mut bindings = Vec::with_capacity(8);
        if options.drag {
            bindings.push((EventKind::PointerDown, &self.down));
            bindings.push((EventKind::PointerLeave, &self.leave));
            bindings.push((EventKind::PointerUp, &self.up));
            bindings.push((EventKind::PointerMove, &self.drag_move));
            bindings.push((EventKind::Click, &self.click));
        }
        if options.scroll {
            bindings.push((EventKind::Wheel, &self.wheel));
        }
        bindings.push((EventKind::PointerMove, &self.track));
        bindings.push((EventKind::DragOver, &self.track));
        bindings
    }
}

/// Register every handler on `container`. Returns how many were newly added.
pub(crate) fn attach(container: &Element, options: &DraggerOptions, handlers: &Handlers) -> usize {
    handlers
        .bindings(options)
        .into_iter()
        .filter(|(kind, listener)| container.add_event_listener(*kind, listener))
        .count()
}

/// Unregister every handler from `container`. Returns how many were removed.
pub(crate) fn detach(container: &Element, options: &DraggerOptions, handlers: &Handlers) -> usize {
    handlers
        .bindings(options)
        .into_iter()
        .filter(|(kind, listener)| container.remove_event_listener(*kind, listener))
        .count()
}

/// Re-run `reattach` on every structural change anywhere under `body`.
pub(crate) fn watch(document: &Document, reattach: impl Fn() -> usize + 'static) -> MutationObserverId {
    document.observe_mutations(move |record| {
        let restored = reattach();
        if restored > 0 {
            log::debug!(
                "[rebind] restored {} listener(s) after mutation under <{}>",
                restored,
                record.target.tag()
            );
        }
    })
}
