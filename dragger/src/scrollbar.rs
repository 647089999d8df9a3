//! Native scrollbar suppression.

use crate::dom::{Document, Element, StyleId};

/// Stylesheet hiding the scrollbar of elements carrying class `id`.
pub fn scrollbar_rule(id: &str) -> String {
    format!(
        ".{id} {{
    -ms-overflow-style: none !important;
    scrollbar-width: none !important;
}}
.{id}::-webkit-scrollbar {{
    display: none !important;
}}
"
    )
}

pub(crate) fn suppress(document: &Document, container: &Element, id: &str) -> StyleId {
    container.add_class(id);
    document.append_owned_style(id, scrollbar_rule(id))
}

/// Undo [`suppress`]. Style elements are found through the owner index.
pub(crate) fn restore(document: &Document, container: &Element, id: &str) -> usize {
    container.remove_class(id);
    document.remove_styles_owned_by(id)
}
