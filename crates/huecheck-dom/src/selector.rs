#![forbid(unsafe_code)]

//! Best-effort CSS-like selector strings for reporting.

use crate::tree::{Document, NodeId};

/// Build a human-readable selector for an element: lowercase tag, then
/// `#id` if present, else `.firstClass` if any class is set, else the
/// bare tag. Not guaranteed unique — reporting only.
#[must_use]
pub fn selector(doc: &Document, element: NodeId) -> String {
    let mut out = doc.tag_name(element).to_string();
    if let Some(id) = doc.element_id(element) {
        out.push('#');
        out.push_str(id);
    } else if let Some(class) = doc.classes(element).next() {
        out.push('.');
        out.push_str(class);
    }
    out
}
