#![forbid(unsafe_code)]

//! Visibility gating.
//!
//! Hidden content must not generate contrast findings, so elements are
//! filtered before any color work happens.

use huecheck_dom::{Document, NodeId, StyleLookup};

/// Whether an element is excluded from analysis: `display: none`,
/// `visibility: hidden`, zero opacity, or `aria-hidden="true"`.
#[must_use]
pub fn is_hidden<S: StyleLookup>(doc: &Document, element: NodeId, styles: &S) -> bool {
    let style = styles.computed_style(element);
    style.display.as_deref() == Some("none")
        || style.visibility.as_deref() == Some("hidden")
        || style.opacity.as_deref().is_some_and(is_zero_opacity)
        || doc.attribute(element, "aria-hidden") == Some("true")
}

/// `"0"` or any numeric-zero equivalent (`"0.0"`, `" 0 "`).
fn is_zero_opacity(value: &str) -> bool {
    value.trim().parse::<f64>().map_or(value == "0", |v| v == 0.0)
}
