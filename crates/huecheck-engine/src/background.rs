#![forbid(unsafe_code)]

//! Effective background resolution.
//!
//! An element with a translucent (or absent) background visually sits on
//! whatever shows through from its ancestors. This module folds the
//! ancestor chain's declared backgrounds into the single opaque color the
//! element actually renders against.
//!
//! The fold is split in two phases: first collect the ordered layer
//! sequence (nearest to farthest, stopping at the first opaque layer),
//! then composite farthest-to-nearest with the "over" operator. Collecting
//! first keeps the compositing step a pure reduction that is easy to test
//! in isolation.

use smallvec::SmallVec;
use tracing::trace;

use huecheck_color::{DEFAULT_BACKGROUND_COLOR, Rgba, parse_color};
use huecheck_dom::{Document, NodeId, StyleLookup};

/// Computed-style values a renderer reports for "no background at all".
/// These layers contribute nothing and are skipped during collection.
#[must_use]
pub(crate) fn is_declared_transparent(value: &str) -> bool {
    value == "transparent" || value == "rgba(0, 0, 0, 0)"
}

/// Resolve the opaque color `element` visually sits on.
///
/// Walks `element` and its ancestors, collecting declared non-transparent
/// backgrounds until an opaque one is found; no declared background
/// anywhere yields the default canvas (opaque white). The collected layers
/// are composited farthest-to-nearest, and a still-translucent result is
/// flattened onto the default canvas so the caller always gets an opaque
/// color.
#[must_use]
pub fn effective_background<S: StyleLookup>(doc: &Document, element: NodeId, styles: &S) -> Rgba {
    let layers = collect_layers(doc, element, styles);
    trace!(layers = layers.len(), "compositing background layers");
    composite_layers(&layers)
}

/// Nearest-to-farthest declared backgrounds, stopping at the first opaque
/// layer.
fn collect_layers<S: StyleLookup>(
    doc: &Document,
    element: NodeId,
    styles: &S,
) -> SmallVec<[Rgba; 4]> {
    let mut layers = SmallVec::new();
    let mut current = Some(element);
    while let Some(id) = current {
        let style = styles.computed_style(id);
        if let Some(declared) = style.background_color.as_deref()
            && !declared.is_empty()
            && !is_declared_transparent(declared)
        {
            let color = parse_color(Some(declared));
            layers.push(color);
            if color.is_opaque() {
                break;
            }
        }
        current = doc.parent(id);
    }
    layers
}

/// Pure compositing reduction over a nearest-to-farthest layer sequence.
fn composite_layers(layers: &[Rgba]) -> Rgba {
    let Some(farthest) = layers.last() else {
        return DEFAULT_BACKGROUND_COLOR;
    };

    // The implicit canvas backs any chain that never reached opacity.
    let canvas = if farthest.is_opaque() {
        None
    } else {
        Some(DEFAULT_BACKGROUND_COLOR)
    };

    let folded = canvas
        .into_iter()
        .chain(layers.iter().rev().copied())
        .reduce(|acc, layer| layer.over(acc))
        .unwrap_or(DEFAULT_BACKGROUND_COLOR);

    if folded.is_opaque() {
        folded
    } else {
        folded.blend_over(DEFAULT_BACKGROUND_COLOR)
    }
}
