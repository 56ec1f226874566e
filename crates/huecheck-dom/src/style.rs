#![forbid(unsafe_code)]

//! Computed-style snapshots and the style lookup contract.
//!
//! A [`ComputedStyle`] is the exact field set the engine consumes — no
//! more. Values are CSS-syntax strings as a renderer would report them
//! (`"rgb(0, 0, 0)"`, `"16px"`, `"700"`). Fields the snapshot does not
//! know are `None`; the engine resolves those through browser defaults.

use rustc_hash::FxHashMap;

use crate::tree::NodeId;

/// A per-element computed-style snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub display: Option<String>,
    pub visibility: Option<String>,
    pub opacity: Option<String>,
}

impl ComputedStyle {
    /// An empty snapshot (everything unknown).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(mut self, value: &str) -> Self {
        self.color = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn background_color(mut self, value: &str) -> Self {
        self.background_color = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn font_size(mut self, value: &str) -> Self {
        self.font_size = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn font_weight(mut self, value: &str) -> Self {
        self.font_weight = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn display(mut self, value: &str) -> Self {
        self.display = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn visibility(mut self, value: &str) -> Self {
        self.visibility = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn opacity(mut self, value: &str) -> Self {
        self.opacity = Some(value.to_string());
        self
    }
}

/// How the engine asks for an element's computed style.
///
/// Implementations must be total: an element with no snapshot yields the
/// empty style, never an error.
pub trait StyleLookup {
    fn computed_style(&self, element: NodeId) -> ComputedStyle;
}

/// A plain closure works as a style lookup.
impl<F> StyleLookup for F
where
    F: Fn(NodeId) -> ComputedStyle,
{
    fn computed_style(&self, element: NodeId) -> ComputedStyle {
        self(element)
    }
}

/// Map-backed style lookup, the common way to drive the engine in tests
/// and adapters.
#[derive(Debug, Default, Clone)]
pub struct StyleMap {
    styles: FxHashMap<NodeId, ComputedStyle>,
}

impl StyleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the snapshot for an element.
    pub fn insert(&mut self, element: NodeId, style: ComputedStyle) {
        self.styles.insert(element, style);
    }

    /// Builder-style variant of [`StyleMap::insert`].
    #[must_use]
    pub fn with(mut self, element: NodeId, style: ComputedStyle) -> Self {
        self.insert(element, style);
        self
    }
}

impl StyleLookup for StyleMap {
    fn computed_style(&self, element: NodeId) -> ComputedStyle {
        self.styles.get(&element).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Document, Element};

    #[test]
    fn builder_sets_only_named_fields() {
        let style = ComputedStyle::new().color("rgb(0, 0, 0)").font_size("16px");
        assert_eq!(style.color.as_deref(), Some("rgb(0, 0, 0)"));
        assert_eq!(style.font_size.as_deref(), Some("16px"));
        assert_eq!(style.background_color, None);
        assert_eq!(style.font_weight, None);
    }

    #[test]
    fn style_map_is_total() {
        let mut doc = Document::new();
        let known = doc.append(None, Element::new("p"));
        let unknown = doc.append(None, Element::new("p"));

        let styles = StyleMap::new().with(known, ComputedStyle::new().color("red"));
        assert_eq!(styles.computed_style(known).color.as_deref(), Some("red"));
        assert_eq!(styles.computed_style(unknown), ComputedStyle::new());
    }

    #[test]
    fn closures_satisfy_the_contract() {
        let mut doc = Document::new();
        let id = doc.append(None, Element::new("p"));
        let lookup = |_: NodeId| ComputedStyle::new().display("none");
        assert_eq!(lookup.computed_style(id).display.as_deref(), Some("none"));
    }
}
