#![forbid(unsafe_code)]

//! Arena-backed element tree.
//!
//! A deliberately small DOM: elements with a tag name, attributes, direct
//! text, and parent/child links. Nodes are addressed by [`NodeId`] into the
//! owning [`Document`] arena, so traversal never fights the borrow checker
//! and the tree is trivially read-only shareable during analysis.

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Builder-style element descriptor, consumed by [`Document::append`].
///
/// # Example
/// ```
/// use huecheck_dom::{Document, Element};
///
/// let mut doc = Document::new();
/// let body = doc.append(None, Element::new("div").class("page"));
/// let para = doc.append(Some(body), Element::new("p").id("intro").text("Hello"));
/// assert_eq!(doc.tag_name(para), "p");
/// assert_eq!(doc.parent(para), Some(body));
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
}

impl Element {
    /// Start an element with the given tag name (stored lowercase).
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Shorthand for the `id` attribute.
    #[must_use]
    pub fn id(self, value: &str) -> Self {
        self.attr("id", value)
    }

    /// Shorthand for the `class` attribute.
    #[must_use]
    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    /// Set the element's direct text content.
    #[must_use]
    pub fn text(mut self, value: &str) -> Self {
        self.text = value.to_string();
        self
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An element tree.
#[derive(Debug, Default, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    roots: Vec<NodeId>,
}

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent`, or as a root when `parent` is
    /// `None`. Returns the new node's id.
    pub fn append(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            tag: element.tag,
            attributes: element.attributes,
            text: element.text,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Number of elements in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The element's lowercase tag name.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    /// The element's parent, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The element's children, in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// An attribute value, if present.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0]
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `id` attribute, if present.
    #[must_use]
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.attribute(id, "id")
    }

    /// The raw `class` attribute, if present.
    #[must_use]
    pub fn class_name(&self, id: NodeId) -> Option<&str> {
        self.attribute(id, "class")
    }

    /// Iterate the element's class list.
    pub fn classes(&self, id: NodeId) -> impl Iterator<Item = &str> {
        self.class_name(id)
            .unwrap_or("")
            .split_ascii_whitespace()
    }

    /// Whether the element's class list contains `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).any(|c| c == class)
    }

    /// The element's text content: its direct text followed by every
    /// descendant's, in tree order (the `textContent` analog).
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        out.push_str(&self.nodes[id.0].text);
        for &child in &self.nodes[id.0].children {
            self.collect_text(child, out);
        }
    }

    /// Serialize the element and its subtree back to markup (the
    /// `outerHTML` analog, used verbatim in finding records).
    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        out.push('<');
        out.push_str(&node.tag);
        for (name, value) in &node.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&node.tag.as_str()) {
            return;
        }
        out.push_str(&escape_text(&node.text));
        for &child in &node.children {
            self.write_html(child, out);
        }
        out.push_str("</");
        out.push_str(&node.tag);
        out.push('>');
    }

    /// All elements whose tag is in `tags`, in document (pre-)order.
    /// This is the engine's `querySelectorAll("p, div, ...")` analog.
    #[must_use]
    pub fn elements_by_tags(&self, tags: &[&str]) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &root in &self.roots {
            self.visit_tags(root, tags, &mut out);
        }
        out
    }

    fn visit_tags(&self, id: NodeId, tags: &[&str], out: &mut Vec<NodeId>) {
        if tags.contains(&self.nodes[id.0].tag.as_str()) {
            out.push(id);
        }
        for &child in &self.nodes[id.0].children {
            self.visit_tags(child, tags, out);
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let outer = doc.append(None, Element::new("div").class("wrap"));
        let para = doc.append(Some(outer), Element::new("p").text("Hello "));
        let span = doc.append(Some(para), Element::new("span").text("world"));
        (doc, outer, para, span)
    }

    #[test]
    fn parent_links() {
        let (doc, outer, para, span) = sample();
        assert_eq!(doc.parent(outer), None);
        assert_eq!(doc.parent(para), Some(outer));
        assert_eq!(doc.parent(span), Some(para));
    }

    #[test]
    fn tag_names_are_lowercased() {
        let mut doc = Document::new();
        let id = doc.append(None, Element::new("DIV"));
        assert_eq!(doc.tag_name(id), "div");
    }

    #[test]
    fn text_content_is_recursive() {
        let (doc, outer, para, span) = sample();
        assert_eq!(doc.text_content(span), "world");
        assert_eq!(doc.text_content(para), "Hello world");
        assert_eq!(doc.text_content(outer), "Hello world");
    }

    #[test]
    fn attributes_and_classes() {
        let mut doc = Document::new();
        let id = doc.append(
            None,
            Element::new("a").id("home").class("nav visited").attr("href", "/"),
        );
        assert_eq!(doc.element_id(id), Some("home"));
        assert_eq!(doc.attribute(id, "href"), Some("/"));
        assert!(doc.has_class(id, "nav"));
        assert!(doc.has_class(id, "visited"));
        assert!(!doc.has_class(id, "active"));
    }

    #[test]
    fn outer_html_round_trip_shape() {
        let (doc, outer, ..) = sample();
        assert_eq!(
            doc.outer_html(outer),
            "<div class=\"wrap\"><p>Hello <span>world</span></p></div>"
        );
    }

    #[test]
    fn outer_html_escapes_text_and_attrs() {
        let mut doc = Document::new();
        let id = doc.append(
            None,
            Element::new("p").attr("title", "a \"b\"").text("1 < 2 & 3"),
        );
        assert_eq!(
            doc.outer_html(id),
            "<p title=\"a &quot;b&quot;\">1 &lt; 2 &amp; 3</p>"
        );
    }

    #[test]
    fn void_tags_have_no_closing_tag() {
        let mut doc = Document::new();
        let id = doc.append(None, Element::new("input").attr("type", "text"));
        assert_eq!(doc.outer_html(id), "<input type=\"text\">");
    }

    #[test]
    fn elements_by_tags_in_document_order() {
        let (doc, outer, para, span) = sample();
        assert_eq!(doc.elements_by_tags(&["div", "p", "span"]), vec![outer, para, span]);
        assert_eq!(doc.elements_by_tags(&["span"]), vec![span]);
        assert_eq!(doc.elements_by_tags(&["h1"]), Vec::<NodeId>::new());
    }

    #[test]
    fn multiple_roots_visit_in_order() {
        let mut doc = Document::new();
        let first = doc.append(None, Element::new("p").text("a"));
        let second = doc.append(None, Element::new("p").text("b"));
        assert_eq!(doc.elements_by_tags(&["p"]), vec![first, second]);
    }
}
