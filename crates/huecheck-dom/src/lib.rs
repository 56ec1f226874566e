#![forbid(unsafe_code)]

//! The DOM-like input contract for huecheck.
//!
//! # Role in huecheck
//! The contrast engine does not render pages or compute CSS cascades; it
//! consumes an already-rendered element tree plus a per-element computed
//! style snapshot. This crate defines that contract:
//! - [`Document`]/[`NodeId`] — an arena-backed element tree with the exact
//!   operations the engine needs (typed-tag query, text content, outer
//!   HTML, attributes, parent links)
//! - [`ComputedStyle`] — the explicit computed-style field set
//! - [`StyleLookup`] — how the engine asks for an element's style
//! - [`selector`] — best-effort CSS-like selector strings for reporting
//!
//! Callers adapt whatever DOM abstraction they have (a headless browser
//! snapshot, an HTML parser's tree) to this shape.

/// Best-effort selector generation for reporting.
pub mod selector;
/// Computed-style snapshots and the style lookup contract.
pub mod style;
/// The arena-backed element tree.
pub mod tree;

pub use selector::selector;
pub use style::{ComputedStyle, StyleLookup, StyleMap};
pub use tree::{Document, Element, NodeId};
