#![forbid(unsafe_code)]

//! CSS color parsing and WCAG contrast math for huecheck.
//!
//! This crate provides:
//! - [`Rgba`] — the immutable color value type with alpha compositing
//! - [`parse_color`] — a total parser for every CSS color notation the
//!   engine consumes (rgb/rgba, hex, keywords, system colors)
//! - [`relative_luminance`] and [`contrast_ratio`] — the WCAG 2.x formulas
//!
//! Every function here is total: unparseable input degrades to a default
//! color instead of failing. Accessibility analysis must keep going on
//! messy real-world HTML.

/// WCAG relative luminance and contrast-ratio math.
pub mod contrast;
/// Named CSS color keyword table.
pub mod named;
/// Total CSS color string parser.
pub mod parse;
/// The RGBA color value type and compositing operators.
pub mod rgba;
/// Approximated CSS system color table.
pub mod system;

pub use contrast::{contrast_ratio, relative_luminance};
pub use parse::parse_color;
pub use rgba::{DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR, Rgba};
