#![forbid(unsafe_code)]

//! Browser default styles.
//!
//! When a computed-style snapshot has no value for a property, the engine
//! falls back to what browsers render by default: link blue for anchors,
//! the light-gray button face, bold table headers, and so on. The table is
//! an approximation of the common UA stylesheet, keyed by lowercase tag
//! name.

use huecheck_color::Rgba;

/// Font size assumed when neither the snapshot nor a heading default
/// provides one.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Per-tag default rendering properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowserDefaultStyle {
    pub color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    /// Anchor-only: color once the link has been visited.
    pub visited_color: Option<Rgba>,
    /// Anchor-only: color while the link is active.
    pub active_color: Option<Rgba>,
    pub bold: bool,
    pub monospace: bool,
}

const NONE: BrowserDefaultStyle = BrowserDefaultStyle {
    color: None,
    background_color: None,
    visited_color: None,
    active_color: None,
    bold: false,
    monospace: false,
};

/// Default styles for the tags browsers render distinctively.
const BROWSER_DEFAULTS: &[(&str, BrowserDefaultStyle)] = &[
    (
        "a",
        BrowserDefaultStyle {
            color: Some(Rgba::opaque(0, 0, 238)),
            visited_color: Some(Rgba::opaque(85, 26, 139)),
            active_color: Some(Rgba::opaque(255, 0, 0)),
            ..NONE
        },
    ),
    (
        "button",
        BrowserDefaultStyle {
            color: Some(Rgba::opaque(0, 0, 0)),
            background_color: Some(Rgba::opaque(240, 240, 240)),
            ..NONE
        },
    ),
    (
        "input",
        BrowserDefaultStyle {
            color: Some(Rgba::opaque(0, 0, 0)),
            background_color: Some(Rgba::opaque(255, 255, 255)),
            ..NONE
        },
    ),
    (
        "select",
        BrowserDefaultStyle {
            color: Some(Rgba::opaque(0, 0, 0)),
            background_color: Some(Rgba::opaque(255, 255, 255)),
            ..NONE
        },
    ),
    (
        "textarea",
        BrowserDefaultStyle {
            color: Some(Rgba::opaque(0, 0, 0)),
            background_color: Some(Rgba::opaque(255, 255, 255)),
            ..NONE
        },
    ),
    (
        "th",
        BrowserDefaultStyle {
            color: Some(Rgba::opaque(0, 0, 0)),
            background_color: Some(Rgba::opaque(240, 240, 240)),
            bold: true,
            ..NONE
        },
    ),
    (
        "mark",
        BrowserDefaultStyle {
            color: Some(Rgba::opaque(0, 0, 0)),
            background_color: Some(Rgba::opaque(255, 255, 0)),
            ..NONE
        },
    ),
    (
        "code",
        BrowserDefaultStyle {
            color: Some(Rgba::opaque(0, 0, 0)),
            monospace: true,
            ..NONE
        },
    ),
    (
        "pre",
        BrowserDefaultStyle {
            color: Some(Rgba::opaque(0, 0, 0)),
            monospace: true,
            ..NONE
        },
    ),
];

/// Default style record for a tag, if the UA stylesheet has one.
#[must_use]
pub fn browser_default(tag: &str) -> Option<&'static BrowserDefaultStyle> {
    BROWSER_DEFAULTS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, style)| style)
}

/// Default font size for heading tags (`h1` = 32 down to `h6` = 12).
#[must_use]
pub fn heading_font_size(tag: &str) -> Option<f64> {
    match tag {
        "h1" => Some(32.0),
        "h2" => Some(24.0),
        "h3" => Some(18.72),
        "h4" => Some(16.0),
        "h5" => Some(13.28),
        "h6" => Some(12.0),
        _ => None,
    }
}
