#![forbid(unsafe_code)]

//! Approximated CSS system colors.
//!
//! Real system colors come from the browser/OS theme and cannot be resolved
//! outside a renderer. These are the common light-theme values browsers
//! ship, which is good enough for contrast estimation. Lookup is
//! case-sensitive: system color keywords are conventionally CamelCase and
//! the engine distinguishes them from the lowercase named-color table.

use crate::rgba::Rgba;

/// Look up a system color keyword (case-sensitive).
#[must_use]
pub fn system_color(name: &str) -> Option<Rgba> {
    SYSTEM_COLORS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, color)| *color)
}

const SYSTEM_COLORS: &[(&str, Rgba)] = &[
    ("ButtonFace", Rgba::opaque(240, 240, 240)),
    ("ButtonText", Rgba::opaque(0, 0, 0)),
    ("Canvas", Rgba::opaque(255, 255, 255)),
    ("CanvasText", Rgba::opaque(0, 0, 0)),
    ("LinkText", Rgba::opaque(0, 0, 238)),
    ("VisitedText", Rgba::opaque(85, 26, 139)),
    ("ActiveText", Rgba::opaque(255, 0, 0)),
    ("Field", Rgba::opaque(255, 255, 255)),
    ("FieldText", Rgba::opaque(0, 0, 0)),
    ("GrayText", Rgba::opaque(128, 128, 128)),
    ("Highlight", Rgba::opaque(51, 153, 255)),
    ("HighlightText", Rgba::opaque(255, 255, 255)),
    ("Mark", Rgba::opaque(255, 255, 0)),
    ("MarkText", Rgba::opaque(0, 0, 0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_system_colors() {
        assert_eq!(system_color("ButtonFace"), Some(Rgba::opaque(240, 240, 240)));
        assert_eq!(system_color("Canvas"), Some(Rgba::opaque(255, 255, 255)));
        assert_eq!(system_color("LinkText"), Some(Rgba::opaque(0, 0, 238)));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(system_color("buttonface"), None);
        assert_eq!(system_color("BUTTONFACE"), None);
    }

    #[test]
    fn unknown_is_none() {
        assert_eq!(system_color("WindowFrame2"), None);
    }
}
