#![forbid(unsafe_code)]

//! Total CSS color string parser.
//!
//! `parse_color` never fails: any input the parser cannot make sense of
//! degrades to [`DEFAULT_TEXT_COLOR`]. The notations accepted mirror what
//! computed-style snapshots actually contain — `rgb()`/`rgba()` with
//! integer or percentage channels, 3/4/6/8-digit hex, the `transparent`
//! and `currentcolor` keywords, system colors, and named colors.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::named::named_color;
use crate::rgba::{DEFAULT_TEXT_COLOR, Rgba};
use crate::system::system_color;

/// Channel pattern for `rgb()`/`rgba()`: three integer-or-percentage
/// channels and an optional fractional alpha, whitespace-tolerant.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)rgba?\(\s*(\d+|[\d.]+%)\s*,\s*(\d+|[\d.]+%)\s*,\s*(\d+|[\d.]+%)\s*(?:,\s*([\d.]+))?\s*\)",
    )
    .expect("rgb channel pattern is valid")
});

/// Parse a CSS color string into an [`Rgba`] value.
///
/// Total: `None`, empty, and unparseable input all yield
/// [`DEFAULT_TEXT_COLOR`]. Resolution order is rgb/rgba notation, hex
/// notation, the `transparent`/`currentcolor` keywords, system colors
/// (case-sensitive), then named colors (case-insensitive).
#[must_use]
pub fn parse_color(input: Option<&str>) -> Rgba {
    let Some(raw) = input else {
        return DEFAULT_TEXT_COLOR;
    };
    if raw.is_empty() {
        return DEFAULT_TEXT_COLOR;
    }

    if raw.len() >= 3 && raw.as_bytes()[..3].eq_ignore_ascii_case(b"rgb") {
        return parse_rgb_notation(raw).unwrap_or(DEFAULT_TEXT_COLOR);
    }
    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex_notation(hex).unwrap_or(DEFAULT_TEXT_COLOR);
    }
    if raw == "transparent" {
        return Rgba::transparent();
    }
    if raw == "currentcolor" {
        return DEFAULT_TEXT_COLOR;
    }

    if let Some(color) = system_color(raw) {
        debug!(keyword = raw, "system color matched, using approximation");
        return color;
    }
    if let Some(color) = named_color(raw) {
        return color;
    }

    warn!(input = raw, "unrecognized color, falling back to default");
    DEFAULT_TEXT_COLOR
}

/// Parse `rgb(...)`/`rgba(...)` via the channel pattern.
fn parse_rgb_notation(input: &str) -> Option<Rgba> {
    let caps = RGB_RE.captures(input)?;
    let r = parse_channel(caps.get(1)?.as_str())?;
    let g = parse_channel(caps.get(2)?.as_str())?;
    let b = parse_channel(caps.get(3)?.as_str())?;
    let a = match caps.get(4) {
        Some(alpha) => parse_alpha(alpha.as_str())?,
        None => 1.0,
    };
    Some(Rgba::new(r, g, b, a))
}

/// One channel: a plain integer or a percentage (`NN%` → `round(NN * 2.55)`).
/// Out-of-range values clamp to 255.
fn parse_channel(value: &str) -> Option<u8> {
    if let Some(pct) = value.strip_suffix('%') {
        let pct: f64 = pct.parse().ok()?;
        Some((pct * 2.55).round().clamp(0.0, 255.0) as u8)
    } else {
        let v: u32 = value.parse().ok()?;
        Some(v.min(255) as u8)
    }
}

/// Fractional alpha, leading-dot decimals accepted; clamped to `[0, 1]`.
fn parse_alpha(value: &str) -> Option<f64> {
    let a: f64 = value.parse().ok()?;
    Some(a.clamp(0.0, 1.0))
}

/// Parse the digits after `#`. Valid lengths are exactly 3, 4, 6, 8;
/// shorthand forms expand by doubling each digit.
fn parse_hex_notation(hex: &str) -> Option<Rgba> {
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };

    let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&expanded[range], 16).ok();
    let r = byte(0..2)?;
    let g = byte(2..4)?;
    let b = byte(4..6)?;
    let a = if expanded.len() == 8 {
        f64::from(byte(6..8)?) / 255.0
    } else {
        1.0
    };
    Some(Rgba::new(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- rgb()/rgba() notation ---

    #[test]
    fn rgb_integers() {
        assert_eq!(parse_color(Some("rgb(255, 0, 0)")), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color(Some("rgb(0, 0, 0)")), Rgba::opaque(0, 0, 0));
    }

    #[test]
    fn rgb_malformed_falls_back() {
        assert_eq!(parse_color(Some("rgb(255)")), DEFAULT_TEXT_COLOR);
        assert_eq!(parse_color(Some("rgb()")), DEFAULT_TEXT_COLOR);
        assert_eq!(parse_color(Some("rgb(foobar)")), DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn rgba_fractional_alpha() {
        assert_eq!(
            parse_color(Some("rgba(0, 255, 0, 0.5)")),
            Rgba::new(0, 255, 0, 0.5)
        );
        assert_eq!(
            parse_color(Some("rgba(0, 255, 0, .5)")),
            Rgba::new(0, 255, 0, 0.5)
        );
        assert_eq!(
            parse_color(Some("rgba(0, 255, 0, 0.75)")),
            Rgba::new(0, 255, 0, 0.75)
        );
        assert_eq!(
            parse_color(Some("rgba(0, 255, 0, 1)")),
            Rgba::new(0, 255, 0, 1.0)
        );
        assert_eq!(
            parse_color(Some("rgba(0, 255, 0, 0)")),
            Rgba::new(0, 255, 0, 0.0)
        );
    }

    #[test]
    fn rgba_whitespace_variants() {
        assert_eq!(
            parse_color(Some("rgba(0,255,0,0.5)")),
            Rgba::new(0, 255, 0, 0.5)
        );
        assert_eq!(
            parse_color(Some("rgba( 0, 255, 0, 0.5 )")),
            Rgba::new(0, 255, 0, 0.5)
        );
        assert_eq!(
            parse_color(Some("rgba(0, 255, 0,0.5)")),
            Rgba::new(0, 255, 0, 0.5)
        );
    }

    #[test]
    fn rgb_percentage_channels() {
        assert_eq!(
            parse_color(Some("rgb(100%, 0%, 0%)")),
            Rgba::opaque(255, 0, 0)
        );
        assert_eq!(
            parse_color(Some("rgba(100%, 0%, 0%, 0.5)")),
            Rgba::new(255, 0, 0, 0.5)
        );
        assert_eq!(
            parse_color(Some("rgba(51%, 51%, 51%, 0.5)")),
            Rgba::new(130, 130, 130, 0.5)
        );
    }

    #[test]
    fn rgb_out_of_range_clamps() {
        assert_eq!(parse_color(Some("rgb(999, 0, 0)")), Rgba::opaque(255, 0, 0));
        assert_eq!(
            parse_color(Some("rgba(0, 0, 0, 5.0)")),
            Rgba::new(0, 0, 0, 1.0)
        );
    }

    // --- hex notation ---

    #[test]
    fn hex_six_digits() {
        assert_eq!(parse_color(Some("#FF0000")), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color(Some("#00FF00")), Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn hex_shorthand() {
        assert_eq!(parse_color(Some("#F00")), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color(Some("#abc")), Rgba::opaque(170, 187, 204));
    }

    #[test]
    fn hex_with_alpha_byte() {
        assert_eq!(parse_color(Some("#FF0000FF")), Rgba::opaque(255, 0, 0));
        let half = parse_color(Some("#FF000080"));
        assert_eq!((half.r, half.g, half.b), (255, 0, 0));
        assert!((half.a - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(parse_color(Some("#FF000000")), Rgba::new(255, 0, 0, 0.0));
    }

    #[test]
    fn hex_shorthand_with_alpha_nibble() {
        assert_eq!(parse_color(Some("#F00F")), Rgba::opaque(255, 0, 0));
        let half = parse_color(Some("#F008"));
        assert_eq!((half.r, half.g, half.b), (255, 0, 0));
        assert!((half.a - 136.0 / 255.0).abs() < 1e-12);
        assert_eq!(parse_color(Some("#F000")), Rgba::new(255, 0, 0, 0.0));
    }

    #[test]
    fn hex_invalid_length_falls_back() {
        assert_eq!(parse_color(Some("#FF")), DEFAULT_TEXT_COLOR);
        assert_eq!(parse_color(Some("#FFFFF")), DEFAULT_TEXT_COLOR);
        assert_eq!(parse_color(Some("#FFFFFFFFF")), DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn hex_non_hex_digit_falls_back() {
        assert_eq!(parse_color(Some("#GG0000")), DEFAULT_TEXT_COLOR);
        assert_eq!(parse_color(Some("#12345z")), DEFAULT_TEXT_COLOR);
    }

    // --- keywords ---

    #[test]
    fn transparent_keyword() {
        assert_eq!(parse_color(Some("transparent")), Rgba::new(0, 0, 0, 0.0));
    }

    #[test]
    fn currentcolor_keyword() {
        assert_eq!(parse_color(Some("currentcolor")), DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn named_colors_resolve() {
        assert_eq!(parse_color(Some("red")), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color(Some("green")), Rgba::opaque(0, 128, 0));
        assert_eq!(parse_color(Some("RED")), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color(Some("Blue")), Rgba::opaque(0, 0, 255));
    }

    #[test]
    fn system_colors_resolve() {
        assert_eq!(parse_color(Some("ButtonFace")), Rgba::opaque(240, 240, 240));
        assert_eq!(parse_color(Some("ButtonText")), Rgba::opaque(0, 0, 0));
        assert_eq!(parse_color(Some("Canvas")), Rgba::opaque(255, 255, 255));
        assert_eq!(parse_color(Some("CanvasText")), Rgba::opaque(0, 0, 0));
    }

    // --- fallbacks ---

    #[test]
    fn falsy_inputs_fall_back() {
        assert_eq!(parse_color(None), DEFAULT_TEXT_COLOR);
        assert_eq!(parse_color(Some("")), DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn unknown_keyword_falls_back() {
        assert_eq!(parse_color(Some("not-a-color")), DEFAULT_TEXT_COLOR);
    }
}
