#![forbid(unsafe_code)]

//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Formulas follow the WCAG definition: sRGB channels are linearized with
//! the piecewise gamma function, weighted `0.2126 R + 0.7152 G + 0.0722 B`,
//! and the contrast ratio is `(L_lighter + 0.05) / (L_darker + 0.05)`,
//! ranging 1 (no contrast) to 21 (black on white).

use crate::rgba::{DEFAULT_BACKGROUND_COLOR, Rgba};

/// Relative luminance of a color, in `[0, 1]`.
///
/// A fully transparent color shows whatever the page background is, so
/// its luminance is the default background's. Semi-transparent colors are
/// blended over opaque white before linearization.
#[must_use]
pub fn relative_luminance(color: Rgba) -> f64 {
    if color.a == 0.0 {
        return relative_luminance(DEFAULT_BACKGROUND_COLOR);
    }

    let blend = |channel: u8| -> f64 {
        let v = color.a * f64::from(channel) + (1.0 - color.a) * 255.0;
        srgb_to_linear(v / 255.0)
    };

    0.2126 * blend(color.r) + 0.7152 * blend(color.g) + 0.0722 * blend(color.b)
}

/// Piecewise sRGB linearization: linear segment below 0.03928, power curve
/// `((v + 0.055) / 1.055)^2.4` above.
fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio between two colors, always >= 1.
#[must_use]
pub fn contrast_ratio(fg: Rgba, bg: Rgba) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}
