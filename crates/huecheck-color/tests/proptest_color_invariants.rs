//! Property-based invariant tests for the color parser and contrast math.
//!
//! These must hold for **any** input:
//!
//! 1. `parse_color` is total: arbitrary strings never panic.
//! 2. Parsed alpha is always in `[0, 1]`.
//! 3. 6-digit hex round-trips through `to_hex ∘ parse_color`.
//! 4. Relative luminance stays in `[0, 1]`.
//! 5. Contrast ratio stays in `[1, 21]` and is symmetric.
//! 6. `over` with an opaque foreground returns the foreground; with a
//!    fully transparent foreground it returns the background.
//! 7. The effective result of `blend_over` is always opaque.

use huecheck_color::{Rgba, contrast_ratio, parse_color, relative_luminance};
use proptest::prelude::*;

fn rgba_strategy() -> impl Strategy<Value = Rgba> {
    (any::<u8>(), any::<u8>(), any::<u8>(), 0.0f64..=1.0).prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
}

proptest! {
    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = parse_color(Some(&input));
    }

    #[test]
    fn parsed_alpha_in_unit_range(input in ".*") {
        let color = parse_color(Some(&input));
        prop_assert!((0.0..=1.0).contains(&color.a));
    }

    #[test]
    fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        let parsed = parse_color(Some(&hex));
        prop_assert_eq!(parsed, Rgba::opaque(r, g, b));
        prop_assert_eq!(parsed.to_hex(), hex);
    }

    #[test]
    fn luminance_in_unit_range(color in rgba_strategy()) {
        let l = relative_luminance(color);
        prop_assert!((-1e-9..=1.0 + 1e-9).contains(&l), "luminance {} out of range", l);
    }

    #[test]
    fn contrast_ratio_bounds(a in rgba_strategy(), b in rgba_strategy()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!(ratio >= 1.0, "ratio {} below 1", ratio);
        prop_assert!(ratio <= 21.0 + 1e-9, "ratio {} above 21", ratio);
    }

    #[test]
    fn contrast_ratio_symmetric(a in rgba_strategy(), b in rgba_strategy()) {
        let r1 = contrast_ratio(a, b);
        let r2 = contrast_ratio(b, a);
        prop_assert!((r1 - r2).abs() < 1e-9);
    }

    #[test]
    fn over_opaque_fg_is_identity(fg in (any::<u8>(), any::<u8>(), any::<u8>()), bg in rgba_strategy()) {
        let fg = Rgba::opaque(fg.0, fg.1, fg.2);
        prop_assert_eq!(fg.over(bg), fg);
    }

    #[test]
    fn over_transparent_fg_yields_bg(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let bg = Rgba::opaque(r, g, b);
        prop_assert_eq!(Rgba::transparent().over(bg), bg);
    }

    #[test]
    fn blend_over_is_opaque(fg in rgba_strategy(), bg in (any::<u8>(), any::<u8>(), any::<u8>())) {
        let backdrop = Rgba::opaque(bg.0, bg.1, bg.2);
        prop_assert_eq!(fg.blend_over(backdrop).a, 1.0);
    }
}
