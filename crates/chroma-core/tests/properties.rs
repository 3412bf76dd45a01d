//! Property-based tests for the color math invariants.

use proptest::prelude::*;

use chroma_core::{ops, wcag};
use chroma_model::Color;

/// Strategy for one 8-bit channel.
fn channel() -> impl Strategy<Value = u8> {
    any::<u8>()
}

proptest! {
    #[test]
    fn hex_parse_round_trips_exactly(r in channel(), g in channel(), b in channel()) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        let color = Color::parse(&hex).unwrap();
        prop_assert_eq!(color.hex(), hex.as_str());
        prop_assert_eq!(color.rgb(), (r, g, b));
    }

    #[test]
    fn three_digit_hex_expands_then_round_trips(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = format!("{r:x}{g:x}{b:x}");
        let color = Color::parse(&short).unwrap();
        let expanded = format!("#{r:x}{r:x}{g:x}{g:x}{b:x}{b:x}");
        prop_assert_eq!(color.hex(), expanded.as_str());
    }

    #[test]
    fn rederived_hls_is_within_rounding_tolerance(r in channel(), g in channel(), b in channel()) {
        let color = Color::from_rgb(i64::from(r), i64::from(g), i64::from(b));
        let (h, l, s) = color.hls();
        prop_assert!((h - color.hue()).abs() <= 0.005 + 1e-12);
        prop_assert!((l - color.lightness()).abs() <= 0.00005 + 1e-12);
        prop_assert!((s - color.saturation()).abs() <= 0.00005 + 1e-12);
    }

    #[test]
    fn contrast_is_symmetric_and_bounded(
        r1 in channel(), g1 in channel(), b1 in channel(),
        r2 in channel(), g2 in channel(), b2 in channel(),
    ) {
        let a = Color::from_rgb(i64::from(r1), i64::from(g1), i64::from(b1));
        let b = Color::from_rgb(i64::from(r2), i64::from(g2), i64::from(b2));
        let forward = wcag::contrast_ratio(&a, &b);
        let backward = wcag::contrast_ratio(&b, &a);
        prop_assert_eq!(forward, backward);
        prop_assert!((1.0..=21.0).contains(&forward));
    }

    #[test]
    fn contrast_with_self_is_unity(r in channel(), g in channel(), b in channel()) {
        let color = Color::from_rgb(i64::from(r), i64::from(g), i64::from(b));
        prop_assert_eq!(wcag::contrast_ratio(&color, &color), 1.0);
    }

    #[test]
    fn blend_endpoints_reproduce_inputs(
        r1 in channel(), g1 in channel(), b1 in channel(),
        r2 in channel(), g2 in channel(), b2 in channel(),
    ) {
        let a = Color::from_rgb(i64::from(r1), i64::from(g1), i64::from(b1));
        let b = Color::from_rgb(i64::from(r2), i64::from(g2), i64::from(b2));
        prop_assert_eq!(ops::blend(&a, &b, 0.0), a.clone());
        prop_assert_eq!(ops::blend(&a, &b, 1.0), b.clone());
    }

    #[test]
    fn luminance_stays_in_unit_range(r in channel(), g in channel(), b in channel()) {
        let color = Color::from_rgb(i64::from(r), i64::from(g), i64::from(b));
        let luminance = wcag::relative_luminance(&color);
        prop_assert!((0.0..=1.0).contains(&luminance));
    }
}
