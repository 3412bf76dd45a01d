//! Color operations: hue rotation, lightness/saturation adjustment,
//! blending, and scale generation.
//!
//! All operations re-derive full-precision HLS from the stored channels so
//! chained transforms do not accumulate display rounding.

use chroma_model::{ChromaError, Color, Result};

/// Number of steps in the scale behind the standard 50–900 numeric stops.
pub const STANDARD_SCALE_STEPS: usize = 9;

/// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
///
/// Negative degrees rotate backwards; wrapping is Euclidean, not
/// truncating.
pub fn rotate_hue(color: &Color, degrees: f64) -> Color {
    let (hue, lightness, saturation) = color.hls();
    Color::from_hls((hue + degrees).rem_euclid(360.0), lightness, saturation)
}

/// Add `delta` to lightness, clamping to `[0, 1]`. Saturating, not wrapping.
pub fn adjust_lightness(color: &Color, delta: f64) -> Color {
    let (hue, lightness, saturation) = color.hls();
    Color::from_hls(hue, (lightness + delta).clamp(0.0, 1.0), saturation)
}

/// Add `delta` to saturation, clamping to `[0, 1]`. Saturating, not wrapping.
pub fn adjust_saturation(color: &Color, delta: f64) -> Color {
    let (hue, lightness, saturation) = color.hls();
    Color::from_hls(hue, lightness, (saturation + delta).clamp(0.0, 1.0))
}

/// Linear per-channel blend between two colors.
///
/// `ratio` is clamped to `[0, 1]`: 0 yields exactly `a`, 1 yields exactly
/// `b`. Channels are floor-truncated to integers before hex encoding.
pub fn blend(a: &Color, b: &Color, ratio: f64) -> Color {
    let t = ratio.clamp(0.0, 1.0);
    let (r1, g1, b1) = a.rgb();
    let (r2, g2, b2) = b.rgb();
    let mix = |from: u8, to: u8| {
        (f64::from(from) + (f64::from(to) - f64::from(from)) * t).floor() as i64
    };
    Color::from_rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

/// Light-to-dark scale at fixed hue and saturation.
///
/// Lightness sweeps linearly from 0.95 down to 0.05 inclusive across
/// `steps` points. Fails with [`ChromaError::InvalidArgument`] when
/// `steps < 2`.
pub fn tint_shade_scale(color: &Color, steps: usize) -> Result<Vec<Color>> {
    if steps < 2 {
        return Err(ChromaError::InvalidArgument(format!(
            "tint/shade scale needs at least 2 steps, got {steps}"
        )));
    }
    Ok(scale_sweep(color, steps))
}

/// The fixed 9-step scale used to fill the standard numeric stops.
pub fn standard_scale(color: &Color) -> Vec<Color> {
    scale_sweep(color, STANDARD_SCALE_STEPS)
}

fn scale_sweep(color: &Color, steps: usize) -> Vec<Color> {
    let (hue, _, saturation) = color.hls();
    let span = 0.90 / (steps as f64 - 1.0);
    (0..steps)
        .map(|i| Color::from_hls(hue, 0.95 - i as f64 * span, saturation))
        .collect()
}

/// `stops` evenly spaced blends from ratio 0 to 1 inclusive.
pub fn gradient_stops(a: &Color, b: &Color, stops: usize) -> Result<Vec<Color>> {
    if stops < 2 {
        return Err(ChromaError::InvalidArgument(format!(
            "gradient needs at least 2 stops, got {stops}"
        )));
    }
    Ok((0..stops)
        .map(|i| blend(a, b, i as f64 / (stops as f64 - 1.0)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(hex: &str) -> Color {
        Color::parse(hex).unwrap()
    }

    #[test]
    fn rotate_hue_wraps_modulo_360() {
        let red = color("#ff0000");
        assert_eq!(rotate_hue(&red, 120.0).hex(), "#00ff00");
        assert_eq!(rotate_hue(&red, 480.0).hex(), "#00ff00");
        assert_eq!(rotate_hue(&red, -240.0).hex(), "#00ff00");
        assert_eq!(rotate_hue(&red, 360.0).hex(), "#ff0000");
    }

    #[test]
    fn adjust_lightness_saturates_at_bounds() {
        let blue = color("#3b82f6");
        assert_eq!(adjust_lightness(&blue, 10.0).hex(), "#ffffff");
        assert_eq!(adjust_lightness(&blue, -10.0).hex(), "#000000");
    }

    #[test]
    fn adjust_saturation_clamps() {
        let blue = color("#3b82f6");
        let gray = adjust_saturation(&blue, -10.0);
        assert_eq!(gray.saturation(), 0.0);
        let vivid = adjust_saturation(&blue, 10.0);
        assert_eq!(vivid.saturation(), 1.0);
    }

    #[test]
    fn blend_endpoints_are_exact() {
        let a = color("#3b82f6");
        let b = color("#f6823b");
        assert_eq!(blend(&a, &b, 0.0), a);
        assert_eq!(blend(&a, &b, 1.0), b);
        // Ratio clamps rather than extrapolating.
        assert_eq!(blend(&a, &b, -0.5), a);
        assert_eq!(blend(&a, &b, 1.5), b);
    }

    #[test]
    fn blend_midpoint_truncates_channels() {
        let black = color("#000000");
        let white = color("#ffffff");
        assert_eq!(blend(&black, &white, 0.5).hex(), "#7f7f7f");
    }

    #[test]
    fn scale_runs_light_to_dark_at_fixed_hue() {
        let blue = color("#3b82f6");
        let scale = tint_shade_scale(&blue, 9).unwrap();
        assert_eq!(scale.len(), 9);
        assert!(scale[0].lightness() > 0.9, "first step is near-white");
        assert!(scale[8].lightness() < 0.1, "last step is near-black");
        // Hue is held constant up to 8-bit quantization at the extremes.
        for step in &scale {
            assert!((step.hue() - blue.hue()).abs() < 3.0, "hue held constant");
        }
    }

    #[test]
    fn scale_rejects_fewer_than_two_steps() {
        let blue = color("#3b82f6");
        assert!(matches!(
            tint_shade_scale(&blue, 1),
            Err(ChromaError::InvalidArgument(_))
        ));
        assert!(matches!(
            tint_shade_scale(&blue, 0),
            Err(ChromaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn standard_scale_matches_nine_step_scale() {
        let blue = color("#3b82f6");
        assert_eq!(standard_scale(&blue), tint_shade_scale(&blue, 9).unwrap());
    }

    #[test]
    fn gradient_includes_both_endpoints() {
        let a = color("#000000");
        let b = color("#ffffff");
        let stops = gradient_stops(&a, &b, 5).unwrap();
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0], a);
        assert_eq!(stops[4], b);
        assert!(matches!(
            gradient_stops(&a, &b, 1),
            Err(ChromaError::InvalidArgument(_))
        ));
    }
}
