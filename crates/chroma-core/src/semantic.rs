//! Status-color and neutral-gray suggestions tuned to a palette's base
//! color.

use serde::{Deserialize, Serialize};

use chroma_model::{Color, Palette};

const SUCCESS_HUE: f64 = 120.0;
const WARNING_HUE: f64 = 38.0;
const ERROR_HUE: f64 = 4.0;
const INFO_HUE: f64 = 207.0;

/// Derived status colors (success/warning/error/info).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

/// Suggest status colors at domain-standard hues.
///
/// Lightness is the base color's clamped to `[0.35, 0.60]`; saturation is
/// floored at 0.55 so status colors never wash out against a muted base.
pub fn suggest_semantic(palette: &Palette) -> SemanticColors {
    let (_, lightness, saturation) = palette.base_color.hls();
    let target_lightness = lightness.clamp(0.35, 0.60);
    let floored_saturation = saturation.max(0.55);
    let tone = |hue: f64| Color::from_hls(hue, target_lightness, floored_saturation);
    SemanticColors {
        success: tone(SUCCESS_HUE),
        warning: tone(WARNING_HUE),
        error: tone(ERROR_HUE),
        info: tone(INFO_HUE),
    }
}

/// A near-gray neutral at the base color's hue.
pub fn suggest_neutral(palette: &Palette) -> Color {
    let (hue, _, _) = palette.base_color.hls();
    Color::from_hls(hue, 0.5, 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony;
    use chroma_model::HarmonyKind;

    #[test]
    fn semantic_hues_are_fixed() {
        let palette = harmony::generate("#3b82f6", HarmonyKind::Triadic, "t").unwrap();
        let semantic = suggest_semantic(&palette);
        assert!((semantic.success.hue() - 120.0).abs() < 3.0);
        assert!((semantic.warning.hue() - 38.0).abs() < 3.0);
        assert!((semantic.error.hue() - 4.0).abs() < 3.0);
        assert!((semantic.info.hue() - 207.0).abs() < 3.0);
    }

    #[test]
    fn lightness_clamps_into_the_mid_band() {
        let dark = harmony::generate("#0a0a1a", HarmonyKind::Triadic, "d").unwrap();
        let semantic = suggest_semantic(&dark);
        assert!((semantic.success.lightness() - 0.35).abs() < 0.01);

        let light = harmony::generate("#f2f2ff", HarmonyKind::Triadic, "l").unwrap();
        let semantic = suggest_semantic(&light);
        assert!((semantic.info.lightness() - 0.60).abs() < 0.01);
    }

    #[test]
    fn saturation_never_drops_below_the_floor() {
        let muted = harmony::generate("#8a8a95", HarmonyKind::Triadic, "m").unwrap();
        let semantic = suggest_semantic(&muted);
        assert!(semantic.error.saturation() >= 0.54);
    }

    #[test]
    fn neutral_is_a_near_gray_at_mid_lightness() {
        let palette = harmony::generate("#3b82f6", HarmonyKind::Triadic, "t").unwrap();
        let neutral = suggest_neutral(&palette);
        assert!((neutral.lightness() - 0.5).abs() < 0.01);
        assert!(neutral.saturation() < 0.1);
    }
}
