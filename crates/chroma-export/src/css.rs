//! CSS custom-property export.

use chroma_core::{ops, semantic};
use chroma_model::Palette;

use crate::SCALE_STOPS;

/// Render a palette as `:root` custom-property blocks: one property pair
/// per swatch (hex and decomposed `R, G, B`), the numeric tint/shade
/// scale, and the semantic tokens.
pub fn to_css_vars(palette: &Palette, prefix: &str) -> String {
    let mut lines = vec![
        ":root {".to_string(),
        format!("  /* {} - {} */", palette.name, palette.harmony),
    ];
    for swatch in &palette.colors {
        let slug = slugify(&swatch.name);
        let (r, g, b) = swatch.color.rgb();
        lines.push(format!("  --{prefix}-{slug}: {};", swatch.color.hex()));
        lines.push(format!("  --{prefix}-{slug}-rgb: {r}, {g}, {b};"));
    }
    lines.push("}".to_string());

    lines.push(String::new());
    lines.push(format!("/* {} tint/shade scale */", palette.name));
    lines.push(":root {".to_string());
    let scale = ops::standard_scale(&palette.base_color);
    for (stop, color) in SCALE_STOPS.iter().zip(&scale) {
        lines.push(format!("  --{prefix}-{stop}: {color};"));
    }
    lines.push("}".to_string());

    lines.push(String::new());
    lines.push("/* Semantic tokens */".to_string());
    lines.push(":root {".to_string());
    let tokens = semantic::suggest_semantic(palette);
    lines.push(format!("  --{prefix}-success: {};", tokens.success));
    lines.push(format!("  --{prefix}-warning: {};", tokens.warning));
    lines.push(format!("  --{prefix}-error: {};", tokens.error));
    lines.push(format!("  --{prefix}-info: {};", tokens.info));
    lines.push("}".to_string());

    lines.join("\n")
}

pub(crate) fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::harmony;
    use chroma_model::HarmonyKind;

    #[test]
    fn css_contains_swatch_scale_and_semantic_blocks() {
        let palette = harmony::generate("#3b82f6", HarmonyKind::Complementary, "Ocean").unwrap();
        let css = to_css_vars(&palette, "palette");

        assert!(css.contains("--palette-ocean-1: #3a81f6;"));
        assert!(css.contains("--palette-ocean-1-rgb: 58, 129, 246;"));
        assert!(css.contains("--palette-ocean-light:"));
        assert!(css.contains("--palette-ocean-dark:"));

        // The numeric scale fills stops 50 through 800; the 9-step scale
        // leaves the 900 stop unfilled.
        assert!(css.contains("--palette-50:"));
        assert!(css.contains("--palette-800:"));
        assert!(!css.contains("--palette-900:"));

        assert!(css.contains("--palette-success:"));
        assert!(css.contains("--palette-info:"));
    }

    #[test]
    fn custom_prefix_and_spaced_names_are_slugified() {
        let palette =
            harmony::generate("#3b82f6", HarmonyKind::Monochromatic, "My Brand").unwrap();
        let css = to_css_vars(&palette, "brand");
        assert!(css.contains("--brand-my-brand-1:"));
    }
}
