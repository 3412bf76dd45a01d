//! Tailwind configuration export.

use chroma_core::ops;
use chroma_model::Palette;

use crate::SCALE_STOPS;
use crate::css::slugify;

/// Render a palette as a Tailwind `module.exports` theme extension: the
/// numeric color scale plus a `<name>-roles` map of role to hex.
pub fn to_tailwind(palette: &Palette) -> String {
    let scale = ops::standard_scale(&palette.base_color);
    let name = slugify(&palette.name);

    let mut lines = vec![
        "/** @type {import('tailwindcss').Config} */".to_string(),
        "module.exports = {".to_string(),
        "  theme: {".to_string(),
        "    extend: {".to_string(),
        "      colors: {".to_string(),
        format!("        '{name}': {{"),
    ];
    for (stop, color) in SCALE_STOPS.iter().zip(&scale) {
        lines.push(format!("          {stop}: '{color}',"));
    }
    lines.push("        },".to_string());
    lines.push(format!("        '{name}-roles': {{"));
    for swatch in &palette.colors {
        lines.push(format!("          '{}': '{}',", swatch.role, swatch.color));
    }
    lines.push("        },".to_string());
    lines.push("      },".to_string());
    lines.push("    },".to_string());
    lines.push("  },".to_string());
    lines.push("};".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::harmony;
    use chroma_model::HarmonyKind;

    #[test]
    fn tailwind_config_has_scale_and_role_maps() {
        let palette = harmony::generate("#3b82f6", HarmonyKind::Triadic, "Ocean").unwrap();
        let config = to_tailwind(&palette);

        assert!(config.starts_with("/** @type {import('tailwindcss').Config} */"));
        assert!(config.contains("'ocean': {"));
        assert!(config.contains("          50: '"));
        assert!(config.contains("          800: '"));
        assert!(!config.contains("          900: '"));
        assert!(config.contains("'ocean-roles': {"));
        assert!(config.contains("'primary': '#3a81f6',"));
        assert!(config.ends_with("};"));
    }

    #[test]
    fn default_palette_names_are_slugified() {
        let palette = harmony::generate("#3b82f6", HarmonyKind::Tetradic, "").unwrap();
        let config = to_tailwind(&palette);
        assert!(config.contains("'tetradic-palette': {"));
    }
}
