//! Structured JSON export: the full palette plus computed scale, semantic
//! tokens, neutral, and the all-pairs contrast matrix.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use chroma_core::{SemanticColors, ops, semantic, wcag};
use chroma_model::{Color, Grade, HarmonyKind, Palette, Role};

/// Swatch row carrying the derived attributes alongside name and role.
#[derive(Debug, Clone, Serialize)]
pub struct SwatchDetail {
    pub hex: String,
    pub name: String,
    pub role: Role,
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

/// One cell of the contrast matrix.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixEntry {
    pub ratio: f64,
    pub grade: Grade,
}

/// The complete export document.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteExport {
    pub id: String,
    pub name: String,
    pub base_color: Color,
    pub harmony: HarmonyKind,
    pub colors: Vec<SwatchDetail>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub scale: Vec<Color>,
    pub semantic: SemanticColors,
    pub neutral: Color,
    pub contrast_matrix: BTreeMap<String, BTreeMap<String, MatrixEntry>>,
}

/// Assemble the export document for a palette.
pub fn build_export(palette: &Palette) -> PaletteExport {
    let colors = palette
        .colors
        .iter()
        .map(|swatch| SwatchDetail {
            hex: swatch.color.hex().to_string(),
            name: swatch.name.clone(),
            role: swatch.role.clone(),
            hue: swatch.color.hue(),
            lightness: swatch.color.lightness(),
            saturation: swatch.color.saturation(),
        })
        .collect();

    let mut contrast_matrix: BTreeMap<String, BTreeMap<String, MatrixEntry>> = BTreeMap::new();
    for first in &palette.colors {
        let row = contrast_matrix.entry(first.name.clone()).or_default();
        for second in &palette.colors {
            if first.name == second.name {
                continue;
            }
            let ratio = wcag::contrast_ratio(&first.color, &second.color);
            row.insert(
                second.name.clone(),
                MatrixEntry {
                    ratio,
                    grade: wcag::grade(ratio),
                },
            );
        }
    }

    PaletteExport {
        id: palette.id.clone(),
        name: palette.name.clone(),
        base_color: palette.base_color.clone(),
        harmony: palette.harmony,
        colors,
        tags: palette.tags.clone(),
        created_at: palette.created_at,
        description: palette.description.clone(),
        scale: ops::standard_scale(&palette.base_color),
        semantic: semantic::suggest_semantic(palette),
        neutral: semantic::suggest_neutral(palette),
        contrast_matrix,
    }
}

/// Serialize the export document as pretty-printed JSON.
pub fn to_json(palette: &Palette) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_export(palette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::harmony;

    #[test]
    fn export_carries_scale_semantic_and_neutral() {
        let palette = harmony::generate("#3b82f6", HarmonyKind::Complementary, "Ocean").unwrap();
        let export = build_export(&palette);

        assert_eq!(export.scale.len(), 9);
        assert_eq!(export.colors.len(), 4);
        assert_eq!(export.colors[0].hex, "#3a81f6");
        assert!(export.neutral.saturation() < 0.1);
    }

    #[test]
    fn contrast_matrix_excludes_self_pairs() {
        let palette = harmony::generate("#3b82f6", HarmonyKind::Triadic, "Tri").unwrap();
        let export = build_export(&palette);

        // 5 swatches, each with 4 partners.
        assert_eq!(export.contrast_matrix.len(), 5);
        for (name, row) in &export.contrast_matrix {
            assert_eq!(row.len(), 4);
            assert!(!row.contains_key(name));
        }
    }

    #[test]
    fn json_is_pretty_printed_and_complete() {
        let palette = harmony::generate("#3b82f6", HarmonyKind::Monochromatic, "Mono").unwrap();
        let json = to_json(&palette).unwrap();

        assert!(json.contains("\"base_color\": \"#3b82f6\""));
        assert!(json.contains("\"harmony\": \"monochromatic\""));
        assert!(json.contains("\"scale\""));
        assert!(json.contains("\"semantic\""));
        assert!(json.contains("\"contrast_matrix\""));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["colors"].as_array().unwrap().len(), 5);
    }
}
