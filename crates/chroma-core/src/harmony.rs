//! Palette generation from a base color and a harmony scheme.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use chroma_model::{Color, HarmonyKind, Palette, Result, Role, Swatch};

use crate::ops;

/// Lightness applied to the base color for the light/dark companion
/// swatches of angle-based schemes.
const VARIANT_LIGHTNESS_DELTA: f64 = 0.38;

/// Fixed target lightness steps and roles for the monochromatic scheme.
const MONO_STEPS: [(f64, Role); 5] = [
    (0.92, Role::Background),
    (0.75, Role::Surface),
    (0.55, Role::Primary),
    (0.35, Role::Secondary),
    (0.15, Role::Text),
];

/// Generate a palette from a base color and harmony scheme.
///
/// Validates the hex input before constructing any palette state. Each
/// call assigns a fresh UUID and UTC timestamp, so identical inputs never
/// produce colliding identifiers.
pub fn generate(base_hex: &str, harmony: HarmonyKind, name: &str) -> Result<Palette> {
    let base = Color::parse(base_hex)?;
    let label = if name.is_empty() { "color" } else { name };

    let mut swatches = Vec::new();
    if harmony == HarmonyKind::Monochromatic {
        let (_, lightness, _) = base.hls();
        for (position, (target, role)) in MONO_STEPS.iter().enumerate() {
            let color = ops::adjust_lightness(&base, target - lightness);
            swatches.push(Swatch::new(
                color,
                format!("{label}-{}", position + 1),
                role.clone(),
            ));
        }
    } else {
        for (position, angle) in harmony.angles().iter().enumerate() {
            swatches.push(Swatch::new(
                ops::rotate_hue(&base, *angle),
                format!("{label}-{}", position + 1),
                Role::positional(position),
            ));
        }
        swatches.push(Swatch::new(
            ops::adjust_lightness(&base, VARIANT_LIGHTNESS_DELTA),
            format!("{label}-light"),
            Role::Background,
        ));
        swatches.push(Swatch::new(
            ops::adjust_lightness(&base, -VARIANT_LIGHTNESS_DELTA),
            format!("{label}-dark"),
            Role::Text,
        ));
    }

    let palette_name = if name.is_empty() {
        format!("{} Palette", harmony.title())
    } else {
        name.to_string()
    };
    debug!(
        harmony = %harmony,
        base = %base,
        swatch_count = swatches.len(),
        "generated palette"
    );
    Ok(Palette {
        id: Uuid::new_v4().to_string(),
        name: palette_name,
        base_color: base,
        harmony,
        colors: swatches,
        tags: vec![harmony.as_str().to_string()],
        created_at: Utc::now(),
        description: String::new(),
    })
}
