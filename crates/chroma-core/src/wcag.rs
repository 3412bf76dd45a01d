//! WCAG 2.1 relative luminance, contrast ratios, and the palette audit.

use chroma_model::{
    AuditReport, AuditSummary, CheckColor, Color, ContrastCheck, Grade, Palette, Swatch,
};

/// AA threshold for normal text.
pub const AA_NORMAL: f64 = 4.5;
/// AA threshold for large text.
pub const AA_LARGE: f64 = 3.0;
/// AAA threshold for normal text.
pub const AAA_NORMAL: f64 = 7.0;

/// Relative luminance per the WCAG 2.1 sRGB formula, in `[0, 1]`.
pub fn relative_luminance(color: &Color) -> f64 {
    let (r, g, b) = color.rgb();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio in `[1.0, 21.0]`, rounded to 2 decimals.
///
/// Symmetric in its arguments: the brighter color always goes in the
/// numerator.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let bright = la.max(lb);
    let dark = la.min(lb);
    round2((bright + 0.05) / (dark + 0.05))
}

/// Classify a contrast ratio. Thresholds are closed on the lower bound.
pub fn grade(ratio: f64) -> Grade {
    if ratio >= AAA_NORMAL {
        Grade::Aaa
    } else if ratio >= AA_NORMAL {
        Grade::Aa
    } else if ratio >= AA_LARGE {
        Grade::AaLarge
    } else {
        Grade::Fail
    }
}

/// Full WCAG audit for every foreground/background combination in a
/// palette.
///
/// Foregrounds are swatches with text-capable roles, backgrounds those
/// with surface roles. When either partition is empty the audit falls back
/// to positional slices (first two swatches as foregrounds, the rest as
/// backgrounds) so that schemes which do not populate every role still
/// produce output.
pub fn audit(palette: &Palette) -> AuditReport {
    let mut foregrounds: Vec<&Swatch> = palette
        .colors
        .iter()
        .filter(|swatch| swatch.role.is_foreground())
        .collect();
    let mut backgrounds: Vec<&Swatch> = palette
        .colors
        .iter()
        .filter(|swatch| swatch.role.is_background())
        .collect();
    if foregrounds.is_empty() {
        foregrounds = palette.colors.iter().take(2).collect();
    }
    if backgrounds.is_empty() {
        backgrounds = palette.colors.iter().skip(2).collect();
    }

    let mut checks = Vec::with_capacity(foregrounds.len() * backgrounds.len());
    for fg in &foregrounds {
        for bg in &backgrounds {
            let ratio = contrast_ratio(&fg.color, &bg.color);
            checks.push(ContrastCheck {
                fg: CheckColor {
                    name: fg.name.clone(),
                    hex: fg.color.hex().to_string(),
                },
                bg: CheckColor {
                    name: bg.name.clone(),
                    hex: bg.color.hex().to_string(),
                },
                ratio,
                grade: grade(ratio),
                aa_normal: ratio >= AA_NORMAL,
                aa_large: ratio >= AA_LARGE,
                aaa_normal: ratio >= AAA_NORMAL,
            });
        }
    }

    let total = checks.len();
    let pass_aa = checks.iter().filter(|check| check.aa_normal).count();
    let pass_rate = (pass_aa as f64 / total.max(1) as f64 * 1000.0).round() / 10.0;
    AuditReport {
        palette_id: palette.id.clone(),
        palette_name: palette.name.clone(),
        checks,
        summary: AuditSummary {
            total,
            pass_aa,
            fail_aa: total - pass_aa,
            pass_rate,
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
