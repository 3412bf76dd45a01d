//! The `Color` value type and hex/HLS conversions.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChromaError, Result};

/// An immutable sRGB color stored as a normalized lowercase `#rrggbb` hex
/// string, with hue/lightness/saturation derived once at construction.
///
/// Hue is in degrees `[0, 360)` rounded to 2 decimals; lightness and
/// saturation are in `[0, 1]` rounded to 4 decimals. All conversions are
/// lossy only through 8-bit quantization: re-deriving HLS from the stored
/// hex reproduces the stored values within rounding tolerance.
///
/// Serializes as the hex string (`"#3b82f6"`); the derived attributes are
/// recomputed on deserialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    hex: String,
    hue: f64,
    lightness: f64,
    saturation: f64,
}

impl Color {
    /// Parse a hex color string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `rgb`, or `rrggbb`; the leading `#` is
    /// optional and the 3-digit form expands each nibble by duplication
    /// (`f0a` → `ff00aa`). Fails with [`ChromaError::InvalidColorFormat`]
    /// when the cleaned string is not exactly 3 or 6 hex digits.
    pub fn parse(input: &str) -> Result<Self> {
        let cleaned = input.trim().trim_start_matches('#');
        if !cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChromaError::InvalidColorFormat(input.to_string()));
        }
        let expanded = match cleaned.len() {
            3 => cleaned.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => cleaned.to_string(),
            _ => return Err(ChromaError::InvalidColorFormat(input.to_string())),
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|_| ChromaError::InvalidColorFormat(input.to_string()))
        };
        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        Ok(Self::from_channels(r, g, b))
    }

    /// Build a color from integer RGB channels, clamping each to `[0, 255]`.
    ///
    /// Out-of-range inputs are silently clamped, not rejected.
    pub fn from_rgb(r: i64, g: i64, b: i64) -> Self {
        Self::from_channels(
            r.clamp(0, 255) as u8,
            g.clamp(0, 255) as u8,
            b.clamp(0, 255) as u8,
        )
    }

    /// Build a color from hue (degrees), lightness, and saturation.
    ///
    /// Channel values are floor-truncated to integers before hex encoding.
    pub fn from_hls(hue: f64, lightness: f64, saturation: f64) -> Self {
        let (r, g, b) = hls_to_rgb(hue, lightness, saturation);
        Self::from_rgb(
            (r * 255.0).floor() as i64,
            (g * 255.0).floor() as i64,
            (b * 255.0).floor() as i64,
        )
    }

    fn from_channels(r: u8, g: u8, b: u8) -> Self {
        let (hue, lightness, saturation) = rgb_to_hls(r, g, b);
        Self {
            hex: format!("#{r:02x}{g:02x}{b:02x}"),
            hue: round_to(hue, 2),
            lightness: round_to(lightness, 4),
            saturation: round_to(saturation, 4),
        }
    }

    /// The normalized lowercase `#rrggbb` form.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The 8-bit RGB channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // The stored hex is always normalized, so the slices are valid.
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.hex[range], 16).unwrap_or(0)
        };
        (parse(1..3), parse(3..5), parse(5..7))
    }

    /// Hue in degrees `[0, 360)`, rounded to 2 decimals.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Lightness in `[0, 1]`, rounded to 4 decimals.
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Saturation in `[0, 1]`, rounded to 4 decimals.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Full-precision HLS re-derived from the stored channels.
    ///
    /// Color operations work from this rather than the rounded display
    /// attributes so that chained transforms do not accumulate rounding.
    pub fn hls(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.rgb();
        rgb_to_hls(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Convert 8-bit RGB channels to (hue degrees, lightness, saturation).
fn rgb_to_hls(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let lightness = (maxc + minc) / 2.0;
    if maxc == minc {
        return (0.0, lightness, 0.0);
    }
    let range = maxc - minc;
    let saturation = if lightness <= 0.5 {
        range / (maxc + minc)
    } else {
        range / (2.0 - maxc - minc)
    };
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;
    let hue = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((hue / 6.0).rem_euclid(1.0) * 360.0, lightness, saturation)
}

/// Convert (hue degrees, lightness, saturation) to RGB fractions in `[0, 1]`.
fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }
    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = 2.0 * lightness - m2;
    let h = hue / 360.0;
    (
        hls_component(m1, m2, h + 1.0 / 3.0),
        hls_component(m1, m2, h),
        hls_component(m1, m2, h - 1.0 / 3.0),
    )
}

fn hls_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
