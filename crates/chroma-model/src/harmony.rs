use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChromaError;

/// Hue-relationship schemes determining the angular offsets applied to a
/// base hue when generating a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
    Complementary,
    Triadic,
    Analogous,
    Monochromatic,
    SplitComplementary,
    Tetradic,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 6] = [
        HarmonyKind::Complementary,
        HarmonyKind::Triadic,
        HarmonyKind::Analogous,
        HarmonyKind::Monochromatic,
        HarmonyKind::SplitComplementary,
        HarmonyKind::Tetradic,
    ];

    /// Angular offsets in degrees applied to the base hue.
    ///
    /// Monochromatic is lightness-stepped rather than hue-rotated and has
    /// no angle table.
    pub fn angles(&self) -> &'static [f64] {
        match self {
            HarmonyKind::Complementary => &[0.0, 180.0],
            HarmonyKind::Triadic => &[0.0, 120.0, 240.0],
            HarmonyKind::Analogous => &[0.0, 30.0, 60.0],
            HarmonyKind::Monochromatic => &[],
            HarmonyKind::SplitComplementary => &[0.0, 150.0, 210.0],
            HarmonyKind::Tetradic => &[0.0, 90.0, 180.0, 270.0],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Monochromatic => "monochromatic",
            HarmonyKind::SplitComplementary => "split-complementary",
            HarmonyKind::Tetradic => "tetradic",
        }
    }

    /// Title-cased label used for default palette names.
    pub fn title(&self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "Complementary",
            HarmonyKind::Triadic => "Triadic",
            HarmonyKind::Analogous => "Analogous",
            HarmonyKind::Monochromatic => "Monochromatic",
            HarmonyKind::SplitComplementary => "Split-Complementary",
            HarmonyKind::Tetradic => "Tetradic",
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HarmonyKind {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complementary" => Ok(HarmonyKind::Complementary),
            "triadic" => Ok(HarmonyKind::Triadic),
            "analogous" => Ok(HarmonyKind::Analogous),
            "monochromatic" => Ok(HarmonyKind::Monochromatic),
            "split-complementary" => Ok(HarmonyKind::SplitComplementary),
            "tetradic" => Ok(HarmonyKind::Tetradic),
            _ => Err(ChromaError::UnknownHarmony(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_strings() {
        for kind in HarmonyKind::ALL {
            assert_eq!(kind.as_str().parse::<HarmonyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(matches!(
            "pentadic".parse::<HarmonyKind>(),
            Err(ChromaError::UnknownHarmony(_))
        ));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&HarmonyKind::SplitComplementary).unwrap();
        assert_eq!(json, "\"split-complementary\"");
    }

    #[test]
    fn angle_tables_match_schemes() {
        assert_eq!(HarmonyKind::Complementary.angles(), &[0.0, 180.0]);
        assert_eq!(HarmonyKind::Tetradic.angles().len(), 4);
        assert!(HarmonyKind::Monochromatic.angles().is_empty());
    }
}
