use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::harmony::HarmonyKind;

/// Semantic tag indicating the intended UI usage of a swatch.
///
/// Roles are assigned positionally by the harmony scheme, not computed
/// from color properties. Positions past the fixed role list fall back to
/// a generic `color-N` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Quaternary,
    Background,
    Surface,
    Muted,
    Text,
    /// Generic fallback for overflow positions (`color-N`).
    Other(String),
}

/// Positional role assignment order for angle-based harmony schemes.
const ROLE_ORDER: [Role; 8] = [
    Role::Primary,
    Role::Secondary,
    Role::Accent,
    Role::Quaternary,
    Role::Background,
    Role::Surface,
    Role::Muted,
    Role::Text,
];

impl Role {
    /// The role for a 0-based generation position.
    pub fn positional(index: usize) -> Role {
        ROLE_ORDER
            .get(index)
            .cloned()
            .unwrap_or_else(|| Role::Other(format!("color-{}", index + 1)))
    }

    /// True for roles audited as text-on-background foregrounds.
    pub fn is_foreground(&self) -> bool {
        matches!(
            self,
            Role::Text | Role::Primary | Role::Secondary | Role::Accent
        )
    }

    /// True for roles audited as backgrounds.
    pub fn is_background(&self) -> bool {
        matches!(self, Role::Background | Role::Surface | Role::Muted)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Quaternary => "quaternary",
            Role::Background => "background",
            Role::Surface => "surface",
            Role::Muted => "muted",
            Role::Text => "text",
            Role::Other(name) => name,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "primary" => Role::Primary,
            "secondary" => Role::Secondary,
            "accent" => Role::Accent,
            "quaternary" => Role::Quaternary,
            "background" => Role::Background,
            "surface" => Role::Surface,
            "muted" => Role::Muted,
            "text" => Role::Text,
            other => Role::Other(other.to_string()),
        })
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Role::Other(s))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// A named, role-tagged color within a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub color: Color,
    pub name: String,
    pub role: Role,
}

impl Swatch {
    pub fn new(color: Color, name: impl Into<String>, role: Role) -> Self {
        Self {
            color,
            name: name.into(),
            role,
        }
    }
}

/// A generated palette: base color, harmony scheme, and the ordered swatch
/// sequence (generation order, meaningful for role assignment).
///
/// The id and creation timestamp are assigned at generation time and never
/// change; mutation across the public contract is full replacement only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub base_color: Color,
    pub harmony: HarmonyKind,
    pub colors: Vec<Swatch>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub description: String,
}

/// The row type returned by store listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSummary {
    pub id: String,
    pub name: String,
    pub base_color: Color,
    pub harmony: HarmonyKind,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Palette> for PaletteSummary {
    fn from(palette: &Palette) -> Self {
        Self {
            id: palette.id.clone(),
            name: palette.name.clone(),
            base_color: palette.base_color.clone(),
            harmony: palette.harmony,
            tags: palette.tags.clone(),
            created_at: palette.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_roles_follow_the_fixed_order() {
        assert_eq!(Role::positional(0), Role::Primary);
        assert_eq!(Role::positional(7), Role::Text);
        assert_eq!(Role::positional(8), Role::Other("color-9".to_string()));
    }

    #[test]
    fn role_partitions_are_disjoint() {
        for index in 0..8 {
            let role = Role::positional(index);
            assert!(!(role.is_foreground() && role.is_background()));
        }
        assert!(Role::Text.is_foreground());
        assert!(Role::Muted.is_background());
        assert!(!Role::Quaternary.is_foreground());
        assert!(!Role::Quaternary.is_background());
    }

    #[test]
    fn role_serde_round_trips_custom_roles() {
        let role: Role = serde_json::from_str("\"color-9\"").unwrap();
        assert_eq!(role, Role::Other("color-9".to_string()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"color-9\"");
    }

    #[test]
    fn palette_serde_round_trips() {
        let base = Color::parse("#3b82f6").unwrap();
        let palette = Palette {
            id: "test-id".to_string(),
            name: "Ocean".to_string(),
            base_color: base.clone(),
            harmony: HarmonyKind::Complementary,
            colors: vec![Swatch::new(base, "Ocean-1", Role::Primary)],
            tags: vec!["complementary".to_string()],
            created_at: Utc::now(),
            description: String::new(),
        };
        let json = serde_json::to_string(&palette).unwrap();
        let round: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(round, palette);
    }
}
