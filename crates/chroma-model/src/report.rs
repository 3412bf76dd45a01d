//! Accessibility audit report types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// WCAG conformance grade for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA-Large")]
    AaLarge,
    Fail,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Aaa => "AAA",
            Grade::Aa => "AA",
            Grade::AaLarge => "AA-Large",
            Grade::Fail => "Fail",
        }
    }

    pub fn passes_aa(&self) -> bool {
        matches!(self, Grade::Aaa | Grade::Aa)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One endpoint of a contrast check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckColor {
    pub name: String,
    pub hex: String,
}

/// A single foreground/background contrast check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastCheck {
    pub fg: CheckColor,
    pub bg: CheckColor,
    pub ratio: f64,
    pub grade: Grade,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
}

/// Aggregate pass counts over a check list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub total: usize,
    pub pass_aa: usize,
    pub fail_aa: usize,
    /// Percentage of checks passing AA-normal, rounded to 1 decimal.
    pub pass_rate: f64,
}

/// Full WCAG audit of a palette: every foreground/background combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub palette_id: String,
    pub palette_name: String,
    pub checks: Vec<ContrastCheck>,
    pub summary: AuditSummary,
}
