pub mod color;
pub mod error;
pub mod harmony;
pub mod palette;
pub mod report;

pub use color::Color;
pub use error::{ChromaError, Result};
pub use harmony::HarmonyKind;
pub use palette::{Palette, PaletteSummary, Role, Swatch};
pub use report::{AuditReport, AuditSummary, CheckColor, ContrastCheck, Grade};
