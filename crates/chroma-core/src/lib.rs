//! Pure color-math engine: operations, WCAG auditing, harmony generation,
//! and semantic suggestions.
//!
//! Everything here is synchronous, deterministic (up to id/timestamp
//! assignment in [`harmony::generate`]), and side-effect-free over
//! immutable inputs.

pub mod harmony;
pub mod ops;
pub mod semantic;
pub mod wcag;

pub use semantic::SemanticColors;
