//! Data layer - Static mappings
//!
//! This module contains the static data used while rendering:
//! - LaTeX escape table

pub mod escape;

// Re-export commonly used items
pub use escape::{escape_latex, LATEX_ESCAPES};
