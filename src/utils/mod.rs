//! Utility modules
//!
//! This module contains error types, result types and render warnings.

pub mod error;

// Re-export commonly used items
pub use error::{RenderOutput, RenderWarning, SpanAxis, TableError, TableResult, WarningKind};
