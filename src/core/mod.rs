//! Core table model and rendering
//!
//! This module contains the table data model and the span-aware renderer:
//! - `cell`: cell values, styling and per-cell markup
//! - `row`: rows, logical column counting and the row walk
//! - `frontier`: row-span bookkeeping passed from row to row
//! - `table`: the table type and its render entry points
//!
//! # Architecture
//!
//! ```text
//! Table -> (frontier from row above) -> Row walk -> Cell markup
//! ```

pub mod cell;
pub mod context;
pub mod frontier;
pub mod options;
pub mod row;
pub mod table;


// Re-export public API
pub use cell::{Cell, CellValue, IntoCell};
pub use context::RenderContext;
pub use frontier::{Frontier, SpanSlot};
pub use options::{Alignment, RenderOptions, RuleStyle};
pub use row::{Row, RowKind, RowSlot};
pub use table::Table;
