//! # tabrender
//!
//! Render tables to HTML and LaTeX, with per-cell colours, header rows and
//! merged cells (column and row spans).
//!
//! ## Features
//!
//! - **Two outputs**: an HTML `<table>` and a LaTeX `tabular` from one model
//! - **Merged cells**: `colspan`/`\multicolumn` and `rowspan`/`\multirow`,
//!   with covered cells suppressed in the rows below
//! - **Header rows**: `<th>` cells, bold LaTeX and `\hline` or booktabs rules
//! - **Escaping**: LaTeX special characters in cell text are escaped
//! - **Data loading**: JSON, YAML, TOML and CSV input (feature `data-loading`)
//!
//! ## Usage Examples
//!
//! ### Building a Table
//!
//! ```rust
//! use tabrender::{Row, Table};
//!
//! let mut table = Table::new(vec![
//!     Row::from([1, 2, 3]),
//!     Row::from([4, 5, 6]),
//!     Row::from([7, 8, 9]),
//! ]);
//! table.cell_at_mut(0, 0).unwrap().set_row_span(2).unwrap();
//!
//! let html = table.render_html();
//! assert!(html.contains("rowspan=\"2\""));
//!
//! let latex = table.render_latex();
//! assert!(latex.contains(r"\multirow{2}{*}{1}"));
//! ```
//!
//! ### From Columns
//!
//! ```rust
//! use tabrender::{IndexMap, Table};
//!
//! let mut columns = IndexMap::new();
//! columns.insert("name", vec!["ann", "bob"]);
//! columns.insert("team", vec!["red", "blue"]);
//!
//! let table = Table::from_mapping(columns);
//! assert!(table.render_latex().starts_with("\\begin{tabular}{*{2}{l}}\n\\hline\n"));
//! ```

/// Core table model and rendering
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Feature modules - alternative ways to build tables
pub mod features;

/// Utility modules
pub mod utils;

// Re-export the table model
pub use crate::core::{
    Alignment, Cell, CellValue, Frontier, IntoCell, RenderOptions, Row, RowKind, RuleStyle,
    SpanSlot, Table,
};

// Re-export data and feature modules
pub use data::escape::escape_latex;
#[cfg(feature = "data-loading")]
pub use features::loading;

// Re-export utilities
pub use utils::error::{RenderOutput, RenderWarning, SpanAxis, TableError, TableResult, WarningKind};

pub use indexmap::IndexMap;

/// Render a table as HTML
pub fn table_to_html(table: &Table) -> String {
    table.render_html()
}

/// Render a table as LaTeX with default options
pub fn table_to_latex(table: &Table) -> String {
    table.render_latex()
}

/// Render a table as LaTeX with custom options
pub fn table_to_latex_with_options(table: &Table, options: &RenderOptions) -> String {
    table.render_latex_with_options(options)
}
