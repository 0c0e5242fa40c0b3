//! Error handling for table construction and rendering
//!
//! This module provides a unified error type and result type for all
//! table operations, plus the non-fatal warnings collected while rendering.

use std::fmt;

/// Which span of a cell a value was assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanAxis {
    Row,
    Column,
}

impl fmt::Display for SpanAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanAxis::Row => write!(f, "row"),
            SpanAxis::Column => write!(f, "column"),
        }
    }
}

/// Table error type
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// A row or column span smaller than 1 was assigned
    InvalidSpan { axis: SpanAxis, value: usize },
    /// Direct cell addressing with coordinates outside the table
    IndexOutOfRange { row: usize, col: usize },
    /// A data file could not be turned into a table
    Load {
        format: &'static str,
        message: String,
    },
    /// IO error (for reading data files)
    Io { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidSpan { axis, value } => {
                write!(
                    f,
                    "Invalid {} span {}: row and column spans must be greater or equal to 1",
                    axis, value
                )
            }
            TableError::IndexOutOfRange { row, col } => {
                write!(f, "Cell ({}, {}) is out of range", row, col)
            }
            TableError::Load { format, message } => {
                write!(f, "Could not load {} table: {}", format, message)
            }
            TableError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn invalid_span(axis: SpanAxis, value: usize) -> Self {
        TableError::InvalidSpan { axis, value }
    }

    pub fn out_of_range(row: usize, col: usize) -> Self {
        TableError::IndexOutOfRange { row, col }
    }

    pub fn load(format: &'static str, message: impl Into<String>) -> Self {
        TableError::Load {
            format,
            message: message.into(),
        }
    }
}

/// Kind of non-fatal rendering issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The output uses `\multirow` and needs the multirow package
    MultirowPackage,
    /// A row span ran past the last row and was shortened
    RowSpanClamped,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::MultirowPackage => write!(f, "multirow"),
            WarningKind::RowSpanClamped => write!(f, "rowspan"),
        }
    }
}

/// Rendering warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq)]
pub struct RenderWarning {
    pub kind: WarningKind,
    pub message: String,
    pub suggestion: Option<String>,
}

impl RenderWarning {
    pub fn multirow() -> Self {
        RenderWarning {
            kind: WarningKind::MultirowPackage,
            message: "Table uses \\multirow".to_string(),
            suggestion: Some("add \\usepackage{multirow} to the LaTeX preamble".to_string()),
        }
    }

    pub fn row_span_clamped(row: usize, col: usize, requested: usize, used: usize) -> Self {
        RenderWarning {
            kind: WarningKind::RowSpanClamped,
            message: format!(
                "Row span {} of cell ({}, {}) exceeds the table and was rendered as {}",
                requested, row, col, used
            ),
            suggestion: None,
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning: {}", self.message)?;
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Render output with optional warnings
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// The rendered markup
    pub content: String,
    /// Any warnings generated during rendering
    pub warnings: Vec<RenderWarning>,
}

impl RenderOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<RenderWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_span_display() {
        let err = TableError::invalid_span(SpanAxis::Column, 0);
        let msg = err.to_string();
        assert!(msg.contains("column span 0"));
        assert!(msg.contains("greater or equal to 1"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = TableError::out_of_range(4, 7);
        assert_eq!(err.to_string(), "Cell (4, 7) is out of range");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err = TableError::from(io);
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_warning_display() {
        let warning = RenderWarning::multirow();
        let msg = warning.to_string();
        assert!(msg.contains("\\multirow"));
        assert!(msg.contains("usepackage{multirow}"));
    }

    #[test]
    fn test_render_output() {
        let output = RenderOutput::new("<table>".to_string());
        assert!(!output.has_warnings());

        let output_with_warn =
            RenderOutput::with_warnings("x".to_string(), vec![RenderWarning::multirow()]);
        assert!(output_with_warn.has_warnings());
    }
}
