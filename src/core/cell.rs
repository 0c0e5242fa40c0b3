//! Cell values and the cell type

use std::fmt;
use std::fmt::Write;

use super::context::RenderContext;
use crate::data::escape::escape_latex;
use crate::utils::error::{SpanAxis, TableError, TableResult};

/// Content of a table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::Text(s.clone())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

impl From<f32> for CellValue {
    fn from(x: f32) -> Self {
        CellValue::Float(f64::from(x))
    }
}

macro_rules! impl_integer_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(n: $t) -> Self {
                    CellValue::Integer(n as i64)
                }
            }
        )*
    };
}

impl_integer_value!(i8, i16, i32, i64, u8, u16, u32, usize, isize);

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// A single table cell with styling and span info
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell content
    pub value: CellValue,
    /// Whether this is a header cell
    pub is_header: bool,
    /// CSS background colour
    pub background_colour: Option<String>,
    /// CSS text colour
    pub text_colour: Option<String>,
    col_span: usize,
    row_span: usize,
}

impl Cell {
    /// Create a body cell with default styling
    pub fn new(value: impl Into<CellValue>) -> Self {
        Cell {
            value: value.into(),
            is_header: false,
            background_colour: None,
            text_colour: None,
            col_span: 1,
            row_span: 1,
        }
    }

    /// Create a header cell
    pub fn header(value: impl Into<CellValue>) -> Self {
        Cell {
            is_header: true,
            ..Cell::new(value)
        }
    }

    /// Create an empty filler cell
    pub fn blank() -> Self {
        Cell::new(CellValue::Empty)
    }

    pub fn with_background(mut self, colour: impl Into<String>) -> Self {
        self.background_colour = Some(colour.into());
        self
    }

    pub fn with_text_colour(mut self, colour: impl Into<String>) -> Self {
        self.text_colour = Some(colour.into());
        self
    }

    pub fn with_col_span(mut self, span: usize) -> TableResult<Self> {
        self.set_col_span(span)?;
        Ok(self)
    }

    pub fn with_row_span(mut self, span: usize) -> TableResult<Self> {
        self.set_row_span(span)?;
        Ok(self)
    }

    pub fn col_span(&self) -> usize {
        self.col_span
    }

    pub fn row_span(&self) -> usize {
        self.row_span
    }

    pub fn set_col_span(&mut self, span: usize) -> TableResult<()> {
        self.col_span = check_span(SpanAxis::Column, span)?;
        Ok(())
    }

    pub fn set_row_span(&mut self, span: usize) -> TableResult<()> {
        self.row_span = check_span(SpanAxis::Row, span)?;
        Ok(())
    }

    /// Set either or both spans
    ///
    /// Both values are validated before anything is assigned.
    pub fn set_span(
        &mut self,
        row_span: Option<usize>,
        col_span: Option<usize>,
    ) -> TableResult<()> {
        if let Some(n) = row_span {
            check_span(SpanAxis::Row, n)?;
        }
        if let Some(n) = col_span {
            check_span(SpanAxis::Column, n)?;
        }
        if let Some(n) = row_span {
            self.row_span = n;
        }
        if let Some(n) = col_span {
            self.col_span = n;
        }
        Ok(())
    }

    /// Clamp the column span without validation (used when fitting a row)
    pub(crate) fn shrink_col_span(&mut self, max: usize) {
        self.col_span = self.col_span.min(max.max(1));
    }

    /// Inline CSS for the colours, empty when no colour is set
    pub fn css(&self) -> String {
        let mut rules = Vec::new();
        if let Some(ref bg) = self.background_colour {
            rules.push(format!("background-color:{}", bg));
        }
        if let Some(ref fg) = self.text_colour {
            rules.push(format!("color:{}", fg));
        }
        rules.join("; ")
    }

    /// Generate the HTML tag for this cell
    ///
    /// `row_span` is the span to emit, already clamped to the table.
    pub fn render_html(&self, row_span: usize) -> String {
        let tag = if self.is_header { "th" } else { "td" };
        let mut out = String::new();
        let _ = write!(out, "<{}", tag);
        if self.col_span > 1 {
            let _ = write!(out, " colspan=\"{}\"", self.col_span);
        }
        if row_span > 1 {
            let _ = write!(out, " rowspan=\"{}\"", row_span);
        }
        let style = self.css();
        if !style.is_empty() {
            let _ = write!(out, " style=\"{}\"", style);
        }
        let _ = write!(out, ">{}</{}>", self.value, tag);
        out
    }

    /// Generate LaTeX code for this cell
    pub fn render_latex(&self, col: usize, ctx: &mut RenderContext) -> String {
        let escaped = escape_latex(&self.value.to_string());

        // Bold must sit next to the value, inside any span wrappers
        let content = if self.is_header {
            format!("\\bf {}", escaped)
        } else {
            escaped
        };

        let row_span = ctx.clamp_row_span(col, self.row_span);
        let inner = if row_span > 1 {
            ctx.note_multirow();
            format!("\\multirow{{{}}}{{*}}{{{}}}", row_span, content)
        } else {
            content
        };

        wrap_multicolumn(self.col_span, ctx.options.span_align.to_latex_char(), inner)
    }

    /// LaTeX for a slot covered by a row span from above
    ///
    /// The content is empty but the column width is kept so every line of
    /// the tabular has the same number of `&` separators. A header slot keeps
    /// its bold prefix.
    pub fn render_latex_covered(col_span: usize, header: bool, ctx: &RenderContext) -> String {
        let content = if header {
            "\\bf ".to_string()
        } else {
            String::new()
        };
        wrap_multicolumn(col_span, ctx.options.span_align.to_latex_char(), content)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::blank()
    }
}

/// Conversion applied wherever a cell enters a row
///
/// Bare values become cells with default styling, marked as headers when the
/// receiving row is a header row. Existing cells are kept as they are.
pub trait IntoCell {
    fn into_cell(self, header: bool) -> Cell;
}

impl IntoCell for Cell {
    fn into_cell(self, _header: bool) -> Cell {
        self
    }
}

impl<T: Into<CellValue>> IntoCell for Option<T> {
    fn into_cell(self, header: bool) -> Cell {
        CellValue::from(self).into_cell(header)
    }
}

macro_rules! impl_cell_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Cell {
                fn from(value: $t) -> Self {
                    Cell::new(value)
                }
            }

            impl IntoCell for $t {
                fn into_cell(self, header: bool) -> Cell {
                    if header {
                        Cell::header(self)
                    } else {
                        Cell::new(self)
                    }
                }
            }
        )*
    };
}

impl_cell_from!(
    CellValue, &str, String, &String, bool, f32, f64, i8, i16, i32, i64, u8, u16, u32, usize,
    isize
);

fn check_span(axis: SpanAxis, span: usize) -> TableResult<usize> {
    if span < 1 {
        return Err(TableError::invalid_span(axis, span));
    }
    Ok(span)
}

fn wrap_multicolumn(col_span: usize, align: char, inner: String) -> String {
    if col_span > 1 {
        format!("\\multicolumn{{{}}}{{{}}}{{{}}}", col_span, align, inner)
    } else {
        inner
    }
}
