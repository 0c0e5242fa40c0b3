//! The table type and its render entry points

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use super::cell::Cell;
use super::context::RenderContext;
use super::frontier::Frontier;
use super::options::{RenderOptions, RuleStyle};
use super::row::Row;
use crate::utils::error::{RenderOutput, RenderWarning, TableError, TableResult, WarningKind};

static MULTIROW_WARNED: AtomicBool = AtomicBool::new(false);

/// An ordered sequence of rows
///
/// The first row fixes the width of the table. Every row appended after it
/// is fitted to that width: short rows are padded with blank cells and
/// column spans running past the edge are shortened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
    has_header: bool,
}

impl Table {
    /// Create a table from rows or anything convertible into rows
    ///
    /// ```
    /// use tabrender::{Row, Table};
    ///
    /// let table = Table::new(vec![
    ///     Row::header(["a", "b", "c"]),
    ///     Row::from([1, 2, 3]),
    ///     Row::from([2, 4, 6]),
    /// ]);
    /// assert!(table.render_html().contains("<th>a</th>"));
    /// assert!(table.render_latex().contains("\\hline"));
    /// ```
    pub fn new<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        let mut table = Table::default();
        for row in rows {
            table.append(row);
        }
        table
    }

    /// Append a row, returning whether the table now has a header
    pub fn append(&mut self, row: impl Into<Row>) -> bool {
        let mut row = row.into();
        if let Some(width) = self.rows.first().map(Row::column_count) {
            row.fit_to_width(width);
        }
        if row.is_header() {
            self.has_header = true;
        }
        self.rows.push(row);
        self.has_header
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Logical width of the table, taken from the first row
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Row::column_count).unwrap_or(0)
    }

    /// Cell at a physical position (filler cells included)
    pub fn cell_at(&self, row: usize, col: usize) -> TableResult<&Cell> {
        self.rows
            .get(row)
            .and_then(|r| r.cell(col))
            .ok_or_else(|| TableError::out_of_range(row, col))
    }

    /// Mutable cell at a physical position, for changing styling or spans
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> TableResult<&mut Cell> {
        self.rows
            .get_mut(row)
            .and_then(|r| r.cell_mut(col))
            .ok_or_else(|| TableError::out_of_range(row, col))
    }

    /// Render every row, threading the frontier from each row to the next
    fn render_rows<F>(&self, ctx: &mut RenderContext, mut render: F) -> Vec<String>
    where
        F: FnMut(&Row, &Frontier, &mut RenderContext) -> String,
    {
        let count = self.rows.len();
        let mut above = Frontier::empty();
        let mut lines = Vec::with_capacity(count);

        for (index, row) in self.rows.iter().enumerate() {
            ctx.enter_row(index, count);
            lines.push(render(row, &above, &mut *ctx));
            above = row.frontier(&above);
        }

        lines
    }

    /// Render the table as an HTML `<table>` element
    pub fn render_html(&self) -> String {
        let result = self.render_html_with_diagnostics();
        log_warnings(&result.warnings);
        result.content
    }

    /// Render HTML and return warnings instead of logging them
    pub fn render_html_with_diagnostics(&self) -> RenderOutput {
        let options = RenderOptions::default();
        let mut ctx = RenderContext::new(&options, self.rows.len());
        let lines = self.render_rows(&mut ctx, |row, above, ctx| row.render_html(above, ctx));
        let content = format!("<table>\n{}\n</table>", lines.join("\n"));
        RenderOutput::with_warnings(content, ctx.finish())
    }

    /// Render the table as a LaTeX `tabular` environment
    pub fn render_latex(&self) -> String {
        self.render_latex_with_options(&RenderOptions::default())
    }

    pub fn render_latex_with_options(&self, options: &RenderOptions) -> String {
        let result = self.render_latex_with_diagnostics(options);
        log_warnings(&result.warnings);
        result.content
    }

    /// Render LaTeX and return warnings instead of logging them
    pub fn render_latex_with_diagnostics(&self, options: &RenderOptions) -> RenderOutput {
        let mut ctx = RenderContext::new(options, self.rows.len());
        let body: String = self
            .render_rows(&mut ctx, |row, above, ctx| row.render_latex(above, ctx))
            .concat();

        let mut out = format!(
            "\\begin{{tabular}}{{*{{{}}}{{{}}}}}\n",
            self.column_count(),
            options.column_align.to_latex_char()
        );
        if self.has_header {
            out.push_str(options.rule_style.top());
            out.push('\n');
        }
        out.push_str(&body);
        if self.has_header {
            out.push_str(options.rule_style.bottom());
            out.push('\n');
        }
        out.push_str("\\end{tabular}");

        if options.standalone {
            out = wrap_in_document(&out, ctx.uses_multirow, options);
        }

        RenderOutput::with_warnings(out, ctx.finish())
    }
}

fn wrap_in_document(tabular: &str, uses_multirow: bool, options: &RenderOptions) -> String {
    let mut doc = String::from("\\documentclass{article}\n");
    if uses_multirow {
        doc.push_str("\\usepackage{multirow}\n");
    }
    if options.rule_style == RuleStyle::Booktabs {
        doc.push_str("\\usepackage{booktabs}\n");
    }
    doc.push_str("\\begin{document}\n");
    doc.push_str(tabular);
    doc.push_str("\n\\end{document}\n");
    doc
}

fn log_warnings(warnings: &[RenderWarning]) {
    for warning in warnings {
        match warning.kind {
            WarningKind::MultirowPackage => {
                if !MULTIROW_WARNED.swap(true, Ordering::Relaxed) {
                    log::warn!("{}", warning);
                }
            }
            WarningKind::RowSpanClamped => log::warn!("{}", warning),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_html_with_diagnostics().content)
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Table::new(rows)
    }
}

impl<R: Into<Row>> FromIterator<R> for Table {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Table::new(iter)
    }
}
