//! Table rows and the span-aware row walk

use super::cell::{Cell, CellValue, IntoCell};
use super::context::RenderContext;
use super::frontier::{Frontier, SpanSlot};

/// Whether a row holds body or header cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowKind {
    #[default]
    Body,
    Header,
}

/// One logical slot of a row, as seen during a render walk
#[derive(Debug, Clone, Copy)]
pub enum RowSlot<'a> {
    /// The row's own cell starts at this column
    Own { col: usize, cell: &'a Cell },
    /// A cell from an earlier row still covers this column
    Covered { col: usize, inherited: SpanSlot },
}

/// An ordered sequence of cells
///
/// A cell with a column span is followed by blank filler cells, so a cell's
/// physical index equals its logical column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
    kind: RowKind,
    max_columns: Option<usize>,
}

impl Row {
    /// Create a new empty body row
    pub fn new() -> Self {
        Row::default()
    }

    /// Create a header row; bare values appended to it become header cells
    pub fn header<I, C>(values: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoCell,
    {
        let mut row = Row {
            kind: RowKind::Header,
            ..Row::default()
        };
        row.extend(values);
        row
    }

    /// Create a body row from cells or bare values
    pub fn from_cells<I, C>(values: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoCell,
    {
        let mut row = Row::new();
        row.extend(values);
        row
    }

    /// Limit the row width; later appends are clamped to it
    pub fn with_max_columns(mut self, max: usize) -> Self {
        self.max_columns = Some(max);
        self
    }

    pub fn set_max_columns(&mut self, max: Option<usize>) {
        self.max_columns = max;
    }

    pub fn max_columns(&self) -> Option<usize> {
        self.max_columns
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    pub fn is_header(&self) -> bool {
        self.kind == RowKind::Header
    }

    /// Physical cells, fillers included
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Number of physical cells, fillers included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Append a cell or bare value
    ///
    /// A cell spanning several columns is followed by blank fillers. With
    /// `max_columns` set, the span and the fillers are clamped to the width
    /// that is left.
    pub fn append(&mut self, entry: impl IntoCell) {
        let mut cell = entry.into_cell(self.is_header());
        let position = self.cells.len();

        if let Some(max) = self.max_columns {
            let room = max.saturating_sub(position).max(1);
            if cell.col_span() > room {
                log::debug!(
                    "clamping column span {} at column {} to {}",
                    cell.col_span(),
                    position,
                    room
                );
                cell.shrink_col_span(room);
            }
        }

        let fillers = cell.col_span() - 1;
        let blank = self.blank();
        self.cells.push(cell);
        self.cells.extend(std::iter::repeat(blank).take(fillers));
    }

    pub fn extend<I, C>(&mut self, values: I)
    where
        I: IntoIterator<Item = C>,
        C: IntoCell,
    {
        for value in values {
            self.append(value);
        }
    }

    /// Fill the row with blank cells up to `max_columns`
    pub fn pad_to_max_columns(&mut self) {
        let Some(max) = self.max_columns else {
            return;
        };
        let current = self.column_count();
        if current < max {
            log::debug!("padding row from {} to {} columns", current, max);
        }
        let blank = self.blank();
        self.cells.extend(std::iter::repeat(blank).take(max.saturating_sub(current)));
    }

    /// Fit a finished row to the table width
    ///
    /// Spans running past `width` are shortened and the fillers they no
    /// longer need are dropped. Cells beyond the width are discarded and short
    /// rows are padded with blank cells.
    pub fn fit_to_width(&mut self, width: usize) {
        self.max_columns = Some(width);

        let mut col = 0;
        while col < width && col < self.cells.len() {
            let span = self.cells[col].col_span();
            let room = width - col;
            if span > room {
                log::debug!(
                    "clamping column span {} at column {} to {}",
                    span,
                    col,
                    room
                );
                self.cells[col].shrink_col_span(room);
                // A span set after construction may have no fillers to drop
                let len = self.cells.len();
                let start = (col + room).min(len);
                let end = col.saturating_add(span).min(len).max(start);
                self.cells.drain(start..end);
            }
            col = col.saturating_add(self.cells[col].col_span());
        }

        if self.cells.len() > width {
            log::debug!(
                "dropping {} cells past column {}",
                self.cells.len() - width,
                width
            );
            self.cells.truncate(width);
        }

        self.pad_to_max_columns();
    }

    fn blank(&self) -> Cell {
        CellValue::Empty.into_cell(self.is_header())
    }

    /// Logical width of the row
    ///
    /// Fillers swallowed by a preceding column span are skipped.
    pub fn column_count(&self) -> usize {
        let mut count = 0;
        for (index, cell) in self.cells.iter().enumerate() {
            if index == count {
                count = count.saturating_add(cell.col_span());
            }
        }
        count
    }

    /// Walk the logical slots of this row below the frontier `above`
    pub fn slots<'a>(&'a self, above: &Frontier) -> Vec<RowSlot<'a>> {
        let width = self.column_count();
        let mut slots = Vec::new();
        let mut col = 0;

        while col < width {
            let inherited = above.slot(col);
            if inherited.is_covered() {
                slots.push(RowSlot::Covered { col, inherited });
                col = col.saturating_add(inherited.col_span.max(1));
            } else if let Some(cell) = self.cells.get(col) {
                slots.push(RowSlot::Own { col, cell });
                col = col.saturating_add(cell.col_span());
            } else {
                break;
            }
        }

        slots
    }

    /// Frontier this row hands to the row below
    ///
    /// Open columns take this row's own spans; covered columns keep the
    /// covering cell's width with one row less to go.
    pub fn frontier(&self, above: &Frontier) -> Frontier {
        // Slots past both this row's cells and the frontier above are never read
        let width = self.column_count().min(self.cells.len().max(above.len()));
        let mut next = Frontier::with_width(width);
        for slot in self.slots(above) {
            match slot {
                RowSlot::Own { col, cell } => {
                    next.fill(col, SpanSlot::new(cell.row_span(), cell.col_span()))
                }
                RowSlot::Covered { col, inherited } => next.fill(col, inherited.descend()),
            }
        }
        next
    }

    /// Generate the `<tr>` element for this row
    ///
    /// Covered slots produce no element at all.
    pub fn render_html(&self, above: &Frontier, ctx: &mut RenderContext) -> String {
        let mut out = String::from("<tr>");
        for slot in self.slots(above) {
            if let RowSlot::Own { col, cell } = slot {
                let row_span = ctx.clamp_row_span(col, cell.row_span());
                out.push_str(&cell.render_html(row_span));
            }
        }
        out.push_str("</tr>");
        out
    }

    /// Generate one line of the tabular body
    ///
    /// Covered slots produce an empty placeholder of the covering width.
    pub fn render_latex(&self, above: &Frontier, ctx: &mut RenderContext) -> String {
        let parts: Vec<String> = self
            .slots(above)
            .into_iter()
            .map(|slot| match slot {
                RowSlot::Own { col, cell } => cell.render_latex(col, ctx),
                RowSlot::Covered { col, inherited } => {
                    let header = self
                        .cells
                        .get(col)
                        .map_or(self.is_header(), |c| c.is_header);
                    Cell::render_latex_covered(inherited.col_span, header, ctx)
                }
            })
            .collect();

        let mut out = parts.join(" & ");
        out.push_str("\\\\\n");
        if self.is_header() {
            out.push_str(ctx.options.rule_style.mid());
            out.push('\n');
        }
        out
    }
}

impl<C: IntoCell> From<Vec<C>> for Row {
    fn from(values: Vec<C>) -> Self {
        Row::from_cells(values)
    }
}

impl<C: IntoCell, const N: usize> From<[C; N]> for Row {
    fn from(values: [C; N]) -> Self {
        Row::from_cells(values)
    }
}

impl<C: IntoCell> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Row::from_cells(iter)
    }
}
