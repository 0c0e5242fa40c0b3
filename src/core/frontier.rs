//! Row-span frontier
//!
//! The frontier is passed from each row to the next. For every logical
//! column it records how many rows (including the next one) a cell from
//! above still covers, and how wide that cell is.
//!
//! ```text
//! row 0:  [A rs=2] [B]      [C]       frontier: (2,1) (1,1) (1,1)
//! row 1:  (covered) [E]     [F]       frontier: (1,1) (1,1) (1,1)
//! ```

/// Span state of a single logical column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanSlot {
    /// Rows the owning cell still covers, counting the row it is read by
    pub remaining_rows: usize,
    /// Column span of the owning cell
    pub col_span: usize,
}

impl SpanSlot {
    pub const OPEN: SpanSlot = SpanSlot {
        remaining_rows: 1,
        col_span: 1,
    };

    pub fn new(remaining_rows: usize, col_span: usize) -> Self {
        SpanSlot {
            remaining_rows,
            col_span,
        }
    }

    /// Whether a cell from an earlier row still occupies this column
    pub fn is_covered(&self) -> bool {
        self.remaining_rows > 1
    }

    /// The slot as seen one row further down
    pub fn descend(&self) -> SpanSlot {
        SpanSlot {
            remaining_rows: self.remaining_rows - 1,
            col_span: self.col_span,
        }
    }
}

impl Default for SpanSlot {
    fn default() -> Self {
        SpanSlot::OPEN
    }
}

/// Per-column span state between two rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    slots: Vec<SpanSlot>,
}

impl Frontier {
    /// Frontier above the first row: nothing is covered
    pub fn empty() -> Self {
        Frontier { slots: Vec::new() }
    }

    pub fn with_width(width: usize) -> Self {
        Frontier {
            slots: vec![SpanSlot::OPEN; width],
        }
    }

    /// Slot at a logical column; columns past the end are open
    pub fn slot(&self, col: usize) -> SpanSlot {
        self.slots.get(col).copied().unwrap_or_default()
    }

    /// Assign `slot` to every column it spans, starting at `col`
    pub fn fill(&mut self, col: usize, slot: SpanSlot) {
        let end = col
            .saturating_add(slot.col_span.max(1))
            .min(self.slots.len());
        for entry in self.slots.iter_mut().take(end).skip(col) {
            *entry = slot;
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of columns still covered from above
    pub fn covered_columns(&self) -> usize {
        self.slots.iter().filter(|s| s.is_covered()).count()
    }

    pub fn slots(&self) -> &[SpanSlot] {
        &self.slots
    }
}
