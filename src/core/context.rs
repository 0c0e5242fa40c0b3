//! Per-pass rendering state

use super::options::RenderOptions;
use crate::utils::error::RenderWarning;

/// State threaded through a single render pass
///
/// A context lives for exactly one call to a table render method. Nothing in
/// it is stored on the table, which keeps rendering idempotent.
pub struct RenderContext<'a> {
    /// Options for this pass
    pub options: &'a RenderOptions,
    /// Index of the row being rendered
    pub row_index: usize,
    /// Rows left in the table, counting the current one
    pub rows_remaining: usize,
    /// Whether any `\multirow` has been emitted
    pub uses_multirow: bool,
    /// Collected warnings
    pub warnings: Vec<RenderWarning>,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a RenderOptions, row_count: usize) -> Self {
        RenderContext {
            options,
            row_index: 0,
            rows_remaining: row_count,
            uses_multirow: false,
            warnings: Vec::new(),
        }
    }

    /// Move on to the row at `index`
    pub fn enter_row(&mut self, index: usize, row_count: usize) {
        self.row_index = index;
        self.rows_remaining = row_count.saturating_sub(index);
    }

    /// Row span a cell in the current row may actually occupy
    ///
    /// Spans running past the last row are shortened, and a warning is
    /// recorded the first time each cell is shortened in this pass.
    pub fn clamp_row_span(&mut self, col: usize, requested: usize) -> usize {
        let limit = self.rows_remaining.max(1);
        if requested <= limit {
            return requested;
        }
        log::debug!(
            "clamping row span of cell ({}, {}) from {} to {}",
            self.row_index,
            col,
            requested,
            limit
        );
        self.warnings.push(RenderWarning::row_span_clamped(
            self.row_index,
            col,
            requested,
            limit,
        ));
        limit
    }

    /// Record that a `\multirow` was written
    pub fn note_multirow(&mut self) {
        if !self.uses_multirow {
            self.uses_multirow = true;
            self.warnings.push(RenderWarning::multirow());
        }
    }

    pub fn finish(self) -> Vec<RenderWarning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::WarningKind;

    #[test]
    fn test_clamp_within_table() {
        let opts = RenderOptions::default();
        let mut ctx = RenderContext::new(&opts, 3);
        assert_eq!(ctx.clamp_row_span(0, 3), 3);
        assert!(ctx.warnings.is_empty());
    }

    #[test]
    fn test_clamp_past_end() {
        let opts = RenderOptions::default();
        let mut ctx = RenderContext::new(&opts, 3);
        ctx.enter_row(2, 3);
        assert_eq!(ctx.clamp_row_span(1, 4), 1);
        assert_eq!(ctx.warnings.len(), 1);
        assert_eq!(ctx.warnings[0].kind, WarningKind::RowSpanClamped);
    }

    #[test]
    fn test_multirow_noted_once() {
        let opts = RenderOptions::default();
        let mut ctx = RenderContext::new(&opts, 2);
        ctx.note_multirow();
        ctx.note_multirow();
        assert!(ctx.uses_multirow);
        assert_eq!(ctx.finish().len(), 1);
    }
}
