//! Integration tests for Tabrender table rendering

use tabrender::{
    escape_latex, Cell, IndexMap, RenderOptions, Row, SpanAxis, Table, TableError, WarningKind,
};

fn grid() -> Table {
    Table::new(vec![[1, 2, 3], [4, 5, 6], [7, 8, 9]])
}

// ============================================================================
// Column Spans
// ============================================================================

mod col_span {
    use super::*;

    #[test]
    fn test_col_span_html() {
        let mut table = grid();
        table.cell_at_mut(0, 0).unwrap().set_col_span(2).unwrap();

        let html = table.render_html();
        let rows: Vec<&str> = html.split("<tr>").collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[1].starts_with("<td colspan=\"2\">"));
    }

    #[test]
    fn test_col_span_latex() {
        let mut table = grid();
        table.cell_at_mut(0, 0).unwrap().set_col_span(2).unwrap();

        let latex = table.render_latex();
        let lines: Vec<&str> = latex.split("\\\\").collect();
        assert_eq!(lines.len(), 4);
        let first = lines[0].lines().last().unwrap();
        assert!(first.starts_with("\\multicolumn{2}{l}{1}"));
    }

    #[test]
    fn test_physical_and_logical_width() {
        let table = Table::new(vec![Row::from_cells([
            Cell::new("a").with_col_span(2).unwrap(),
            Cell::new("b"),
        ])]);
        assert_eq!(table.row(0).unwrap().len(), 3);
        assert_eq!(table.column_count(), 3);
    }
}

// ============================================================================
// Row Spans
// ============================================================================

mod row_span {
    use super::*;

    #[test]
    fn test_row_span_html() {
        let mut table = grid();
        table.cell_at_mut(0, 0).unwrap().set_row_span(2).unwrap();

        let html = table.render_html();
        let rows: Vec<&str> = html.split("<tr>").collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[1].contains("rowspan=\"2\""));
        assert_eq!(rows[1].matches("<td").count(), 3);
        assert_eq!(rows[2].matches("<td").count(), 2);
        assert!(!rows[2].contains(">4<"));
    }

    #[test]
    fn test_row_span_latex() {
        let mut table = grid();
        table.cell_at_mut(0, 0).unwrap().set_row_span(2).unwrap();

        let latex = table.render_latex();
        let lines: Vec<&str> = latex.split("\\\\").collect();
        assert_eq!(lines.len(), 4);

        let first: Vec<&str> = lines[0].split('&').collect();
        assert!(first[0].contains("\\multirow{2}"));

        let second: Vec<&str> = lines[1].split('&').collect();
        assert_eq!(second.len(), 3);
        assert_eq!(second[0].trim(), "");
    }

    #[test]
    fn test_row_span_needs_multirow_package() {
        let mut table = grid();
        table.cell_at_mut(0, 0).unwrap().set_row_span(2).unwrap();
        let result = table.render_latex_with_diagnostics(&RenderOptions::default());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.kind == WarningKind::MultirowPackage));
        // Still renders
        assert!(result.content.ends_with("\\end{tabular}"));
    }
}

// ============================================================================
// Construction and Addressing
// ============================================================================

mod construction {
    use super::*;

    #[test]
    fn test_header_row_table() {
        let table = Table::new(vec![
            Row::header(["a", "b", "c"]),
            Row::from([1, 2, 3]),
            Row::from([2, 4, 6]),
        ]);
        let html = table.render_html();
        assert!(html.contains("<th"));
        assert!(html.contains("<td"));
        assert!(table.render_latex().contains("\\hline"));
    }

    #[test]
    fn test_mapping_construction() {
        let mut columns = IndexMap::new();
        columns.insert("a", vec![1, 2]);
        columns.insert("b", vec![3, 4]);
        let table = Table::from_mapping(columns);

        let html = table.render_html();
        assert_eq!(
            html,
            "<table>\n\
             <tr><th>a</th><th>b</th></tr>\n\
             <tr><td>1</td><td>3</td></tr>\n\
             <tr><td>2</td><td>4</td></tr>\n\
             </table>"
        );
    }

    #[test]
    fn test_invalid_spans_rejected() {
        let mut table = grid();
        let cell = table.cell_at_mut(1, 1).unwrap();
        assert_eq!(
            cell.set_row_span(0),
            Err(TableError::InvalidSpan {
                axis: SpanAxis::Row,
                value: 0
            })
        );
        assert!(Cell::new("x").with_col_span(0).is_err());
    }

    #[test]
    fn test_out_of_range_addressing() {
        let table = grid();
        let err = table.cell_at(0, 9).unwrap_err();
        assert!(matches!(err, TableError::IndexOutOfRange { row: 0, col: 9 }));
    }

    #[test]
    fn test_collect_rows_into_table() {
        let table: Table = (1..=3).map(|i| vec![i, i * i]).collect();
        assert_eq!(table.row_count(), 3);
        assert!(table.render_latex().contains("3 & 9\\\\"));
    }
}

// ============================================================================
// Escaping and Stability
// ============================================================================

mod output {
    use super::*;

    #[test]
    fn test_escape_examples() {
        assert_eq!(escape_latex("body & mind & r&d"), r"body \& mind \& r\&d");
        assert_eq!(escape_latex("\r\n"), r"{\linebreak}");
    }

    #[test]
    fn test_idempotent_rendering() {
        let mut table = grid();
        table
            .cell_at_mut(1, 0)
            .unwrap()
            .set_span(Some(2), Some(2))
            .unwrap();
        let html = table.render_html();
        let latex = table.render_latex();
        assert_eq!(html, table.render_html());
        assert_eq!(latex, table.render_latex());
    }

    #[test]
    fn test_header_toggles_rules() {
        let plain = grid().render_latex();
        assert!(!plain.contains("\\hline"));

        let headed = Table::new(vec![Row::header(["x", "y", "z"]), Row::from([1, 2, 3])]);
        let latex = headed.render_latex();
        assert!(latex.starts_with("\\begin{tabular}{*{3}{l}}\n\\hline\n"));
        assert!(latex.ends_with("\\hline\n\\end{tabular}"));
    }
}

// ============================================================================
// Data Loading
// ============================================================================

#[cfg(feature = "data-loading")]
mod loading {
    use super::*;
    use tabrender::loading::{load, load_csv, load_json, DataFormat};

    #[test]
    fn test_json_to_latex() {
        let table = load_json(r#"{"item": ["a_1", "b"], "cost": ["$5", "$7"]}"#, true).unwrap();
        let latex = table.render_latex();
        assert!(latex.contains("\\bf item & \\bf cost\\\\"));
        assert!(latex.contains("a\\_1 & \\$5\\\\"));
    }

    #[test]
    fn test_csv_to_html() {
        let table = load_csv("h1,h2\n1,2\n".as_bytes(), true).unwrap();
        assert!(table.render_html().contains("<tr><th>h1</th><th>h2</th></tr>"));
    }

    #[test]
    fn test_load_dispatch() {
        let table = load("- [1, 2]\n- [3, 4]\n", DataFormat::Yaml, false).unwrap();
        assert_eq!(table.row_count(), 2);
        assert!(!table.has_header());
    }

    #[test]
    fn test_load_error() {
        let err = load("not: [valid", DataFormat::Yaml, true).unwrap_err();
        assert!(matches!(err, TableError::Load { format: "YAML", .. }));
    }
}
