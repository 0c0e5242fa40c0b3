//! Loading tables from data files
//!
//! JSON, YAML and TOML documents may hold either an object of columns
//! (turned into a header row plus body rows, see [`Table::from_mapping`]) or
//! an array of rows. CSV input is read record by record.

use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::core::cell::CellValue;
use crate::core::row::Row;
use crate::core::table::Table;
use crate::utils::error::{TableError, TableResult};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Toml,
    Csv,
}

impl DataFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            "toml" => Some(DataFormat::Toml),
            "csv" => Some(DataFormat::Csv),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataFormat::Json => "JSON",
            DataFormat::Yaml => "YAML",
            DataFormat::Toml => "TOML",
            DataFormat::Csv => "CSV",
        }
    }
}

/// Shape of a structured data document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    /// `{"a": [1, 2], "b": [3, 4]}`
    Columns(IndexMap<String, Vec<Value>>),
    /// `[["a", "b"], [1, 3], [2, 4]]`
    Rows(Vec<Vec<Value>>),
}

impl Document {
    /// Column documents always get a header row of their keys
    fn into_table(self, header_first: bool) -> Table {
        match self {
            Document::Columns(columns) => {
                let columns: IndexMap<String, Vec<CellValue>> = columns
                    .into_iter()
                    .map(|(key, values)| (key, values.into_iter().map(json_value).collect()))
                    .collect();
                Table::from_mapping(columns)
            }
            Document::Rows(rows) => {
                let mut table = Table::default();
                for (index, values) in rows.into_iter().enumerate() {
                    let values = values.into_iter().map(json_value);
                    if index == 0 && header_first {
                        table.append(Row::header(values));
                    } else {
                        table.append(Row::from_cells(values));
                    }
                }
                table
            }
        }
    }
}

const SHAPE_HINT: &str = "expected an object of columns or an array of rows";

/// Map a JSON scalar to a cell value
fn json_value(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Bool(b),
        // Non-integers keep their JSON text so `1.0` does not render as `1`
        Value::Number(n) => match n.as_i64() {
            Some(i) => CellValue::Integer(i),
            None => CellValue::Text(n.to_string()),
        },
        Value::String(s) => CellValue::Text(s),
        other => CellValue::Text(other.to_string()),
    }
}

fn shape_error(format: DataFormat, err: impl std::fmt::Display) -> TableError {
    TableError::load(format.name(), format!("{} ({})", SHAPE_HINT, err))
}

/// Load a table from JSON text
pub fn load_json(text: &str, header_first: bool) -> TableResult<Table> {
    let doc: Document =
        serde_json::from_str(text).map_err(|e| shape_error(DataFormat::Json, e))?;
    Ok(doc.into_table(header_first))
}

/// Load a table from YAML text
pub fn load_yaml(text: &str, header_first: bool) -> TableResult<Table> {
    let doc: Document =
        serde_yaml::from_str(text).map_err(|e| shape_error(DataFormat::Yaml, e))?;
    Ok(doc.into_table(header_first))
}

/// Load a table from TOML text
///
/// A TOML document is always a table at the top level, so only the column
/// form applies.
pub fn load_toml(text: &str, header_first: bool) -> TableResult<Table> {
    let doc: Document = toml::from_str(text).map_err(|e| shape_error(DataFormat::Toml, e))?;
    Ok(doc.into_table(header_first))
}

/// Load a table from CSV records
///
/// With `has_headers`, the first record becomes a header row. Fields are
/// kept as text exactly as written, so `02134` and `1.50` survive.
pub fn load_csv<R: Read>(reader: R, has_headers: bool) -> TableResult<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = Table::default();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| TableError::load("CSV", e.to_string()))?;
        if index == 0 && has_headers {
            table.append(Row::header(record.iter().map(CellValue::from)));
        } else {
            table.append(Row::from_cells(record.iter().map(CellValue::from)));
        }
    }

    Ok(table)
}

/// Load a table from text in the given format
pub fn load(text: &str, format: DataFormat, header: bool) -> TableResult<Table> {
    match format {
        DataFormat::Json => load_json(text, header),
        DataFormat::Yaml => load_yaml(text, header),
        DataFormat::Toml => load_toml(text, header),
        DataFormat::Csv => load_csv(text.as_bytes(), header),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DataFormat::from_path(Path::new("t.JSON")), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_path(Path::new("t.yml")), Some(DataFormat::Yaml));
        assert_eq!(DataFormat::from_path(Path::new("t.csv")), Some(DataFormat::Csv));
        assert_eq!(DataFormat::from_path(Path::new("t")), None);
    }

    #[test]
    fn test_json_columns() {
        let table = load_json(r#"{"b": [1, 2.5], "a": ["x", null]}"#, true).unwrap();
        assert!(table.has_header());
        assert_eq!(table.cell_at(0, 0).unwrap().value, CellValue::from("b"));
        assert_eq!(table.cell_at(1, 0).unwrap().value, CellValue::Integer(1));
        assert_eq!(table.cell_at(2, 0).unwrap().value, CellValue::from("2.5"));
        assert_eq!(table.cell_at(2, 1).unwrap().value, CellValue::Empty);
    }

    #[test]
    fn test_json_rows() {
        let table = load_json("[[1, 2], [3, 4]]", false).unwrap();
        assert!(!table.has_header());
        assert_eq!(table.row_count(), 2);

        let table = load_json(r#"[["h1", "h2"], [3, 4]]"#, true).unwrap();
        assert!(table.row(0).unwrap().is_header());
    }

    #[test]
    fn test_json_bad_shape() {
        let err = load_json("42", true).unwrap_err();
        assert!(err.to_string().contains("JSON"));
        assert!(err.to_string().contains(SHAPE_HINT));
    }

    #[test]
    fn test_yaml_columns() {
        let table = load_yaml("name: [ann, bob]\nage: [31, 42]\n", true).unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.cell_at(2, 1).unwrap().value, CellValue::Integer(42));
    }

    #[test]
    fn test_toml_columns() {
        let table = load_toml("name = [\"ann\", \"bob\"]\nok = [true]\n", true).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.cell_at(1, 1).unwrap().value, CellValue::Bool(true));
        assert_eq!(table.cell_at(2, 1).unwrap().value, CellValue::from(""));
    }

    #[test]
    fn test_csv_with_header() {
        let data = "item,qty\napple,3\npear,1.5\n";
        let table = load_csv(data.as_bytes(), true).unwrap();
        assert!(table.has_header());
        assert_eq!(table.cell_at(1, 1).unwrap().value, CellValue::from("3"));
        assert_eq!(table.cell_at(2, 1).unwrap().value, CellValue::from("1.5"));
    }

    #[test]
    fn test_csv_fields_keep_their_text() {
        let table = load_csv("zip,amt,code\n02134,1.50,1e3\n".as_bytes(), true).unwrap();
        assert!(table
            .render_html()
            .contains("<tr><td>02134</td><td>1.50</td><td>1e3</td></tr>"));
    }

    #[test]
    fn test_json_floats_keep_fraction() {
        let table = load_json("[[1.0, 2.25, 7]]", false).unwrap();
        assert_eq!(table.cell_at(0, 0).unwrap().value, CellValue::from("1.0"));
        assert_eq!(table.cell_at(0, 2).unwrap().value, CellValue::Integer(7));
        assert!(table
            .render_html()
            .contains("<tr><td>1.0</td><td>2.25</td><td>7</td></tr>"));
    }

    #[test]
    fn test_csv_ragged_rows_are_padded() {
        let table = load("a,b,c\n1\n", DataFormat::Csv, false).unwrap();
        assert_eq!(table.row(1).unwrap().column_count(), 3);
    }
}
