//! Table construction from an ordered column mapping
//!
//! Keys become a header row; the value sequences become columns. Columns
//! shorter than the longest one are padded with empty strings.

use indexmap::IndexMap;

use crate::core::cell::{Cell, IntoCell};
use crate::core::row::Row;
use crate::core::table::Table;

impl Table {
    /// Build a table from a key → column mapping
    ///
    /// ```
    /// use tabrender::{IndexMap, Table};
    ///
    /// let mut columns = IndexMap::new();
    /// columns.insert("a", vec![1, 2]);
    /// columns.insert("b", vec![3, 4]);
    ///
    /// let table = Table::from_mapping(columns);
    /// assert_eq!(table.row_count(), 3);
    /// assert!(table.has_header());
    /// ```
    pub fn from_mapping<K, V>(mapping: IndexMap<K, Vec<V>>) -> Self
    where
        K: IntoCell,
        V: IntoCell,
    {
        let longest = mapping.values().map(Vec::len).max().unwrap_or(0);

        let (keys, columns): (Vec<K>, Vec<Vec<V>>) = mapping.into_iter().unzip();
        let mut columns: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();

        let mut table = Table::default();
        table.append(Row::header(keys));

        for _ in 0..longest {
            let row: Row = columns
                .iter_mut()
                .map(|column| match column.next() {
                    Some(value) => value.into_cell(false),
                    None => Cell::new(""),
                })
                .collect();
            table.append(row);
        }

        table
    }
}

impl<K: IntoCell, V: IntoCell> From<IndexMap<K, Vec<V>>> for Table {
    fn from(mapping: IndexMap<K, Vec<V>>) -> Self {
        Table::from_mapping(mapping)
    }
}
