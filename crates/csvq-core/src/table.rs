//! The in-memory table: ordered headers plus positionally aligned rows.
//!
//! Fields are always stored as text. Numeric interpretation happens per
//! comparison in `compare.rs`, never at rest.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One record; fields line up with `Table::headers` by position.
pub type Row = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from parsed records where record 0 is the header.
    ///
    /// `name` only labels the `EmptyData` error. Row widths are not checked
    /// here; a short row is reported by whichever operation first indexes it.
    pub fn from_records(name: &str, records: Vec<Row>) -> Result<Self> {
        let mut records = records.into_iter();
        let headers = records.next().ok_or_else(|| Error::EmptyData {
            name: name.to_string(),
        })?;
        Ok(Self {
            headers,
            rows: records.collect(),
        })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve `name` against this table's own headers.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        resolve_column(&self.headers, name)
    }
}

/// Resolve a column name to its zero-based position by exact match.
///
/// Duplicate headers are allowed; the first match wins.
pub fn resolve_column(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::ColumnNotFound {
            column: name.to_string(),
        })
}

/// Check that every row is wide enough to hold `index`.
pub fn ensure_width(rows: &[Row], index: usize) -> Result<()> {
    match rows.iter().position(|r| r.len() <= index) {
        None => Ok(()),
        Some(row) => Err(Error::ColumnOutOfRange {
            row,
            index,
            width: rows[row].len(),
        }),
    }
}
