//! Delimited-text reader.
//!
//! Splits every line on the delimiter with no quoting or escaping, so a quote
//! character is just another byte. Rows may have differing widths; width is
//! checked later by the operations that index into a row. Blank lines are
//! skipped, and a single trailing empty field is dropped (`a,b,` is `[a, b]`).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use csvq_core::config::EngineConfig;
use csvq_core::table::Row;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct CsvReader {
    delimiter: u8,
    trim: bool,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl CsvReader {
    pub fn new(delimiter: u8, trim: bool) -> Self {
        Self { delimiter, trim }
    }

    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self::new(cfg.delimiter, cfg.trim_fields)
    }

    /// Read every record of the file at `path`.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Vec<Row>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_from(file)
    }

    /// Read every record from an arbitrary reader.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Row>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let mut row: Row = record.iter().map(str::to_string).collect();
            if row.len() > 1 && row.last().is_some_and(|f| f.is_empty()) {
                row.pop();
            }
            rows.push(row);
        }
        Ok(rows)
    }
}
