//! Streaming NDJSON writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::ser::{Serialize, SerializeMap, Serializer};

use csvq_core::table::Table;

use crate::error::Result;

pub struct JsonlWriter<W: Write> {
    writer: BufWriter<W>,
}

impl JsonlWriter<File> {
    pub fn to_path(path: &str) -> Result<Self> {
        let f = File::create(path)?;
        Ok(Self::to_writer(f))
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn to_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write the table as one JSON object per row, keys in header order.
    pub fn write_table(&mut self, table: &Table) -> Result<()> {
        for row in &table.rows {
            let obj = RowObject {
                headers: &table.headers,
                fields: row,
            };
            serde_json::to_writer(&mut self.writer, &obj)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::error::Error::Io(e.into_error()))
    }
}

// Serialized as a map so key order follows the headers.
struct RowObject<'a> {
    headers: &'a [String],
    fields: &'a [String],
}

impl Serialize for RowObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (name, value) in self.headers.iter().zip(self.fields) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
