//! Delimited-text writer for the final table.

use std::fs::File;
use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use csvq_core::table::Table;

use crate::error::{Error, Result};

pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvWriter<File> {
    pub fn to_path(path: &str, delimiter: u8) -> Result<Self> {
        let f = File::create(path)?;
        Ok(Self::to_writer(f, delimiter))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn to_writer(writer: W, delimiter: u8) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(QuoteStyle::Never)
            .flexible(true)
            .from_writer(writer);
        Self { writer }
    }

    /// Write the header line followed by every row, one line each.
    pub fn write_table(&mut self, table: &Table) -> Result<()> {
        self.writer.write_record(&table.headers)?;
        for row in &table.rows {
            self.writer.write_record(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| {
            Error::Io(std::io::Error::new(e.error().kind(), e.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table, delimiter: u8) -> String {
        let mut w = CsvWriter::to_writer(Vec::new(), delimiter);
        w.write_table(table).unwrap();
        String::from_utf8(w.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn writes_header_then_rows() {
        let t = Table::new(
            vec!["name".into(), "age".into()],
            vec![vec!["Alice".into(), "30".into()], vec!["Bob".into(), "25".into()]],
        );
        assert_eq!(render(&t, b','), "name,age\nAlice,30\nBob,25\n");
    }

    #[test]
    fn never_quotes_and_honours_delimiter() {
        let t = Table::new(vec!["a".into(), "b".into()], vec![vec!["x y".into(), "q\"".into()]]);
        assert_eq!(render(&t, b'\t'), "a\tb\nx y\tq\"\n");
    }

    #[test]
    fn header_only_table() {
        let t = Table::new(vec!["age".into(), "count".into()], vec![]);
        assert_eq!(render(&t, b','), "age,count\n");
    }
}
