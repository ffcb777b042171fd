//! The table engine: one live table, replaced wholesale by each operation.
//!
//! Starts empty. `load` installs a table; every other operation requires one
//! and fails with `NoTableLoaded` otherwise. A failing operation leaves the
//! current table exactly as it was.

use csvq_core::prelude::{Error, Result, Row, Table};
use csvq_operators::{CountBy, Limit, Operator, OrderBy, Project, SortMergeJoin};

use crate::metrics::{emit_failure, emit_step};

#[derive(Debug, Default)]
pub struct TableEngine {
    table: Option<Table>,
}

impl TableEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install parsed records (record 0 = headers) as the current table.
    pub fn load(&mut self, name: &str, records: Vec<Row>) -> Result<()> {
        match Table::from_records(name, records) {
            Ok(table) => {
                emit_step("load", &table);
                self.table = Some(table);
                Ok(())
            }
            Err(e) => {
                emit_failure("load", &e);
                Err(e)
            }
        }
    }

    pub fn project(&mut self, columns: &[String]) -> Result<()> {
        self.apply(&Project::new(columns.to_vec()))
    }

    pub fn limit(&mut self, n: usize) -> Result<()> {
        self.apply(&Limit { n })
    }

    /// Sort descending on `column`.
    pub fn order_by(&mut self, column: &str) -> Result<()> {
        self.apply(&OrderBy::new(column))
    }

    /// Inner equi-join against a second set of records (record 0 = headers).
    pub fn join_with(&mut self, name: &str, records: Vec<Row>, column: &str) -> Result<()> {
        // Checked before the join column so an empty file reports as empty.
        let other = Table::from_records(name, records)?;
        self.apply(&SortMergeJoin::new(other, column))
    }

    pub fn count_by(&mut self, column: &str) -> Result<()> {
        self.apply(&CountBy::new(column))
    }

    /// Snapshot of the current rows.
    pub fn data(&self) -> Result<Vec<Row>> {
        Ok(self.current()?.rows.clone())
    }

    /// Snapshot of the current headers.
    pub fn headers(&self) -> Result<Vec<String>> {
        Ok(self.current()?.headers.clone())
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn into_table(self) -> Result<Table> {
        self.table.ok_or(Error::NoTableLoaded)
    }

    fn current(&self) -> Result<&Table> {
        self.table.as_ref().ok_or(Error::NoTableLoaded)
    }

    fn apply(&mut self, op: &dyn Operator) -> Result<()> {
        let result = op.apply(self.current()?);
        match result {
            Ok(next) => {
                emit_step(op.name(), &next);
                self.table = Some(next);
                Ok(())
            }
            Err(e) => {
                emit_failure(op.name(), &e);
                Err(e)
            }
        }
    }
}
