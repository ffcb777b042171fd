//! Sort-then-scan inner equi-join on a single shared column name.
//!
//! Both sides are sorted ascending on the join column with the digit-sniffing
//! comparator. For every left row the right side is scanned from the start
//! until the first equal key, then forward while keys stay equal, emitting one
//! combined row per match. This is O(n*m); the scan does not resume from a
//! previous cursor. The combined table is finally sorted ascending on its
//! first column.

use csvq_core::prelude::{resolve_column, sort_rows, Result, Row, SortOrder, Table};

use crate::traits::Operator;

#[derive(Debug, Clone, Default)]
pub struct SortMergeJoin {
    /// Right-hand table (already split into headers and rows).
    pub other: Table,
    /// Column name present in both tables.
    pub column: String,
}

impl SortMergeJoin {
    pub fn new(other: Table, column: impl Into<String>) -> Self {
        Self {
            other,
            column: column.into(),
        }
    }
}

impl Operator for SortMergeJoin {
    fn name(&self) -> &'static str {
        "join_merge"
    }

    fn apply(&self, input: &Table) -> Result<Table> {
        let left_key = resolve_column(&input.headers, &self.column)?;
        let right_key = resolve_column(&self.other.headers, &self.column)?;
        // Every right-hand column carrying the join name is dropped, not just the first.
        let keep: Vec<bool> = self
            .other
            .headers
            .iter()
            .map(|h| *h != self.column)
            .collect();

        let mut left = input.rows.clone();
        let mut right = self.other.rows.clone();
        sort_rows(&mut left, left_key, SortOrder::Ascending)?;
        sort_rows(&mut right, right_key, SortOrder::Ascending)?;

        let mut rows: Vec<Row> = Vec::new();
        for l in &left {
            let key = &l[left_key];
            let Some(start) = right.iter().position(|r| &r[right_key] == key) else {
                continue;
            };
            for r in right[start..].iter().take_while(|r| &r[right_key] == key) {
                let mut combined = l.clone();
                combined.extend(
                    r.iter()
                        .enumerate()
                        .filter(|&(i, _)| keep.get(i).copied().unwrap_or(true))
                        .map(|(_, v)| v.clone()),
                );
                rows.push(combined);
            }
        }

        let mut headers = input.headers.clone();
        headers.extend(
            self.other
                .headers
                .iter()
                .filter(|h| **h != self.column)
                .cloned(),
        );

        sort_rows(&mut rows, 0, SortOrder::Ascending)?;
        Ok(Table::new(headers, rows))
    }
}
