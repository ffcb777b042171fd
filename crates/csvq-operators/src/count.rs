//! COUNT BY: group rows by the exact text of one column.

use std::collections::HashMap;

use csvq_core::prelude::{Result, Table};
use csvq_core::table::ensure_width;

use crate::traits::Operator;

/// Header of the count column in the output table.
pub const COUNT_HEADER: &str = "count";

#[derive(Debug, Clone, Default)]
pub struct CountBy {
    pub column: String,
}

impl CountBy {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Operator for CountBy {
    fn name(&self) -> &'static str {
        "count_by"
    }

    /// Output is `[column, "count"]` with one row per distinct value.
    ///
    /// Values are grouped verbatim ("5" and "05" are different groups).
    /// Groups come out in first-appearance order; callers must not rely on it.
    fn apply(&self, input: &Table) -> Result<Table> {
        let index = input.column_index(&self.column)?;
        ensure_width(&input.rows, index)?;

        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, usize)> = Vec::new();
        for row in &input.rows {
            let key = row[index].as_str();
            match slots.get(key) {
                Some(&slot) => groups[slot].1 += 1,
                None => {
                    slots.insert(key, groups.len());
                    groups.push((key, 1));
                }
            }
        }

        let rows = groups
            .into_iter()
            .map(|(value, count)| vec![value.to_string(), count.to_string()])
            .collect();
        Ok(Table::new(
            vec![self.column.clone(), COUNT_HEADER.to_string()],
            rows,
        ))
    }
}
