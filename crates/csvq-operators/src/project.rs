//! Column projection: keep, reorder, or repeat columns by name.

use csvq_core::prelude::{Result, Table};
use csvq_core::table::ensure_width;

use crate::traits::Operator;

#[derive(Debug, Clone, Default)]
pub struct Project {
    pub columns: Vec<String>,
}

impl Project {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }
}

impl Operator for Project {
    fn name(&self) -> &'static str {
        "project"
    }

    fn apply(&self, input: &Table) -> Result<Table> {
        // Resolve everything up front so a bad name fails before any copying.
        let indices = self
            .columns
            .iter()
            .map(|c| input.column_index(c))
            .collect::<Result<Vec<usize>>>()?;

        if let Some(&max) = indices.iter().max() {
            ensure_width(&input.rows, max)?;
        }

        let headers = indices.iter().map(|&i| input.headers[i].clone()).collect();
        let rows = input
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Table::new(headers, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvq_core::error::Error;

    fn people() -> Table {
        Table::new(
            vec!["name".into(), "age".into(), "city".into()],
            vec![
                vec!["Alice".into(), "30".into(), "Oslo".into()],
                vec!["Bob".into(), "25".into(), "Rome".into()],
            ],
        )
    }

    #[test]
    fn reorders_and_repeats() {
        let out = Project::new(vec!["city".into(), "name".into(), "city".into()])
            .apply(&people())
            .unwrap();
        assert_eq!(out.headers, ["city", "name", "city"]);
        assert_eq!(out.rows[1], ["Rome", "Bob", "Rome"]);
    }

    #[test]
    fn unknown_column_fails() {
        let err = Project::new(vec!["name".into(), "salary".into()])
            .apply(&people())
            .unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound { ref column } if column == "salary"));
    }

    #[test]
    fn all_columns_in_order_is_identity() {
        let t = people();
        let out = Project::new(t.headers.clone()).apply(&t).unwrap();
        assert_eq!(out, t);
    }
}
