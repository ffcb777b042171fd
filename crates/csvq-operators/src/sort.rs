//! ORDER BY: descending sort on one column with digit sniffing.

use csvq_core::prelude::{sort_rows, Result, SortOrder, Table};

use crate::traits::Operator;

#[derive(Debug, Clone, Default)]
pub struct OrderBy {
    pub column: String,
}

impl OrderBy {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Operator for OrderBy {
    fn name(&self) -> &'static str {
        "order_by"
    }

    fn apply(&self, input: &Table) -> Result<Table> {
        let index = input.column_index(&self.column)?;
        let mut rows = input.rows.clone();
        sort_rows(&mut rows, index, SortOrder::Descending)?;
        Ok(Table::new(input.headers.clone(), rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_descending_numerically() {
        let t = Table::new(
            vec!["name".into(), "age".into()],
            vec![
                vec!["Alice".into(), "30".into()],
                vec!["Bob".into(), "25".into()],
                vec!["Cara".into(), "100".into()],
            ],
        );
        let out = OrderBy::new("age").apply(&t).unwrap();
        let ages: Vec<&str> = out.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(ages, ["100", "30", "25"]);
    }

    #[test]
    fn sorts_descending_by_text() {
        let t = Table::new(
            vec!["name".into()],
            vec![vec!["bob".into()], vec!["Cara".into()], vec!["alice".into()]],
        );
        let out = OrderBy::new("name").apply(&t).unwrap();
        let names: Vec<&str> = out.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, ["bob", "alice", "Cara"]);
    }
}
