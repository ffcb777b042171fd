//! Row limit (`TAKE n`).

use csvq_core::prelude::{Error, Result, Table};

use crate::traits::Operator;

#[derive(Debug, Clone, Copy)]
pub struct Limit {
    pub n: usize,
}

impl Operator for Limit {
    fn name(&self) -> &'static str {
        "limit"
    }

    fn apply(&self, input: &Table) -> Result<Table> {
        if self.n > input.num_rows() {
            return Err(Error::RowLimitExceeded {
                requested: self.n,
                available: input.num_rows(),
            });
        }
        Ok(Table::new(input.headers.clone(), input.rows[..self.n].to_vec()))
    }
}
