//! Operator trait.
//!
//! The engine calls `apply` with its current table and, on success, replaces
//! the current table with the result. Operators never mutate their input, so
//! a failed step leaves the engine state as it was.

use csvq_core::prelude::{Result, Table};

pub trait Operator {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Compute the output table for `input`.
    fn apply(&self, input: &Table) -> Result<Table>;
}
