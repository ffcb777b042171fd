#![forbid(unsafe_code)]
//! csvq-operators: the relational steps of a csvq pipeline.
//!
//! Design intent:
//! - Pure and synchronous: every operator reads a `&Table` and returns a new
//!   `Table`; the caller decides whether to replace its state.
//! - Errors use the `csvq_core::Error` taxonomy directly so the engine can
//!   surface them unchanged.

pub mod traits;

pub mod count;
pub mod limit;
pub mod project;
pub mod sort;

pub mod join;

pub use count::CountBy;
pub use join::merge::SortMergeJoin;
pub use limit::Limit;
pub use project::Project;
pub use sort::OrderBy;
pub use traits::Operator;
