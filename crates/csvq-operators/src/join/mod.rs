//! Equality joins.

pub mod merge;
