#![forbid(unsafe_code)]
//! csvq-exec: the table engine and the runner that drives it.
//!
//! `TableEngine` owns exactly one live table and replaces it wholesale on
//! every successful operation. `Runner` feeds it a list of planner
//! `Command`s, loading files through a `TableSource`.

pub mod engine;
pub mod metrics;
pub mod runner;
pub mod source;

pub use engine::TableEngine;
pub use runner::{ExecError, Runner};
pub use source::{FileSource, MemorySource, TableSource};
