#![forbid(unsafe_code)]
//! csvq-core: shared kernel for the csvq table engine.
//!
//! This crate contains only pure types and helpers: the in-memory `Table`,
//! column resolution, the digit-sniffing row comparator, the error taxonomy,
//! and `EngineConfig`. There is no I/O here.
//!
//! Crates that use this:
//! - csvq-operators: implements the relational steps over `Table`.
//! - csvq-io: reads/writes delimited text into/out of `Row`s.
//! - csvq-planner: produces typed `Command`s.
//! - csvq-exec: owns the live `Table` and runs commands against it.

pub mod compare;
pub mod config;
pub mod error;
pub mod prelude;
pub mod table;

pub use error::{Error, Result};
pub use table::{Row, Table};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
