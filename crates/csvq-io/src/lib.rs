#![forbid(unsafe_code)]
//! csvq-io: the table reader and writers at the edge of the engine.
//!
//! Reading turns a delimited file into `Row`s (record 0 is the header; the
//! engine decides what that means). Writing takes a finished `Table` and
//! serializes it as delimited text or NDJSON.

pub mod error;
pub mod readers;
pub mod writers;

pub use error::{Error, Result};
pub use readers::csv::CsvReader;
pub use writers::csv::CsvWriter;
pub use writers::jsonl::JsonlWriter;
