#![forbid(unsafe_code)]
//! csvq-planner: turn user input into an ordered list of typed `Command`s.
//!
//! Two front ends produce the same `Vec<Command>`:
//!     * command-line tokens (`FROM people.csv SELECT name,age TAKE 5`)
//!     * a YAML pipeline document (`steps: [{op: from, file: ...}, ...]`)
//!
//! Arity and argument types are validated here, before anything touches the
//! engine. No I/O happens in this crate.

pub mod command;
pub mod dsl;
pub mod error;
pub mod tokens;

pub use command::Command;
pub use dsl::yaml::{parse_yaml_pipeline, ParsedPipeline, PipelineConfig};
pub use error::{PlanError, Result};
pub use tokens::parse_commands;
