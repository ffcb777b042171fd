//! Typed pipeline steps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of a pipeline, in the order it will run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Load a table; replaces whatever was loaded before.
    From { file: String },
    Select { columns: Vec<String> },
    Take { n: usize },
    OrderBy { column: String },
    Join { file: String, column: String },
    CountBy { column: String },
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::From { .. } => "FROM",
            Command::Select { .. } => "SELECT",
            Command::Take { .. } => "TAKE",
            Command::OrderBy { .. } => "ORDERBY",
            Command::Join { .. } => "JOIN",
            Command::CountBy { .. } => "COUNTBY",
        }
    }
}

/// Renders the token form, e.g. `JOIN cities.csv id`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kw = self.keyword();
        match self {
            Command::From { file } => write!(f, "{kw} {file}"),
            Command::Select { columns } => write!(f, "{kw} {}", columns.join(",")),
            Command::Take { n } => write!(f, "{kw} {n}"),
            Command::OrderBy { column } | Command::CountBy { column } => {
                write!(f, "{kw} {column}")
            }
            Command::Join { file, column } => write!(f, "{kw} {file} {column}"),
        }
    }
}
