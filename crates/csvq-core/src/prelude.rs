//! Convenient re-exports for downstream crates.

pub use crate::compare::{sniff_kind, sort_rows, ColumnKind, SortOrder};
pub use crate::config::{EngineConfig, OutputFormat};
pub use crate::error::{Error, Result};
pub use crate::table::{resolve_column, Row, Table};
