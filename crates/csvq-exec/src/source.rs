//! Where `FROM`/`JOIN` file names are resolved to records.

use std::collections::HashMap;
use std::path::PathBuf;

use csvq_core::config::EngineConfig;
use csvq_core::table::Row;
use csvq_io::CsvReader;

use crate::runner::ExecError;

pub trait TableSource {
    /// Return every record for `name`; record 0 is the header.
    fn read_records(&self, name: &str) -> Result<Vec<Row>, ExecError>;
}

/// Reads delimited files from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    reader: CsvReader,
    base_dir: Option<PathBuf>,
}

impl FileSource {
    pub fn new(cfg: &EngineConfig) -> Self {
        Self {
            reader: CsvReader::from_config(cfg),
            base_dir: None,
        }
    }

    /// Resolve relative names against `dir` instead of the working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    fn resolve(&self, name: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl TableSource for FileSource {
    fn read_records(&self, name: &str) -> Result<Vec<Row>, ExecError> {
        Ok(self.reader.read_path(self.resolve(name))?)
    }
}

/// Named in-memory record sets, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<String, Vec<Row>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register records under `name` (record 0 is the header).
    pub fn insert(&mut self, name: impl Into<String>, records: Vec<Row>) {
        self.tables.insert(name.into(), records);
    }

    pub fn with(mut self, name: impl Into<String>, records: Vec<Row>) -> Self {
        self.insert(name, records);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }
}

impl TableSource for MemorySource {
    fn read_records(&self, name: &str) -> Result<Vec<Row>, ExecError> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| ExecError::SourceNotFound(name.to_string()))
    }
}
