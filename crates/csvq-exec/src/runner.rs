//! Runner: execute planner `Command`s against a `TableEngine`, in order.
//!
//! The first error aborts the run; nothing is returned for the steps that
//! did succeed.

use thiserror::Error;

use csvq_core::table::Table;
use csvq_planner::Command;

use crate::engine::TableEngine;
use crate::source::TableSource;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Engine(#[from] csvq_core::Error),

    #[error(transparent)]
    Io(#[from] csvq_io::Error),

    #[error("no table named '{0}'")]
    SourceNotFound(String),

    #[error("step {step} ({command}) failed: {source}")]
    Step {
        step: usize,
        command: String,
        #[source]
        source: Box<ExecError>,
    },
}

impl ExecError {
    /// The underlying error with step context removed.
    pub fn root(&self) -> &ExecError {
        match self {
            ExecError::Step { source, .. } => source.root(),
            other => other,
        }
    }
}

pub struct Runner<'a> {
    source: &'a dyn TableSource,
    engine: TableEngine,
}

impl<'a> Runner<'a> {
    pub fn new(source: &'a dyn TableSource) -> Self {
        Self {
            source,
            engine: TableEngine::new(),
        }
    }

    /// Run every command and return the final table.
    pub fn run(mut self, commands: &[Command]) -> Result<Table, ExecError> {
        for (i, cmd) in commands.iter().enumerate() {
            self.step(cmd).map_err(|e| ExecError::Step {
                step: i + 1,
                command: cmd.to_string(),
                source: Box::new(e),
            })?;
        }
        Ok(self.engine.into_table()?)
    }

    fn step(&mut self, cmd: &Command) -> Result<(), ExecError> {
        match cmd {
            Command::From { file } => {
                let records = self.source.read_records(file)?;
                self.engine.load(file, records)?;
            }
            Command::Select { columns } => self.engine.project(columns)?,
            Command::Take { n } => self.engine.limit(*n)?,
            Command::OrderBy { column } => self.engine.order_by(column)?,
            Command::Join { file, column } => {
                let records = self.source.read_records(file)?;
                self.engine.join_with(file, records, column)?;
            }
            Command::CountBy { column } => self.engine.count_by(column)?,
        }
        Ok(())
    }
}
