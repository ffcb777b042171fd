//! Minimal YAML pipeline format.
//!
//! Example:
//! ```yaml
//! config:
//!   delimiter: ";"
//!   format: jsonl
//! steps:
//!   - op: from
//!     file: "data/people.csv"
//!   - op: join
//!     file: "data/cities.csv"
//!     column: city_id
//!   - op: select
//!     columns: ["name", "city"]
//!   - op: orderby
//!     column: name
//!   - op: take
//!     n: 10
//! ```

use serde::{Deserialize, Serialize};

use csvq_core::config::OutputFormat;

use crate::command::Command;
use crate::error::{PlanError, Result};
use crate::tokens::split_columns;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub config: Option<PipelineConfig>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "op")]
pub enum Step {
    From { file: String },

    /// `columns` may be a list or a single comma-separated string.
    Select { columns: Columns },

    Take { n: usize },

    #[serde(rename = "orderby")]
    OrderBy { column: String },

    Join { file: String, column: String },

    #[serde(rename = "countby")]
    CountBy { column: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Columns {
    List(Vec<String>),
    Joined(String),
}

impl From<Step> for Command {
    fn from(step: Step) -> Self {
        match step {
            Step::From { file } => Command::From { file },
            Step::Select { columns } => Command::Select {
                columns: match columns {
                    Columns::List(list) => list,
                    Columns::Joined(s) => split_columns(&s),
                },
            },
            Step::Take { n } => Command::Take { n },
            Step::OrderBy { column } => Command::OrderBy { column },
            Step::Join { file, column } => Command::Join { file, column },
            Step::CountBy { column } => Command::CountBy { column },
        }
    }
}

/// Reader/writer settings a pipeline file may carry. Command-line flags win
/// over these; these win over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub delimiter: Option<String>,
    pub output_delimiter: Option<String>,
    pub trim: Option<bool>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone)]
pub struct ParsedPipeline {
    pub commands: Vec<Command>,
    pub config: PipelineConfig,
}

pub fn parse_yaml_pipeline(yaml_src: &str) -> Result<ParsedPipeline> {
    let doc: Pipeline = serde_yaml::from_str(yaml_src)?;
    if doc.steps.is_empty() {
        return Err(PlanError::Invalid("pipeline has no steps".into()));
    }
    Ok(ParsedPipeline {
        commands: doc.steps.into_iter().map(Command::from).collect(),
        config: doc.config.unwrap_or_default(),
    })
}
