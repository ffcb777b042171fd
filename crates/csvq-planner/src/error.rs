use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("missing {expected} after {command}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("malformed argument: {0}")]
    MalformedArgument(String),

    #[error("invalid pipeline: {0}")]
    Invalid(String),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
