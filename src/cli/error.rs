//! CLI-level errors (wraps collection errors)

use thiserror::Error;

use crate::errors::CollectionError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Collection(#[from] CollectionError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Config { .. } => crate::exitcode::CONFIG,
            CliError::Collection(e) => match e {
                CollectionError::EmptyCollection(_) => crate::exitcode::DATAERR,
                CollectionError::NodeNotFound { .. } => crate::exitcode::SOFTWARE,
            },
        }
    }
}
