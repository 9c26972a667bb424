//! CLI error types

use rootfinding_solvers::equation::newton_raphson::{ConfigError, Error as SolveError};
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the `newtonraphson` binary.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("root finding failed: {0}")]
    Solve(#[from] SolveError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Solver failures exit with 1; bad input of any kind exits with 2.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Solve(_) | Self::Io(_) => 1,
            Self::InvalidArgument(_) | Self::Config(_) | Self::Json(_) => 2,
        }
    }
}
